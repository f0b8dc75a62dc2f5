//! Typed CSS selector assembly.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selectors** ([§ 4.2](https://www.w3.org/TR/selectors-4/#compound))
//!   - Element, id, class, attribute, pseudo-class and pseudo-element fragments
//!   - Canonical order `element#id.class[attr]:pseudo-class::pseudo-element`
//!   - At most one element, id and pseudo-element
//!   - Specificity calculation
//!
//! - **Complex selectors** ([§ 4.3](https://www.w3.org/TR/selectors-4/#complex))
//!   - Joining any two rendered selectors with a combinator, nested to any depth
//!
//! # Not Implemented
//!
//! - Parsing selector text
//! - Validating attribute values or pseudo-class arguments
//!
//! # Example
//!
//! ```
//! use cssel_selector::{self as css, Render};
//!
//! let link = css::element("a").attr(r#"href$=".png""#)?.pseudo_class("focus")?;
//! assert_eq!(link.render(), r#"a[href$=".png"]:focus"#);
//!
//! let pair = css::combine(&css::element("div").id("main")?, "+", &css::element("p"));
//! assert_eq!(pair.render(), "div#main + p");
//! # Ok::<(), css::SelectorError>(())
//! ```

/// Compound selector builder and specificity.
pub mod builder;
/// Combinators and the combined-selector value.
pub mod combiner;
/// Errors raised by builder mutations.
pub mod error;
/// Factory functions, one per fragment kind, and `combine`.
pub mod facade;
/// Fragment kinds in canonical order.
pub mod kind;
/// The `Render` capability.
pub mod render;

pub use builder::{SelectorBuilder, Specificity};
pub use combiner::{Combinator, Combiner};
pub use cssel_common::json::JsonError;
pub use error::SelectorError;
pub use facade::{attr, class, combine, element, id, pseudo_class, pseudo_element};
pub use kind::FragmentKind;
pub use render::Render;
