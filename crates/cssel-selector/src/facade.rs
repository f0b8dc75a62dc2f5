//! Entry points: one function per fragment kind, plus [`combine`].
//!
//! Every call returns a fresh value; nothing is shared between calls.

use cssel_common::warning::warn_once;

use crate::builder::SelectorBuilder;
use crate::combiner::{Combinator, Combiner};
use crate::kind::FragmentKind;
use crate::render::Render;

/// Start a selector with an element name: `div`.
#[must_use]
pub fn element(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::seeded(FragmentKind::Element, value)
}

/// Start a selector with an id: `#main`.
#[must_use]
pub fn id(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::seeded(FragmentKind::Id, value)
}

/// Start a selector with a class: `.container`.
#[must_use]
pub fn class(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::seeded(FragmentKind::Class, value)
}

/// Start a selector with an attribute selector: `[href$=".png"]`.
#[must_use]
pub fn attr(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::seeded(FragmentKind::Attribute, value)
}

/// Start a selector with a pseudo-class: `:focus`.
#[must_use]
pub fn pseudo_class(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::seeded(FragmentKind::PseudoClass, value)
}

/// Start a selector with a pseudo-element: `::before`.
#[must_use]
pub fn pseudo_element(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::seeded(FragmentKind::PseudoElement, value)
}

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// "A complex selector is a chain of one or more compound selectors separated
/// by combinators."
///
/// Render both sides and join them as `"left combinator right"`. Either side
/// may itself be a [`Combiner`], so chains nest to any depth.
///
/// The symbol is used exactly as given. Anything other than `" "`, `">"`,
/// `"+"` or `"~"` is still accepted but reported once through the warning
/// system.
#[must_use]
pub fn combine<L, R>(left: &L, combinator: &str, right: &R) -> Combiner
where
    L: Render + ?Sized,
    R: Render + ?Sized,
{
    if Combinator::from_symbol(combinator).is_none() {
        warn_once(
            "Selector",
            &format!("non-standard combinator '{combinator}' used verbatim"),
        );
    }
    Combiner::new(&left.render(), combinator, &right.render())
}
