//! Errors raised while assembling a compound selector.

use thiserror::Error;

use crate::kind::FragmentKind;

/// Error type for selector mutations.
///
/// Both variants are reported at the offending call; the builder keeps the
/// state it had before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A fragment was added after a fragment that must follow it.
    #[error(
        "cannot add {kind} after {after}: selector parts should be arranged in the following order: \
         element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OrderViolation {
        /// The kind that was being added.
        kind: FragmentKind,
        /// The highest-ranked kind already present.
        after: FragmentKind,
    },

    /// An element, id, or pseudo-element was set a second time.
    #[error("{kind} should not occur more than one time inside the selector")]
    DuplicateFragment {
        /// The kind that was already set.
        kind: FragmentKind,
    },
}

impl SelectorError {
    /// The fragment kind whose addition failed.
    #[must_use]
    pub const fn kind(self) -> FragmentKind {
        match self {
            Self::OrderViolation { kind, .. } | Self::DuplicateFragment { kind } => kind,
        }
    }
}
