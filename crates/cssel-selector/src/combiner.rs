//! Joining rendered selectors with combinators.

use std::fmt;

use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::render::Render;

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors."
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two compound
    /// selectors."
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two compound
    /// selectors."
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two compound
    /// selectors."
    SubsequentSibling,
}

impl Combinator {
    /// The symbol written between the two selectors.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }

    /// Look up the combinator written as `symbol`, if it is one of the four.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::iter().find(|combinator| combinator.symbol() == symbol)
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Two rendered selectors joined by a combinator symbol.
///
/// Only the finished text is kept, so a combiner can be combined again
/// without being a builder itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combiner {
    text: String,
}

impl Combiner {
    /// Join `left` and `right` as `"left combinator right"`, with exactly one
    /// space on each side of the symbol as supplied.
    #[must_use]
    pub fn new(left: &str, combinator: &str, right: &str) -> Self {
        Self {
            text: format!("{left} {combinator} {right}"),
        }
    }
}

impl Render for Combiner {
    fn render(&self) -> String {
        self.text.clone()
    }
}

impl fmt::Display for Combiner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_round_trip() {
        for combinator in Combinator::iter() {
            assert_eq!(Combinator::from_symbol(combinator.symbol()), Some(combinator));
        }
        assert_eq!(Combinator::from_symbol("||"), None);
        assert_eq!(Combinator::from_symbol(""), None);
    }

    #[test]
    fn test_combiner_pads_symbol() {
        let combiner = Combiner::new("ul", ">", "li");
        assert_eq!(combiner.render(), "ul > li");
        assert_eq!(combiner.to_string(), "ul > li");
    }
}
