//! Fragment kinds and their canonical order.

use strum_macros::{Display, EnumIter, EnumString};

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator."
///
/// The kinds of fragment a compound selector is assembled from, declared in
/// the order they must appear: `element#id.class[attr]:pseudo-class::pseudo-element`.
/// The derived `Ord` is that canonical rank.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum FragmentKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Examples: `div`, `a`, `table`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// "An ID selector is a hash (#, U+0023) immediately followed by the
    /// ID value, which is an identifier."
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// "The class selector is given as a full stop (. U+002E) immediately
    /// followed by an identifier."
    Class,

    /// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// The value is the bracket contents, e.g. `href$=".png"`.
    #[strum(to_string = "attribute", serialize = "attr")]
    Attribute,

    /// [§ 3.5 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// The value may carry arguments, e.g. `nth-of-type(even)`.
    PseudoClass,

    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    PseudoElement,
}

impl FragmentKind {
    /// Whether a compound selector may hold more than one fragment of this kind.
    #[must_use]
    pub const fn is_repeatable(self) -> bool {
        matches!(self, Self::Class | Self::Attribute | Self::PseudoClass)
    }

    /// Wrap a raw value in this kind's selector syntax.
    ///
    /// The value itself is not validated.
    #[must_use]
    pub fn decorate(self, value: String) -> String {
        match self {
            Self::Element => value,
            Self::Id => format!("#{value}"),
            Self::Class => format!(".{value}"),
            Self::Attribute => format!("[{value}]"),
            Self::PseudoClass => format!(":{value}"),
            Self::PseudoElement => format!("::{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_canonical_order() {
        let kinds: Vec<_> = FragmentKind::iter().collect();
        let mut sorted = kinds.clone();
        sorted.sort();
        assert_eq!(kinds, sorted);
        assert_eq!(kinds.first(), Some(&FragmentKind::Element));
        assert_eq!(kinds.last(), Some(&FragmentKind::PseudoElement));
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(FragmentKind::PseudoClass.to_string(), "pseudo-class");
        assert_eq!(FragmentKind::Attribute.to_string(), "attribute");
        assert_eq!("attr".parse::<FragmentKind>(), Ok(FragmentKind::Attribute));
        assert_eq!("attribute".parse::<FragmentKind>(), Ok(FragmentKind::Attribute));
        assert_eq!("Pseudo-Element".parse::<FragmentKind>(), Ok(FragmentKind::PseudoElement));
        assert!("selector".parse::<FragmentKind>().is_err());
    }

    #[test]
    fn test_decorate() {
        let decorated: Vec<_> = FragmentKind::iter()
            .map(|kind| kind.decorate("x".to_string()))
            .collect();
        assert_eq!(decorated, ["x", "#x", ".x", "[x]", ":x", "::x"]);
    }

    #[test]
    fn test_repeatable_kinds() {
        let repeatable: Vec<_> = FragmentKind::iter()
            .filter(|kind| kind.is_repeatable())
            .collect();
        assert_eq!(
            repeatable,
            [
                FragmentKind::Class,
                FragmentKind::Attribute,
                FragmentKind::PseudoClass
            ]
        );
    }
}
