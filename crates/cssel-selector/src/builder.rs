//! Compound selector assembly.
//!
//! A [`SelectorBuilder`] accumulates the fragments of one compound selector
//! and rejects any fragment that would break the canonical order
//! `element#id.class[attr]:pseudo-class::pseudo-element`, or that would set
//! a single-valued kind twice.

use std::fmt;

use cssel_common::json::{self, JsonError};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::error::SelectorError;
use crate::kind::FragmentKind;
use crate::render::Render;

/// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
/// "A selector's specificity is calculated for a given element as follows:
///  - count the number of ID selectors in the selector (= A)
///  - count the number of class selectors, attributes selectors, and pseudo-classes in the selector (= B)
///  - count the number of type selectors and pseudo-elements in the selector (= C)
///
/// Specificities are compared by comparing the three components in order."
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Specificity(pub u32, pub u32, pub u32);

/// A mutable accumulator for the fragments of one compound selector.
///
/// Fragments are stored already decorated (`#id`, `.class`, `[attr]`, ...)
/// so rendering is plain concatenation.
///
/// Deserializing restores the fields exactly as written; the ordering and
/// cardinality checks only guard the mutation methods.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectorBuilder {
    element: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<String>,
    pseudo_classes: Vec<String>,
    pseudo_element: Option<String>,
}

impl SelectorBuilder {
    /// Create an empty builder. Renders as the empty string.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder holding a single fragment.
    ///
    /// A fresh builder accepts any one fragment, so this cannot fail.
    #[must_use]
    pub fn seeded(kind: FragmentKind, value: impl Into<String>) -> Self {
        let mut builder = Self::new();
        builder.store(kind, value.into());
        builder
    }

    /// Whether no fragment has been added yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.highest_kind().is_none()
    }

    /// Whether at least one fragment of `kind` is present.
    #[must_use]
    pub fn contains(&self, kind: FragmentKind) -> bool {
        match kind {
            FragmentKind::Element => self.element.is_some(),
            FragmentKind::Id => self.id.is_some(),
            FragmentKind::Class => !self.classes.is_empty(),
            FragmentKind::Attribute => !self.attributes.is_empty(),
            FragmentKind::PseudoClass => !self.pseudo_classes.is_empty(),
            FragmentKind::PseudoElement => self.pseudo_element.is_some(),
        }
    }

    /// The highest-ranked kind currently present, if any.
    ///
    /// This is the only state the order check consults.
    #[must_use]
    pub fn highest_kind(&self) -> Option<FragmentKind> {
        FragmentKind::iter().rev().find(|&kind| self.contains(kind))
    }

    /// Add a fragment of any kind.
    ///
    /// All the typed mutation methods go through here.
    ///
    /// # Errors
    ///
    /// - [`SelectorError::OrderViolation`] if a kind ranked after `kind` is
    ///   already present.
    /// - [`SelectorError::DuplicateFragment`] if `kind` is single-valued and
    ///   already set.
    ///
    /// On error the builder is unchanged.
    pub fn add_fragment(
        &mut self,
        kind: FragmentKind,
        value: impl Into<String>,
    ) -> Result<&mut Self, SelectorError> {
        self.push(kind, value.into())?;
        Ok(self)
    }

    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Set the element (type) name.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] if any other kind is present,
    /// [`SelectorError::DuplicateFragment`] if the element is already set.
    pub fn set_element(&mut self, value: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.add_fragment(FragmentKind::Element, value)
    }

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Set the id, stored as `#value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] if a class, attribute, pseudo-class
    /// or pseudo-element is present, [`SelectorError::DuplicateFragment`] if
    /// the id is already set.
    pub fn set_id(&mut self, value: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.add_fragment(FragmentKind::Id, value)
    }

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Append a class, stored as `.value`. Repeats are allowed.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] if an attribute, pseudo-class or
    /// pseudo-element is present.
    pub fn add_class(&mut self, value: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.add_fragment(FragmentKind::Class, value)
    }

    /// Append an attribute selector, stored as `[value]`. The bracket
    /// contents are not checked.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] if a pseudo-class or pseudo-element
    /// is present.
    pub fn add_attribute(&mut self, value: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.add_fragment(FragmentKind::Attribute, value)
    }

    /// Append a pseudo-class, stored as `:value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] if the pseudo-element is set.
    pub fn add_pseudo_class(
        &mut self,
        value: impl Into<String>,
    ) -> Result<&mut Self, SelectorError> {
        self.add_fragment(FragmentKind::PseudoClass, value)
    }

    /// Set the pseudo-element, stored as `::value`.
    ///
    /// Pseudo-elements rank last, so only the duplicate check applies.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateFragment`] if the pseudo-element is already set.
    pub fn set_pseudo_element(
        &mut self,
        value: impl Into<String>,
    ) -> Result<&mut Self, SelectorError> {
        self.add_fragment(FragmentKind::PseudoElement, value)
    }

    // By-value chaining

    /// Chaining form of [`set_element`](Self::set_element).
    ///
    /// # Errors
    ///
    /// Same as [`set_element`](Self::set_element).
    pub fn element(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.with(FragmentKind::Element, value.into())
    }

    /// Chaining form of [`set_id`](Self::set_id).
    ///
    /// # Errors
    ///
    /// Same as [`set_id`](Self::set_id).
    pub fn id(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.with(FragmentKind::Id, value.into())
    }

    /// Chaining form of [`add_class`](Self::add_class).
    ///
    /// # Errors
    ///
    /// Same as [`add_class`](Self::add_class).
    pub fn class(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.with(FragmentKind::Class, value.into())
    }

    /// Chaining form of [`add_attribute`](Self::add_attribute).
    ///
    /// # Errors
    ///
    /// Same as [`add_attribute`](Self::add_attribute).
    pub fn attr(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.with(FragmentKind::Attribute, value.into())
    }

    /// Chaining form of [`add_pseudo_class`](Self::add_pseudo_class).
    ///
    /// # Errors
    ///
    /// Same as [`add_pseudo_class`](Self::add_pseudo_class).
    pub fn pseudo_class(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.with(FragmentKind::PseudoClass, value.into())
    }

    /// Chaining form of [`set_pseudo_element`](Self::set_pseudo_element).
    ///
    /// # Errors
    ///
    /// Same as [`set_pseudo_element`](Self::set_pseudo_element).
    pub fn pseudo_element(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.with(FragmentKind::PseudoElement, value.into())
    }

    /// Specificity of the compound selector as built so far.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        // [§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules)
        // "count the number of ID selectors in the selector (= A)"
        let ids = u32::from(self.id.is_some());

        // "count the number of class selectors, attributes selectors,
        // and pseudo-classes in the selector (= B)"
        let qualifiers = self.classes.len() + self.attributes.len() + self.pseudo_classes.len();
        let qualifiers = u32::try_from(qualifiers).unwrap_or(u32::MAX);

        // "count the number of type selectors and pseudo-elements
        // in the selector (= C)"
        let types = u32::from(self.element.is_some()) + u32::from(self.pseudo_element.is_some());

        Specificity(ids, qualifiers, types)
    }

    /// Serialize the builder's fragments as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`JsonError::Serialize`] if serialization fails.
    pub fn to_json(&self) -> Result<String, JsonError> {
        json::to_json(self)
    }

    /// Restore a builder from JSON written by [`to_json`](Self::to_json).
    ///
    /// Fields are taken as they are; missing fields default to empty.
    ///
    /// # Errors
    ///
    /// Returns [`JsonError::Deserialize`] if the text is not a builder record.
    pub fn from_json(text: &str) -> Result<Self, JsonError> {
        json::from_json(text)
    }

    fn with(mut self, kind: FragmentKind, value: String) -> Result<Self, SelectorError> {
        self.push(kind, value)?;
        Ok(self)
    }

    fn push(&mut self, kind: FragmentKind, value: String) -> Result<(), SelectorError> {
        self.check(kind)?;
        self.store(kind, value);
        Ok(())
    }

    /// Validate that a fragment of `kind` may be added. Order is checked before
    /// cardinality.
    fn check(&self, kind: FragmentKind) -> Result<(), SelectorError> {
        if let Some(after) = self.highest_kind().filter(|&highest| highest > kind) {
            return Err(SelectorError::OrderViolation { kind, after });
        }
        if !kind.is_repeatable() && self.contains(kind) {
            return Err(SelectorError::DuplicateFragment { kind });
        }
        Ok(())
    }

    fn store(&mut self, kind: FragmentKind, value: String) {
        let token = kind.decorate(value);
        match kind {
            FragmentKind::Element => self.element = Some(token),
            FragmentKind::Id => self.id = Some(token),
            FragmentKind::Class => self.classes.push(token),
            FragmentKind::Attribute => self.attributes.push(token),
            FragmentKind::PseudoClass => self.pseudo_classes.push(token),
            FragmentKind::PseudoElement => self.pseudo_element = Some(token),
        }
    }

    /// Stored tokens in canonical order.
    fn tokens(&self) -> impl Iterator<Item = &str> {
        self.element
            .iter()
            .chain(&self.id)
            .chain(&self.classes)
            .chain(&self.attributes)
            .chain(&self.pseudo_classes)
            .chain(&self.pseudo_element)
            .map(String::as_str)
    }
}

impl Render for SelectorBuilder {
    fn render(&self) -> String {
        self.tokens().collect()
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tokens().try_for_each(|token| f.write_str(token))
    }
}
