//! The rendering capability shared by builders and combiners.

/// Anything that can be written out as selector text.
///
/// Implemented by [`SelectorBuilder`](crate::SelectorBuilder) and
/// [`Combiner`](crate::Combiner), so either side of a
/// [`combine`](crate::combine) call can be a nested combination.
pub trait Render {
    /// The selector text. Never mutates and never fails.
    #[must_use]
    fn render(&self) -> String;
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self) -> String {
        (**self).render()
    }
}

impl<T: Render + ?Sized> Render for Box<T> {
    fn render(&self) -> String {
        (**self).render()
    }
}
