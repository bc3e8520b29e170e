use core::fmt;

use crate::{
    Ranged, Sequence,
    iter::ReversedIter,
    range::last_coordinate,
    sequence::write_elements,
};

/// The wrapped sequence back to front.
///
/// Index `i` of the view is index `last_index - i` of the wrapped sequence.
#[derive(Clone, Copy)]
pub struct Reversed<S> {
    wrapped: S,
}

impl<S: Sequence> Reversed<S> {
    pub fn new(wrapped: S) -> Self {
        Reversed { wrapped }
    }

    /// The wrapped sequence, in its original order.
    pub fn inner(&self) -> &S {
        &self.wrapped
    }

    pub fn into_inner(self) -> S {
        self.wrapped
    }

    pub fn iter(&self) -> ReversedIter<'_, S> {
        ReversedIter::new(&self.wrapped)
    }

    /// The last coordinate of the wrapped sequence; `-1` when empty.
    fn end(&self) -> isize {
        last_coordinate(self.wrapped.size())
    }
}

impl<T: Sequence + Clone> Reversed<&T> {
    /// A reversed view over a clone of the wrapped sequence.
    pub fn detach(&self) -> Reversed<T> {
        tracing::trace!(size = self.wrapped.size(), "Detaching reversed view");
        Reversed::new(self.wrapped.clone())
    }
}

impl<S: Sequence> Sequence for Reversed<S> {
    type Element = S::Element;

    fn last_index(&self) -> Option<usize> {
        self.wrapped.last_index()
    }

    fn get(&self, index: usize) -> Option<S::Element> {
        let last = self.wrapped.last_index()?;
        self.wrapped.get(last.checked_sub(index)?)
    }

    fn size(&self) -> usize {
        self.wrapped.size()
    }

    fn first(&self) -> Option<S::Element> {
        self.wrapped.last()
    }

    fn last(&self) -> Option<S::Element> {
        self.wrapped.first()
    }
}

impl<S: Ranged> Ranged for Reversed<S> {
    type Range = S::Range;

    fn span(&self, from: isize, to: isize) -> S::Range {
        if self.wrapped.is_empty() {
            return self.wrapped.empty_range();
        }
        let last = self.end();
        self.wrapped
            .span(last.saturating_sub(from), last.saturating_sub(to))
    }

    fn span_from(&self, from: isize) -> S::Range {
        let last = self.end();
        if self.wrapped.is_empty() || from > last {
            return self.wrapped.empty_range();
        }
        self.wrapped.span(last.saturating_sub(from), 0)
    }

    fn span_to(&self, to: isize) -> S::Range {
        if self.wrapped.is_empty() || to < 0 {
            return self.wrapped.empty_range();
        }
        let last = self.end();
        self.wrapped.span(last, last.saturating_sub(to))
    }

    /// Maps to a descending span of the wrapped sequence starting at
    /// `last_index - from`.
    fn segment(&self, from: isize, length: isize) -> S::Range {
        if self.wrapped.is_empty() || length <= 0 {
            return self.wrapped.empty_range();
        }
        let start = self.end().saturating_sub(from);
        self.wrapped.span(start, start.saturating_sub(length - 1))
    }

    fn empty_range(&self) -> S::Range {
        self.wrapped.empty_range()
    }
}

impl_view_traits!(Reversed);

impl<S> fmt::Display for Reversed<S>
where
    S: Sequence,
    S::Element: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_elements(f, self.iter())
    }
}

impl<'a, S: Sequence> IntoIterator for &'a Reversed<S> {
    type Item = S::Element;
    type IntoIter = ReversedIter<'a, S>;

    fn into_iter(self) -> ReversedIter<'a, S> {
        self.iter()
    }
}

#[cfg(test)]
#[path = "reversed_test.rs"]
mod reversed_test;
