use core::fmt;

use crate::{
    Ranged, Sequence,
    iter::RestIter,
    range::coordinate,
    sequence::write_elements,
};

/// The wrapped sequence without its first `offset` elements.
///
/// Index `i` of the view is index `i + offset` of the wrapped sequence.
#[derive(Clone, Copy)]
pub struct Rest<S> {
    wrapped: S,
    offset: usize,
}

impl<S: Sequence> Rest<S> {
    pub fn new(wrapped: S, offset: usize) -> Self {
        Rest { wrapped, offset }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn into_inner(self) -> S {
        self.wrapped
    }

    /// A cursor that skips `offset` wrapped elements on its first pull.
    pub fn iter(&self) -> RestIter<'_, S> {
        RestIter::new(&self.wrapped, self.offset)
    }

    /// Maps a view coordinate to the wrapped sequence. Negative coordinates
    /// clamp to the start of the view, never reaching before `offset`.
    fn shift(&self, at: isize) -> isize {
        at.max(0).saturating_add(coordinate(self.offset))
    }
}

impl<T: Sequence + Clone> Rest<&T> {
    /// A view with the same offset over a clone of the wrapped sequence.
    pub fn detach(&self) -> Rest<T> {
        tracing::trace!(offset = self.offset, "Detaching rest view");
        Rest::new(self.wrapped.clone(), self.offset)
    }
}

impl<S: Sequence> Sequence for Rest<S> {
    type Element = S::Element;

    fn last_index(&self) -> Option<usize> {
        self.wrapped.size().checked_sub(self.offset)?.checked_sub(1)
    }

    fn get(&self, index: usize) -> Option<S::Element> {
        self.wrapped.get(index.checked_add(self.offset)?)
    }
}

impl<S: Ranged> Ranged for Rest<S> {
    type Range = S::Range;

    fn span(&self, from: isize, to: isize) -> S::Range {
        if from.max(to) < 0 {
            return self.wrapped.empty_range();
        }
        self.wrapped.span(self.shift(from), self.shift(to))
    }

    fn span_from(&self, from: isize) -> S::Range {
        self.wrapped.span_from(self.shift(from))
    }

    fn span_to(&self, to: isize) -> S::Range {
        if to < 0 {
            return self.wrapped.empty_range();
        }
        self.wrapped.span(self.shift(0), self.shift(to))
    }

    fn segment(&self, from: isize, length: isize) -> S::Range {
        if length <= 0 {
            return self.wrapped.empty_range();
        }
        let to = from.saturating_add(length - 1);
        if to < 0 {
            return self.wrapped.empty_range();
        }
        self.wrapped.span(self.shift(from), self.shift(to))
    }

    fn empty_range(&self) -> S::Range {
        self.wrapped.empty_range()
    }
}

impl_view_traits!(Rest);

impl<S> fmt::Display for Rest<S>
where
    S: Sequence,
    S::Element: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_elements(f, self.iter())
    }
}

impl<'a, S: Sequence> IntoIterator for &'a Rest<S> {
    type Item = S::Element;
    type IntoIter = RestIter<'a, S>;

    fn into_iter(self) -> RestIter<'a, S> {
        self.iter()
    }
}

#[cfg(test)]
#[path = "rest_test.rs"]
mod rest_test;
