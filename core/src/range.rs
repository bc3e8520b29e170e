//! The range surface: `segment`, `span`, `span_from` and `span_to`.
//!
//! Coordinates are signed. Out-of-range coordinates clamp to the sequence
//! instead of failing, and a span whose `from` is greater than its `to`
//! yields the covered elements in descending order.

use crate::{Sequence, error::expect_defined};

/// A [`Sequence`] that can produce sub-ranges of itself.
///
/// Concrete sequences produce their own type (`Range = Self`). Views produce
/// the range type of the sequence they wrap, translating coordinates instead
/// of copying anything themselves.
pub trait Ranged: Sequence {
    type Range: Ranged<Element = Self::Element>;

    /// The elements from `from` to `to`, both inclusive.
    ///
    /// Descending when `from > to`.
    fn span(&self, from: isize, to: isize) -> Self::Range;

    /// The elements from `from` to the end.
    fn span_from(&self, from: isize) -> Self::Range;

    /// The elements from the start up to `to`, inclusive.
    fn span_to(&self, to: isize) -> Self::Range;

    /// `length` elements starting at `from`. Empty when `length <= 0`.
    fn segment(&self, from: isize, length: isize) -> Self::Range;

    /// An empty range of this sequence's range type.
    fn empty_range(&self) -> Self::Range {
        self.span_to(-1)
    }

    /// Strips the elements satisfying `trimming` from both ends.
    ///
    /// Empty if every element satisfies `trimming`.
    fn trim(&self, mut trimming: impl FnMut(&Self::Element) -> bool) -> Self::Range {
        let Some(last) = self.last_index() else {
            return self.empty_range();
        };
        let Some(from) = (0..=last).find(|&i| !trimming(&expect_defined(self, i))) else {
            return self.empty_range();
        };
        // `from` itself is kept, so the backward scan always stops by then.
        let to = (from..=last)
            .rev()
            .find(|&i| !trimming(&expect_defined(self, i)))
            .unwrap_or(from);
        self.span(coordinate(from), coordinate(to))
    }

    fn trim_leading(&self, mut trimming: impl FnMut(&Self::Element) -> bool) -> Self::Range {
        let Some(last) = self.last_index() else {
            return self.empty_range();
        };
        match (0..=last).find(|&i| !trimming(&expect_defined(self, i))) {
            Some(from) => self.span_from(coordinate(from)),
            None => self.empty_range(),
        }
    }

    fn trim_trailing(&self, mut trimming: impl FnMut(&Self::Element) -> bool) -> Self::Range {
        let Some(last) = self.last_index() else {
            return self.empty_range();
        };
        match (0..=last)
            .rev()
            .find(|&i| !trimming(&expect_defined(self, i)))
        {
            Some(to) => self.span_to(coordinate(to)),
            None => self.empty_range(),
        }
    }

    /// The first `min(length, size)` elements.
    fn initial(&self, length: isize) -> Self::Range {
        self.segment(0, length)
    }

    /// The last `min(length, size)` elements. Empty when `length <= 0`.
    fn terminal(&self, length: isize) -> Self::Range {
        match self.last_index() {
            Some(last) if length > 0 => {
                let last = coordinate(last);
                self.span(last.saturating_sub(length - 1), last)
            }
            _ => self.empty_range(),
        }
    }
}

/// Converts an index into a range coordinate, saturating at `isize::MAX`.
pub(crate) fn coordinate(index: usize) -> isize {
    isize::try_from(index).unwrap_or(isize::MAX)
}

/// The last coordinate of a sequence of `size` elements, `-1` when empty.
pub(crate) fn last_coordinate(size: usize) -> isize {
    coordinate(size) - 1
}

/// A resolved, non-empty run of indexes into a sequence of known size.
///
/// `low..=high` is always inside the sequence; `descending` says which end
/// the run starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Window {
    low: usize,
    high: usize,
    descending: bool,
}

impl Window {
    pub(crate) fn span(size: usize, from: isize, to: isize) -> Option<Self> {
        let last = last_coordinate(size);
        let (low, high, descending) = if from <= to {
            (from, to, false)
        } else {
            (to, from, true)
        };
        if high < 0 || low > last {
            return None;
        }
        // Both bounds are now within `0..=last`, so the casts are lossless.
        Some(Window {
            low: low.max(0) as usize,
            high: high.min(last) as usize,
            descending,
        })
    }

    pub(crate) fn span_from(size: usize, from: isize) -> Option<Self> {
        let last = last_coordinate(size);
        if from > last {
            return None;
        }
        Self::span(size, from, last)
    }

    pub(crate) fn span_to(size: usize, to: isize) -> Option<Self> {
        if to < 0 {
            return None;
        }
        Self::span(size, 0, to)
    }

    pub(crate) fn segment(size: usize, from: isize, length: isize) -> Option<Self> {
        if length <= 0 {
            return None;
        }
        Self::span(size, from, from.saturating_add(length - 1))
    }

    pub(crate) fn len(&self) -> usize {
        self.high - self.low + 1
    }

    /// The index of the `position`-th element of the run.
    pub(crate) fn index(&self, position: usize) -> usize {
        if self.descending {
            self.high - position
        } else {
            self.low + position
        }
    }

    pub(crate) fn indexes(self) -> impl Iterator<Item = usize> {
        (0..self.len()).map(move |position| self.index(position))
    }
}

#[cfg(test)]
#[path = "range_test.rs"]
mod range_test;
