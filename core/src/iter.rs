//! Single-pass cursors over sequences and views.
//!
//! Constructing a cursor does no work; each one owns a private position and
//! never shares it with other cursors over the same sequence.

use core::iter::FusedIterator;
use core::ops::Range;

use crate::{Sequence, error::expect_defined};

/// The generic cursor behind [`Sequence::iter`].
///
/// Walks `0..=last_index` through `get`. A defined index without an element
/// is a contract violation and panics.
pub struct Iter<'a, S: Sequence + ?Sized> {
    seq: &'a S,
    front: usize,
    back: usize,
}

impl<'a, S: Sequence + ?Sized> Iter<'a, S> {
    pub fn new(seq: &'a S) -> Self {
        Iter {
            seq,
            front: 0,
            back: seq.size(),
        }
    }
}

impl<S: Sequence + ?Sized> Clone for Iter<'_, S> {
    fn clone(&self) -> Self {
        Iter {
            seq: self.seq,
            front: self.front,
            back: self.back,
        }
    }
}

impl<S: Sequence + ?Sized> Iterator for Iter<'_, S> {
    type Item = S::Element;

    fn next(&mut self) -> Option<S::Element> {
        if self.front == self.back {
            return None;
        }
        let index = self.front;
        self.front += 1;
        Some(expect_defined(self.seq, index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<S: Sequence + ?Sized> DoubleEndedIterator for Iter<'_, S> {
    fn next_back(&mut self) -> Option<S::Element> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(expect_defined(self.seq, self.back))
    }
}

impl<S: Sequence + ?Sized> ExactSizeIterator for Iter<'_, S> {}

impl<S: Sequence + ?Sized> FusedIterator for Iter<'_, S> {}

/// Cursor over [`Keys`](crate::Keys): `0..size` of the wrapped sequence.
#[derive(Debug, Clone)]
pub struct KeysIter {
    range: Range<usize>,
}

impl KeysIter {
    pub(crate) fn new(size: usize) -> Self {
        KeysIter { range: 0..size }
    }
}

impl Iterator for KeysIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.range.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl DoubleEndedIterator for KeysIter {
    fn next_back(&mut self) -> Option<usize> {
        self.range.next_back()
    }
}

impl ExactSizeIterator for KeysIter {}

impl FusedIterator for KeysIter {}

/// Cursor over [`Rest`](crate::Rest).
///
/// Drives a cursor over the wrapped sequence and discards exactly `offset`
/// elements from it before yielding the first one.
pub struct RestIter<'a, S: Sequence + ?Sized> {
    inner: Iter<'a, S>,
    skip: usize,
}

impl<'a, S: Sequence + ?Sized> RestIter<'a, S> {
    pub(crate) fn new(wrapped: &'a S, offset: usize) -> Self {
        RestIter {
            inner: Iter::new(wrapped),
            skip: offset,
        }
    }
}

impl<S: Sequence + ?Sized> Iterator for RestIter<'_, S> {
    type Item = S::Element;

    fn next(&mut self) -> Option<S::Element> {
        while self.skip > 0 {
            self.skip -= 1;
            self.inner.next();
        }
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.inner.len().saturating_sub(self.skip);
        (remaining, Some(remaining))
    }
}

impl<S: Sequence + ?Sized> ExactSizeIterator for RestIter<'_, S> {}

impl<S: Sequence + ?Sized> FusedIterator for RestIter<'_, S> {}

/// Cursor over [`Reversed`](crate::Reversed).
///
/// Reads wrapped indexes `size - 1` down to `0` directly rather than
/// translating every position through the view.
pub struct ReversedIter<'a, S: Sequence + ?Sized> {
    wrapped: &'a S,
    remaining: usize,
}

impl<'a, S: Sequence + ?Sized> ReversedIter<'a, S> {
    pub(crate) fn new(wrapped: &'a S) -> Self {
        ReversedIter {
            wrapped,
            remaining: wrapped.size(),
        }
    }
}

impl<S: Sequence + ?Sized> Iterator for ReversedIter<'_, S> {
    type Item = S::Element;

    fn next(&mut self) -> Option<S::Element> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(expect_defined(self.wrapped, self.remaining))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<S: Sequence + ?Sized> ExactSizeIterator for ReversedIter<'_, S> {}

impl<S: Sequence + ?Sized> FusedIterator for ReversedIter<'_, S> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Array;

    #[test]
    fn iter_is_restartable() {
        let arr = Array::from([1, 2, 3]);
        let first: Array<i32> = arr.iter().collect();
        let second: Array<i32> = arr.iter().collect();
        assert_eq!(first, second);
        assert_eq!(first, [1, 2, 3]);
    }

    #[test]
    fn independent_cursors_do_not_interfere() {
        let arr = Array::from([1, 2, 3]);
        let mut a = arr.iter();
        let mut b = arr.iter();
        assert_eq!(a.next(), Some(1));
        assert_eq!(a.next(), Some(2));
        assert_eq!(b.next(), Some(1));
        assert_eq!(a.next(), Some(3));
        assert_eq!(a.next(), None);
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn iter_from_both_ends() {
        let arr = Array::from([1, 2, 3, 4]);
        let mut it = arr.iter();
        assert_eq!(it.next_back(), Some(4));
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next_back(), Some(3));
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn rest_iter_skips_offset_once() {
        let arr = Array::from([1, 2, 3, 4]);
        let mut it = RestIter::new(&arr, 2);
        assert_eq!(it.len(), 2);
        assert_eq!(it.next(), Some(3));
        assert_eq!(it.next(), Some(4));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn rest_iter_offset_past_end() {
        let arr = Array::from([1, 2]);
        let mut it = RestIter::new(&arr, 5);
        assert_eq!(it.len(), 0);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn reversed_iter_walks_backwards() {
        let arr = Array::from(['a', 'b', 'c']);
        let collected: Array<char> = ReversedIter::new(&arr).collect();
        assert_eq!(collected, ['c', 'b', 'a']);
    }

    #[test]
    fn keys_iter_counts_up() {
        let collected: Array<usize> = KeysIter::new(3).collect();
        assert_eq!(collected, [0, 1, 2]);
        assert_eq!(KeysIter::new(0).next(), None);
    }
}
