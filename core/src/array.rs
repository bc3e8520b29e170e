//! `Array<T>`: an owned, fixed-length sequence.
//!
//! This is the structural-copy counterpart of the views. Every operation that
//! has to materialize elements (`with_leading`, `with_trailing`, the ranges of
//! [`Keys`](crate::Keys), spans of slices) produces an `Array`.
//!
//! # Example
//!
//! ```
//! use sequin_core::{Array, Ranged, Sequence};
//!
//! let arr = Array::from([1, 2, 3, 4, 5]);
//! assert_eq!(arr.get(1), Some(2));
//! assert_eq!(arr.span(3, 1), [4, 3, 2]);
//! assert_eq!(arr.reversed(), [5, 4, 3, 2, 1]);
//! ```

use core::fmt;
use core::hash::{Hash, Hasher};

use alloc::vec::Vec;
use smallvec::SmallVec;

use crate::{
    Ranged, Sequence,
    hash::ElementHash,
    iter::Iter,
    range::Window,
    sequence::write_elements,
};

/// Short arrays stay inline.
const INLINE: usize = 4;

#[derive(Clone)]
pub struct Array<T> {
    items: SmallVec<[T; INLINE]>,
}

impl<T> Array<T> {
    pub fn new() -> Self {
        Array {
            items: SmallVec::new(),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Array::new()
    }
}

impl<T: Clone> Array<T> {
    /// Copies the elements of `items` covered by `window`.
    pub(crate) fn from_window(items: &[T], window: Option<Window>) -> Self {
        match window {
            Some(window) => window.indexes().map(|i| items[i].clone()).collect(),
            None => Array::new(),
        }
    }
}

// --- Sequence ---

impl<T: Clone> Sequence for Array<T> {
    type Element = T;

    fn last_index(&self) -> Option<usize> {
        self.items.len().checked_sub(1)
    }

    fn get(&self, index: usize) -> Option<T> {
        self.items.as_slice().get(index).cloned()
    }

    fn size(&self) -> usize {
        self.items.len()
    }
}

impl<T: Clone> Ranged for Array<T> {
    type Range = Self;

    fn span(&self, from: isize, to: isize) -> Self {
        Array::from_window(&self.items, Window::span(self.items.len(), from, to))
    }

    fn span_from(&self, from: isize) -> Self {
        Array::from_window(&self.items, Window::span_from(self.items.len(), from))
    }

    fn span_to(&self, to: isize) -> Self {
        Array::from_window(&self.items, Window::span_to(self.items.len(), to))
    }

    fn segment(&self, from: isize, length: isize) -> Self {
        Array::from_window(&self.items, Window::segment(self.items.len(), from, length))
    }

    fn empty_range(&self) -> Self {
        Array::new()
    }
}

// --- Equality and hashing ---

impl<T, R> PartialEq<R> for Array<T>
where
    T: Clone + PartialEq<R::Element>,
    R: Sequence,
{
    fn eq(&self, other: &R) -> bool {
        self.equals(other)
    }
}

impl<T: Clone + Eq> Eq for Array<T> {}

impl<T: Clone + ElementHash> Hash for Array<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl<T: Clone + ElementHash> ElementHash for Array<T> {
    fn element_hash(&self) -> u64 {
        self.hash_code()
    }
}

// --- Formatting ---

impl<T: fmt::Debug> fmt::Debug for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_elements(f, self.items.iter())
    }
}

// --- Conversions ---

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Array {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> From<Vec<T>> for Array<T> {
    fn from(items: Vec<T>) -> Self {
        Array {
            items: SmallVec::from_vec(items),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<T> IntoIterator for Array<T> {
    type Item = T;
    type IntoIter = smallvec::IntoIter<[T; INLINE]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T: Clone> IntoIterator for &'a Array<T> {
    type Item = T;
    type IntoIter = Iter<'a, Array<T>>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}

#[cfg(test)]
#[path = "array_test.rs"]
mod array_test;
