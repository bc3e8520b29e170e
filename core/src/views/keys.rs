use core::fmt;

use crate::{
    Array, Ranged, Sequence,
    iter::KeysIter,
    range::Window,
};

/// The index domain of a wrapped sequence: `0, 1, ..., last_index`.
///
/// Holds no data; `get(i)` is `Some(i)` exactly when the wrapped sequence
/// defines `i`.
#[derive(Clone, Copy)]
pub struct Keys<S> {
    wrapped: S,
}

impl<S: Sequence> Keys<S> {
    pub fn new(wrapped: S) -> Self {
        Keys { wrapped }
    }

    pub fn into_inner(self) -> S {
        self.wrapped
    }

    pub fn iter(&self) -> KeysIter {
        KeysIter::new(self.wrapped.size())
    }

    // The wrapped size is read once, so the resulting range does not follow
    // the wrapped sequence afterwards.
    fn indexes(&self, window: impl FnOnce(usize) -> Option<Window>) -> Array<usize> {
        match window(self.wrapped.size()) {
            Some(window) => window.indexes().collect(),
            None => Array::new(),
        }
    }
}

impl<T: Sequence + Clone> Keys<&T> {
    /// A view over a clone of the wrapped sequence.
    pub fn detach(&self) -> Keys<T> {
        tracing::trace!(size = self.wrapped.size(), "Detaching keys view");
        Keys::new(self.wrapped.clone())
    }
}

impl<S: Sequence> Sequence for Keys<S> {
    type Element = usize;

    fn last_index(&self) -> Option<usize> {
        self.wrapped.last_index()
    }

    fn get(&self, index: usize) -> Option<usize> {
        self.wrapped.defines(index).then_some(index)
    }

    fn size(&self) -> usize {
        self.wrapped.size()
    }
}

impl<S: Sequence> Ranged for Keys<S> {
    type Range = Array<usize>;

    fn span(&self, from: isize, to: isize) -> Array<usize> {
        self.indexes(|size| Window::span(size, from, to))
    }

    fn span_from(&self, from: isize) -> Array<usize> {
        self.indexes(|size| Window::span_from(size, from))
    }

    fn span_to(&self, to: isize) -> Array<usize> {
        self.indexes(|size| Window::span_to(size, to))
    }

    fn segment(&self, from: isize, length: isize) -> Array<usize> {
        self.indexes(|size| Window::segment(size, from, length))
    }

    fn empty_range(&self) -> Array<usize> {
        Array::new()
    }
}

impl_view_traits!(Keys);

/// `{ 0, ..., last_index }`, or `{}` when empty.
impl<S: Sequence> fmt::Display for Keys<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.wrapped.last_index() {
            Some(last) => write!(f, "{{ 0, ..., {last} }}"),
            None => f.write_str("{}"),
        }
    }
}

impl<'a, S: Sequence> IntoIterator for &'a Keys<S> {
    type Item = usize;
    type IntoIter = KeysIter;

    fn into_iter(self) -> KeysIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;
