//! `Sequence` and `Ranged` for references, shared handles and std storage.

use alloc::{rc::Rc, vec::Vec};

use crate::{Array, Ranged, Sequence, range::Window};

// --- Handles ---

impl<S: Sequence + ?Sized> Sequence for &S {
    type Element = S::Element;
    const IS_TEXT: bool = S::IS_TEXT;

    fn last_index(&self) -> Option<usize> {
        (**self).last_index()
    }

    fn get(&self, index: usize) -> Option<S::Element> {
        (**self).get(index)
    }

    fn size(&self) -> usize {
        (**self).size()
    }
}

impl<S: Ranged + ?Sized> Ranged for &S {
    type Range = S::Range;

    fn span(&self, from: isize, to: isize) -> S::Range {
        (**self).span(from, to)
    }

    fn span_from(&self, from: isize) -> S::Range {
        (**self).span_from(from)
    }

    fn span_to(&self, to: isize) -> S::Range {
        (**self).span_to(to)
    }

    fn segment(&self, from: isize, length: isize) -> S::Range {
        (**self).segment(from, length)
    }

    fn empty_range(&self) -> S::Range {
        (**self).empty_range()
    }
}

impl<S: Sequence + ?Sized> Sequence for Rc<S> {
    type Element = S::Element;
    const IS_TEXT: bool = S::IS_TEXT;

    fn last_index(&self) -> Option<usize> {
        (**self).last_index()
    }

    fn get(&self, index: usize) -> Option<S::Element> {
        (**self).get(index)
    }

    fn size(&self) -> usize {
        (**self).size()
    }
}

impl<S: Ranged + ?Sized> Ranged for Rc<S> {
    type Range = S::Range;

    fn span(&self, from: isize, to: isize) -> S::Range {
        (**self).span(from, to)
    }

    fn span_from(&self, from: isize) -> S::Range {
        (**self).span_from(from)
    }

    fn span_to(&self, to: isize) -> S::Range {
        (**self).span_to(to)
    }

    fn segment(&self, from: isize, length: isize) -> S::Range {
        (**self).segment(from, length)
    }

    fn empty_range(&self) -> S::Range {
        (**self).empty_range()
    }
}

// --- Slice-backed storage ---
//
// Slices cannot be returned by value, so their ranges are copied into an
// `Array`.

macro_rules! impl_slice_backed {
    ([$($generics:tt)*] $ty:ty) => {
        impl<$($generics)*> Sequence for $ty {
            type Element = T;

            fn last_index(&self) -> Option<usize> {
                <[T]>::len(self).checked_sub(1)
            }

            fn get(&self, index: usize) -> Option<T> {
                <[T]>::get(self, index).cloned()
            }

            fn size(&self) -> usize {
                <[T]>::len(self)
            }
        }

        impl<$($generics)*> Ranged for $ty {
            type Range = Array<T>;

            fn span(&self, from: isize, to: isize) -> Array<T> {
                Array::from_window(self, Window::span(<[T]>::len(self), from, to))
            }

            fn span_from(&self, from: isize) -> Array<T> {
                Array::from_window(self, Window::span_from(<[T]>::len(self), from))
            }

            fn span_to(&self, to: isize) -> Array<T> {
                Array::from_window(self, Window::span_to(<[T]>::len(self), to))
            }

            fn segment(&self, from: isize, length: isize) -> Array<T> {
                Array::from_window(self, Window::segment(<[T]>::len(self), from, length))
            }

            fn empty_range(&self) -> Array<T> {
                Array::new()
            }
        }
    };
}

impl_slice_backed!([T: Clone] [T]);
impl_slice_backed!([T: Clone, const N: usize] [T; N]);
impl_slice_backed!([T: Clone] Vec<T>);

#[cfg(feature = "bumpalo")]
impl_slice_backed!(['bump, T: Clone] bumpalo::collections::Vec<'bump, T>);
