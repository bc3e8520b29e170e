//! Zero-copy views over a wrapped sequence.
//!
//! A view stores a handle to the sequence it wraps (plus any view parameter
//! such as an offset) and translates coordinates before delegating to it. It
//! never holds element data of its own.
//!
//! The handle is the view's type parameter. [`Sequence::keys`],
//! [`Sequence::rest`] and [`Sequence::reversed`] hand out views over a borrow
//! (`&S`), so the view cannot outlive the sequence. Views can also be built
//! directly over an owned sequence or an `Rc`, and a borrowed view can be
//! `detach`ed into one that owns a clone of the wrapped sequence.

/// Equality, hashing and `Debug` shared by every view.
macro_rules! impl_view_traits {
    ($view:ident) => {
        impl<S, R> PartialEq<R> for $view<S>
        where
            S: crate::Sequence,
            R: crate::Sequence,
            <$view<S> as crate::Sequence>::Element: PartialEq<R::Element>,
        {
            fn eq(&self, other: &R) -> bool {
                crate::Sequence::equals(self, other)
            }
        }

        impl<S> Eq for $view<S>
        where
            S: crate::Sequence,
            <$view<S> as crate::Sequence>::Element: Eq,
        {
        }

        impl<S> core::hash::Hash for $view<S>
        where
            S: crate::Sequence,
            <$view<S> as crate::Sequence>::Element: crate::ElementHash,
        {
            fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                state.write_u64(crate::Sequence::hash_code(self));
            }
        }

        impl<S> crate::ElementHash for $view<S>
        where
            S: crate::Sequence,
            <$view<S> as crate::Sequence>::Element: crate::ElementHash,
        {
            fn element_hash(&self) -> u64 {
                crate::Sequence::hash_code(self)
            }
        }

        impl<S> core::fmt::Debug for $view<S>
        where
            S: crate::Sequence,
            <$view<S> as crate::Sequence>::Element: core::fmt::Debug,
        {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_list().entries(self.iter()).finish()
            }
        }
    };
}

mod keys;
mod rest;
mod reversed;

pub use keys::Keys;
pub use rest::Rest;
pub use reversed::Reversed;

static_assertions::assert_eq_size!(Keys<&crate::Array<u8>>, usize);
static_assertions::assert_eq_size!(Rest<&crate::Array<u8>>, [usize; 2]);
static_assertions::assert_eq_size!(Reversed<&crate::Array<u8>>, usize);
static_assertions::assert_impl_all!(Rest<&'static [u8]>: Copy, Send, Sync);
static_assertions::assert_impl_all!(Reversed<&'static [u8]>: Copy, Send, Sync);
