//! Element hashing for the rolling sequence hash.
//!
//! [`Sequence::hash_code`](crate::Sequence::hash_code) folds a per-element
//! integer into `h = h * 31 + e`. That needs a hash that is stable across
//! hasher instances, which `core::hash::Hash` does not promise, so elements
//! provide it through [`ElementHash`] instead.

use alloc::string::String;

/// A deterministic 64-bit hash of a single element.
///
/// Values that compare equal must produce equal hashes. A null-like element
/// (`Option::None`) hashes to `0`.
pub trait ElementHash {
    fn element_hash(&self) -> u64;
}

macro_rules! impl_element_hash_for_integers {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ElementHash for $ty {
                #[inline]
                fn element_hash(&self) -> u64 {
                    *self as u64
                }
            }
        )*
    };
}

impl_element_hash_for_integers!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl ElementHash for bool {
    fn element_hash(&self) -> u64 {
        u64::from(*self)
    }
}

impl ElementHash for char {
    fn element_hash(&self) -> u64 {
        u64::from(*self)
    }
}

// Signed zeros compare equal, so both hash as `0`.
impl ElementHash for f32 {
    fn element_hash(&self) -> u64 {
        if *self == 0.0 {
            0
        } else {
            u64::from(self.to_bits())
        }
    }
}

impl ElementHash for f64 {
    fn element_hash(&self) -> u64 {
        if *self == 0.0 { 0 } else { self.to_bits() }
    }
}

impl ElementHash for str {
    fn element_hash(&self) -> u64 {
        self.chars()
            .fold(0u64, |hash, c| hash.wrapping_mul(31).wrapping_add(u64::from(c)))
    }
}

impl ElementHash for String {
    fn element_hash(&self) -> u64 {
        self.as_str().element_hash()
    }
}

impl<T: ElementHash> ElementHash for Option<T> {
    fn element_hash(&self) -> u64 {
        self.as_ref().map_or(0, ElementHash::element_hash)
    }
}

impl<T: ElementHash + ?Sized> ElementHash for &T {
    fn element_hash(&self) -> u64 {
        (**self).element_hash()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_hashes_to_zero() {
        assert_eq!(None::<i64>.element_hash(), 0);
        assert_eq!(Some(7i64).element_hash(), 7);
    }

    #[test]
    fn str_and_string_agree() {
        let owned = String::from("seq");
        assert_eq!(owned.element_hash(), "seq".element_hash());
        assert_ne!("seq".element_hash(), "qes".element_hash());
    }

    #[test]
    fn signed_zeros_hash_alike() {
        assert_eq!((-0.0f64).element_hash(), 0.0f64.element_hash());
        assert_eq!((-0.0f32).element_hash(), 0.0f32.element_hash());
        assert_ne!(1.5f64.element_hash(), (-1.5f64).element_hash());
    }
}
