#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

//! Index-addressable sequences and the zero-copy views derived from them.
//!
//! A type becomes a [`Sequence`] by answering two questions: what is the last
//! valid index, and what element lives at a given index. Everything else
//! (searching, trimming, equality, hashing, slicing, iteration) is provided
//! on top of those two primitives.
//!
//! Three views present a different perspective of a sequence without copying
//! its storage: [`Keys`] (the index domain), [`Rest`] (a suffix) and
//! [`Reversed`] (back to front).

// This works on std and no_std and is harmless.
extern crate alloc;

pub mod array;
pub mod error;
pub mod hash;
mod impls;
pub mod iter;
pub mod range;
pub mod sequence;
pub mod text;
pub mod views;

pub use array::Array;
pub use error::ContractViolation;
pub use hash::ElementHash;
pub use iter::{Iter, KeysIter, RestIter, ReversedIter};
pub use range::Ranged;
pub use sequence::Sequence;
pub use text::Text;
pub use views::{Keys, Rest, Reversed};
