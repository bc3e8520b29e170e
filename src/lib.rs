//! Sequin - index-addressable sequences and zero-copy views
//!
//! # Overview
//!
//! Implement two methods, [`Sequence::last_index`] and [`Sequence::get`], and
//! a type gets search, trimming, equality, hashing, iteration and the views
//! for free.
//!
//! # Quick Start
//!
//! ```
//! use sequin::{Array, Ranged, Sequence};
//!
//! let l = Array::from([1, 2, 5, 6, 2]);
//!
//! // Derived operations
//! assert_eq!(l.first_occurrence(Some(&2)), Some(1));
//! assert_eq!(l.trim(|&x| x < 3), [5, 6]);
//!
//! // Views borrow `l` and copy nothing
//! assert_eq!(l.reversed(), [2, 6, 5, 2, 1]);
//! assert_eq!(l.rest(), [2, 5, 6, 2]);
//! assert_eq!(l.keys(), [0usize, 1, 2, 3, 4]);
//!
//! // Ranges of a view come back as the wrapped sequence's type
//! let tail: Array<i32> = l.reversed().span(0, 1);
//! assert_eq!(tail, [2, 6]);
//! ```
//!
//! # Custom sequences
//!
//! ```
//! use sequin::Sequence;
//!
//! struct Squares(usize);
//!
//! impl Sequence for Squares {
//!     type Element = usize;
//!
//!     fn last_index(&self) -> Option<usize> {
//!         self.0.checked_sub(1)
//!     }
//!
//!     fn get(&self, index: usize) -> Option<usize> {
//!         (index < self.0).then(|| index * index)
//!     }
//! }
//!
//! let squares = Squares(4);
//! assert!(squares.includes(&[4, 9]));
//! assert_eq!(squares.reversed(), [9, 4, 1, 0]);
//! ```

#![no_std]

pub use sequin_core::*;
