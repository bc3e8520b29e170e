//! Contract violations.
//!
//! A [`Sequence`] promises that every index up to its last index has an
//! element. Breaking that promise is a programming defect in the
//! implementation, so it is never reported as a recoverable error: the
//! offending operation logs the violation and panics.
//!
//! "Not found" outcomes are ordinary `None` values and never go through here.

use thiserror::Error;

use crate::Sequence;

/// An inconsistency between what a sequence claims to define and what it
/// actually returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContractViolation {
    /// `get(index)` returned nothing for an index inside `0..=last_index`.
    #[error("sequence defines index {index} (last index {last_index:?}) but has no element there")]
    MissingElement {
        index: usize,
        last_index: Option<usize>,
    },
}

#[cold]
#[track_caller]
pub(crate) fn contract_violation(violation: ContractViolation) -> ! {
    tracing::error!(%violation, "Sequence contract violated");
    panic!("{violation}")
}

/// Fetches an element the sequence is known to define.
///
/// Panics with [`ContractViolation::MissingElement`] if the element is absent.
#[track_caller]
pub(crate) fn expect_defined<S: Sequence + ?Sized>(seq: &S, index: usize) -> S::Element {
    match seq.get(index) {
        Some(element) => element,
        None => contract_violation(ContractViolation::MissingElement {
            index,
            last_index: seq.last_index(),
        }),
    }
}
