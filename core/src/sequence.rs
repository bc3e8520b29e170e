//! The [`Sequence`] contract.
//!
//! Implementors supply [`Sequence::last_index`] and [`Sequence::get`]; every
//! other method is derived from those two and holds for any conforming
//! implementation, views included.

use core::fmt;

use crate::{
    Array,
    error::expect_defined,
    hash::ElementHash,
    iter::Iter,
    views::{Keys, Rest, Reversed},
};

/// A finite, index-addressable sequence of elements.
///
/// Index `i` is defined iff `i <= last_index()`, and every defined index must
/// have an element. An implementation that returns `None` from `get` for a
/// defined index breaks the contract; derived operations that rely on it
/// panic rather than silently skip the slot.
///
/// Elements are returned by value. Sequences backed by storage clone the
/// element out; computed sequences (such as [`Keys`]) produce it on demand.
/// A sequence with null-like slots uses `Option<T>` as its element type, so a
/// present null reads as `Some(None)` while an index outside the sequence
/// reads as `None`.
pub trait Sequence {
    type Element;

    /// Whether this sequence is a text string.
    ///
    /// Text is never equal to a sequence that is not text, even when both
    /// hold the same characters.
    const IS_TEXT: bool = false;

    /// The last valid index, or `None` when the sequence is empty.
    fn last_index(&self) -> Option<usize>;

    /// The element at `index`, or `None` if `index` is past the end.
    fn get(&self, index: usize) -> Option<Self::Element>;

    fn size(&self) -> usize {
        self.last_index().map_or(0, |last| last + 1)
    }

    fn is_empty(&self) -> bool {
        self.last_index().is_none()
    }

    fn defines(&self, index: usize) -> bool {
        self.last_index().is_some_and(|last| index <= last)
    }

    fn first(&self) -> Option<Self::Element> {
        self.get(0)
    }

    fn last(&self) -> Option<Self::Element> {
        self.get(self.last_index()?)
    }

    /// The element `index` positions before the last one.
    fn get_from_last(&self, index: usize) -> Option<Self::Element> {
        let last = self.last_index()?;
        self.get(last.checked_sub(index)?)
    }

    /// A fresh cursor over the elements, in index order.
    ///
    /// Every call returns an independent cursor.
    fn iter(&self) -> Iter<'_, Self> {
        Iter::new(self)
    }

    fn contains(&self, value: &Self::Element) -> bool
    where
        Self::Element: PartialEq,
    {
        self.occurs(Some(value))
    }

    /// Element-wise equality.
    ///
    /// Equal iff both have the same size and, at every index, both elements
    /// are present and equal or both are absent. A text sequence is never
    /// equal to a non-text sequence.
    fn equals<R>(&self, other: &R) -> bool
    where
        R: Sequence + ?Sized,
        Self::Element: PartialEq<R::Element>,
    {
        if Self::IS_TEXT != R::IS_TEXT {
            return false;
        }
        let size = self.size();
        if size != other.size() {
            return false;
        }
        (0..size).all(|index| match (self.get(index), other.get(index)) {
            (Some(ours), Some(theirs)) => ours == theirs,
            (None, None) => true,
            _ => false,
        })
    }

    /// Rolling polynomial hash: `h = 1`, then `h = h * 31 + e` per element,
    /// where `e` is `0` for an absent element.
    ///
    /// Equal sequences always hash the same.
    fn hash_code(&self) -> u64
    where
        Self::Element: ElementHash,
    {
        (0..self.size()).fold(1u64, |hash, index| {
            let element = self.get(index).map_or(0, |e| e.element_hash());
            hash.wrapping_mul(31).wrapping_add(element)
        })
    }

    /// The first element satisfying `predicate`.
    fn find(&self, mut predicate: impl FnMut(&Self::Element) -> bool) -> Option<Self::Element> {
        self.iter().find(|element| predicate(element))
    }

    /// The last element satisfying `predicate`, scanning from the end.
    fn find_last(
        &self,
        mut predicate: impl FnMut(&Self::Element) -> bool,
    ) -> Option<Self::Element> {
        let last = self.last_index()?;
        (0..=last)
            .rev()
            .map(|index| expect_defined(self, index))
            .find(|element| predicate(element))
    }

    // --- Sub-sequence search ---

    /// Whether `sub` occurs in this sequence starting at `index`.
    ///
    /// Positions are compared with the present/absent rule, so an index past
    /// the end of either side only matches another absent position.
    fn includes_at<R>(&self, index: usize, sub: &R) -> bool
    where
        R: Sequence + ?Sized,
        Self::Element: PartialEq<R::Element>,
    {
        (0..sub.size()).all(|offset| {
            let ours = index.checked_add(offset).and_then(|i| self.get(i));
            match (ours, sub.get(offset)) {
                (Some(ours), Some(theirs)) => ours == theirs,
                (None, None) => true,
                _ => false,
            }
        })
    }

    fn includes<R>(&self, sub: &R) -> bool
    where
        R: Sequence + ?Sized,
        Self::Element: PartialEq<R::Element>,
    {
        self.first_inclusion(sub).is_some()
    }

    /// Every index at which `sub` occurs, ascending.
    ///
    /// An empty `sub` occurs at every index in `0..=size`.
    fn inclusions<R>(&self, sub: &R) -> impl Iterator<Item = usize>
    where
        R: Sequence + ?Sized,
        Self::Element: PartialEq<R::Element>,
    {
        let candidates = (self.size() + 1).saturating_sub(sub.size());
        (0..candidates).filter(move |&index| self.includes_at(index, sub))
    }

    fn first_inclusion<R>(&self, sub: &R) -> Option<usize>
    where
        R: Sequence + ?Sized,
        Self::Element: PartialEq<R::Element>,
    {
        self.inclusions(sub).next()
    }

    fn last_inclusion<R>(&self, sub: &R) -> Option<usize>
    where
        R: Sequence + ?Sized,
        Self::Element: PartialEq<R::Element>,
    {
        let candidates = (self.size() + 1).saturating_sub(sub.size());
        (0..candidates)
            .rev()
            .find(|&index| self.includes_at(index, sub))
    }

    // --- Value search ---

    /// Whether the slot at `index` holds `value`.
    ///
    /// A `None` request matches only an absent slot, never a present element.
    fn occurs_at(&self, index: usize, value: Option<&Self::Element>) -> bool
    where
        Self::Element: PartialEq,
    {
        match (self.get(index), value) {
            (Some(element), Some(value)) => element == *value,
            (None, None) => true,
            _ => false,
        }
    }

    fn occurs(&self, value: Option<&Self::Element>) -> bool
    where
        Self::Element: PartialEq,
    {
        self.first_occurrence(value).is_some()
    }

    fn occurrences(&self, value: Option<&Self::Element>) -> impl Iterator<Item = usize>
    where
        Self::Element: PartialEq,
    {
        (0..self.size()).filter(move |&index| self.occurs_at(index, value))
    }

    fn first_occurrence(&self, value: Option<&Self::Element>) -> Option<usize>
    where
        Self::Element: PartialEq,
    {
        self.occurrences(value).next()
    }

    fn last_occurrence(&self, value: Option<&Self::Element>) -> Option<usize>
    where
        Self::Element: PartialEq,
    {
        (0..self.size())
            .rev()
            .find(|&index| self.occurs_at(index, value))
    }

    // --- Predicate search ---

    /// Every index whose element satisfies `predicate`, ascending.
    ///
    /// Visits defined indexes only. Panics with a contract violation if a
    /// defined index has no element.
    fn indexes_where(
        &self,
        mut predicate: impl FnMut(&Self::Element) -> bool,
    ) -> impl Iterator<Item = usize> {
        (0..self.size()).filter(move |&index| predicate(&expect_defined(self, index)))
    }

    fn first_index_where(
        &self,
        predicate: impl FnMut(&Self::Element) -> bool,
    ) -> Option<usize> {
        self.indexes_where(predicate).next()
    }

    fn last_index_where(
        &self,
        mut predicate: impl FnMut(&Self::Element) -> bool,
    ) -> Option<usize> {
        (0..self.size())
            .rev()
            .find(|&index| predicate(&expect_defined(self, index)))
    }

    fn starts_with<R>(&self, prefix: &R) -> bool
    where
        R: Sequence + ?Sized,
        Self::Element: PartialEq<R::Element>,
    {
        self.includes_at(0, prefix)
    }

    fn ends_with<R>(&self, suffix: &R) -> bool
    where
        R: Sequence + ?Sized,
        Self::Element: PartialEq<R::Element>,
    {
        match self.size().checked_sub(suffix.size()) {
            Some(start) => self.includes_at(start, suffix),
            None => false,
        }
    }

    // --- Construction ---

    /// A new array holding `value` followed by every element of `self`.
    ///
    /// The result's element type `T` is any type both `value` and the
    /// original elements convert into, e.g. `Option<i64>` to put a null in
    /// front of a sequence of `i64`.
    fn with_leading<T>(&self, value: T) -> Array<T>
    where
        Self::Element: Into<T>,
    {
        core::iter::once(value)
            .chain(self.iter().map(Into::into))
            .collect()
    }

    /// A new array holding every element of `self` followed by `value`.
    fn with_trailing<T>(&self, value: T) -> Array<T>
    where
        Self::Element: Into<T>,
    {
        self.iter()
            .map(Into::into)
            .chain(core::iter::once(value))
            .collect()
    }

    // --- Views ---

    /// The indexes of this sequence, as a sequence.
    fn keys(&self) -> Keys<&Self> {
        Keys::new(self)
    }

    /// Every element but the first.
    fn rest(&self) -> Rest<&Self> {
        Rest::new(self, 1)
    }

    /// The elements back to front.
    fn reversed(&self) -> Reversed<&Self> {
        Reversed::new(self)
    }
}

/// Renders `{ a, b, c }`, or `{}` when there are no elements.
pub(crate) fn write_elements<I>(f: &mut fmt::Formatter<'_>, elements: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    let mut elements = elements.into_iter().peekable();
    if elements.peek().is_none() {
        return f.write_str("{}");
    }
    f.write_str("{ ")?;
    let mut first = true;
    for element in elements {
        if !first {
            f.write_str(", ")?;
        }
        first = false;
        write!(f, "{element}")?;
    }
    f.write_str(" }")
}

#[cfg(test)]
#[path = "sequence_test.rs"]
mod sequence_test;
