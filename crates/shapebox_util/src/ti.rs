//! Typed indexes.
//!
//! When handling indexes into several collections, it's useful to wrap them
//! in newtypes to avoid accidentally indexing a collection using the wrong
//! index. This module provides a trait for such newtype wrappers ("typed
//! indexes"); the macro [`typed_index_struct!`] defines them.

use std::fmt;
use std::marker::PhantomData;
use std::ops::Range;

use crate::error::{IndexOutOfRange, IndexOverflow};

/// Typed index.
///
/// This is typically a wrapper around a primitive unsigned integer. Integers
/// larger than `usize` are allowed but not all values may be supported.
///
/// Instead of implementing this trait manually, consider using the macro
/// [`typed_index_struct!`].
pub trait TypedIndex:
    'static
    + fmt::Debug
    + fmt::Display
    + Default
    + Copy
    + Clone
    + PartialEq
    + Eq
    + std::hash::Hash
    + PartialOrd
    + Ord
    + Send
    + Sync
{
    /// Maximum value for the type.
    const MAX: Self;
    /// Maximum index representable by the type.
    const MAX_INDEX: usize;
    /// User-friendly type name.
    const TYPE_NAME: &'static str;

    /// Returns the index as a `usize`.
    fn to_index(self) -> usize;

    /// Returns an index from a `usize`, or an error if it does not fit.
    fn try_from_index(index: usize) -> Result<Self, IndexOverflow>;

    /// Returns an index from a signed integer, or an error if it is negative
    /// or too large to be an index into a collection of length `len`.
    fn try_from_signed(index: i64, len: usize) -> Result<Self, IndexOutOfRange> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < len)
            .and_then(|i| Self::try_from_index(i).ok())
            .ok_or(IndexOutOfRange::from_signed::<Self>(index, len))
    }

    /// Returns an iterator over all indexes up to `count` (exclusive). If
    /// `count` exceeds the maximum value, then the iterator stops before
    /// reaching the maximum value.
    fn iter(count: usize) -> TypedIndexIter<Self> {
        // Clip to `Self::MAX`
        let count = std::cmp::min(count, Self::MAX_INDEX + 1);
        TypedIndexIter {
            range: 0..count,
            _phantom: PhantomData,
        }
    }

    /// Increments the index, or returns an error if it does not fit.
    fn next(self) -> Result<Self, IndexOverflow> {
        Self::try_from_index(self.to_index().saturating_add(1))
    }
}

/// Iterator over all indexes up to a certain value. See [`TypedIndex::iter()`].
#[derive(Debug, Default, Clone)]
pub struct TypedIndexIter<I> {
    range: Range<usize>,
    _phantom: PhantomData<fn() -> I>,
}

impl<I: TypedIndex> Iterator for TypedIndexIter<I> {
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        // `iter()` clips the range, so every value fits.
        self.range.next().and_then(|i| I::try_from_index(i).ok())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<I: TypedIndex> DoubleEndedIterator for TypedIndexIter<I> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.range.next_back().and_then(|i| I::try_from_index(i).ok())
    }
}

impl<I: TypedIndex> ExactSizeIterator for TypedIndexIter<I> {}
