//! Error types.

use std::fmt;

use crate::ti::TypedIndex;

/// Error when a [`crate::ti::TypedIndex`] exceeds its maximum value.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IndexOverflow {
    /// Name of the indexing type.
    pub type_name: &'static str,
    /// Maximum allowed index for the indexing type.
    pub max_value: usize,
}

impl fmt::Display for IndexOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "exceeded maximum {} value of {}",
            self.type_name, self.max_value,
        )
    }
}

impl std::error::Error for IndexOverflow {}

impl IndexOverflow {
    /// Constructs a new overflow error for the type `I`.
    pub fn new<I: TypedIndex>() -> Self {
        Self {
            type_name: I::TYPE_NAME,
            max_value: I::MAX_INDEX,
        }
    }
}

/// Error when an index does not refer to an element of a collection.
///
/// The index is stored as a signed integer so that negative indexes coming
/// from outside the typed index world can be reported faithfully.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IndexOutOfRange {
    /// Name of the indexing type.
    pub type_name: &'static str,
    /// Index that was requested.
    pub index: i64,
    /// Length of the collection at the time of the request.
    pub len: usize,
}

impl fmt::Display for IndexOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} out of range for length {}",
            self.type_name, self.index, self.len,
        )
    }
}

impl std::error::Error for IndexOutOfRange {}

impl IndexOutOfRange {
    /// Constructs a new out-of-bounds error for `index` of type `I` in a
    /// collection of length `len`.
    pub fn new<I: TypedIndex>(index: I, len: usize) -> Self {
        Self {
            type_name: I::TYPE_NAME,
            index: i64::try_from(index.to_index()).unwrap_or(i64::MAX),
            len,
        }
    }

    /// Constructs a new out-of-bounds error for a raw signed index.
    pub fn from_signed<I: TypedIndex>(index: i64, len: usize) -> Self {
        Self {
            type_name: I::TYPE_NAME,
            index,
            len,
        }
    }
}
