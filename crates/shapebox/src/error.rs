//! Error types.

use shapebox_util::IndexOutOfRange;
use thiserror::Error;

use crate::ShapeKind;

/// Error produced by an operation on a [`crate::ShapeBox`].
///
/// The box is never modified by an operation that returns an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoxError {
    /// The box already holds as many shapes as its capacity allows.
    #[error("could not add shape: box capacity of {capacity} is full")]
    CapacityExceeded {
        /// Capacity of the box.
        capacity: usize,
    },
    /// The index does not refer to a shape in the box.
    #[error(transparent)]
    IndexOutOfRange(#[from] IndexOutOfRange),
    /// There are no circles in the box.
    #[error("no circles in the box")]
    NoCirclesPresent,
    /// There are no shapes of the requested kind in the box.
    #[error("no {kind} shapes in the box")]
    NoShapesOfKind {
        /// Kind of shape that was requested.
        kind: ShapeKind,
    },
}

/// Error produced when loading or saving a [`crate::BoxConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error reading or deserializing the config sources.
    #[error("error loading box config: {0}")]
    Load(#[from] config::ConfigError),
    /// Error serializing the config.
    #[error("error serializing box config: {0}")]
    Serialize(#[from] serde_norway::Error),
    /// The config lists more shapes than the box can hold.
    #[error("box config lists {count} shapes but capacity is {capacity}")]
    TooManyShapes {
        /// Number of shapes in the config.
        count: usize,
        /// Capacity in the config.
        capacity: usize,
    },
}
