//! Typed index utilities for shapebox.

#[macro_use]
mod macros;
pub mod error;
pub mod ti;

pub use error::{IndexOutOfRange, IndexOverflow};
pub use ti::{TypedIndex, TypedIndexIter};
