//! Bounded, ordered container of 2D shapes.
//!
//! A [`ShapeBox`] holds at most a fixed number of [`Shape`]s in insertion
//! order. Shapes can be added, read, replaced, and extracted by index, and the
//! box can report the total perimeter and area of its contents or drop every
//! shape of a particular [`ShapeKind`].
//!
//! ```
//! use shapebox::prelude::*;
//!
//! let mut b = ShapeBox::new(2);
//! b.add_shape(Circle::new(1.0)).unwrap();
//! b.add_shape(Triangle::new(3.0)).unwrap();
//! assert!(b.add_shape(Circle::new(1.0)).is_err());
//! shapebox::assert_approx_eq!(b.sum_perimeter(), 2.0 * std::f64::consts::PI + 9.0);
//! ```

pub use {approx, shapebox_util};

/// Floating-point type used for shape dimensions and measurements.
pub type Float = f64;

/// Small floating-point value used for approximate comparisons.
pub const EPSILON: Float = 0.000001;

/// Asserts that both arguments are approximately equal.
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::approx::assert_abs_diff_eq!($a, $b, epsilon = $crate::EPSILON)
    };
}

mod box_config;
mod error;
mod index;
mod shape;
mod shape_box;
#[cfg(test)]
mod tests;

pub use box_config::BoxConfig;
pub use error::{BoxError, ConfigError};
pub use index::ShapeIndex;
pub use shape::{Circle, Measure, Rectangle, Shape, ShapeKind, Triangle};
pub use shape_box::ShapeBox;

/// Structs, traits, and constants.
pub mod prelude {
    pub use shapebox_util::TypedIndex;

    pub use crate::{
        BoxConfig, BoxError, Circle, ConfigError, EPSILON, Float, Measure, Rectangle, Shape,
        ShapeBox, ShapeIndex, ShapeKind, Triangle,
    };
}
