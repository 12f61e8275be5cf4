//! Bounded, ordered collection of shapes.

use std::fmt;

use itertools::Itertools;
use shapebox_util::{IndexOutOfRange, TypedIndex, TypedIndexIter};

use crate::{BoxError, Float, Measure, Shape, ShapeIndex, ShapeKind};

/// Ordered collection of at most `capacity` shapes.
///
/// Shapes keep their insertion order. Removing a shape shifts every later
/// shape down by one index.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ShapeBox {
    shapes: Vec<Shape>,
    capacity: usize,
}

impl fmt::Display for ShapeBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let contents = self.shapes.iter().join(", ");
        write!(f, "[{contents}]")
    }
}

impl<'a> IntoIterator for &'a ShapeBox {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}

impl ShapeBox {
    /// Constructs a new empty box that can hold up to `capacity` shapes.
    ///
    /// A capacity of zero is allowed; such a box rejects every shape.
    pub fn new(capacity: usize) -> Self {
        Self {
            shapes: vec![],
            capacity,
        }
    }

    /// Returns the maximum number of shapes the box may hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    /// Returns the number of shapes in the box.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }
    /// Returns whether the box is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
    /// Returns whether another shape would exceed the capacity of the box.
    pub fn is_full(&self) -> bool {
        self.remaining() == 0
    }
    /// Returns how many more shapes can be added before the box is full.
    pub fn remaining(&self) -> usize {
        Self::effective_capacity(self.capacity).saturating_sub(self.len())
    }

    /// Returns the shapes in the box, in order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
    /// Returns an iterator over the indexes in the box.
    pub fn iter_keys(&self) -> TypedIndexIter<ShapeIndex> {
        ShapeIndex::iter(self.len())
    }
    /// Returns an iterator over the index-shape pairs in the box.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (ShapeIndex, &Shape)> {
        self.iter_keys().zip(&self.shapes)
    }

    /// Converts a signed index into a [`ShapeIndex`], or returns an error if
    /// it does not refer to a shape in the box. Negative indexes are always
    /// out of range.
    pub fn checked_index(&self, index: i64) -> Result<ShapeIndex, BoxError> {
        Ok(ShapeIndex::try_from_signed(index, self.len())?)
    }

    /// Adds a shape to the end of the box and returns its index, or returns an
    /// error if the box is full.
    pub fn add_shape(&mut self, shape: impl Into<Shape>) -> Result<ShapeIndex, BoxError> {
        let shape = shape.into();
        let capacity_exceeded = BoxError::CapacityExceeded {
            capacity: self.capacity,
        };
        if self.is_full() {
            return Err(capacity_exceeded);
        }
        let idx = ShapeIndex::try_from_index(self.len()).map_err(|_| capacity_exceeded)?;
        log::trace!("adding {shape} to box at {idx}");
        self.shapes.push(shape);
        Ok(idx)
    }

    /// Returns the shape at `index`, or an error if the index is out of range.
    pub fn get_by_index(&self, index: ShapeIndex) -> Result<&Shape, BoxError> {
        self.shapes
            .get(index.to_index())
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Removes and returns the shape at `index`, or returns an error if the
    /// index is out of range. Every later shape moves down by one index.
    pub fn extract_by_index(&mut self, index: ShapeIndex) -> Result<Shape, BoxError> {
        self.check_index(index)?;
        let shape = self.shapes.remove(index.to_index());
        log::trace!("extracted {shape} from box at {index}");
        Ok(shape)
    }

    /// Replaces the shape at `index` and returns the old one, or returns an
    /// error if the index is out of range.
    pub fn replace_by_index(
        &mut self,
        index: ShapeIndex,
        shape: impl Into<Shape>,
    ) -> Result<Shape, BoxError> {
        self.check_index(index)?;
        let new_shape = shape.into();
        let old_shape = std::mem::replace(&mut self.shapes[index.to_index()], new_shape);
        log::trace!("replaced {old_shape} with {new_shape} in box at {index}");
        Ok(old_shape)
    }

    /// Returns the sum of the perimeters of every shape in the box.
    pub fn sum_perimeter(&self) -> Float {
        self.shapes.iter().map(Measure::perimeter).sum()
    }
    /// Returns the sum of the areas of every shape in the box.
    pub fn sum_area(&self) -> Float {
        self.shapes.iter().map(Measure::area).sum()
    }

    /// Returns the number of shapes of the given kind in the box.
    pub fn count_kind(&self, kind: ShapeKind) -> usize {
        self.shapes.iter().filter(|s| s.is_kind(kind)).count()
    }

    /// Removes every shape of the given kind and returns how many were
    /// removed. The remaining shapes keep their relative order.
    ///
    /// Returns an error if there are no shapes of that kind.
    pub fn remove_all_of_kind(&mut self, kind: ShapeKind) -> Result<usize, BoxError> {
        let count = self.count_kind(kind);
        if count == 0 {
            return Err(BoxError::NoShapesOfKind { kind });
        }
        self.shapes.retain(|s| !s.is_kind(kind));
        log::debug!("removed {count} {kind} shapes from box");
        Ok(count)
    }

    /// Removes every circle and returns how many were removed. The remaining
    /// shapes keep their relative order.
    ///
    /// Returns an error if there are no circles.
    pub fn remove_all_circles(&mut self) -> Result<usize, BoxError> {
        self.remove_all_of_kind(ShapeKind::Circle)
            .map_err(|_| BoxError::NoCirclesPresent)
    }

    /// Removes every shape from the box.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Capacity clipped to the number of distinct [`ShapeIndex`] values.
    fn effective_capacity(capacity: usize) -> usize {
        capacity.min(ShapeIndex::MAX_INDEX.saturating_add(1))
    }

    fn check_index(&self, index: ShapeIndex) -> Result<(), BoxError> {
        match index.to_index() < self.len() {
            true => Ok(()),
            false => Err(self.out_of_range(index)),
        }
    }

    fn out_of_range(&self, index: ShapeIndex) -> BoxError {
        IndexOutOfRange::new(index, self.len()).into()
    }
}
