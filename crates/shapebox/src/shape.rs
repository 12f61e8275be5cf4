//! Shapes and their measurements.

use std::f64::consts::PI;
use std::fmt;

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::Float;

/// Something with a perimeter and an area.
pub trait Measure {
    /// Returns the length of the boundary.
    fn perimeter(&self) -> Float;
    /// Returns the size of the enclosed region.
    fn area(&self) -> Float;
}

/// Circle, given by its radius.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq)]
pub struct Circle {
    /// Distance from the center to the boundary.
    pub radius: Float,
}
impl Circle {
    /// Constructs a circle with the given radius.
    pub const fn new(radius: Float) -> Self {
        Self { radius }
    }
}
impl Measure for Circle {
    fn perimeter(&self) -> Float {
        2.0 * PI * self.radius
    }
    fn area(&self) -> Float {
        PI * self.radius * self.radius
    }
}

/// Equilateral triangle, given by its side length.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq)]
pub struct Triangle {
    /// Length of each side.
    pub side: Float,
}
impl Triangle {
    /// Constructs an equilateral triangle with the given side length.
    pub const fn new(side: Float) -> Self {
        Self { side }
    }
    /// Returns the distance from a side to the opposite vertex.
    pub fn height(&self) -> Float {
        Float::sqrt(3.0) / 2.0 * self.side
    }
}
impl Measure for Triangle {
    fn perimeter(&self) -> Float {
        3.0 * self.side
    }
    fn area(&self) -> Float {
        self.height() * self.side / 2.0
    }
}

/// Axis-aligned rectangle, given by its width and height.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq)]
pub struct Rectangle {
    /// Horizontal size.
    pub width: Float,
    /// Vertical size.
    pub height: Float,
}
impl Rectangle {
    /// Constructs a rectangle with the given width and height.
    pub const fn new(width: Float, height: Float) -> Self {
        Self { width, height }
    }
}
impl Measure for Rectangle {
    fn perimeter(&self) -> Float {
        2.0 * (self.width + self.height)
    }
    fn area(&self) -> Float {
        self.width * self.height
    }
}

/// Kind of shape, without any dimensions.
#[derive(Serialize, Deserialize, Debug, Display, EnumIter, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ShapeKind {
    /// [`Circle`]
    Circle,
    /// [`Triangle`]
    Triangle,
    /// [`Rectangle`]
    Rectangle,
}

/// Any supported shape.
///
/// Serialized as a map with a `kind` field naming the variant, e.g.
/// `{ kind: circle, radius: 1.0 }`.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    /// Circle
    Circle(Circle),
    /// Equilateral triangle
    Triangle(Triangle),
    /// Rectangle
    Rectangle(Rectangle),
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Circle(c) => write!(f, "circle(r={})", c.radius),
            Shape::Triangle(t) => write!(f, "triangle(side={})", t.side),
            Shape::Rectangle(r) => write!(f, "rectangle({}x{})", r.width, r.height),
        }
    }
}

impl From<Circle> for Shape {
    fn from(value: Circle) -> Self {
        Shape::Circle(value)
    }
}
impl From<Triangle> for Shape {
    fn from(value: Triangle) -> Self {
        Shape::Triangle(value)
    }
}
impl From<Rectangle> for Shape {
    fn from(value: Rectangle) -> Self {
        Shape::Rectangle(value)
    }
}

impl Measure for Shape {
    fn perimeter(&self) -> Float {
        match self {
            Shape::Circle(c) => c.perimeter(),
            Shape::Triangle(t) => t.perimeter(),
            Shape::Rectangle(r) => r.perimeter(),
        }
    }
    fn area(&self) -> Float {
        match self {
            Shape::Circle(c) => c.area(),
            Shape::Triangle(t) => t.area(),
            Shape::Rectangle(r) => r.area(),
        }
    }
}

impl AbsDiffEq for Shape {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        crate::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        match (self, other) {
            (Shape::Circle(a), Shape::Circle(b)) => a.radius.abs_diff_eq(&b.radius, epsilon),
            (Shape::Triangle(a), Shape::Triangle(b)) => a.side.abs_diff_eq(&b.side, epsilon),
            (Shape::Rectangle(a), Shape::Rectangle(b)) => {
                a.width.abs_diff_eq(&b.width, epsilon) && a.height.abs_diff_eq(&b.height, epsilon)
            }
            _ => false,
        }
    }
}

impl Shape {
    /// Returns the kind of shape.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Triangle(_) => ShapeKind::Triangle,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
        }
    }
    /// Returns whether the shape is of the given kind, regardless of its
    /// dimensions.
    pub fn is_kind(&self, kind: ShapeKind) -> bool {
        self.kind() == kind
    }
    /// Returns whether the shape is a circle.
    pub fn is_circle(&self) -> bool {
        matches!(self, Shape::Circle(_))
    }
}
