//! Draw commands and the surface that receives them.

use super::{Ink, Point};
use serde::{Deserialize, Serialize};

/// A single stroked primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Axis-aligned outline between two corners.
    Rectangle {
        /// Top-left corner.
        min: Point,
        /// Bottom-right corner.
        max: Point,
        /// Stroke width.
        thickness: f64,
        /// Stroke color.
        ink: Ink,
    },
    /// Circle outline.
    Circle {
        /// Center point.
        center: Point,
        /// Radius.
        radius: f64,
        /// Stroke width.
        thickness: f64,
        /// Stroke color.
        ink: Ink,
    },
    /// Straight line segment.
    Segment {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Stroke width.
        thickness: f64,
        /// Stroke color.
        ink: Ink,
    },
}

impl Shape {
    /// Ink the shape is stroked with.
    pub fn ink(&self) -> Ink {
        match self {
            Shape::Rectangle { ink, .. } | Shape::Circle { ink, .. } | Shape::Segment { ink, .. } => *ink,
        }
    }
}

/// Receives draw commands from the game driver.
///
/// Shapes accumulate: a surface keeps everything it has been given and
/// repaints all of it every frame.
pub trait Surface {
    /// Adds a shape to the picture.
    fn draw(&mut self, shape: Shape);
}

/// Surface that keeps an ordered list of every shape drawn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSurface {
    shapes: Vec<Shape>,
}

impl RecordingSurface {
    /// Creates an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shapes in the order they were drawn.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
}

impl Surface for RecordingSurface {
    fn draw(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }
}
