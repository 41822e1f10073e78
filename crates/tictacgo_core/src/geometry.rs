//! Fixed geometry of the 3x3 board.
//!
//! Window coordinates put the origin at the top-left corner of the board
//! with `y` growing downward, so row 0 is drawn at the top.

use super::{Cell, Orientation, Victory};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A point in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, derive_new::new)]
pub struct Point {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position, growing downward.
    pub y: f64,
}

impl Point {
    /// Component-wise sum.
    pub fn offset_by(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Manhattan distance to `other`.
    pub fn manhattan(self, other: Point) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// Sizes everything on the board is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Getters, Serialize, Deserialize)]
pub struct Dimensions {
    /// Side length of one cell.
    side: f64,
    /// Width and height of an X.
    cross_length: f64,
    /// Radius of an O.
    circle_radius: f64,
    /// Stroke thickness for every shape.
    thickness: f64,
}

impl Dimensions {
    const DEFAULT_SIDE: f64 = 170.0;
    const DEFAULT_CROSS: f64 = 90.0;
    const DEFAULT_RADIUS: f64 = 50.0;
    const DEFAULT_THICKNESS: f64 = 10.0;

    /// Dimensions for a cell of the given side, keeping default proportions.
    #[instrument]
    pub fn scaled(side: f64) -> Self {
        let ratio = side / Self::DEFAULT_SIDE;
        Self {
            side,
            cross_length: Self::DEFAULT_CROSS * ratio,
            circle_radius: Self::DEFAULT_RADIUS * ratio,
            thickness: Self::DEFAULT_THICKNESS * ratio,
        }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::scaled(Self::DEFAULT_SIDE)
    }
}

/// Lookup table of cell centers and strike-line offsets.
///
/// Built once; never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    dimensions: Dimensions,
    centers: [Point; 9],
    offsets: [Point; 9],
}

impl Geometry {
    /// Builds the table for the given dimensions.
    #[instrument]
    pub fn new(dimensions: Dimensions) -> Self {
        let side = dimensions.side;
        let reach = side / 3.0;
        let centers = Cell::ALL.map(|cell| {
            Point::new(
                (2.0 * f64::from(cell.col()) + 1.0) * side / 2.0,
                (2.0 * f64::from(cell.row()) + 1.0) * side / 2.0,
            )
        });
        let offsets = Cell::ALL.map(|cell| {
            Point::new(
                (f64::from(cell.col()) - 1.0) * reach,
                (f64::from(cell.row()) - 1.0) * reach,
            )
        });
        Self {
            dimensions,
            centers,
            offsets,
        }
    }

    /// Sizes the table was built from.
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// Center of `cell`.
    pub fn center(&self, cell: Cell) -> Point {
        self.centers[cell.index()]
    }

    /// Direction a strike line extends past `cell`'s center.
    ///
    /// Points away from the board center; zero for the center cell.
    pub fn offset(&self, cell: Cell) -> Point {
        self.offsets[cell.index()]
    }

    /// Width and height of the whole board.
    pub fn extent(&self) -> f64 {
        self.dimensions.side * 3.0
    }

    /// Top-left and bottom-right corners of `cell`'s outline.
    pub fn square(&self, cell: Cell) -> (Point, Point) {
        let side = self.dimensions.side;
        let min = Point::new(f64::from(cell.col()) * side, f64::from(cell.row()) * side);
        (min, min.offset_by(side, side))
    }

    /// Segment drawn through a winning line.
    ///
    /// Rows extend along `x` only, columns along `y` only, diagonals along both.
    #[instrument(skip(self))]
    pub fn strike(&self, victory: &Victory) -> (Point, Point) {
        let (from, to) = (victory.from(), victory.to());
        let (c1, c2) = (self.center(from), self.center(to));
        let (o1, o2) = (self.offset(from), self.offset(to));
        match victory.line().orientation() {
            Orientation::Row => (c1.offset_by(o1.x, 0.0), c2.offset_by(o2.x, 0.0)),
            Orientation::Column => (c1.offset_by(0.0, o1.y), c2.offset_by(0.0, o2.y)),
            Orientation::Diagonal => (c1.offset_by(o1.x, o1.y), c2.offset_by(o2.x, o2.y)),
        }
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::new(Dimensions::default())
    }
}
