//! Terminal cell to board coordinate transform.

use ratatui::layout::Rect;
use tictacgo_core::Point;

/// Where the board canvas sits on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    area: Rect,
    extent: f64,
}

impl Viewport {
    /// Board of width and height `extent` drawn into `area`.
    pub fn new(area: Rect, extent: f64) -> Self {
        Self { area, extent }
    }

    /// Maps the center of terminal cell (`column`, `row`) to board coordinates.
    ///
    /// Cells outside the canvas map to points outside the board.
    pub fn to_board(&self, column: u16, row: u16) -> Point {
        let width = f64::from(self.area.width.max(1));
        let height = f64::from(self.area.height.max(1));
        let x = (f64::from(column) - f64::from(self.area.x) + 0.5) * self.extent / width;
        let y = (f64::from(row) - f64::from(self.area.y) + 0.5) * self.extent / height;
        Point::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_cell_centers() {
        let viewport = Viewport::new(Rect::new(10, 5, 30, 15), 510.0);
        assert_eq!(viewport.to_board(10, 5), Point::new(8.5, 17.0));
        assert_eq!(viewport.to_board(39, 19), Point::new(501.5, 493.0));
    }

    #[test]
    fn test_outside_canvas_leaves_board() {
        let viewport = Viewport::new(Rect::new(10, 5, 30, 15), 510.0);
        let point = viewport.to_board(0, 0);
        assert!(point.x < 0.0 && point.y < 0.0);
    }
}
