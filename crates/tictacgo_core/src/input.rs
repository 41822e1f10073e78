//! Click-to-cell mapping.

use super::{Cell, Geometry, Point};
use tracing::{instrument, trace};

/// Order cells are scanned in: columns left to right, each from the bottom
/// row up.
const SCAN_ORDER: [Cell; 9] = [
    Cell::at(2, 0),
    Cell::at(1, 0),
    Cell::at(0, 0),
    Cell::at(2, 1),
    Cell::at(1, 1),
    Cell::at(0, 1),
    Cell::at(2, 2),
    Cell::at(1, 2),
    Cell::at(0, 2),
];

/// Returns the cell whose center is nearest to `click` by Manhattan distance.
///
/// Only a strictly smaller distance replaces the current best, so the first
/// of several equidistant cells in [`SCAN_ORDER`] wins: a click on the line
/// between two stacked cells picks the lower one.
/// Points outside the board still map to the nearest cell.
#[instrument(skip(geometry))]
pub fn nearest_cell(geometry: &Geometry, click: Point) -> Cell {
    let mut nearest = SCAN_ORDER[0];
    let mut min_distance = f64::MAX;
    for cell in SCAN_ORDER {
        let distance = click.manhattan(geometry.center(cell));
        if distance < min_distance {
            min_distance = distance;
            nearest = cell;
        }
    }
    trace!(%nearest, min_distance, "Mapped click");
    nearest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_center_maps_to_cell() {
        let geometry = Geometry::default();
        for cell in Cell::ALL {
            assert_eq!(nearest_cell(&geometry, geometry.center(cell)), cell);
        }
    }

    #[test]
    fn test_far_outside_maps_to_corner() {
        let geometry = Geometry::default();
        assert_eq!(
            nearest_cell(&geometry, Point::new(-1000.0, -1000.0)),
            Cell::TOP_LEFT
        );
        assert_eq!(
            nearest_cell(&geometry, Point::new(5000.0, 5000.0)),
            Cell::BOTTOM_RIGHT
        );
        assert_eq!(
            nearest_cell(&geometry, Point::new(-50.0, 9999.0)),
            Cell::BOTTOM_LEFT
        );
    }

    #[test]
    fn test_scan_order_covers_every_cell() {
        let mut cells = SCAN_ORDER.to_vec();
        cells.sort();
        assert_eq!(cells, Cell::ALL.to_vec());
    }

    #[test]
    fn test_horizontal_tie_goes_to_left_cell() {
        let geometry = Geometry::default();
        // Midway between the two top-row cells on the left.
        let click = Point::new(170.0, 85.0);
        assert_eq!(nearest_cell(&geometry, click), Cell::TOP_LEFT);
    }

    #[test]
    fn test_vertical_tie_goes_to_lower_cell() {
        let geometry = Geometry::default();
        // On the line between (0, 0) and (1, 0).
        let click = Point::new(85.0, 170.0);
        assert_eq!(nearest_cell(&geometry, click), Cell::at(1, 0));
        // On the line between (1, 2) and (2, 2).
        let click = Point::new(425.0, 340.0);
        assert_eq!(nearest_cell(&geometry, click), Cell::BOTTOM_RIGHT);
    }

    #[test]
    fn test_corner_tie_goes_to_lower_left_cell() {
        let geometry = Geometry::default();
        // Grid corner shared by (0, 0), (0, 1), (1, 0) and (1, 1).
        let click = Point::new(170.0, 170.0);
        assert_eq!(nearest_cell(&geometry, click), Cell::at(1, 0));
        // Grid corner shared by (1, 1), (1, 2), (2, 1) and (2, 2).
        let click = Point::new(340.0, 340.0);
        assert_eq!(nearest_cell(&geometry, click), Cell::at(2, 1));
    }
}
