//! Paints recorded shapes onto a ratatui canvas.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        Widget,
        canvas::{Canvas, Circle, Line, Rectangle},
    },
};
use tictacgo_core::{Ink, Shape};

/// Widget showing the board and everything drawn on it.
///
/// Board coordinates grow downward; the canvas grows upward, so `y` is
/// flipped. Braille dots have a fixed width, so stroke thickness is dropped.
#[derive(Debug, Clone, Copy)]
pub struct BoardCanvas<'a> {
    shapes: &'a [Shape],
    extent: f64,
}

impl<'a> BoardCanvas<'a> {
    /// Canvas for a board `extent` units wide and tall.
    pub fn new(shapes: &'a [Shape], extent: f64) -> Self {
        Self { shapes, extent }
    }
}

/// Terminal color for each ink.
pub fn color(ink: Ink) -> Color {
    match ink {
        Ink::Grid => Color::Black,
        Ink::Circle => Color::Red,
        Ink::Cross => Color::Blue,
    }
}

impl Widget for BoardCanvas<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Self { shapes, extent } = self;
        Canvas::default()
            .marker(Marker::Braille)
            .background_color(Color::White)
            .x_bounds([0.0, extent])
            .y_bounds([0.0, extent])
            .paint(|ctx| {
                for shape in shapes {
                    let stroke = color(shape.ink());
                    match *shape {
                        Shape::Rectangle { min, max, .. } => ctx.draw(&Rectangle {
                            x: min.x,
                            y: extent - max.y,
                            width: max.x - min.x,
                            height: max.y - min.y,
                            color: stroke,
                        }),
                        Shape::Circle { center, radius, .. } => ctx.draw(&Circle {
                            x: center.x,
                            y: extent - center.y,
                            radius,
                            color: stroke,
                        }),
                        Shape::Segment { from, to, .. } => ctx.draw(&Line {
                            x1: from.x,
                            y1: extent - from.y,
                            x2: to.x,
                            y2: extent - to.y,
                            color: stroke,
                        }),
                    }
                }
            })
            .render(area, buf);
    }
}
