// File: crates/scatter-core/src/tooltip.rs
// Summary: Transient hover tooltip state driven by pointer enter/move/leave.

use crate::sample::Point;

/// Overlay offset from the cursor, in screen pixels.
pub const TOOLTIP_OFFSET: (f32, f32) = (10.0, -28.0);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipState {
    pub visible: bool,
    /// Last known cursor position in screen pixels.
    pub cursor: (f32, f32),
    /// Data coordinates of the hovered point.
    pub datum: Option<Point>,
}

impl TooltipState {
    /// Pointer entered (or is over) `datum` at `cursor`.
    pub fn show(&mut self, datum: Point, cursor: (f32, f32)) {
        self.visible = true;
        self.cursor = cursor;
        self.datum = Some(datum);
    }

    /// Pointer moved while over the same point; only the position changes.
    pub fn move_to(&mut self, cursor: (f32, f32)) {
        self.cursor = cursor;
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.datum = None;
    }

    /// Text shown in the overlay, coordinates to two decimals.
    pub fn label(&self) -> Option<String> {
        match (self.visible, self.datum) {
            (true, Some(p)) => Some(format_datum(&p)),
            _ => None,
        }
    }

    /// Top-left corner of the overlay box in screen pixels.
    pub fn anchor(&self) -> (f32, f32) {
        (self.cursor.0 + TOOLTIP_OFFSET.0, self.cursor.1 + TOOLTIP_OFFSET.1)
    }
}

pub fn format_datum(p: &Point) -> String {
    format!("x: {:.2}, y: {:.2}", p.x, p.y)
}
