//! Tool selection, style template edits, undo and clear.

use crate::draw::Color;
use crate::input::brush::Brush;

use super::PaintState;

impl PaintState {
    /// Switches the active brush.
    ///
    /// Brush transitions are always legal. Selecting any non-eraser brush
    /// clears the eraser flag; selecting the eraser sets it.
    pub fn select_brush(&mut self, brush: Brush) {
        self.current_brush = brush;
        self.eraser_active = brush == Brush::Eraser;
        log::debug!("brush set to {}", brush.label());
    }

    /// Sets the stroke color for strokes created after this call.
    ///
    /// Already-committed strokes keep the snapshot captured at their
    /// creation.
    pub fn set_stroke_color(&mut self, color: Color) {
        self.current_color = color;
    }

    /// Sets the stroke width for strokes created after this call.
    pub fn set_stroke_width(&mut self, width: f64) {
        self.current_width = width;
    }

    /// Sets the minimum per-axis finger travel for move coalescing.
    pub fn set_touch_tolerance(&mut self, tolerance: f64) {
        self.touch_tolerance = tolerance;
    }

    /// Toggles between outlined and filled painting for new strokes.
    pub fn set_fill_mode(&mut self, fill: bool) {
        self.fill_mode = fill;
    }

    /// Removes the most recently committed stroke; no-op when empty.
    pub fn undo(&mut self) {
        if self.frame.undo().is_some() {
            self.needs_redraw = true;
            log::debug!("undo, {} strokes remain", self.frame.len());
        }
    }

    /// Removes every committed stroke.
    pub fn clear(&mut self) {
        self.frame.clear();
        self.needs_redraw = true;
        log::debug!("canvas cleared");
    }

    /// True when any stroke has been committed on top of the image.
    pub fn is_modified(&self) -> bool {
        self.frame.is_modified()
    }
}
