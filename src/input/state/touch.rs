//! Touch gesture processing: the heart of the session controller.

use crate::draw::{Path, Stroke};
use crate::input::brush::Brush;
use crate::input::events::TouchEvent;
use crate::util::{Point, midpoint};

use super::{GestureState, PaintState};

impl PaintState {
    /// Dispatches a touch event to the matching handler.
    pub fn handle_touch(&mut self, event: TouchEvent) {
        match event {
            TouchEvent::Down { x, y } => self.on_touch_down(x, y),
            TouchEvent::Move { x, y } => self.on_touch_move(x, y),
            TouchEvent::Up => self.on_touch_up(),
        }
    }

    /// Processes a finger-down event.
    ///
    /// Points outside the displayed image bounds are silently ignored - a
    /// deliberate clamp policy for screen-edge gestures, not an error. For
    /// freehand brushes a new stroke is committed immediately, starting one
    /// pixel in from the touch point; shape brushes only record the anchor
    /// and build their stroke lazily through the preview.
    pub fn on_touch_down(&mut self, x: f64, y: f64) {
        let Some(bounds) = self.image_bounds() else {
            return;
        };

        let point = Point::new(x, y);
        if !bounds.contains(point) {
            return;
        }

        let brush = self.current_brush;
        if brush.is_freehand() {
            let path = Path::begin(Point::new(x + 1.0, y + 1.0));
            let style = self.style_snapshot(brush);
            self.frame.push(Stroke::new(path, style));
        }

        self.state = GestureState::Drawing {
            brush,
            anchor: point,
            cursor: point,
        };
        self.needs_redraw = true;
    }

    /// Processes a finger-drag event.
    ///
    /// The point is clamped into the image bounds. Movements smaller than the
    /// touch tolerance on both axes are coalesced away to avoid command spam
    /// from micro-jitter. Freehand brushes extend the current stroke with a
    /// quadratic segment whose control point is the previous cursor and whose
    /// endpoint is the midpoint towards the new point - incremental Bezier
    /// smoothing. Shape brushes rebuild the preview from scratch.
    pub fn on_touch_move(&mut self, x: f64, y: f64) {
        let Some(bounds) = self.image_bounds() else {
            return;
        };
        let GestureState::Drawing {
            brush,
            anchor,
            cursor,
        } = self.state
        else {
            return;
        };

        let point = Point::new(
            x.clamp(bounds.left, bounds.right),
            y.clamp(bounds.top, bounds.bottom),
        );

        let dx = (point.x - cursor.x).abs();
        let dy = (point.y - cursor.y).abs();
        if dx < self.touch_tolerance && dy < self.touch_tolerance {
            return;
        }

        match brush {
            Brush::Normal | Brush::Emboss | Brush::Blur | Brush::Eraser => {
                if let Some(stroke) = self.frame.current_mut() {
                    stroke.path.quad_to(cursor, midpoint(cursor, point));
                }
            }
            Brush::Circle => {
                // Horizontal delta only, halved - the radius formula the
                // gesture has always used.
                let radius = (cursor.x - anchor.x).abs() / 2.0;
                self.preview = Some(self.build_circle(anchor, radius));
            }
            Brush::Square => {
                self.preview = Some(self.build_square(anchor, point));
            }
        }

        self.state = GestureState::Drawing {
            brush,
            anchor,
            cursor: point,
        };
        self.needs_redraw = true;
    }

    /// Processes a finger-up event, completing the gesture.
    ///
    /// Freehand strokes get a final straight segment to the cursor; shape
    /// gestures commit a stroke built from the same formula as the last
    /// preview, and the preview is discarded. Without an active gesture this
    /// is a no-op.
    pub fn on_touch_up(&mut self) {
        let GestureState::Drawing {
            brush,
            anchor,
            cursor,
        } = self.state
        else {
            return;
        };

        match brush {
            Brush::Normal | Brush::Emboss | Brush::Blur | Brush::Eraser => {
                if let Some(stroke) = self.frame.current_mut() {
                    stroke.path.line_to(cursor);
                }
            }
            Brush::Circle => {
                let radius = (cursor.x - anchor.x).abs() / 2.0;
                let stroke = self.build_circle(anchor, radius);
                self.frame.push(stroke);
                self.preview = None;
            }
            Brush::Square => {
                let stroke = self.build_square(anchor, cursor);
                self.frame.push(stroke);
                self.preview = None;
            }
        }

        self.frame.mark_finalized();
        self.state = GestureState::Idle;
        self.needs_redraw = true;
    }

    fn build_circle(&self, anchor: Point, radius: f64) -> Stroke {
        let mut path = Path::begin(Point::new(anchor.x + 1.0, anchor.y + 1.0));
        path.add_circle(anchor, radius);
        Stroke::new(path, self.style_snapshot(Brush::Circle))
    }

    fn build_square(&self, anchor: Point, corner: Point) -> Stroke {
        let mut path = Path::begin(Point::new(anchor.x + 1.0, anchor.y + 1.0));
        path.add_rect(anchor, corner);
        Stroke::new(path, self.style_snapshot(Brush::Square))
    }
}
