//! Painting session state and input state management.

use crate::config::Config;
use crate::draw::{Color, EffectSettings, Frame, MaskFilter, PaintMode, Stroke, Style, color};
use crate::input::brush::Brush;
use crate::util::{Point, RectF, ViewTransform};

/// Current gesture state machine.
///
/// Tracks whether a finger is down and, while it is, the brush captured at
/// gesture start together with the anchor (where the gesture began) and the
/// cursor (the last processed point).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureState {
    /// No finger down - waiting for input.
    Idle,
    /// A gesture is in progress.
    Drawing {
        /// Brush captured when the finger went down.
        brush: Brush,
        /// Gesture start point.
        anchor: Point,
        /// Last processed point.
        cursor: Point,
    },
}

/// Main session state for one painting view.
///
/// Owns the committed stroke stack, the transient shape preview, the live
/// style template, and the display geometry of the host image. All touch and
/// tool operations mutate this state; rendering and export only read it.
pub struct PaintState {
    /// Committed strokes in z-order.
    pub frame: Frame,
    /// In-progress shape drag, redrawn on top of committed strokes.
    /// Never survives the end of a gesture.
    pub preview: Option<Stroke>,
    /// Brush applied to gestures started after now.
    pub current_brush: Brush,
    /// Live stroke color template.
    pub current_color: Color,
    /// Live stroke width template in pixels.
    pub current_width: f64,
    /// Paint closed shapes filled instead of outlined.
    pub fill_mode: bool,
    /// Whether new strokes erase instead of paint.
    pub eraser_active: bool,
    /// Minimum per-axis finger travel before a move event advances a stroke.
    pub touch_tolerance: f64,
    /// Mask-filter approximation parameters passed to the renderer.
    pub effects: EffectSettings,
    /// Whether the display needs to be redrawn.
    pub needs_redraw: bool,
    /// Current gesture state machine.
    pub state: GestureState,
    image_width: f64,
    image_height: f64,
    transform: ViewTransform,
}

impl Default for PaintState {
    fn default() -> Self {
        Self::with_defaults(color::WHITE, 12.0, 4.0, false, EffectSettings::default())
    }
}

impl PaintState {
    /// Creates a new session with the given style defaults.
    ///
    /// Image geometry starts at zero and must be provided by the host view
    /// via [`PaintState::set_image_geometry`] before gestures take effect.
    pub fn with_defaults(
        color: Color,
        width: f64,
        touch_tolerance: f64,
        fill_mode: bool,
        effects: EffectSettings,
    ) -> Self {
        Self {
            frame: Frame::new(),
            preview: None,
            current_brush: Brush::Normal,
            current_color: color,
            current_width: width,
            fill_mode,
            eraser_active: false,
            touch_tolerance,
            effects,
            needs_redraw: true,
            state: GestureState::Idle,
            image_width: 0.0,
            image_height: 0.0,
            transform: ViewTransform::identity(),
        }
    }

    /// Creates a session from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::with_defaults(
            config.drawing.color(),
            config.drawing.default_thickness,
            config.drawing.touch_tolerance,
            config.drawing.fill_mode,
            config.effects.settings(),
        )
    }

    /// Updates the host image's intrinsic size and display transform.
    ///
    /// The transform carries the translation and uniform scale of the image
    /// inside the view. Without geometry, gestures are no-ops - there is
    /// nothing to draw on.
    pub fn set_image_geometry(&mut self, width: f64, height: f64, transform: ViewTransform) {
        self.image_width = width;
        self.image_height = height;
        self.transform = transform;
        log::debug!(
            "image geometry set to {width}x{height}, scale {:.3}, translation ({:.1}, {:.1})",
            transform.scale,
            transform.tx,
            transform.ty
        );
    }

    /// The current display transform of the host image.
    pub fn transform(&self) -> &ViewTransform {
        &self.transform
    }

    /// Displayed image bounds in view space, or `None` when no image is set.
    pub(crate) fn image_bounds(&self) -> Option<RectF> {
        if self.image_width <= 0.0 || self.image_height <= 0.0 {
            return None;
        }
        Some(self.transform.image_bounds(self.image_width, self.image_height))
    }

    /// Captures the live style template into an immutable per-stroke snapshot.
    ///
    /// The filter tag comes from the brush owning the gesture, so committed
    /// strokes keep their appearance when the template changes later. Hosts
    /// pushing builder-made paths straight onto the frame use this too.
    pub fn style_snapshot(&self, brush: Brush) -> Style {
        Style {
            color: self.current_color,
            width: self.current_width,
            mode: if self.fill_mode {
                PaintMode::Fill
            } else {
                PaintMode::Stroke
            },
            erase: brush == Brush::Eraser,
            filter: brush.mask_filter(),
        }
    }

    /// Filter the current brush would stamp on a new stroke.
    pub fn active_filter(&self) -> MaskFilter {
        self.current_brush.mask_filter()
    }
}
