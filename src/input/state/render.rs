//! Rendering and export entry points for the session.

use crate::draw::{self, ExportError};

use super::PaintState;

impl PaintState {
    /// Renders the session onto the compositing surface.
    ///
    /// The surface is fully cleared first, then committed strokes draw in
    /// z-order with the preview (if any) on top. Session state is only read;
    /// every stroke already carries its finalized style snapshot.
    pub fn render(&mut self, ctx: &cairo::Context) {
        draw::clear_surface(ctx);
        draw::render_strokes(ctx, self.frame.strokes(), self.effects);
        if let Some(preview) = &self.preview {
            draw::render_stroke(ctx, preview, self.effects);
        }
        self.needs_redraw = false;
    }

    /// Flattens the committed strokes onto a copy of the base image.
    ///
    /// Returns the base surface itself when nothing has been drawn. The
    /// strokes are mapped back into image space through the inverse of the
    /// display transform; `base` is never mutated.
    pub fn flatten(&self, base: &cairo::ImageSurface) -> Result<cairo::ImageSurface, ExportError> {
        draw::flatten(base, &self.frame, self.transform(), self.effects)
    }
}
