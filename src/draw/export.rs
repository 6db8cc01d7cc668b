//! Flattening committed strokes onto the base image.

use super::frame::Frame;
use super::render::{EffectSettings, render_stroke};
use crate::util::ViewTransform;
use thiserror::Error;

/// Errors raised while flattening a session onto a bitmap.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The display transform has zero scale and cannot map strokes back into
    /// image space.
    #[error("display transform is not invertible")]
    NonInvertibleTransform,

    /// The target surface or its drawing context could not be created.
    #[error("cairo error: {0}")]
    Cairo(#[from] cairo::Error),
}

/// Flattens every committed stroke onto a copy of `base`.
///
/// When the session is unmodified the base surface handle is returned as-is
/// (identity, no pixel copy). Otherwise a same-size surface is allocated, the
/// base image painted into it, and each stroke replayed through the inverse
/// display transform with its width scaled into image space. `base` itself is
/// never drawn on.
pub fn flatten(
    base: &cairo::ImageSurface,
    frame: &Frame,
    transform: &ViewTransform,
    effects: EffectSettings,
) -> Result<cairo::ImageSurface, ExportError> {
    if !frame.is_modified() {
        // Surfaces are reference-counted handles; cloning returns the same
        // underlying image without copying pixels.
        return Ok(base.clone());
    }

    let inverse = transform
        .invert()
        .ok_or(ExportError::NonInvertibleTransform)?;

    let result = cairo::ImageSurface::create(cairo::Format::ARgb32, base.width(), base.height())?;
    let ctx = cairo::Context::new(&result)?;

    ctx.set_source_surface(base, 0.0, 0.0)?;
    ctx.paint()?;

    for stroke in frame.strokes() {
        let mut flattened = stroke.clone();
        flattened.path = stroke.path.transformed(&inverse);
        flattened.style.width *= inverse.scale;
        render_stroke(&ctx, &flattened, effects);
    }

    Ok(result)
}
