//! Cairo-based rendering: replays stroke command sequences onto a context.

use super::frame::Stroke;
use super::path::{Path, PathCommand};
use super::style::{MaskFilter, PaintMode, Style};

/// Tunable parameters for the mask-filter approximations.
///
/// Cairo has no stroke-level blur/emboss primitives, so the renderer fakes
/// them with extra passes; these control how far those passes reach.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectSettings {
    /// Radius of the blur halo in pixels.
    pub blur_radius: f64,
    /// Offset of the emboss highlight/shadow passes in pixels.
    pub emboss_offset: f64,
}

impl Default for EffectSettings {
    fn default() -> Self {
        Self {
            blur_radius: 5.0,
            emboss_offset: 3.5,
        }
    }
}

/// Fully clears the compositing surface before a render pass.
pub fn clear_surface(ctx: &cairo::Context) {
    let _ = ctx.save();
    ctx.set_operator(cairo::Operator::Clear);
    let _ = ctx.paint();
    let _ = ctx.restore();
}

/// Renders all strokes in z-order (first stroke = bottom layer).
pub fn render_strokes(ctx: &cairo::Context, strokes: &[Stroke], effects: EffectSettings) {
    for stroke in strokes {
        render_stroke(ctx, stroke, effects);
    }
}

/// Renders a single stroke with its captured style.
///
/// Eraser strokes composite with the clear operator so they punch through
/// everything drawn below them on the same surface. Blur and emboss tags are
/// approximated with extra passes around the main one.
pub fn render_stroke(ctx: &cairo::Context, stroke: &Stroke, effects: EffectSettings) {
    let _ = ctx.save();

    if stroke.style.erase {
        ctx.set_operator(cairo::Operator::Clear);
        paint_path(ctx, &stroke.path, &stroke.style);
        let _ = ctx.restore();
        return;
    }

    match stroke.style.filter {
        MaskFilter::Blur => render_blurred(ctx, stroke, effects.blur_radius),
        MaskFilter::Emboss => render_embossed(ctx, stroke, effects.emboss_offset),
        MaskFilter::None => {
            set_source(ctx, &stroke.style, 1.0);
            paint_path(ctx, &stroke.path, &stroke.style);
        }
    }

    let _ = ctx.restore();
}

/// Blur approximation: wide low-alpha halo passes beneath the main stroke.
fn render_blurred(ctx: &cairo::Context, stroke: &Stroke, radius: f64) {
    let style = &stroke.style;
    if style.mode == PaintMode::Stroke {
        for (spread, alpha) in [(2.0, 0.15), (1.0, 0.3)] {
            set_source(ctx, style, alpha);
            ctx.set_line_width(style.width + 2.0 * radius * spread);
            apply_line_style(ctx);
            replay(ctx, &stroke.path);
            let _ = ctx.stroke();
        }
    }
    set_source(ctx, style, 0.9);
    paint_path(ctx, &stroke.path, style);
}

/// Emboss approximation: offset shadow and highlight passes beneath the main
/// stroke.
fn render_embossed(ctx: &cairo::Context, stroke: &Stroke, offset: f64) {
    let style = &stroke.style;

    let _ = ctx.save();
    ctx.translate(offset, offset);
    ctx.set_source_rgba(0.0, 0.0, 0.0, 0.5);
    paint_path(ctx, &stroke.path, style);
    let _ = ctx.restore();

    let _ = ctx.save();
    ctx.translate(-offset, -offset);
    ctx.set_source_rgba(1.0, 1.0, 1.0, 0.5);
    paint_path(ctx, &stroke.path, style);
    let _ = ctx.restore();

    set_source(ctx, style, 1.0);
    paint_path(ctx, &stroke.path, style);
}

fn set_source(ctx: &cairo::Context, style: &Style, alpha_scale: f64) {
    let c = style.color;
    ctx.set_source_rgba(c.r, c.g, c.b, c.a * alpha_scale);
}

fn apply_line_style(ctx: &cairo::Context) {
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);
}

/// Strokes or fills `path` with the already-configured source.
fn paint_path(ctx: &cairo::Context, path: &Path, style: &Style) {
    ctx.set_line_width(style.width);
    apply_line_style(ctx);
    replay(ctx, path);
    match style.mode {
        PaintMode::Stroke => {
            let _ = ctx.stroke();
        }
        PaintMode::Fill => {
            let _ = ctx.fill();
        }
    }
}

/// Replays a command sequence as a cairo path.
fn replay(ctx: &cairo::Context, path: &Path) {
    ctx.new_path();
    for cmd in path.commands() {
        match *cmd {
            PathCommand::MoveTo(p) => ctx.move_to(p.x, p.y),
            PathCommand::LineTo(p) => ctx.line_to(p.x, p.y),
            PathCommand::QuadTo { ctrl, to } => {
                // Cairo only has cubics; elevate the quadratic by placing the
                // cubic control points two thirds of the way to the quad control.
                let (x0, y0) = ctx.current_point().unwrap_or((ctrl.x, ctrl.y));
                let c1x = x0 + 2.0 / 3.0 * (ctrl.x - x0);
                let c1y = y0 + 2.0 / 3.0 * (ctrl.y - y0);
                let c2x = to.x + 2.0 / 3.0 * (ctrl.x - to.x);
                let c2y = to.y + 2.0 / 3.0 * (ctrl.y - to.y);
                ctx.curve_to(c1x, c1y, c2x, c2y, to.x, to.y);
            }
            PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                ctx.curve_to(ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y);
            }
            PathCommand::Arc {
                bounds,
                start_deg,
                sweep_deg,
            } => {
                // Same translate/scale trick cairo needs for ellipses.
                let cx = (bounds.left + bounds.right) / 2.0;
                let cy = (bounds.top + bounds.bottom) / 2.0;
                let rx = bounds.width() / 2.0;
                let ry = bounds.height() / 2.0;
                if rx != 0.0 && ry != 0.0 {
                    let _ = ctx.save();
                    ctx.translate(cx, cy);
                    ctx.scale(rx, ry);
                    ctx.arc(
                        0.0,
                        0.0,
                        1.0,
                        start_deg.to_radians(),
                        (start_deg + sweep_deg).to_radians(),
                    );
                    let _ = ctx.restore();
                }
            }
            PathCommand::Close => ctx.close_path(),
        }
    }
}
