//! Per-stroke style snapshots.

use super::color::Color;

/// Whether a path is stroked along its outline or filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaintMode {
    #[default]
    Stroke,
    Fill,
}

/// Visual post-processing applied to a whole stroke.
///
/// These are opaque tags from the engine's point of view; the renderer decides
/// how to approximate them on the target surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaskFilter {
    #[default]
    None,
    Emboss,
    Blur,
}

/// Style captured by value when a stroke is created.
///
/// Committed strokes own their snapshot, so later edits to the live style
/// template never leak into already-drawn content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// Stroke or fill color.
    pub color: Color,
    /// Line width in view pixels.
    pub width: f64,
    /// Stroke vs fill.
    pub mode: PaintMode,
    /// Erase instead of paint (composites as "clear").
    pub erase: bool,
    /// Post-processing filter tag.
    pub filter: MaskFilter,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: super::color::WHITE,
            width: 12.0,
            mode: PaintMode::Stroke,
            erase: false,
            filter: MaskFilter::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_is_white_stroke() {
        let style = Style::default();
        assert_eq!(style.color, super::super::color::WHITE);
        assert_eq!(style.width, 12.0);
        assert_eq!(style.mode, PaintMode::Stroke);
        assert!(!style.erase);
        assert_eq!(style.filter, MaskFilter::None);
    }
}
