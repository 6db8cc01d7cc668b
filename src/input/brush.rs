//! Brush selection.

use crate::draw::MaskFilter;

/// Brush selection.
///
/// The active brush determines how touch gestures turn into strokes: freehand
/// brushes append curve segments as the finger moves, shape brushes drag out a
/// preview that is committed on release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Brush {
    /// Plain freehand drawing (default)
    #[default]
    Normal,
    /// Freehand erasing - clears previously drawn content along the path
    Eraser,
    /// Freehand drawing with an emboss filter
    Emboss,
    /// Freehand drawing with a blur filter
    Blur,
    /// Drag out a circle centered on the gesture start
    Circle,
    /// Drag out an axis-aligned rectangle between start and end
    Square,
}

impl Brush {
    /// Brushes that append to the current stroke as the finger moves.
    pub fn is_freehand(&self) -> bool {
        matches!(self, Brush::Normal | Brush::Eraser | Brush::Emboss | Brush::Blur)
    }

    /// Brushes that drag out a shape via the preview path.
    pub fn is_shape(&self) -> bool {
        matches!(self, Brush::Circle | Brush::Square)
    }

    /// The post-processing filter this brush stamps into new style snapshots.
    pub fn mask_filter(&self) -> MaskFilter {
        match self {
            Brush::Emboss => MaskFilter::Emboss,
            Brush::Blur => MaskFilter::Blur,
            _ => MaskFilter::None,
        }
    }

    /// Human-readable name for logs and the demo binary.
    pub fn label(&self) -> &'static str {
        match self {
            Brush::Normal => "normal",
            Brush::Eraser => "eraser",
            Brush::Emboss => "emboss",
            Brush::Blur => "blur",
            Brush::Circle => "circle",
            Brush::Square => "square",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brush_kind_partitions() {
        for brush in [Brush::Normal, Brush::Eraser, Brush::Emboss, Brush::Blur] {
            assert!(brush.is_freehand());
            assert!(!brush.is_shape());
        }
        for brush in [Brush::Circle, Brush::Square] {
            assert!(brush.is_shape());
            assert!(!brush.is_freehand());
        }
    }

    #[test]
    fn only_effect_brushes_carry_filters() {
        assert_eq!(Brush::Emboss.mask_filter(), MaskFilter::Emboss);
        assert_eq!(Brush::Blur.mask_filter(), MaskFilter::Blur);
        assert_eq!(Brush::Normal.mask_filter(), MaskFilter::None);
        assert_eq!(Brush::Eraser.mask_filter(), MaskFilter::None);
    }
}
