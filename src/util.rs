//! 2D scalar geometry shared across the crate.
//!
//! This module provides:
//! - [`Point`] and [`RectF`] primitives in view-local pixel space
//! - Line algebra used by the star-polygon outline solver
//! - [`ViewTransform`], the translation + uniform scale of the displayed image

/// A point in view-local pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned float rectangle described by its edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectF {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl RectF {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Builds a square rectangle centered on `center` with the given radius.
    pub fn around(center: Point, radius: f64) -> Self {
        Self {
            left: center.x - radius,
            top: center.y - radius,
            right: center.x + radius,
            bottom: center.y + radius,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Edge-inclusive containment test.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }

    /// Whether width and height agree (within float noise).
    pub fn is_square(&self) -> bool {
        (self.width() - self.height()).abs() < 1e-9
    }
}

// ============================================================================
// Line Algebra
// ============================================================================

/// Slope of the line through two points.
///
/// A vertical segment (`p1.x == p2.x`) divides by zero and yields an infinite
/// or NaN slope. Callers feed the result through range checks that reject
/// non-finite intersections, so the propagation is intentional.
pub fn slope(p1: Point, p2: Point) -> f64 {
    (p2.y - p1.y) / (p2.x - p1.x)
}

/// Euclidean distance between two points.
pub fn distance(p1: Point, p2: Point) -> f64 {
    ((p2.y - p1.y).powi(2) + (p2.x - p1.x).powi(2)).sqrt()
}

/// Y-intercept of the line with the given slope passing through `point`.
pub fn y_intercept(point: Point, slope: f64) -> f64 {
    point.y - slope * point.x
}

/// Midpoint of the segment between two points.
pub fn midpoint(p1: Point, p2: Point) -> Point {
    Point::new((p1.x + p2.x) / 2.0, (p1.y + p2.y) / 2.0)
}

// ============================================================================
// View Transform
// ============================================================================

/// Translation + uniform scale mapping image space into view space.
///
/// The host toolkit displays the base image through a 3x3 affine matrix; only
/// the translation and uniform scale components matter here. `apply` maps an
/// image-space point into view space, `invert` produces the reverse mapping
/// used when flattening strokes back onto the image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Horizontal translation in view pixels.
    pub tx: f64,
    /// Vertical translation in view pixels.
    pub ty: f64,
    /// Uniform scale factor (image pixels to view pixels).
    pub scale: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl ViewTransform {
    pub fn identity() -> Self {
        Self {
            tx: 0.0,
            ty: 0.0,
            scale: 1.0,
        }
    }

    pub fn new(tx: f64, ty: f64, scale: f64) -> Self {
        Self { tx, ty, scale }
    }

    /// Maps a point through this transform.
    pub fn apply(&self, p: Point) -> Point {
        Point::new(p.x * self.scale + self.tx, p.y * self.scale + self.ty)
    }

    /// Returns the inverse transform, or `None` when the scale is zero.
    pub fn invert(&self) -> Option<ViewTransform> {
        if self.scale == 0.0 {
            return None;
        }
        let inv = 1.0 / self.scale;
        Some(ViewTransform {
            tx: -self.tx * inv,
            ty: -self.ty * inv,
            scale: inv,
        })
    }

    /// Displayed bounds of an image with the given intrinsic size, in view space.
    pub fn image_bounds(&self, intrinsic_width: f64, intrinsic_height: f64) -> RectF {
        RectF::new(
            self.tx,
            self.ty,
            self.tx + intrinsic_width * self.scale,
            self.ty + intrinsic_height * self.scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slope_and_intercept_describe_the_line() {
        let p1 = Point::new(0.0, 1.0);
        let p2 = Point::new(2.0, 5.0);
        let m = slope(p1, p2);
        assert_eq!(m, 2.0);
        assert_eq!(y_intercept(p1, m), 1.0);
        assert_eq!(y_intercept(p2, m), 1.0);
    }

    #[test]
    fn vertical_segment_slope_is_not_finite() {
        let m = slope(Point::new(3.0, 0.0), Point::new(3.0, 10.0));
        assert!(!m.is_finite());
    }

    #[test]
    fn distance_is_euclidean() {
        let d = distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn midpoint_halves_the_segment() {
        let m = midpoint(Point::new(10.0, 10.0), Point::new(20.0, 20.0));
        assert_eq!(m, Point::new(15.0, 15.0));
    }

    #[test]
    fn transform_round_trips_through_inverse() {
        let t = ViewTransform::new(40.0, 25.0, 2.5);
        let inv = t.invert().expect("scale is non-zero");
        let p = Point::new(123.0, -7.5);
        let back = inv.apply(t.apply(p));
        assert!((back.x - p.x).abs() < 1e-9);
        assert!((back.y - p.y).abs() < 1e-9);
    }

    #[test]
    fn zero_scale_transform_has_no_inverse() {
        assert!(ViewTransform::new(1.0, 2.0, 0.0).invert().is_none());
    }

    #[test]
    fn image_bounds_follow_translation_and_scale() {
        let t = ViewTransform::new(10.0, 20.0, 2.0);
        let bounds = t.image_bounds(100.0, 50.0);
        assert_eq!(bounds, RectF::new(10.0, 20.0, 210.0, 120.0));
        assert!(bounds.contains(Point::new(10.0, 20.0)));
        assert!(!bounds.contains(Point::new(9.9, 20.0)));
    }

    #[test]
    fn around_builds_square_bounds() {
        let r = RectF::around(Point::new(5.0, 5.0), 3.0);
        assert_eq!(r, RectF::new(2.0, 2.0, 8.0, 8.0));
        assert!(r.is_square());
    }
}
