//! Declarative shape construction: regular polygons, star polygons, circles.
//!
//! Pure functions converting shape parameters (bounding box, side count,
//! rotation, density) into point sequences or paths. Nothing here touches
//! session state; the session controller and the demo binary are the callers.

use crate::util::{self, Point, RectF};
use thiserror::Error;

/// Errors raised by the shape builders.
///
/// Malformed parameters are surfaced to the caller, never silently corrected.
#[derive(Debug, Error)]
pub enum ShapeError {
    /// Shape parameters are malformed (side/point count too low, density too
    /// low, non-square bounds where a square is required).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested geometry degenerates: the point count and density do not
    /// form a self-intersecting star polygon, so no outline exists.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

use super::path::Path;

/// Builds a regular convex polygon outline inscribed in `bounds`.
///
/// The radius is half the horizontal extent of `bounds`. Vertices are placed
/// at equal angular spacing starting from `90° + rotation_degrees`; for even
/// side counts the start is offset by half a step so an edge midpoint, not a
/// vertex, faces up. Emits `sides + 1` points, the first repeated at the end
/// to close the outline.
///
/// # Errors
/// `InvalidArgument` when `sides < 3`.
pub fn regular_convex_polygon(
    bounds: RectF,
    sides: u32,
    rotation_degrees: f64,
) -> Result<Vec<Point>, ShapeError> {
    if sides < 3 {
        return Err(ShapeError::InvalidArgument(
            "number of sides must be at least 3".into(),
        ));
    }

    let radius = bounds.width() / 2.0;
    let step = 360.0 / sides as f64;

    // Add 90 so the first point is at the top
    let base_rotation = 90.0 + rotation_degrees;
    let start_degrees = if sides % 2 != 0 {
        base_rotation
    } else {
        base_rotation + step / 2.0
    };

    let mut points = Vec::with_capacity(sides as usize + 1);
    for i in 0..=sides {
        let theta = (start_degrees + i as f64 * step).to_radians();
        points.push(Point::new(
            bounds.left + radius + radius * theta.cos(),
            bounds.top + radius - radius * theta.sin(),
        ));
    }
    Ok(points)
}

/// Builds a regular star polygon inscribed in square `bounds`.
///
/// `points` outer vertices are placed on a circle and connected every
/// `density`-th vertex (the classic star-polygon construction). With
/// `outline` set, the true outline is produced instead of overlapping chords:
/// the star's inner radius is recovered from the first chord's intersection
/// with a non-adjacent chord, and `2 * points` vertices alternating between
/// outer and inner radius are emitted. Without `outline`, exactly `points`
/// vertices are returned in chord order.
///
/// # Errors
/// - `InvalidArgument` when `bounds` is not square, `points < 5`, or
///   `density < 2`.
/// - `InvalidState` when no chord intersection exists (the parameters
///   degenerate to a convex polygon or a disconnected figure).
pub fn regular_star_polygon(
    bounds: RectF,
    points: u32,
    density: u32,
    rotation_degrees: f64,
    outline: bool,
) -> Result<Vec<Point>, ShapeError> {
    if !bounds.is_square() {
        return Err(ShapeError::InvalidArgument(format!(
            "bounds ({}, {}, {}, {}) must be square",
            bounds.left, bounds.top, bounds.right, bounds.bottom
        )));
    }
    if points < 5 {
        return Err(ShapeError::InvalidArgument(
            "number of points must be at least 5".into(),
        ));
    }
    if density < 2 {
        return Err(ShapeError::InvalidArgument(
            "density must be at least 2".into(),
        ));
    }

    let outer_radius = bounds.width() / 2.0;

    // Add 90 so the first point is at the top
    let start_degrees = 90.0 + rotation_degrees;
    let step = 360.0 / points as f64;

    // Outer vertices in chord order: every density-th vertex of the circle.
    let outer: Vec<Point> = (0..points)
        .map(|i| {
            let theta = (start_degrees + (density * i) as f64 * step).to_radians();
            Point::new(
                outer_radius + outer_radius * theta.cos(),
                outer_radius - outer_radius * theta.sin(),
            )
        })
        .collect();

    let path_points = if outline {
        let inner_radius = star_inner_radius(&outer, outer_radius)?;

        // Twice as many vertices, alternating outer and inner radius.
        let doubled = points * 2;
        let half_step = 360.0 / doubled as f64;
        (0..doubled)
            .map(|i| {
                let theta = (start_degrees + i as f64 * half_step).to_radians();
                let radius = if i % 2 == 0 { outer_radius } else { inner_radius };
                Point::new(
                    outer_radius + radius * theta.cos(),
                    outer_radius - radius * theta.sin(),
                )
            })
            .collect()
    } else {
        outer
    };

    Ok(path_points
        .into_iter()
        .map(|p| Point::new(bounds.left + p.x, bounds.top + p.y))
        .collect())
}

/// Finds the star's inner radius from the first valid chord intersection.
///
/// The first chord is intersected against every later chord except its
/// immediate neighbors (which share an endpoint and cannot cross it). Each
/// candidate is solved as a pair of point-slope line equations; the first
/// intersection lying strictly inside both segments' coordinate ranges fixes
/// the inner radius via its distance from the circle center.
fn star_inner_radius(outer: &[Point], outer_radius: f64) -> Result<f64, ShapeError> {
    let center = Point::new(outer_radius, outer_radius);

    let first_a = outer[0];
    let first_b = outer[1];
    let first_slope = util::slope(first_a, first_b);
    let first_y_int = util::y_intercept(first_a, first_slope);

    let first_low_x = first_a.x.min(first_b.x);
    let first_high_x = first_a.x.max(first_b.x);
    let first_low_y = first_a.y.min(first_b.y);
    let first_high_y = first_a.y.max(first_b.y);

    // The second chord and the wrap-around chord share an endpoint with the
    // first; skip them.
    for i in 2..outer.len() - 1 {
        let cur_a = outer[i];
        let cur_b = outer[i + 1];
        let cur_slope = util::slope(cur_a, cur_b);
        let cur_y_int = util::y_intercept(cur_a, cur_slope);

        // Parallel lines cannot intersect. This also drops the chord collinear
        // with the first in degenerate figures.
        if first_slope == cur_slope {
            continue;
        }

        // Two equations, two unknowns:
        //   y = first_slope * x + first_y_int
        //   y = cur_slope * x + cur_y_int
        let x = (cur_y_int - first_y_int) / (first_slope - cur_slope);
        let y = first_slope * x + first_y_int;

        let start_x = first_low_x.max(cur_a.x.min(cur_b.x));
        let end_x = first_high_x.min(cur_a.x.max(cur_b.x));
        let start_y = first_low_y.max(cur_a.y.min(cur_b.y));
        let end_y = first_high_y.min(cur_a.y.max(cur_b.y));

        if x > start_x && x < end_x && y > start_y && y < end_y {
            return Ok(util::distance(center, Point::new(x, y)));
        }
    }

    Err(ShapeError::InvalidState(
        "no chord intersection; the point count and density do not form a star polygon".into(),
    ))
}

/// Builds a circle path inscribed in square `bounds`.
///
/// # Errors
/// `InvalidArgument` when `bounds` is not square.
pub fn circle_path(bounds: RectF) -> Result<Path, ShapeError> {
    if !bounds.is_square() {
        return Err(ShapeError::InvalidArgument(format!(
            "bounds ({}, {}, {}, {}) must be square",
            bounds.left, bounds.top, bounds.right, bounds.bottom
        )));
    }

    // Arc start is at 0° = 3 o'clock on the inscribed ellipse.
    let cy = (bounds.top + bounds.bottom) / 2.0;
    let mut path = Path::begin(Point::new(bounds.right, cy));
    path.arc(bounds, 0.0, 359.9999);
    Ok(path)
}

/// Builds a heart shape from two mirrored cubic curves.
///
/// `center` is the cleft between the lobes; the shape spans `width` by
/// `height` around it.
pub fn heart_path(center: Point, width: f64, height: f64) -> Path {
    let (x, y) = (center.x, center.y);
    let mut path = Path::begin(Point::new(x, y + height / 4.0));
    path.cubic_to(
        Point::new(x, y),
        Point::new(x - width / 2.0, y - height / 2.0),
        Point::new(x, y - height / 4.0),
    );
    path.cubic_to(
        Point::new(x, y - height / 2.0),
        Point::new(x + width / 2.0, y),
        Point::new(x, y + height / 4.0),
    );
    path.close();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::path::PathCommand;

    const SQUARE: RectF = RectF {
        left: 0.0,
        top: 0.0,
        right: 100.0,
        bottom: 100.0,
    };

    fn center_distance(p: Point) -> f64 {
        util::distance(Point::new(50.0, 50.0), p)
    }

    #[test]
    fn convex_polygon_emits_closing_point() {
        for sides in 3..12 {
            let points = regular_convex_polygon(SQUARE, sides, 0.0).unwrap();
            assert_eq!(points.len(), sides as usize + 1);
            let first = points[0];
            let last = *points.last().unwrap();
            assert!((first.x - last.x).abs() < 1e-9);
            assert!((first.y - last.y).abs() < 1e-9);
        }
    }

    #[test]
    fn convex_polygon_rejects_too_few_sides() {
        assert!(matches!(
            regular_convex_polygon(SQUARE, 2, 0.0),
            Err(ShapeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn odd_polygon_has_vertex_at_top() {
        let points = regular_convex_polygon(SQUARE, 5, 0.0).unwrap();
        assert!((points[0].x - 50.0).abs() < 1e-9);
        assert!(points[0].y.abs() < 1e-9);
    }

    #[test]
    fn even_polygon_has_edge_midpoint_at_top() {
        let points = regular_convex_polygon(SQUARE, 4, 0.0).unwrap();
        for p in &points {
            assert!(p.y > 1.0, "no vertex should sit at the top, got {p:?}");
        }
    }

    #[test]
    fn star_without_outline_returns_point_count_vertices() {
        let points = regular_star_polygon(SQUARE, 5, 2, 0.0, false).unwrap();
        assert_eq!(points.len(), 5);
        for p in &points {
            assert!((center_distance(*p) - 50.0).abs() < 1e-9);
        }
    }

    #[test]
    fn star_outline_alternates_outer_and_inner_radius() {
        let points = regular_star_polygon(SQUARE, 5, 2, 0.0, true).unwrap();
        assert_eq!(points.len(), 10);

        // Pentagram inner/outer radius ratio is about 0.382.
        let inner = center_distance(points[1]);
        for (i, p) in points.iter().enumerate() {
            let expected = if i % 2 == 0 { 50.0 } else { inner };
            assert!((center_distance(*p) - expected).abs() < 1e-6);
        }
        assert!((inner / 50.0 - 0.38197).abs() < 1e-3);
    }

    #[test]
    fn degenerate_star_fails_with_invalid_state() {
        // Density 4 over 5 points walks the circle backwards one vertex at a
        // time: a convex pentagon with no self-intersection.
        assert!(matches!(
            regular_star_polygon(SQUARE, 5, 4, 0.0, true),
            Err(ShapeError::InvalidState(_))
        ));
    }

    #[test]
    fn star_validates_parameters() {
        let tall = RectF::new(0.0, 0.0, 100.0, 120.0);
        assert!(matches!(
            regular_star_polygon(tall, 5, 2, 0.0, true),
            Err(ShapeError::InvalidArgument(_))
        ));
        assert!(matches!(
            regular_star_polygon(SQUARE, 4, 2, 0.0, true),
            Err(ShapeError::InvalidArgument(_))
        ));
        assert!(matches!(
            regular_star_polygon(SQUARE, 5, 1, 0.0, true),
            Err(ShapeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn circle_requires_square_bounds() {
        assert!(matches!(
            circle_path(RectF::new(0.0, 0.0, 10.0, 20.0)),
            Err(ShapeError::InvalidArgument(_))
        ));

        let path = circle_path(RectF::new(0.0, 0.0, 10.0, 10.0)).unwrap();
        assert!(matches!(
            path.commands()[1],
            PathCommand::Arc { sweep_deg, .. } if sweep_deg < 360.0
        ));
    }

    #[test]
    fn heart_begins_at_cleft_and_closes() {
        let path = heart_path(Point::new(50.0, 50.0), 40.0, 40.0);
        assert_eq!(
            path.commands()[0],
            PathCommand::MoveTo(Point::new(50.0, 60.0))
        );
        assert_eq!(*path.commands().last().unwrap(), PathCommand::Close);
        assert_eq!(path.len(), 4);
    }
}
