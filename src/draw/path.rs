//! Stroke paths as ordered command sequences.
//!
//! A [`Path`] records the construction commands of one continuous stroke or
//! shape outline. Commands are replayed onto a cairo context at render time
//! and re-targeted into image space on export, so the path itself stays a
//! plain data structure.

use crate::util::{Point, RectF, ViewTransform};

/// A single path-construction command in view-local pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new subpath at the given point.
    MoveTo(Point),
    /// Straight segment from the current point.
    LineTo(Point),
    /// Quadratic Bezier from the current point.
    QuadTo { ctrl: Point, to: Point },
    /// Cubic Bezier from the current point.
    CubicTo { ctrl1: Point, ctrl2: Point, to: Point },
    /// Elliptical arc inscribed in `bounds`, sweeping clockwise from
    /// `start_deg` (3 o'clock = 0°) over `sweep_deg` degrees.
    Arc {
        bounds: RectF,
        start_deg: f64,
        sweep_deg: f64,
    },
    /// Close the current subpath back to its starting point.
    Close,
}

/// An ordered, append-only sequence of path commands.
///
/// The first command is always `MoveTo`; [`Path::begin`] is the only way to
/// construct a path, so the invariant holds by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Starts a new path at the given point.
    pub fn begin(start: Point) -> Self {
        Self {
            commands: vec![PathCommand::MoveTo(start)],
        }
    }

    /// Builds a closed (or open) polyline through `points`.
    ///
    /// Returns `None` for an empty point list. When `close_back` is set, a
    /// final segment returns to the first point.
    pub fn polyline(points: &[Point], close_back: bool) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut path = Path::begin(*first);
        for p in rest {
            path.line_to(*p);
        }
        if close_back {
            path.line_to(*first);
        }
        Some(path)
    }

    pub fn line_to(&mut self, to: Point) {
        self.commands.push(PathCommand::LineTo(to));
    }

    pub fn quad_to(&mut self, ctrl: Point, to: Point) {
        self.commands.push(PathCommand::QuadTo { ctrl, to });
    }

    pub fn cubic_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        self.commands.push(PathCommand::CubicTo { ctrl1, ctrl2, to });
    }

    pub fn arc(&mut self, bounds: RectF, start_deg: f64, sweep_deg: f64) {
        self.commands.push(PathCommand::Arc {
            bounds,
            start_deg,
            sweep_deg,
        });
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    /// Appends an axis-aligned rectangle subpath spanning two corners.
    ///
    /// Corners are normalized so dragging in any direction produces the same
    /// rectangle.
    pub fn add_rect(&mut self, a: Point, b: Point) {
        let left = a.x.min(b.x);
        let right = a.x.max(b.x);
        let top = a.y.min(b.y);
        let bottom = a.y.max(b.y);

        self.commands.push(PathCommand::MoveTo(Point::new(left, top)));
        self.line_to(Point::new(right, top));
        self.line_to(Point::new(right, bottom));
        self.line_to(Point::new(left, bottom));
        self.close();
    }

    /// Appends a circle subpath centered on `center`.
    ///
    /// The sweep stops just short of 360° because a full-circle sweep is
    /// degenerate in arc primitives that reduce the angle mod 360.
    pub fn add_circle(&mut self, center: Point, radius: f64) {
        self.arc(RectF::around(center, radius), 0.0, 359.9999);
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Always false: a path carries at least its initial `MoveTo`.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Returns a copy of this path with every coordinate mapped through `t`.
    ///
    /// Arc bounds remain axis-aligned because the view transform is a
    /// translation plus uniform scale.
    pub fn transformed(&self, t: &ViewTransform) -> Path {
        let commands = self
            .commands
            .iter()
            .map(|cmd| match *cmd {
                PathCommand::MoveTo(p) => PathCommand::MoveTo(t.apply(p)),
                PathCommand::LineTo(p) => PathCommand::LineTo(t.apply(p)),
                PathCommand::QuadTo { ctrl, to } => PathCommand::QuadTo {
                    ctrl: t.apply(ctrl),
                    to: t.apply(to),
                },
                PathCommand::CubicTo { ctrl1, ctrl2, to } => PathCommand::CubicTo {
                    ctrl1: t.apply(ctrl1),
                    ctrl2: t.apply(ctrl2),
                    to: t.apply(to),
                },
                PathCommand::Arc {
                    bounds,
                    start_deg,
                    sweep_deg,
                } => {
                    let tl = t.apply(Point::new(bounds.left, bounds.top));
                    let br = t.apply(Point::new(bounds.right, bounds.bottom));
                    PathCommand::Arc {
                        bounds: RectF::new(tl.x, tl.y, br.x, br.y),
                        start_deg,
                        sweep_deg,
                    }
                }
                PathCommand::Close => PathCommand::Close,
            })
            .collect();
        Path { commands }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_starts_with_move_to() {
        let path = Path::begin(Point::new(1.0, 2.0));
        assert_eq!(path.commands()[0], PathCommand::MoveTo(Point::new(1.0, 2.0)));
        assert!(!path.is_empty());
    }

    #[test]
    fn add_rect_normalizes_corners() {
        let mut path = Path::begin(Point::new(0.0, 0.0));
        path.add_rect(Point::new(10.0, 10.0), Point::new(0.0, 0.0));

        assert_eq!(
            path.commands()[1],
            PathCommand::MoveTo(Point::new(0.0, 0.0))
        );
        assert_eq!(path.commands()[2], PathCommand::LineTo(Point::new(10.0, 0.0)));
        assert_eq!(*path.commands().last().unwrap(), PathCommand::Close);
    }

    #[test]
    fn add_circle_sweeps_just_short_of_full_turn() {
        let mut path = Path::begin(Point::new(5.0, 5.0));
        path.add_circle(Point::new(5.0, 5.0), 2.0);

        match path.commands()[1] {
            PathCommand::Arc {
                bounds, sweep_deg, ..
            } => {
                assert_eq!(bounds, RectF::new(3.0, 3.0, 7.0, 7.0));
                assert!(sweep_deg < 360.0);
                assert!(sweep_deg > 359.99);
            }
            ref other => panic!("expected arc, got {other:?}"),
        }
    }

    #[test]
    fn polyline_closes_back_to_start() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(2.0, 3.0),
        ];
        let path = Path::polyline(&points, true).unwrap();
        assert_eq!(path.len(), 4);
        assert_eq!(
            *path.commands().last().unwrap(),
            PathCommand::LineTo(Point::new(0.0, 0.0))
        );
        assert!(Path::polyline(&[], true).is_none());
    }

    #[test]
    fn transform_maps_every_coordinate() {
        let t = ViewTransform::new(10.0, 0.0, 2.0);
        let mut path = Path::begin(Point::new(1.0, 1.0));
        path.quad_to(Point::new(2.0, 2.0), Point::new(3.0, 3.0));
        path.add_circle(Point::new(5.0, 5.0), 1.0);

        let mapped = path.transformed(&t);
        assert_eq!(
            mapped.commands()[0],
            PathCommand::MoveTo(Point::new(12.0, 2.0))
        );
        match mapped.commands()[2] {
            PathCommand::Arc { bounds, .. } => {
                assert_eq!(bounds, RectF::new(18.0, 8.0, 22.0, 12.0));
            }
            ref other => panic!("expected arc, got {other:?}"),
        }
    }
}
