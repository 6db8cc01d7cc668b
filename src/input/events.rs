//! Touch event types delivered by the host view.

/// A discrete touch event in view-local pixel coordinates.
///
/// The host toolkit is expected to have already converted raw input into
/// view space; the session controller consumes these directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    /// Finger down - a gesture begins.
    Down { x: f64, y: f64 },
    /// Finger dragged to a new position.
    Move { x: f64, y: f64 },
    /// Finger lifted - the gesture completes.
    Up,
}
