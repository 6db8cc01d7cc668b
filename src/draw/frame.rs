//! Frame container for the committed stroke stack.

use super::path::Path;
use super::style::Style;

/// One continuous freehand or shape path plus its captured style.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub path: Path,
    pub style: Style,
}

impl Stroke {
    pub fn new(path: Path, style: Style) -> Self {
        Self { path, style }
    }
}

/// Container for all committed strokes in the current session.
///
/// Insertion order is z-order: later strokes draw on top. `finalized` counts
/// how many leading strokes have completed their gesture; it trails the stack
/// on undo and resets on clear.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    strokes: Vec<Stroke>,
    finalized: usize,
}

impl Frame {
    /// Creates a new empty frame with no strokes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new stroke on top of existing ones.
    pub fn push(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    /// Removes and returns the most recently added stroke, if any.
    ///
    /// The finalized cursor is decremented but never drops below zero, even
    /// for unmatched undo calls.
    pub fn undo(&mut self) -> Option<Stroke> {
        let popped = self.strokes.pop();
        if popped.is_some() {
            self.finalized = self.finalized.saturating_sub(1).min(self.strokes.len());
        }
        popped
    }

    /// Removes all strokes and resets the finalized cursor.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.finalized = 0;
    }

    /// True when any stroke has been committed.
    pub fn is_modified(&self) -> bool {
        !self.strokes.is_empty()
    }

    /// Marks every current stroke as finalized (called at gesture end).
    pub fn mark_finalized(&mut self) {
        self.finalized = self.strokes.len();
    }

    /// Number of leading strokes whose gesture has completed.
    pub fn finalized(&self) -> usize {
        self.finalized
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Mutable access to the stroke still being drawn (the last one pushed).
    pub fn current_mut(&mut self) -> Option<&mut Stroke> {
        self.strokes.last_mut()
    }
}
