//! Drawing primitives and stroke definitions (Cairo-based).
//!
//! This module defines the core drawing types used by the painting session:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Path`]/[`PathCommand`]: stroke construction command sequences
//! - [`Style`]: per-stroke style snapshots
//! - [`Frame`]: container for all committed strokes
//! - Shape builders (polygons, stars, circles, hearts)
//! - Rendering and flatten-to-bitmap functions for Cairo-based output

pub mod color;
pub mod export;
pub mod frame;
pub mod path;
pub mod render;
pub mod shape;
pub mod style;

// Re-export commonly used types at module level
pub use color::Color;
pub use export::{ExportError, flatten};
pub use frame::{Frame, Stroke};
pub use path::{Path, PathCommand};
pub use render::{EffectSettings, clear_surface, render_stroke, render_strokes};
pub use shape::{
    ShapeError, circle_path, heart_path, regular_convex_polygon, regular_star_polygon,
};
pub use style::{MaskFilter, PaintMode, Style};

// Re-export color constants for public API
#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW};
