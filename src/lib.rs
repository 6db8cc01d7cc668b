//! Finger-painting overlay engine.
//!
//! Turns touch gestures into smoothed vector strokes over a host image,
//! renders them through Cairo, and flattens the result back into a bitmap.
//! The [`input::PaintState`] session controller is the main entry point;
//! [`draw`] holds the path, style, shape and rendering primitives it drives.

pub mod config;
pub mod draw;
pub mod input;
pub mod util;

pub use config::Config;
