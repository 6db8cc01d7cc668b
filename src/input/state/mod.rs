//! Painting session state machine, split by concern.

mod actions;
mod core;
mod render;
mod touch;

#[cfg(test)]
mod tests;

pub use core::{GestureState, PaintState};
