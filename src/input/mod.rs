//! Touch input handling and the painting session state machine.

pub mod brush;
pub mod events;
pub mod state;

pub use brush::Brush;
pub use events::TouchEvent;
pub use state::PaintState;
