//! Touch handling and the selection state machine.
//!
//! This module turns host pointer events into selector movements and color
//! selections. Press and move only reposition the selector; release commits
//! the color under it and notifies the listener.

pub mod events;
pub mod state;

// Re-export commonly used types at module level
pub use events::TouchPhase;
pub use state::{ColorPicker, SelectionState, SelectorPosition};
