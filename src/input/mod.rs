//! Input handling: event types, the multi-click state machine, and the
//! input processor that converts raw window events into pet commands.

/// Platform-agnostic input events.
pub mod event;
/// Multi-click state machine and drag tracking.
pub(crate) mod mouse;
/// Converts raw events into pet commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use processor::InputProcessor;
