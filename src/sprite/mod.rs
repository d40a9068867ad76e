//! Sprite frames: decoding, sequencing, and the embedded frame store.
//!
//! Frames are loaded once at startup from PNG series embedded in the
//! binary and shared read-only with the render sink. A failed load
//! degrades to a blank placeholder set for every state.

mod frame;
mod store;

pub use frame::{Frame, FrameSequence};
pub use store::{icon_rgba, FrameStore, SPRITE_SIZE};
