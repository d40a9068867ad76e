//! The render sink: a wgpu surface with alpha compositing and a single
//! textured blit of the current frame.
//!
//! Owned by the platform shell; the core hands it a [`Frame`] and never
//! sees a GPU type.
//!
//! [`Frame`]: crate::sprite::Frame

pub mod context;
pub mod sprite_blit;

pub use context::{RenderContext, RenderContextError};
pub use sprite_blit::SpriteBlit;
