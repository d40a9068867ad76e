//! Crate-level error types.

use std::fmt;

use crate::render::context::RenderContextError;

/// Errors produced by the mochi crate.
#[derive(Debug)]
pub enum PetError {
    /// GPU context initialization failure.
    Gpu(RenderContextError),
    /// Failed to locate or decode an embedded sprite asset.
    AssetDecode(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// System-tray setup failure (non-fatal; the tray is skipped).
    Tray(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for PetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::AssetDecode(msg) => {
                write!(f, "asset decode error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Tray(msg) => write!(f, "tray error: {msg}"),
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for PetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RenderContextError> for PetError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<std::io::Error> for PetError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
