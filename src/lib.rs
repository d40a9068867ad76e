// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Transparent, always-on-top desktop pet overlay.
//!
//! Mochi is a small borderless window that cycles through sprite
//! animations (idle, sleeping, walking), wanders along the screen edges,
//! and answers mouse gestures: drag to move, click to toggle sleep,
//! double-click to walk, triple-click to exit. A system-tray "exit"
//! item is available where the platform offers one.
//!
//! # Key entry points
//!
//! - [`Viewer`] - the windowing shell (requires the `viewer` feature)
//! - [`PetEngine`] - the headless animation/interaction core
//! - [`PetCommand`] - the engine's interactive vocabulary
//! - [`sprite::FrameStore`] - the embedded sprite sequences
//!
//! # Architecture
//!
//! Everything runs on one event-loop thread. A drift-compensated 300 ms
//! ticker advances the [`pet::StateMachine`] and, while walking, the
//! edge-bouncing [`motion`] step; pointer events are classified by the
//! [`input::InputProcessor`] into commands the engine executes. The
//! shell mirrors the engine's window position onto the real window and
//! paints the selected frame through the wgpu blit in [`render`]. The
//! core modules never touch a GUI-toolkit type, so the whole behavior
//! model tests headlessly.

pub mod engine;
pub mod error;
pub mod input;
pub mod motion;
pub mod pet;
pub mod render;
pub mod sprite;
#[cfg(feature = "tray")]
mod tray;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::{PetCommand, PetEngine, Reaction};
pub use error::PetError;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
