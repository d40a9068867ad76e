//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation — whether triggered by a mouse gesture,
//! the tray menu, or a programmatic call — is represented as a
//! `PetCommand`. Consumers construct commands and pass them to
//! [`PetEngine::execute`](super::PetEngine::execute).

use glam::IVec2;

/// A discrete or parameterized operation the engine can perform.
///
/// The engine never cares *how* a command was triggered — mouse, tray,
/// or API all look identical:
///
/// ```ignore
/// engine.execute(PetCommand::ToggleWalk);
/// engine.execute(PetCommand::DragTo { position: IVec2::new(40, 60) });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetCommand {
    /// Pointer pressed: suppress autonomous motion until the gesture
    /// ends.
    BeginDrag,

    /// Pointer dragged: move the window to follow it.
    DragTo {
        /// New top-left screen coordinate for the window.
        position: IVec2,
    },

    /// Pointer released without a click.
    EndDrag,

    /// Single click: toggle `Idle ↔ Sleeping` (`Walking → Idle`).
    ToggleSleep,

    /// Double click: reverse direction and force `Walking`.
    ToggleWalk,

    /// Triple click or tray "exit": terminate the application.
    Quit,
}

/// What the shell must do after the engine executed a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    /// Nothing changed that the shell can observe.
    None,
    /// The window position changed; reposition the platform window.
    Moved,
    /// A manual state change happened; re-arm the tick timer and
    /// repaint so the new state is visible immediately.
    RestartTicker,
    /// Terminate the application.
    Quit,
}
