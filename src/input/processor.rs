//! Converts raw platform events into pet commands.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! drag detection, multi-click timing). It is the only thing that sits
//! between raw window events and the engine's
//! [`execute`](crate::PetEngine::execute) method.

use std::time::Instant;

use glam::{IVec2, Vec2};

use super::event::{InputEvent, MouseButton};
use super::mouse::{ClickResult, InputState};
use crate::engine::PetCommand;

/// Cursor movement beyond this many pixels between press and release
/// turns the gesture into a drag instead of a click.
const DRAG_SLOP: f32 = 2.0;

/// Converts raw window events into [`PetCommand`]s.
///
/// Owns the drag offset captured at press time and the multi-click state
/// machine. Window-relative cursor positions are combined with the
/// window's current screen position (passed per event) to produce
/// absolute drag targets, so the window follows the pointer 1:1 with the
/// press offset preserved.
pub struct InputProcessor {
    /// Press/drag flags and multi-click state machine.
    state: InputState,
    /// Latest window-relative cursor position.
    cursor: Vec2,
    /// Window-relative cursor position captured at press time.
    drag_offset: Vec2,
}

impl InputProcessor {
    /// Create a new processor with no active gesture.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: InputState::new(),
            cursor: Vec2::ZERO,
            drag_offset: Vec2::ZERO,
        }
    }

    /// Whether a press-to-release gesture is in progress.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.state.is_pressed()
    }

    /// Process a raw input event and return zero or one commands.
    ///
    /// `window_pos` is the window's current top-left screen coordinate;
    /// `now` is the event timestamp used for multi-click classification.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        window_pos: IVec2,
        now: Instant,
    ) -> Option<PetCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.handle_cursor_moved(x, y, window_pos)
            }
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed, now)
            }
        }
    }

    /// Cursor moved — while pressed, produce the drag-follow command.
    fn handle_cursor_moved(
        &mut self,
        x: f32,
        y: f32,
        window_pos: IVec2,
    ) -> Option<PetCommand> {
        self.cursor = Vec2::new(x, y);

        if !self.state.is_pressed() {
            return None;
        }

        let delta = self.cursor - self.drag_offset;
        if delta.length_squared() > DRAG_SLOP * DRAG_SLOP {
            self.state.mark_dragging();
        }

        let step = IVec2::new(delta.x.round() as i32, delta.y.round() as i32);
        if step == IVec2::ZERO {
            return None;
        }
        Some(PetCommand::DragTo {
            position: window_pos + step,
        })
    }

    /// Mouse button press/release — track the gesture, classify clicks
    /// on release.
    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
        now: Instant,
    ) -> Option<PetCommand> {
        if button != MouseButton::Left {
            return None;
        }

        if pressed {
            self.state.handle_mouse_down();
            self.drag_offset = self.cursor;
            return Some(PetCommand::BeginDrag);
        }

        match self.state.process_mouse_up(now) {
            ClickResult::NoAction => Some(PetCommand::EndDrag),
            ClickResult::SingleClick => Some(PetCommand::ToggleSleep),
            ClickResult::DoubleClick => Some(PetCommand::ToggleWalk),
            ClickResult::TripleClick => Some(PetCommand::Quit),
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}
