//! The headless pet engine.
//!
//! Single owner of all mutable pet state: the behavior state machine,
//! the window position, the drag flag, and the loaded frame store. The
//! platform shell drives it through exactly three entry points —
//! [`tick`](PetEngine::tick), [`execute`](PetEngine::execute), and
//! [`current_frame`](PetEngine::current_frame) — and mirrors the engine's
//! position back to the real window. No GUI-toolkit types appear in this
//! module, so the whole interaction model is testable headlessly.
//!
//! The engine is only ever driven from the one event-loop thread;
//! callbacks are discrete and non-overlapping, so no locking is needed
//! and no method may be re-entered mid-tick.

mod command;

pub use command::{PetCommand, Reaction};

use glam::IVec2;

use crate::motion::{self, ScreenBounds};
use crate::pet::{Chance, PetState, StateMachine, ThreadChance};
use crate::sprite::{Frame, FrameStore, SPRITE_SIZE};

/// The animation/interaction core behind the pet window.
pub struct PetEngine {
    machine: StateMachine,
    frames: FrameStore,
    bounds: ScreenBounds,
    position: IVec2,
    dragging: bool,
    chance: Box<dyn Chance>,
}

impl PetEngine {
    /// Create an engine at the given start position, drawing transitions
    /// from the thread-local PRNG.
    #[must_use]
    pub fn new(
        frames: FrameStore,
        bounds: ScreenBounds,
        position: IVec2,
    ) -> Self {
        Self::with_chance(frames, bounds, position, Box::new(ThreadChance))
    }

    /// Create an engine with an injected chance source. Tests use this to
    /// script the probabilistic transitions.
    #[must_use]
    pub fn with_chance(
        frames: FrameStore,
        bounds: ScreenBounds,
        position: IVec2,
        chance: Box<dyn Chance>,
    ) -> Self {
        Self {
            machine: StateMachine::new(),
            frames,
            bounds,
            position,
            dragging: false,
            chance,
        }
    }

    /// Advance one animation tick.
    ///
    /// Returns `true` when the window position changed (a walking step
    /// was taken). The motion path is skipped entirely while a drag is in
    /// progress — the drag owns the position for the whole gesture.
    pub fn tick(&mut self) -> bool {
        let wants_motion = self.machine.tick(self.chance.as_mut());
        if !wants_motion || self.dragging {
            return false;
        }

        let (position, heading_right) = motion::step_walk(
            self.position,
            SPRITE_SIZE as i32,
            &self.bounds,
            self.machine.walking_right(),
        );
        self.position = position;
        self.machine.set_walking_right(heading_right);
        true
    }

    /// Execute a command and report what the shell must do about it.
    ///
    /// The click commands imply the press that produced them has ended,
    /// so they also clear the drag flag.
    pub fn execute(&mut self, command: PetCommand) -> Reaction {
        match command {
            PetCommand::BeginDrag => {
                self.dragging = true;
                Reaction::None
            }
            PetCommand::DragTo { position } => {
                if self.dragging {
                    self.position = position;
                    Reaction::Moved
                } else {
                    Reaction::None
                }
            }
            PetCommand::EndDrag => {
                self.dragging = false;
                Reaction::None
            }
            PetCommand::ToggleSleep => {
                self.dragging = false;
                self.machine.toggle_sleep();
                Reaction::RestartTicker
            }
            PetCommand::ToggleWalk => {
                self.dragging = false;
                self.machine.toggle_walk();
                Reaction::RestartTicker
            }
            PetCommand::Quit => Reaction::Quit,
        }
    }

    /// The frame to paint for the current state, direction, and frame
    /// counter.
    #[must_use]
    pub fn current_frame(&self) -> &Frame {
        self.frames.frame_for(
            self.machine.state(),
            self.machine.walking_right(),
            self.machine.frame(),
        )
    }

    /// The window's top-left screen coordinate.
    #[must_use]
    pub fn position(&self) -> IVec2 {
        self.position
    }

    /// Adopt the platform's reported window position. Window managers
    /// may adjust or quantize placements, so the report wins over the
    /// engine's own bookkeeping.
    pub fn sync_position(&mut self, position: IVec2) {
        self.position = position;
    }

    /// The current behavior state.
    #[must_use]
    pub fn state(&self) -> PetState {
        self.machine.state()
    }

    /// Whether the pet walks (and faces) right.
    #[must_use]
    pub fn walking_right(&self) -> bool {
        self.machine.walking_right()
    }

    /// Whether a drag gesture currently owns the window position.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}

impl std::fmt::Debug for PetEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PetEngine")
            .field("state", &self.machine.state())
            .field("position", &self.position)
            .field("dragging", &self.dragging)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::MOVE_SPEED;

    /// Never fires any transition draw.
    struct Never;

    impl Chance for Never {
        fn draw(&mut self, bound: u32) -> u32 {
            bound - 1
        }
    }

    const WIDTH: i32 = SPRITE_SIZE as i32;

    fn engine_at(x: i32, y: i32) -> PetEngine {
        let bounds =
            ScreenBounds::new(IVec2::ZERO, IVec2::new(1920, 1080));
        PetEngine::with_chance(
            FrameStore::placeholder(),
            bounds,
            IVec2::new(x, y),
            Box::new(Never),
        )
    }

    #[test]
    fn test_idle_tick_advances_frame_without_motion() {
        let mut engine = engine_at(500, 300);

        let moved = engine.tick();

        assert!(!moved);
        assert_eq!(engine.state(), PetState::Idle);
        assert_eq!(engine.position(), IVec2::new(500, 300));
    }

    #[test]
    fn test_walking_tick_moves_the_window() {
        let mut engine = engine_at(500, 300);
        let _ = engine.execute(PetCommand::ToggleWalk); // now Walking, heading right

        let moved = engine.tick();

        assert!(moved);
        assert_eq!(
            engine.position(),
            IVec2::new(500 + MOVE_SPEED, 300)
        );
    }

    #[test]
    fn test_left_edge_bounce_end_to_end() {
        // Walking left while parked on the left edge: one tick turns the
        // pet around and walks it off the edge.
        let mut engine = engine_at(0, 300);
        let _ = engine.execute(PetCommand::ToggleWalk);
        let _ = engine.execute(PetCommand::ToggleWalk);
        assert!(!engine.walking_right());

        let moved = engine.tick();

        assert!(moved);
        assert!(engine.walking_right());
        assert_eq!(engine.position(), IVec2::new(MOVE_SPEED, 300));
    }

    #[test]
    fn test_right_edge_bounce_end_to_end() {
        let mut engine = engine_at(1920 - WIDTH, 300);
        let _ = engine.execute(PetCommand::ToggleWalk);
        assert!(engine.walking_right());

        let moved = engine.tick();

        assert!(moved);
        assert!(!engine.walking_right());
        assert_eq!(
            engine.position(),
            IVec2::new(1920 - WIDTH - MOVE_SPEED, 300)
        );
    }

    #[test]
    fn test_drag_suppresses_autonomous_motion() {
        let mut engine = engine_at(500, 300);
        let _ = engine.execute(PetCommand::ToggleWalk);
        let _ = engine.execute(PetCommand::BeginDrag);

        let moved = engine.tick();

        assert!(!moved);
        assert_eq!(engine.position(), IVec2::new(500, 300));

        // Release restores autonomous motion on the next tick.
        let _ = engine.execute(PetCommand::EndDrag);
        assert!(engine.tick());
    }

    #[test]
    fn test_drag_moves_window_only_during_gesture() {
        let mut engine = engine_at(500, 300);

        // Not dragging: a stray drag command is ignored.
        let reaction = engine.execute(PetCommand::DragTo {
            position: IVec2::new(5, 5),
        });
        assert_eq!(reaction, Reaction::None);
        assert_eq!(engine.position(), IVec2::new(500, 300));

        let _ = engine.execute(PetCommand::BeginDrag);
        let reaction = engine.execute(PetCommand::DragTo {
            position: IVec2::new(40, 80),
        });
        assert_eq!(reaction, Reaction::Moved);
        assert_eq!(engine.position(), IVec2::new(40, 80));
    }

    #[test]
    fn test_single_click_toggles_sleep_and_restarts_ticker() {
        let mut engine = engine_at(500, 300);

        assert_eq!(
            engine.execute(PetCommand::ToggleSleep),
            Reaction::RestartTicker
        );
        assert_eq!(engine.state(), PetState::Sleeping);
        assert_eq!(
            engine.execute(PetCommand::ToggleSleep),
            Reaction::RestartTicker
        );
        assert_eq!(engine.state(), PetState::Idle);
    }

    #[test]
    fn test_double_click_scenario() {
        // Double-click while idle and facing left: walking, facing
        // right, ticker restarted.
        let mut engine = engine_at(500, 300);
        assert!(!engine.walking_right());

        let reaction = engine.execute(PetCommand::ToggleWalk);

        assert_eq!(reaction, Reaction::RestartTicker);
        assert_eq!(engine.state(), PetState::Walking);
        assert!(engine.walking_right());
    }

    #[test]
    fn test_quit_reaction() {
        let mut engine = engine_at(500, 300);

        assert_eq!(engine.execute(PetCommand::Quit), Reaction::Quit);
    }

    #[test]
    fn test_click_ends_any_drag() {
        let mut engine = engine_at(500, 300);
        let _ = engine.execute(PetCommand::BeginDrag);

        let _ = engine.execute(PetCommand::ToggleWalk);

        assert!(!engine.is_dragging());
        assert!(engine.tick());
    }

    #[test]
    fn test_current_frame_is_total_over_long_runs() {
        let mut engine = engine_at(500, 300);

        for _ in 0..1000 {
            let _ = engine.tick();
            let frame = engine.current_frame();
            assert_eq!(frame.width(), SPRITE_SIZE);
        }
    }
}
