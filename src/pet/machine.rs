//! The animation state machine driven once per timer tick.

use super::chance::Chance;
use super::state::{PetState, ResumeState};

/// Odds denominator for dozing off from `Idle` or `Walking`
/// (fires on a draw below [`HIT`], i.e. 2-in-500 per tick).
const SLEEP_BOUND: u32 = 500;
/// Odds denominator for waking up from `Sleeping` (2-in-350 per tick).
const WAKE_BOUND: u32 = 350;
/// Odds denominator for reversing direction mid-walk (2-in-500 per tick).
const TURN_BOUND: u32 = 500;
/// Draws strictly below this value fire their transition.
const HIT: u32 = 2;

/// Current/last behavior state, frame counter, and walking direction.
///
/// [`tick`](Self::tick) advances one animation step; the manual toggles
/// bypass the probabilistic transitions entirely. All methods are plain
/// synchronous mutations — the machine is only ever driven from the one
/// event-loop thread and must not be re-entered mid-tick.
#[derive(Debug, Clone)]
pub struct StateMachine {
    state: PetState,
    resume: ResumeState,
    frame: usize,
    walking_right: bool,
}

impl StateMachine {
    /// A machine starting out idle, facing left.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: PetState::Idle,
            resume: ResumeState::Idle,
            frame: 0,
            walking_right: false,
        }
    }

    /// The current behavior state.
    #[must_use]
    pub fn state(&self) -> PetState {
        self.state
    }

    /// The frame counter. Wraps; interpret modulo the active sequence
    /// length. Deliberately NOT reset on state transitions — the counter
    /// is simply reinterpreted against the new sequence's modulus, so
    /// animation timing carries across transitions.
    #[must_use]
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Whether the pet walks (and faces) right.
    #[must_use]
    pub fn walking_right(&self) -> bool {
        self.walking_right
    }

    /// Record a direction imposed from outside (an edge bounce).
    pub fn set_walking_right(&mut self, walking_right: bool) {
        self.walking_right = walking_right;
    }

    /// Advance one animation step.
    ///
    /// Returns `true` when the motion controller should move the window
    /// this tick (walking, and the sleep draw did not fire). The direction
    /// draw in `Walking` is evaluated every tick regardless of the sleep
    /// draw; no transition is taken more than once per tick.
    pub fn tick(&mut self, chance: &mut dyn Chance) -> bool {
        self.frame = self.frame.wrapping_add(1);

        match self.state {
            PetState::Idle => {
                if chance.draw(SLEEP_BOUND) < HIT {
                    self.resume = ResumeState::Idle;
                    self.state = PetState::Sleeping;
                }
                false
            }
            PetState::Sleeping => {
                if chance.draw(WAKE_BOUND) < HIT {
                    self.state = self.resume.into();
                }
                false
            }
            PetState::Walking => {
                let dozed = chance.draw(SLEEP_BOUND) < HIT;
                if dozed {
                    self.resume = ResumeState::Walking;
                    self.state = PetState::Sleeping;
                }
                if chance.draw(TURN_BOUND) < HIT {
                    self.walking_right = !self.walking_right;
                }
                !dozed
            }
        }
    }

    /// Single-click override: `Idle ↔ Sleeping`; `Walking → Idle`.
    ///
    /// The resume slot is left untouched — it belongs to the probabilistic
    /// path, so a manually-slept pet wakes into whatever it last dozed
    /// off from.
    pub fn toggle_sleep(&mut self) {
        self.state = match self.state {
            PetState::Idle => PetState::Sleeping,
            PetState::Sleeping | PetState::Walking => PetState::Idle,
        };
    }

    /// Double-click override: reverse direction and force `Walking`.
    pub fn toggle_walk(&mut self) {
        self.walking_right = !self.walking_right;
        self.state = PetState::Walking;
    }
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Never fires any transition draw.
    struct Never;

    impl Chance for Never {
        fn draw(&mut self, bound: u32) -> u32 {
            bound - 1
        }
    }

    /// Fires every transition draw.
    struct Always;

    impl Chance for Always {
        fn draw(&mut self, _bound: u32) -> u32 {
            0
        }
    }

    /// Replays a fixed list of draws, then stops firing.
    struct Script(Vec<u32>);

    impl Chance for Script {
        fn draw(&mut self, bound: u32) -> u32 {
            if self.0.is_empty() {
                bound - 1
            } else {
                self.0.remove(0)
            }
        }
    }

    // =========================================================================
    // Tick transitions
    // =========================================================================

    #[test]
    fn test_idle_tick_without_transition() {
        let mut machine = StateMachine::new();

        let walked = machine.tick(&mut Never);

        assert_eq!(machine.state(), PetState::Idle);
        assert_eq!(machine.frame(), 1);
        assert!(!walked);
    }

    #[test]
    fn test_idle_dozes_off_on_hit() {
        let mut machine = StateMachine::new();

        let walked = machine.tick(&mut Always);

        assert_eq!(machine.state(), PetState::Sleeping);
        assert!(!walked);
    }

    #[test]
    fn test_sleeping_wakes_into_idle() {
        let mut machine = StateMachine::new();
        let _ = machine.tick(&mut Always); // Idle -> Sleeping, resume = Idle

        let _ = machine.tick(&mut Always);

        assert_eq!(machine.state(), PetState::Idle);
    }

    #[test]
    fn test_sleeping_wakes_into_walking() {
        let mut machine = StateMachine::new();
        machine.toggle_walk();
        // Sleep draw fires (0), turn draw does not (TURN_BOUND - 1).
        let _ = machine.tick(&mut Script(vec![0, TURN_BOUND - 1]));
        assert_eq!(machine.state(), PetState::Sleeping);

        let _ = machine.tick(&mut Always);

        assert_eq!(machine.state(), PetState::Walking);
    }

    #[test]
    fn test_walking_tick_requests_motion() {
        let mut machine = StateMachine::new();
        machine.toggle_walk();

        let walked = machine.tick(&mut Never);

        assert_eq!(machine.state(), PetState::Walking);
        assert!(walked);
    }

    #[test]
    fn test_walking_doze_suppresses_motion() {
        let mut machine = StateMachine::new();
        machine.toggle_walk();

        let walked = machine.tick(&mut Script(vec![0, TURN_BOUND - 1]));

        assert_eq!(machine.state(), PetState::Sleeping);
        assert!(!walked);
    }

    #[test]
    fn test_direction_draw_is_independent_of_sleep_draw() {
        let mut machine = StateMachine::new();
        machine.toggle_walk();
        let facing_right = machine.walking_right();

        // Both draws fire on the same tick: the pet dozes AND turns.
        let walked = machine.tick(&mut Always);

        assert_eq!(machine.state(), PetState::Sleeping);
        assert_eq!(machine.walking_right(), !facing_right);
        assert!(!walked);
    }

    #[test]
    fn test_direction_persists_across_states() {
        let mut machine = StateMachine::new();
        machine.toggle_walk();
        machine.set_walking_right(true);

        machine.toggle_sleep(); // Walking -> Idle
        machine.toggle_walk(); // back to Walking, direction re-toggled

        assert!(!machine.walking_right());
    }

    // =========================================================================
    // Manual overrides
    // =========================================================================

    #[test]
    fn test_single_click_alternates_idle_and_sleeping() {
        let mut machine = StateMachine::new();

        machine.toggle_sleep();
        assert_eq!(machine.state(), PetState::Sleeping);
        machine.toggle_sleep();
        assert_eq!(machine.state(), PetState::Idle);
        machine.toggle_sleep();
        assert_eq!(machine.state(), PetState::Sleeping);
    }

    #[test]
    fn test_single_click_while_walking_forces_idle() {
        let mut machine = StateMachine::new();
        machine.toggle_walk();

        machine.toggle_sleep();

        assert_eq!(machine.state(), PetState::Idle);
    }

    #[test]
    fn test_double_click_toggles_direction_and_walks() {
        let mut machine = StateMachine::new();
        assert!(!machine.walking_right());

        machine.toggle_walk();

        assert_eq!(machine.state(), PetState::Walking);
        assert!(machine.walking_right());
    }

    // =========================================================================
    // Frame counter
    // =========================================================================

    #[test]
    fn test_frame_counter_advances_across_transitions() {
        let mut machine = StateMachine::new();

        for _ in 0..5 {
            let _ = machine.tick(&mut Never);
        }
        machine.toggle_walk();
        let _ = machine.tick(&mut Never);

        // Not reset by the manual transition.
        assert_eq!(machine.frame(), 6);
    }

    #[test]
    fn test_frame_counter_wraps() {
        let mut machine = StateMachine::new();
        machine.frame = usize::MAX;

        let _ = machine.tick(&mut Never);

        assert_eq!(machine.frame(), 0);
    }
}
