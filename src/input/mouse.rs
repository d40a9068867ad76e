use std::time::{Duration, Instant};

/// Consecutive releases within this window count toward a multi-click.
const MULTI_CLICK_THRESHOLD: Duration = Duration::from_millis(400);

/// Result of processing a mouse-up event through the multi-click state
/// machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickResult {
    /// No click action (the gesture was a drag).
    NoAction,
    /// Single click.
    SingleClick,
    /// Second click in quick succession.
    DoubleClick,
    /// Third click in quick succession.
    TripleClick,
}

/// Tracks press/drag state and the multi-click state machine.
///
/// Click counting is time-based only: the window moves under the cursor
/// between the clicks of a double-click on a walking pet, so a
/// same-position requirement would never be met.
pub struct InputState {
    pressed: bool,
    dragged: bool,
    last_click_time: Instant,
    click_count: u32,
}

impl InputState {
    /// Create a new input state with no active press or click run.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pressed: false,
            dragged: false,
            last_click_time: Instant::now(),
            click_count: 0,
        }
    }

    /// Record a primary-button press.
    pub fn handle_mouse_down(&mut self) {
        self.pressed = true;
        self.dragged = false;
    }

    /// Mark that a drag occurred (significant cursor movement while
    /// pressed). Downgrades the eventual release to a non-click.
    pub fn mark_dragging(&mut self) {
        self.dragged = true;
    }

    /// Whether the primary button is currently held.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Process a mouse-up event and return what kind of click happened.
    ///
    /// `now` is the release timestamp, used for the multi-click window.
    pub fn process_mouse_up(&mut self, now: Instant) -> ClickResult {
        let was_dragged = self.dragged;
        self.pressed = false;
        self.dragged = false;

        // A drag release is not a click and breaks any click run.
        if was_dragged {
            self.last_click_time = now;
            self.click_count = 0;
            return ClickResult::NoAction;
        }

        if now.duration_since(self.last_click_time)
            < MULTI_CLICK_THRESHOLD
        {
            self.click_count += 1;
        } else {
            self.click_count = 1;
        }
        self.last_click_time = now;

        match self.click_count {
            count if count >= 3 => {
                self.click_count = 0;
                ClickResult::TripleClick
            }
            2 => ClickResult::DoubleClick,
            _ => ClickResult::SingleClick,
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
