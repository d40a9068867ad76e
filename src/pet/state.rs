//! Behavior states for the pet.

/// The behavior state the pet is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetState {
    /// Awake in place, wagging its tail.
    Idle,
    /// Asleep until a wake-up draw or a click.
    Sleeping,
    /// Pacing horizontally across the screen.
    Walking,
}

/// The awake state the pet returns to after sleeping.
///
/// Only the two awake states can precede a doze, so the resume slot can
/// structurally never hold `Sleeping`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeState {
    /// Wake up idling.
    Idle,
    /// Wake up walking.
    Walking,
}

impl From<ResumeState> for PetState {
    fn from(resume: ResumeState) -> Self {
        match resume {
            ResumeState::Idle => Self::Idle,
            ResumeState::Walking => Self::Walking,
        }
    }
}
