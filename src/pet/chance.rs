//! Injectable randomness for the per-tick transition draws.

use rand::Rng;

/// Source of uniform draws for the state machine's transition checks.
///
/// The machine never talks to `rand` directly; tests substitute a scripted
/// source and assert exact transition behavior over a run of ticks.
pub trait Chance {
    /// Uniform draw in `0..bound`. `bound` is always at least 1.
    fn draw(&mut self, bound: u32) -> u32;
}

/// Thread-local PRNG-backed source used by the running pet.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadChance;

impl Chance for ThreadChance {
    fn draw(&mut self, bound: u32) -> u32 {
        rand::rng().random_range(0..bound)
    }
}
