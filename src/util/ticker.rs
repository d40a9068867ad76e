//! Drift-compensated animation tick scheduling.

use std::time::{Duration, Instant};

/// Nominal delay between animation ticks.
pub const TICK_PERIOD: Duration = Duration::from_millis(300);

/// Computes tick deadlines for the shell's wait-until control flow.
///
/// After a tick is processed, the next delay is shortened by the
/// processing time (floored at zero), preserving a best-effort long-run
/// average period. There is never more than one pending deadline: an
/// overrunning tick is followed immediately rather than queuing a
/// backlog, and [`restart`](Self::restart) replaces the pending deadline
/// outright.
#[derive(Debug, Clone, Copy)]
pub struct TickTimer {
    period: Duration,
    deadline: Instant,
}

impl TickTimer {
    /// Start a timer whose first tick is one full period from `now`.
    #[must_use]
    pub fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            deadline: now + period,
        }
    }

    /// The instant the next tick is due.
    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Whether the pending tick is due at `now`.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Replace the pending deadline with a fresh full period. Used after
    /// manual state changes so the new state animates on a clean cadence.
    pub fn restart(&mut self, now: Instant) {
        self.deadline = now + self.period;
    }

    /// Re-arm after processing a due tick.
    ///
    /// `fired` is when the tick fired and `now` is when processing
    /// finished; the next delay is `period − (now − fired)`, floored at
    /// zero.
    pub fn advance(&mut self, fired: Instant, now: Instant) {
        let elapsed = now.duration_since(fired);
        self.deadline = now + self.period.saturating_sub(elapsed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(300);

    #[test]
    fn test_first_deadline_is_one_period_out() {
        let start = Instant::now();
        let timer = TickTimer::new(PERIOD, start);

        assert_eq!(timer.deadline(), start + PERIOD);
        assert!(!timer.is_due(start));
        assert!(timer.is_due(start + PERIOD));
    }

    #[test]
    fn test_processing_time_shortens_the_next_delay() {
        let start = Instant::now();
        let mut timer = TickTimer::new(PERIOD, start);

        let fired = start + PERIOD;
        let done = fired + Duration::from_millis(120);
        timer.advance(fired, done);

        // 300ms − 120ms of processing = 180ms from completion.
        assert_eq!(timer.deadline(), done + Duration::from_millis(180));
    }

    #[test]
    fn test_overrun_fires_immediately_without_backlog() {
        let start = Instant::now();
        let mut timer = TickTimer::new(PERIOD, start);

        let fired = start + PERIOD;
        let done = fired + Duration::from_millis(900);
        timer.advance(fired, done);

        // Delay floored at zero: due right away, and only once — the
        // missed periods are not queued.
        assert_eq!(timer.deadline(), done);
        assert!(timer.is_due(done));
    }

    #[test]
    fn test_restart_replaces_the_pending_deadline() {
        let start = Instant::now();
        let mut timer = TickTimer::new(PERIOD, start);

        let click = start + Duration::from_millis(250);
        timer.restart(click);

        assert_eq!(timer.deadline(), click + PERIOD);
        assert!(!timer.is_due(start + PERIOD));
    }
}
