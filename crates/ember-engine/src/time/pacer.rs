use std::time::Duration;

use super::clock::Clock;
use super::frame_clock::FrameClock;
use crate::config::EngineConfig;

/// Sleep-based frame rate cap.
///
/// The budget is measured from the frame clock's last restart, so it caps the
/// total frame time (update + render + present) rather than the gap between
/// presents.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FramePacer {
    period: Option<Duration>,
}

impl FramePacer {
    /// Pacer that never sleeps.
    pub const fn uncapped() -> Self {
        Self { period: None }
    }

    pub const fn with_period(period: Duration) -> Self {
        Self { period: Some(period) }
    }

    /// No pacing when vsync is on or the target rate is 0.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            period: config.frame_period(),
        }
    }

    /// Sleep needed after a frame that took `elapsed`.
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        let period = self.period?;
        let left = period.checked_sub(elapsed)?;
        (!left.is_zero()).then_some(left)
    }

    /// Sleeps for the rest of the frame budget. Returns the slept duration.
    pub fn pace<C: Clock + ?Sized>(&self, frame: &FrameClock, clock: &C) -> Option<Duration> {
        let left = self.remaining(frame.elapsed(clock))?;
        clock.sleep(left);
        Some(left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::ManualClock;

    #[test]
    fn uncapped_never_sleeps() {
        assert_eq!(FramePacer::uncapped().remaining(Duration::ZERO), None);
    }

    #[test]
    fn remaining_is_budget_minus_elapsed() {
        let p = FramePacer::with_period(Duration::from_millis(20));
        assert_eq!(p.remaining(Duration::from_millis(5)), Some(Duration::from_millis(15)));
        assert_eq!(p.remaining(Duration::from_millis(20)), None);
        assert_eq!(p.remaining(Duration::from_millis(35)), None);
    }

    #[test]
    fn pace_sleeps_through_the_clock() {
        let clock = ManualClock::new();
        let frame = FrameClock::start(&clock);
        clock.advance(Duration::from_millis(4));

        let p = FramePacer::with_period(Duration::from_millis(10));
        assert_eq!(p.pace(&frame, &clock), Some(Duration::from_millis(6)));
        assert_eq!(clock.sleeps(), vec![Duration::from_millis(6)]);
        assert_eq!(frame.elapsed(&clock), Duration::from_millis(10));
    }

    #[test]
    fn vsync_config_is_uncapped() {
        let cfg = EngineConfig::default().vsync(true).target_frame_rate(30);
        assert_eq!(FramePacer::from_config(&cfg), FramePacer::uncapped());
    }
}
