use std::time::Duration;

use super::clock::Clock;

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Time elapsed since the previous restart, in seconds.
    ///
    /// Not clamped or smoothed: after a debugger pause or an OS stall this can
    /// be arbitrarily large.
    pub dt: f32,

    /// Clock reading taken at the restart (frame start).
    pub start: Duration,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Stopwatch producing `FrameTime` snapshots.
///
/// The clock is passed in on every call instead of being owned, so the same
/// `FrameClock` works with [`SystemClock`](super::SystemClock) in production
/// and [`ManualClock`](super::ManualClock) in tests.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    mark: Duration,
    frame_index: u64,
}

impl FrameClock {
    /// Creates a clock whose baseline is the clock's current time.
    pub fn start<C: Clock + ?Sized>(clock: &C) -> Self {
        Self {
            mark: clock.now(),
            frame_index: 0,
        }
    }

    /// Resets the baseline without producing a frame.
    ///
    /// Used when a loop (re)starts so the first delta does not include idle time.
    pub fn reset<C: Clock + ?Sized>(&mut self, clock: &C) {
        self.mark = clock.now();
    }

    /// Returns the time since the last restart and restarts.
    pub fn restart<C: Clock + ?Sized>(&mut self, clock: &C) -> FrameTime {
        let now = clock.now();
        let dt = now.saturating_sub(self.mark);
        self.mark = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            start: now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }

    /// Time since the last restart, without restarting.
    pub fn elapsed<C: Clock + ?Sized>(&self, clock: &C) -> Duration {
        clock.now().saturating_sub(self.mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::ManualClock;

    #[test]
    fn restart_reports_elapsed_and_rebases() {
        let clock = ManualClock::new();
        let mut fc = FrameClock::start(&clock);

        clock.advance(Duration::from_millis(250));
        let ft = fc.restart(&clock);
        assert!((ft.dt - 0.25).abs() < 1e-6);
        assert_eq!(ft.frame_index, 0);
        assert_eq!(fc.elapsed(&clock), Duration::ZERO);

        clock.advance(Duration::from_millis(10));
        assert_eq!(fc.elapsed(&clock), Duration::from_millis(10));
        assert_eq!(fc.restart(&clock).frame_index, 1);
    }

    #[test]
    fn large_deltas_are_not_clamped() {
        let clock = ManualClock::new();
        let mut fc = FrameClock::start(&clock);
        clock.advance(Duration::from_secs(30));
        assert!((fc.restart(&clock).dt - 30.0).abs() < 1e-4);
    }
}
