use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared view of the engine's run flag.
///
/// Clone it before calling `run` and capture it in a callback to end the loop
/// from inside a frame. Stopping is cooperative: the flag is checked once per
/// iteration, after the current frame is presented.
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    running: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn stop(&self) {
        self.running.store(false, Ordering::Release);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    pub(crate) fn start(&self) {
        self.running.store(true, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag() {
        let a = StopHandle::default();
        let b = a.clone();
        assert!(!a.is_running());
        a.start();
        assert!(b.is_running());
        b.stop();
        assert!(!a.is_running());
    }
}
