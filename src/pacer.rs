use std::time::{Duration, Instant};

/// Caps the tick rate by sleeping away what is left of each frame
#[derive(Debug)]
pub struct FramePacer {
    frame: Duration,
    last: Instant,
}

impl FramePacer {
    /// `fps` of zero disables pacing
    pub fn new(fps: u32) -> Self {
        let frame = if fps == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs(1) / fps
        };
        FramePacer {
            frame,
            last: Instant::now(),
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Time still to wait after `elapsed` of work in the current frame
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.frame.saturating_sub(elapsed)
    }

    /// Sleep until the current frame's budget is used up, then start the next one
    pub fn wait(&mut self) {
        let remaining = self.remaining(self.last.elapsed());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.last = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thirty_fps_budget() {
        let pacer = FramePacer::new(30);
        assert_eq!(pacer.frame_duration(), Duration::from_nanos(33_333_333));
        assert_eq!(
            pacer.remaining(Duration::from_millis(10)),
            Duration::from_nanos(23_333_333)
        );
    }

    #[test]
    fn test_overrun_does_not_wait() {
        let pacer = FramePacer::new(30);
        assert_eq!(pacer.remaining(Duration::from_millis(50)), Duration::ZERO);
    }

    #[test]
    fn test_zero_fps_is_unpaced() {
        let mut pacer = FramePacer::new(0);
        assert_eq!(pacer.remaining(Duration::ZERO), Duration::ZERO);
        pacer.wait();
    }
}
