//! Send pacing
//!
//! Decides when the sampling loop fires from a caller-supplied
//! millisecond clock. Elapsed time is computed with wrapping subtraction,
//! so the cadence survives the ~49.7-day rollover of a `u32` tick count.

/// Default interval between telemetry frames (milliseconds).
pub const DEFAULT_SEND_PERIOD_MS: u32 = 500;

/// Fixed-period trigger over a rolling millisecond clock.
#[derive(Debug, Clone)]
pub struct SendPacer {
    period_ms: u32,
    last_fire_ms: u32,
}

impl SendPacer {
    /// Create a pacer firing every `period_ms`. The first fire happens
    /// one full period after the clock's zero.
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms,
            last_fire_ms: 0,
        }
    }

    /// Report whether a period has elapsed at `now_ms`, rearming if so.
    pub fn poll(&mut self, now_ms: u32) -> bool {
        let elapsed = now_ms.wrapping_sub(self.last_fire_ms);
        if elapsed < self.period_ms {
            return false;
        }
        self.last_fire_ms = now_ms;
        true
    }

    /// Configured interval in milliseconds.
    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }
}

impl Default for SendPacer {
    fn default() -> Self {
        Self::new(DEFAULT_SEND_PERIOD_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waits_one_full_period() {
        let mut pacer = SendPacer::new(500);
        assert!(!pacer.poll(0));
        assert!(!pacer.poll(499));
        assert!(pacer.poll(500));
    }

    #[test]
    fn test_rearms_after_each_fire() {
        let mut pacer = SendPacer::new(500);
        assert!(pacer.poll(500));
        assert!(!pacer.poll(501)); // must not fire again right away
        assert!(!pacer.poll(999));
        assert!(pacer.poll(1000));
    }

    #[test]
    fn test_late_poll_fires_once() {
        let mut pacer = SendPacer::new(100);
        assert!(pacer.poll(1000));
        assert!(!pacer.poll(1001));
    }

    #[test]
    fn test_survives_clock_rollover() {
        let mut pacer = SendPacer::new(500);
        assert!(pacer.poll(u32::MAX - 100));
        assert!(!pacer.poll(u32::MAX)); // 100ms into the period
        assert!(pacer.poll(399)); // 500ms across the wrap
    }

    #[test]
    fn test_zero_period_fires_every_poll() {
        let mut pacer = SendPacer::new(0);
        assert!(pacer.poll(0));
        assert!(pacer.poll(0));
        assert!(pacer.poll(1));
    }
}
