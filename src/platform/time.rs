//! Frame clock: monotonic timestamps in, elapsed deltas out

#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delta since the previous timestamp, in milliseconds.
    ///
    /// The first frame reports 0 and timestamps that go backwards report 0.
    /// Long gaps are reported in full so game time tracks the wall clock.
    pub fn tick(&mut self, timestamp_ms: f64) -> f64 {
        if !timestamp_ms.is_finite() {
            log::warn!("Ignoring non-finite frame timestamp");
            return 0.0;
        }
        let dt = match self.last_ms {
            Some(last) => (timestamp_ms - last).max(0.0),
            None => 0.0,
        };
        // Keep the newest time so a backwards jump doesn't stall future frames
        self.last_ms = Some(timestamp_ms);
        dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(12345.0), 0.0);
        assert_eq!(clock.tick(12361.0), 16.0);
    }

    #[test]
    fn test_backwards_and_long_gaps() {
        let mut clock = FrameClock::new();
        clock.tick(1000.0);
        assert_eq!(clock.tick(990.0), 0.0);
        assert_eq!(clock.tick(1006.0), 16.0);
        assert_eq!(clock.tick(60_000.0), 58_994.0);
        assert_eq!(clock.tick(f64::NAN), 0.0);
        assert_eq!(clock.tick(60_010.0), 10.0);
    }
}
