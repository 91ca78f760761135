//! Per-frame delta timing from the monotonic clock.

use std::time::Instant;

/// Produces the seconds elapsed between consecutive frames.
///
/// The clock is read exactly once per frame via [`tick`](Self::tick).
/// The first tick after construction (or a [`reset`](Self::reset)) has no
/// previous frame to diff against and yields 0.0 instead of a
/// construction-to-first-frame jump.
#[derive(Debug, Default)]
pub struct FrameClock {
    last_frame: Option<Instant>,
}

impl FrameClock {
    /// A clock with no frames recorded yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to the current frame and return the delta in seconds since
    /// the previous one.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = self
            .last_frame
            .map_or(0.0, |prev| now.duration_since(prev).as_secs_f32());
        self.last_frame = Some(now);
        dt
    }

    /// Forget the previous frame; the next tick yields 0.0. Call after a
    /// long suspension (window minimized) to avoid one giant delta.
    pub fn reset(&mut self) {
        self.last_frame = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(), 0.0);
    }

    #[test]
    fn test_tick_is_monotonic_nonnegative() {
        let mut clock = FrameClock::new();
        let _ = clock.tick();
        assert!(clock.tick() >= 0.0);
    }

    #[test]
    fn test_reset_reseeds() {
        let mut clock = FrameClock::new();
        let _ = clock.tick();
        clock.reset();
        assert_eq!(clock.tick(), 0.0);
    }
}
