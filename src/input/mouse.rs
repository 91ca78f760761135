//! Mouse position tracking for camera look.
//!
//! The windowing backend reports absolute cursor positions; the camera
//! wants deltas. The very first sample after (re)activation has no prior
//! position to diff against, so it only seeds the tracker and yields a
//! zero delta — otherwise the camera would jump by the cursor's absolute
//! distance from the origin.

use glam::Vec2;

/// Last-known cursor position, unseeded until the first sample arrives.
#[derive(Debug, Default)]
pub struct MouseTracker {
    last: Option<Vec2>,
}

impl MouseTracker {
    /// Unseeded tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed an absolute cursor position, returning the delta since the
    /// previous sample.
    ///
    /// The y component is inverted (screen y grows downward, pitch grows
    /// upward). The first sample after construction or [`reset`](Self::reset)
    /// returns `Vec2::ZERO`.
    pub fn offset(&mut self, x: f32, y: f32) -> Vec2 {
        let current = Vec2::new(x, y);
        let delta = match self.last {
            Some(prev) => Vec2::new(current.x - prev.x, prev.y - current.y),
            None => Vec2::ZERO,
        };
        self.last = Some(current);
        delta
    }

    /// Forget the last position. Call when cursor capture is re-enabled
    /// so the next sample seeds instead of jumping.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sample_is_zero_delta() {
        let mut tracker = MouseTracker::new();
        assert_eq!(tracker.offset(523.0, -781.5), Vec2::ZERO);
    }

    #[test]
    fn test_subsequent_samples_diff() {
        let mut tracker = MouseTracker::new();
        let _ = tracker.offset(100.0, 200.0);
        let delta = tracker.offset(103.0, 195.0);
        assert_eq!(delta, Vec2::new(3.0, 5.0));
    }

    #[test]
    fn test_reset_reseeds() {
        let mut tracker = MouseTracker::new();
        let _ = tracker.offset(100.0, 200.0);
        tracker.reset();
        assert_eq!(tracker.offset(900.0, 900.0), Vec2::ZERO);
    }
}
