//! Small shared utilities.

/// Monotonic per-frame delta clock.
pub mod frame_clock;

pub use frame_clock::FrameClock;
