//! Camera system: the pose model and the per-frame viewport controller.

/// Viewport controller: input → camera → published matrices.
pub mod controller;
/// Camera pose and pose-mutation operations.
pub mod core;

pub use controller::{ProjectionMode, ViewportController};
pub use core::Camera;
