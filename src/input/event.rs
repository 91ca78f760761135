//! Platform-agnostic input events.
//!
//! These are fed into
//! [`ViewportController::handle_event`](crate::camera::ViewportController::handle_event),
//! which routes mouse and scroll events straight to the camera and folds
//! key events into the polled [`KeyState`](super::KeyState).

use super::keys::Key;

/// A raw input event as delivered by the windowing backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to an absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Scroll wheel. Positive widens the field of view (zooms out).
    Scroll {
        /// Signed scroll amount in zoom degrees.
        delta: f32,
    },
    /// A key changed state.
    Key {
        /// Which key.
        key: Key,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Modifier key state changed.
    ModifiersChanged {
        /// Whether the shift key is held.
        shift: bool,
    },
}
