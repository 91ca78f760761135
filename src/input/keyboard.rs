//! The held-key set the controller polls once per frame.
//!
//! Event-driven windowing backends (winit among them) deliver key
//! transitions rather than exposing a get-key-state query, so the set is
//! fed from the event stream and read back like a polled keyboard.

use rustc_hash::FxHashSet;

use super::keys::Key;

/// Currently-held keys.
#[derive(Debug, Default)]
pub struct KeyState {
    held: FxHashSet<Key>,
}

impl KeyState {
    /// Empty state: no keys held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press or release transition.
    pub fn set_pressed(&mut self, key: Key, pressed: bool) {
        if pressed {
            let _ = self.held.insert(key);
        } else {
            let _ = self.held.remove(&key);
        }
    }

    /// Whether the key is currently held.
    #[must_use]
    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Drop all held keys (used when the window loses focus and release
    /// events can go missing).
    pub fn clear(&mut self) {
        self.held.clear();
    }
}
