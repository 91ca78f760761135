//! Edge-triggered key debounce.
//!
//! Converts a continuously-polled "is held" signal into an action that
//! fires exactly once per physical press: the first poll that observes
//! the key held consumes it, and a release re-arms it.

use rustc_hash::FxHashMap;

use super::keys::Key;

/// Per-key "already consumed while held" state.
#[derive(Debug, Default)]
pub struct EdgeDebounce {
    consumed: FxHashMap<Key, bool>,
}

impl EdgeDebounce {
    /// Fresh debounce state: every key is armed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` exactly once per press-release cycle of `key`.
    ///
    /// `held` is the key's current polled state. However many polls
    /// observe the key held, only the first returns `true`; the key must
    /// be observed released before it can fire again.
    pub fn pressed_once(&mut self, key: Key, held: bool) -> bool {
        let consumed = self.consumed.entry(key).or_insert(false);
        if held {
            if *consumed {
                false
            } else {
                *consumed = true;
                true
            }
        } else {
            *consumed = false;
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_while_held() {
        let mut debounce = EdgeDebounce::new();
        assert!(debounce.pressed_once(Key::KeyP, true));
        for _ in 0..10 {
            assert!(!debounce.pressed_once(Key::KeyP, true));
        }
    }

    #[test]
    fn test_release_rearms() {
        let mut debounce = EdgeDebounce::new();
        assert!(debounce.pressed_once(Key::KeyZ, true));
        assert!(!debounce.pressed_once(Key::KeyZ, true));
        assert!(!debounce.pressed_once(Key::KeyZ, false));
        assert!(debounce.pressed_once(Key::KeyZ, true));
    }

    #[test]
    fn test_keys_are_independent() {
        let mut debounce = EdgeDebounce::new();
        assert!(debounce.pressed_once(Key::KeyZ, true));
        assert!(debounce.pressed_once(Key::KeyX, true));
        assert!(!debounce.pressed_once(Key::KeyZ, true));
    }

    #[test]
    fn test_released_key_never_fires() {
        let mut debounce = EdgeDebounce::new();
        for _ in 0..5 {
            assert!(!debounce.pressed_once(Key::KeyT, false));
        }
    }
}
