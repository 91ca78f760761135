//! The action → key binding map.
//!
//! Forward map is action-keyed so a TOML preset reads as "what does this
//! action sit on"; the controller polls by action, so lookups go through
//! the forward map directly.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::keys::{Key, KeyAction};

/// Maps [`KeyAction`] variants to physical keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Bindings {
    /// Forward map: action → key.
    bindings: FxHashMap<KeyAction, Key>,
}

impl Default for Bindings {
    fn default() -> Self {
        let bindings = FxHashMap::from_iter([
            (KeyAction::MoveForward, Key::KeyW),
            (KeyAction::MoveBackward, Key::KeyS),
            (KeyAction::MoveLeft, Key::KeyA),
            (KeyAction::MoveRight, Key::KeyD),
            (KeyAction::MoveUp, Key::KeyE),
            (KeyAction::MoveDown, Key::KeyQ),
            (KeyAction::SpeedBoost, Key::ShiftLeft),
            (KeyAction::ToggleProjection, Key::KeyP),
            (KeyAction::SpeedScaleDown, Key::KeyZ),
            (KeyAction::SpeedScaleUp, Key::KeyX),
            (KeyAction::SelectLight1, Key::Digit1),
            (KeyAction::SelectLight2, Key::Digit2),
            (KeyAction::SelectLight3, Key::Digit3),
            (KeyAction::SelectLight4, Key::Digit4),
            (KeyAction::ToggleDirectionalLight, Key::KeyL),
            (KeyAction::ToggleFlashlight, Key::KeyF),
            (KeyAction::TogglePointLight, Key::KeyT),
            (KeyAction::LightLeft, Key::ArrowLeft),
            (KeyAction::LightRight, Key::ArrowRight),
            (KeyAction::LightForward, Key::ArrowUp),
            (KeyAction::LightBackward, Key::ArrowDown),
            (KeyAction::LightUp, Key::PageUp),
            (KeyAction::LightDown, Key::PageDown),
            (KeyAction::IntensityUp, Key::Equal),
            (KeyAction::IntensityDown, Key::Minus),
            (KeyAction::AmbientDown, Key::Semicolon),
            (KeyAction::AmbientUp, Key::Quote),
            (KeyAction::CloseWindow, Key::Escape),
        ]);
        Self { bindings }
    }
}

impl Bindings {
    /// The key bound to `action`, if any.
    #[must_use]
    pub fn key(&self, action: KeyAction) -> Option<Key> {
        self.bindings.get(&action).copied()
    }

    /// Rebind `action` to `key`.
    pub fn bind(&mut self, action: KeyAction, key: Key) {
        let _ = self.bindings.insert(action, key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let bindings = Bindings::default();
        assert_eq!(bindings.key(KeyAction::MoveForward), Some(Key::KeyW));
        assert_eq!(bindings.key(KeyAction::ToggleProjection), Some(Key::KeyP));
        assert_eq!(bindings.key(KeyAction::CloseWindow), Some(Key::Escape));
    }

    #[test]
    fn test_rebind() {
        let mut bindings = Bindings::default();
        bindings.bind(KeyAction::ToggleProjection, Key::KeyT);
        assert_eq!(bindings.key(KeyAction::ToggleProjection), Some(Key::KeyT));
    }
}
