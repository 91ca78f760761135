//! Input handling: platform-agnostic events and keys, the held-key set,
//! the edge-triggered debounce, mouse tracking, and key bindings.

/// Action → key binding map with TOML-friendly serialization.
pub mod bindings;
/// Edge-triggered key debounce.
pub mod debounce;
/// Platform-agnostic input events.
pub mod event;
/// Currently-held key set.
pub mod keyboard;
/// Platform-agnostic key identifiers and bindable actions.
pub mod keys;
/// Mouse position tracking with first-sample seeding.
pub mod mouse;

pub use bindings::Bindings;
pub use debounce::EdgeDebounce;
pub use event::InputEvent;
pub use keyboard::KeyState;
pub use keys::{Key, KeyAction};
pub use mouse::MouseTracker;
