//! Platform-agnostic key identifiers and the actions they can drive.

use serde::{Deserialize, Serialize};

/// Physical keys the viewport understands.
///
/// Names follow the `winit::keyboard::KeyCode` spelling so TOML presets
/// read the same whether they were written by hand or dumped from the
/// viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// `W`
    KeyW,
    /// `A`
    KeyA,
    /// `S`
    KeyS,
    /// `D`
    KeyD,
    /// `Q`
    KeyQ,
    /// `E`
    KeyE,
    /// `P`
    KeyP,
    /// `Z`
    KeyZ,
    /// `X`
    KeyX,
    /// `L`
    KeyL,
    /// `F`
    KeyF,
    /// `T`
    KeyT,
    /// `1`
    Digit1,
    /// `2`
    Digit2,
    /// `3`
    Digit3,
    /// `4`
    Digit4,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// `=` / `+`
    Equal,
    /// `-`
    Minus,
    /// `;`
    Semicolon,
    /// `'`
    Quote,
    /// Left shift.
    ShiftLeft,
    /// Escape.
    Escape,
}

/// Viewport actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay
/// readable:
/// ```toml
/// [keybindings.bindings]
/// toggle_projection = "KeyP"
/// speed_scale_up = "KeyX"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Move the camera along its front vector. Continuous.
    MoveForward,
    /// Move the camera against its front vector. Continuous.
    MoveBackward,
    /// Strafe left. Continuous.
    MoveLeft,
    /// Strafe right. Continuous.
    MoveRight,
    /// Move along the camera up vector. Continuous.
    MoveUp,
    /// Move against the camera up vector. Continuous.
    MoveDown,
    /// Double movement speed while held. Continuous modifier.
    SpeedBoost,
    /// Switch between perspective and orthographic projection. Discrete.
    ToggleProjection,
    /// Halve the speed-scale factor. Discrete.
    SpeedScaleDown,
    /// Double the speed-scale factor. Discrete.
    SpeedScaleUp,
    /// Select point light 1. Discrete.
    SelectLight1,
    /// Select point light 2. Discrete.
    SelectLight2,
    /// Select point light 3. Discrete.
    SelectLight3,
    /// Select point light 4. Discrete.
    SelectLight4,
    /// Toggle the directional light. Discrete.
    ToggleDirectionalLight,
    /// Toggle the camera flashlight. Discrete.
    ToggleFlashlight,
    /// Toggle the selected point light. Discrete.
    TogglePointLight,
    /// Nudge the selected point light along -X. Continuous.
    LightLeft,
    /// Nudge the selected point light along +X. Continuous.
    LightRight,
    /// Nudge the selected point light along -Z. Continuous.
    LightForward,
    /// Nudge the selected point light along +Z. Continuous.
    LightBackward,
    /// Nudge the selected point light along +Y. Continuous.
    LightUp,
    /// Nudge the selected point light along -Y. Continuous.
    LightDown,
    /// Raise the selected point light's intensity. Discrete step.
    IntensityUp,
    /// Lower the selected point light's intensity. Discrete step.
    IntensityDown,
    /// Raise the scene ambient boost. Continuous.
    AmbientUp,
    /// Lower the scene ambient boost. Continuous.
    AmbientDown,
    /// Ask the window to close. Polled each frame.
    CloseWindow,
}
