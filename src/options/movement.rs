use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Interactive movement tuning.
pub struct MovementOptions {
    /// Base per-frame movement multiplier; the runtime speed-scale
    /// factor (x0.25 to x8) multiplies on top of it.
    pub base_speed: f32,
}

impl Default for MovementOptions {
    fn default() -> Self {
        Self { base_speed: 3.0 }
    }
}
