use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Window title and surface dimensions.
pub struct WindowOptions {
    /// Base window title; the interactive status suffix is appended at
    /// runtime.
    pub title: String,
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
}

impl WindowOptions {
    /// Width over height, guarding against zero dimensions.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        self.width.max(1) as f32 / self.height.max(1) as f32
    }
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            title: "Graphics Project".to_owned(),
            width: 1000,
            height: 800,
        }
    }
}
