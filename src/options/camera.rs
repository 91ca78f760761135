use glam::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera pose and projection parameters.
pub struct CameraOptions {
    /// Initial world-space eye position.
    pub position: Vec3,
    /// Initial facing direction (normalized on use).
    pub front: Vec3,
    /// Initial zoom, i.e. the perspective field of view in degrees.
    pub zoom: f32,
    /// World units travelled per second of held movement key, before
    /// the interactive speed scale applies.
    pub movement_speed: f32,
    /// Degrees of yaw/pitch per pixel of mouse offset.
    pub mouse_sensitivity: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Half of the vertical extent covered by the orthographic
    /// projection, in world units.
    pub ortho_half_height: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 5.0, 12.0),
            front: Vec3::new(0.0, -0.5, -2.0),
            zoom: 80.0,
            movement_speed: 20.0,
            mouse_sensitivity: 0.1,
            znear: 0.1,
            zfar: 100.0,
            ortho_half_height: 5.0,
        }
    }
}
