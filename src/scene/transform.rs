//! Model-matrix composition from independent scale, rotation, and
//! translation parameters.

use glam::{Mat4, Vec3};

/// Per-draw transform parameters. Ephemeral: built for one draw-state
/// composition call and not retained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformParams {
    /// Per-axis scale factors.
    pub scale: Vec3,
    /// Euler rotation in degrees, one component per axis (X, Y, Z).
    pub rotation_degrees: Vec3,
    /// World-space translation.
    pub translation: Vec3,
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            scale: Vec3::ONE,
            rotation_degrees: Vec3::ZERO,
            translation: Vec3::ZERO,
        }
    }
}

/// Compose the model matrix as Translation · Rz · Ry · Rx · Scale.
///
/// Matrices compose right-to-left, so scale applies first in object
/// space, then the X rotation, then Y, then Z, then translation. The
/// order is fixed; every draw in the system relies on it.
#[must_use]
pub fn model_matrix(params: &TransformParams) -> Mat4 {
    let rotation_x = Mat4::from_rotation_x(params.rotation_degrees.x.to_radians());
    let rotation_y = Mat4::from_rotation_y(params.rotation_degrees.y.to_radians());
    let rotation_z = Mat4::from_rotation_z(params.rotation_degrees.z.to_radians());

    Mat4::from_translation(params.translation)
        * rotation_z
        * rotation_y
        * rotation_x
        * Mat4::from_scale(params.scale)
}
