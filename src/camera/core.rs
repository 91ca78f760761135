//! Free-look camera defined by a world position and yaw/pitch-derived
//! basis vectors.

use glam::{Mat4, Vec3};

/// Pitch is clamped short of the poles so the look-at basis never
/// degenerates.
const PITCH_LIMIT_DEGREES: f32 = 89.0;
/// Zoom (vertical field of view) bounds in degrees.
const ZOOM_RANGE_DEGREES: (f32, f32) = (1.0, 90.0);

/// Free-look camera pose.
///
/// `front` and `up` are kept unit-length after every mutation; both are
/// rebuilt from yaw/pitch whenever the camera looks around.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space.
    pub position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    /// Yaw in degrees (rotation about world up).
    yaw: f32,
    /// Pitch in degrees, clamped to ±[`PITCH_LIMIT_DEGREES`].
    pitch: f32,
    /// World units moved per unit of movement delta.
    pub movement_speed: f32,
    /// Degrees of yaw/pitch per pixel of mouse offset.
    pub mouse_sensitivity: f32,
    zoom: f32,
}

impl Default for Camera {
    /// Default pose of the viewport: above and behind the scene origin,
    /// looking down at it.
    fn default() -> Self {
        Self::new(
            Vec3::new(0.0, 5.0, 12.0),
            Vec3::new(0.0, -0.5, -2.0),
            80.0,
            20.0,
        )
    }
}

impl Camera {
    /// Build a camera at `position`, looking along `front` (any length),
    /// with the given zoom (degrees of vertical field of view) and
    /// movement speed.
    #[must_use]
    pub fn new(position: Vec3, front: Vec3, zoom: f32, movement_speed: f32) -> Self {
        let front = front.normalize_or(-Vec3::Z);
        // Recover yaw/pitch from the facing direction so the first mouse
        // look continues from it instead of snapping.
        let yaw = front.z.atan2(front.x).to_degrees();
        let pitch = front
            .y
            .asin()
            .to_degrees()
            .clamp(-PITCH_LIMIT_DEGREES, PITCH_LIMIT_DEGREES);

        let mut camera = Self {
            position,
            front,
            up: Vec3::Y,
            right: Vec3::X,
            world_up: Vec3::Y,
            yaw,
            pitch,
            movement_speed,
            mouse_sensitivity: 0.1,
            zoom: zoom.clamp(ZOOM_RANGE_DEGREES.0, ZOOM_RANGE_DEGREES.1),
        };
        camera.update_basis();
        camera
    }

    /// Current unit facing direction.
    #[must_use]
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Current unit up vector.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Current unit right vector.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Vertical field of view in degrees, always within [1, 90].
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// The look-at transform for the current pose. Pure query.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Move along the front vector by `movement_speed × delta` world
    /// units.
    pub fn move_forward(&mut self, delta: f32) {
        self.position += self.front * (self.movement_speed * delta);
    }

    /// Move against the front vector.
    pub fn move_backward(&mut self, delta: f32) {
        self.position -= self.front * (self.movement_speed * delta);
    }

    /// Strafe left.
    pub fn move_left(&mut self, delta: f32) {
        self.position -= self.right * (self.movement_speed * delta);
    }

    /// Strafe right.
    pub fn move_right(&mut self, delta: f32) {
        self.position += self.right * (self.movement_speed * delta);
    }

    /// Move along the camera up vector.
    pub fn move_up(&mut self, delta: f32) {
        self.position += self.up * (self.movement_speed * delta);
    }

    /// Move against the camera up vector.
    pub fn move_down(&mut self, delta: f32) {
        self.position -= self.up * (self.movement_speed * delta);
    }

    /// Turn the camera by a mouse offset in pixels (x right, y up).
    ///
    /// Pitch saturates at ±89°; no error is signaled.
    pub fn look(&mut self, x_offset: f32, y_offset: f32) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch = (self.pitch + y_offset * self.mouse_sensitivity)
            .clamp(-PITCH_LIMIT_DEGREES, PITCH_LIMIT_DEGREES);
        self.update_basis();
    }

    /// Adjust zoom by `delta` degrees, saturating at [1, 90].
    pub fn zoom_by(&mut self, delta: f32) {
        self.zoom = (self.zoom + delta)
            .clamp(ZOOM_RANGE_DEGREES.0, ZOOM_RANGE_DEGREES.1);
    }

    /// Rebuild front/right/up from yaw and pitch, renormalizing each.
    fn update_basis(&mut self) {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();
        self.front = Vec3::new(
            yaw_cos * pitch_cos,
            pitch_sin,
            yaw_sin * pitch_cos,
        )
        .normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}
