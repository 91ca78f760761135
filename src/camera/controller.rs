//! The per-frame input → camera → uniform pipeline.
//!
//! The controller owns every piece of transient viewport state — camera
//! pose, held keys, edge debounce, mouse tracking, projection mode,
//! speed scale, lighting rig — so there are no ambient globals. Raw
//! events flow in through [`handle_event`](ViewportController::handle_event);
//! once per frame [`frame`](ViewportController::frame) polls the held
//! keys, mutates the camera and lighting, and publishes the view and
//! projection matrices to the shader backend.

use glam::{Mat4, Vec3};

use super::core::Camera;
use crate::backend::uniforms::{names, UniformBackend};
use crate::backend::window::WindowControl;
use crate::input::{Bindings, EdgeDebounce, InputEvent, Key, KeyAction, KeyState, MouseTracker};
use crate::lighting::LightingRig;
use crate::options::Options;
use crate::util::FrameClock;

/// Speed-scale factor bounds: five octaves of fine/coarse adjustment.
const SPEED_SCALE_RANGE: (f32, f32) = (0.25, 8.0);
/// Movement speed multiplier while the boost modifier is held.
const BOOST_FACTOR: f32 = 2.0;

/// The camera's projection selection, toggled at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    /// Perspective projection; vertical field of view follows the
    /// camera zoom.
    #[default]
    Perspective,
    /// Orthographic projection with a fixed half-height of 5 world
    /// units.
    Orthographic,
}

impl ProjectionMode {
    fn toggled(self) -> Self {
        match self {
            Self::Perspective => Self::Orthographic,
            Self::Orthographic => Self::Perspective,
        }
    }
}

/// Owns the camera and all input state for one window, and publishes
/// camera-derived matrices to the shader backend once per frame.
pub struct ViewportController {
    camera: Camera,
    projection: ProjectionMode,
    keys: KeyState,
    debounce: EdgeDebounce,
    mouse: MouseTracker,
    bindings: Bindings,
    lighting: LightingRig,
    clock: FrameClock,
    /// Base movement multiplier; the speed-scale factor and frame delta
    /// multiply on top of it.
    base_speed: f32,
    speed_scale: f32,
    shift_held: bool,
    aspect: f32,
    znear: f32,
    zfar: f32,
    ortho_half_height: f32,
    title_prefix: String,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(&Options::default())
    }
}

impl ViewportController {
    /// Build a controller for a window described by `options`.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        let mut camera = Camera::new(
            options.camera.position,
            options.camera.front,
            options.camera.zoom,
            options.camera.movement_speed,
        );
        camera.mouse_sensitivity = options.camera.mouse_sensitivity;
        Self {
            camera,
            projection: ProjectionMode::default(),
            keys: KeyState::new(),
            debounce: EdgeDebounce::new(),
            mouse: MouseTracker::new(),
            bindings: options.keybindings.clone(),
            lighting: LightingRig::default(),
            clock: FrameClock::new(),
            base_speed: options.movement.base_speed,
            speed_scale: 1.0,
            shift_held: false,
            aspect: options.window.aspect_ratio(),
            znear: options.camera.znear,
            zfar: options.camera.zfar,
            ortho_half_height: options.camera.ortho_half_height,
            title_prefix: options.window.title.clone(),
        }
    }

    /// The camera pose.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable camera access, for scripted repositioning.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// The active projection mode.
    #[must_use]
    pub fn projection_mode(&self) -> ProjectionMode {
        self.projection
    }

    /// The current speed-scale factor, within [0.25, 8.0].
    #[must_use]
    pub fn speed_scale(&self) -> f32 {
        self.speed_scale
    }

    /// Base movement multiplier × speed-scale factor: the per-second
    /// movement delta before frame time and boost apply.
    #[must_use]
    pub fn effective_speed_multiplier(&self) -> f32 {
        self.base_speed * self.speed_scale
    }

    /// The interactive lighting state.
    #[must_use]
    pub fn lighting(&self) -> &LightingRig {
        &self.lighting
    }

    /// Mutable lighting access, for scene setup.
    pub fn lighting_mut(&mut self) -> &mut LightingRig {
        &mut self.lighting
    }

    /// Update the aspect ratio after a window resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    /// Re-arm mouse tracking. Call when cursor capture is (re)enabled so
    /// the next sample seeds instead of producing a spurious jump.
    pub fn reset_mouse(&mut self) {
        self.mouse.reset();
    }

    /// Feed one raw input event.
    ///
    /// Mouse movement and scroll are applied to the camera immediately
    /// (they arrive as backend callbacks, not polls); key transitions
    /// only update the held-key set consumed by [`frame`](Self::frame).
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => {
                let delta = self.mouse.offset(x, y);
                self.camera.look(delta.x, delta.y);
            }
            InputEvent::Scroll { delta } => {
                self.camera.zoom_by(delta);
            }
            InputEvent::Key { key, pressed } => {
                self.keys.set_pressed(key, pressed);
            }
            InputEvent::ModifiersChanged { shift } => {
                self.shift_held = shift;
            }
        }
    }

    /// Run one frame: read the clock once, apply polled input, and push
    /// the view/projection matrices, camera position, and lighting state
    /// to the shader.
    pub fn frame<W, S>(&mut self, window: &mut W, shader: &mut S)
    where
        W: WindowControl + ?Sized,
        S: UniformBackend + ?Sized,
    {
        let dt = self.clock.tick();
        self.apply_input(dt, window);
        self.publish(shader);
    }

    /// Apply the currently-held keys for a frame spanning `dt` seconds.
    ///
    /// Continuous actions move per `base_speed × speed_scale × dt`
    /// (doubled while the boost modifier is held); discrete actions fire
    /// exactly once per physical press via the edge debounce.
    pub fn apply_input<W>(&mut self, dt: f32, window: &mut W)
    where
        W: WindowControl + ?Sized,
    {
        if self.held(KeyAction::CloseWindow) {
            window.request_close();
        }

        let mut speed = self.base_speed * self.speed_scale * dt;
        if self.shift_held || self.held(KeyAction::SpeedBoost) {
            speed *= BOOST_FACTOR;
        }

        self.apply_movement(speed);
        self.apply_light_editing(speed);
        self.apply_discrete(window);
    }

    /// Publish view matrix, projection matrix, camera position, and
    /// lighting uniforms.
    pub fn publish<S>(&self, shader: &mut S)
    where
        S: UniformBackend + ?Sized,
    {
        shader.set_mat4(names::VIEW, self.camera.view_matrix());
        shader.set_mat4(names::PROJECTION, self.projection_matrix());
        shader.set_vec3(names::VIEW_POSITION, self.camera.position);
        self.lighting.upload(shader);
    }

    /// The projection matrix for the active mode.
    ///
    /// Perspective uses the camera zoom as vertical field of view;
    /// orthographic spans a fixed half-height of 5 world units, widened
    /// by the same aspect ratio. Both share near 0.1 / far 100.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        match self.projection {
            ProjectionMode::Perspective => Mat4::perspective_rh(
                self.camera.zoom().to_radians(),
                self.aspect,
                self.znear,
                self.zfar,
            ),
            ProjectionMode::Orthographic => {
                let half_h = self.ortho_half_height;
                let half_w = half_h * self.aspect;
                Mat4::orthographic_rh(
                    -half_w, half_w, -half_h, half_h, self.znear, self.zfar,
                )
            }
        }
    }

    /// The window title for the current selection: selected light
    /// (1-based) and speed-scale factor.
    #[must_use]
    pub fn title(&self) -> String {
        format!(
            "{}  |  Selected Light: {}  |  Move speed x{}",
            self.title_prefix,
            self.lighting.selected() + 1,
            self.speed_scale,
        )
    }

    fn apply_movement(&mut self, speed: f32) {
        if self.held(KeyAction::MoveForward) {
            self.camera.move_forward(speed);
        }
        if self.held(KeyAction::MoveBackward) {
            self.camera.move_backward(speed);
        }
        if self.held(KeyAction::MoveLeft) {
            self.camera.move_left(speed);
        }
        if self.held(KeyAction::MoveRight) {
            self.camera.move_right(speed);
        }
        if self.held(KeyAction::MoveUp) {
            self.camera.move_up(speed);
        }
        if self.held(KeyAction::MoveDown) {
            self.camera.move_down(speed);
        }
    }

    fn apply_light_editing(&mut self, speed: f32) {
        if self.held(KeyAction::LightLeft) {
            self.lighting.nudge_selected(Vec3::new(-speed, 0.0, 0.0));
        }
        if self.held(KeyAction::LightRight) {
            self.lighting.nudge_selected(Vec3::new(speed, 0.0, 0.0));
        }
        if self.held(KeyAction::LightForward) {
            self.lighting.nudge_selected(Vec3::new(0.0, 0.0, -speed));
        }
        if self.held(KeyAction::LightBackward) {
            self.lighting.nudge_selected(Vec3::new(0.0, 0.0, speed));
        }
        if self.held(KeyAction::LightUp) {
            self.lighting.nudge_selected(Vec3::new(0.0, speed, 0.0));
        }
        if self.held(KeyAction::LightDown) {
            self.lighting.nudge_selected(Vec3::new(0.0, -speed, 0.0));
        }
        if self.held(KeyAction::AmbientUp) {
            self.lighting.step_ambient(true);
        }
        if self.held(KeyAction::AmbientDown) {
            self.lighting.step_ambient(false);
        }
    }

    fn apply_discrete<W>(&mut self, window: &mut W)
    where
        W: WindowControl + ?Sized,
    {
        if self.pressed_once(KeyAction::ToggleProjection) {
            self.projection = self.projection.toggled();
            log::info!("{:?} projection enabled", self.projection);
        }

        let mut title_dirty = false;
        if self.pressed_once(KeyAction::SpeedScaleDown) {
            self.speed_scale =
                (self.speed_scale * 0.5).max(SPEED_SCALE_RANGE.0);
            title_dirty = true;
        }
        if self.pressed_once(KeyAction::SpeedScaleUp) {
            self.speed_scale =
                (self.speed_scale * 2.0).min(SPEED_SCALE_RANGE.1);
            title_dirty = true;
        }

        let selections = [
            (KeyAction::SelectLight1, 0),
            (KeyAction::SelectLight2, 1),
            (KeyAction::SelectLight3, 2),
            (KeyAction::SelectLight4, 3),
        ];
        for (action, index) in selections {
            if self.pressed_once(action) {
                self.lighting.select(index);
                title_dirty = true;
            }
        }

        if self.pressed_once(KeyAction::ToggleDirectionalLight) {
            self.lighting.toggle_directional();
        }
        if self.pressed_once(KeyAction::ToggleFlashlight) {
            self.lighting.toggle_flashlight();
        }
        if self.pressed_once(KeyAction::TogglePointLight) {
            self.lighting.toggle_selected();
        }
        if self.pressed_once(KeyAction::IntensityUp) {
            self.lighting.step_intensity(true);
        }
        if self.pressed_once(KeyAction::IntensityDown) {
            self.lighting.step_intensity(false);
        }

        if title_dirty {
            window.set_title(&self.title());
        }
    }

    /// Whether the key bound to `action` is currently held.
    fn held(&self, action: KeyAction) -> bool {
        self.bindings
            .key(action)
            .is_some_and(|key| self.keys.is_held(key))
    }

    /// Edge-debounced press for the key bound to `action`.
    fn pressed_once(&mut self, action: KeyAction) -> bool {
        let Some(key) = self.bindings.key(action) else {
            return false;
        };
        let held = self.keys.is_held(key);
        self.debounce.pressed_once(key, held)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::uniforms::recorder::{RecordingShader, Uniform};
    use crate::backend::window::fake::FakeWindow;

    fn press(controller: &mut ViewportController, key: Key) {
        controller.handle_event(InputEvent::Key { key, pressed: true });
    }

    fn release(controller: &mut ViewportController, key: Key) {
        controller.handle_event(InputEvent::Key {
            key,
            pressed: false,
        });
    }

    #[test]
    fn test_projection_toggles_once_per_press() {
        let mut controller = ViewportController::default();
        let mut window = FakeWindow::default();

        press(&mut controller, Key::KeyP);
        // Many polls while the key stays held: one logical toggle.
        for _ in 0..5 {
            controller.apply_input(0.016, &mut window);
        }
        assert_eq!(
            controller.projection_mode(),
            ProjectionMode::Orthographic
        );

        release(&mut controller, Key::KeyP);
        controller.apply_input(0.016, &mut window);
        press(&mut controller, Key::KeyP);
        controller.apply_input(0.016, &mut window);
        assert_eq!(controller.projection_mode(), ProjectionMode::Perspective);
    }

    #[test]
    fn test_speed_scale_saturates_high() {
        let mut controller = ViewportController::default();
        let mut window = FakeWindow::default();
        for _ in 0..10 {
            press(&mut controller, Key::KeyX);
            controller.apply_input(0.016, &mut window);
            release(&mut controller, Key::KeyX);
            controller.apply_input(0.016, &mut window);
        }
        assert_eq!(controller.speed_scale(), 8.0);
    }

    #[test]
    fn test_speed_scale_saturates_low() {
        let mut controller = ViewportController::default();
        let mut window = FakeWindow::default();
        for _ in 0..10 {
            press(&mut controller, Key::KeyZ);
            controller.apply_input(0.016, &mut window);
            release(&mut controller, Key::KeyZ);
            controller.apply_input(0.016, &mut window);
        }
        assert_eq!(controller.speed_scale(), 0.25);
    }

    #[test]
    fn test_speed_multiplier_follows_geometric_law() {
        let mut controller = ViewportController::default();
        let mut window = FakeWindow::default();
        // Walk the scale up and down; every value must be 3.0 * 2^k.
        for key in [Key::KeyX, Key::KeyX, Key::KeyZ, Key::KeyZ, Key::KeyZ] {
            press(&mut controller, key);
            controller.apply_input(0.016, &mut window);
            release(&mut controller, key);
            controller.apply_input(0.016, &mut window);

            let multiplier = controller.effective_speed_multiplier();
            let k = (multiplier / 3.0).log2();
            assert!(
                (k - k.round()).abs() < 1e-5,
                "multiplier {multiplier} is not 3.0 * 2^k"
            );
        }
    }

    #[test]
    fn test_speed_scale_step_updates_title() {
        let mut controller = ViewportController::default();
        let mut window = FakeWindow::default();
        press(&mut controller, Key::KeyX);
        controller.apply_input(0.016, &mut window);
        assert_eq!(window.titles.len(), 1);
        assert!(window.titles[0].contains("Move speed x2"));
        assert!(window.titles[0].contains("Selected Light: 1"));
    }

    #[test]
    fn test_light_selection_updates_title() {
        let mut controller = ViewportController::default();
        let mut window = FakeWindow::default();
        press(&mut controller, Key::Digit3);
        controller.apply_input(0.016, &mut window);
        assert_eq!(controller.lighting().selected(), 2);
        assert!(window.titles.last().is_some_and(|t| t
            .contains("Selected Light: 3")));
    }

    #[test]
    fn test_escape_requests_close() {
        let mut controller = ViewportController::default();
        let mut window = FakeWindow::default();
        press(&mut controller, Key::Escape);
        controller.apply_input(0.016, &mut window);
        assert!(window.close_requested);
    }

    #[test]
    fn test_first_mouse_sample_does_not_rotate() {
        let mut controller = ViewportController::default();
        let front_before = controller.camera().front();
        controller.handle_event(InputEvent::CursorMoved {
            x: 4821.0,
            y: -933.0,
        });
        assert_eq!(controller.camera().front(), front_before);
    }

    #[test]
    fn test_second_mouse_sample_rotates() {
        let mut controller = ViewportController::default();
        controller
            .handle_event(InputEvent::CursorMoved { x: 500.0, y: 400.0 });
        let front_before = controller.camera().front();
        controller
            .handle_event(InputEvent::CursorMoved { x: 520.0, y: 400.0 });
        assert_ne!(controller.camera().front(), front_before);
    }

    #[test]
    fn test_mouse_reset_reseeds_tracking() {
        let mut controller = ViewportController::default();
        controller
            .handle_event(InputEvent::CursorMoved { x: 500.0, y: 400.0 });
        controller.reset_mouse();
        let front_before = controller.camera().front();
        controller
            .handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        assert_eq!(controller.camera().front(), front_before);
    }

    #[test]
    fn test_held_movement_scales_with_dt_and_speed() {
        let mut controller = ViewportController::default();
        let mut window = FakeWindow::default();
        let start = controller.camera().position;
        let front = controller.camera().front();

        press(&mut controller, Key::KeyW);
        controller.apply_input(0.5, &mut window);

        // base 3.0 × scale 1.0 × dt 0.5 × movement_speed 20 = 30 units.
        let moved = controller.camera().position - start;
        assert!((moved.length() - 30.0).abs() < 1e-3);
        assert!((moved.normalize() - front).length() < 1e-5);
    }

    #[test]
    fn test_boost_doubles_movement() {
        let mut controller = ViewportController::default();
        let mut window = FakeWindow::default();
        let start = controller.camera().position;

        press(&mut controller, Key::KeyW);
        press(&mut controller, Key::ShiftLeft);
        controller.apply_input(0.5, &mut window);

        let moved = (controller.camera().position - start).length();
        assert!((moved - 60.0).abs() < 1e-3);
    }

    #[test]
    fn test_publish_pushes_frame_uniforms() {
        let controller = ViewportController::default();
        let mut shader = RecordingShader::new();
        controller.publish(&mut shader);

        assert_eq!(
            shader.last("view"),
            Some(&Uniform::Mat4(
                "view".into(),
                controller.camera().view_matrix()
            ))
        );
        assert_eq!(
            shader.last("projection"),
            Some(&Uniform::Mat4(
                "projection".into(),
                controller.projection_matrix()
            ))
        );
        assert_eq!(
            shader.last("viewPosition"),
            Some(&Uniform::Vec3(
                "viewPosition".into(),
                controller.camera().position
            ))
        );
        assert!(shader.last("bUseLighting").is_some());
    }

    #[test]
    fn test_perspective_matrix_uses_zoom_as_fovy() {
        let controller = ViewportController::default();
        let options = Options::default();
        let expected = Mat4::perspective_rh(
            controller.camera().zoom().to_radians(),
            options.window.aspect_ratio(),
            0.1,
            100.0,
        );
        assert_eq!(controller.projection_matrix(), expected);
    }

    #[test]
    fn test_orthographic_matrix_spans_fixed_half_height() {
        let mut controller = ViewportController::default();
        let mut window = FakeWindow::default();
        press(&mut controller, Key::KeyP);
        controller.apply_input(0.016, &mut window);

        let aspect = Options::default().window.aspect_ratio();
        let expected = Mat4::orthographic_rh(
            -5.0 * aspect,
            5.0 * aspect,
            -5.0,
            5.0,
            0.1,
            100.0,
        );
        assert_eq!(controller.projection_matrix(), expected);
    }

    #[test]
    fn test_scroll_zooms_camera() {
        let mut controller = ViewportController::default();
        controller.handle_event(InputEvent::Scroll { delta: -1000.0 });
        assert_eq!(controller.camera().zoom(), 1.0);
        controller.handle_event(InputEvent::Scroll { delta: 1000.0 });
        assert_eq!(controller.camera().zoom(), 90.0);
    }
}
