//! Interactive lighting state: four movable point lights, a directional
//! light, and a camera flashlight, all edited from the keyboard and
//! pushed to the shader as plain uniforms.

use glam::Vec3;

use crate::backend::uniforms::{names, UniformBackend};

/// Number of point lights the shader program declares.
pub const POINT_LIGHT_COUNT: usize = 4;

/// Point-light intensity bounds.
const INTENSITY_RANGE: (f32, f32) = (0.0, 3.0);
/// Intensity change per discrete step.
const INTENSITY_STEP: f32 = 0.05;
/// Ambient boost bounds.
const AMBIENT_RANGE: (f32, f32) = (0.0, 0.3);
/// Ambient boost change per polled frame.
const AMBIENT_STEP: f32 = 0.001;

/// One movable point light.
#[derive(Debug, Clone, Copy)]
pub struct PointLight {
    /// World-space position.
    pub position: Vec3,
    /// Brightness multiplier within [0, 3].
    pub intensity: f32,
    /// Whether the light contributes at all.
    pub enabled: bool,
}

/// The scene's interactive lighting state.
#[derive(Debug, Clone)]
pub struct LightingRig {
    points: [PointLight; POINT_LIGHT_COUNT],
    selected: usize,
    directional_enabled: bool,
    flashlight_enabled: bool,
    ambient_boost: f32,
}

impl Default for LightingRig {
    fn default() -> Self {
        let spots = [
            Vec3::new(0.0, 5.0, 5.0),
            Vec3::new(-2.0, 3.0, -2.0),
            Vec3::new(2.0, 3.0, 2.0),
            Vec3::new(0.0, 8.0, 0.0),
        ];
        let points = spots.map(|position| PointLight {
            position,
            intensity: 1.0,
            enabled: true,
        });
        Self {
            points,
            selected: 0,
            directional_enabled: true,
            flashlight_enabled: false,
            ambient_boost: 0.0,
        }
    }
}

impl LightingRig {
    /// Index of the point light current edits apply to, in
    /// [0, [`POINT_LIGHT_COUNT`]).
    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Select the point light to edit. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < POINT_LIGHT_COUNT {
            self.selected = index;
        }
    }

    /// Read access to a point light.
    #[must_use]
    pub fn point(&self, index: usize) -> Option<&PointLight> {
        self.points.get(index)
    }

    /// Whether the directional light is on.
    #[must_use]
    pub fn directional_enabled(&self) -> bool {
        self.directional_enabled
    }

    /// Whether the flashlight is on.
    #[must_use]
    pub fn flashlight_enabled(&self) -> bool {
        self.flashlight_enabled
    }

    /// Current ambient boost within [0, 0.3].
    #[must_use]
    pub fn ambient_boost(&self) -> f32 {
        self.ambient_boost
    }

    /// Toggle the selected point light on/off.
    pub fn toggle_selected(&mut self) {
        self.points[self.selected].enabled = !self.points[self.selected].enabled;
    }

    /// Toggle the directional light.
    pub fn toggle_directional(&mut self) {
        self.directional_enabled = !self.directional_enabled;
    }

    /// Toggle the flashlight.
    pub fn toggle_flashlight(&mut self) {
        self.flashlight_enabled = !self.flashlight_enabled;
    }

    /// Move the selected point light by a world-space delta.
    pub fn nudge_selected(&mut self, delta: Vec3) {
        self.points[self.selected].position += delta;
    }

    /// Step the selected light's intensity up or down by 0.05, saturating
    /// at [0, 3].
    pub fn step_intensity(&mut self, up: bool) {
        let step = if up { INTENSITY_STEP } else { -INTENSITY_STEP };
        let light = &mut self.points[self.selected];
        light.intensity = (light.intensity + step)
            .clamp(INTENSITY_RANGE.0, INTENSITY_RANGE.1);
    }

    /// Step the ambient boost, saturating at [0, 0.3].
    pub fn step_ambient(&mut self, up: bool) {
        let step = if up { AMBIENT_STEP } else { -AMBIENT_STEP };
        self.ambient_boost =
            (self.ambient_boost + step).clamp(AMBIENT_RANGE.0, AMBIENT_RANGE.1);
    }

    /// Push the full lighting state to the shader.
    pub fn upload<S: UniformBackend + ?Sized>(&self, shader: &mut S) {
        shader.set_int(names::USE_LIGHTING, 1);
        for (i, light) in self.points.iter().enumerate() {
            shader.set_vec3(
                &format!("pointLights[{i}].position"),
                light.position,
            );
            shader.set_float(
                &format!("pointLights[{i}].intensity"),
                light.intensity,
            );
            shader.set_int(
                &format!("pointLights[{i}].bActive"),
                i32::from(light.enabled),
            );
        }
        shader.set_int(names::DIR_LIGHT_ON, i32::from(self.directional_enabled));
        shader.set_int(names::FLASHLIGHT_ON, i32::from(self.flashlight_enabled));
        shader.set_float(names::AMBIENT_BOOST, self.ambient_boost);
    }
}
