//! The uniform interface of the shader backend.
//!
//! The shader program is fixed and external; the core only pushes named
//! values at it. Names are centralized in [`names`] so the camera
//! controller, the render-state composer, and the lighting rig stay in
//! agreement with the shader source.

use glam::{Mat4, Vec2, Vec3, Vec4};

/// Uniform names the fixed shader program consumes.
pub mod names {
    /// View matrix (camera look-at transform).
    pub const VIEW: &str = "view";
    /// Projection matrix (perspective or orthographic).
    pub const PROJECTION: &str = "projection";
    /// Camera world-space position, for specular lighting.
    pub const VIEW_POSITION: &str = "viewPosition";
    /// Per-object model matrix.
    pub const MODEL: &str = "model";
    /// Flat object color, used when texturing is off.
    pub const OBJECT_COLOR: &str = "objectColor";
    /// Sampler bound to the active object texture slot.
    pub const OBJECT_TEXTURE: &str = "objectTexture";
    /// Texture-vs-flat-color selector.
    pub const USE_TEXTURE: &str = "bUseTexture";
    /// Master lighting enable.
    pub const USE_LIGHTING: &str = "bUseLighting";
    /// Texture coordinate scale.
    pub const UV_SCALE: &str = "UVscale";
    /// Material ambient color.
    pub const MATERIAL_AMBIENT_COLOR: &str = "material.ambientColor";
    /// Material ambient strength.
    pub const MATERIAL_AMBIENT_STRENGTH: &str = "material.ambientStrength";
    /// Material diffuse color.
    pub const MATERIAL_DIFFUSE_COLOR: &str = "material.diffuseColor";
    /// Material specular color.
    pub const MATERIAL_SPECULAR_COLOR: &str = "material.specularColor";
    /// Material shininess exponent.
    pub const MATERIAL_SHININESS: &str = "material.shininess";
    /// Directional light enable.
    pub const DIR_LIGHT_ON: &str = "bDirLightOn";
    /// Flashlight (camera-attached spot light) enable.
    pub const FLASHLIGHT_ON: &str = "bFlashlightOn";
    /// Scene-wide ambient boost.
    pub const AMBIENT_BOOST: &str = "ambientBoost";
}

/// Accepts named matrix/vector/scalar/sampler values and applies them to
/// the active shader program.
///
/// Implementations are expected to be cheap per call; the controller and
/// composer push a handful of uniforms per frame / per draw with no
/// batching of their own.
pub trait UniformBackend {
    /// Set a 4x4 matrix uniform.
    fn set_mat4(&mut self, name: &str, value: Mat4);
    /// Set a vec4 uniform.
    fn set_vec4(&mut self, name: &str, value: Vec4);
    /// Set a vec3 uniform.
    fn set_vec3(&mut self, name: &str, value: Vec3);
    /// Set a vec2 uniform.
    fn set_vec2(&mut self, name: &str, value: Vec2);
    /// Set a float uniform.
    fn set_float(&mut self, name: &str, value: f32);
    /// Set an integer uniform (also used for shader booleans).
    fn set_int(&mut self, name: &str, value: i32);
    /// Bind a sampler uniform to a texture slot index.
    fn set_sampler_slot(&mut self, name: &str, slot: u32);
}

#[cfg(test)]
pub(crate) mod recorder {
    //! A uniform backend that records every call, for assertions.

    use super::{Mat4, UniformBackend, Vec2, Vec3, Vec4};

    /// One recorded uniform write.
    #[derive(Debug, Clone, PartialEq)]
    pub enum Uniform {
        Mat4(String, Mat4),
        Vec4(String, Vec4),
        Vec3(String, Vec3),
        Vec2(String, Vec2),
        Float(String, f32),
        Int(String, i32),
        Sampler(String, u32),
    }

    #[derive(Debug, Default)]
    pub struct RecordingShader {
        pub calls: Vec<Uniform>,
    }

    impl RecordingShader {
        pub fn new() -> Self {
            Self::default()
        }

        /// Names of all recorded writes, in order.
        pub fn names(&self) -> Vec<&str> {
            self.calls
                .iter()
                .map(|u| match u {
                    Uniform::Mat4(n, _)
                    | Uniform::Vec4(n, _)
                    | Uniform::Vec3(n, _)
                    | Uniform::Vec2(n, _)
                    | Uniform::Float(n, _)
                    | Uniform::Int(n, _)
                    | Uniform::Sampler(n, _) => n.as_str(),
                })
                .collect()
        }

        /// Last write recorded under `name`, if any.
        pub fn last(&self, name: &str) -> Option<&Uniform> {
            self.calls.iter().rev().find(|u| match u {
                Uniform::Mat4(n, _)
                | Uniform::Vec4(n, _)
                | Uniform::Vec3(n, _)
                | Uniform::Vec2(n, _)
                | Uniform::Float(n, _)
                | Uniform::Int(n, _)
                | Uniform::Sampler(n, _) => n == name,
            })
        }
    }

    impl UniformBackend for RecordingShader {
        fn set_mat4(&mut self, name: &str, value: Mat4) {
            self.calls.push(Uniform::Mat4(name.into(), value));
        }

        fn set_vec4(&mut self, name: &str, value: Vec4) {
            self.calls.push(Uniform::Vec4(name.into(), value));
        }

        fn set_vec3(&mut self, name: &str, value: Vec3) {
            self.calls.push(Uniform::Vec3(name.into(), value));
        }

        fn set_vec2(&mut self, name: &str, value: Vec2) {
            self.calls.push(Uniform::Vec2(name.into(), value));
        }

        fn set_float(&mut self, name: &str, value: f32) {
            self.calls.push(Uniform::Float(name.into(), value));
        }

        fn set_int(&mut self, name: &str, value: i32) {
            self.calls.push(Uniform::Int(name.into(), value));
        }

        fn set_sampler_slot(&mut self, name: &str, slot: u32) {
            self.calls.push(Uniform::Sampler(name.into(), slot));
        }
    }
}
