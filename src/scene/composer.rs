//! The per-draw render-state composer.
//!
//! One object = one [`compose`](RenderStateComposer::compose) call: the
//! composer resolves the texture tag to a slot, the material tag to its
//! parameters, pushes UV scale and model matrix, and then invokes the
//! caller's draw primitive. Tag misses never push stale state; they are
//! reported back so the caller decides whether a skipped texture or
//! material is fatal.

use glam::{Vec2, Vec4};

use super::material::MaterialCatalog;
use super::texture::TextureRegistry;
use super::transform::{model_matrix, TransformParams};
use crate::backend::uniforms::{names, UniformBackend};

/// Whether an apply call found its tag and pushed uniforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The tag resolved and the uniforms were pushed.
    Applied,
    /// The tag was not registered; nothing was pushed and the previous
    /// shader state for those uniforms persists.
    SkippedUnknownTag,
}

impl ApplyOutcome {
    /// Whether the uniforms were pushed.
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Outcomes of the lookups performed by one `compose` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposeReport {
    /// Outcome of the texture-tag lookup.
    pub texture: ApplyOutcome,
    /// Outcome of the material-tag lookup.
    pub material: ApplyOutcome,
}

impl ComposeReport {
    /// Whether both lookups resolved.
    #[must_use]
    pub fn fully_applied(self) -> bool {
        self.texture.is_applied() && self.material.is_applied()
    }
}

/// Everything one draw needs resolved, bundled so a scene traversal can
/// build it in place.
#[derive(Debug, Clone, Copy)]
pub struct DrawState<'a> {
    /// Texture tag to resolve through the registry.
    pub texture_tag: &'a str,
    /// Material tag to resolve through the catalog.
    pub material_tag: &'a str,
    /// Texture coordinate scale.
    pub uv_scale: Vec2,
    /// Model transform parameters.
    pub transform: TransformParams,
}

/// Owns the texture and material registries and resolves per-draw state
/// into shader uniforms.
#[derive(Default)]
pub struct RenderStateComposer {
    textures: TextureRegistry,
    materials: MaterialCatalog,
}

impl RenderStateComposer {
    /// A composer with empty registries.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from already-populated registries.
    #[must_use]
    pub fn with_registries(
        textures: TextureRegistry,
        materials: MaterialCatalog,
    ) -> Self {
        Self {
            textures,
            materials,
        }
    }

    /// The texture registry, for the load phase.
    pub fn textures_mut(&mut self) -> &mut TextureRegistry {
        &mut self.textures
    }

    /// Read access to the texture registry.
    #[must_use]
    pub fn textures(&self) -> &TextureRegistry {
        &self.textures
    }

    /// The material catalog, for the definition phase.
    pub fn materials_mut(&mut self) -> &mut MaterialCatalog {
        &mut self.materials
    }

    /// Read access to the material catalog.
    #[must_use]
    pub fn materials(&self) -> &MaterialCatalog {
        &self.materials
    }

    /// Switch the shader into textured mode, sampling from `tag`'s slot.
    ///
    /// An unknown tag pushes nothing and reports
    /// [`ApplyOutcome::SkippedUnknownTag`].
    pub fn apply_texture<S: UniformBackend + ?Sized>(
        &self,
        shader: &mut S,
        tag: &str,
    ) -> ApplyOutcome {
        let Some(slot) = self.textures.slot_of(tag) else {
            return ApplyOutcome::SkippedUnknownTag;
        };
        shader.set_int(names::USE_TEXTURE, 1);
        shader.set_sampler_slot(names::OBJECT_TEXTURE, slot);
        ApplyOutcome::Applied
    }

    /// Switch the shader into flat-color mode. Mutually exclusive with
    /// texture mode at the uniform level; the two are not composited.
    pub fn apply_color<S: UniformBackend + ?Sized>(
        &self,
        shader: &mut S,
        color: Vec4,
    ) {
        shader.set_int(names::USE_TEXTURE, 0);
        shader.set_vec4(names::OBJECT_COLOR, color);
    }

    /// Push the five material parameters registered under `tag`.
    pub fn apply_material<S: UniformBackend + ?Sized>(
        &self,
        shader: &mut S,
        tag: &str,
    ) -> ApplyOutcome {
        let Some(material) = self.materials.lookup(tag) else {
            return ApplyOutcome::SkippedUnknownTag;
        };
        shader.set_vec3(names::MATERIAL_AMBIENT_COLOR, material.ambient_color);
        shader.set_float(
            names::MATERIAL_AMBIENT_STRENGTH,
            material.ambient_strength,
        );
        shader.set_vec3(names::MATERIAL_DIFFUSE_COLOR, material.diffuse_color);
        shader.set_vec3(
            names::MATERIAL_SPECULAR_COLOR,
            material.specular_color,
        );
        shader.set_float(names::MATERIAL_SHININESS, material.shininess);
        ApplyOutcome::Applied
    }

    /// Push the texture coordinate scale.
    pub fn apply_uv_scale<S: UniformBackend + ?Sized>(
        &self,
        shader: &mut S,
        u: f32,
        v: f32,
    ) {
        shader.set_vec2(names::UV_SCALE, Vec2::new(u, v));
    }

    /// Compose and push the model matrix.
    pub fn apply_transform<S: UniformBackend + ?Sized>(
        &self,
        shader: &mut S,
        params: &TransformParams,
    ) {
        shader.set_mat4(names::MODEL, model_matrix(params));
    }

    /// Resolve one object's full draw state — texture, material, UV
    /// scale, transform — then invoke the draw primitive.
    ///
    /// This is the single per-object entry point the scene traversal
    /// uses. The returned report carries both lookup outcomes; the draw
    /// runs regardless, matching the load-phase-validated content model.
    pub fn compose<S, F>(
        &self,
        shader: &mut S,
        state: &DrawState<'_>,
        draw: F,
    ) -> ComposeReport
    where
        S: UniformBackend + ?Sized,
        F: FnOnce(),
    {
        let texture = self.apply_texture(shader, state.texture_tag);
        let material = self.apply_material(shader, state.material_tag);
        self.apply_uv_scale(shader, state.uv_scale.x, state.uv_scale.y);
        self.apply_transform(shader, &state.transform);
        draw();
        ComposeReport { texture, material }
    }
}
