//! Per-draw render-state composition: the tag registries for textures
//! and materials, model-matrix building, and the composer facade that
//! resolves all of it into shader uniforms before a draw primitive runs.

/// Render-state composer facade.
pub mod composer;
/// Material tag → physical-parameter catalog.
pub mod material;
/// Texture tag → slot registry.
pub mod texture;
/// Model-matrix composition.
pub mod transform;

pub use composer::{ApplyOutcome, ComposeReport, DrawState, RenderStateComposer};
pub use material::{Material, MaterialCatalog};
pub use texture::{TextureError, TextureRegistry, MAX_TEXTURE_SLOTS};
pub use transform::{model_matrix, TransformParams};
