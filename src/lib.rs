// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Graphics allowances — casts and exact float comparisons are intentional
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::module_name_repetitions)]

//! Backend-agnostic driving logic for an interactive 3D viewport.
//!
//! Vantage owns the two responsibilities a shader-based renderer cannot:
//! translating raw keyboard/mouse/scroll input into camera pose updates
//! and projection switching, and resolving per-draw texture/material/
//! transform state into the uniform values the shader program consumes.
//! The windowing system, the shader program, the mesh catalog, and the
//! GPU texture store are all consumed through the traits in [`backend`],
//! so the whole crate runs (and tests) without a GPU.
//!
//! # Key entry points
//!
//! - [`camera::ViewportController`] - per-frame input → camera → uniforms
//! - [`scene::RenderStateComposer`] - per-draw render-state resolution
//! - [`scene::TextureRegistry`] / [`scene::MaterialCatalog`] - tag
//!   registries backing that resolution
//! - [`options::Options`] - runtime configuration with TOML presets

pub mod backend;
pub mod camera;
pub mod error;
pub mod input;
pub mod lighting;
pub mod options;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use camera::{Camera, ProjectionMode, ViewportController};
pub use error::VantageError;
pub use input::{InputEvent, Key, KeyAction};
pub use scene::{ApplyOutcome, RenderStateComposer};
