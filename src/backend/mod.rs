//! Trait seams for the external collaborators the core consumes:
//! shader uniforms, GPU textures, the primitive mesh catalog, and the
//! display window. Everything above these traits runs without a GPU.

/// Primitive shape catalog consumed for drawing.
pub mod mesh;
/// GPU texture upload and slot binding.
pub mod texture;
/// Named uniform values pushed to the active shader program.
pub mod uniforms;
/// Window-level actions delegated to the windowing backend.
pub mod window;

pub use mesh::{DrawFlags, MeshBackend, Shape};
pub use texture::{DecodedImage, PixelFormat, TextureBackend, TextureHandle};
pub use uniforms::UniformBackend;
pub use window::WindowControl;
