//! The texture registry: decode image files, upload them through the
//! texture backend, and map tags to the slot each texture lives in for
//! the whole session.

use std::fmt;
use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::backend::texture::{
    DecodedImage, PixelFormat, TextureBackend, TextureHandle,
};

/// Maximum number of texture units the backend exposes.
pub const MAX_TEXTURE_SLOTS: usize = 16;

/// Texture load failures. Non-fatal: the caller may continue without the
/// texture, and loads are never retried.
#[derive(Debug)]
pub enum TextureError {
    /// The image file could not be read or decoded.
    Decode {
        /// The file that failed.
        path: PathBuf,
        /// The decoder's error.
        source: image::ImageError,
    },
    /// The image decoded, but with a channel count the shader pipeline
    /// does not handle (only 3 and 4 channels are supported).
    UnsupportedChannels {
        /// The offending channel count.
        channels: u8,
    },
    /// Every texture slot is already occupied.
    RegistryFull {
        /// The tag that could not be registered.
        tag: String,
    },
}

impl fmt::Display for TextureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode { path, source } => {
                write!(f, "could not load image {}: {source}", path.display())
            }
            Self::UnsupportedChannels { channels } => {
                write!(f, "unsupported image channel count: {channels}")
            }
            Self::RegistryFull { tag } => write!(
                f,
                "texture registry full ({MAX_TEXTURE_SLOTS} slots), cannot register {tag:?}"
            ),
        }
    }
}

impl std::error::Error for TextureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode { source, .. } => Some(source),
            _ => None,
        }
    }
}

struct TextureEntry {
    tag: String,
    handle: TextureHandle,
}

/// Ordered tag → texture mapping. Slot index equals registration order;
/// the registry is populated during the load phase and read-only during
/// the frame loop.
#[derive(Default)]
pub struct TextureRegistry {
    entries: Vec<TextureEntry>,
}

impl TextureRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `path`, upload it, and register it under `tag`.
    ///
    /// The image is always flipped vertically on load. Only 3- and
    /// 4-channel images are accepted; anything else fails with the
    /// registry unchanged. Failures are logged with the file path and
    /// returned; they are not retried.
    pub fn load<B: TextureBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        path: &Path,
        tag: &str,
    ) -> Result<u32, TextureError> {
        if self.entries.len() >= MAX_TEXTURE_SLOTS {
            log::warn!(
                "texture registry full; refusing to load {}",
                path.display()
            );
            return Err(TextureError::RegistryFull { tag: tag.into() });
        }

        let decoded = image::open(path).map_err(|source| {
            let err = TextureError::Decode {
                path: path.to_path_buf(),
                source,
            };
            log::warn!("{err}");
            err
        })?;

        let slot = self.register(backend, &decoded, tag).inspect_err(|e| {
            log::warn!("{} ({e})", path.display());
        })?;
        log::info!(
            "loaded image {} ({}x{}, {} channels) into slot {slot}",
            path.display(),
            decoded.width(),
            decoded.height(),
            decoded.color().channel_count(),
        );
        Ok(slot)
    }

    /// Upload an already-decoded image and register it under `tag`.
    ///
    /// This is the back half of [`load`](Self::load); it applies the same
    /// channel-count and capacity rules.
    pub fn register<B: TextureBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        decoded: &DynamicImage,
        tag: &str,
    ) -> Result<u32, TextureError> {
        if self.entries.len() >= MAX_TEXTURE_SLOTS {
            return Err(TextureError::RegistryFull { tag: tag.into() });
        }

        let channels = decoded.color().channel_count();
        let flipped = decoded.flipv();
        let image = match channels {
            3 => DecodedImage {
                width: flipped.width(),
                height: flipped.height(),
                format: PixelFormat::Rgb8,
                pixels: flipped.into_rgb8().into_raw(),
            },
            4 => DecodedImage {
                width: flipped.width(),
                height: flipped.height(),
                format: PixelFormat::Rgba8,
                pixels: flipped.into_rgba8().into_raw(),
            },
            _ => return Err(TextureError::UnsupportedChannels { channels }),
        };

        let handle = backend.create_texture(&image);
        let slot = self.entries.len() as u32;
        self.entries.push(TextureEntry {
            tag: tag.into(),
            handle,
        });
        Ok(slot)
    }

    /// Bind every registered texture to its recorded slot, in
    /// registration order. Call once after the load phase, before any
    /// draw.
    pub fn bind_all<B: TextureBackend + ?Sized>(&self, backend: &mut B) {
        for (slot, entry) in self.entries.iter().enumerate() {
            backend.bind(entry.handle, slot as u32);
        }
    }

    /// The slot `tag` was registered into. Linear scan, first match.
    #[must_use]
    pub fn slot_of(&self, tag: &str) -> Option<u32> {
        self.entries
            .iter()
            .position(|e| e.tag == tag)
            .map(|i| i as u32)
    }

    /// Number of registered textures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
