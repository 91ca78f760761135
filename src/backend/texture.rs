//! The texture interface of the GPU backend.

/// Opaque backend identifier for an uploaded 2D texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u64);

/// Pixel layout of a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// 8-bit RGB, 3 bytes per pixel.
    Rgb8,
    /// 8-bit RGBA, 4 bytes per pixel; supports transparency.
    Rgba8,
}

impl PixelFormat {
    /// Bytes per pixel for this format.
    #[must_use]
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Rgb8 => 3,
            Self::Rgba8 => 4,
        }
    }
}

/// A decoded, vertically-flipped image ready for upload.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel layout of `pixels`.
    pub format: PixelFormat,
    /// Tightly packed pixel rows, bottom row first.
    pub pixels: Vec<u8>,
}

/// Uploads decoded images as 2D textures and binds them to texture units.
///
/// Contract for `create_texture`: repeat wrapping on both axes, linear
/// min/mag filtering, and mipmap generation. The handle stays valid for
/// the whole session; the registry never re-uploads.
pub trait TextureBackend {
    /// Upload a decoded image and return its handle.
    fn create_texture(&mut self, image: &DecodedImage) -> TextureHandle;
    /// Bind an uploaded texture to the given texture unit.
    fn bind(&mut self, handle: TextureHandle, slot: u32);
}

#[cfg(test)]
pub(crate) mod fake {
    //! An in-memory texture backend that records uploads and binds.

    use super::{DecodedImage, TextureBackend, TextureHandle};

    #[derive(Debug, Default)]
    pub struct FakeTextures {
        pub uploads: Vec<(u32, u32)>,
        pub binds: Vec<(TextureHandle, u32)>,
    }

    impl TextureBackend for FakeTextures {
        fn create_texture(&mut self, image: &DecodedImage) -> TextureHandle {
            self.uploads.push((image.width, image.height));
            TextureHandle(self.uploads.len() as u64)
        }

        fn bind(&mut self, handle: TextureHandle, slot: u32) {
            self.binds.push((handle, slot));
        }
    }
}
