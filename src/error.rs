//! Crate-level error types.

use std::fmt;

use crate::scene::TextureError;

/// Errors produced by the vantage crate.
#[derive(Debug)]
pub enum VantageError {
    /// The windowing backend could not create the display window.
    /// Fatal to the session: no window means no rendering is possible.
    Window(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Texture decode, channel-count, or registry-capacity failure.
    Texture(TextureError),
}

impl fmt::Display for VantageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Window(msg) => write!(f, "window error: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Texture(e) => write!(f, "texture error: {e}"),
        }
    }
}

impl std::error::Error for VantageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Texture(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VantageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<TextureError> for VantageError {
    fn from(e: TextureError) -> Self {
        Self::Texture(e)
    }
}
