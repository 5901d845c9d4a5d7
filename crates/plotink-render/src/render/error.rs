use std::fmt;

use crate::text::FontLoadError;

/// Error raised by render-context operations.
///
/// Recoverable conditions (an unresolvable font family) are logged and
/// degraded instead of surfaced; everything here indicates a caller bug or
/// bad input and is never masked.
#[derive(Debug, Clone)]
pub enum RenderError {
    /// A numeric argument is outside its domain (non-finite rotation or
    /// opacity).
    InvalidArgument(String),
    /// The context was used out of protocol: unbalanced `pop_clip`, or a
    /// draw call with no canvas attached.
    InvalidState(&'static str),
    /// Input bytes could not be understood (undecodable image data).
    InvalidInput(String),
    /// A font resource was present but unusable.
    ResourceUnavailable(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            RenderError::InvalidState(msg) => write!(f, "invalid state: {msg}"),
            RenderError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            RenderError::ResourceUnavailable(msg) => write!(f, "resource unavailable: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<FontLoadError> for RenderError {
    fn from(e: FontLoadError) -> Self {
        RenderError::ResourceUnavailable(e.0)
    }
}
