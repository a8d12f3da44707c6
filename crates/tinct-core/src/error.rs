//! Error taxonomy for the color engine.
//!
//! Conversion errors are synchronous and local: they surface at the parse
//! boundary and never escape into a dangling callback. Nothing here is
//! retried automatically.

use thiserror::Error;

/// A color value could not be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input is not a 3- or 6-digit hex color (with or without `#`).
    ///
    /// Malformed input fails here instead of silently decoding to black;
    /// callers that want a fallback choose one explicitly.
    #[error("invalid color format: {0:?} is not a hex color like #rrggbb")]
    InvalidColorFormat(String),
}
