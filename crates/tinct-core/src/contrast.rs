//! Readable-foreground selection via YIQ luma.
//!
//! Given a swatch color, decide whether black or white text reads better
//! on top of it. The YIQ luma weights (299/587/114) approximate perceived
//! brightness from the RGB bytes; 128 is the midpoint.

use crate::color::parse_rgb;
use crate::error::ColorError;
use std::fmt;

/// The readable foreground for a given background: black or white.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContrastText {
    Black,
    White,
}

impl ContrastText {
    /// CSS color keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
        }
    }

    /// RGB bytes, for terminal output.
    #[must_use]
    pub const fn rgb8(self) -> (u8, u8, u8) {
        match self {
            Self::Black => (0, 0, 0),
            Self::White => (255, 255, 255),
        }
    }
}

impl fmt::Display for ContrastText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// YIQ luma of an RGB triple, in [0, 255].
#[must_use]
pub fn luma(r: u8, g: u8, b: u8) -> f64 {
    114.0f64.mul_add(
        f64::from(b),
        299.0f64.mul_add(f64::from(r), 587.0 * f64::from(g)),
    ) / 1000.0
}

/// Pick the readable text color for a background hex.
///
/// Luma at or above the 128 midpoint means a light background, so black
/// text; below means white text.
///
/// # Errors
///
/// [`ColorError::InvalidColorFormat`] if `hex` is not a valid hex color.
pub fn contrast_text(hex: &str) -> Result<ContrastText, ColorError> {
    let (r, g, b) = parse_rgb(hex)?;
    Ok(if luma(r, g, b) >= 128.0 {
        ContrastText::Black
    } else {
        ContrastText::White
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
