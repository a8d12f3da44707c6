//! Hex ↔ HSL conversion — the numeric core of the engine.
//!
//! HSL here is the CSS flavor: hue in degrees [0, 360), saturation and
//! lightness as percentages, each rounded to one decimal place. The
//! rounding contract bounds the round trip: hex → HSL → hex reproduces the
//! original within ±1 per RGB channel, and HSL → hex → HSL reproduces each
//! component within ±1 (hue wrapping at 0/360). Coarser hue rounding would
//! break the first bound: near a sextant edge a saturated channel moves
//! ~4.25 units per degree of hue.

use std::fmt;

use crate::error::ColorError;

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color in HSL space.
///
/// - `h`: hue angle in degrees, [0, 360)
/// - `s`: saturation percentage, [0, 100]
/// - `l`: lightness percentage, [0, 100]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Create an HSL color. Values are taken as-is; [`Hsl::to_hex`] reduces
    /// out-of-range hues modularly.
    #[inline]
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Parse a hex color into HSL.
    ///
    /// Accepts `#rgb` and `#rrggbb` (the `#` is optional). The hue is
    /// computed via the standard 6-way piecewise formula; hue, saturation,
    /// and lightness are all rounded to one decimal place.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidColorFormat`] for any other length or any
    /// non-hex digit.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let (r, g, b) = parse_rgb(hex)?;
        let r = f64::from(r) / 255.0;
        let g = f64::from(g) / 255.0;
        let b = f64::from(b) / 255.0;

        let cmax = r.max(g).max(b);
        let cmin = r.min(g).min(b);
        let delta = cmax - cmin;

        let mut h = if delta == 0.0 {
            0.0
        } else if cmax == r {
            ((g - b) / delta) % 6.0
        } else if cmax == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        h = round1(h * 60.0);
        if h < 0.0 {
            h += 360.0;
        }

        let l = (cmax + cmin) / 2.0;
        let s = if delta == 0.0 {
            0.0
        } else {
            delta / (1.0 - (2.0f64.mul_add(l, -1.0)).abs())
        };

        Ok(Self {
            h,
            s: round1(s * 100.0),
            l: round1(l * 100.0),
        })
    }

    /// Render as a lowercase `#rrggbb` hex string.
    ///
    /// Uses the `(n + h/30) mod 12` formulation of the HSL → RGB
    /// conversion, so hues outside [0, 360) reduce modularly for free.
    #[must_use]
    pub fn to_hex(self) -> String {
        let l = self.l / 100.0;
        let a = self.s * l.min(1.0 - l) / 100.0;
        let channel = |n: f64| -> u8 {
            let k = (n + self.h / 30.0).rem_euclid(12.0);
            let c = a.mul_add(-((k - 3.0).min(9.0 - k).min(1.0).max(-1.0)), l);
            (255.0 * c).round().clamp(0.0, 255.0) as u8
        };
        format!("#{:02x}{:02x}{:02x}", channel(0.0), channel(8.0), channel(4.0))
    }
}

impl fmt::Display for Hsl {
    /// The space-separated CSS custom-property form: `h s% l%`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}% {}%", self.h, self.s, self.l)
    }
}

// ─── Hex parsing ─────────────────────────────────────────────────────────────

/// Parse a hex color into RGB bytes.
///
/// Accepts `#rgb` and `#rrggbb`, with or without the leading `#`. Short
/// form digits are doubled (`#f80` → `#ff8800`).
///
/// # Errors
///
/// [`ColorError::InvalidColorFormat`] for any other length or non-hex digit.
pub fn parse_rgb(hex: &str) -> Result<(u8, u8, u8), ColorError> {
    let invalid = || ColorError::InvalidColorFormat(hex.to_owned());
    let digits = hex.strip_prefix('#').unwrap_or(hex).as_bytes();

    match digits.len() {
        3 => {
            let r = hex_digit(digits[0]).ok_or_else(invalid)?;
            let g = hex_digit(digits[1]).ok_or_else(invalid)?;
            let b = hex_digit(digits[2]).ok_or_else(invalid)?;
            Ok((r << 4 | r, g << 4 | g, b << 4 | b))
        }
        6 => {
            let r = hex_byte(&digits[0..2]).ok_or_else(invalid)?;
            let g = hex_byte(&digits[2..4]).ok_or_else(invalid)?;
            let b = hex_byte(&digits[4..6]).ok_or_else(invalid)?;
            Ok((r, g, b))
        }
        _ => Err(invalid()),
    }
}

#[inline]
const fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = hex_digit(bytes[0])?;
    let lo = hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Round to one decimal place.
#[inline]
fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
