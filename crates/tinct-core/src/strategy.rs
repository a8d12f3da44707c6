//! Design-system strategies — from randomness to a five-role palette.
//!
//! Each strategy encodes the aesthetic of a design system as HSL sampling
//! rules: which hues relate to which, how saturated each role may be, and
//! where lightness sits per theme. All of them draw from the injected
//! [`RandomSource`] in a fixed order, so a pinned sequence pins the
//! palette.

use crate::color::Hsl;
use crate::palette::{Palette, Theme};
use crate::rng::RandomSource;

/// Canonical hue families used by the chakra strategy: red, orange,
/// yellow, green, teal, blue, purple, pink.
const CHAKRA_HUES: [f64; 8] = [0.0, 28.0, 45.0, 120.0, 170.0, 210.0, 270.0, 320.0];

/// Gray axis hues: cool, blueish, warm, neutral.
const GRAY_HUES: [f64; 4] = [210.0, 220.0, 0.0, 180.0];

/// Background saturation steps for chakra grays.
const GRAY_SATURATIONS: [f64; 3] = [0.0, 5.0, 10.0];

/// A palette-generation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Material-style tonal palettes: one key hue tints everything, with
    /// analogous secondary and triadic accent.
    Material,
    /// Chakra-style functional colors: sophisticated grays plus hues from
    /// a fixed accessible set.
    Chakra,
    /// Modern/Geist-style: pure black/white axis with one neon brand hue.
    Modern,
}

impl Strategy {
    /// All strategies, in selection order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Material, Self::Chakra, Self::Modern]
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Material => "material",
            Self::Chakra => "chakra",
            Self::Modern => "modern",
        }
    }

    /// Parse a strategy from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::all().iter().find(|s| s.name() == lower).copied()
    }

    /// Generate a palette under this strategy.
    #[must_use]
    pub fn generate<R: RandomSource>(self, rng: &mut R, theme: Theme) -> Palette {
        match self {
            Self::Material => material(rng, theme),
            Self::Chakra => chakra(rng, theme),
            Self::Modern => modern(rng, theme),
        }
    }
}

/// Shorthand: HSL components straight to a hex string.
fn hex(h: f64, s: f64, l: f64) -> String {
    Hsl::new(h, s, l).to_hex()
}

/// Material-style generation.
///
/// One random key hue drives every role. The background is a heavy tint of
/// the key hue (low saturation, extreme lightness); primary keeps the key
/// hue vivid — deep in light mode, pastel in dark. Secondary sits within
/// ±30° (analogous, muted), the accent +120° (triadic, vivid), and text is
/// near-grayscale tinted by the key hue.
fn material<R: RandomSource>(rng: &mut R, theme: Theme) -> Palette {
    let dark = theme.is_dark();
    let key_hue = rng.index(360) as f64;

    let prim_s = (rng.index(20) + 60) as f64; // 60–79
    let prim_l = if dark { 80.0 } else { 40.0 };

    let bg_s = (rng.index(15) + 5) as f64; // 5–19, tinted
    let bg_l = if dark { 10.0 } else { 98.0 };

    let sec_h = (key_hue + rng.index(60) as f64 - 30.0).rem_euclid(360.0);
    let sec_s = (rng.index(20) + 30) as f64; // muted
    let sec_l = if dark { 70.0 } else { 50.0 };

    let acc_h = (key_hue + 120.0) % 360.0;
    let acc_s = (rng.index(20) + 60) as f64;
    let acc_l = if dark { 85.0 } else { 40.0 };

    let txt_l = if dark { 95.0 } else { 10.0 };

    Palette {
        text: hex(key_hue, 5.0, txt_l),
        background: hex(key_hue, bg_s, bg_l),
        primary: hex(key_hue, prim_s, prim_l),
        secondary: hex(sec_h, sec_s, sec_l),
        accent: hex(acc_h, acc_s, acc_l),
    }
}

/// Chakra-style generation.
///
/// Text and background share a gray hue from a small refined set at low
/// saturation. Primary and secondary come from the canonical hue set at
/// fixed saturations and must not collide; the accent is primary's
/// complement at high saturation.
fn chakra<R: RandomSource>(rng: &mut R, theme: Theme) -> Palette {
    let dark = theme.is_dark();
    let gray_hue = *rng.pick(&GRAY_HUES);
    let bg_s = *rng.pick(&GRAY_SATURATIONS);
    let bg_l = if dark { 10.0 } else { 100.0 };
    let txt_l = if dark { 98.0 } else { 10.0 };

    let prim_h = *rng.pick(&CHAKRA_HUES);
    let prim_l = if dark { 60.0 } else { 50.0 };

    // Resample until distinct; the set has eight hues, so a uniform
    // source terminates almost surely.
    let mut sec_h = *rng.pick(&CHAKRA_HUES);
    while sec_h == prim_h {
        sec_h = *rng.pick(&CHAKRA_HUES);
    }
    let sec_l = if dark { 55.0 } else { 60.0 };

    let acc_h = (prim_h + 180.0) % 360.0;

    Palette {
        text: hex(gray_hue, 5.0, txt_l),
        background: hex(gray_hue, bg_s, bg_l),
        primary: hex(prim_h, 75.0, prim_l),
        secondary: hex(sec_h, 65.0, sec_l),
        accent: hex(acc_h, 85.0, 50.0),
    }
}

/// Modern-style generation.
///
/// Near-pure black/white background and text swapped by theme, plus one
/// random brand hue rotated into secondary (+30°) and accent (+180°) at
/// high saturation.
fn modern<R: RandomSource>(rng: &mut R, theme: Theme) -> Palette {
    let dark = theme.is_dark();
    let bg_l = if dark { 3.0 } else { 100.0 };
    let txt_l = if dark { 100.0 } else { 0.0 };

    let brand_h = rng.index(360) as f64;

    Palette {
        text: hex(0.0, 0.0, txt_l),
        background: hex(0.0, 0.0, bg_l),
        primary: hex(brand_h, 90.0, 50.0),
        secondary: hex((brand_h + 30.0) % 360.0, 80.0, 60.0),
        accent: hex((brand_h + 180.0) % 360.0, 100.0, 60.0),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
