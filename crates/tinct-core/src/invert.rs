//! Theme inversion — re-aim an existing palette at the other theme.
//!
//! Text and background trade places byte-for-byte. The three accent roles
//! keep their hue and saturation and only have lightness pushed into the
//! target theme's legible band: raised to at least 50% for dark themes,
//! capped at 60% for light ones. Colors already inside the band pass
//! through untouched, so inversion never drifts a compliant palette.

use crate::color::Hsl;
use crate::error::ColorError;
use crate::palette::{Palette, Theme};

/// Minimum accent lightness on a dark background.
const DARK_MIN_L: f64 = 50.0;

/// Maximum accent lightness on a light background.
const LIGHT_MAX_L: f64 = 60.0;

/// Slack absorbing hex round-trip noise: a color that clamped to the band
/// edge must not be re-clamped when its re-parsed lightness lands a few
/// tenths outside.
const BAND_EPS: f64 = 0.5;

/// Produce the palette as it should look under `target`, assuming it
/// currently targets the opposite theme.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if any accent role fails to
/// parse as a hex color; text and background are passed through unparsed.
pub fn invert_for_theme(palette: &Palette, target: Theme) -> Result<Palette, ColorError> {
    Ok(Palette {
        text: palette.background.clone(),
        background: palette.text.clone(),
        primary: clamp_for_contrast(&palette.primary, target)?,
        secondary: clamp_for_contrast(&palette.secondary, target)?,
        accent: clamp_for_contrast(&palette.accent, target)?,
    })
}

/// Pull one accent color's lightness into the target theme's band.
///
/// One-directional on purpose: a dark theme only ever brightens, a light
/// theme only ever darkens, and anything already legible is returned
/// verbatim.
fn clamp_for_contrast(hex: &str, target: Theme) -> Result<String, ColorError> {
    let hsl = Hsl::from_hex(hex)?;
    let clamped = match target {
        Theme::Dark if hsl.l < DARK_MIN_L - BAND_EPS => Hsl { l: DARK_MIN_L, ..hsl },
        Theme::Light if hsl.l > LIGHT_MAX_L + BAND_EPS => Hsl { l: LIGHT_MAX_L, ..hsl },
        _ => return Ok(hex.to_string()),
    };
    Ok(clamped.to_hex())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn palette(text: &str, bg: &str, prim: &str, sec: &str, acc: &str) -> Palette {
        Palette {
            text: text.into(),
            background: bg.into(),
            primary: prim.into(),
            secondary: sec.into(),
            accent: acc.into(),
        }
    }

    #[test]
    fn text_and_background_swap_verbatim() {
        let light = palette("#111111", "#fafafa", "#3b82f6", "#64748b", "#8b5cf6");
        let dark = invert_for_theme(&light, Theme::Dark).unwrap();
        assert_eq!(dark.text, "#fafafa");
        assert_eq!(dark.background, "#111111");
    }

    #[test]
    fn dark_target_raises_dim_accents() {
        // hsl(217, 91, 20) — far too dark for a dark background.
        let dim = Hsl::new(217.0, 91.0, 20.0).to_hex();
        let p = palette("#000000", "#ffffff", &dim, &dim, &dim);
        let dark = invert_for_theme(&p, Theme::Dark).unwrap();
        let l = Hsl::from_hex(&dark.primary).unwrap().l;
        assert!((l - 50.0).abs() <= 0.5, "l = {l}");
    }

    #[test]
    fn light_target_caps_bright_accents() {
        let glaring = Hsl::new(48.0, 96.0, 89.0).to_hex();
        let p = palette("#ffffff", "#000000", &glaring, &glaring, &glaring);
        let light = invert_for_theme(&p, Theme::Light).unwrap();
        let l = Hsl::from_hex(&light.accent).unwrap().l;
        assert!((l - 60.0).abs() <= 0.5, "l = {l}");
    }

    #[test]
    fn compliant_accents_pass_through_verbatim() {
        // l = 55 sits inside both bands.
        let mid = Hsl::new(210.0, 80.0, 55.0).to_hex();
        let p = palette("#000000", "#ffffff", &mid, &mid, &mid);
        assert_eq!(invert_for_theme(&p, Theme::Dark).unwrap().primary, mid);
        assert_eq!(invert_for_theme(&p, Theme::Light).unwrap().primary, mid);
    }

    #[test]
    fn double_inversion_is_identity_on_compliant_palettes() {
        // Accents inside [50, 60] survive dark → light → dark unchanged,
        // and the text/background swap is an involution.
        let p = palette(
            "#f8fafc",
            "#0f172a",
            &Hsl::new(217.0, 91.0, 55.0).to_hex(),
            &Hsl::new(160.0, 70.0, 52.0).to_hex(),
            &Hsl::new(280.0, 85.0, 58.0).to_hex(),
        );
        let there = invert_for_theme(&p, Theme::Light).unwrap();
        let back = invert_for_theme(&there, Theme::Dark).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn clamping_converges_after_one_step() {
        // Once an accent has been clamped to a band edge, re-applying the
        // same inversion target never moves it again.
        let hot = Hsl::new(30.0, 95.0, 92.0).to_hex();
        let p = palette("#ffffff", "#000000", &hot, &hot, &hot);
        let once = invert_for_theme(&p, Theme::Light).unwrap();
        let twice = invert_for_theme(&palette(
            &once.text, &once.background,
            &once.primary, &once.secondary, &once.accent,
        ), Theme::Light).unwrap();
        assert_eq!(once.primary, twice.primary);
        assert_eq!(once.secondary, twice.secondary);
        assert_eq!(once.accent, twice.accent);
    }

    #[test]
    fn lossy_round_trip_settles_inside_both_bands() {
        // l = 80 → light caps to 60 → dark leaves 60 alone. The original
        // 80 is gone for good; the result is stable from then on.
        let bright = Hsl::new(200.0, 90.0, 80.0).to_hex();
        let p = palette("#000000", "#ffffff", &bright, &bright, &bright);
        let light = invert_for_theme(&p, Theme::Light).unwrap();
        let dark = invert_for_theme(&light, Theme::Dark).unwrap();
        let l = Hsl::from_hex(&dark.primary).unwrap().l;
        assert!((l - 60.0).abs() <= 0.5, "l = {l}");
    }

    #[test]
    fn invalid_accent_is_an_error() {
        let p = palette("#000000", "#ffffff", "teal", "#64748b", "#8b5cf6");
        assert!(matches!(
            invert_for_theme(&p, Theme::Dark),
            Err(ColorError::InvalidColorFormat(_))
        ));
    }

    #[test]
    fn text_and_background_are_not_parsed() {
        // Only the accent roles go through the color pipeline.
        let p = palette("currentColor", "transparent", "#3b82f6", "#64748b", "#8b5cf6");
        let inverted = invert_for_theme(&p, Theme::Dark).unwrap();
        assert_eq!(inverted.text, "transparent");
        assert_eq!(inverted.background, "currentColor");
    }
}
