//! The five-role palette, its themes, and its wire formats.
//!
//! A palette binds exactly five semantic roles — text, background,
//! primary, secondary, accent — to hex colors. The role set is fixed: it
//! never gains or loses members. On the wire the palette is a named
//! mapping, but the legacy ordered-array form is accepted on read and
//! normalized before any processing.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::color::parse_rgb;
use crate::error::ColorError;

// ─── Theme ───────────────────────────────────────────────────────────────────

/// Light or dark UI theme.
///
/// Always an explicit value threaded through call sites — never read from
/// ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    #[inline]
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a theme from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─── Role ────────────────────────────────────────────────────────────────────

/// The five semantic color roles, in legacy positional order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Text,
    Background,
    Primary,
    Secondary,
    Accent,
}

impl Role {
    /// All roles, in the positional order of the legacy array form.
    pub const ALL: [Self; 5] = [
        Self::Text,
        Self::Background,
        Self::Primary,
        Self::Secondary,
        Self::Accent,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Background => "background",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─── Palette ─────────────────────────────────────────────────────────────────

/// A complete five-role palette. Each role holds a hex color string.
///
/// Serializes as the named mapping; deserializes from either the mapping
/// or the legacy 5-element array `(text, background, primary, secondary,
/// accent)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PaletteRepr")]
pub struct Palette {
    pub text: String,
    pub background: String,
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl Palette {
    /// The color bound to a role.
    #[must_use]
    pub fn get(&self, role: Role) -> &str {
        match role {
            Role::Text => &self.text,
            Role::Background => &self.background,
            Role::Primary => &self.primary,
            Role::Secondary => &self.secondary,
            Role::Accent => &self.accent,
        }
    }

    /// Rebind a single role — the single-role edit operation.
    pub fn set(&mut self, role: Role, hex: impl Into<String>) {
        let slot = match role {
            Role::Text => &mut self.text,
            Role::Background => &mut self.background,
            Role::Primary => &mut self.primary,
            Role::Secondary => &mut self.secondary,
            Role::Accent => &mut self.accent,
        };
        *slot = hex.into();
    }

    /// Iterate roles with their colors, in legacy positional order.
    pub fn roles(&self) -> impl Iterator<Item = (Role, &str)> {
        Role::ALL.into_iter().map(move |role| (role, self.get(role)))
    }

    /// Check that every role holds a parseable hex color.
    ///
    /// # Errors
    ///
    /// The first [`ColorError::InvalidColorFormat`] encountered, if any.
    pub fn validate(&self) -> Result<(), ColorError> {
        for (_, hex) in self.roles() {
            parse_rgb(hex)?;
        }
        Ok(())
    }
}

impl Default for Palette {
    /// The stock black-on-white palette shown before any generation.
    fn default() -> Self {
        Self {
            text: "#000000".to_owned(),
            background: "#ffffff".to_owned(),
            primary: "#3b82f6".to_owned(),
            secondary: "#64748b".to_owned(),
            accent: "#8b5cf6".to_owned(),
        }
    }
}

/// Wire representation: the named mapping, or the legacy ordered array.
#[derive(Deserialize)]
#[serde(untagged)]
enum PaletteRepr {
    Map {
        text: String,
        background: String,
        primary: String,
        secondary: String,
        accent: String,
    },
    Legacy([String; 5]),
}

impl From<PaletteRepr> for Palette {
    fn from(repr: PaletteRepr) -> Self {
        match repr {
            PaletteRepr::Map {
                text,
                background,
                primary,
                secondary,
                accent,
            } => Self {
                text,
                background,
                primary,
                secondary,
                accent,
            },
            PaletteRepr::Legacy([text, background, primary, secondary, accent]) => Self {
                text,
                background,
                primary,
                secondary,
                accent,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample() -> Palette {
        Palette {
            text: "#111111".to_owned(),
            background: "#eeeeee".to_owned(),
            primary: "#3b82f6".to_owned(),
            secondary: "#64748b".to_owned(),
            accent: "#8b5cf6".to_owned(),
        }
    }

    // ── Theme ───────────────────────────────────────────────────────

    #[test]
    fn theme_toggles_both_ways() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn theme_from_name() {
        assert_eq!(Theme::from_name("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_name("Light"), Some(Theme::Light));
        assert_eq!(Theme::from_name("sepia"), None);
    }

    #[test]
    fn theme_serde_uses_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let back: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(back, Theme::Light);
    }

    // ── Roles ───────────────────────────────────────────────────────

    #[test]
    fn role_order_matches_legacy_positions() {
        let names: Vec<_> = Role::ALL.iter().map(|r| r.name()).collect();
        assert_eq!(
            names,
            ["text", "background", "primary", "secondary", "accent"]
        );
    }

    #[test]
    fn get_and_set_round_trip() {
        let mut palette = sample();
        palette.set(Role::Accent, "#123456");
        assert_eq!(palette.get(Role::Accent), "#123456");
        assert_eq!(palette.get(Role::Text), "#111111");
    }

    #[test]
    fn roles_iterates_all_five() {
        let palette = sample();
        let collected: Vec<_> = palette.roles().collect();
        assert_eq!(collected.len(), 5);
        assert_eq!(collected[0], (Role::Text, "#111111"));
        assert_eq!(collected[4], (Role::Accent, "#8b5cf6"));
    }

    // ── Validation ──────────────────────────────────────────────────

    #[test]
    fn validate_accepts_well_formed() {
        assert!(sample().validate().is_ok());
        assert!(Palette::default().validate().is_ok());
    }

    #[test]
    fn validate_catches_garbage_role() {
        let mut palette = sample();
        palette.set(Role::Primary, "blue");
        assert_eq!(
            palette.validate(),
            Err(ColorError::InvalidColorFormat("blue".to_owned()))
        );
    }

    // ── Serde ───────────────────────────────────────────────────────

    #[test]
    fn serializes_as_named_mapping() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.is_object());
        assert_eq!(json["text"], "#111111");
        assert_eq!(json["accent"], "#8b5cf6");
        assert_eq!(json.as_object().unwrap().len(), 5);
    }

    #[test]
    fn deserializes_mapping_form() {
        let palette: Palette = serde_json::from_str(
            r##"{"text":"#111111","background":"#eeeeee","primary":"#3b82f6",
                 "secondary":"#64748b","accent":"#8b5cf6"}"##,
        )
        .unwrap();
        assert_eq!(palette, sample());
    }

    #[test]
    fn legacy_array_normalizes_positionally() {
        let palette: Palette = serde_json::from_str(
            r##"["#111111","#eeeeee","#3b82f6","#64748b","#8b5cf6"]"##,
        )
        .unwrap();
        assert_eq!(palette, sample());
    }

    #[test]
    fn legacy_array_with_wrong_length_rejected() {
        let four = r##"["#111111","#eeeeee","#3b82f6","#64748b"]"##;
        assert!(serde_json::from_str::<Palette>(four).is_err());
        let six = r##"["#1","#2","#3","#4","#5","#6"]"##;
        assert!(serde_json::from_str::<Palette>(six).is_err());
    }

    #[test]
    fn mapping_missing_role_rejected() {
        let json = r##"{"text":"#111111","background":"#eeeeee"}"##;
        assert!(serde_json::from_str::<Palette>(json).is_err());
    }

    #[test]
    fn serde_round_trip() {
        let json = serde_json::to_string(&sample()).unwrap();
        let back: Palette = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}
