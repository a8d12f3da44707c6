//! # tinct-core — semantic palette engine
//!
//! Generates, converts, and evaluates five-role color palettes (text,
//! background, primary, secondary, accent) for visual interfaces. One
//! random source plus a light/dark flag produces a complete, readable
//! palette under one of three design-system strategies.
//!
//! # Architecture
//!
//! ```text
//! RandomSource + Theme
//!     │
//!     ▼
//! generate.rs: pick a Strategy (uniform, or fixed)
//!     │
//!     ▼
//! strategy.rs: sample hues/saturations per design system
//!     │
//!     ▼
//! color.rs:    HSL → hex for every role
//!     │
//!     ▼
//! Palette ──► invert.rs:   flip theme, clamp accent lightness
//!         └─► contrast.rs: pick black/white text per swatch
//! ```
//!
//! # Determinism
//!
//! Nothing reads ambient state. Randomness enters only through the
//! injected [`RandomSource`]; the theme is an explicit [`Theme`] value at
//! every call site. A fixed source sequence reproduces a palette exactly.

// Single-char channel/component names are the color-math convention.
#![allow(clippy::many_single_char_names)]
// Exact float comparisons drive the 6-way hue branch and the fixed hue sets.
#![allow(clippy::float_cmp)]
// Byte and percentage conversions truncate/saturate deliberately.
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
// Degree counts and slice lengths fit f64 exactly.
#![allow(clippy::cast_precision_loss)]

pub mod color;
pub mod contrast;
pub mod error;
pub mod generate;
pub mod invert;
pub mod palette;
pub mod rng;
pub mod strategy;

pub use color::{Hsl, parse_rgb};
pub use contrast::{ContrastText, contrast_text};
pub use error::ColorError;
pub use generate::{generate, generate_with};
pub use invert::invert_for_theme;
pub use palette::{Palette, Role, Theme};
pub use rng::{FixedSequence, RandomSource, SeededSource, ThreadSource};
pub use strategy::Strategy;
