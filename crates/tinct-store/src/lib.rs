//! Remote palette persistence.
//!
//! The backing service speaks JSON over HTTP and has changed shape over
//! time, so everything coming off the wire is treated as untrusted: list
//! responses may be a bare array or wrapped in `{"data": [...]}`, ids may
//! be strings or numbers, and stored colors may be the old positional
//! five-element array instead of a role map. All of those normalize into
//! one [`SavedPalette`] shape on the way in.
//!
//! [`PaletteStore`] is the seam: [`HttpStore`] talks to the real service,
//! [`MemoryStore`] stands in for it in tests and offline use.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tinct_core::Palette;

pub mod http;

pub use http::HttpStore;

/// Failures at the storage boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The service could not be reached or answered with a failure status.
    #[error("palette service unavailable: {0}")]
    Unavailable(#[from] reqwest::Error),

    /// The service answered, but not with anything we recognize.
    #[error("malformed palette response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

/// A saved palette's identifier. The service has returned both strings
/// and numbers here; both normalize to a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "IdRepr")]
pub struct PaletteId(pub String);

impl PaletteId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PaletteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PaletteId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Text(String),
    Number(i64),
}

impl From<IdRepr> for PaletteId {
    fn from(repr: IdRepr) -> Self {
        match repr {
            IdRepr::Text(s) => Self(s),
            IdRepr::Number(n) => Self(n.to_string()),
        }
    }
}

/// One palette as held by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPalette {
    pub id: PaletteId,
    /// Older records predate names.
    #[serde(default)]
    pub name: String,
    pub colors: Palette,
}

/// List payloads arrive either bare or under a `data` key.
#[derive(Deserialize)]
#[serde(untagged)]
enum ListResponse {
    Bare(Vec<SavedPalette>),
    Wrapped { data: Vec<SavedPalette> },
}

/// Parse a palette-list response body in any of its historical shapes.
///
/// # Errors
///
/// Returns [`StoreError::MalformedResponse`] when the body matches none
/// of them.
pub fn parse_palette_list(body: &str) -> Result<Vec<SavedPalette>, StoreError> {
    let parsed = serde_json::from_str::<ListResponse>(body)?;
    Ok(match parsed {
        ListResponse::Bare(items) | ListResponse::Wrapped { data: items } => items,
    })
}

/// Where palettes live between sessions.
pub trait PaletteStore {
    /// All saved palettes, most convenient order for display.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backing service is unreachable or
    /// answers with an unrecognized payload.
    fn fetch_all(&self) -> Result<Vec<SavedPalette>, StoreError>;

    /// Persist a palette under a display name, returning the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the save does not go through.
    fn save(&self, name: &str, colors: &Palette) -> Result<SavedPalette, StoreError>;

    /// Remove a saved palette. Unknown ids are not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backing service cannot be reached.
    fn delete(&self, id: &PaletteId) -> Result<(), StoreError>;
}

/// Fetch with degradation: an unreachable store yields an empty list
/// instead of failing the caller.
#[must_use]
pub fn fetch_or_empty<S: PaletteStore>(store: &S) -> Vec<SavedPalette> {
    match store.fetch_all() {
        Ok(palettes) => palettes,
        Err(err) => {
            tracing::warn!(error = %err, "palette store unavailable, starting empty");
            Vec::new()
        }
    }
}

/// In-process store for tests and offline runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryInner>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    next_id: i64,
    palettes: HashMap<PaletteId, SavedPalette>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PaletteStore for MemoryStore {
    fn fetch_all(&self) -> Result<Vec<SavedPalette>, StoreError> {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let mut all: Vec<SavedPalette> = inner.palettes.values().cloned().collect();
        // Save order, which for numeric ids is numeric order ("2" before
        // "10", unlike a plain string sort).
        all.sort_by(|a, b| match (a.id.0.parse::<i64>(), b.id.0.parse::<i64>()) {
            (Ok(x), Ok(y)) => x.cmp(&y),
            _ => a.id.0.cmp(&b.id.0),
        });
        Ok(all)
    }

    fn save(&self, name: &str, colors: &Palette) -> Result<SavedPalette, StoreError> {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.next_id += 1;
        let saved = SavedPalette {
            id: PaletteId(inner.next_id.to_string()),
            name: name.to_string(),
            colors: colors.clone(),
        };
        inner.palettes.insert(saved.id.clone(), saved.clone());
        Ok(saved)
    }

    fn delete(&self, id: &PaletteId) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.palettes.remove(id);
        Ok(())
    }
}
