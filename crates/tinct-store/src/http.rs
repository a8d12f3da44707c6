//! HTTP client for the palette service.

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::json;
use tinct_core::Palette;

use crate::{PaletteId, PaletteStore, SavedPalette, StoreError, parse_palette_list};

/// Blocking client against the palette service's REST surface.
///
/// Endpoints: `GET /api/palettes`, `POST /api/palettes`,
/// `DELETE /api/palettes/{id}`.
#[derive(Debug)]
pub struct HttpStore {
    client: Client,
    base_url: String,
}

impl HttpStore {
    /// Build a store rooted at `base_url` (scheme and host, no trailing
    /// path). A short timeout keeps an unreachable service from hanging
    /// interactive callers.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the TLS backend cannot be
    /// initialized.
    pub fn new(base_url: &str) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(5))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl PaletteStore for HttpStore {
    fn fetch_all(&self) -> Result<Vec<SavedPalette>, StoreError> {
        let body = self
            .client
            .get(self.url("/api/palettes"))
            .send()?
            .error_for_status()?
            .text()?;
        let palettes = parse_palette_list(&body)?;
        tracing::debug!(count = palettes.len(), "fetched saved palettes");
        Ok(palettes)
    }

    fn save(&self, name: &str, colors: &Palette) -> Result<SavedPalette, StoreError> {
        let body = self
            .client
            .post(self.url("/api/palettes"))
            .json(&json!({ "name": name, "colors": colors }))
            .send()?
            .error_for_status()?
            .text()?;
        let saved: SavedPalette = serde_json::from_str(&body)?;
        tracing::debug!(id = %saved.id, name, "saved palette");
        Ok(saved)
    }

    fn delete(&self, id: &PaletteId) -> Result<(), StoreError> {
        self.client
            .delete(self.url(&format!("/api/palettes/{id}")))
            .send()?
            .error_for_status()?;
        tracing::debug!(%id, "deleted palette");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_loses_trailing_slashes() {
        let store = HttpStore::new("http://localhost:5000//").unwrap();
        assert_eq!(store.url("/api/palettes"), "http://localhost:5000/api/palettes");
    }
}
