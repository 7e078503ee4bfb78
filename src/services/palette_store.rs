//! Reference library loading and the shared matcher.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use swatch_engine::{hex_to_rgb, PaletteMatcher, ReferenceEntry};
use tokio::sync::RwLock;

use crate::error::LibraryError;

#[derive(Debug, Deserialize)]
struct LibraryRow {
    id: u32,
    hex: String,
}

/// Parse a reference library from YAML (or JSON) text.
///
/// The document is a list of `{id, hex}` rows. Every hex must parse; the
/// list must not be empty. Duplicate ids or colors are allowed.
pub fn parse_library(content: &str) -> Result<Vec<ReferenceEntry>, LibraryError> {
    let rows: Vec<LibraryRow> = serde_yaml::from_str(content)?;
    if rows.is_empty() {
        return Err(LibraryError::Empty);
    }
    rows.into_iter()
        .map(|row| {
            if hex_to_rgb(&row.hex).is_none() {
                return Err(LibraryError::InvalidColor {
                    id: row.id,
                    hex: row.hex,
                });
            }
            Ok(ReferenceEntry::new(row.id, row.hex))
        })
        .collect()
}

/// Read a reference library file.
pub fn load_library(path: &Path) -> Result<Vec<ReferenceEntry>, LibraryError> {
    let content = std::fs::read_to_string(path)?;
    parse_library(&content)
}

/// The active palette matcher, replaceable at runtime.
pub struct PaletteStore {
    source: Option<PathBuf>,
    matcher: RwLock<Arc<PaletteMatcher>>,
}

impl PaletteStore {
    /// A store over the built-in library.
    pub fn canonical() -> Self {
        Self {
            source: None,
            matcher: RwLock::new(Arc::new(PaletteMatcher::canonical())),
        }
    }

    /// A store backed by a library file, loaded immediately.
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, LibraryError> {
        let path = path.into();
        let entries = load_library(&path)?;
        tracing::info!(path = %path.display(), entries = entries.len(), "Loaded reference library");
        Ok(Self {
            source: Some(path),
            matcher: RwLock::new(Arc::new(PaletteMatcher::new(entries))),
        })
    }

    /// A store over an in-memory library.
    pub fn with_library(entries: Vec<ReferenceEntry>) -> Self {
        Self {
            source: None,
            matcher: RwLock::new(Arc::new(PaletteMatcher::new(entries))),
        }
    }

    /// File the library was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// The current matcher.
    pub async fn matcher(&self) -> Arc<PaletteMatcher> {
        self.matcher.read().await.clone()
    }

    /// Rebuild the Lab cache, re-reading the library file if there is one.
    ///
    /// On a read or parse error the current matcher stays active.
    /// Returns the number of usable entries.
    pub async fn reload(&self) -> Result<usize, LibraryError> {
        let matcher = match &self.source {
            Some(path) => {
                let entries = load_library(path)?;
                let matcher = Arc::new(PaletteMatcher::new(entries));
                *self.matcher.write().await = matcher.clone();
                matcher
            }
            None => {
                let matcher = self.matcher().await;
                matcher.invalidate();
                matcher
            }
        };
        let count = matcher.preprocess().len();
        tracing::info!(entries = count, "Reference library reloaded");
        Ok(count)
    }
}

impl Default for PaletteStore {
    fn default() -> Self {
        Self::canonical()
    }
}
