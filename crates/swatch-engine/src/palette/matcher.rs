//! Nearest-neighbor matching against a reference palette.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::color::{hex_to_lab, Lab};

use super::reference::canonical_library;

/// One row of a reference library as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceEntry {
    pub id: u32,
    /// Hex as catalogued; case is preserved in match output.
    pub hex: String,
}

impl ReferenceEntry {
    pub fn new(id: u32, hex: impl Into<String>) -> Self {
        Self {
            id,
            hex: hex.into(),
        }
    }
}

/// A library row with its precomputed Lab value.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteEntry {
    pub id: u32,
    pub hex: String,
    pub lab: Lab,
}

/// One input color and the library color it matched.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMatch {
    /// Input hex exactly as given
    pub original_hex: String,
    /// Library hex exactly as catalogued
    pub matched_hex: String,
    pub matched_id: u32,
    /// ΔE76 between input and match
    pub distance: f64,
}

/// Result of matching a list of colors.
///
/// `matches` and `id_array` are parallel: `id_array[i] == matches[i].matched_id`.
/// Unparseable inputs are skipped in both.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchResult {
    pub matches: Vec<ColorMatch>,
    pub id_array: Vec<u32>,
}

impl MatchResult {
    #[inline]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Finds the closest reference color (by ΔE76) for arbitrary hex colors.
///
/// The Lab form of the library is computed once and cached. The cache is
/// built completely before it is published, so concurrent readers see
/// either no cache or a full one, never a partial build. It is safe to
/// share a matcher between threads.
///
/// # Example
///
/// ```
/// use swatch_engine::PaletteMatcher;
///
/// let matcher = PaletteMatcher::canonical();
/// let white = matcher.find_closest("#FEFEFE").unwrap();
/// assert_eq!(white.id, 501);
/// ```
#[derive(Debug)]
pub struct PaletteMatcher {
    library: Vec<ReferenceEntry>,
    cache: RwLock<Option<Arc<[PaletteEntry]>>>,
}

impl PaletteMatcher {
    /// Create a matcher over a custom library. Nothing is computed until
    /// first use or an explicit [`preprocess`](Self::preprocess).
    pub fn new(library: Vec<ReferenceEntry>) -> Self {
        Self {
            library,
            cache: RwLock::new(None),
        }
    }

    /// A matcher over the built-in 502-color library.
    pub fn canonical() -> Self {
        Self::new(canonical_library())
    }

    /// The library rows as supplied.
    #[inline]
    pub fn library(&self) -> &[ReferenceEntry] {
        &self.library
    }

    fn read_cache(&self) -> RwLockReadGuard<'_, Option<Arc<[PaletteEntry]>>> {
        self.cache.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_cache(&self) -> RwLockWriteGuard<'_, Option<Arc<[PaletteEntry]>>> {
        self.cache.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Compute the Lab form of every parseable library row and publish it.
    ///
    /// Rows with malformed hex are dropped. Calling this again rebuilds the
    /// cache from scratch.
    pub fn preprocess(&self) -> Arc<[PaletteEntry]> {
        let built: Arc<[PaletteEntry]> = self
            .library
            .iter()
            .filter_map(|entry| {
                Some(PaletteEntry {
                    id: entry.id,
                    hex: entry.hex.clone(),
                    lab: hex_to_lab(&entry.hex)?,
                })
            })
            .collect();
        *self.write_cache() = Some(Arc::clone(&built));
        built
    }

    /// Drop the cache; the next lookup rebuilds it.
    pub fn invalidate(&self) {
        *self.write_cache() = None;
    }

    /// Whether the Lab cache is currently built.
    pub fn is_preprocessed(&self) -> bool {
        self.read_cache().is_some()
    }

    /// The preprocessed library, building it on first use.
    pub fn entries(&self) -> Arc<[PaletteEntry]> {
        if let Some(cached) = self.read_cache().as_ref() {
            return Arc::clone(cached);
        }
        self.preprocess()
    }

    /// Closest library entry to `hex`, or `None` if `hex` is malformed or
    /// the library is empty. Ties go to the earlier row.
    pub fn find_closest(&self, hex: &str) -> Option<PaletteEntry> {
        let lab = hex_to_lab(hex)?;
        self.find_closest_lab(lab).map(|(entry, _)| entry)
    }

    /// Closest library entry to a Lab color with its ΔE76.
    pub fn find_closest_lab(&self, lab: Lab) -> Option<(PaletteEntry, f64)> {
        let entries = self.entries();
        nearest(&entries, lab).map(|(entry, distance)| (entry.clone(), distance))
    }

    /// Match every color in order. Inputs that fail to parse are skipped.
    pub fn match_all<S: AsRef<str>>(&self, colors: &[S]) -> MatchResult {
        let entries = self.entries();
        let mut result = MatchResult::default();

        for hex in colors {
            let hex = hex.as_ref();
            let Some(lab) = hex_to_lab(hex) else {
                continue;
            };
            let Some((entry, distance)) = nearest(&entries, lab) else {
                continue;
            };
            result.id_array.push(entry.id);
            result.matches.push(ColorMatch {
                original_hex: hex.to_string(),
                matched_hex: entry.hex.clone(),
                matched_id: entry.id,
                distance,
            });
        }
        result
    }
}

impl Default for PaletteMatcher {
    fn default() -> Self {
        Self::canonical()
    }
}

/// Linear scan; a later entry wins only if strictly closer.
fn nearest(entries: &[PaletteEntry], lab: Lab) -> Option<(&PaletteEntry, f64)> {
    let mut best: Option<(&PaletteEntry, f64)> = None;
    for entry in entries {
        let distance = entry.lab.delta_e76(lab);
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((entry, distance));
        }
    }
    best
}
