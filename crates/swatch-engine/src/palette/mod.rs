//! Reference palette matching.
//!
//! [`PaletteMatcher`] maps arbitrary colors onto a fixed library of
//! numbered reference colors, picking the perceptually closest entry.
//! The built-in library is [`CANONICAL_LIBRARY`].

mod matcher;
mod reference;

pub use matcher::{ColorMatch, MatchResult, PaletteEntry, PaletteMatcher, ReferenceEntry};
pub use reference::{canonical_library, BLACK_ID, CANONICAL_LIBRARY, WHITE_ID};
