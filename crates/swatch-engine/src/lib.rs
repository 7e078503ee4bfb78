//! swatch-engine: perceptual color sampling and reference palette matching
//!
//! This library picks a small set of representative colors from an image
//! and maps arbitrary colors onto a fixed library of numbered reference
//! colors.
//!
//! # Quick Start
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use swatch_engine::{from_fn, DiverseSampler, PaletteMatcher, Rgb, SamplingConfig};
//!
//! // Any closure (or type implementing PixelSource) can serve as the image
//! let image = from_fn(|x, y| Rgb::new(x as u8, y as u8, 200));
//!
//! let sampler = DiverseSampler::new(SamplingConfig::default());
//! let points = sampler.sample(&image, 5, 255.0, 255.0, &mut StdRng::seed_from_u64(1));
//!
//! let hexes: Vec<&str> = points.iter().map(|p| p.hex.as_str()).collect();
//! let matched = PaletteMatcher::canonical().match_all(&hexes);
//! assert_eq!(matched.id_array.len(), 5);
//! ```
//!
//! # Pieces
//!
//! - [`Rgb`] / [`Lab`]: color values; ΔE76 via [`Lab::delta_e76`]
//! - [`SpatialGridIndex`]: cell occupancy for cheap spacing checks
//! - [`DiverseSampler`]: places points that are spread out and differ in
//!   color from their recent predecessors
//! - [`TrialOptimizer`]: best-of-N sampling scored by RGB spread, run one
//!   trial at a time through [`TrialRun`]
//! - [`PaletteMatcher`]: nearest reference color with a lazily built,
//!   thread-safe Lab cache
//! - [`WorkingSet`]: an editable point list with stable ids and selection
//!
//! # Two Distance Metrics
//!
//! Placement compares candidates in Lab (ΔE76) because it asks "does this
//! look different?". Trial scoring averages plain RGB distance over all
//! pairs because it only ranks whole sets against each other. The two are
//! intentionally separate; do not unify them without re-tuning the default
//! thresholds.
//!
//! # Randomness
//!
//! Every randomized operation takes an [`rand::Rng`] from the caller. Pass a
//! seeded generator for reproducible output.

pub mod color;
pub mod grid;
pub mod optimizer;
pub mod palette;
pub mod sampler;
pub mod workset;


pub use color::{
    average_pairwise_distance, color_distance, delta_e76_hex, hex_to_lab, hex_to_rgb,
    lab_to_hex, Lab, ParseColorError, Rgb,
};
pub use grid::SpatialGridIndex;
pub use optimizer::{spread_score, trial_count, TrialOptimizer, TrialOutcome, TrialRun};
pub use palette::{
    ColorMatch, MatchResult, PaletteEntry, PaletteMatcher, ReferenceEntry, CANONICAL_LIBRARY,
};
pub use sampler::{
    from_fn, random_points, DiverseSampler, PixelSource, Placement, SamplePoint, SampleReport,
    SamplingConfig,
};
pub use workset::WorkingSet;
