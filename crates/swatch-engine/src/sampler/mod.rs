//! Diverse point sampling.
//!
//! - [`SamplingConfig`]: thresholds and margins
//! - [`PixelSource`]: how the sampler reads colors
//! - [`DiverseSampler`]: grid- and ΔE-constrained placement
//! - [`random_points`]: unconstrained placement for growing a set

mod config;
mod diverse;
mod point;
mod random;
mod source;

pub use config::{SamplingConfig, MAX_ATTEMPTS_PER_POINT};
pub use diverse::{
    DiverseSampler, Placement, SampleReport, RECENT_WINDOW, RELAX_FACTOR, RELAX_INTERVAL,
};
pub use point::SamplePoint;
pub use random::{random_points, RANDOM_PLACEMENT_MARGIN};
pub use source::{from_fn, FnSource, PixelSource};
