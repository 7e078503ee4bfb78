//! Sampling configuration.
//!
//! This module provides the [`SamplingConfig`] struct controlling how the
//! diverse sampler trades spatial spread against perceptual spread.

/// Hard upper bound on candidate draws per point.
pub const MAX_ATTEMPTS_PER_POINT: u32 = 100;

/// Configuration for one diverse sampling call.
///
/// # Defaults
///
/// - Minimum ΔE76 between a new point and its recent predecessors: 18
///   (roughly a clearly visible difference)
/// - Minimum pixel distance between points: 24
/// - Candidate draws per point: 100
/// - Margin kept free along every image edge: 16px
///
/// # Example
///
/// ```
/// use swatch_engine::SamplingConfig;
///
/// let config = SamplingConfig::new()
///     .min_delta_e(12.0)
///     .margin(8.0);
/// assert_eq!(config.min_pixel_distance, 24.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingConfig {
    /// Initial ΔE76 acceptance threshold. Relaxed by 10% every 20 draws.
    ///
    /// Default: `18.0`
    pub min_delta_e: f64,

    /// Minimum spacing in pixels, enforced approximately through the
    /// occupancy grid.
    ///
    /// Default: `24.0`
    pub min_pixel_distance: f64,

    /// Candidate draws per point before falling back. Values above
    /// [`MAX_ATTEMPTS_PER_POINT`] are capped.
    ///
    /// Default: `100`
    pub attempts_per_point: u32,

    /// Border in pixels excluded from deliberate placement.
    ///
    /// Default: `16.0`
    pub margin: f64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            min_delta_e: 18.0,
            min_pixel_distance: 24.0,
            attempts_per_point: MAX_ATTEMPTS_PER_POINT,
            margin: 16.0,
        }
    }
}

impl SamplingConfig {
    /// Create a configuration with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial ΔE76 acceptance threshold.
    #[inline]
    pub fn min_delta_e(mut self, threshold: f64) -> Self {
        self.min_delta_e = threshold;
        self
    }

    /// Set the minimum pixel spacing.
    #[inline]
    pub fn min_pixel_distance(mut self, distance: f64) -> Self {
        self.min_pixel_distance = distance;
        self
    }

    /// Set the number of candidate draws per point.
    #[inline]
    pub fn attempts_per_point(mut self, attempts: u32) -> Self {
        self.attempts_per_point = attempts;
        self
    }

    /// Set the edge margin.
    #[inline]
    pub fn margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Draws per point actually used, after applying the hard cap.
    #[inline]
    pub fn effective_attempts(&self) -> u32 {
        self.attempts_per_point.min(MAX_ATTEMPTS_PER_POINT)
    }
}
