//! Spatially and perceptually diverse point placement.

use rand::Rng;

use super::config::SamplingConfig;
use super::point::SamplePoint;
use super::source::PixelSource;
use crate::color::{Lab, Rgb};
use crate::grid::SpatialGridIndex;

/// How many of the most recently placed points a candidate is compared to.
pub const RECENT_WINDOW: usize = 3;

/// The ΔE threshold is relaxed every this many draws.
pub const RELAX_INTERVAL: u32 = 20;

/// Multiplier applied to the threshold at each relaxation step.
pub const RELAX_FACTOR: f64 = 0.9;

/// How a point ended up where it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Passed both the grid test and the ΔE test. `threshold` is the
    /// (possibly relaxed) value it was accepted under.
    Accepted { threshold: f64 },
    /// No candidate passed the ΔE test; the grid-valid candidate with the
    /// largest minimum ΔE was used.
    BestCandidate { score: f64 },
    /// No candidate passed the grid test; an unconstrained random point was
    /// used. It does not occupy a grid cell.
    Unconstrained,
}

impl Placement {
    /// `true` for placements that did not pass every test.
    #[inline]
    pub fn is_fallback(&self) -> bool {
        !matches!(self, Placement::Accepted { .. })
    }
}

/// Points produced by one sampling call along with how each was placed.
#[derive(Debug, Clone, Default)]
pub struct SampleReport {
    /// Points in placement order, ids `1..=count`.
    pub points: Vec<SamplePoint>,
    /// One entry per point, same order.
    pub placements: Vec<Placement>,
}

impl SampleReport {
    /// Number of points that needed a fallback.
    pub fn fallback_count(&self) -> usize {
        self.placements.iter().filter(|p| p.is_fallback()).count()
    }

    /// Number of points placed without any constraint.
    pub fn unconstrained_count(&self) -> usize {
        self.placements
            .iter()
            .filter(|p| matches!(p, Placement::Unconstrained))
            .count()
    }
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    x: f64,
    y: f64,
    rgb: Rgb,
    lab: Lab,
}

/// Places points so that they are spread out on the image and differ in
/// color from their recent predecessors.
///
/// For each point, up to [`SamplingConfig::effective_attempts`] candidates
/// are drawn uniformly inside the margin rectangle:
///
/// 1. Candidates whose grid cell is blocked are discarded.
/// 2. A candidate whose minimum ΔE76 against the last [`RECENT_WINDOW`]
///    placed points reaches the current threshold is accepted.
/// 3. Otherwise it is remembered if it beats the best score so far, and
///    every [`RELAX_INTERVAL`] draws the threshold shrinks by
///    [`RELAX_FACTOR`].
///
/// When the draws run out the best remembered candidate is used, and if
/// there is none (every draw hit a blocked cell) a random point is placed
/// without any check. The call therefore always returns exactly `count`
/// points.
///
/// # Example
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use swatch_engine::{from_fn, DiverseSampler, Rgb, SamplingConfig};
///
/// let source = from_fn(|x, y| Rgb::new((x / 2.0) as u8, (y / 2.0) as u8, 128));
/// let sampler = DiverseSampler::new(SamplingConfig::default());
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let points = sampler.sample(&source, 6, 400.0, 300.0, &mut rng);
/// assert_eq!(points.len(), 6);
/// assert_eq!(points[0].id, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DiverseSampler {
    config: SamplingConfig,
}

impl DiverseSampler {
    /// Create a sampler with the given configuration.
    pub fn new(config: SamplingConfig) -> Self {
        Self { config }
    }

    /// The sampler's configuration.
    #[inline]
    pub fn config(&self) -> &SamplingConfig {
        &self.config
    }

    /// Place `count` points on a `width × height` image.
    ///
    /// Width and height below 1 are treated as 1. `count == 0` returns an
    /// empty list without touching the source.
    pub fn sample<S, R>(
        &self,
        source: &S,
        count: usize,
        width: f64,
        height: f64,
        rng: &mut R,
    ) -> Vec<SamplePoint>
    where
        S: PixelSource + ?Sized,
        R: Rng + ?Sized,
    {
        self.sample_with_report(source, count, width, height, rng)
            .points
    }

    /// Like [`sample`](Self::sample), also reporting how each point was
    /// placed.
    pub fn sample_with_report<S, R>(
        &self,
        source: &S,
        count: usize,
        width: f64,
        height: f64,
        rng: &mut R,
    ) -> SampleReport
    where
        S: PixelSource + ?Sized,
        R: Rng + ?Sized,
    {
        let mut report = SampleReport {
            points: Vec::with_capacity(count),
            placements: Vec::with_capacity(count),
        };
        if count == 0 {
            return report;
        }

        let width = width.max(1.0);
        let height = height.max(1.0);
        let margin = self.config.margin;
        let span_x = width - 2.0 * margin;
        let span_y = height - 2.0 * margin;
        let attempts = self.config.effective_attempts();

        let mut grid = SpatialGridIndex::new(width, height, self.config.min_pixel_distance);
        let mut labs: Vec<Lab> = Vec::with_capacity(count);

        for index in 0..count {
            let mut threshold = self.config.min_delta_e;
            let mut best: Option<Candidate> = None;
            let mut best_score = f64::NEG_INFINITY;
            let mut accepted: Option<(Candidate, f64)> = None;

            for attempt in 0..attempts {
                let x = rng.gen::<f64>() * span_x + margin;
                let y = rng.gen::<f64>() * span_y + margin;
                if !grid.test(x, y) {
                    continue;
                }

                let rgb = source.color_at(x, y);
                let lab = Lab::from(rgb);
                let candidate = Candidate { x, y, rgb, lab };

                let score = min_recent_delta_e(&labs, lab);
                if score >= threshold {
                    accepted = Some((candidate, threshold));
                    break;
                }
                if score > best_score {
                    best_score = score;
                    best = Some(candidate);
                }
                if attempt > 0 && attempt % RELAX_INTERVAL == 0 {
                    threshold *= RELAX_FACTOR;
                }
            }

            let id = index as u32 + 1;
            let (candidate, placement) = match (accepted, best) {
                (Some((candidate, threshold)), _) => {
                    grid.commit(candidate.x, candidate.y);
                    (candidate, Placement::Accepted { threshold })
                }
                (None, Some(candidate)) => {
                    grid.commit(candidate.x, candidate.y);
                    (candidate, Placement::BestCandidate { score: best_score })
                }
                (None, None) => {
                    let x = rng.gen::<f64>() * span_x + margin;
                    let y = rng.gen::<f64>() * span_y + margin;
                    let rgb = source.color_at(x, y);
                    let candidate = Candidate {
                        x,
                        y,
                        rgb,
                        lab: Lab::from(rgb),
                    };
                    (candidate, Placement::Unconstrained)
                }
            };

            labs.push(candidate.lab);
            report
                .points
                .push(SamplePoint::new(id, candidate.x, candidate.y, candidate.rgb));
            report.placements.push(placement);
        }

        report
    }
}

/// Smallest ΔE76 between `lab` and the last [`RECENT_WINDOW`] entries, or
/// infinity when there are none.
fn min_recent_delta_e(labs: &[Lab], lab: Lab) -> f64 {
    let start = labs.len().saturating_sub(RECENT_WINDOW);
    labs[start..]
        .iter()
        .map(|prev| prev.delta_e76(lab))
        .fold(f64::INFINITY, f64::min)
}
