//! Best-of-N sampling.
//!
//! A single diverse sampling run depends heavily on its random draws.
//! [`TrialOptimizer`] runs the sampler a few times and keeps the run whose
//! colors are farthest apart on average.
//!
//! The work is exposed as an iterator ([`TrialRun`]) so a host can run one
//! trial at a time and yield between trials. [`TrialOptimizer::run`] drives
//! it to completion for callers that do not care.

use rand::Rng;

use crate::color::{average_pairwise_distance, Rgb};
use crate::sampler::{DiverseSampler, PixelSource, SamplePoint, SamplingConfig};

/// Fewest trials ever run.
pub const MIN_TRIALS: usize = 2;

/// Most trials ever run.
pub const MAX_TRIALS: usize = 5;

/// Number of trials used for `count` points: `clamp(count / 2, 2, 5)`.
#[inline]
pub fn trial_count(count: usize) -> usize {
    (count / 2).clamp(MIN_TRIALS, MAX_TRIALS)
}

/// Score of a point set: mean pairwise RGB distance.
pub fn spread_score(points: &[SamplePoint]) -> f64 {
    let colors: Vec<Rgb> = points.iter().map(|p| p.rgb).collect();
    average_pairwise_distance(&colors)
}

/// Result of a single trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialOutcome {
    /// Zero-based trial index
    pub index: usize,
    /// Spread score of this trial's points
    pub score: f64,
    /// Whether this trial replaced the best set
    pub improved: bool,
    /// Points this trial placed through a fallback
    pub fallbacks: usize,
}

/// Runs several diverse sampling trials and keeps the most spread out one.
#[derive(Debug, Clone, Default)]
pub struct TrialOptimizer {
    sampler: DiverseSampler,
}

impl TrialOptimizer {
    /// Create an optimizer whose trials all use `config`.
    pub fn new(config: SamplingConfig) -> Self {
        Self {
            sampler: DiverseSampler::new(config),
        }
    }

    /// Start an incremental run.
    ///
    /// Each trial's points get their ids from `previous` by position, so
    /// re-running the optimizer on an existing set keeps the ids stable.
    /// Positions beyond `previous` get fresh ids continuing from the largest
    /// previous id, so ids stay unique as long as `previous` has no
    /// duplicates. Without a previous set, ids run `1..=count`.
    pub fn start<S, R>(
        &self,
        source: S,
        rng: R,
        count: usize,
        width: f64,
        height: f64,
        previous: &[SamplePoint],
    ) -> TrialRun<S, R>
    where
        S: PixelSource,
        R: Rng,
    {
        let ids = previous.iter().map(|p| p.id).collect();
        self.start_with_ids(source, rng, count, width, height, ids)
    }

    /// Like [`start`](Self::start), taking the ids to reuse directly.
    pub fn start_with_ids<S, R>(
        &self,
        source: S,
        rng: R,
        count: usize,
        width: f64,
        height: f64,
        previous_ids: Vec<u32>,
    ) -> TrialRun<S, R>
    where
        S: PixelSource,
        R: Rng,
    {
        let next_id = previous_ids.iter().max().map_or(1, |max| max.saturating_add(1));
        TrialRun {
            sampler: self.sampler.clone(),
            source,
            rng,
            count,
            width,
            height,
            previous_ids,
            next_id,
            trials: trial_count(count),
            completed: 0,
            best: None,
        }
    }

    /// Run every trial and return the best set, or `None` if no trial
    /// produced points (`count == 0`).
    pub fn run<S, R>(
        &self,
        source: S,
        rng: R,
        count: usize,
        width: f64,
        height: f64,
        previous: &[SamplePoint],
    ) -> Option<Vec<SamplePoint>>
    where
        S: PixelSource,
        R: Rng,
    {
        let mut run = self.start(source, rng, count, width, height, previous);
        run.by_ref().for_each(drop);
        run.into_best()
    }
}

/// An in-progress optimization. Each call to [`next`](Iterator::next) runs
/// one trial.
#[derive(Debug)]
pub struct TrialRun<S, R> {
    sampler: DiverseSampler,
    source: S,
    rng: R,
    count: usize,
    width: f64,
    height: f64,
    previous_ids: Vec<u32>,
    next_id: u32,
    trials: usize,
    completed: usize,
    best: Option<BestSet>,
}

#[derive(Debug)]
struct BestSet {
    score: f64,
    points: Vec<SamplePoint>,
    fallbacks: usize,
}

impl<S, R> TrialRun<S, R> {
    /// Total number of trials this run will perform.
    #[inline]
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Trials finished so far.
    #[inline]
    pub fn completed(&self) -> usize {
        self.completed
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.completed >= self.trials
    }

    /// Score of the best set so far.
    pub fn best_score(&self) -> Option<f64> {
        self.best.as_ref().map(|best| best.score)
    }

    /// Best set so far.
    pub fn best(&self) -> Option<&[SamplePoint]> {
        self.best.as_ref().map(|best| best.points.as_slice())
    }

    /// Fallback placements in the best set so far (0 before any trial).
    pub fn best_fallbacks(&self) -> usize {
        self.best.as_ref().map_or(0, |best| best.fallbacks)
    }

    /// Consume the run and return the best set found. Returns `None` if no
    /// trial has produced points yet.
    pub fn into_best(self) -> Option<Vec<SamplePoint>> {
        self.best.map(|best| best.points)
    }
}

impl<S, R> Iterator for TrialRun<S, R>
where
    S: PixelSource,
    R: Rng,
{
    type Item = TrialOutcome;

    fn next(&mut self) -> Option<TrialOutcome> {
        if self.is_finished() {
            return None;
        }
        let index = self.completed;
        self.completed += 1;

        let report = self.sampler.sample_with_report(
            &self.source,
            self.count,
            self.width,
            self.height,
            &mut self.rng,
        );
        let fallbacks = report.fallback_count();
        let mut points = report.points;
        let reused = self.previous_ids.len();
        for (idx, point) in points.iter_mut().enumerate() {
            point.id = match self.previous_ids.get(idx) {
                Some(&id) => id,
                None => self.next_id.saturating_add((idx - reused) as u32),
            };
        }

        let score = spread_score(&points);
        // Strictly greater: ties keep the earlier trial.
        let improved = !points.is_empty()
            && self.best.as_ref().map_or(true, |best| score > best.score);
        if improved {
            self.best = Some(BestSet {
                score,
                points,
                fallbacks,
            });
        }

        Some(TrialOutcome {
            index,
            score,
            improved,
            fallbacks,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.trials.saturating_sub(self.completed);
        (remaining, Some(remaining))
    }
}

impl<S, R> ExactSizeIterator for TrialRun<S, R>
where
    S: PixelSource,
    R: Rng,
{
}
