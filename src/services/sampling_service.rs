//! Runs the sampler and trial optimizer off the async runtime.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use swatch_engine::{spread_score, DiverseSampler, SamplePoint, SamplingConfig, TrialOptimizer};

use crate::error::ApiError;
use crate::services::RasterSource;

/// One sampling job.
#[derive(Debug, Clone)]
pub struct SampleJob {
    /// Number of points to place
    pub count: usize,
    /// Engine configuration for this job
    pub config: SamplingConfig,
    /// RNG seed; random when absent
    pub seed: Option<u64>,
    /// Run the best-of-N optimizer instead of a single pass
    pub optimize: bool,
    /// Ids to reuse by position when optimizing an existing set
    pub previous_ids: Vec<u32>,
}

/// Points produced by a job plus what it took to get them.
#[derive(Debug, Clone)]
pub struct SampleOutcome {
    pub points: Vec<SamplePoint>,
    /// Trials run (1 without optimization)
    pub trials: usize,
    /// Mean pairwise RGB distance of `points`
    pub score: f64,
    /// Seed used, so the result can be reproduced
    pub seed: u64,
    /// Points placed through a fallback, counted on the returned set
    pub fallbacks: usize,
}

/// Executes sampling jobs on the blocking thread pool.
#[derive(Debug, Clone, Default)]
pub struct SamplingService;

impl SamplingService {
    pub fn new() -> Self {
        Self
    }

    /// Run a job against a decoded image, in the image's display
    /// coordinates.
    ///
    /// Optimized jobs run one trial per blocking task and yield to the
    /// runtime between trials.
    pub async fn run(
        &self,
        source: Arc<RasterSource>,
        job: SampleJob,
    ) -> Result<SampleOutcome, ApiError> {
        let seed = job.seed.unwrap_or_else(rand::random);
        let rng = StdRng::seed_from_u64(seed);
        let (width, height) = source.display_size();

        if !job.optimize {
            let sampler = DiverseSampler::new(job.config);
            let count = job.count;
            let report = tokio::task::spawn_blocking(move || {
                let mut rng = rng;
                sampler.sample_with_report(&*source, count, width, height, &mut rng)
            })
            .await
            .map_err(|e| ApiError::Internal(format!("sampling task failed: {e}")))?;

            let fallbacks = report.fallback_count();
            if report.unconstrained_count() > 0 {
                tracing::debug!(
                    unconstrained = report.unconstrained_count(),
                    "Image too crowded, some points placed without constraints"
                );
            }
            return Ok(SampleOutcome {
                score: spread_score(&report.points),
                points: report.points,
                trials: 1,
                seed,
                fallbacks,
            });
        }

        let optimizer = TrialOptimizer::new(job.config);
        let mut run =
            optimizer.start_with_ids(source, rng, job.count, width, height, job.previous_ids);

        loop {
            let (returned, outcome) = tokio::task::spawn_blocking(move || {
                let outcome = run.next();
                (run, outcome)
            })
            .await
            .map_err(|e| ApiError::Internal(format!("optimizer task failed: {e}")))?;
            run = returned;

            match outcome {
                Some(outcome) => {
                    tracing::debug!(
                        trial = outcome.index,
                        score = outcome.score,
                        improved = outcome.improved,
                        fallbacks = outcome.fallbacks,
                        "Trial finished"
                    );
                    tokio::task::yield_now().await;
                }
                None => break,
            }
        }

        let trials = run.completed();
        let score = run.best_score().unwrap_or(0.0);
        let fallbacks = run.best_fallbacks();
        Ok(SampleOutcome {
            points: run.into_best().unwrap_or_default(),
            trials,
            score,
            seed,
            fallbacks,
        })
    }
}
