use axum::{extract::State, response::Json, Json as JsonExtractor};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::SamplingSettings;
use crate::services::{RasterSource, SampleJob, SamplingService};

/// Most points a single request may ask for.
pub const MAX_COUNT: usize = 64;

/// Largest accepted display dimension.
pub const MAX_DISPLAY_DIMENSION: f64 = 8192.0;

/// Request body for sampling an image
#[derive(Debug, Deserialize, ToSchema)]
pub struct SampleRequest {
    /// Base64 encoded image (PNG, JPEG, GIF, BMP or WebP); a `data:` URL
    /// prefix is accepted
    pub image: String,
    /// Number of points (default from configuration, max 64)
    pub count: Option<usize>,
    /// Width the image is displayed at (default: natural width)
    pub display_width: Option<f64>,
    /// Height the image is displayed at (default: natural height)
    pub display_height: Option<f64>,
    /// RNG seed for reproducible output
    pub seed: Option<u64>,
    /// Run several trials and keep the most varied result
    #[serde(default)]
    pub optimize: bool,
    /// Ids of the current points, reused by position; must be distinct
    #[serde(default)]
    pub previous_ids: Vec<u32>,
    /// Override of the ΔE76 threshold
    pub min_delta_e: Option<f64>,
    /// Override of the minimum point spacing
    pub min_pixel_distance: Option<f64>,
    /// Override of the draws per point
    pub attempts_per_point: Option<u32>,
    /// Override of the edge margin
    pub margin: Option<f64>,
}

/// A placed sample point
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SamplePointDto {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    /// `[r, g, b]`
    #[schema(value_type = Vec<u8>)]
    pub rgb: [u8; 3],
    /// Uppercase `#RRGGBB`
    pub hex: String,
}

/// Response from sampling
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SampleResponse {
    pub points: Vec<SamplePointDto>,
    /// Number of trials run
    pub trials: usize,
    /// Mean pairwise RGB distance of the returned colors
    pub score: f64,
    /// Seed used; send it back to reproduce this result
    pub seed: u64,
}

/// Shared state for the sample handler
#[derive(Clone)]
pub struct SampleState {
    pub service: Arc<SamplingService>,
    pub defaults: Arc<SamplingSettings>,
}

fn validate_dimension(name: &str, value: Option<f64>, margin: f64) -> Result<(), ApiError> {
    let Some(value) = value else {
        return Ok(());
    };
    if !(value > 0.0 && value <= MAX_DISPLAY_DIMENSION) {
        return Err(ApiError::BadRequest(format!(
            "{name} must be in (0, {MAX_DISPLAY_DIMENSION}]"
        )));
    }
    if value <= 2.0 * margin {
        return Err(ApiError::BadRequest(format!(
            "{name} must exceed twice the margin ({margin})"
        )));
    }
    Ok(())
}

/// Decode the uploaded image and size it for display on the blocking pool.
async fn load_source(
    image: String,
    display_width: Option<f64>,
    display_height: Option<f64>,
) -> Result<RasterSource, ApiError> {
    tokio::task::spawn_blocking(move || {
        let source = RasterSource::decode_base64(&image)?;
        let (natural_w, natural_h) = source.natural_size();
        Ok::<_, ApiError>(source.with_display_size(
            display_width.unwrap_or(natural_w as f64),
            display_height.unwrap_or(natural_h as f64),
        ))
    })
    .await
    .map_err(|e| ApiError::Internal(format!("image decode task failed: {e}")))?
}

impl SampleRequest {
    /// Resolve overrides against the configured defaults and validate.
    fn to_job(&self, defaults: &SamplingSettings) -> Result<SampleJob, ApiError> {
        let count = self.count.unwrap_or(defaults.default_count);
        if count > MAX_COUNT {
            return Err(ApiError::BadRequest(format!(
                "count must be at most {MAX_COUNT}"
            )));
        }

        let mut config = defaults.to_config();
        if let Some(v) = self.min_delta_e {
            config = config.min_delta_e(v);
        }
        if let Some(v) = self.min_pixel_distance {
            config = config.min_pixel_distance(v);
        }
        if let Some(v) = self.attempts_per_point {
            config = config.attempts_per_point(v);
        }
        if let Some(v) = self.margin {
            config = config.margin(v);
        }
        if !config.min_delta_e.is_finite() || config.min_delta_e < 0.0 {
            return Err(ApiError::BadRequest(
                "min_delta_e must be a non-negative number".to_string(),
            ));
        }
        if !config.min_pixel_distance.is_finite() || config.min_pixel_distance < 0.0 {
            return Err(ApiError::BadRequest(
                "min_pixel_distance must be a non-negative number".to_string(),
            ));
        }
        if !config.margin.is_finite() || config.margin < 0.0 {
            return Err(ApiError::BadRequest(
                "margin must be a non-negative number".to_string(),
            ));
        }

        validate_dimension("display_width", self.display_width, config.margin)?;
        validate_dimension("display_height", self.display_height, config.margin)?;

        let mut seen = HashSet::with_capacity(self.previous_ids.len());
        if let Some(dup) = self.previous_ids.iter().find(|id| !seen.insert(**id)) {
            return Err(ApiError::BadRequest(format!(
                "previous_ids contains {dup} more than once"
            )));
        }

        Ok(SampleJob {
            count,
            config,
            seed: self.seed,
            optimize: self.optimize,
            previous_ids: self.previous_ids.clone(),
        })
    }
}

/// Sample representative colors from an image
///
/// Places points that are spread across the image and differ in color from
/// their neighbours in placement order. With `optimize`, several trials run
/// and the most varied set wins.
#[utoipa::path(
    post,
    path = "/api/sample",
    request_body = SampleRequest,
    responses(
        (status = 200, description = "Points sampled", body = SampleResponse),
        (status = 400, description = "Invalid image or parameters"),
    ),
    tag = "Sampling"
)]
pub async fn handle_sample(
    State(state): State<SampleState>,
    JsonExtractor(request): JsonExtractor<SampleRequest>,
) -> Result<Json<SampleResponse>, ApiError> {
    let job = request.to_job(&state.defaults)?;

    let source = load_source(request.image, request.display_width, request.display_height).await?;
    let (natural_w, natural_h) = source.natural_size();
    let (width, height) = source.display_size();
    if width <= 2.0 * job.config.margin || height <= 2.0 * job.config.margin {
        return Err(ApiError::BadRequest(format!(
            "image {width}x{height} is too small for a {} px margin",
            job.config.margin
        )));
    }

    tracing::debug!(
        count = job.count,
        optimize = job.optimize,
        natural_w,
        natural_h,
        width,
        height,
        "Sampling image"
    );

    let outcome = state.service.run(Arc::new(source), job).await?;

    tracing::info!(
        points = outcome.points.len(),
        trials = outcome.trials,
        score = outcome.score,
        fallbacks = outcome.fallbacks,
        "Sampled image"
    );

    Ok(Json(SampleResponse {
        points: outcome
            .points
            .into_iter()
            .map(|p| SamplePointDto {
                id: p.id,
                x: p.x,
                y: p.y,
                rgb: p.rgb.to_bytes(),
                hex: p.hex,
            })
            .collect(),
        trials: outcome.trials,
        score: outcome.score,
        seed: outcome.seed,
    }))
}
