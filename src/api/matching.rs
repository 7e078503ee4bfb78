use axum::{extract::State, response::Json, Json as JsonExtractor};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use swatch_engine::MatchResult;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::services::PaletteStore;

/// Most colors a single match request may contain.
pub const MAX_MATCH_COLORS: usize = 1024;

/// Request body for palette matching
#[derive(Debug, Deserialize, ToSchema)]
pub struct MatchRequest {
    /// Hex colors (`#RRGGBB`); unparseable entries are skipped
    pub colors: Vec<String>,
}

/// One matched color
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColorMatchDto {
    /// Input color as sent
    pub original_hex: String,
    /// Closest library color as catalogued
    pub matched_hex: String,
    pub matched_id: u32,
    /// ΔE76 between input and match
    pub distance: f64,
}

/// Response from palette matching
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub matches: Vec<ColorMatchDto>,
    /// Matched ids in input order
    pub id_array: Vec<u32>,
}

impl From<MatchResult> for MatchResponse {
    fn from(result: MatchResult) -> Self {
        Self {
            matches: result
                .matches
                .into_iter()
                .map(|m| ColorMatchDto {
                    original_hex: m.original_hex,
                    matched_hex: m.matched_hex,
                    matched_id: m.matched_id,
                    distance: m.distance,
                })
                .collect(),
            id_array: result.id_array,
        }
    }
}

/// Match colors against the reference library
///
/// Each color is mapped to the perceptually closest library entry (CIE76).
#[utoipa::path(
    post,
    path = "/api/match",
    request_body = MatchRequest,
    responses(
        (status = 200, description = "Colors matched", body = MatchResponse),
        (status = 400, description = "Too many colors"),
    ),
    tag = "Palette"
)]
pub async fn handle_match(
    State(palette): State<Arc<PaletteStore>>,
    JsonExtractor(request): JsonExtractor<MatchRequest>,
) -> Result<Json<MatchResponse>, ApiError> {
    if request.colors.len() > MAX_MATCH_COLORS {
        return Err(ApiError::BadRequest(format!(
            "at most {MAX_MATCH_COLORS} colors per request"
        )));
    }

    let matcher = palette.matcher().await;
    let result = matcher.match_all(&request.colors);

    tracing::info!(
        requested = request.colors.len(),
        matched = result.len(),
        "Matched colors"
    );

    Ok(Json(result.into()))
}
