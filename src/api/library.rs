use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::services::PaletteStore;

/// A reference library row
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LibraryEntryDto {
    pub id: u32,
    pub hex: String,
}

/// The active reference library
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LibraryResponse {
    pub entries: Vec<LibraryEntryDto>,
}

/// Response from a library reload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReloadResponse {
    /// Usable entries after the reload
    pub entries: usize,
}

/// List the reference library
#[utoipa::path(
    get,
    path = "/api/library",
    responses(
        (status = 200, description = "Library rows in catalogue order", body = LibraryResponse),
    ),
    tag = "Palette"
)]
pub async fn handle_library(State(palette): State<Arc<PaletteStore>>) -> Json<LibraryResponse> {
    let matcher = palette.matcher().await;
    Json(LibraryResponse {
        entries: matcher
            .library()
            .iter()
            .map(|e| LibraryEntryDto {
                id: e.id,
                hex: e.hex.clone(),
            })
            .collect(),
    })
}

/// Rebuild the library cache
///
/// Re-reads the library file when one is configured, otherwise recomputes
/// the built-in library. A failed reload keeps the previous library.
#[utoipa::path(
    post,
    path = "/api/library/reload",
    responses(
        (status = 200, description = "Library reloaded", body = ReloadResponse),
        (status = 500, description = "Library file could not be loaded"),
    ),
    tag = "Palette"
)]
pub async fn handle_reload(
    State(palette): State<Arc<PaletteStore>>,
) -> Result<Json<ReloadResponse>, ApiError> {
    let entries = palette.reload().await?;
    Ok(Json(ReloadResponse { entries }))
}
