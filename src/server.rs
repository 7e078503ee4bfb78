//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::FromRef,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api::{self, SampleState};
use crate::models::{AppConfig, SamplingSettings};
use crate::services::{PaletteStore, SamplingService};

/// Largest accepted request body. Images arrive base64 encoded.
pub const MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub sampling: Arc<SamplingService>,
    pub defaults: Arc<SamplingSettings>,
    pub palette: Arc<PaletteStore>,
}

impl FromRef<AppState> for SampleState {
    fn from_ref(state: &AppState) -> Self {
        SampleState {
            service: state.sampling.clone(),
            defaults: state.defaults.clone(),
        }
    }
}

impl FromRef<AppState> for Arc<PaletteStore> {
    fn from_ref(state: &AppState) -> Self {
        state.palette.clone()
    }
}

/// Create application state from configuration.
///
/// Fails if a library file is configured but cannot be loaded.
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let palette = match &config.library {
        Some(path) => PaletteStore::from_file(path)
            .map_err(|e| anyhow::anyhow!("Failed to load library {}: {e}", path.display()))?,
        None => PaletteStore::canonical(),
    };

    Ok(AppState {
        sampling: Arc::new(SamplingService::new()),
        defaults: Arc::new(config.sampling.clone()),
        palette: Arc::new(palette),
    })
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/sample", post(api::handle_sample))
        .route("/api/match", post(api::handle_match))
        .route("/api/library", get(api::handle_library))
        .route("/api/library/reload", post(api::handle_reload))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(axum::extract::DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
}
