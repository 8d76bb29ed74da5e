//! Application setup and router construction.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use summarise::{DocumentStore, PageFetcher, Pipeline, SummaryStore};

use crate::routes::{health_handler, summarise_handler};

/// The pipeline as wired at the boundary: collaborators are selected at
/// startup (real stores when credentials exist, unconfigured stand-ins
/// otherwise), so they flow through as trait objects.
pub type AppPipeline =
    Pipeline<Arc<dyn PageFetcher>, Arc<dyn SummaryStore>, Arc<dyn DocumentStore>>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<AppPipeline>,
}

/// Build the axum application router.
pub fn build_app(pipeline: AppPipeline) -> Router {
    let state = AppState {
        pipeline: Arc::new(pipeline),
    };

    Router::new()
        .route("/api/summarise", post(summarise_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
