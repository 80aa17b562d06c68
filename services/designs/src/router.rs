use axum::{
    Router,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

use decora_core::health::{db_ready, healthz};
use decora_core::middleware::request_id_layer;

use crate::handlers::design::{create_design, get_designs, search_designs};
use crate::state::AppState;

/// Room photos arrive as multipart uploads; axum's 2 MB default is too
/// small for phone camera output.
const UPLOAD_BODY_LIMIT: usize = 20 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    // Artifacts are written by the pipeline and served read-only here.
    let artifacts = ServeDir::new(&state.artifact_root);
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Designs
        .route("/designs", post(create_design))
        .route("/designs", get(get_designs))
        .route("/designs/search", get(search_designs))
        // Generated artifacts
        .nest_service("/generated_images", artifacts)
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http()),
        )
        .with_state(state)
}

async fn readyz(State(state): State<AppState>) -> StatusCode {
    db_ready(&state.db).await
}
