use std::time::Duration;

use sea_orm::Database;
use tracing::info;

use decora_core::config::Config as _;
use decora_designs::config::DesignsConfig;
use decora_designs::router::build_router;
use decora_designs::state::AppState;

#[tokio::main]
async fn main() {
    decora_core::tracing::init_tracing();

    let config = DesignsConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let http = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .build()
        .expect("failed to build HTTP client");

    // Both roots must exist before the first request; the artifact root is
    // also the static mount.
    std::fs::create_dir_all(&config.artifact_root).expect("failed to create artifact root");
    std::fs::create_dir_all(&config.upload_root).expect("failed to create upload root");

    let state = AppState {
        db,
        http,
        jwt_secret: config.jwt_secret,
        synthesis_url: config.synthesis_url,
        synthesis_api_key: config.synthesis_api_key,
        synthesis_model: config.synthesis_model,
        artifact_root: config.artifact_root,
        upload_root: config.upload_root,
        remote_timeout: Duration::from_secs(config.remote_timeout_secs),
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.designs_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("designs service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
