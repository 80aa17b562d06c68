use axum::http::StatusCode;
use sea_orm::DatabaseConnection;

/// Handler for `GET /healthz` — liveness check.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Ping the database for readiness probes. Services wire this into their
/// own `readyz` handler so readiness reflects the actual connection pool.
pub async fn db_ready(db: &DatabaseConnection) -> StatusCode {
    match db.ping().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "readiness probe failed to ping database");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
