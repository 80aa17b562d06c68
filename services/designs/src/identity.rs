//! Bearer-token identity extractor.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use uuid::Uuid;

use decora_auth_types::token::validate_access_token;

use crate::error::DesignsServiceError;
use crate::state::AppState;

/// Caller identity established from a verified `Authorization: Bearer`
/// token. Rejects with 401 when the header is absent, malformed, expired,
/// or carries a bad signature — the claim is never trusted unverified.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: Uuid,
}

impl FromRequestParts<AppState> for Identity {
    type Rejection = DesignsServiceError;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.strip_prefix("Bearer "))
            .map(str::to_owned);
        let secret = state.jwt_secret.clone();

        async move {
            let token = token.ok_or(DesignsServiceError::Unauthorized)?;
            let info = validate_access_token(&token, &secret).map_err(|e| {
                tracing::debug!(error = %e, "rejected bearer token");
                DesignsServiceError::Unauthorized
            })?;
            Ok(Self {
                user_id: info.user_id,
            })
        }
    }
}
