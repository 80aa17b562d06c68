use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

use crate::domain::types::PriceCeiling;

/// Designs service error variants. Every pipeline failure is translated to
/// one of these at the boundary; transport and driver errors never leak to
/// callers.
#[derive(Debug, thiserror::Error)]
pub enum DesignsServiceError {
    #[error("at least one image is required")]
    MissingImage,
    #[error("room type is required and cannot be empty")]
    MissingRoomType,
    #[error("room type is not a valid id")]
    InvalidRoomType,
    #[error("price must be a non-negative integer")]
    InvalidPrice,
    #[error("unauthorized")]
    Unauthorized,
    #[error("no furniture items found for the requested room, budget and color")]
    NoMatch {
        room_type_id: Uuid,
        price_ceiling: PriceCeiling,
        color_id: Option<Uuid>,
    },
    #[error("image generation failed")]
    SynthesisFailed(#[source] anyhow::Error),
    #[error("failed to save generation records")]
    Persistence(#[source] anyhow::Error),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl DesignsServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingImage => "MISSING_IMAGE",
            Self::MissingRoomType => "MISSING_ROOM_TYPE",
            Self::InvalidRoomType => "INVALID_ROOM_TYPE",
            Self::InvalidPrice => "INVALID_PRICE",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::NoMatch { .. } => "NO_MATCH",
            Self::SynthesisFailed(_) => "SYNTHESIS_FAILED",
            Self::Persistence(_) => "PERSISTENCE",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for DesignsServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingImage
            | Self::MissingRoomType
            | Self::InvalidRoomType
            | Self::InvalidPrice => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NoMatch { .. } => StatusCode::NOT_FOUND,
            Self::SynthesisFailed(_) | Self::Persistence(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        // 500s carry a generic message to the caller; the cause chain is
        // logged here and nowhere else.
        match &self {
            Self::SynthesisFailed(e) | Self::Persistence(e) | Self::Internal(e) => {
                tracing::error!(error = ?e, kind = self.kind(), "pipeline failure");
            }
            _ => {}
        }
        let mut body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        // The no-match body surfaces the filters that were applied so a
        // missing catalog entry can be diagnosed from the response alone.
        if let Self::NoMatch {
            room_type_id,
            price_ceiling,
            color_id,
        } = &self
        {
            body["roomType"] = serde_json::json!(room_type_id);
            body["priceCeiling"] = serde_json::json!(price_ceiling.bound());
            body["colorId"] = serde_json::json!(color_id);
        }
        (status, axum::Json(body)).into_response()
    }
}
