use anyhow::Context as _;
use axum::{
    Json,
    extract::{Multipart, State},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::types::{DesignDetail, PriceCeiling};
use crate::error::DesignsServiceError;
use crate::identity::Identity;
use crate::infra::uploads::{TempUploads, UploadPart};
use crate::state::AppState;
use crate::usecase::generate_design::{GenerateDesignInput, GenerateDesignUseCase};
use crate::usecase::list_designs::{ListDesignsUseCase, SearchDesignsUseCase};

// ── POST /designs ────────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDesignResponse {
    pub image_url: String,
}

pub async fn create_design(
    identity: Identity,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<CreateDesignResponse>, DesignsServiceError> {
    let mut images: Vec<UploadPart> = Vec::new();
    let mut room_type: Option<String> = None;
    let mut price: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .context("read multipart field")?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("images") => {
                let file_name = field.file_name().unwrap_or("room-image.png").to_owned();
                let content_type = field.content_type().unwrap_or("image/png").to_owned();
                let bytes = field
                    .bytes()
                    .await
                    .context("read uploaded image field")?
                    .to_vec();
                images.push(UploadPart {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            Some("roomType") => {
                room_type = Some(field.text().await.context("read roomType field")?);
            }
            Some("price") => {
                price = Some(field.text().await.context("read price field")?);
            }
            _ => {}
        }
    }

    // All request validation happens here, before any pipeline I/O.
    if images.is_empty() {
        return Err(DesignsServiceError::MissingImage);
    }
    let room_type = room_type
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(DesignsServiceError::MissingRoomType)?;
    let room_type_id: Uuid = room_type
        .parse()
        .map_err(|_| DesignsServiceError::InvalidRoomType)?;
    let price_ceiling = parse_price_ceiling(price.as_deref())?;

    let uploads = TempUploads::spool(&state.upload_root, images).await?;
    let usecase = GenerateDesignUseCase {
        catalog: state.catalog_repo(),
        records: state.design_repo(),
        fetcher: state.reference_fetcher(),
        synthesis: state.synthesis_client(),
        artifacts: state.artifact_store(),
        rng: state.random_source(),
    };
    let output = usecase
        .execute(GenerateDesignInput {
            user_id: identity.user_id,
            room_type_id,
            price_ceiling,
            photos: uploads.photos().to_vec(),
        })
        .await;
    // `uploads` is still alive here: the spooled files are released after
    // the pipeline returns, whichever way it returns.
    drop(uploads);
    let output = output?;

    Ok(Json(CreateDesignResponse {
        image_url: output.image_url,
    }))
}

/// Map the optional `price` form field to an explicit ceiling. No field —
/// or a blank one — means no ceiling at all, not some giant sentinel.
fn parse_price_ceiling(raw: Option<&str>) -> Result<PriceCeiling, DesignsServiceError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(PriceCeiling::Unlimited),
        Some(value) => {
            let price: i64 = value.parse().map_err(|_| DesignsServiceError::InvalidPrice)?;
            if price < 0 {
                return Err(DesignsServiceError::InvalidPrice);
            }
            Ok(PriceCeiling::Below(price))
        }
    }
}

// ── GET /designs, GET /designs/search ────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignResponse {
    pub id: String,
    pub furniture_used: Option<FurnitureResponse>,
    pub materials_used: Option<MaterialResponse>,
    pub recommendation: Option<RecommendationResponse>,
    pub room_type_id: String,
    pub budget: Option<i64>,
    pub created_by: String,
    pub model_url: String,
    #[serde(serialize_with = "decora_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FurnitureResponse {
    pub id: String,
    pub name: String,
    pub category_id: String,
    pub color_id: String,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub price: i64,
    pub picture_url: Option<String>,
    pub material_id: String,
    pub store_id: String,
    pub room_type_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<StoreResponse>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialResponse {
    pub id: String,
    pub name: String,
    pub material_type: String,
    pub description: String,
    pub hex: String,
    pub image_url: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreResponse {
    pub id: String,
    pub name: String,
    pub address: String,
    pub website: Option<String>,
    pub image_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub id: String,
    pub user_id: String,
    pub furniture_recommendations: Vec<String>,
    pub material_recommendations: Vec<String>,
}

fn design_response(detail: DesignDetail) -> DesignResponse {
    let DesignDetail {
        design,
        furniture,
        material,
        recommendation,
        store,
    } = detail;
    DesignResponse {
        id: design.id.to_string(),
        furniture_used: furniture.map(|f| FurnitureResponse {
            id: f.id.to_string(),
            name: f.name,
            category_id: f.category_id.to_string(),
            color_id: f.color_id.to_string(),
            width: f.width,
            height: f.height,
            depth: f.depth,
            price: f.price,
            picture_url: f.picture_url,
            material_id: f.material_id.to_string(),
            store_id: f.store_id.to_string(),
            room_type_id: f.room_type_id.to_string(),
            store: store.map(|s| StoreResponse {
                id: s.id.to_string(),
                name: s.name,
                address: s.address,
                website: s.website,
                image_url: s.image_url,
            }),
        }),
        materials_used: material.map(|m| MaterialResponse {
            id: m.id.to_string(),
            name: m.name,
            material_type: m.material_type,
            description: m.description,
            hex: m.hex,
            image_url: m.image_url,
        }),
        recommendation: recommendation.map(|r| RecommendationResponse {
            id: r.id.to_string(),
            user_id: r.user_id.to_string(),
            furniture_recommendations: r.furniture_ids.iter().map(Uuid::to_string).collect(),
            material_recommendations: r.material_ids.iter().map(Uuid::to_string).collect(),
        }),
        room_type_id: design.room_type_id.to_string(),
        budget: design.budget,
        created_by: design.created_by.to_string(),
        model_url: design.model_url,
        created_at: design.created_at,
    }
}

pub async fn get_designs(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<Vec<DesignResponse>>, DesignsServiceError> {
    let usecase = ListDesignsUseCase {
        designs: state.design_repo(),
    };
    let details = usecase.execute(identity.user_id).await?;
    Ok(Json(details.into_iter().map(design_response).collect()))
}

pub async fn search_designs(
    _identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<Vec<DesignResponse>>, DesignsServiceError> {
    let usecase = SearchDesignsUseCase {
        designs: state.design_repo(),
    };
    let details = usecase.execute().await?;
    Ok(Json(details.into_iter().map(design_response).collect()))
}
