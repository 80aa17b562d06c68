use std::collections::{HashMap, HashSet};

use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use decora_designs_schema::{
    designs, furniture_colors, furniture_items, materials, preferences, recommendations, stores,
};

use crate::domain::repository::{CatalogRepository, DesignRepository};
use crate::domain::types::{
    Color, ColorTone, Design, DesignDetail, FurnitureItem, GenerationRecord, Material, Preference,
    PriceCeiling, Recommendation, Store, Vibe,
};
use crate::error::DesignsServiceError;

// ── Catalog repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCatalogRepository {
    pub db: DatabaseConnection,
}

impl CatalogRepository for DbCatalogRepository {
    async fn find_preference(
        &self,
        user_id: Uuid,
    ) -> Result<Option<Preference>, DesignsServiceError> {
        let model = preferences::Entity::find()
            .filter(preferences::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .context("find preference by user")?;
        Ok(model.map(preference_from_model))
    }

    async fn find_color_by_tone(
        &self,
        tone: ColorTone,
    ) -> Result<Option<Color>, DesignsServiceError> {
        let model = furniture_colors::Entity::find()
            .filter(furniture_colors::Column::Tone.eq(tone.as_str()))
            .one(&self.db)
            .await
            .context("find color by tone")?;
        Ok(model.map(|m| Color {
            id: m.id,
            name: m.name,
            tone,
        }))
    }

    async fn find_matching_furniture(
        &self,
        room_type_id: Uuid,
        ceiling: PriceCeiling,
        color_id: Option<Uuid>,
    ) -> Result<Vec<FurnitureItem>, DesignsServiceError> {
        let mut query = furniture_items::Entity::find()
            .filter(furniture_items::Column::RoomTypeId.eq(room_type_id));
        if let Some(bound) = ceiling.bound() {
            query = query.filter(furniture_items::Column::Price.lt(bound));
        }
        if let Some(color_id) = color_id {
            query = query.filter(furniture_items::Column::ColorId.eq(color_id));
        }
        let models = query
            .all(&self.db)
            .await
            .context("find matching furniture")?;
        Ok(models.into_iter().map(furniture_from_model).collect())
    }
}

fn preference_from_model(model: preferences::Model) -> Preference {
    // Unknown stored values read as unset: a stale enum value in a saved
    // preference must never fail a generation run.
    Preference {
        user_id: model.user_id,
        vibe: model.vibe.as_deref().and_then(Vibe::parse),
        color_tone: ColorTone::parse(&model.color_tone),
    }
}

fn furniture_from_model(model: furniture_items::Model) -> FurnitureItem {
    FurnitureItem {
        id: model.id,
        name: model.name,
        category_id: model.category_id,
        color_id: model.color_id,
        width: model.width,
        height: model.height,
        depth: model.depth,
        price: model.price,
        picture_url: model.picture_url,
        material_id: model.material_id,
        store_id: model.store_id,
        room_type_id: model.room_type_id,
    }
}

// ── Design repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbDesignRepository {
    pub db: DatabaseConnection,
}

impl DesignRepository for DbDesignRepository {
    async fn create_with_recommendation(
        &self,
        record: &GenerationRecord,
    ) -> Result<(Recommendation, Design), DesignsServiceError> {
        let now = Utc::now();
        let recommendation = Recommendation {
            id: Uuid::new_v4(),
            user_id: record.user_id,
            furniture_ids: vec![record.furniture_id],
            material_ids: vec![record.material_id],
            created_at: now,
        };
        let design = Design {
            id: Uuid::new_v4(),
            furniture_used_id: record.furniture_id,
            materials_used_id: record.material_id,
            recommendation_id: recommendation.id,
            room_type_id: record.room_type_id,
            budget: record.budget,
            created_by: record.user_id,
            model_url: record.model_url.clone(),
            created_at: now,
        };

        // One transaction for both rows: a design must never exist without
        // the recommendation it references, and vice versa.
        let txn = self
            .db
            .begin()
            .await
            .context("begin generation transaction")
            .map_err(DesignsServiceError::Persistence)?;

        recommendations::ActiveModel {
            id: Set(recommendation.id),
            user_id: Set(recommendation.user_id),
            furniture_ids: Set(recommendation.furniture_ids.clone()),
            material_ids: Set(recommendation.material_ids.clone()),
            created_at: Set(recommendation.created_at),
        }
        .insert(&txn)
        .await
        .context("create recommendation")
        .map_err(DesignsServiceError::Persistence)?;

        designs::ActiveModel {
            id: Set(design.id),
            furniture_used_id: Set(design.furniture_used_id),
            materials_used_id: Set(design.materials_used_id),
            recommendation_id: Set(design.recommendation_id),
            room_type_id: Set(design.room_type_id),
            budget: Set(design.budget),
            created_by: Set(design.created_by),
            model_url: Set(design.model_url.clone()),
            created_at: Set(design.created_at),
        }
        .insert(&txn)
        .await
        .context("create design")
        .map_err(DesignsServiceError::Persistence)?;

        txn.commit()
            .await
            .context("commit generation transaction")
            .map_err(DesignsServiceError::Persistence)?;

        Ok((recommendation, design))
    }

    async fn list_by_creator(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<DesignDetail>, DesignsServiceError> {
        let models = designs::Entity::find()
            .filter(designs::Column::CreatedBy.eq(user_id))
            .order_by_desc(designs::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list designs by creator")?;
        self.assemble_details(models, false).await
    }

    async fn list_all(&self) -> Result<Vec<DesignDetail>, DesignsServiceError> {
        let models = designs::Entity::find()
            .order_by_desc(designs::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list all designs")?;
        self.assemble_details(models, true).await
    }
}

impl DbDesignRepository {
    /// Resolve catalog references for a page of designs with batched
    /// lookups instead of a per-row join fan-out.
    async fn assemble_details(
        &self,
        models: Vec<designs::Model>,
        with_store: bool,
    ) -> Result<Vec<DesignDetail>, DesignsServiceError> {
        let furniture_ids: HashSet<Uuid> = models.iter().map(|m| m.furniture_used_id).collect();
        let material_ids: HashSet<Uuid> = models.iter().map(|m| m.materials_used_id).collect();
        let recommendation_ids: HashSet<Uuid> =
            models.iter().map(|m| m.recommendation_id).collect();

        let furniture: HashMap<Uuid, FurnitureItem> = furniture_items::Entity::find()
            .filter(furniture_items::Column::Id.is_in(furniture_ids))
            .all(&self.db)
            .await
            .context("load furniture for designs")?
            .into_iter()
            .map(|m| (m.id, furniture_from_model(m)))
            .collect();

        let materials_by_id: HashMap<Uuid, Material> = materials::Entity::find()
            .filter(materials::Column::Id.is_in(material_ids))
            .all(&self.db)
            .await
            .context("load materials for designs")?
            .into_iter()
            .map(|m| {
                (
                    m.id,
                    Material {
                        id: m.id,
                        name: m.name,
                        material_type: m.material_type,
                        description: m.description,
                        hex: m.hex,
                        image_url: m.image_url,
                    },
                )
            })
            .collect();

        let recommendations_by_id: HashMap<Uuid, Recommendation> = recommendations::Entity::find()
            .filter(recommendations::Column::Id.is_in(recommendation_ids))
            .all(&self.db)
            .await
            .context("load recommendations for designs")?
            .into_iter()
            .map(|m| {
                (
                    m.id,
                    Recommendation {
                        id: m.id,
                        user_id: m.user_id,
                        furniture_ids: m.furniture_ids,
                        material_ids: m.material_ids,
                        created_at: m.created_at,
                    },
                )
            })
            .collect();

        let stores_by_id: HashMap<Uuid, Store> = if with_store {
            let store_ids: HashSet<Uuid> = furniture.values().map(|f| f.store_id).collect();
            stores::Entity::find()
                .filter(stores::Column::Id.is_in(store_ids))
                .all(&self.db)
                .await
                .context("load stores for designs")?
                .into_iter()
                .map(|m| {
                    (
                        m.id,
                        Store {
                            id: m.id,
                            name: m.name,
                            address: m.address,
                            longitude: m.longitude,
                            latitude: m.latitude,
                            website: m.website,
                            image_url: m.image_url,
                        },
                    )
                })
                .collect()
        } else {
            HashMap::new()
        };

        Ok(models
            .into_iter()
            .map(|m| {
                let item = furniture.get(&m.furniture_used_id).cloned();
                let store = item
                    .as_ref()
                    .and_then(|f| stores_by_id.get(&f.store_id).cloned());
                DesignDetail {
                    design: Design {
                        id: m.id,
                        furniture_used_id: m.furniture_used_id,
                        materials_used_id: m.materials_used_id,
                        recommendation_id: m.recommendation_id,
                        room_type_id: m.room_type_id,
                        budget: m.budget,
                        created_by: m.created_by,
                        model_url: m.model_url,
                        created_at: m.created_at,
                    },
                    furniture: item,
                    material: materials_by_id.get(&m.materials_used_id).cloned(),
                    recommendation: recommendations_by_id.get(&m.recommendation_id).cloned(),
                    store,
                }
            })
            .collect())
    }
}
