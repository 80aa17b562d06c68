use sea_orm::entity::prelude::*;

/// One generation event: the synthesized artifact plus the constraints and
/// catalog references used to produce it. `budget` is NULL when the caller
/// supplied no price ceiling.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "designs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub furniture_used_id: Uuid,
    pub materials_used_id: Uuid,
    pub recommendation_id: Uuid,
    pub room_type_id: Uuid,
    pub budget: Option<i64>,
    pub created_by: Uuid,
    pub model_url: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::furniture_items::Entity",
        from = "Column::FurnitureUsedId",
        to = "super::furniture_items::Column::Id"
    )]
    FurnitureUsed,
    #[sea_orm(
        belongs_to = "super::materials::Entity",
        from = "Column::MaterialsUsedId",
        to = "super::materials::Column::Id"
    )]
    MaterialsUsed,
    #[sea_orm(
        belongs_to = "super::recommendations::Entity",
        from = "Column::RecommendationId",
        to = "super::recommendations::Column::Id"
    )]
    Recommendation,
    #[sea_orm(
        belongs_to = "super::room_types::Entity",
        from = "Column::RoomTypeId",
        to = "super::room_types::Column::Id"
    )]
    RoomType,
}

impl Related<super::furniture_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FurnitureUsed.def()
    }
}

impl Related<super::materials::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MaterialsUsed.def()
    }
}

impl Related<super::recommendations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Recommendation.def()
    }
}

impl Related<super::room_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
