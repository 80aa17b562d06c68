use sea_orm::entity::prelude::*;

/// Catalog furniture item. The generation pipeline filters these by room
/// type, price and color; dimensions are in centimeters, price in minor
/// currency units.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "furniture_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub category_id: Uuid,
    pub color_id: Uuid,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub price: i64,
    pub picture_url: Option<String>,
    pub material_id: Uuid,
    pub store_id: Uuid,
    pub room_type_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::furniture_categories::Entity",
        from = "Column::CategoryId",
        to = "super::furniture_categories::Column::Id"
    )]
    Category,
    #[sea_orm(
        belongs_to = "super::furniture_colors::Entity",
        from = "Column::ColorId",
        to = "super::furniture_colors::Column::Id"
    )]
    Color,
    #[sea_orm(
        belongs_to = "super::materials::Entity",
        from = "Column::MaterialId",
        to = "super::materials::Column::Id"
    )]
    Material,
    #[sea_orm(
        belongs_to = "super::stores::Entity",
        from = "Column::StoreId",
        to = "super::stores::Column::Id"
    )]
    Store,
    #[sea_orm(
        belongs_to = "super::room_types::Entity",
        from = "Column::RoomTypeId",
        to = "super::room_types::Column::Id"
    )]
    RoomType,
    #[sea_orm(has_many = "super::designs::Entity")]
    Designs,
}

impl Related<super::furniture_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::furniture_colors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Color.def()
    }
}

impl Related<super::materials::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Material.def()
    }
}

impl Related<super::stores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Store.def()
    }
}

impl Related<super::room_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomType.def()
    }
}

impl Related<super::designs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Designs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
