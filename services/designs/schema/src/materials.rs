use sea_orm::entity::prelude::*;

/// Catalog material (e.g. "Oak Wood") with its display color.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "materials")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub material_type: String,
    pub description: String,
    /// Hex color code, "#RRGGBB".
    pub hex: String,
    pub image_url: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::furniture_items::Entity")]
    FurnitureItems,
    #[sea_orm(has_many = "super::designs::Entity")]
    Designs,
}

impl Related<super::furniture_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FurnitureItems.def()
    }
}

impl Related<super::designs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Designs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
