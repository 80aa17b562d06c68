use sea_orm::entity::prelude::*;

/// Catalog furniture category (e.g. "Chair", "Table").
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "furniture_categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::furniture_items::Entity")]
    FurnitureItems,
}

impl Related<super::furniture_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FurnitureItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
