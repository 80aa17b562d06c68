use sea_orm::entity::prelude::*;

/// Physical store carrying catalog furniture.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "stores")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub address: String,
    pub longitude: f64,
    pub latitude: f64,
    pub website: Option<String>,
    pub image_url: String,
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
