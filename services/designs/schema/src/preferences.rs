use sea_orm::entity::prelude::*;

/// A user's saved style preference. At most one row per user; the user id
/// comes from the identity service and has no local foreign key.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "preferences")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    /// Interior style, e.g. "Minimalist". Optional.
    pub vibe: Option<String>,
    /// Preferred color tone, e.g. "Neutral".
    pub color_tone: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
