use sea_orm_migration::prelude::*;

mod m20260801_000001_create_furniture_categories;
mod m20260801_000002_create_furniture_colors;
mod m20260801_000003_create_materials;
mod m20260801_000004_create_stores;
mod m20260801_000005_create_room_types;
mod m20260801_000006_create_furniture_items;
mod m20260801_000007_create_preferences;
mod m20260801_000008_create_recommendations;
mod m20260801_000009_create_designs;
mod m20260801_000010_add_pipeline_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_furniture_categories::Migration),
            Box::new(m20260801_000002_create_furniture_colors::Migration),
            Box::new(m20260801_000003_create_materials::Migration),
            Box::new(m20260801_000004_create_stores::Migration),
            Box::new(m20260801_000005_create_room_types::Migration),
            Box::new(m20260801_000006_create_furniture_items::Migration),
            Box::new(m20260801_000007_create_preferences::Migration),
            Box::new(m20260801_000008_create_recommendations::Migration),
            Box::new(m20260801_000009_create_designs::Migration),
            Box::new(m20260801_000010_add_pipeline_indexes::Migration),
        ]
    }
}
