use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Catalog matching filters by room type (and color); design listing
        // filters by creator.
        manager
            .create_index(
                Index::create()
                    .table(FurnitureItems::Table)
                    .col(FurnitureItems::RoomTypeId)
                    .name("idx_furniture_items_room_type_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(FurnitureItems::Table)
                    .col(FurnitureItems::ColorId)
                    .name("idx_furniture_items_color_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Designs::Table)
                    .col(Designs::CreatedBy)
                    .name("idx_designs_created_by")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_designs_created_by").to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_furniture_items_color_id")
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_furniture_items_room_type_id")
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum FurnitureItems {
    Table,
    RoomTypeId,
    ColorId,
}

#[derive(Iden)]
enum Designs {
    Table,
    CreatedBy,
}
