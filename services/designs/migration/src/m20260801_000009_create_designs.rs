use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Designs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Designs::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Designs::FurnitureUsedId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Designs::MaterialsUsedId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Designs::RecommendationId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Designs::RoomTypeId).uuid().not_null())
                    .col(
                        ColumnDef::new(Designs::Budget)
                            .big_integer()
                            .check(Expr::col(Designs::Budget).gte(0)),
                    )
                    .col(ColumnDef::new(Designs::CreatedBy).uuid().not_null())
                    .col(ColumnDef::new(Designs::ModelUrl).string().not_null())
                    .col(
                        ColumnDef::new(Designs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Designs::Table, Designs::FurnitureUsedId)
                            .to(FurnitureItems::Table, FurnitureItems::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Designs::Table, Designs::MaterialsUsedId)
                            .to(Materials::Table, Materials::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Designs::Table, Designs::RecommendationId)
                            .to(Recommendations::Table, Recommendations::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Designs::Table, Designs::RoomTypeId)
                            .to(RoomTypes::Table, RoomTypes::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Designs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Designs {
    Table,
    Id,
    FurnitureUsedId,
    MaterialsUsedId,
    RecommendationId,
    RoomTypeId,
    Budget,
    CreatedBy,
    ModelUrl,
    CreatedAt,
}

#[derive(Iden)]
enum FurnitureItems {
    Table,
    Id,
}

#[derive(Iden)]
enum Materials {
    Table,
    Id,
}

#[derive(Iden)]
enum Recommendations {
    Table,
    Id,
}

#[derive(Iden)]
enum RoomTypes {
    Table,
    Id,
}
