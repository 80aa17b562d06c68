use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FurnitureItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FurnitureItems::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FurnitureItems::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(FurnitureItems::CategoryId).uuid().not_null())
                    .col(ColumnDef::new(FurnitureItems::ColorId).uuid().not_null())
                    .col(
                        ColumnDef::new(FurnitureItems::Width)
                            .double()
                            .not_null()
                            .check(Expr::col(FurnitureItems::Width).gte(0.0)),
                    )
                    .col(
                        ColumnDef::new(FurnitureItems::Height)
                            .double()
                            .not_null()
                            .check(Expr::col(FurnitureItems::Height).gte(0.0)),
                    )
                    .col(
                        ColumnDef::new(FurnitureItems::Depth)
                            .double()
                            .not_null()
                            .check(Expr::col(FurnitureItems::Depth).gte(0.0)),
                    )
                    .col(
                        ColumnDef::new(FurnitureItems::Price)
                            .big_integer()
                            .not_null()
                            .check(Expr::col(FurnitureItems::Price).gte(0)),
                    )
                    .col(ColumnDef::new(FurnitureItems::PictureUrl).string())
                    .col(ColumnDef::new(FurnitureItems::MaterialId).uuid().not_null())
                    .col(ColumnDef::new(FurnitureItems::StoreId).uuid().not_null())
                    .col(ColumnDef::new(FurnitureItems::RoomTypeId).uuid().not_null())
                    .col(
                        ColumnDef::new(FurnitureItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(FurnitureItems::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FurnitureItems::Table, FurnitureItems::CategoryId)
                            .to(FurnitureCategories::Table, FurnitureCategories::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FurnitureItems::Table, FurnitureItems::ColorId)
                            .to(FurnitureColors::Table, FurnitureColors::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FurnitureItems::Table, FurnitureItems::MaterialId)
                            .to(Materials::Table, Materials::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FurnitureItems::Table, FurnitureItems::StoreId)
                            .to(Stores::Table, Stores::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FurnitureItems::Table, FurnitureItems::RoomTypeId)
                            .to(RoomTypes::Table, RoomTypes::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FurnitureItems::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum FurnitureItems {
    Table,
    Id,
    Name,
    CategoryId,
    ColorId,
    Width,
    Height,
    Depth,
    Price,
    PictureUrl,
    MaterialId,
    StoreId,
    RoomTypeId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum FurnitureCategories {
    Table,
    Id,
}

#[derive(Iden)]
enum FurnitureColors {
    Table,
    Id,
}

#[derive(Iden)]
enum Materials {
    Table,
    Id,
}

#[derive(Iden)]
enum Stores {
    Table,
    Id,
}

#[derive(Iden)]
enum RoomTypes {
    Table,
    Id,
}
