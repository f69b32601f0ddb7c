//! Create listing table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Listing::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Listing::Id)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Listing::Title).string_len(256).not_null())
                    .col(ColumnDef::new(Listing::Description).text().not_null())
                    .col(ColumnDef::new(Listing::Price).double().not_null())
                    .col(
                        ColumnDef::new(Listing::Currency)
                            .string_len(8)
                            .not_null()
                            .default("USD"),
                    )
                    .col(ColumnDef::new(Listing::CategoryId).string_len(32).not_null())
                    .col(ColumnDef::new(Listing::LocationId).string_len(32).not_null())
                    .col(ColumnDef::new(Listing::UserId).string_len(32).not_null())
                    .col(
                        ColumnDef::new(Listing::Status)
                            .string_len(32)
                            .not_null()
                            .default("active"),
                    )
                    .col(
                        ColumnDef::new(Listing::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Listing::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // A listing cannot outlive its category, location, or owner.
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_listing_category")
                            .from(Listing::Table, Listing::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_listing_location")
                            .from(Listing::Table, Listing::LocationId)
                            .to(Location::Table, Location::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_listing_user")
                            .from(Listing::Table, Listing::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: created_at (for newest-first pagination)
        manager
            .create_index(
                Index::create()
                    .name("idx_listing_created_at")
                    .table(Listing::Table)
                    .col(Listing::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // Index: category_id (for browsing by category)
        manager
            .create_index(
                Index::create()
                    .name("idx_listing_category_id")
                    .table(Listing::Table)
                    .col(Listing::CategoryId)
                    .to_owned(),
            )
            .await?;

        // Index: location_id
        manager
            .create_index(
                Index::create()
                    .name("idx_listing_location_id")
                    .table(Listing::Table)
                    .col(Listing::LocationId)
                    .to_owned(),
            )
            .await?;

        // Index: user_id (for listing a user's ads)
        manager
            .create_index(
                Index::create()
                    .name("idx_listing_user_id")
                    .table(Listing::Table)
                    .col(Listing::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Listing::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Listing {
    Table,
    Id,
    Title,
    Description,
    Price,
    Currency,
    CategoryId,
    LocationId,
    UserId,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Category {
    Table,
    Id,
}

#[derive(Iden)]
enum Location {
    Table,
    Id,
}

#[derive(Iden)]
enum User {
    Table,
    Id,
}
