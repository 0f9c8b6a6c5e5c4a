//! Create `restaurant` table; `user_id` is the owning user (soft reference).
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Restaurant::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Restaurant::RestaurantId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Restaurant::UserId).big_integer().null())
                    .col(ColumnDef::new(Restaurant::RestaurantName).string_len(255).null())
                    .col(ColumnDef::new(Restaurant::RestaurantAddress).string_len(512).null())
                    .col(ColumnDef::new(Restaurant::ContactNumber).string_len(32).null())
                    .col(ColumnDef::new(Restaurant::RestaurantDescription).text().null())
                    .col(ColumnDef::new(Restaurant::OpeningHour).string_len(64).null())
                    .col(ColumnDef::new(Restaurant::RestaurantImage).binary().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Restaurant::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Restaurant {
    Table,
    RestaurantId,
    UserId,
    RestaurantName,
    RestaurantAddress,
    ContactNumber,
    RestaurantDescription,
    OpeningHour,
    RestaurantImage,
}
