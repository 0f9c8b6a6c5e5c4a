//! Create `food_category` table.
//!
//! Categories group menu items inside one restaurant.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FoodCategory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FoodCategory::CategoryId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FoodCategory::RestaurantId).big_integer().null())
                    .col(ColumnDef::new(FoodCategory::CategoryName).string_len(255).null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(FoodCategory::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum FoodCategory { Table, CategoryId, RestaurantId, CategoryName }
