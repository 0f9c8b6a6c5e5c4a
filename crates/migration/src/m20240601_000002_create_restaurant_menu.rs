//! Create `restaurant_menu` table (one row per menu item).
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RestaurantMenu::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RestaurantMenu::ItemId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RestaurantMenu::ItemName).string_len(255).null())
                    .col(ColumnDef::new(RestaurantMenu::Price).double().null())
                    .col(ColumnDef::new(RestaurantMenu::Description).text().null())
                    .col(ColumnDef::new(RestaurantMenu::VegNonVeg).boolean().null())
                    .col(ColumnDef::new(RestaurantMenu::CategoryId).big_integer().null())
                    .col(ColumnDef::new(RestaurantMenu::RestaurantId).big_integer().null())
                    .col(ColumnDef::new(RestaurantMenu::Image).binary().null())
                    .check(Expr::col(RestaurantMenu::Price).gte(0.0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(RestaurantMenu::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum RestaurantMenu {
    Table,
    ItemId,
    ItemName,
    Price,
    Description,
    VegNonVeg,
    CategoryId,
    RestaurantId,
    Image,
}
