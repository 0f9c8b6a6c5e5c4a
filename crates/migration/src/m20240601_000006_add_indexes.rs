//! Lookup indexes for the list-by-parent queries and case-insensitive
//! unique indexes backing the add workflows.
//!
//! The unique indexes are expression indexes on `lower(..)`, which the
//! index builder cannot express, so they are issued as raw SQL.
use sea_orm_migration::prelude::*;

use crate::m20240601_000001_create_food_category::FoodCategory;
use crate::m20240601_000002_create_restaurant_menu::RestaurantMenu;
use crate::m20240601_000003_create_restaurant::Restaurant;
use crate::m20240601_000005_create_address::Address;

pub const UNIQUE_INDEXES: &[(&str, &str)] = &[
    (
        "uniq_food_category_restaurant_name",
        "CREATE UNIQUE INDEX IF NOT EXISTS uniq_food_category_restaurant_name ON food_category (restaurant_id, lower(category_name))",
    ),
    (
        "uniq_restaurant_menu_restaurant_item",
        "CREATE UNIQUE INDEX IF NOT EXISTS uniq_restaurant_menu_restaurant_item ON restaurant_menu (restaurant_id, lower(item_name))",
    ),
    (
        "uniq_restaurant_owner_name",
        "CREATE UNIQUE INDEX IF NOT EXISTS uniq_restaurant_owner_name ON restaurant (user_id, lower(restaurant_name))",
    ),
    (
        "uniq_users_email",
        "CREATE UNIQUE INDEX IF NOT EXISTS uniq_users_email ON users (lower(user_email))",
    ),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_restaurant_menu_category")
                    .table(RestaurantMenu::Table)
                    .col(RestaurantMenu::CategoryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_food_category_restaurant")
                    .table(FoodCategory::Table)
                    .col(FoodCategory::RestaurantId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_restaurant_user")
                    .table(Restaurant::Table)
                    .col(Restaurant::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_address_user")
                    .table(Address::Table)
                    .col(Address::UserId)
                    .to_owned(),
            )
            .await?;

        let conn = manager.get_connection();
        for (_, sql) in UNIQUE_INDEXES {
            conn.execute_unprepared(sql).await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();
        for (name, _) in UNIQUE_INDEXES {
            conn.execute_unprepared(&format!("DROP INDEX IF EXISTS {name}")).await?;
        }
        manager
            .drop_index(Index::drop().if_exists().name("idx_address_user").table(Address::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().if_exists().name("idx_restaurant_user").table(Restaurant::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().if_exists().name("idx_food_category_restaurant").table(FoodCategory::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().if_exists().name("idx_restaurant_menu_category").table(RestaurantMenu::Table).to_owned())
            .await?;
        Ok(())
    }
}
