//! Create `address` table; rows belong to a user through `user_id`.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Address::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Address::AddressId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Address::Street).string_len(255).null())
                    .col(ColumnDef::new(Address::City).string_len(128).null())
                    .col(ColumnDef::new(Address::State).string_len(128).null())
                    .col(ColumnDef::new(Address::ZipCode).integer().null())
                    .col(ColumnDef::new(Address::Country).string_len(128).null())
                    .col(ColumnDef::new(Address::UserId).big_integer().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Address::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Address { Table, AddressId, Street, City, State, ZipCode, Country, UserId }
