use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub user_id: i64,
    pub user_name: Option<String>,
    /// Base64-encoded, never plain text.
    pub user_password: Option<String>,
    pub phone_number: Option<String>,
    pub user_email: Option<String>,
    pub user_role: Option<String>,
    #[sea_orm(column_type = "Double", nullable)]
    pub wallet: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
