use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "restaurant")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub restaurant_id: i64,
    pub user_id: Option<i64>,
    pub restaurant_name: Option<String>,
    pub restaurant_address: Option<String>,
    pub contact_number: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub restaurant_description: Option<String>,
    pub opening_hour: Option<String>,
    #[serde(skip)]
    pub restaurant_image: Option<Vec<u8>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
