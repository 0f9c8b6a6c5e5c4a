use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "food_category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub category_id: i64,
    pub restaurant_id: Option<i64>,
    pub category_name: Option<String>,
}

// Links to restaurant and menu items are plain id columns.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
