use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One menu item of a restaurant.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "restaurant_menu")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub item_id: i64,
    pub item_name: Option<String>,
    #[sea_orm(column_type = "Double", nullable)]
    pub price: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub veg_non_veg: Option<bool>,
    pub category_id: Option<i64>,
    pub restaurant_id: Option<i64>,
    #[serde(skip)]
    pub image: Option<Vec<u8>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
