use serde::{Deserialize, Serialize};

/// Creation input for a food category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodCategoryRequest {
    pub restaurant_id: Option<i64>,
    pub category_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodCategoryResponse {
    pub category_id: Option<i64>,
    pub restaurant_id: Option<i64>,
    pub category_name: Option<String>,
}

/// Persisted category; `category_id` is `None` until saved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodCategory {
    pub category_id: Option<i64>,
    pub restaurant_id: Option<i64>,
    pub category_name: Option<String>,
}

/// Creation/update input for a menu item. The image travels separately.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantMenuRequest {
    pub item_name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub veg_non_veg: Option<bool>,
    pub category_id: Option<i64>,
    pub restaurant_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantMenuResponse {
    pub item_id: Option<i64>,
    pub item_name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub veg_non_veg: Option<bool>,
    pub category_id: Option<i64>,
    pub restaurant_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestaurantMenu {
    pub item_id: Option<i64>,
    pub item_name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub veg_non_veg: Option<bool>,
    pub category_id: Option<i64>,
    pub restaurant_id: Option<i64>,
    pub image: Option<Vec<u8>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantRequest {
    pub user_id: Option<i64>,
    pub restaurant_name: Option<String>,
    pub restaurant_address: Option<String>,
    pub contact_number: Option<String>,
    pub restaurant_description: Option<String>,
    pub opening_hour: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantResponse {
    pub restaurant_id: Option<i64>,
    pub user_id: Option<i64>,
    pub restaurant_name: Option<String>,
    pub restaurant_address: Option<String>,
    pub contact_number: Option<String>,
    pub restaurant_description: Option<String>,
    pub opening_hour: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Restaurant {
    pub restaurant_id: Option<i64>,
    pub user_id: Option<i64>,
    pub restaurant_name: Option<String>,
    pub restaurant_address: Option<String>,
    pub contact_number: Option<String>,
    pub restaurant_description: Option<String>,
    pub opening_hour: Option<String>,
    pub restaurant_image: Option<Vec<u8>>,
}
