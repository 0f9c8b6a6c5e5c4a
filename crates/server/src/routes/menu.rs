use axum::{
    extract::State,
    http::StatusCode,
    response::Response,
    Json,
};
use common::types::SuccessResponse;
use serde::Deserialize;
use service::messages;
use service::restaurants::domain::{RestaurantMenuRequest, RestaurantMenuResponse};
use tracing::info;

use super::{decode_image, jpeg};
use crate::errors::ApiError;
use crate::extract::{JsonBody, PathParam};
use crate::state::ServerState;

/// Menu item fields plus an optional base64 `image`.
#[derive(Debug, Deserialize)]
pub struct AddFoodItemBody {
    #[serde(flatten)]
    pub item: RestaurantMenuRequest,
    #[serde(default)]
    pub image: Option<String>,
}

#[utoipa::path(
    post, path = "/foodItems/add", tag = "menu",
    request_body = crate::openapi::FoodItemRequestDoc,
    responses(
        (status = 201, description = "Added", body = crate::openapi::MessageDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Food item already exists", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn add(State(state): State<ServerState>, JsonBody(body): JsonBody<AddFoodItemBody>) -> Result<(StatusCode, Json<SuccessResponse>), ApiError> {
    let image = decode_image(body.image)?;
    let created = state.menu.add_food_item(body.item, image).await?;
    info!(item_id = ?created.item_id, "food_item_added");
    Ok((StatusCode::CREATED, Json(SuccessResponse::new(messages::FOOD_ITEM_ADD_SUCCESS))))
}

#[utoipa::path(
    get, path = "/foodItems/getFoodItems/{restaurantId}", tag = "menu",
    params(("restaurantId" = i64, Path, description = "Restaurant ID")),
    responses((status = 200, description = "Menu of the restaurant"))
)]
pub async fn list_by_restaurant(State(state): State<ServerState>, PathParam(restaurant_id): PathParam<i64>) -> Result<Json<Vec<RestaurantMenuResponse>>, ApiError> {
    Ok(Json(state.menu.get_food_items_by_restaurant_id(restaurant_id).await?))
}

#[utoipa::path(
    get, path = "/foodItems/category/{categoryId}", tag = "menu",
    params(("categoryId" = i64, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Items of the category"),
        (status = 404, description = "Category not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list_by_category(State(state): State<ServerState>, PathParam(category_id): PathParam<i64>) -> Result<Json<Vec<RestaurantMenuResponse>>, ApiError> {
    Ok(Json(state.menu.get_food_items_by_category_id(category_id).await?))
}

#[utoipa::path(
    get, path = "/foodItems/{foodItemId}", tag = "menu",
    params(("foodItemId" = i64, Path, description = "Food item ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, PathParam(item_id): PathParam<i64>) -> Result<Json<RestaurantMenuResponse>, ApiError> {
    Ok(Json(state.menu.get_food_item_by_id(item_id).await?))
}

#[utoipa::path(
    get, path = "/foodItems/{foodItemId}/image", tag = "menu",
    params(("foodItemId" = i64, Path, description = "Food item ID")),
    responses(
        (status = 200, description = "JPEG bytes"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn image(State(state): State<ServerState>, PathParam(item_id): PathParam<i64>) -> Result<Response, ApiError> {
    Ok(jpeg(state.menu.get_food_item_image(item_id).await?))
}

#[utoipa::path(
    put, path = "/foodItems/update/{foodItemId}", tag = "menu",
    params(("foodItemId" = i64, Path, description = "Food item ID")),
    request_body = crate::openapi::FoodItemRequestDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(State(state): State<ServerState>, PathParam(item_id): PathParam<i64>, JsonBody(input): JsonBody<RestaurantMenuRequest>) -> Result<Json<RestaurantMenuResponse>, ApiError> {
    Ok(Json(state.menu.update_restaurant_menu(item_id, input).await?))
}

#[utoipa::path(
    delete, path = "/foodItems/delete/{foodItemId}", tag = "menu",
    params(("foodItemId" = i64, Path, description = "Food item ID")),
    responses(
        (status = 200, description = "Deleted", body = String, content_type = "text/plain"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<ServerState>, PathParam(item_id): PathParam<i64>) -> Result<&'static str, ApiError> {
    state.menu.delete_food_item(item_id).await?;
    Ok(messages::FOOD_ITEM_DELETE_SUCCESS)
}
