use axum::{
    extract::State,
    Json,
};
use common::types::SuccessResponse;
use service::messages;
use service::restaurants::domain::{FoodCategoryRequest, FoodCategoryResponse};
use tracing::info;

use crate::errors::ApiError;
use crate::extract::{JsonBody, PathParam};
use crate::state::ServerState;

#[utoipa::path(
    post, path = "/foodCategories/add", tag = "categories",
    request_body = crate::openapi::FoodCategoryRequestDoc,
    responses(
        (status = 200, description = "Added", body = crate::openapi::MessageDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Category already exists", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn add(State(state): State<ServerState>, JsonBody(input): JsonBody<FoodCategoryRequest>) -> Result<Json<SuccessResponse>, ApiError> {
    let created = state.categories.add_food_category(input).await?;
    info!(category_id = ?created.category_id, "category_added");
    Ok(Json(SuccessResponse::new(messages::CATEGORY_ADD_SUCCESS)))
}

#[utoipa::path(
    delete, path = "/foodCategories/delete/{categoryId}", tag = "categories",
    params(("categoryId" = i64, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Deleted", body = String, content_type = "text/plain"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<ServerState>, PathParam(category_id): PathParam<i64>) -> Result<&'static str, ApiError> {
    state.categories.delete_food_category(category_id).await?;
    Ok(messages::CATEGORY_DELETE_SUCCESS)
}

#[utoipa::path(
    get, path = "/foodCategories/restaurant/{restaurantId}", tag = "categories",
    params(("restaurantId" = i64, Path, description = "Restaurant ID")),
    responses((status = 200, description = "Categories of the restaurant"))
)]
pub async fn list_by_restaurant(State(state): State<ServerState>, PathParam(restaurant_id): PathParam<i64>) -> Result<Json<Vec<FoodCategoryResponse>>, ApiError> {
    Ok(Json(state.categories.get_all_categories_by_restaurant_id(restaurant_id).await?))
}

/// Body is the new name as plain text.
#[utoipa::path(
    put, path = "/foodCategories/{categoryId}/name", tag = "categories",
    params(("categoryId" = i64, Path, description = "Category ID")),
    request_body(content = String, content_type = "text/plain"),
    responses(
        (status = 200, description = "Renamed"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Name taken", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update_name(State(state): State<ServerState>, PathParam(category_id): PathParam<i64>, name: String) -> Result<Json<FoodCategoryResponse>, ApiError> {
    Ok(Json(state.categories.update_category_name(category_id, name.trim()).await?))
}

#[utoipa::path(
    get, path = "/foodCategories/{categoryId}", tag = "categories",
    params(("categoryId" = i64, Path, description = "Category ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, PathParam(category_id): PathParam<i64>) -> Result<Json<FoodCategoryResponse>, ApiError> {
    Ok(Json(state.categories.get_food_category_by_id(category_id).await?))
}
