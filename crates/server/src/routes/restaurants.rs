use axum::{
    extract::State,
    http::StatusCode,
    response::Response,
    Json,
};
use common::types::SuccessResponse;
use serde::Deserialize;
use service::messages;
use service::restaurants::domain::{RestaurantRequest, RestaurantResponse};
use tracing::info;

use super::{decode_image, jpeg};
use crate::errors::ApiError;
use crate::extract::{JsonBody, PathParam};
use crate::state::ServerState;

#[derive(Debug, Deserialize)]
pub struct AddRestaurantBody {
    #[serde(flatten)]
    pub restaurant: RestaurantRequest,
    #[serde(default)]
    pub image: Option<String>,
}

#[utoipa::path(
    post, path = "/restaurants/add", tag = "restaurants",
    request_body = crate::openapi::RestaurantRequestDoc,
    responses(
        (status = 201, description = "Added", body = crate::openapi::MessageDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Restaurant already exists", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn add(State(state): State<ServerState>, JsonBody(body): JsonBody<AddRestaurantBody>) -> Result<(StatusCode, Json<SuccessResponse>), ApiError> {
    let image = decode_image(body.image)?;
    let created = state.restaurants.add_restaurant(body.restaurant, image).await?;
    info!(restaurant_id = ?created.restaurant_id, "restaurant_added");
    Ok((StatusCode::CREATED, Json(SuccessResponse::new(messages::RESTAURANT_ADD_SUCCESS))))
}

#[utoipa::path(
    get, path = "/restaurants/{restaurantId}", tag = "restaurants",
    params(("restaurantId" = i64, Path, description = "Restaurant ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, PathParam(restaurant_id): PathParam<i64>) -> Result<Json<RestaurantResponse>, ApiError> {
    Ok(Json(state.restaurants.get_restaurant_by_id(restaurant_id).await?))
}

#[utoipa::path(
    get, path = "/restaurants/user/{userId}", tag = "restaurants",
    params(("userId" = i64, Path, description = "Owner user ID")),
    responses((status = 200, description = "Restaurants of the owner"))
)]
pub async fn list_by_user(State(state): State<ServerState>, PathParam(user_id): PathParam<i64>) -> Result<Json<Vec<RestaurantResponse>>, ApiError> {
    Ok(Json(state.restaurants.get_restaurants_by_user_id(user_id).await?))
}

#[utoipa::path(
    get, path = "/restaurants/{restaurantId}/image", tag = "restaurants",
    params(("restaurantId" = i64, Path, description = "Restaurant ID")),
    responses(
        (status = 200, description = "JPEG bytes"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn image(State(state): State<ServerState>, PathParam(restaurant_id): PathParam<i64>) -> Result<Response, ApiError> {
    Ok(jpeg(state.restaurants.get_restaurant_image(restaurant_id).await?))
}

#[utoipa::path(
    put, path = "/restaurants/update/{restaurantId}", tag = "restaurants",
    params(("restaurantId" = i64, Path, description = "Restaurant ID")),
    request_body = crate::openapi::RestaurantRequestDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Name taken", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(State(state): State<ServerState>, PathParam(restaurant_id): PathParam<i64>, JsonBody(input): JsonBody<RestaurantRequest>) -> Result<Json<RestaurantResponse>, ApiError> {
    Ok(Json(state.restaurants.update_restaurant(restaurant_id, input).await?))
}

#[utoipa::path(
    delete, path = "/restaurants/delete/{restaurantId}", tag = "restaurants",
    params(("restaurantId" = i64, Path, description = "Restaurant ID")),
    responses(
        (status = 200, description = "Deleted", body = String, content_type = "text/plain"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<ServerState>, PathParam(restaurant_id): PathParam<i64>) -> Result<&'static str, ApiError> {
    state.restaurants.delete_restaurant(restaurant_id).await?;
    Ok(messages::RESTAURANT_DELETE_SUCCESS)
}
