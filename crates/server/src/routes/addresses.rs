use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use common::types::SuccessResponse;
use service::messages;
use service::users::domain::{AddressRequest, AddressResponse};
use tracing::info;

use crate::errors::ApiError;
use crate::extract::{JsonBody, PathParam};
use crate::state::ServerState;

#[utoipa::path(
    post, path = "/addresses/add", tag = "addresses",
    request_body = crate::openapi::AddressRequestDoc,
    responses(
        (status = 201, description = "Added", body = crate::openapi::MessageDoc),
        (status = 404, description = "User not found", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Address already exists", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn add(State(state): State<ServerState>, JsonBody(input): JsonBody<AddressRequest>) -> Result<(StatusCode, Json<SuccessResponse>), ApiError> {
    let created = state.addresses.add_address(input).await?;
    info!(address_id = ?created.address_id, "address_added");
    Ok((StatusCode::CREATED, Json(SuccessResponse::new(messages::ADDRESS_ADD_SUCCESS))))
}

#[utoipa::path(
    get, path = "/addresses/user/{userId}", tag = "addresses",
    params(("userId" = i64, Path, description = "User ID")),
    responses((status = 200, description = "Addresses of the user"))
)]
pub async fn list_by_user(State(state): State<ServerState>, PathParam(user_id): PathParam<i64>) -> Result<Json<Vec<AddressResponse>>, ApiError> {
    Ok(Json(state.addresses.get_addresses_by_user_id(user_id).await?))
}

#[utoipa::path(
    put, path = "/addresses/update/{addressId}", tag = "addresses",
    params(("addressId" = i64, Path, description = "Address ID")),
    request_body = crate::openapi::AddressRequestDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(State(state): State<ServerState>, PathParam(address_id): PathParam<i64>, JsonBody(input): JsonBody<AddressRequest>) -> Result<Json<AddressResponse>, ApiError> {
    Ok(Json(state.addresses.update_address(address_id, input).await?))
}

#[utoipa::path(
    delete, path = "/addresses/delete/{addressId}", tag = "addresses",
    params(("addressId" = i64, Path, description = "Address ID")),
    responses(
        (status = 200, description = "Deleted", body = String, content_type = "text/plain"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<ServerState>, PathParam(address_id): PathParam<i64>) -> Result<&'static str, ApiError> {
    state.addresses.delete_address(address_id).await?;
    Ok(messages::ADDRESS_DELETE_SUCCESS)
}
