use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use common::types::SuccessResponse;
use service::messages;
use service::users::domain::{UserRequest, UserResponse};
use tracing::info;

use crate::errors::ApiError;
use crate::extract::{JsonBody, PathParam};
use crate::state::ServerState;

#[utoipa::path(
    post, path = "/users/add", tag = "users",
    request_body = crate::openapi::UserRequestDoc,
    responses(
        (status = 201, description = "Added", body = crate::openapi::MessageDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Email already exists", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn add(State(state): State<ServerState>, JsonBody(input): JsonBody<UserRequest>) -> Result<(StatusCode, Json<SuccessResponse>), ApiError> {
    let created = state.users.add_user(input).await?;
    info!(user_id = ?created.user_id, "user_added");
    Ok((StatusCode::CREATED, Json(SuccessResponse::new(messages::USER_ADD_SUCCESS))))
}

#[utoipa::path(
    get, path = "/users/{userId}", tag = "users",
    params(("userId" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, PathParam(user_id): PathParam<i64>) -> Result<Json<UserResponse>, ApiError> {
    Ok(Json(state.users.get_user_by_id(user_id).await?))
}

#[utoipa::path(
    put, path = "/users/update/{userId}", tag = "users",
    params(("userId" = i64, Path, description = "User ID")),
    request_body = crate::openapi::UserRequestDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Email already exists", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(State(state): State<ServerState>, PathParam(user_id): PathParam<i64>, JsonBody(input): JsonBody<UserRequest>) -> Result<Json<UserResponse>, ApiError> {
    Ok(Json(state.users.update_user(user_id, input).await?))
}

#[utoipa::path(
    delete, path = "/users/delete/{userId}", tag = "users",
    params(("userId" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "Deleted", body = String, content_type = "text/plain"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<ServerState>, PathParam(user_id): PathParam<i64>) -> Result<&'static str, ApiError> {
    state.users.delete_user(user_id).await?;
    Ok(messages::USER_DELETE_SUCCESS)
}
