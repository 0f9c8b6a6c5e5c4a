use axum::{
    http::header,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;
use service::{errors::ServiceError, messages};

use crate::errors::ApiError;
use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod addresses;
pub mod categories;
pub mod menu;
pub mod restaurants;
pub mod users;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Optional base64 image field from a JSON body.
pub(crate) fn decode_image(image: Option<String>) -> Result<Option<Vec<u8>>, ApiError> {
    match image.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(b64) => STANDARD
            .decode(b64)
            .map(Some)
            .map_err(|_| ApiError(ServiceError::Validation(messages::INVALID_IMAGE.into()))),
    }
}

pub(crate) fn jpeg(bytes: Vec<u8>) -> Response {
    ([(header::CONTENT_TYPE, "image/jpeg")], bytes).into_response()
}

/// Build the full application router
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let categories = Router::new()
        .route("/foodCategories/add", post(categories::add))
        .route("/foodCategories/delete/:categoryId", delete(categories::delete))
        .route("/foodCategories/restaurant/:restaurantId", get(categories::list_by_restaurant))
        .route("/foodCategories/:categoryId/name", put(categories::update_name))
        .route("/foodCategories/:categoryId", get(categories::get));

    let menu = Router::new()
        .route("/foodItems/add", post(menu::add))
        .route("/foodItems/getFoodItems/:restaurantId", get(menu::list_by_restaurant))
        .route("/foodItems/category/:categoryId", get(menu::list_by_category))
        .route("/foodItems/update/:foodItemId", put(menu::update))
        .route("/foodItems/delete/:foodItemId", delete(menu::delete))
        .route("/foodItems/:foodItemId/image", get(menu::image))
        .route("/foodItems/:foodItemId", get(menu::get));

    let restaurants = Router::new()
        .route("/restaurants/add", post(restaurants::add))
        .route("/restaurants/user/:userId", get(restaurants::list_by_user))
        .route("/restaurants/update/:restaurantId", put(restaurants::update))
        .route("/restaurants/delete/:restaurantId", delete(restaurants::delete))
        .route("/restaurants/:restaurantId/image", get(restaurants::image))
        .route("/restaurants/:restaurantId", get(restaurants::get));

    let users = Router::new()
        .route("/users/add", post(users::add))
        .route("/users/update/:userId", put(users::update))
        .route("/users/delete/:userId", delete(users::delete))
        .route("/users/:userId", get(users::get))
        .route("/addresses/add", post(addresses::add))
        .route("/addresses/user/:userId", get(addresses::list_by_user))
        .route("/addresses/update/:addressId", put(addresses::update))
        .route("/addresses/delete/:addressId", delete(addresses::delete));

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(categories)
        .merge(menu)
        .merge(restaurants)
        .merge(users)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_image_is_absent() {
        assert_eq!(decode_image(None).unwrap(), None);
        assert_eq!(decode_image(Some("  ".into())).unwrap(), None);
        assert_eq!(decode_image(Some("/9g=".into())).unwrap(), Some(vec![0xff, 0xd8]));
    }

    #[test]
    fn malformed_image_is_a_bad_request() {
        let err = decode_image(Some("not base64!".into())).unwrap_err();
        assert_eq!(err.status(), axum::http::StatusCode::BAD_REQUEST);
    }
}
