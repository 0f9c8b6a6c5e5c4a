use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(Serialize, ToSchema)]
pub struct ErrorDoc { pub status: u16, pub message: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoodCategoryRequestDoc { pub restaurant_id: i64, pub category_name: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoodItemRequestDoc {
    pub item_name: String,
    pub price: f64,
    pub description: Option<String>,
    pub veg_non_veg: Option<bool>,
    pub category_id: Option<i64>,
    pub restaurant_id: i64,
    /// Base64 JPEG, add only
    pub image: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantRequestDoc {
    pub user_id: i64,
    pub restaurant_name: String,
    pub restaurant_address: Option<String>,
    pub contact_number: Option<String>,
    pub restaurant_description: Option<String>,
    pub opening_hour: Option<String>,
    /// Base64 JPEG, add only
    pub image: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRequestDoc {
    pub user_name: Option<String>,
    pub user_password: Option<String>,
    pub phone_number: Option<String>,
    pub user_email: String,
    pub user_role: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressRequestDoc {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<i32>,
    pub country: Option<String>,
    pub user_id: i64,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::categories::add,
        crate::routes::categories::delete,
        crate::routes::categories::list_by_restaurant,
        crate::routes::categories::update_name,
        crate::routes::categories::get,
        crate::routes::menu::add,
        crate::routes::menu::list_by_restaurant,
        crate::routes::menu::list_by_category,
        crate::routes::menu::get,
        crate::routes::menu::image,
        crate::routes::menu::update,
        crate::routes::menu::delete,
        crate::routes::restaurants::add,
        crate::routes::restaurants::get,
        crate::routes::restaurants::list_by_user,
        crate::routes::restaurants::image,
        crate::routes::restaurants::update,
        crate::routes::restaurants::delete,
        crate::routes::users::add,
        crate::routes::users::get,
        crate::routes::users::update,
        crate::routes::users::delete,
        crate::routes::addresses::add,
        crate::routes::addresses::list_by_user,
        crate::routes::addresses::update,
        crate::routes::addresses::delete,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            ErrorDoc,
            FoodCategoryRequestDoc,
            FoodItemRequestDoc,
            RestaurantRequestDoc,
            UserRequestDoc,
            AddressRequestDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "categories"),
        (name = "menu"),
        (name = "restaurants"),
        (name = "users"),
        (name = "addresses")
    )
)]
pub struct ApiDoc;
