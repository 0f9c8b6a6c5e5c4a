//! Restaurants area: food categories, menu items and restaurants.
//!
//! Same three layers as the users area: domain DTOs/entities, repository
//! traits (SeaORM and in-memory), and the workflow services.

pub mod domain;
pub mod conversion;
pub mod repository;
pub mod repo;
pub mod category_service;
pub mod menu_service;
pub mod restaurant_service;

pub use category_service::FoodCategoryService;
pub use menu_service::RestaurantMenuService;
pub use restaurant_service::RestaurantService;
