//! SeaORM entities for the food delivery services plus the shared
//! database connector.

pub mod db;
pub mod filters;
pub mod food_category;
pub mod restaurant_menu;
pub mod restaurant;
pub mod user;
pub mod address;

#[cfg(test)]
mod tests;
