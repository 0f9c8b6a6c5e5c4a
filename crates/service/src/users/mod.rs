//! Users area: accounts and delivery addresses.

pub mod domain;
pub mod conversion;
pub mod repository;
pub mod repo;
pub mod user_service;
pub mod address_service;

pub use address_service::AddressService;
pub use user_service::UserService;
