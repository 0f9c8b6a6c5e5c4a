//! Service layer for the food delivery backend.
//! - Workflows validate, convert, persist and convert back.
//! - Persistence sits behind repository traits with SeaORM and in-memory implementations.
//! - Errors are classified into not-found, already-exists, validation and database faults.

pub mod errors;
pub mod messages;
pub mod password;
pub mod restaurants;
pub mod users;
pub mod storage;
#[cfg(test)]
pub mod test_support;
