//! Storage helpers for service layer
//!
//! In-memory tables behind the mock repositories, with the same
//! auto-increment and uniqueness behaviour as the database tables.

pub mod memory_table;

pub use memory_table::{same_key, same_name_ignore_case, MemoryTable};
