//! Test utilities
//!
//! In-memory repositories, fixtures and a SQLite test context.
//!
//! Service tests run against the in-memory repositories. Adapter and router
//! tests use `test_db`, which applies the real migrations to an in-memory
//! SQLite database, so the concrete `AppState` can be exercised end to end.

pub mod database;
pub mod fixtures;
pub mod mocks;

pub use database::*;
pub use fixtures::*;
pub use mocks::*;
