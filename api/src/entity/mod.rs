//! SeaORM entity models
//!
//! Row-level mappings for the tables created by the `migration` crate.

pub mod courses;
pub mod subjects;
