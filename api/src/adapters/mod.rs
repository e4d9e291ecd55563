//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod course_service;
pub mod sql;

pub use course_service::{
    FallbackCourseServiceClient, HttpCourseServiceClient, ResilientCourseServiceClient,
};
pub use sql::{SqlCourseRepository, SqlSubjectRepository};
