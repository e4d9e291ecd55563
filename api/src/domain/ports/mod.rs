//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod course_service;
pub mod repositories;

#[cfg(test)]
pub use course_service::MockCourseServiceClient;
pub use course_service::{CourseServiceClient, RemoteCourse};
pub use repositories::{CourseRepository, SubjectRepository};
