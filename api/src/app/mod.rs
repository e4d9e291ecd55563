//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and repository ports.

pub mod course_service;
pub mod subject_service;
pub mod validation;

pub use course_service::CourseService;
pub use subject_service::SubjectService;
