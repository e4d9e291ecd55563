//! Domain layer
//!
//! Courses, subjects and the ports the services depend on.
//! - `entities`: Course aggregate and subject models
//! - `ports`: Repository and course-service client traits

pub mod entities;
pub mod ports;
