//! Course-service adapter
//!
//! Live HTTP client for the sibling course-service, its static fallback and
//! the breaker that chooses between them.

pub mod client;
pub mod fallback;
pub mod resilient;

pub use client::HttpCourseServiceClient;
pub use fallback::FallbackCourseServiceClient;
pub use resilient::ResilientCourseServiceClient;
