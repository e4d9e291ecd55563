//! Static stand-in for the course-service

use async_trait::async_trait;

use crate::domain::ports::{CourseServiceClient, RemoteCourse};
use crate::error::CourseClientError;

/// Names served while the course-service cannot be reached
pub const FALLBACK_NAMES: &[&str] = &["Fallback Name"];

/// Answers from fixed data; course reads report the sibling as unavailable
pub struct FallbackCourseServiceClient;

#[async_trait]
impl CourseServiceClient for FallbackCourseServiceClient {
    async fn list_courses(&self) -> Result<Vec<RemoteCourse>, CourseClientError> {
        Err(CourseClientError::Unavailable(
            "course service is unreachable".to_string(),
        ))
    }

    async fn get_course(&self, id: i32) -> Result<RemoteCourse, CourseClientError> {
        Err(CourseClientError::Unavailable(format!(
            "course service is unreachable, cannot load course {}",
            id
        )))
    }

    async fn list_names(&self) -> Result<Vec<String>, CourseClientError> {
        Ok(FALLBACK_NAMES.iter().map(|n| n.to_string()).collect())
    }
}
