//! Sibling course-service port trait
//!
//! Defines the read-only interface to the remote course-service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CourseClientError;

/// Course as returned by the sibling service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteCourse {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub subjects: Vec<RemoteSubject>,
}

/// Subject as returned by the sibling service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteSubject {
    pub id: i32,
    pub title: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseServiceClient: Send + Sync {
    /// GET /api/courses
    async fn list_courses(&self) -> Result<Vec<RemoteCourse>, CourseClientError>;

    /// GET /api/courses/{id}
    async fn get_course(&self, id: i32) -> Result<RemoteCourse, CourseClientError>;

    /// GET /names
    async fn list_names(&self) -> Result<Vec<String>, CourseClientError>;
}
