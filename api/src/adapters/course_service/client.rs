//! HTTP client for the sibling course-service

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::ports::{CourseServiceClient, RemoteCourse};
use crate::error::CourseClientError;

/// Live implementation of the course-service client
pub struct HttpCourseServiceClient {
    http: Client,
    base_url: String,
}

impl HttpCourseServiceClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, CourseClientError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, path: &str) -> Result<T, CourseClientError> {
        let url = self.url(path);
        tracing::debug!(%url, "Calling course service");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| CourseClientError::Deserialization(e.to_string()))
        } else if status.as_u16() == 503 {
            Err(CourseClientError::Unavailable(format!(
                "{} answered 503",
                self.base_url
            )))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(CourseClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl CourseServiceClient for HttpCourseServiceClient {
    async fn list_courses(&self) -> Result<Vec<RemoteCourse>, CourseClientError> {
        self.get_json("/api/courses").await
    }

    async fn get_course(&self, id: i32) -> Result<RemoteCourse, CourseClientError> {
        self.get_json(&format!("/api/courses/{}", id)).await
    }

    async fn list_names(&self) -> Result<Vec<String>, CourseClientError> {
        self.get_json("/names").await
    }
}
