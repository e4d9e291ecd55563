//! Course-service proxy handlers
//!
//! Diagnostic endpoints that read through the sibling course-service client,
//! used to check connectivity and the fallback path.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::domain::ports::{CourseServiceClient, RemoteCourse};
use crate::error::AppError;
use crate::handlers::course_id;
use crate::AppState;

/// GET /api/feign-test/courses
pub async fn remote_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<RemoteCourse>>, AppError> {
    Ok(Json(state.course_client.list_courses().await?))
}

/// GET /api/feign-test/courses/:id
pub async fn remote_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<RemoteCourse>, AppError> {
    Ok(Json(state.course_client.get_course(course_id(id)?.0).await?))
}

/// GET /api/feign-test/names
///
/// Falls back to a fixed list when the sibling is down.
pub async fn remote_names(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    Ok(Json(state.course_client.list_names().await?))
}
