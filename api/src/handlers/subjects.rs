//! Subject handlers
//!
//! Endpoints for subjects addressed on their own, outside any course.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Subject;
use crate::error::AppError;
use crate::handlers::subject_id;
use crate::AppState;

/// Response body for a subject
#[derive(Debug, Serialize)]
pub struct SubjectResponse {
    pub id: i32,
    pub title: String,
    /// Owning course, null for standalone subjects
    pub course_id: Option<i32>,
}

impl From<Subject> for SubjectResponse {
    fn from(subject: Subject) -> Self {
        Self {
            id: subject.id.0,
            title: subject.title,
            course_id: subject.course_id.map(|c| c.0),
        }
    }
}

/// Request body for creating or renaming a subject
#[derive(Debug, Default, Deserialize)]
pub struct SubjectRequest {
    /// Set when a course update wants to keep an existing subject
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub title: Option<String>,
}

/// GET /api/subjects
pub async fn list_subjects(
    State(state): State<AppState>,
) -> Result<Json<Vec<SubjectResponse>>, AppError> {
    let subjects = state.subject_service.list_subjects().await?;
    Ok(Json(subjects.into_iter().map(Into::into).collect()))
}

/// GET /api/subjects/:id
pub async fn get_subject(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<SubjectResponse>, AppError> {
    let subject = state.subject_service.get_subject(&subject_id(id)?).await?;
    Ok(Json(subject.into()))
}

/// POST /api/subjects
///
/// Create a subject that belongs to no course.
pub async fn create_subject(
    State(state): State<AppState>,
    payload: Result<Json<SubjectRequest>, JsonRejection>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<SubjectResponse>), AppError> {
    let Json(request) = payload?;

    let subject = state
        .subject_service
        .create_subject(request.title.as_deref())
        .await?;

    let location = format!("/api/subjects/{}", subject.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(subject.into()),
    ))
}

/// PUT /api/subjects/:id
pub async fn update_subject(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<SubjectRequest>, JsonRejection>,
) -> Result<Json<SubjectResponse>, AppError> {
    let Json(request) = payload?;

    let subject = state
        .subject_service
        .update_subject(&subject_id(id)?, request.title.as_deref())
        .await?;

    Ok(Json(subject.into()))
}

/// DELETE /api/subjects/:id
pub async fn delete_subject(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.subject_service.delete_subject(&subject_id(id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
