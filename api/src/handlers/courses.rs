//! Course handlers
//!
//! Endpoints for courses and the subjects nested under them.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Course, SubjectDraft, SubjectId};
use crate::error::AppError;
use crate::handlers::subjects::{SubjectRequest, SubjectResponse};
use crate::handlers::{course_id, subject_id};
use crate::AppState;

type Created<T> = (StatusCode, [(header::HeaderName, String); 1], Json<T>);

/// Response body for a course with its subjects
#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub id: i32,
    pub name: String,
    pub subjects: Vec<SubjectResponse>,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id.0,
            name: course.name,
            subjects: course.subjects.into_iter().map(Into::into).collect(),
        }
    }
}

/// Request body for creating or replacing a course
#[derive(Debug, Default, Deserialize)]
pub struct CourseRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub subjects: Option<Vec<SubjectRequest>>,
}

impl CourseRequest {
    /// Subject list as drafts. A missing title becomes blank so the service
    /// rejects it.
    fn drafts(&self) -> Option<Vec<SubjectDraft>> {
        self.subjects.as_ref().map(|subjects| {
            subjects
                .iter()
                .map(|s| SubjectDraft {
                    id: s.id.map(SubjectId),
                    ..SubjectDraft::titled(s.title.clone().unwrap_or_default())
                })
                .collect()
        })
    }
}

/// GET /api/courses
pub async fn list_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseResponse>>, AppError> {
    let courses = state.course_service.list_courses().await?;
    Ok(Json(courses.into_iter().map(Into::into).collect()))
}

/// GET /api/courses/:id
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CourseResponse>, AppError> {
    let course = state.course_service.get_course(&course_id(id)?).await?;
    Ok(Json(course.into()))
}

/// POST /api/courses
///
/// Create a course together with its initial subjects.
pub async fn create_course(
    State(state): State<AppState>,
    payload: Result<Json<CourseRequest>, JsonRejection>,
) -> Result<Created<CourseResponse>, AppError> {
    let Json(request) = payload?;

    let titles = request
        .drafts()
        .unwrap_or_default()
        .into_iter()
        .map(|d| d.title)
        .collect();

    let course = state
        .course_service
        .create_course(request.name.as_deref(), titles)
        .await?;

    let location = format!("/api/courses/{}", course.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(course.into()),
    ))
}

/// PUT /api/courses/:id
///
/// Rename the course and replace its whole subject list. An absent list
/// clears the course's subjects.
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<CourseRequest>, JsonRejection>,
) -> Result<Json<CourseResponse>, AppError> {
    let Json(request) = payload?;

    let course = state
        .course_service
        .update_course(&course_id(id)?, request.name.as_deref(), request.drafts())
        .await?;

    Ok(Json(course.into()))
}

/// DELETE /api/courses/:id
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.course_service.delete_course(&course_id(id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/courses/:id/subjects
pub async fn list_course_subjects(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<SubjectResponse>>, AppError> {
    let subjects = state
        .course_service
        .list_course_subjects(&course_id(id)?)
        .await?;

    Ok(Json(subjects.into_iter().map(Into::into).collect()))
}

/// GET /api/courses/:id/subjects/:subject_id
pub async fn get_course_subject(
    State(state): State<AppState>,
    Path((course_raw, subject_raw)): Path<(i64, i64)>,
) -> Result<Json<SubjectResponse>, AppError> {
    let subject = state
        .course_service
        .get_course_subject(&course_id(course_raw)?, &subject_id(subject_raw)?)
        .await?;

    Ok(Json(subject.into()))
}

/// POST /api/courses/:id/subjects
pub async fn add_subject_to_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<SubjectRequest>, JsonRejection>,
) -> Result<Created<SubjectResponse>, AppError> {
    let Json(request) = payload?;

    let subject = state
        .course_service
        .add_subject_to_course(&course_id(id)?, request.title.as_deref())
        .await?;

    let location = format!("/api/courses/{}/subjects/{}", id, subject.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(subject.into()),
    ))
}

/// PUT /api/courses/:id/subjects/:subject_id
pub async fn update_subject_in_course(
    State(state): State<AppState>,
    Path((course_raw, subject_raw)): Path<(i64, i64)>,
    payload: Result<Json<SubjectRequest>, JsonRejection>,
) -> Result<Json<SubjectResponse>, AppError> {
    let Json(request) = payload?;

    let subject = state
        .course_service
        .update_subject_in_course(
            &course_id(course_raw)?,
            &subject_id(subject_raw)?,
            request.title.as_deref(),
        )
        .await?;

    Ok(Json(subject.into()))
}

/// DELETE /api/courses/:id/subjects/:subject_id
pub async fn delete_subject_in_course(
    State(state): State<AppState>,
    Path((course_raw, subject_raw)): Path<(i64, i64)>,
) -> Result<StatusCode, AppError> {
    state
        .course_service
        .delete_subject_in_course(&course_id(course_raw)?, &subject_id(subject_raw)?)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
