//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

use crate::domain::entities::{CourseId, SubjectId};
use crate::error::{AppError, DomainError};

pub mod courses;
pub mod remote;
pub mod subjects;

pub use courses::{
    add_subject_to_course, create_course, delete_course, delete_subject_in_course, get_course,
    get_course_subject, list_course_subjects, list_courses, update_course,
    update_subject_in_course,
};
pub use remote::{remote_course, remote_courses, remote_names};
pub use subjects::{create_subject, delete_subject, get_subject, list_subjects, update_subject};

/// Path ids are read as i64. Anything outside the store's key range can
/// never match a row, so it is reported as not found.
fn path_id(raw: i64, kind: &str) -> Result<i32, AppError> {
    i32::try_from(raw).map_err(|_| {
        AppError::Domain(DomainError::NotFound(format!(
            "{} not found with id: {}",
            kind, raw
        )))
    })
}

pub(crate) fn course_id(raw: i64) -> Result<CourseId, AppError> {
    path_id(raw, "Course").map(CourseId)
}

pub(crate) fn subject_id(raw: i64) -> Result<SubjectId, AppError> {
    path_id(raw, "Subject").map(SubjectId)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_path_ids_convert() {
        assert_eq!(course_id(7).unwrap(), CourseId(7));
        assert_eq!(subject_id(i64::from(i32::MAX)).unwrap(), SubjectId(i32::MAX));
    }

    #[test]
    fn out_of_range_path_ids_are_not_found() {
        for raw in [i64::from(i32::MAX) + 1, i64::MIN] {
            let err = course_id(raw).unwrap_err();
            assert!(matches!(err, AppError::Domain(DomainError::NotFound(_))));
        }
        assert!(subject_id(9_999_999_999).is_err());
    }
}
