//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., the SeaORM SQL adapter).

use async_trait::async_trait;

use crate::domain::entities::{
    Course, CourseId, NewCourse, NewSubject, Subject, SubjectDraft, SubjectId,
};
use crate::error::DomainError;

/// Repository for Course aggregates
///
/// Every method that returns a `Course` returns it with its subjects loaded.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// List all courses in store order
    async fn find_all(&self) -> Result<Vec<Course>, DomainError>;

    /// Find a course by ID
    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, DomainError>;

    /// Find a course by its exact name
    async fn find_by_name(&self, name: &str) -> Result<Option<Course>, DomainError>;

    /// Check whether a course exists
    async fn exists(&self, id: &CourseId) -> Result<bool, DomainError>;

    /// Persist a new course and attach its initial subjects
    async fn create(&self, course: &NewCourse) -> Result<Course, DomainError>;

    /// Rename a course and replace its subject list.
    ///
    /// Subjects not matched by a draft id are deleted.
    async fn replace(
        &self,
        id: &CourseId,
        name: &str,
        subjects: &[SubjectDraft],
    ) -> Result<Course, DomainError>;

    /// Attach a new subject to the course
    async fn attach_subject(&self, id: &CourseId, title: &str) -> Result<Subject, DomainError>;

    /// Remove one subject from the course.
    ///
    /// Returns false when the course holds no subject with that id.
    async fn detach_subject(
        &self,
        id: &CourseId,
        subject_id: &SubjectId,
    ) -> Result<bool, DomainError>;

    /// Delete a course together with all of its subjects
    async fn delete(&self, id: &CourseId) -> Result<(), DomainError>;
}

/// Repository for Subject records accessed on their own
#[async_trait]
pub trait SubjectRepository: Send + Sync {
    /// List all subjects in store order
    async fn find_all(&self) -> Result<Vec<Subject>, DomainError>;

    /// Find a subject by ID
    async fn find_by_id(&self, id: &SubjectId) -> Result<Option<Subject>, DomainError>;

    /// Find the first subject with this exact title
    async fn find_by_title(&self, title: &str) -> Result<Option<Subject>, DomainError>;

    /// List the subjects attached to a course
    async fn find_by_course(&self, course_id: &CourseId) -> Result<Vec<Subject>, DomainError>;

    /// Create a standalone subject
    async fn create(&self, subject: &NewSubject) -> Result<Subject, DomainError>;

    /// Rewrite a subject's title, leaving its course attachment untouched
    async fn update_title(&self, id: &SubjectId, title: &str) -> Result<Subject, DomainError>;

    /// Delete a subject
    async fn delete(&self, id: &SubjectId) -> Result<(), DomainError>;
}
