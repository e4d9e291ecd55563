//! Course service
//!
//! Manages Course aggregates: the course record plus the subjects it owns.
//! Name uniqueness is checked here; creation, list replacement and deletion
//! cascade to the child subjects. Writes reject blank input before looking
//! anything up, so a blank field is reported ahead of a missing id.

use std::sync::Arc;

use crate::app::validation::{require_text, COURSE_NAME_REQUIRED, SUBJECT_TITLE_REQUIRED};
use crate::domain::entities::{Course, CourseId, NewCourse, Subject, SubjectDraft, SubjectId};
use crate::domain::ports::{CourseRepository, SubjectRepository};
use crate::error::{AppError, DomainError};

/// Service for managing courses and their subjects
pub struct CourseService<CR, SR>
where
    CR: CourseRepository,
    SR: SubjectRepository,
{
    courses: Arc<CR>,
    subjects: Arc<SR>,
}

fn course_not_found(id: &CourseId) -> AppError {
    AppError::Domain(DomainError::NotFound(format!(
        "Course not found with id: {}",
        id
    )))
}

fn subject_not_found(course_id: &CourseId, subject_id: &SubjectId) -> AppError {
    AppError::Domain(DomainError::NotFound(format!(
        "Subject not found with id: {} for course id: {}",
        subject_id, course_id
    )))
}

fn name_taken(name: &str) -> AppError {
    AppError::Domain(DomainError::Conflict(format!(
        "Course with name '{}' already exists",
        name
    )))
}

impl<CR, SR> CourseService<CR, SR>
where
    CR: CourseRepository,
    SR: SubjectRepository,
{
    pub fn new(courses: Arc<CR>, subjects: Arc<SR>) -> Self {
        Self { courses, subjects }
    }

    /// List all courses with their subjects
    pub async fn list_courses(&self) -> Result<Vec<Course>, AppError> {
        Ok(self.courses.find_all().await?)
    }

    /// Get a course by ID
    pub async fn get_course(&self, id: &CourseId) -> Result<Course, AppError> {
        self.courses
            .find_by_id(id)
            .await?
            .ok_or_else(|| course_not_found(id))
    }

    /// List the subjects owned by a course
    pub async fn list_course_subjects(&self, course_id: &CourseId) -> Result<Vec<Subject>, AppError> {
        if !self.courses.exists(course_id).await? {
            return Err(course_not_found(course_id));
        }

        Ok(self.subjects.find_by_course(course_id).await?)
    }

    /// Get one subject of a course.
    ///
    /// A subject that exists but belongs to another course is reported as
    /// not found.
    pub async fn get_course_subject(
        &self,
        course_id: &CourseId,
        subject_id: &SubjectId,
    ) -> Result<Subject, AppError> {
        self.get_course(course_id)
            .await?
            .subject(subject_id)
            .cloned()
            .ok_or_else(|| subject_not_found(course_id, subject_id))
    }

    /// Create a course with an initial list of subject titles
    pub async fn create_course(
        &self,
        name: Option<&str>,
        subject_titles: Vec<String>,
    ) -> Result<Course, AppError> {
        let name = require_text(name, COURSE_NAME_REQUIRED)?;
        for title in &subject_titles {
            require_text(Some(title), SUBJECT_TITLE_REQUIRED)?;
        }

        if self.courses.find_by_name(&name).await?.is_some() {
            return Err(name_taken(&name));
        }

        let course = self
            .courses
            .create(&NewCourse {
                name,
                subject_titles,
            })
            .await?;

        tracing::info!(
            course_id = %course.id,
            name = %course.name,
            subjects = course.subjects.len(),
            "Created course"
        );

        Ok(course)
    }

    /// Rename a course and replace its subject list.
    ///
    /// This is a destructive replace: subjects not carried over by id are
    /// deleted, and `None` or an empty list leaves the course with no
    /// subjects.
    pub async fn update_course(
        &self,
        id: &CourseId,
        name: Option<&str>,
        subjects: Option<Vec<SubjectDraft>>,
    ) -> Result<Course, AppError> {
        let name = require_text(name, COURSE_NAME_REQUIRED)?;
        let drafts = subjects.unwrap_or_default();
        for draft in &drafts {
            require_text(Some(&draft.title), SUBJECT_TITLE_REQUIRED)?;
        }

        if !self.courses.exists(id).await? {
            return Err(course_not_found(id));
        }

        if let Some(existing) = self.courses.find_by_name(&name).await? {
            if existing.id != *id {
                return Err(name_taken(&name));
            }
        }

        let course = self.courses.replace(id, &name, &drafts).await?;

        tracing::info!(
            course_id = %course.id,
            name = %course.name,
            subjects = course.subjects.len(),
            "Updated course"
        );

        Ok(course)
    }

    /// Attach a new subject to a course.
    ///
    /// Title uniqueness is not enforced on this path, unlike the standalone
    /// subject service. A duplicate is logged and allowed.
    pub async fn add_subject_to_course(
        &self,
        course_id: &CourseId,
        title: Option<&str>,
    ) -> Result<Subject, AppError> {
        let title = require_text(title, SUBJECT_TITLE_REQUIRED)?;

        if !self.courses.exists(course_id).await? {
            return Err(course_not_found(course_id));
        }

        if let Some(existing) = self.subjects.find_by_title(&title).await? {
            tracing::warn!(
                course_id = %course_id,
                existing_subject_id = %existing.id,
                title = %title,
                "Attaching subject whose title is already in use"
            );
        }

        let subject = self.courses.attach_subject(course_id, &title).await?;

        tracing::info!(course_id = %course_id, subject_id = %subject.id, "Added subject to course");

        Ok(subject)
    }

    /// Rename one subject of a course
    pub async fn update_subject_in_course(
        &self,
        course_id: &CourseId,
        subject_id: &SubjectId,
        title: Option<&str>,
    ) -> Result<Subject, AppError> {
        let title = require_text(title, SUBJECT_TITLE_REQUIRED)?;

        let course = self.get_course(course_id).await?;
        if course.subject(subject_id).is_none() {
            return Err(subject_not_found(course_id, subject_id));
        }

        Ok(self.subjects.update_title(subject_id, &title).await?)
    }

    /// Delete a course and all of its subjects
    pub async fn delete_course(&self, id: &CourseId) -> Result<(), AppError> {
        if !self.courses.exists(id).await? {
            return Err(course_not_found(id));
        }

        self.courses.delete(id).await?;
        tracing::info!(course_id = %id, "Deleted course");

        Ok(())
    }

    /// Remove one subject from a course
    pub async fn delete_subject_in_course(
        &self,
        course_id: &CourseId,
        subject_id: &SubjectId,
    ) -> Result<(), AppError> {
        if !self.courses.exists(course_id).await? {
            return Err(course_not_found(course_id));
        }

        if !self.courses.detach_subject(course_id, subject_id).await? {
            return Err(subject_not_found(course_id, subject_id));
        }

        tracing::info!(course_id = %course_id, subject_id = %subject_id, "Removed subject from course");

        Ok(())
    }
}
