//! Subject service
//!
//! CRUD over subjects addressed directly rather than through a course.
//! Subjects created here are not attached to any course.

use std::sync::Arc;

use crate::app::validation::{require_text, SUBJECT_TITLE_REQUIRED};
use crate::domain::entities::{NewSubject, Subject, SubjectId};
use crate::domain::ports::SubjectRepository;
use crate::error::{AppError, DomainError};

/// Service for standalone subject management
pub struct SubjectService<SR: SubjectRepository> {
    subjects: Arc<SR>,
}

fn subject_not_found(id: &SubjectId) -> AppError {
    AppError::Domain(DomainError::NotFound(format!(
        "Subject not found with id: {}",
        id
    )))
}

fn title_taken(title: &str) -> AppError {
    AppError::Domain(DomainError::Conflict(format!(
        "Subject with title '{}' already exists",
        title
    )))
}

impl<SR: SubjectRepository> SubjectService<SR> {
    pub fn new(subjects: Arc<SR>) -> Self {
        Self { subjects }
    }

    /// List every subject, attached or not
    pub async fn list_subjects(&self) -> Result<Vec<Subject>, AppError> {
        Ok(self.subjects.find_all().await?)
    }

    /// Get a subject by ID
    pub async fn get_subject(&self, id: &SubjectId) -> Result<Subject, AppError> {
        self.subjects
            .find_by_id(id)
            .await?
            .ok_or_else(|| subject_not_found(id))
    }

    /// Create an unattached subject. Titles must be unique on this path.
    pub async fn create_subject(&self, title: Option<&str>) -> Result<Subject, AppError> {
        let title = require_text(title, SUBJECT_TITLE_REQUIRED)?;

        if self.subjects.find_by_title(&title).await?.is_some() {
            return Err(title_taken(&title));
        }

        let subject = self.subjects.create(&NewSubject { title }).await?;
        tracing::info!(subject_id = %subject.id, title = %subject.title, "Created subject");

        Ok(subject)
    }

    /// Rename a subject. Its course attachment is left as is, and the new
    /// title may not be held by any other subject.
    pub async fn update_subject(
        &self,
        id: &SubjectId,
        title: Option<&str>,
    ) -> Result<Subject, AppError> {
        let title = require_text(title, SUBJECT_TITLE_REQUIRED)?;

        if self.subjects.find_by_id(id).await?.is_none() {
            return Err(subject_not_found(id));
        }

        if let Some(existing) = self.subjects.find_by_title(&title).await? {
            if existing.id != *id {
                return Err(title_taken(&title));
            }
        }

        Ok(self.subjects.update_title(id, &title).await?)
    }

    /// Delete a subject
    pub async fn delete_subject(&self, id: &SubjectId) -> Result<(), AppError> {
        if self.subjects.find_by_id(id).await?.is_none() {
            return Err(subject_not_found(id));
        }

        self.subjects.delete(id).await?;
        tracing::info!(subject_id = %id, "Deleted subject");

        Ok(())
    }
}
