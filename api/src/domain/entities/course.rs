//! Course domain entity
//!
//! A course is an aggregate: it owns its subjects and is updated as one unit.

use serde::{Deserialize, Serialize};

use super::subject::{Subject, SubjectId};

/// Store-assigned identifier for a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CourseId(pub i32);

impl From<i32> for CourseId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A course together with the subjects it owns
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    /// Owned subjects, ordered by id. Each carries `course_id == Some(self.id)`.
    pub subjects: Vec<Subject>,
}

impl Course {
    /// Look up one of this course's subjects
    pub fn subject(&self, id: &SubjectId) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == *id)
    }
}

/// Data needed to create a new course and its initial subjects
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub name: String,
    pub subject_titles: Vec<String>,
}

/// One entry of a replacement subject list.
///
/// An entry whose `id` matches a subject the course already owns keeps that
/// row (its title is rewritten). Every other entry becomes a new subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectDraft {
    pub id: Option<SubjectId>,
    pub title: String,
}

impl SubjectDraft {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
        }
    }
}
