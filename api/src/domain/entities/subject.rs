//! Subject domain entity

use serde::{Deserialize, Serialize};

use super::course::CourseId;

/// Store-assigned identifier for a subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubjectId(pub i32);

impl From<i32> for SubjectId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for SubjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A subject, optionally attached to the course that owns it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subject {
    pub id: SubjectId,
    pub title: String,
    /// Back-pointer to the owning course, set when the subject is attached.
    /// `None` for subjects created through the standalone path.
    pub course_id: Option<CourseId>,
}

impl Subject {
    pub fn belongs_to(&self, course_id: &CourseId) -> bool {
        self.course_id == Some(*course_id)
    }
}

/// Data needed to create a standalone subject
#[derive(Debug, Clone)]
pub struct NewSubject {
    pub title: String,
}
