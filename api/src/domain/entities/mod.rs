//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod course;
pub mod subject;

pub use course::{Course, CourseId, NewCourse, SubjectDraft};
pub use subject::{NewSubject, Subject, SubjectId};
