//! SQL adapters
//!
//! Implementations of repository traits using SeaORM. Production runs on
//! PostgreSQL; the adapter tests run the same code against in-memory SQLite.

pub mod course_repo;
pub mod subject_repo;


pub use course_repo::SqlCourseRepository;
pub use subject_repo::SqlSubjectRepository;
