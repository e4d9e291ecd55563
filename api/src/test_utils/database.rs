//! SQLite-backed test context
//!
//! Each call gives a fresh in-memory database with the production
//! migrations applied, so SQL adapter and router tests run against the real
//! schema.

use std::sync::Arc;
use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::adapters::{
    FallbackCourseServiceClient, HttpCourseServiceClient, ResilientCourseServiceClient,
    SqlCourseRepository, SqlSubjectRepository,
};
use crate::app::{CourseService, SubjectService};
use crate::AppState;

/// Nothing listens on this port, so every call is refused
pub const UNREACHABLE_COURSE_SERVICE: &str = "http://127.0.0.1:1";

/// Open a migrated in-memory SQLite database.
///
/// The pool is pinned to one connection because every new connection to
/// `sqlite::memory:` would see its own empty database.
pub async fn test_db() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(opt).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

/// Application state over the given database, with the course-service client
/// pointed at an address that refuses connections
pub fn test_state(db: DatabaseConnection) -> AppState {
    let course_repo = Arc::new(SqlCourseRepository::new(db.clone()));
    let subject_repo = Arc::new(SqlSubjectRepository::new(db));

    let http = HttpCourseServiceClient::new(
        UNREACHABLE_COURSE_SERVICE.to_string(),
        Duration::from_secs(1),
    )
    .unwrap();

    AppState {
        course_service: Arc::new(CourseService::new(course_repo, subject_repo.clone())),
        subject_service: Arc::new(SubjectService::new(subject_repo)),
        course_client: Arc::new(ResilientCourseServiceClient::new(
            Arc::new(http),
            Arc::new(FallbackCourseServiceClient),
            3,
            Duration::from_secs(30),
        )),
    }
}
