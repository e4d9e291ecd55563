//! Courses API Server
//!
//! REST service for managing courses and the subjects they own, plus a
//! resilient read-through client for the sibling course-service.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;
mod startup;

#[cfg(test)]
mod test_utils;


use adapters::{
    FallbackCourseServiceClient, HttpCourseServiceClient, ResilientCourseServiceClient,
    SqlCourseRepository, SqlSubjectRepository,
};
use app::{CourseService, SubjectService};
use config::Config;

/// Course-service client as wired in production
pub type CourseClient =
    ResilientCourseServiceClient<HttpCourseServiceClient, FallbackCourseServiceClient>;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub course_service: Arc<CourseService<SqlCourseRepository, SqlSubjectRepository>>,
    pub subject_service: Arc<SubjectService<SqlSubjectRepository>>,
    pub course_client: Arc<CourseClient>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the HTTP router over the given state
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Courses and their subjects
        .route(
            "/api/courses",
            get(handlers::list_courses).post(handlers::create_course),
        )
        .route(
            "/api/courses/:id",
            get(handlers::get_course)
                .put(handlers::update_course)
                .delete(handlers::delete_course),
        )
        .route(
            "/api/courses/:id/subjects",
            get(handlers::list_course_subjects).post(handlers::add_subject_to_course),
        )
        .route(
            "/api/courses/:id/subjects/:subject_id",
            get(handlers::get_course_subject)
                .put(handlers::update_subject_in_course)
                .delete(handlers::delete_subject_in_course),
        )
        // Standalone subjects
        .route(
            "/api/subjects",
            get(handlers::list_subjects).post(handlers::create_subject),
        )
        .route(
            "/api/subjects/:id",
            get(handlers::get_subject)
                .put(handlers::update_subject)
                .delete(handlers::delete_subject),
        )
        // Sibling course-service proxy
        .route("/api/feign-test/courses", get(handlers::remote_courses))
        .route("/api/feign-test/courses/:id", get(handlers::remote_course))
        .route("/api/feign-test/names", get(handlers::remote_names))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,courses_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Courses API...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to the database
    tracing::info!("Connecting to database...");
    let db = startup::connect_to_database(&config).await?;
    tracing::info!("Database connected");

    // Create adapters
    let course_repo = Arc::new(SqlCourseRepository::new(db.clone()));
    let subject_repo = Arc::new(SqlSubjectRepository::new(db.clone()));

    let course_client = Arc::new(ResilientCourseServiceClient::new(
        Arc::new(HttpCourseServiceClient::new(
            config.course_service_url.clone(),
            config.course_service_timeout,
        )?),
        Arc::new(FallbackCourseServiceClient),
        config.course_service_failure_threshold,
        config.course_service_open_for,
    ));

    // Create application services
    let course_service = Arc::new(CourseService::new(
        course_repo.clone(),
        subject_repo.clone(),
    ));
    let subject_service = Arc::new(SubjectService::new(subject_repo.clone()));

    // Create app state
    let state = AppState {
        course_service,
        subject_service,
        course_client,
    };

    let app = build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
