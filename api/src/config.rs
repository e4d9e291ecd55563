use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Base URL of the sibling course-service
    pub course_service_url: String,
    pub course_service_timeout: Duration,
    /// Consecutive unreachable calls before the client stops trying the sibling
    pub course_service_failure_threshold: u32,
    /// How long the client keeps answering from the fallback once tripped
    pub course_service_open_for: Duration,
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            port: parse_or("PORT", 8080)?,
            course_service_url: env::var("COURSE_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:8081".to_string()),
            course_service_timeout: Duration::from_secs(parse_or(
                "COURSE_SERVICE_TIMEOUT_SECS",
                5,
            )?),
            course_service_failure_threshold: parse_or("COURSE_SERVICE_FAILURE_THRESHOLD", 3)?,
            course_service_open_for: Duration::from_secs(parse_or("COURSE_SERVICE_OPEN_SECS", 30)?),
            run_migrations: parse_or("RUN_MIGRATIONS", true)?,
        })
    }
}

/// Read an optional variable, falling back to `default` when unset
fn parse_or<T: FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => parse_value(key, &value),
        Err(_) => Ok(default),
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
        key: key.to_string(),
        value: value.to_string(),
    })
}
