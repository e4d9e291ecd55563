//! Circuit breaker over the course-service client
//!
//! Calls go to the primary client while it is reachable. Unreachable calls
//! are answered by the fallback, and after `failure_threshold` consecutive
//! unreachable calls the primary is skipped entirely for `open_for`. The first
//! call after that window is a trial: success closes the circuit, another
//! failure reopens it. Callers arriving while the trial is in flight are
//! answered by the fallback.
//!
//! Remote API errors (the sibling answered with a non-2xx status) prove the
//! sibling is reachable, so they reset the failure count and are returned
//! to the caller unchanged.

use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use async_trait::async_trait;

use crate::domain::ports::{CourseServiceClient, RemoteCourse};
use crate::error::CourseClientError;

#[derive(Debug, Default)]
struct BreakerState {
    consecutive_failures: u32,
    open_until: Option<Instant>,
    /// Set while the single half-open trial call is running
    trial_in_flight: bool,
}

/// How a call was let through to the primary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Admission {
    Closed,
    Trial,
}

/// Clears the half-open flag once the trial call settles or is dropped
struct TrialGuard<'a>(&'a Mutex<BreakerState>);

impl Drop for TrialGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.0.lock().unwrap_or_else(|e| e.into_inner());
        state.trial_in_flight = false;
    }
}

pub struct ResilientCourseServiceClient<P, F>
where
    P: CourseServiceClient,
    F: CourseServiceClient,
{
    primary: Arc<P>,
    fallback: Arc<F>,
    failure_threshold: u32,
    open_for: Duration,
    state: Mutex<BreakerState>,
}

impl<P, F> ResilientCourseServiceClient<P, F>
where
    P: CourseServiceClient,
    F: CourseServiceClient,
{
    pub fn new(primary: Arc<P>, fallback: Arc<F>, failure_threshold: u32, open_for: Duration) -> Self {
        Self {
            primary,
            fallback,
            failure_threshold: failure_threshold.max(1),
            open_for,
            state: Mutex::new(BreakerState::default()),
        }
    }

    #[cfg(test)]
    fn is_open(&self) -> bool {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        matches!(state.open_until, Some(until) if Instant::now() < until)
    }

    fn admit(&self) -> Option<Admission> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if state.trial_in_flight {
            return None;
        }

        match state.open_until {
            Some(until) if Instant::now() < until => None,
            Some(_) => {
                // Half-open: one more failure reopens the circuit
                state.open_until = None;
                state.consecutive_failures = self.failure_threshold - 1;
                state.trial_in_flight = true;
                Some(Admission::Trial)
            }
            None => Some(Admission::Closed),
        }
    }

    fn record_success(&self) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if state.consecutive_failures > 0 {
            tracing::info!("Course service reachable again, closing circuit");
        }
        state.consecutive_failures = 0;
        state.open_until = None;
    }

    fn record_failure(&self, error: &CourseClientError) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.consecutive_failures += 1;
        tracing::warn!(
            error = %error,
            failures = state.consecutive_failures,
            "Course service unreachable, using fallback"
        );

        if state.consecutive_failures >= self.failure_threshold {
            state.open_until = Some(Instant::now() + self.open_for);
            tracing::warn!(
                open_for_secs = self.open_for.as_secs(),
                "Opening course service circuit"
            );
        }
    }

    /// Run a primary call under the breaker. `None` means the caller should
    /// answer from the fallback.
    async fn guarded<T>(
        &self,
        call: impl Future<Output = Result<T, CourseClientError>>,
    ) -> Option<Result<T, CourseClientError>> {
        let admission = match self.admit() {
            Some(admission) => admission,
            None => {
                tracing::debug!("Course service circuit open, skipping primary");
                return None;
            }
        };
        let _trial = (admission == Admission::Trial).then(|| TrialGuard(&self.state));

        match call.await {
            Err(e) if e.is_unreachable() => {
                self.record_failure(&e);
                None
            }
            result => {
                self.record_success();
                Some(result)
            }
        }
    }
}

#[async_trait]
impl<P, F> CourseServiceClient for ResilientCourseServiceClient<P, F>
where
    P: CourseServiceClient,
    F: CourseServiceClient,
{
    async fn list_courses(&self) -> Result<Vec<RemoteCourse>, CourseClientError> {
        match self.guarded(self.primary.list_courses()).await {
            Some(result) => result,
            None => self.fallback.list_courses().await,
        }
    }

    async fn get_course(&self, id: i32) -> Result<RemoteCourse, CourseClientError> {
        match self.guarded(self.primary.get_course(id)).await {
            Some(result) => result,
            None => self.fallback.get_course(id).await,
        }
    }

    async fn list_names(&self) -> Result<Vec<String>, CourseClientError> {
        match self.guarded(self.primary.list_names()).await {
            Some(result) => result,
            None => self.fallback.list_names().await,
        }
    }
}
