//! The bounded polling loop.
//!
//! [`Tracker::track`] submits a unit of work to a [`JobService`], then
//! checks status at a fixed interval until the service reports a terminal
//! status or the attempt budget runs out:
//!
//! ```text
//!   submit() ──→ status() ──sleep──→ status() ──sleep──→ … ──→ outcome
//! ```
//!
//! The first check happens immediately after submission, so `k` checks
//! cost `k - 1` sleeps. No backoff is applied; the interval stays constant
//! for the whole run.
//!
//! Exhausting the budget while the job is still processing is **not** an
//! error: the run returns [`TrackOutcome::Pending`] with the job ID so the
//! caller can let the user move on and re-check out of band later.
//!
//! # Cancellation
//!
//! A run holds no spawned tasks, threads, or timers. Dropping the future
//! returned by [`Tracker::track`] abandons the loop mid-sleep; nothing
//! leaks.

use std::time::Duration;

use crate::error::{TrackError, TrackResult};
use crate::job::{JobId, JobState, StatusReport};
use crate::progress::ProgressEstimate;
use crate::service::JobService;

/// Tunable parameters for one tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Fixed delay between consecutive status checks.
    pub poll_interval: Duration,
    /// Status checks performed before giving the job back as
    /// [`TrackOutcome::Pending`].
    pub max_attempts: u32,
    /// Consecutive transport failures tolerated on status checks before
    /// the run errors out.
    pub status_retry_limit: u32,
}

impl TrackerConfig {
    /// Five-minute budget: 60 checks, 5 seconds apart.
    pub fn standard() -> Self {
        Self {
            poll_interval: Duration::from_secs(5),
            max_attempts: 60,
            status_retry_limit: 3,
        }
    }

    /// Twenty-minute budget: 240 checks, 5 seconds apart. For services
    /// whose queue regularly runs long.
    pub fn extended() -> Self {
        Self {
            max_attempts: 240,
            ..Self::standard()
        }
    }

    /// Overall wall-clock budget: `max_attempts × poll_interval`.
    pub fn budget(&self) -> Duration {
        self.poll_interval * self.max_attempts
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Terminal outcome of a tracking run that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackOutcome<T> {
    /// The service finished the job and handed back its result.
    Completed {
        /// The service's completion payload, untouched.
        result: T,
    },
    /// The attempt budget ran out while the job was still processing.
    /// The job keeps running on the service side; `job_id` can be used to
    /// re-check later.
    Pending {
        /// Identifier for out-of-band re-checks.
        job_id: JobId,
        /// Status checks performed before giving the job back.
        attempts: u32,
    },
}

impl<T> TrackOutcome<T> {
    /// The terminal state this outcome represents.
    pub fn state(&self) -> JobState {
        match self {
            TrackOutcome::Completed { .. } => JobState::Completed,
            TrackOutcome::Pending { .. } => JobState::Pending,
        }
    }

    /// Check if the job actually finished.
    pub fn is_completed(&self) -> bool {
        matches!(self, TrackOutcome::Completed { .. })
    }

    /// Extract the completion payload, if any.
    pub fn into_result(self) -> Option<T> {
        match self {
            TrackOutcome::Completed { result } => Some(result),
            TrackOutcome::Pending { .. } => None,
        }
    }
}

/// Drives submissions through a [`JobService`] to a terminal outcome.
///
/// A tracker is cheap to construct and holds only its configuration;
/// concurrent [`track`](Tracker::track) calls are fully independent.
#[derive(Debug, Clone, Default)]
pub struct Tracker {
    config: TrackerConfig,
}

impl Tracker {
    /// Create a tracker with the given configuration.
    pub fn new(config: TrackerConfig) -> Self {
        Self { config }
    }

    /// This tracker's configuration.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Submit `payload` and poll until the job completes, fails, or the
    /// attempt budget runs out.
    ///
    /// See [`track_with_progress`](Tracker::track_with_progress) for the
    /// full semantics; this variant just drops the progress updates.
    pub async fn track<P, S>(&self, service: &S, payload: &P) -> TrackResult<TrackOutcome<S::Output>>
    where
        S: JobService<P>,
        P: Sync,
    {
        self.track_with_progress(service, payload, |_| {}).await
    }

    /// Like [`track`](Tracker::track), invoking `on_progress` with a
    /// heuristic percentage after submission and after every status check.
    ///
    /// Reported values are non-decreasing within one run; exactly 100 is
    /// reported when — and only when — the service completes the job.
    ///
    /// # Errors
    ///
    /// - [`TrackError::Submission`] if the submission call is rejected.
    ///   No status check is made.
    /// - [`TrackError::JobFailed`] as soon as the service reports failure.
    /// - [`TrackError::StatusCheck`] after `status_retry_limit` consecutive
    ///   status calls error. The counter resets on any successful check,
    ///   and errored checks still count against `max_attempts`.
    pub async fn track_with_progress<P, S, F>(
        &self,
        service: &S,
        payload: &P,
        mut on_progress: F,
    ) -> TrackResult<TrackOutcome<S::Output>>
    where
        S: JobService<P>,
        P: Sync,
        F: FnMut(u8),
    {
        let job_id = service
            .submit(payload)
            .await
            .map_err(|source| TrackError::Submission { source })?;

        tracing::debug!(job_id = %job_id, state = %JobState::Polling, "job submitted");

        let mut progress = ProgressEstimate::new();
        on_progress(progress.submitted());

        let mut attempts: u32 = 0;
        let mut consecutive_errors: u32 = 0;

        while attempts < self.config.max_attempts {
            attempts += 1;

            match service.status(&job_id).await {
                Ok(StatusReport::Completed { result }) => {
                    on_progress(progress.complete());
                    tracing::info!(job_id = %job_id, attempts, "job completed");
                    return Ok(TrackOutcome::Completed { result });
                }
                Ok(StatusReport::Failed { message }) => {
                    tracing::warn!(job_id = %job_id, attempts, message = %message, "service reported failure");
                    return Err(TrackError::JobFailed(message));
                }
                Ok(StatusReport::Processing) => {
                    consecutive_errors = 0;
                    on_progress(progress.tick());
                    tracing::debug!(
                        job_id = %job_id,
                        attempt = attempts,
                        max_attempts = self.config.max_attempts,
                        "still processing",
                    );
                }
                Err(source) => {
                    consecutive_errors += 1;
                    tracing::warn!(
                        job_id = %job_id,
                        attempt = attempts,
                        consecutive_errors,
                        error = %source,
                        "status check failed",
                    );
                    if consecutive_errors >= self.config.status_retry_limit {
                        return Err(TrackError::StatusCheck {
                            retries: consecutive_errors,
                            source,
                        });
                    }
                    // Errored check: report the unchanged estimate so the
                    // callback still fires once per check.
                    on_progress(progress.percent());
                }
            }

            if attempts < self.config.max_attempts {
                tokio::time::sleep(self.config.poll_interval).await;
            }
        }

        tracing::info!(
            job_id = %job_id,
            attempts,
            budget = ?self.config.budget(),
            "attempt budget exhausted, job still running",
        );
        Ok(TrackOutcome::Pending { job_id, attempts })
    }
}
