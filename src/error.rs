//! Tracker error types.
//!
//! Errors are categorized by where they originate:
//!
//! | Category | Variant | Recovery |
//! |----------|---------|----------|
//! | **Submission** | `Submission` | Resubmit manually; never retried here |
//! | **Job-level** | `JobFailed` | The service's verdict — fix input or resubmit |
//! | **Transport** | `StatusCheck` | Already retried locally; check connectivity |
//!
//! Running out of the attempt budget is deliberately *not* an error — it is
//! reported as [`TrackOutcome::Pending`](crate::tracker::TrackOutcome).

use thiserror::Error;

/// Boxed error returned by [`JobService`](crate::service::JobService)
/// implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that end a tracking run.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TrackError {
    /// The initial submission call was rejected. Fatal for this run —
    /// submission is never retried automatically.
    #[error("job submission failed: {source}")]
    Submission {
        /// The underlying submission error.
        #[source]
        source: BoxError,
    },

    /// The service explicitly reported the job as failed. Carries the
    /// service's message verbatim, suitable for display.
    #[error("job failed: {0}")]
    JobFailed(String),

    /// Status checks kept erroring. Surfaced only after the configured
    /// number of consecutive transport failures.
    #[error("status check failed after {retries} consecutive attempts: {source}")]
    StatusCheck {
        /// How many consecutive checks errored before giving up.
        retries: u32,
        /// The last transport error observed.
        #[source]
        source: BoxError,
    },
}

impl TrackError {
    /// Returns `true` if the service itself rejected the job, as opposed
    /// to the tracker failing to talk to the service.
    pub fn is_job_failure(&self) -> bool {
        matches!(self, Self::JobFailed(_))
    }

    /// Returns `true` for transport-level errors, where retrying the whole
    /// operation may succeed.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Submission { .. } | Self::StatusCheck { .. })
    }
}

/// Result type for tracking operations.
pub type TrackResult<T> = Result<T, TrackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let submission = TrackError::Submission {
            source: "network down".into(),
        };
        let job = TrackError::JobFailed("bad prompt".into());
        let status = TrackError::StatusCheck {
            retries: 3,
            source: "connection reset".into(),
        };

        assert!(submission.is_transport());
        assert!(status.is_transport());
        assert!(!job.is_transport());

        assert!(job.is_job_failure());
        assert!(!submission.is_job_failure());
    }

    #[test]
    fn test_error_display() {
        let err = TrackError::JobFailed("content rejected".into());
        assert_eq!(err.to_string(), "job failed: content rejected");

        let err = TrackError::Submission {
            source: "network down".into(),
        };
        assert!(err.to_string().contains("network down"));
    }

    #[test]
    fn test_status_check_source_chain() {
        let err = TrackError::StatusCheck {
            retries: 3,
            source: "connection reset".into(),
        };
        let source = std::error::Error::source(&err).expect("source retained");
        assert_eq!(source.to_string(), "connection reset");
    }
}
