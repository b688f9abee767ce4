//! Job identity, lifecycle states, and service-reported status.
//!
//! The tracking state machine:
//!
//! ```text
//!   Submitted ──→ Polling ──→ Completed
//!       │            │
//!       │            ├──→ Failed (service reported failure,
//!       │            │            or status checks kept erroring)
//!       │            │
//!       │            └──→ Pending (attempt budget exhausted,
//!       │                          job still legitimately running)
//!       └──→ Failed (submission rejected)
//! ```
//!
//! **Invariants:**
//! - Transitions only move forward — no state is ever revisited.
//! - `Completed`, `Pending`, and `Failed` are terminal for one tracking run.
//! - `Pending` is not a failure: the job is still running on the service
//!   side and may be re-checked later using the same [`JobId`].

use serde::{Deserialize, Serialize};

/// Unique identifier for a job, assigned by the service at submission.
///
/// Opaque to the tracker: it is only ever handed back to the service on
/// status checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub String);

impl JobId {
    /// Create a new job ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for JobId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for JobId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// State of one tracking run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobState {
    /// Submission is in flight; no job ID yet.
    Submitted,
    /// The job has an ID and status checks are under way.
    Polling,
    /// The service reported completion and handed back a result.
    Completed,
    /// The attempt budget ran out while the job was still processing.
    /// Terminal for this run, but not an error.
    Pending,
    /// Submission was rejected, the service reported failure, or status
    /// checks kept erroring.
    Failed,
}

impl JobState {
    /// Check if this is a terminal state (the tracker has returned).
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            JobState::Completed | JobState::Pending | JobState::Failed
        )
    }

    /// Check if the tracked job reached a terminal state without failing.
    pub fn is_settled_ok(&self) -> bool {
        matches!(self, JobState::Completed | JobState::Pending)
    }
}

impl std::fmt::Display for JobState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobState::Submitted => write!(f, "Submitted"),
            JobState::Polling => write!(f, "Polling"),
            JobState::Completed => write!(f, "Completed"),
            JobState::Pending => write!(f, "Pending"),
            JobState::Failed => write!(f, "Failed"),
        }
    }
}

/// Status of a job as reported by the service on one check.
///
/// `T` is the service's completion payload (a media URL, a document, …);
/// the tracker never inspects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusReport<T> {
    /// The job finished; the result is ready.
    Completed {
        /// Completion payload, passed through to the caller untouched.
        result: T,
    },
    /// The job is still queued or running.
    Processing,
    /// The service gave up on the job.
    Failed {
        /// The service's failure message, verbatim.
        message: String,
    },
}

impl<T> StatusReport<T> {
    /// Check if this report ends the poll loop.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, StatusReport::Processing)
    }
}
