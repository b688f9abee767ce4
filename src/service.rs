//! The service seam: the two calls a job-processing backend must expose.
//!
//! ## Design principles
//!
//! - **Async-native**: both methods are async I/O.
//! - **Thread-safe**: the `Send + Sync` bound allows one service value to
//!   back concurrent tracking runs.
//! - **Minimal**: submission and status only. Services that deliver the
//!   completion payload from a separate result endpoint fold that fetch
//!   into their `status()` implementation.
//! - **Payload-generic**: the trait is parameterized over `P`, the
//!   submission payload, so it is independent of any particular request
//!   shape.
//!
//! Implementations own all transport concerns (HTTP clients, base URLs,
//! credentials). Build the client once and pass the service in by value or
//! reference; process-global client configuration mutated per call does
//! not survive concurrent use.

use async_trait::async_trait;

use crate::error::BoxError;
use crate::job::{JobId, StatusReport};

/// Trait for asynchronous job-processing services.
///
/// A service accepts a submission payload, answers with an opaque
/// [`JobId`], and thereafter reports the job's status on demand. The
/// tracker drives these two calls; it never constructs payloads or
/// interprets results.
///
/// # Contract
///
/// - `submit()` MUST be called at most once per job; a returned `JobId`
///   uniquely identifies the submission.
/// - `status()` MUST be safe to call repeatedly with the same `JobId`,
///   including after a tracking run has returned
///   [`Pending`](crate::tracker::TrackOutcome::Pending).
/// - Transport failures are reported as `Err(BoxError)`; a job the service
///   has given up on is `Ok(StatusReport::Failed { .. })`. The distinction
///   matters: transport errors get limited local retry, explicit failure
///   ends the run immediately.
#[async_trait]
pub trait JobService<P>: Send + Sync {
    /// Completion payload produced by the service (a media URL, a rendered
    /// document, …).
    type Output: Send;

    /// Submit a unit of work, returning the service-assigned job ID.
    async fn submit(&self, payload: &P) -> Result<JobId, BoxError>;

    /// Report the current status of a previously submitted job.
    async fn status(&self, id: &JobId) -> Result<StatusReport<Self::Output>, BoxError>;
}
