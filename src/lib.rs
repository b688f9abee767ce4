//! Bounded polling tracker for asynchronous job completion.
//!
//! This crate provides a small, vendor-neutral harness for services that
//! follow a submit-then-poll lifecycle: submit a unit of work, receive an
//! opaque [`JobId`], then check status until the job finishes or a
//! configured time budget runs out. It was built for long-running media
//! generation queues, but nothing in it knows about media.
//!
//! # Overview
//!
//! - A [`JobService`] trait covering submission and status checks
//! - A [`Tracker`] that drives the poll loop under a [`TrackerConfig`] budget
//! - [`TrackOutcome`] distinguishing *completed* from *still running when
//!   the budget ran out* — the latter is not an error
//! - [`TrackError`] with submission, job-level, and transport variants
//! - [`ProgressEstimate`] for synthetic UI progress
//! - [`wire`] helpers for the common HTTP status-code conventions
//!
//! # The JobService Trait
//!
//! The trait is generic over the submission payload `P`, making it
//! independent of any particular request shape:
//!
//! ```ignore
//! use async_trait::async_trait;
//! use job_tracker::{BoxError, JobId, JobService, StatusReport, Tracker, TrackerConfig};
//!
//! struct VideoQueue { /* http client, base url, credentials */ }
//!
//! #[async_trait]
//! impl JobService<VideoRequest> for VideoQueue {
//!     type Output = String; // the finished video's URL
//!     async fn submit(&self, payload: &VideoRequest) -> Result<JobId, BoxError> { /* ... */ }
//!     async fn status(&self, id: &JobId) -> Result<StatusReport<String>, BoxError> { /* ... */ }
//! }
//!
//! let tracker = Tracker::new(TrackerConfig::standard());
//! let outcome = tracker
//!     .track_with_progress(&queue, &request, |pct| render_bar(pct))
//!     .await?;
//! ```
//!
//! # Lifecycle
//!
//! ```text
//!   Submitted ──→ Polling ──→ Completed
//!       │            ├─────→ Pending  (budget exhausted; not an error)
//!       │            └─────→ Failed   (service verdict, or transport)
//!       └─────────────────→ Failed   (submission rejected)
//! ```
//!
//! A job that outlives the budget is handed back as
//! [`TrackOutcome::Pending`] together with its [`JobId`], so the caller can
//! move on and re-check out of band. Dropping the future returned by
//! [`Tracker::track`] cancels the loop; no tasks or timers outlive it.

pub mod error;
pub mod job;
pub mod progress;
pub mod service;
pub mod tracker;
pub mod wire;

pub use error::{BoxError, TrackError, TrackResult};
pub use job::{JobId, JobState, StatusReport};
pub use progress::ProgressEstimate;
pub use service::JobService;
pub use tracker::{TrackOutcome, Tracker, TrackerConfig};
