//! Synthetic progress estimation.
//!
//! The services this crate tracks report no fractional progress: a job is
//! queued, running, done, or failed. UIs still want a moving bar, so the
//! estimate here is a heuristic with a fixed shape. A quick jump once
//! submission succeeds, a slow random climb while polling, and a hard snap
//! to 100 on completion. The climb is capped below 100; only completion
//! may report a finished bar.

use rand::Rng;

/// Value reported right after a successful submission.
const SUBMIT_JUMP: u8 = 25;

/// Largest increment added per poll tick.
const MAX_STEP: u8 = 8;

/// Ceiling for the climb phase; only completion goes past this.
const CLIMB_CAP: u8 = 90;

/// A monotonically non-decreasing percentage in `0..=100`.
///
/// Purely a UX heuristic — not derived from any ground truth.
#[derive(Debug, Clone, Default)]
pub struct ProgressEstimate {
    percent: u8,
}

impl ProgressEstimate {
    /// Start at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current estimate.
    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// Record that submission succeeded. Jumps the estimate to
    /// [`SUBMIT_JUMP`] and returns it.
    pub fn submitted(&mut self) -> u8 {
        self.percent = self.percent.max(SUBMIT_JUMP);
        self.percent
    }

    /// Record one poll tick while the job is still processing. Advances
    /// by a random 0–8 points, saturating at the climb cap.
    pub fn tick(&mut self) -> u8 {
        let step = rand::rng().random_range(0..=MAX_STEP);
        self.percent = (self.percent + step).min(CLIMB_CAP).max(self.percent);
        self.percent
    }

    /// Record completion. Snaps to exactly 100.
    pub fn complete(&mut self) -> u8 {
        self.percent = 100;
        self.percent
    }
}
