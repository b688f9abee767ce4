//! Minimal in-memory job service driven by the tracker.
//!
//! This demo shows how to implement the `JobService` trait for a fake
//! generation queue that needs a few status checks before finishing.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use job_tracker::{
    BoxError, JobId, JobService, StatusReport, TrackOutcome, Tracker, TrackerConfig,
};

/// A fake generation request.
struct RenderRequest {
    subject: String,
}

/// In-memory queue: every job completes after a fixed number of checks.
struct MockQueue {
    checks_until_done: u32,
    polls: Mutex<HashMap<String, u32>>,
    next_id: Mutex<u64>,
}

impl MockQueue {
    fn new(checks_until_done: u32) -> Self {
        Self {
            checks_until_done,
            polls: Mutex::new(HashMap::new()),
            next_id: Mutex::new(0),
        }
    }
}

#[async_trait]
impl JobService<RenderRequest> for MockQueue {
    type Output = String;

    async fn submit(&self, payload: &RenderRequest) -> Result<JobId, BoxError> {
        let id = {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            format!("mock-{}", *next)
        };
        println!("queued render of {:?} as {id}", payload.subject);
        self.polls.lock().unwrap().insert(id.clone(), 0);
        Ok(JobId::new(id))
    }

    async fn status(&self, id: &JobId) -> Result<StatusReport<String>, BoxError> {
        let mut polls = self.polls.lock().unwrap();
        let seen = polls
            .get_mut(&id.0)
            .ok_or_else(|| format!("unknown job {id}"))?;
        *seen += 1;
        if *seen >= self.checks_until_done {
            Ok(StatusReport::Completed {
                result: format!("https://cdn.example/{id}.mp4"),
            })
        } else {
            Ok(StatusReport::Processing)
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let queue = MockQueue::new(4);

    let config = TrackerConfig {
        poll_interval: std::time::Duration::from_millis(250),
        ..TrackerConfig::standard()
    };
    println!(
        "budget: {} checks, {:?} apart ({:?} total)",
        config.max_attempts,
        config.poll_interval,
        config.budget()
    );

    let tracker = Tracker::new(config);
    let request = RenderRequest {
        subject: "birthday greeting".into(),
    };

    let outcome = tracker
        .track_with_progress(&queue, &request, |pct| println!("  progress: {pct:>3}%"))
        .await?;

    match outcome {
        TrackOutcome::Completed { result } => println!("done: {result}"),
        TrackOutcome::Pending { job_id, attempts } => {
            println!("still rendering after {attempts} checks; re-check later as {job_id}")
        }
    }

    Ok(())
}
