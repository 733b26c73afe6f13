//! The external-engine seam
//!
//! The engine that actually sequences trials, handles timing, and captures
//! input lives outside this crate. `TimelineRunner` is the contract it is
//! driven through: one ordered descriptor list in, one flat record list
//! out, delivered exactly once at full-timeline completion.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use super::record::TrialRecord;
use crate::compiler::TrialDescriptor;

/// Cooperative cancellation flag shared between the controller and a
/// runner.
///
/// Runners check it between trials; setting it does not interrupt the
/// trial in flight, because the engine has no mid-trial cancellation.
/// Cancelling is "stop listening", not "cancel work".
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    pub(crate) fn reset(&self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// Failures reported by a runner. None of these reach the participant; the
/// controller logs them and moves on.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RunnerError {
    /// The run was cancelled before the timeline completed.
    #[error("run cancelled before completion")]
    Cancelled,

    /// The hosting environment failed (unsupported input APIs, torn-down
    /// display surface).
    #[error("runner environment failure: {0}")]
    Environment(String),
}

/// Plays a compiled timeline strictly in order, one trial at a time,
/// waiting for each trial's advance condition before the next begins.
#[async_trait]
pub trait TimelineRunner: Send + Sync {
    async fn play(
        &self,
        timeline: &[TrialDescriptor],
        cancel: &CancelToken,
    ) -> Result<Vec<TrialRecord>, RunnerError>;
}

/// Headless runner that resolves every trial immediately.
///
/// Each descriptor yields one record whose `rt_ms` is the trial's
/// auto-advance duration when it has one. Used for dry runs and pipeline
/// smoke tests; real participant runs go through the browser engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantRunner;

#[async_trait]
impl TimelineRunner for InstantRunner {
    async fn play(
        &self,
        timeline: &[TrialDescriptor],
        cancel: &CancelToken,
    ) -> Result<Vec<TrialRecord>, RunnerError> {
        let mut records = Vec::with_capacity(timeline.len());
        for (index, trial) in timeline.iter().enumerate() {
            if cancel.is_cancelled() {
                return Err(RunnerError::Cancelled);
            }
            records.push(TrialRecord {
                index,
                rt_ms: trial.advance.auto_advance_ms.map(|ms| ms as f64),
                response: None,
                tags: trial.tags.clone(),
            });
        }
        Ok(records)
    }
}
