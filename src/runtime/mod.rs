//! Run lifecycle
//!
//! Orchestrates a run: compiles the block sequence, wraps it in synthetic
//! welcome and completion trials, hands the full timeline to the external
//! engine, and delivers the result list exactly once. Sequencing and timing
//! belong entirely to the engine; this module supplies the ordered
//! descriptor list and a single completion callback.

pub mod record;
pub mod runner;
pub mod timer;

pub use record::{RunResult, TrialRecord};
pub use runner::{CancelToken, InstantRunner, RunnerError, TimelineRunner};
pub use timer::RunClock;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::compiler::{compile, TrialDescriptor};
use crate::core::Block;

/// The full descriptor sequence for a run: synthetic welcome, the compiled
/// blocks, synthetic completion.
pub fn build_timeline(blocks: &[Block]) -> Vec<TrialDescriptor> {
    let mut timeline = Vec::with_capacity(blocks.len() + 2);
    timeline.push(TrialDescriptor::welcome());
    timeline.extend(compile(blocks));
    timeline.push(TrialDescriptor::completion());
    timeline
}

/// Terminal status of a run. Failures carry no payload: the engine's error
/// is logged, never surfaced to the participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Completed,
    Cancelled,
    Failed,
}

/// Handle to an in-flight run, used to force-terminate it from the UI
/// (e.g. when the run view closes).
#[derive(Debug, Clone)]
pub struct RunHandle {
    cancel: CancelToken,
    finished: Arc<AtomicBool>,
}

impl RunHandle {
    /// Best-effort termination. Idempotent: once the run has ended this is
    /// a no-op, not an error.
    pub fn terminate(&self) {
        if self.finished.load(Ordering::SeqCst) {
            tracing::debug!("terminate requested after run already ended; ignoring");
            return;
        }
        self.cancel.cancel();
    }

    /// Whether the run has ended (completed, cancelled, or failed).
    pub fn is_finished(&self) -> bool {
        self.finished.load(Ordering::SeqCst)
    }

    /// Whether termination has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

/// Orchestrates one run at a time over a borrowed block snapshot. The
/// store is never mutated from here.
pub struct RunController<R: TimelineRunner> {
    runner: R,
    cancel: CancelToken,
    finished: Arc<AtomicBool>,
}

impl<R: TimelineRunner> RunController<R> {
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            cancel: CancelToken::new(),
            finished: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Handle for force-terminating the run; safe to hold across the run
    /// and to use after it has ended.
    pub fn handle(&self) -> RunHandle {
        RunHandle {
            cancel: self.cancel.clone(),
            finished: self.finished.clone(),
        }
    }

    /// Run the block sequence.
    ///
    /// `on_finish` receives the full record list exactly once, at
    /// full-timeline completion. A cancelled or failed run delivers
    /// nothing: partial results are never produced, because the engine's
    /// completion signal only fires when the whole timeline has played.
    pub async fn run<F>(&self, blocks: &[Block], on_finish: F) -> RunStatus
    where
        F: FnOnce(RunResult),
    {
        self.cancel.reset();
        self.finished.store(false, Ordering::SeqCst);

        let timeline = build_timeline(blocks);
        let clock = RunClock::start();
        tracing::info!(trials = timeline.len(), "starting run");

        let outcome = self.runner.play(&timeline, &self.cancel).await;
        self.finished.store(true, Ordering::SeqCst);

        match outcome {
            Ok(_) if self.cancel.is_cancelled() => {
                tracing::debug!("run cancelled; discarding records");
                RunStatus::Cancelled
            }
            Ok(records) => {
                let result = RunResult {
                    records,
                    duration_ms: clock.elapsed_ms(),
                };
                tracing::info!(records = result.len(), "run completed");
                on_finish(result);
                RunStatus::Completed
            }
            Err(RunnerError::Cancelled) => {
                tracing::debug!("run cancelled before completion");
                RunStatus::Cancelled
            }
            Err(err) => {
                tracing::warn!(error = %err, "runner failed; no result delivered");
                RunStatus::Failed
            }
        }
    }
}
