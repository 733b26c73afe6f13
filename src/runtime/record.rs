//! Run results
//!
//! The flat ordered record list the engine delivers once, at full-timeline
//! completion. Beyond record count, elapsed time, and the tags this crate
//! attached at compile time, the payload is opaque to this subsystem: it is
//! held only for the results view and the download, never persisted here.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One recorded trial outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialRecord {
    /// Position of the trial in the executed timeline.
    pub index: usize,
    /// Elapsed time from trial onset to its advance condition, if measured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rt_ms: Option<f64>,
    /// Raw response payload as reported by the engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<serde_json::Value>,
    /// Labels copied from the descriptor (e.g. task, stimulus).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
}

/// Ordered outcome of a completed run: one record per executed trial,
/// synthetic welcome and completion trials included, plus the total
/// wall-clock time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    pub records: Vec<TrialRecord>,
    pub duration_ms: f64,
}

impl RunResult {
    /// Number of recorded trials.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the run recorded nothing.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
