//! Export boundary
//!
//! Flat JSON dumps of the in-memory shapes: a document is the block
//! sequence as-is, with no schema version field, and the run-result export
//! is the same idea for the results download.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Block, BlockStore};
use crate::runtime::RunResult;

/// Errors crossing the export boundary.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// Malformed or mismatched JSON
    #[error("invalid document: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to read or write the document file
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A saved experiment: the block sequence, nothing else. Selection state
/// is editing-session state and is not part of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentDocument {
    pub blocks: Vec<Block>,
}

impl ExperimentDocument {
    /// Snapshot the store's sequence.
    pub fn from_store(store: &BlockStore) -> Self {
        Self {
            blocks: store.blocks().to_vec(),
        }
    }

    /// Rebuild an editing session from this document.
    pub fn into_store(self) -> BlockStore {
        BlockStore::from_blocks(self.blocks)
    }

    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the document to `path` as JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DocumentError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Read a document back from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        Self::from_json(&fs::read_to_string(path)?)
    }
}

/// Serialize a run result for the results download.
pub fn export_result(result: &RunResult) -> Result<String, DocumentError> {
    Ok(serde_json::to_string_pretty(result)?)
}
