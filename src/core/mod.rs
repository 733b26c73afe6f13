//! Core block model
//!
//! This module defines the block types, the catalog of defaults and
//! presentation metadata, and the ordered block store that one editing
//! session owns.

pub mod block;
pub mod catalog;
pub mod field;
pub mod store;

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a block, assigned at creation and stable for the
/// block's lifetime. Used as the reconciliation key for reordering and as
/// the key for selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId(pub Uuid);

impl BlockId {
    /// Generate a new random block ID
    pub fn new() -> Self {
        BlockId(Uuid::new_v4())
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

pub use block::{Block, BlockKind, BlockPatch, BlockProps, SurveyKind};
pub use catalog::{defaults_for, definition_for, definitions, BlockDefinition};
pub use field::{FieldSpec, WidgetKind};
pub use store::BlockStore;
