//! Block Store
//!
//! The ordered block sequence owned by one editing session, plus the
//! selected-block pointer the editor highlights. Sequence order is the
//! authorial trial order; there is no other ordering key.
//!
//! All mutation is synchronous and infallible: operations on absent ids are
//! no-ops, never errors. There is a single mutator context (the editing
//! UI), so no locking is involved; the run controller only ever borrows
//! `blocks()` as a read-only snapshot.

use std::collections::HashMap;

use super::block::{Block, BlockKind, BlockPatch};
use super::BlockId;

/// In-memory ordered collection of blocks.
#[derive(Debug, Clone, Default)]
pub struct BlockStore {
    blocks: Vec<Block>,
    selected: Option<BlockId>,
}

impl BlockStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from an imported sequence. Selection starts clear.
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self {
            blocks,
            selected: None,
        }
    }

    /// Append a new block of `kind` with the catalog's defaults and return
    /// its id. Never fails.
    pub fn add(&mut self, kind: BlockKind) -> BlockId {
        let block = Block::new(kind);
        let id = block.id;
        self.blocks.push(block);
        id
    }

    /// Insert a copy of `id` (with a fresh id) directly after the original.
    /// Returns the copy's id, or `None` if the block is absent.
    pub fn duplicate(&mut self, id: BlockId) -> Option<BlockId> {
        let pos = self.position(id)?;
        let mut copy = self.blocks[pos].clone();
        copy.id = BlockId::new();
        let copy_id = copy.id;
        self.blocks.insert(pos + 1, copy);
        Some(copy_id)
    }

    /// Delete the block with `id` if present; no-op otherwise. Clears the
    /// selection when the removed block was selected.
    pub fn remove(&mut self, id: BlockId) {
        self.blocks.retain(|b| b.id != id);
        if self.selected == Some(id) {
            self.selected = None;
        }
    }

    /// Shallow-merge `patch` into the matching block's props; no-op if the
    /// id is absent.
    pub fn update(&mut self, id: BlockId, patch: &BlockPatch) {
        if let Some(block) = self.blocks.iter_mut().find(|b| b.id == id) {
            patch.apply(&mut block.props);
        }
    }

    /// Replace the sequence wholesale with the caller-supplied order.
    ///
    /// The caller owns supplying a permutation of the current id set: ids
    /// that match no block are skipped, and blocks missing from `order` are
    /// dropped. No set-equality check is performed. Selection is cleared if
    /// the selected block does not survive.
    pub fn reorder(&mut self, order: &[BlockId]) {
        let mut by_id: HashMap<BlockId, Block> =
            self.blocks.drain(..).map(|b| (b.id, b)).collect();
        self.blocks = order.iter().filter_map(|id| by_id.remove(id)).collect();
        if let Some(sel) = self.selected {
            if !self.contains(sel) {
                self.selected = None;
            }
        }
    }

    /// Point the selection at `id`. No-op for unknown ids, so the pointer
    /// always refers to a live block.
    pub fn select(&mut self, id: BlockId) {
        if self.contains(id) {
            self.selected = Some(id);
        }
    }

    /// Clear the selection pointer.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Currently selected block, if any.
    pub fn selected(&self) -> Option<BlockId> {
        self.selected
    }

    /// The sequence in authorial order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Look up a block by id.
    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// Whether a block with `id` exists.
    pub fn contains(&self, id: BlockId) -> bool {
        self.blocks.iter().any(|b| b.id == id)
    }

    /// Number of blocks in the sequence.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Remove all blocks and clear the selection.
    pub fn clear(&mut self) {
        self.blocks.clear();
        self.selected = None;
    }

    fn position(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }
}
