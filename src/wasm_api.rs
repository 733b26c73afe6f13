//! WASM API — `#[wasm_bindgen]` exports backing the builder UI.
//!
//! This module is only compiled when targeting `wasm32`. It provides:
//! - `init_session` / `destroy_session` — lifecycle
//! - `add_block` / `update_block` / `reorder_blocks` / ... — store edits
//! - `get_block_types` — catalog discovery for the palette
//! - `compile_timeline` — the welcome-wrapped timeline for the JS engine
//! - `import_document` / `export_document` — save/load
//! - `store_result` / `result_summary` — the engine reports back
//!
//! All interchange is JSON strings. Fallible entry points answer with
//! `{"ok":...}` / `{"error":...}` envelopes and never panic across the
//! boundary.

use std::cell::RefCell;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::core::{catalog, BlockId, BlockKind, BlockPatch, BlockStore};
use crate::document::ExperimentDocument;
use crate::preview;
use crate::runtime::{build_timeline, RunResult};

// ── Session state ───────────────────────────────────────────────────────────

struct Session {
    store: BlockStore,
    last_result: Option<RunResult>,
}

thread_local! {
    static SESSION: RefCell<Option<Session>> = RefCell::new(None);
}

fn with_session<R>(f: impl FnOnce(&mut Session) -> R) -> Result<R, String> {
    SESSION.with(|cell| {
        let mut borrow = cell.borrow_mut();
        match borrow.as_mut() {
            Some(session) => Ok(f(session)),
            None => Err("Session not initialized. Call init_session() first.".into()),
        }
    })
}

// ── JSON interchange ────────────────────────────────────────────────────────

#[derive(Serialize)]
struct OkResponse<T: Serialize> {
    ok: T,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

fn ok_json<T: Serialize>(value: T) -> String {
    serde_json::to_string(&OkResponse { ok: value }).unwrap_or_default()
}

fn err_json(message: impl Into<String>) -> String {
    serde_json::to_string(&ErrorResponse {
        error: message.into(),
    })
    .unwrap_or_default()
}

fn reply<T: Serialize>(outcome: Result<T, String>) -> String {
    match outcome {
        Ok(value) => ok_json(value),
        Err(e) => err_json(e),
    }
}

fn parse_id(id: &str) -> Result<BlockId, String> {
    id.parse::<uuid::Uuid>()
        .map(BlockId)
        .map_err(|e| format!("invalid block id: {e}"))
}

fn parse_kind(kind: &str) -> Result<BlockKind, String> {
    match kind {
        "text" => Ok(BlockKind::Text),
        "image" => Ok(BlockKind::Image),
        "reaction" => Ok(BlockKind::Reaction),
        "survey" => Ok(BlockKind::Survey),
        other => Err(format!("unknown block type: {other}")),
    }
}

// ── Lifecycle ───────────────────────────────────────────────────────────────

#[wasm_bindgen]
pub fn init_session() {
    console_error_panic_hook::set_once();
    SESSION.with(|cell| {
        *cell.borrow_mut() = Some(Session {
            store: BlockStore::new(),
            last_result: None,
        });
    });
}

#[wasm_bindgen]
pub fn destroy_session() {
    SESSION.with(|cell| {
        *cell.borrow_mut() = None;
    });
}

// ── Store edits ─────────────────────────────────────────────────────────────

/// Append a block of `kind`; answers with the new block's id.
#[wasm_bindgen]
pub fn add_block(kind: &str) -> String {
    reply(
        parse_kind(kind).and_then(|kind| with_session(|s| s.store.add(kind).to_string())),
    )
}

/// Insert a copy of the block right after the original; answers with the
/// copy's id.
#[wasm_bindgen]
pub fn duplicate_block(id: &str) -> String {
    reply(parse_id(id).and_then(|id| {
        with_session(|s| s.store.duplicate(id))?
            .map(|copy| copy.to_string())
            .ok_or_else(|| format!("no block with id {id}"))
    }))
}

#[wasm_bindgen]
pub fn remove_block(id: &str) -> String {
    reply(parse_id(id).and_then(|id| with_session(|s| s.store.remove(id)).map(|_| true)))
}

/// Shallow-merge a partial-props JSON object into the block.
#[wasm_bindgen]
pub fn update_block(id: &str, patch_json: &str) -> String {
    reply(parse_id(id).and_then(|id| {
        let patch: BlockPatch =
            serde_json::from_str(patch_json).map_err(|e| format!("invalid patch: {e}"))?;
        with_session(|s| s.store.update(id, &patch)).map(|_| true)
    }))
}

/// Replace the sequence with the supplied id order (a JSON string array).
#[wasm_bindgen]
pub fn reorder_blocks(order_json: &str) -> String {
    reply((|| {
        let raw: Vec<String> =
            serde_json::from_str(order_json).map_err(|e| format!("invalid order: {e}"))?;
        let order = raw
            .iter()
            .map(|id| parse_id(id))
            .collect::<Result<Vec<_>, _>>()?;
        with_session(|s| s.store.reorder(&order)).map(|_| true)
    })())
}

#[wasm_bindgen]
pub fn select_block(id: &str) -> String {
    reply(parse_id(id).and_then(|id| with_session(|s| s.store.select(id)).map(|_| true)))
}

#[wasm_bindgen]
pub fn clear_selection() -> String {
    reply(with_session(|s| s.store.clear_selection()).map(|_| true))
}

// ── Discovery and compilation ───────────────────────────────────────────────

/// The current block sequence.
#[wasm_bindgen]
pub fn get_blocks() -> String {
    reply(with_session(|s| s.store.blocks().to_vec()))
}

/// Catalog definitions for the palette.
#[wasm_bindgen]
pub fn get_block_types() -> String {
    ok_json(catalog::definitions())
}

/// The full run timeline (welcome + blocks + completion) for the JS-side
/// experiment engine.
#[wasm_bindgen]
pub fn compile_timeline() -> String {
    reply(with_session(|s| build_timeline(s.store.blocks())))
}

/// Read-only preview of the sequence.
#[wasm_bindgen]
pub fn render_preview() -> String {
    reply(with_session(|s| preview::render(s.store.blocks())))
}

// ── Documents ───────────────────────────────────────────────────────────────

#[wasm_bindgen]
pub fn export_document() -> String {
    reply(with_session(|s| ExperimentDocument::from_store(&s.store)))
}

/// Replace the session's sequence with an imported document.
#[wasm_bindgen]
pub fn import_document(json: &str) -> String {
    reply((|| {
        let doc = ExperimentDocument::from_json(json).map_err(|e| e.to_string())?;
        with_session(|s| {
            s.store = doc.into_store();
            s.store.len()
        })
    })())
}

// ── Run results ─────────────────────────────────────────────────────────────

/// Store the record list the JS engine delivered at completion.
#[wasm_bindgen]
pub fn store_result(json: &str) -> String {
    reply((|| {
        let result: RunResult =
            serde_json::from_str(json).map_err(|e| format!("invalid run result: {e}"))?;
        with_session(|s| {
            let count = result.len();
            s.last_result = Some(result);
            count
        })
    })())
}

/// Summary of the stored result (trial count and elapsed time).
#[wasm_bindgen]
pub fn result_summary() -> String {
    reply(with_session(|s| s.last_result.as_ref().map(preview::summarize)).and_then(
        |summary| summary.ok_or_else(|| "no run result stored".to_string()),
    ))
}
