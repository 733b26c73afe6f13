//! Preview renderer
//!
//! Read-only rendering of the block sequence for human inspection: what
//! each block will show, in order, with no timing or input semantics. Also
//! provides the counts the builder's sidebar displays and the two fields
//! the results view reads off a finished run.

use std::collections::HashSet;

use serde::Serialize;

use crate::core::{catalog, Block, BlockId, BlockKind, BlockProps, SurveyKind};
use crate::runtime::RunResult;

/// Read-only rendering of one block.
#[derive(Debug, Clone, Serialize)]
pub struct PreviewEntry {
    pub id: BlockId,
    pub kind: BlockKind,
    /// Catalog label for the block's kind.
    pub title: String,
    /// One-line description of what the block will show.
    pub body: String,
}

/// The full preview: entries in authorial order plus summary counts.
#[derive(Debug, Clone, Serialize)]
pub struct PreviewReport {
    pub entries: Vec<PreviewEntry>,
    pub block_count: usize,
    /// Number of distinct block kinds in the sequence.
    pub distinct_kinds: usize,
}

/// What the results view shows about a finished run.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RunSummary {
    pub trials: usize,
    pub elapsed_ms: f64,
}

/// Render every block in sequence.
pub fn render(blocks: &[Block]) -> PreviewReport {
    let entries: Vec<PreviewEntry> = blocks.iter().map(render_block).collect();
    let distinct_kinds = blocks.iter().map(Block::kind).collect::<HashSet<_>>().len();
    PreviewReport {
        block_count: entries.len(),
        distinct_kinds,
        entries,
    }
}

/// Summarize a finished run: record count and elapsed wall-clock time.
pub fn summarize(result: &RunResult) -> RunSummary {
    RunSummary {
        trials: result.len(),
        elapsed_ms: result.duration_ms,
    }
}

fn render_block(block: &Block) -> PreviewEntry {
    let title = catalog::definition_for(block.kind())
        .map(|d| d.label.to_string())
        .unwrap_or_else(|| "Unsupported block".to_string());
    let body = match &block.props {
        BlockProps::Text {
            content,
            font_size,
            alignment,
        } => format!("{content} ({font_size}, {alignment})"),
        BlockProps::Image { url, alt, width } => {
            if url.is_empty() {
                format!("{alt}: (no image selected), width {width}")
            } else {
                format!("{alt}: {url}, width {width}")
            }
        }
        BlockProps::Reaction {
            stimulus,
            time_limit_ms,
        } => format!("{stimulus} (respond within {time_limit_ms} ms)"),
        BlockProps::Survey {
            question,
            kind,
            options,
        } => match kind {
            SurveyKind::Text => format!("{question} (free text)"),
            SurveyKind::MultipleChoice => format!("{question} ({} options)", options.len()),
            SurveyKind::Rating => format!("{question} (5-point rating)"),
        },
        BlockProps::Unknown => "This block type is not supported".to_string(),
    };
    PreviewEntry {
        id: block.id,
        kind: block.kind(),
        title,
        body,
    }
}
