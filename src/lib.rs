//! Experiment Blocks - Core library for the visual experiment builder
//!
//! This crate models authorable experiment blocks (text, image, reaction,
//! survey), compiles an ordered block sequence into trial descriptors for
//! the external experiment engine, and manages the run lifecycle around
//! that engine.

pub mod compiler;
pub mod core;
pub mod document;
pub mod preview;
pub mod runtime;
mod tests;

#[cfg(target_arch = "wasm32")]
pub mod wasm_api;

// Re-export commonly used types
pub use self::compiler::{compile, TrialDescriptor};
pub use self::core::{Block, BlockId, BlockKind, BlockPatch, BlockProps, BlockStore, SurveyKind};
pub use self::document::ExperimentDocument;
pub use self::runtime::{RunController, RunHandle, RunResult, RunStatus, TimelineRunner};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
