//! Trial descriptors
//!
//! The compiled, runner-ready representation of blocks. Descriptors are
//! produced fresh on each compile, never mutated, and discarded once the
//! run starts. They serialize to JSON so a host shell can hand them to the
//! external experiment engine unchanged.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Auto-advance duration for the synthetic welcome and completion trials.
pub const SYNTHETIC_TRIAL_MS: u64 = 2_000;

/// Pixel width used for the full-width image option.
pub const FULL_WIDTH_PX: u32 = 600;

/// Pixel width used when an image width value fails to parse as a number.
pub const DEFAULT_WIDTH_PX: u32 = 400;

/// Keys the engine accepts to advance a trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Key {
    Enter,
    Space,
}

/// How a trial ends: a designated key press, a timer, or whichever fires
/// first. The compiler never emits a rule with neither (that trial would
/// hang the engine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvanceRule {
    /// Keys that end the trial; empty means input is not accepted.
    pub keys: Vec<Key>,
    /// Trial ends on its own after this many milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_advance_ms: Option<u64>,
}

impl AdvanceRule {
    /// Advance on any of `keys`, with no timer.
    pub fn keys(keys: impl Into<Vec<Key>>) -> Self {
        Self {
            keys: keys.into(),
            auto_advance_ms: None,
        }
    }

    /// Advance on a timer only; participant input is not accepted.
    pub fn timer(ms: u64) -> Self {
        Self {
            keys: Vec::new(),
            auto_advance_ms: Some(ms),
        }
    }

    /// Advance on a key press, or after `ms` if none arrives.
    pub fn keys_or_timer(keys: impl Into<Vec<Key>>, ms: u64) -> Self {
        Self {
            keys: keys.into(),
            auto_advance_ms: Some(ms),
        }
    }
}

/// Visual and response payload of one trial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrialContent {
    /// Inline markup rendered as-is.
    Markup { html: String },
    /// An image sized in pixels; `None` renders the placeholder frame.
    Image {
        url: Option<String>,
        alt: String,
        width_px: u32,
    },
    /// A survey prompt with one response control.
    Survey {
        prompt: String,
        response: SurveyResponse,
    },
}

/// Response control of a survey trial. No control requires a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SurveyResponse {
    /// Open multi-line free text.
    FreeText { rows: u32, required: bool },
    /// Single-select among `options`.
    SingleChoice {
        options: Vec<String>,
        horizontal: bool,
        required: bool,
    },
}

/// The compiled, runner-ready representation of one block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialDescriptor {
    pub content: TrialContent,
    pub advance: AdvanceRule,
    /// Labels copied into the produced trial record for downstream
    /// analysis (e.g. task name, stimulus text).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
}

impl TrialDescriptor {
    pub fn new(content: TrialContent, advance: AdvanceRule) -> Self {
        Self {
            content,
            advance,
            tags: HashMap::new(),
        }
    }

    /// Attach an analysis tag.
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Synthetic opening trial: greets the participant and advances on its
    /// own after [`SYNTHETIC_TRIAL_MS`]; input is not accepted.
    pub fn welcome() -> Self {
        Self::new(
            TrialContent::Markup {
                html: "<h2>Welcome</h2><p>The experiment is about to begin.</p>".into(),
            },
            AdvanceRule::timer(SYNTHETIC_TRIAL_MS),
        )
        .with_tag("task", "welcome")
    }

    /// Synthetic closing trial, same auto-advance behavior as `welcome`.
    pub fn completion() -> Self {
        Self::new(
            TrialContent::Markup {
                html: "<h2>Thank you</h2><p>The experiment is complete.</p>".into(),
            },
            AdvanceRule::timer(SYNTHETIC_TRIAL_MS),
        )
        .with_tag("task", "completion")
    }
}
