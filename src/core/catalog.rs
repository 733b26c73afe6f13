//! Block Catalog
//!
//! Static registry mapping block kinds to default property sets and
//! presentation metadata. Pure lookup tables with no side effects:
//! `defaults_for` is total, and an unrecognized kind yields the degenerate
//! `Unknown` props rather than failing.

use serde::Serialize;

use super::block::{BlockKind, BlockProps, SurveyKind};
use super::field::{FieldSpec, WidgetKind};

/// Font sizes offered by the text editor.
pub const FONT_SIZES: &[&str] = &["12px", "16px", "20px", "24px", "32px"];

/// Text alignments.
pub const ALIGNMENTS: &[&str] = &["left", "center", "right"];

/// Image width options.
pub const IMAGE_WIDTHS: &[&str] = &["100%", "75%", "50%", "25%"];

/// Survey response modes, as they appear on the wire.
pub const SURVEY_KINDS: &[&str] = &["text", "multiple-choice", "rating"];

/// Default reaction response window.
pub const DEFAULT_TIME_LIMIT_MS: u64 = 5_000;

/// Presentation metadata for one authorable block kind.
#[derive(Debug, Clone, Serialize)]
pub struct BlockDefinition {
    pub kind: BlockKind,
    pub label: &'static str,
    pub description: &'static str,
    /// Icon identifier used by the palette.
    pub icon: &'static str,
    /// Accent color used by the palette and the timeline strip.
    pub color: &'static str,
    pub fields: &'static [FieldSpec],
}

static DEFINITIONS: [BlockDefinition; 4] = [
    BlockDefinition {
        kind: BlockKind::Text,
        label: "Text",
        description: "Presents a passage of styled text; advances on Enter or Space",
        icon: "text",
        color: "#3b82f6",
        fields: &[
            FieldSpec {
                id: "content",
                label: "Content",
                widget: WidgetKind::Textarea,
                options: &[],
                min: None,
                max: None,
                help: "Text shown to the participant",
            },
            FieldSpec {
                id: "fontSize",
                label: "Font size",
                widget: WidgetKind::Select,
                options: FONT_SIZES,
                min: None,
                max: None,
                help: "",
            },
            FieldSpec {
                id: "alignment",
                label: "Alignment",
                widget: WidgetKind::Select,
                options: ALIGNMENTS,
                min: None,
                max: None,
                help: "",
            },
        ],
    },
    BlockDefinition {
        kind: BlockKind::Image,
        label: "Image",
        description: "Presents an image; advances on Enter or Space",
        icon: "image",
        color: "#10b981",
        fields: &[
            FieldSpec {
                id: "url",
                label: "Image URL",
                widget: WidgetKind::Input,
                options: &[],
                min: None,
                max: None,
                help: "Upload an image or paste a URL; empty shows a placeholder",
            },
            FieldSpec {
                id: "alt",
                label: "Alt text",
                widget: WidgetKind::Input,
                options: &[],
                min: None,
                max: None,
                help: "",
            },
            FieldSpec {
                id: "width",
                label: "Width",
                widget: WidgetKind::Select,
                options: IMAGE_WIDTHS,
                min: None,
                max: None,
                help: "",
            },
        ],
    },
    BlockDefinition {
        kind: BlockKind::Reaction,
        label: "Reaction time",
        description: "Measures response time to a stimulus; Space to respond",
        icon: "zap",
        color: "#f59e0b",
        fields: &[
            FieldSpec {
                id: "stimulus",
                label: "Stimulus",
                widget: WidgetKind::Textarea,
                options: &[],
                min: None,
                max: None,
                help: "Text the participant reacts to",
            },
            FieldSpec {
                id: "timeLimit",
                label: "Time limit (ms)",
                widget: WidgetKind::NumberInput,
                options: &[],
                min: Some(500),
                max: Some(60_000),
                help: "The trial ends on its own after this long",
            },
        ],
    },
    BlockDefinition {
        kind: BlockKind::Survey,
        label: "Survey",
        description: "Asks a question; free text, multiple choice, or a rating scale",
        icon: "clipboard",
        color: "#8b5cf6",
        fields: &[
            FieldSpec {
                id: "question",
                label: "Question",
                widget: WidgetKind::Textarea,
                options: &[],
                min: None,
                max: None,
                help: "",
            },
            FieldSpec {
                id: "type",
                label: "Response type",
                widget: WidgetKind::Select,
                options: SURVEY_KINDS,
                min: None,
                max: None,
                help: "",
            },
            FieldSpec {
                id: "options",
                label: "Choices",
                widget: WidgetKind::OptionList,
                options: &[],
                min: None,
                max: None,
                help: "Used by multiple choice; ratings use a fixed 5-point scale",
            },
        ],
    },
];

/// All authorable block definitions, in palette order.
pub fn definitions() -> &'static [BlockDefinition] {
    &DEFINITIONS
}

/// Look up the definition for a kind. `Unknown` has none.
pub fn definition_for(kind: BlockKind) -> Option<&'static BlockDefinition> {
    DEFINITIONS.iter().find(|d| d.kind == kind)
}

/// Default props for a kind. Total: unrecognized kinds get the degenerate
/// no-property block, never an error.
pub fn defaults_for(kind: BlockKind) -> BlockProps {
    match kind {
        BlockKind::Text => BlockProps::Text {
            content: "Enter your text here...".into(),
            font_size: "16px".into(),
            alignment: "center".into(),
        },
        BlockKind::Image => BlockProps::Image {
            url: String::new(),
            alt: "Experiment image".into(),
            width: "100%".into(),
        },
        BlockKind::Reaction => BlockProps::Reaction {
            stimulus: "Press SPACE when you see this".into(),
            time_limit_ms: DEFAULT_TIME_LIMIT_MS,
        },
        BlockKind::Survey => BlockProps::Survey {
            question: "Your question here".into(),
            kind: SurveyKind::Text,
            options: Vec::new(),
        },
        BlockKind::Unknown => BlockProps::Unknown,
    }
}
