//! Block types and property sets
//!
//! A block is one authorable trial: a closed set of variants, each carrying
//! exactly the fields its variant declares. Blocks serialize as
//! `{id, type, props}` so the builder UI and the document export share one
//! wire shape. Switching a block's type after creation is not supported;
//! the editor only ever creates new blocks with type-appropriate defaults.

use serde::{Deserialize, Serialize};

use super::catalog;
use super::BlockId;

/// The unit of experiment design: one variant plus its properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    #[serde(flatten)]
    pub props: BlockProps,
}

impl Block {
    /// Create a block of the given kind with a fresh id and the catalog's
    /// default props.
    pub fn new(kind: BlockKind) -> Self {
        Self {
            id: BlockId::new(),
            props: catalog::defaults_for(kind),
        }
    }

    /// The block's variant tag.
    pub fn kind(&self) -> BlockKind {
        self.props.kind()
    }
}

/// Closed set of block variants. `Unknown` exists only as the import
/// fallback for unrecognized type tags; the catalog never offers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Text,
    Image,
    Reaction,
    Survey,
    Unknown,
}

/// Variant-specific property sets. No fields are shared across variants
/// beyond what each variant declares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "props", rename_all = "lowercase")]
pub enum BlockProps {
    /// A passage of styled text.
    Text {
        content: String,
        #[serde(rename = "fontSize")]
        font_size: String,
        alignment: String,
    },
    /// A sized image; an empty url renders as a placeholder.
    Image {
        url: String,
        alt: String,
        width: String,
    },
    /// A reaction-time task with a bounded response window.
    Reaction {
        stimulus: String,
        #[serde(rename = "timeLimit")]
        time_limit_ms: u64,
    },
    /// A survey question; `kind` selects the response control.
    Survey {
        question: String,
        #[serde(rename = "type")]
        kind: SurveyKind,
        options: Vec<String>,
    },
    /// Degenerate no-property block for documents carrying a type tag this
    /// version does not recognize.
    #[serde(other)]
    Unknown,
}

impl BlockProps {
    pub fn kind(&self) -> BlockKind {
        match self {
            BlockProps::Text { .. } => BlockKind::Text,
            BlockProps::Image { .. } => BlockKind::Image,
            BlockProps::Reaction { .. } => BlockKind::Reaction,
            BlockProps::Survey { .. } => BlockKind::Survey,
            BlockProps::Unknown => BlockKind::Unknown,
        }
    }
}

/// Survey response shape, keyed by the survey block's `type` prop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SurveyKind {
    Text,
    MultipleChoice,
    Rating,
}

/// Partial property update, shallow-merged into a block's props.
///
/// Mirrors the editor's partial-props object: one flat field set, all
/// optional. `apply` copies only the fields that belong to the target
/// variant and ignores the rest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlockPatch {
    pub content: Option<String>,
    pub font_size: Option<String>,
    pub alignment: Option<String>,
    pub url: Option<String>,
    pub alt: Option<String>,
    pub width: Option<String>,
    pub stimulus: Option<String>,
    #[serde(rename = "timeLimit")]
    pub time_limit_ms: Option<u64>,
    pub question: Option<String>,
    #[serde(rename = "type")]
    pub survey_kind: Option<SurveyKind>,
    pub options: Option<Vec<String>>,
}

impl BlockPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge the patch into `props`. Fields that do not belong to the
    /// target variant are ignored; `Unknown` blocks have nothing to merge.
    pub fn apply(&self, props: &mut BlockProps) {
        match props {
            BlockProps::Text {
                content,
                font_size,
                alignment,
            } => {
                if let Some(v) = &self.content {
                    *content = v.clone();
                }
                if let Some(v) = &self.font_size {
                    *font_size = v.clone();
                }
                if let Some(v) = &self.alignment {
                    *alignment = v.clone();
                }
            }
            BlockProps::Image { url, alt, width } => {
                if let Some(v) = &self.url {
                    *url = v.clone();
                }
                if let Some(v) = &self.alt {
                    *alt = v.clone();
                }
                if let Some(v) = &self.width {
                    *width = v.clone();
                }
            }
            BlockProps::Reaction {
                stimulus,
                time_limit_ms,
            } => {
                if let Some(v) = &self.stimulus {
                    *stimulus = v.clone();
                }
                if let Some(v) = self.time_limit_ms {
                    *time_limit_ms = v;
                }
            }
            BlockProps::Survey {
                question,
                kind,
                options,
            } => {
                if let Some(v) = &self.question {
                    *question = v.clone();
                }
                if let Some(v) = self.survey_kind {
                    *kind = v;
                }
                if let Some(v) = &self.options {
                    *options = v.clone();
                }
            }
            BlockProps::Unknown => {}
        }
    }

    // Builder-style helpers used by the editor and tests.

    pub fn with_content(mut self, v: impl Into<String>) -> Self {
        self.content = Some(v.into());
        self
    }

    pub fn with_font_size(mut self, v: impl Into<String>) -> Self {
        self.font_size = Some(v.into());
        self
    }

    pub fn with_alignment(mut self, v: impl Into<String>) -> Self {
        self.alignment = Some(v.into());
        self
    }

    pub fn with_url(mut self, v: impl Into<String>) -> Self {
        self.url = Some(v.into());
        self
    }

    pub fn with_alt(mut self, v: impl Into<String>) -> Self {
        self.alt = Some(v.into());
        self
    }

    pub fn with_width(mut self, v: impl Into<String>) -> Self {
        self.width = Some(v.into());
        self
    }

    pub fn with_stimulus(mut self, v: impl Into<String>) -> Self {
        self.stimulus = Some(v.into());
        self
    }

    pub fn with_time_limit_ms(mut self, v: u64) -> Self {
        self.time_limit_ms = Some(v);
        self
    }

    pub fn with_question(mut self, v: impl Into<String>) -> Self {
        self.question = Some(v.into());
        self
    }

    pub fn with_survey_kind(mut self, v: SurveyKind) -> Self {
        self.survey_kind = Some(v);
        self
    }

    pub fn with_options(mut self, v: Vec<String>) -> Self {
        self.options = Some(v);
        self
    }
}
