//! Timeline compiler
//!
//! Maps an ordered block sequence to an ordered list of trial descriptors,
//! one per block, consumable by the external experiment engine. Pure and
//! total: an empty sequence compiles to an empty timeline, and degenerate
//! inputs (empty image url, unrecognized type) become visible placeholders
//! rather than errors.

pub mod descriptor;

pub use descriptor::{
    AdvanceRule, Key, SurveyResponse, TrialContent, TrialDescriptor, DEFAULT_WIDTH_PX,
    FULL_WIDTH_PX, SYNTHETIC_TRIAL_MS,
};

use crate::core::{Block, BlockProps, SurveyKind};

/// Options substituted when a multiple-choice survey has none configured.
const FALLBACK_CHOICES: [&str; 2] = ["Yes", "No"];

/// The fixed 5-point rating scale. Rating surveys always use this;
/// custom options are ignored.
const RATING_SCALE: [&str; 5] = [
    "1 - Very Poor",
    "2 - Poor",
    "3 - Average",
    "4 - Good",
    "5 - Excellent",
];

/// Rows in the free-text response area.
const FREE_TEXT_ROWS: u32 = 5;

/// Compile a block sequence into trial descriptors, 1:1 and
/// order-preserving. No reordering, deduplication, or batching.
pub fn compile(blocks: &[Block]) -> Vec<TrialDescriptor> {
    blocks.iter().map(compile_block).collect()
}

/// Compile a single block.
pub fn compile_block(block: &Block) -> TrialDescriptor {
    match &block.props {
        BlockProps::Text {
            content,
            font_size,
            alignment,
        } => TrialDescriptor::new(
            TrialContent::Markup {
                html: format!(
                    r#"<p style="font-size:{font_size};text-align:{alignment}">{content}</p>"#
                ),
            },
            AdvanceRule::keys([Key::Enter, Key::Space]),
        ),
        BlockProps::Image { url, alt, width } => TrialDescriptor::new(
            TrialContent::Image {
                url: if url.is_empty() {
                    None
                } else {
                    Some(url.clone())
                },
                alt: alt.clone(),
                width_px: width_to_px(width),
            },
            AdvanceRule::keys([Key::Enter, Key::Space]),
        ),
        BlockProps::Reaction {
            stimulus,
            time_limit_ms,
        } => TrialDescriptor::new(
            TrialContent::Markup {
                html: format!(r#"<p class="reaction-stimulus">{stimulus}</p>"#),
            },
            AdvanceRule::keys_or_timer([Key::Space], *time_limit_ms),
        )
        .with_tag("task", "reaction")
        .with_tag("stimulus", stimulus.clone()),
        BlockProps::Survey {
            question,
            kind,
            options,
        } => TrialDescriptor::new(
            TrialContent::Survey {
                prompt: question.clone(),
                response: survey_response(*kind, options),
            },
            AdvanceRule::keys([Key::Enter]),
        ),
        BlockProps::Unknown => {
            tracing::warn!(id = %block.id, "unrecognized block type, emitting placeholder trial");
            TrialDescriptor::new(
                TrialContent::Markup {
                    html: "<p>Unsupported block</p>".into(),
                },
                AdvanceRule::keys([Key::Enter]),
            )
        }
    }
}

/// Map a width prop to pixels. Only the literal `"100%"` maps to the fixed
/// full width; any other value must be a bare pixel number or falls back to
/// the default, so the remaining percentage options all land on the
/// fallback.
fn width_to_px(width: &str) -> u32 {
    if width == "100%" {
        FULL_WIDTH_PX
    } else {
        width.trim().parse().unwrap_or(DEFAULT_WIDTH_PX)
    }
}

fn survey_response(kind: SurveyKind, options: &[String]) -> SurveyResponse {
    match kind {
        SurveyKind::Text => SurveyResponse::FreeText {
            rows: FREE_TEXT_ROWS,
            required: false,
        },
        SurveyKind::MultipleChoice => {
            let options = if options.is_empty() {
                FALLBACK_CHOICES.iter().map(|s| s.to_string()).collect()
            } else {
                options.to_vec()
            };
            SurveyResponse::SingleChoice {
                options,
                horizontal: false,
                required: false,
            }
        }
        SurveyKind::Rating => SurveyResponse::SingleChoice {
            options: RATING_SCALE.iter().map(|s| s.to_string()).collect(),
            horizontal: true,
            required: false,
        },
    }
}
