//! Editable-field metadata for the builder UI
//!
//! Each block variant exposes a fixed set of editable props. A `FieldSpec`
//! describes one of them: the widget that edits it, the allowed values for
//! selects, and numeric bounds where they apply. Purely presentational;
//! the store never validates writes against these.

use serde::Serialize;

/// Description of one editable block property.
#[derive(Debug, Clone, Serialize)]
pub struct FieldSpec {
    /// Prop key as it appears on the wire (e.g. `fontSize`).
    pub id: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Widget used to edit the field.
    pub widget: WidgetKind,
    /// Allowed values for `Select` widgets; empty otherwise.
    pub options: &'static [&'static str],
    /// Lower bound for `NumberInput` widgets.
    pub min: Option<u64>,
    /// Upper bound for `NumberInput` widgets.
    pub max: Option<u64>,
    /// Short help text shown next to the widget.
    pub help: &'static str,
}

/// Widget types for field editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    /// Single-line text input
    Input,
    /// Multi-line text area
    Textarea,
    /// Dropdown over a fixed option list
    Select,
    /// Numeric input
    NumberInput,
    /// Editable list of strings
    OptionList,
}
