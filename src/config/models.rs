use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Root form description.
///
/// Deserialized from the input JSON file once it has passed validation:
/// - `window_title`: title shown in the window's title bar
/// - `window_size`: initial window dimensions
/// - `elements`: widgets, emitted in the order given
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FormConfig {
    /// Title of the main window.
    pub window_title: String,

    /// Initial size of the main window.
    pub window_size: WindowSize,

    /// Widgets placed in the window. Order drives code emission order; the
    /// toolkit's layout manager decides the visual order.
    pub elements: Vec<Element>,
}

/// Dimensions of the main window.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WindowSize {
    pub width: i64,
    pub height: i64,
}

/// A single widget in the form.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Element {
    /// Identifier, unique per document. Becomes part of the C++ variable name.
    pub id: String,

    /// Offset of the widget inside the window.
    pub position: Position,

    /// Widget dimensions. Required for `textbox`, optional otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,

    /// Variant-specific payload, selected by `type`.
    #[serde(flatten)]
    pub widget: Widget,
}

/// Widget payload.
/// Use `type` to select a variant:
/// - "label": static text
/// - "button": push button with a caption
/// - "textbox": single-line text input with a placeholder
///
/// Any other `type` deserializes to `Unsupported` and is skipped by the generator.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Widget {
    /// Text display.
    Label { text: String },

    /// Clickable button.
    Button { text: String },

    /// Editable single-line input.
    Textbox { placeholder: String },

    /// Any element type this generator does not know how to emit.
    #[serde(other)]
    Unsupported,
}

impl Widget {
    /// Name of the variant as written in the `type` field.
    pub fn type_name(&self) -> &'static str {
        match self {
            Widget::Label { .. } => "label",
            Widget::Button { .. } => "button",
            Widget::Textbox { .. } => "textbox",
            Widget::Unsupported => "unsupported",
        }
    }

    /// Whether the generated code for this variant resizes the widget.
    pub fn uses_size(&self) -> bool {
        matches!(self, Widget::Textbox { .. })
    }
}

/// Top-left corner of a widget.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

/// Widget dimensions.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Size {
    pub width: i64,
    pub height: i64,
}
