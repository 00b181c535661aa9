//! C++/Qt source generation from a [`FormConfig`].
//!
//! The output is a complete program: a fixed preamble that creates the
//! application and main window, one fragment per supported element, and a
//! fixed epilogue that shows the window and runs the event loop.
//!
//! Generation is total and deterministic. It never fails, even for input that
//! skipped validation: ids are mangled into identifiers and every string is
//! escaped into a C++ literal.

pub mod templates;

use tracing::{debug, trace};

use crate::config::{Element, FormConfig, Widget};

/// Result of rendering a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    /// Complete C++ translation unit.
    pub code: String,
    /// Number of elements that produced a fragment.
    pub emitted: usize,
    /// Ids of elements skipped because their type is not supported.
    pub skipped: Vec<String>,
}

/// Renders a borrowed form description into C++ source.
pub struct CodeGenerator<'a> {
    form: &'a FormConfig,
}

impl<'a> CodeGenerator<'a> {
    pub fn new(form: &'a FormConfig) -> Self {
        Self { form }
    }

    /// Render the whole program, keeping track of emitted and skipped elements.
    pub fn render(&self) -> GeneratedSource {
        let mut code = templates::preamble(self.form);
        let mut emitted = 0;
        let mut skipped = Vec::new();

        for (index, element) in self.form.elements.iter().enumerate() {
            match fragment(element) {
                Some(text) => {
                    trace!(
                        target: "formgen::generator",
                        index, id = %element.id, kind = element.widget.type_name(),
                        "Emitting fragment"
                    );
                    code.push_str(&text);
                    emitted += 1;
                }
                None => {
                    debug!(
                        target: "formgen::generator",
                        index, id = %element.id,
                        "Skipping element with unsupported type"
                    );
                    skipped.push(element.id.clone());
                }
            }
        }

        code.push_str(templates::EPILOGUE);
        debug!(
            target: "formgen::generator",
            emitted, skipped = skipped.len(), bytes = code.len(),
            "Generated source"
        );
        GeneratedSource {
            code,
            emitted,
            skipped,
        }
    }
}

/// Generate the C++ program text for `form`.
pub fn generate(form: &FormConfig) -> String {
    CodeGenerator::new(form).render().code
}

fn fragment(element: &Element) -> Option<String> {
    let id = element.id.as_str();
    match &element.widget {
        Widget::Label { text } => Some(templates::label(id, text, element.position)),
        Widget::Button { text } => Some(templates::button(id, text, element.position)),
        Widget::Textbox { placeholder } => Some(templates::textbox(
            id,
            placeholder,
            element.position,
            element.size,
        )),
        Widget::Unsupported => None,
    }
}
