//! Fixed C++ text around and between the generated widget fragments.

use crate::config::{FormConfig, Position, Size};
use crate::utils::{cpp_string_literal, identifier_fragment};

/// Includes, `main`, application object, main window and layout.
pub fn preamble(form: &FormConfig) -> String {
    format!(
        r#"#include <QApplication>
#include <QLabel>
#include <QPushButton>
#include <QLineEdit>
#include <QVBoxLayout>
#include <iostream>

int main(int argc, char *argv[]) {{
    QApplication app(argc, argv);
    std::cout << "Opening GUI" << std::endl;

    // Create main window
    QWidget *mainWindow = new QWidget();
    mainWindow->setWindowTitle({title});
    mainWindow->resize({width}, {height});

    // Create layout
    QVBoxLayout *layout = new QVBoxLayout();
"#,
        title = cpp_string_literal(&form.window_title),
        width = form.window_size.width,
        height = form.window_size.height,
    )
}

/// Attach the layout, show the window and enter the event loop.
pub const EPILOGUE: &str = r#"
    // Set layout
    mainWindow->setLayout(layout);
    mainWindow->show();
    std::cout << "GUI opened" << std::endl;
    return app.exec();
}
"#;

pub fn label(id: &str, text: &str, position: Position) -> String {
    let var = format!("label{}", identifier_fragment(id));
    format!(
        r#"
    // label id:{id}
    QLabel *{var} = new QLabel({text});
{placement}"#,
        id = identifier_fragment(id),
        text = cpp_string_literal(text),
        placement = placement(&var, position, None),
    )
}

pub fn button(id: &str, text: &str, position: Position) -> String {
    let var = format!("button{}", identifier_fragment(id));
    format!(
        r#"
    // button id:{id}
    QPushButton *{var} = new QPushButton({text});
{placement}"#,
        id = identifier_fragment(id),
        text = cpp_string_literal(text),
        placement = placement(&var, position, None),
    )
}

/// `size` is `None` only for unvalidated input; the resize call is then left out.
pub fn textbox(id: &str, placeholder: &str, position: Position, size: Option<Size>) -> String {
    let var = format!("textbox{}", identifier_fragment(id));
    format!(
        r#"
    // textbox id:{id}
    QLineEdit *{var} = new QLineEdit();
    {var}->setPlaceholderText({placeholder});
{placement}"#,
        id = identifier_fragment(id),
        placeholder = cpp_string_literal(placeholder),
        placement = placement(&var, position, size),
    )
}

fn placement(var: &str, position: Position, size: Option<Size>) -> String {
    let mut out = format!("    {var}->move({}, {});\n", position.x, position.y);
    if let Some(size) = size {
        out.push_str(&format!("    {var}->resize({}, {});\n", size.width, size.height));
    }
    out.push_str(&format!("    layout->addWidget({var});\n"));
    out
}
