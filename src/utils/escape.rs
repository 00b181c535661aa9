/// Render `text` as a double-quoted C++ string literal.
///
/// - `\`, `"` and the common whitespace escapes are backslash-escaped.
/// - Other ASCII control characters become three-digit octal escapes, which
///   cannot swallow a following digit the way `\x` escapes do.
/// - Everything else, including non-ASCII UTF-8, is copied through.
pub fn cpp_string_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_ascii_control() => out.push_str(&format!("\\{:03o}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Map an element id onto characters that are legal inside a C++ identifier.
///
/// Validated ids pass through unchanged; anything else has each offending
/// character replaced by `_`. An empty id maps to `_`.
pub fn identifier_fragment(id: &str) -> String {
    if id.is_empty() {
        return "_".to_string();
    }
    id.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}
