use serde_json::Value;
use std::collections::HashMap;

use super::describe;
use crate::error::{FormError, Result};

/// Ensure each element id is a non-empty identifier fragment and unique.
///
/// Ids are spliced into C++ variable names (`label<id>`), so only ASCII
/// letters, digits and `_` are accepted.
pub fn check_element_ids(doc: &Value) -> Result<()> {
    let Some(elements) = doc.get("elements").and_then(Value::as_array) else {
        return Ok(());
    };

    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(elements.len());
    for (index, element) in elements.iter().enumerate() {
        let id = element
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| FormError::WrongType {
                field: format!("elements[{index}].id"),
                expected: "a string",
                found: describe(element.get("id")),
            })?;

        if !is_identifier_fragment(id) {
            return Err(FormError::InvalidId {
                index,
                id: id.to_string(),
            });
        }

        if let Some(&first) = seen.get(id) {
            return Err(FormError::DuplicateId {
                index,
                first,
                id: id.to_string(),
            });
        }
        seen.insert(id, index);
    }
    Ok(())
}

pub(crate) fn is_identifier_fragment(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
