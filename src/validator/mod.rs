/*!
Validation of raw form descriptions.

Checks run on the decoded `serde_json::Value` rather than the typed model so
that type mismatches (`1.5`, `"10"`) are reported as such instead of as a
generic deserialization failure.

- `structure.rs` -> required top-level keys
- `geometry.rs`  -> window size and per-element position/size
- `ids.rs`       -> element id shape and uniqueness

Each check is callable on its own; [`validate`] runs all of them in order and
stops at the first failure.
*/

use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{FormError, Result};

pub mod geometry;
pub mod ids;
pub mod structure;

pub use geometry::{check_geometry, check_window_size};
pub use ids::check_element_ids;
pub use structure::{REQUIRED_KEYS, check_required_keys};

/// Run every check against a decoded form description.
pub fn validate(doc: &Value) -> Result<()> {
    check_required_keys(doc)?;
    trace!(target: "formgen::validator", "Required keys present");
    check_window_size(doc)?;
    check_geometry(doc)?;
    check_element_ids(doc)?;
    debug!(
        target: "formgen::validator",
        elements = doc["elements"].as_array().map_or(0, Vec::len),
        "Form description is valid"
    );
    Ok(())
}

/// Read an integer field, reporting `path` when the value is absent or not an integer.
pub(crate) fn integer_at(parent: &Value, key: &str, path: &str) -> Result<i64> {
    let value = parent.get(key);
    value.and_then(Value::as_i64).ok_or_else(|| FormError::NotAnInteger {
        field: format!("{path}.{key}"),
        found: describe(value),
    })
}

/// Short human-readable rendering of a JSON value for error messages.
pub(crate) fn describe(value: Option<&Value>) -> String {
    match value {
        None => "nothing".to_string(),
        Some(Value::String(s)) => format!("string {s:?}"),
        Some(Value::Array(_)) => "an array".to_string(),
        Some(Value::Object(_)) => "an object".to_string(),
        Some(other) => other.to_string(),
    }
}

/// Display form of an element's id for error messages.
pub(crate) fn element_label(element: &Value) -> String {
    match element.get("id") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => "<none>".to_string(),
        Some(other) => other.to_string(),
    }
}
