use serde_json::Value;

use crate::error::{FormError, Result};

/// Top-level keys every form description must carry, in reporting order.
pub const REQUIRED_KEYS: [&str; 3] = ["window_title", "window_size", "elements"];

/// Ensure the three required top-level keys are present.
///
/// Reports the first missing key in `REQUIRED_KEYS` order. Nested structure
/// is left to the other checks. A root that is not an object has none of the
/// keys, so it is reported as missing `window_title`.
pub fn check_required_keys(doc: &Value) -> Result<()> {
    for key in REQUIRED_KEYS {
        if doc.get(key).is_none() {
            return Err(FormError::MissingKey { key });
        }
    }
    Ok(())
}
