use serde_json::Value;
use tracing::trace;

use super::{describe, element_label, integer_at};
use crate::error::{FormError, Result};

/// Ensure `window_size.width` and `window_size.height` are positive integers.
pub fn check_window_size(doc: &Value) -> Result<()> {
    let size = object_at(doc, "window_size", "window_size")?;
    let width = integer_at(size, "width", "window_size")?;
    let height = integer_at(size, "height", "window_size")?;
    positive(width, "window_size.width")?;
    positive(height, "window_size.height")?;
    Ok(())
}

/// Check position and size of every element, in sequence order.
///
/// For each element the checks run as: position types, size types, position
/// range, size range. The first failure is returned.
///
/// `size` may be omitted by element types that never resize their widget;
/// when present it is checked regardless of type. A `textbox` without `size`
/// is rejected.
pub fn check_geometry(doc: &Value) -> Result<()> {
    let elements = doc
        .get("elements")
        .and_then(Value::as_array)
        .ok_or_else(|| FormError::WrongType {
            field: "elements".to_string(),
            expected: "an array",
            found: describe(doc.get("elements")),
        })?;

    for (index, element) in elements.iter().enumerate() {
        check_element(index, element)?;
        trace!(target: "formgen::validator", index, "Element geometry ok");
    }
    Ok(())
}

fn check_element(index: usize, element: &Value) -> Result<()> {
    let path = format!("elements[{index}]");
    if !element.is_object() {
        return Err(FormError::WrongType {
            field: path,
            expected: "an object",
            found: describe(Some(element)),
        });
    }

    let position = element
        .get("position")
        .ok_or_else(|| missing(index, element, "position"))?;
    let position = require_object(position, &format!("{path}.position"))?;

    let pos_path = format!("{path}.position");
    let x = integer_at(position, "x", &pos_path)?;
    let y = integer_at(position, "y", &pos_path)?;

    let size = match element.get("size") {
        Some(size) => Some(require_object(size, &format!("{path}.size"))?),
        None if element.get("type").and_then(Value::as_str) == Some("textbox") => {
            return Err(missing(index, element, "size"));
        }
        None => None,
    };

    let size_path = format!("{path}.size");
    let dims = match size {
        Some(size) => Some((
            integer_at(size, "width", &size_path)?,
            integer_at(size, "height", &size_path)?,
        )),
        None => None,
    };

    non_negative(x, &format!("{pos_path}.x"))?;
    non_negative(y, &format!("{pos_path}.y"))?;

    if let Some((width, height)) = dims {
        positive(width, &format!("{size_path}.width"))?;
        positive(height, &format!("{size_path}.height"))?;
    }
    Ok(())
}

fn object_at<'a>(parent: &'a Value, key: &str, path: &str) -> Result<&'a Value> {
    match parent.get(key) {
        Some(value) => require_object(value, path),
        None => Err(FormError::WrongType {
            field: path.to_string(),
            expected: "an object",
            found: describe(None),
        }),
    }
}

fn require_object<'a>(value: &'a Value, path: &str) -> Result<&'a Value> {
    if value.is_object() {
        Ok(value)
    } else {
        Err(FormError::WrongType {
            field: path.to_string(),
            expected: "an object",
            found: describe(Some(value)),
        })
    }
}

fn missing(index: usize, element: &Value, field: &'static str) -> FormError {
    FormError::MissingElementField {
        index,
        id: element_label(element),
        field,
    }
}

fn non_negative(value: i64, field: &str) -> Result<()> {
    if value < 0 {
        return Err(FormError::OutOfRange {
            field: field.to_string(),
            constraint: "0 or greater",
            value,
        });
    }
    Ok(())
}

fn positive(value: i64, field: &str) -> Result<()> {
    if value <= 0 {
        return Err(FormError::OutOfRange {
            field: field.to_string(),
            constraint: "greater than 0",
            value,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn form_with(element: Value) -> Value {
        json!({
            "window_title": "t",
            "window_size": {"width": 200, "height": 100},
            "elements": [element]
        })
    }

    fn textbox() -> Value {
        json!({
            "id": "t1", "type": "textbox", "placeholder": "p",
            "position": {"x": 5, "y": 6},
            "size": {"width": 100, "height": 20}
        })
    }

    fn err_for(element: Value) -> FormError {
        check_geometry(&form_with(element)).unwrap_err()
    }

    #[test]
    fn valid_textbox_passes() {
        check_geometry(&form_with(textbox())).unwrap();
    }

    #[test]
    fn non_integer_position_is_type_error() {
        for bad in [json!(1.5), json!("10"), json!(null), json!(10.0), json!([1])] {
            let mut el = textbox();
            el["position"]["x"] = bad.clone();
            let err = err_for(el);
            assert_eq!(err.kind(), ErrorKind::Type, "value {bad}");
            assert!(err.to_string().contains("elements[0].position.x"));
        }
    }

    #[test]
    fn non_integer_size_is_type_error() {
        let mut el = textbox();
        el["size"]["height"] = json!("20px");
        let err = err_for(el);
        assert_eq!(err.kind(), ErrorKind::Type);
        assert!(err.to_string().contains("elements[0].size.height"));
    }

    #[test]
    fn negative_position_is_value_error() {
        for axis in ["x", "y"] {
            let mut el = textbox();
            el["position"][axis] = json!(-3);
            let err = err_for(el);
            assert_eq!(err.kind(), ErrorKind::Value);
            assert!(matches!(err, FormError::OutOfRange { value: -3, .. }));
        }
    }

    #[test]
    fn zero_position_is_allowed() {
        let mut el = textbox();
        el["position"] = json!({"x": 0, "y": 0});
        check_geometry(&form_with(el)).unwrap();
    }

    #[test]
    fn non_positive_size_is_value_error() {
        for width in [0, -1] {
            let mut el = textbox();
            el["size"]["width"] = json!(width);
            let err = err_for(el);
            assert_eq!(err.kind(), ErrorKind::Value);
            assert!(err.to_string().contains("elements[0].size.width"));
        }
    }

    #[test]
    fn type_errors_take_precedence_over_range_errors() {
        let mut el = textbox();
        el["position"]["x"] = json!(-1);
        el["size"]["width"] = json!(2.5);
        let err = err_for(el);
        assert_eq!(err.kind(), ErrorKind::Type);
        assert!(err.to_string().contains("size.width"));
    }

    #[test]
    fn size_is_optional_for_label_and_button() {
        for kind in ["label", "button"] {
            let el = json!({"id": "x", "type": kind, "text": "t", "position": {"x": 1, "y": 1}});
            check_geometry(&form_with(el)).unwrap();
        }
    }

    #[test]
    fn size_is_still_checked_when_present_on_label() {
        let el = json!({
            "id": "x", "type": "label", "text": "t",
            "position": {"x": 1, "y": 1},
            "size": {"width": 0, "height": 5}
        });
        assert_eq!(err_for(el).kind(), ErrorKind::Value);
    }

    #[test]
    fn textbox_without_size_is_schema_error() {
        let mut el = textbox();
        el.as_object_mut().unwrap().remove("size");
        let err = err_for(el);
        assert_eq!(err.kind(), ErrorKind::Schema);
        assert!(matches!(
            err,
            FormError::MissingElementField { index: 0, field: "size", .. }
        ));
    }

    #[test]
    fn position_type_error_precedes_missing_textbox_size() {
        let el = json!({"id": "t", "type": "textbox", "placeholder": "p", "position": {"x": "a", "y": 0}});
        let err = err_for(el);
        assert_eq!(err.kind(), ErrorKind::Type);
        assert!(err.to_string().contains("elements[0].position.x"));
    }

    #[test]
    fn position_type_error_precedes_malformed_size() {
        let el = json!({"id": "l", "type": "label", "text": "t", "position": {"x": "a"}, "size": 5});
        let err = err_for(el);
        assert_eq!(err.kind(), ErrorKind::Type);
        assert!(err.to_string().contains("elements[0].position.x"));
    }

    #[test]
    fn missing_position_is_schema_error() {
        let err = err_for(json!({"id": "l", "type": "label", "text": "t"}));
        assert!(matches!(
            err,
            FormError::MissingElementField { field: "position", ref id, .. } if id == "l"
        ));
    }

    #[test]
    fn first_failing_element_is_reported() {
        let doc = json!({
            "window_title": "t",
            "window_size": {"width": 1, "height": 1},
            "elements": [
                {"id": "a", "type": "label", "text": "ok", "position": {"x": 1, "y": 1}},
                {"id": "b", "type": "label", "text": "bad", "position": {"x": -1, "y": 1}},
                {"id": "c", "type": "label", "text": "worse", "position": {"x": "?", "y": 1}}
            ]
        });
        let err = check_geometry(&doc).unwrap_err();
        assert!(err.to_string().contains("elements[1].position.x"));
    }

    #[test]
    fn elements_must_be_an_array() {
        let doc = json!({"window_title": "t", "window_size": {}, "elements": {"a": 1}});
        assert_eq!(check_geometry(&doc).unwrap_err().kind(), ErrorKind::Type);
    }

    #[test]
    fn window_size_must_be_positive_integers() {
        let mut doc = form_with(textbox());
        check_window_size(&doc).unwrap();

        doc["window_size"]["height"] = json!(0);
        assert_eq!(check_window_size(&doc).unwrap_err().kind(), ErrorKind::Value);

        doc["window_size"]["height"] = json!("tall");
        assert_eq!(check_window_size(&doc).unwrap_err().kind(), ErrorKind::Type);

        doc["window_size"] = json!(640);
        assert_eq!(check_window_size(&doc).unwrap_err().kind(), ErrorKind::Type);
    }
}
