use anyhow::Context;
use schemars::{Schema, schema_for};
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, trace};

use super::models::FormConfig;
use crate::error::{FormError, Result};
use crate::validator;

/// Read and parse a form description without validating it.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path_ref = path.as_ref();
    let bytes = fs::read(path_ref).map_err(|source| FormError::Io {
        path: path_ref.to_path_buf(),
        source,
    })?;
    let doc: Value = serde_json::from_slice(&bytes).map_err(|source| FormError::Parse {
        path: path_ref.to_path_buf(),
        source,
    })?;
    debug!(target: "formgen::config", path = %path_ref.display(), bytes = bytes.len(), "Read form description");
    Ok(doc)
}

/// Convert an already validated document into the typed model.
pub fn into_config(doc: Value) -> Result<FormConfig> {
    let cfg: FormConfig = serde_json::from_value(doc).map_err(FormError::Model)?;
    trace!(target: "formgen::config", elements = cfg.elements.len(), "Converted document into FormConfig");
    Ok(cfg)
}

/// Validate a document and convert it into the typed model.
pub fn load_from_value(doc: Value) -> Result<FormConfig> {
    validator::validate(&doc)?;
    into_config(doc)
}

/// Load, validate and convert a form description from a string slice.
pub fn load_from_str(s: &str) -> Result<FormConfig> {
    let doc: Value = serde_json::from_str(s).map_err(|source| FormError::Parse {
        path: "<string>".into(),
        source,
    })?;
    load_from_value(doc)
}

/// Load, validate and convert a form description from a file path.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<FormConfig> {
    let doc = load_document(path.as_ref())?;
    let cfg = load_from_value(doc)?;
    debug!(target: "formgen::config", path = %path.as_ref().display(), "Loaded form description");
    Ok(cfg)
}

/// Generate the JSON Schema for the input format.
pub fn generate_schema() -> Schema {
    schema_for!(FormConfig)
}

/// Write the JSON Schema for the input format to any writer (pretty-printed).
pub fn write_schema_to_writer<W: Write>(mut writer: W) -> anyhow::Result<()> {
    let schema = generate_schema();
    let json = serde_json::to_string_pretty(&schema).context("Failed to serialize schema")?;
    writer
        .write_all(json.as_bytes())
        .context("Failed to write schema to writer")?;
    Ok(())
}
