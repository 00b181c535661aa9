//! Form description model and loading helpers.
//!
//! Import from here for a convenient, stable API.
//!
//! Example:
//! use formgen::config::load_from_path;
//!
//! let form = load_from_path("forms/login.json")?;

pub mod loader;
pub mod models;

pub use models::{Element, FormConfig, Position, Size, Widget, WindowSize};

pub use loader::{
    generate_schema, into_config, load_document, load_from_path, load_from_str, load_from_value,
    write_schema_to_writer,
};
