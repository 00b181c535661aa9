use std::path::PathBuf;

use thiserror::Error;

/// Broad classification of a [`FormError`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required key or field is absent, or the document has the wrong shape.
    Schema,
    /// A field holds a JSON value of the wrong type.
    Type,
    /// A field has the right type but violates its constraint.
    Value,
    /// Reading, parsing, writing or spawning failed.
    Io,
}

/// Every way loading, validating, generating or building a form can fail.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("Missing required element `{key}` in form description")]
    MissingKey { key: &'static str },

    #[error("Element {index} (id `{id}`) is missing required field `{field}`")]
    MissingElementField {
        index: usize,
        id: String,
        field: &'static str,
    },

    #[error("`{field}` must be an integer, got {found}")]
    NotAnInteger { field: String, found: String },

    #[error("`{field}` must be {expected}, got {found}")]
    WrongType {
        field: String,
        expected: &'static str,
        found: String,
    },

    #[error("`{field}` must be {constraint}, got {value}")]
    OutOfRange {
        field: String,
        constraint: &'static str,
        value: i64,
    },

    #[error("Element {index} has invalid id `{id}` (only ASCII letters, digits and `_` are allowed)")]
    InvalidId { index: usize, id: String },

    #[error("Element {index} reuses id `{id}` already taken by element {first}")]
    DuplicateId {
        index: usize,
        first: usize,
        id: String,
    },

    #[error("Form description does not match the expected model: {0}")]
    Model(#[source] serde_json::Error),

    #[error("Failed to parse JSON from {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to launch compiler `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl FormError {
    /// Returns the taxonomy bucket this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FormError::MissingKey { .. }
            | FormError::MissingElementField { .. }
            | FormError::Model(_) => ErrorKind::Schema,
            FormError::NotAnInteger { .. } | FormError::WrongType { .. } => ErrorKind::Type,
            FormError::OutOfRange { .. }
            | FormError::InvalidId { .. }
            | FormError::DuplicateId { .. } => ErrorKind::Value,
            FormError::Parse { .. } | FormError::Io { .. } | FormError::Spawn { .. } => {
                ErrorKind::Io
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FormError>;
