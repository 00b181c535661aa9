#![forbid(unsafe_code)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! formgen — turn a JSON form description into a Qt launcher program.
//!
//! The crate is organized into cohesive modules:
//! - `config`: Form description models, loader, and schema helpers.
//! - `validator`: Structural, geometry and id checks on the raw document.
//! - `generator`: C++/Qt source generation.
//! - `build`: Compiler collaborator and the end-to-end pipeline.
//! - `utils`: String escaping helpers.
//!
//! Use `formgen::prelude::*` to bring commonly used items into scope quickly.

/// Public module: build pipeline and compiler collaborator.
pub mod build;
/// Public module: form description (models, loader, schema helpers).
pub mod config;
/// Public module: error taxonomy.
pub mod error;
/// Public module: source generation.
pub mod generator;
/// Public module: utilities (escaping).
pub mod utils;
/// Public module: validation of raw documents.
pub mod validator;

pub use error::{ErrorKind, FormError};

/// Crate-level constants for consumers that want to inspect package metadata at runtime.
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version (e.g., "0.1.0").
#[inline]
pub const fn version() -> &'static str {
    PKG_VERSION
}

/// Map a level name (trace|debug|info|warn|error) to a tracing level.
pub fn parse_level(name: &str) -> Option<tracing::Level> {
    use tracing::Level;
    match name.trim().to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" | "warning" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

/// Initialize tracing (logging) with a reasonable default.
/// - `level` wins when given (e.g. from `--log-level`).
/// - Otherwise honors the `RUST_LOG` environment variable if set.
/// - Falls back to `info` level.
///
/// Logs go to stderr so they never mix with `--print-schema` output.
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init_tracing(level: Option<&str>) {
    use tracing_subscriber::fmt;

    let level = level
        .and_then(parse_level)
        .or_else(|| std::env::var("RUST_LOG").ok().as_deref().and_then(parse_level))
        .unwrap_or(tracing::Level::INFO);

    // Ignore the error if the global subscriber was already set.
    let _ = fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}

/// A convenient set of exports for most consumers.
///
/// Bring this into scope with:
/// `use formgen::prelude::*;`
pub mod prelude {
    // Common result/error handling
    pub use anyhow::{Context, Error, Result, anyhow, bail, ensure};

    // Serialization
    pub use serde::{Deserialize, Serialize};

    // Tracing macros
    pub use tracing::{debug, error, info, instrument, trace, warn};

    pub use crate as formgen;
    pub use crate::build::{BuildOptions, BuildReport, Compiler, GxxCompiler, Pipeline};
    pub use crate::config::{Element, FormConfig, Widget};
    pub use crate::error::{ErrorKind, FormError};
    pub use crate::generator::{CodeGenerator, generate};
    pub use crate::validator::validate;

    // Frequently used internal modules
    pub use crate::{build, config, generator, utils, validator};
}
