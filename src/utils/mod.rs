//! Utilities for formgen.
//!
//! Submodules:
//! - `escape`: C++ string literal escaping and identifier mangling.

pub mod escape;

pub use escape::{cpp_string_literal, identifier_fragment};
