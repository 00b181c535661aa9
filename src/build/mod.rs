#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

/*!
Build module for formgen.

This module wires together:
- `compiler`: the `Compiler` collaborator and the `GxxCompiler` subprocess implementation
- `pipeline`: load, validate, generate, write and compile a form description

Typical usage:
- Construct a `Pipeline` with a compiler and `BuildOptions`.
- Call `Pipeline::run` with the input path and exit with `BuildReport::exit_code`.

Example:
```no_run
use formgen::build::{BuildOptions, GxxCompiler, Pipeline};
use std::path::Path;

let pipeline = Pipeline::new(GxxCompiler::default(), BuildOptions::new("launcher"));
let report = pipeline.run(Path::new("form.json"))?;
std::process::exit(report.exit_code());
# Ok::<(), anyhow::Error>(())
```
*/

pub mod compiler;
pub mod pipeline;

pub use compiler::{Compiler, DEFAULT_FLAGS, GxxCompiler};
pub use pipeline::{BuildOptions, BuildReport, DEFAULT_SOURCE_FILE, Pipeline};
