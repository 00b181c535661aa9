use std::path::Path;
use std::process::Command;
use tracing::{debug, info, trace, warn};

use crate::error::{FormError, Result};

/// Flags passed after `<source> -o <output>` to build a Qt 5 widgets program.
pub const DEFAULT_FLAGS: [&str; 7] = [
    "-mwindows",
    "-std=c++20",
    "-lQt5Core",
    "-lQt5Gui",
    "-lQt5Widgets",
    "-lQt5Network",
    "-lstdc++fs",
];

/// Builds a generated source file into an executable.
///
/// Returns the toolchain's exit code; `0` means success. An `Err` is reserved
/// for failures to run the toolchain at all.
pub trait Compiler {
    fn compile(&self, source: &Path, output: &Path) -> Result<i32>;

    /// Whether `compile` only reports what it would do.
    fn is_dry_run(&self) -> bool {
        false
    }
}

impl<F> Compiler for F
where
    F: Fn(&Path, &Path) -> Result<i32>,
{
    fn compile(&self, source: &Path, output: &Path) -> Result<i32> {
        self(source, output)
    }
}

/// Invokes a gcc-compatible compiler driver as a blocking subprocess.
/// In dry-run mode the command line is only logged.
#[derive(Debug, Clone)]
pub struct GxxCompiler {
    program: String,
    flags: Vec<String>,
    dry_run: bool,
}

impl GxxCompiler {
    /// Create a compiler using `program` (e.g. "g++") and the default Qt flags.
    pub fn new(program: impl Into<String>, dry_run: bool) -> Self {
        Self {
            program: program.into(),
            flags: DEFAULT_FLAGS.iter().map(|f| f.to_string()).collect(),
            dry_run,
        }
    }

    /// Replace the flags passed after the output path.
    pub fn with_flags<I, S>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flags = flags.into_iter().map(Into::into).collect();
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Full argument list for building `source` into `output`.
    pub fn args(&self, source: &Path, output: &Path) -> Vec<String> {
        let mut args = Vec::with_capacity(self.flags.len() + 3);
        args.push(source.display().to_string());
        args.push("-o".to_string());
        args.push(output.display().to_string());
        args.extend(self.flags.iter().cloned());
        args
    }
}

impl Default for GxxCompiler {
    fn default() -> Self {
        Self::new("g++", false)
    }
}

impl Compiler for GxxCompiler {
    fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    fn compile(&self, source: &Path, output: &Path) -> Result<i32> {
        let args = self.args(source, output);
        if self.dry_run {
            info!(target: "formgen::build", program = %self.program, args = ?args, "DRY-RUN compile");
            return Ok(0);
        }

        trace!(target: "formgen::build", program = %self.program, args = ?args, "Spawning compiler");
        let status = Command::new(&self.program)
            .args(&args)
            .status()
            .map_err(|source| FormError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let code = match status.code() {
            Some(code) => code,
            None => {
                warn!(target: "formgen::build", program = %self.program, %status, "Compiler terminated by signal");
                1
            }
        };
        debug!(target: "formgen::build", program = %self.program, code, "Compiler finished");
        Ok(code)
    }
}
