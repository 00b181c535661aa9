use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::build::compiler::Compiler;
use crate::config;
use crate::error::FormError;
use crate::generator::CodeGenerator;
use crate::validator;

/// Default name of the generated C++ file.
pub const DEFAULT_SOURCE_FILE: &str = "launcher.cpp";

/// Where generated files go and whether to invoke the compiler.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Generated C++ source path.
    pub source_path: PathBuf,
    /// Executable path handed to the compiler.
    pub output_path: PathBuf,
    /// Stop after writing the source.
    pub compile: bool,
}

impl BuildOptions {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE_FILE),
            output_path: output_path.into(),
            compile: true,
        }
    }
}

/// Summary of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub source_path: PathBuf,
    /// Elements that produced a fragment.
    pub emitted: usize,
    /// Ids of elements skipped for having an unsupported type.
    pub skipped: Vec<String>,
    /// Compiler exit code, `None` when compilation was disabled.
    pub compiler_exit: Option<i32>,
    /// The compiler only logged its command line; nothing was built.
    pub dry_run: bool,
}

impl BuildReport {
    /// Exit code the process should terminate with.
    pub fn exit_code(&self) -> i32 {
        self.compiler_exit.unwrap_or(0)
    }
}

/// Drives a form description through load, validation, generation, write and compile.
pub struct Pipeline<C: Compiler> {
    compiler: C,
    options: BuildOptions,
}

impl<C: Compiler> Pipeline<C> {
    pub fn new(compiler: C, options: BuildOptions) -> Self {
        Self { compiler, options }
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    pub fn compiler(&self) -> &C {
        &self.compiler
    }

    /// Run every stage for the form description at `input`.
    ///
    /// Nothing is written unless validation succeeds, and the compiler is not
    /// invoked unless the source was written.
    pub fn run(&self, input: &Path) -> Result<BuildReport> {
        info!(target: "formgen::build", input = %input.display(), "Checking form description");
        let doc = config::load_document(input)?;
        validator::validate(&doc)
            .with_context(|| format!("Invalid form description {}", input.display()))?;
        let form = config::into_config(doc)?;

        info!(target: "formgen::build", elements = form.elements.len(), "Generating source");
        let generated = CodeGenerator::new(&form).render();
        for id in &generated.skipped {
            warn!(target: "formgen::build", %id, "Element type not supported; no code emitted");
        }

        let source_path = &self.options.source_path;
        fs::write(source_path, &generated.code).map_err(|source| FormError::Io {
            path: source_path.clone(),
            source,
        })?;
        info!(target: "formgen::build", source = %source_path.display(), "Wrote generated source");

        let compiler_exit = if self.options.compile {
            Some(self.compile()?)
        } else {
            None
        };

        Ok(BuildReport {
            source_path: source_path.clone(),
            emitted: generated.emitted,
            skipped: generated.skipped,
            compiler_exit,
            dry_run: self.options.compile && self.compiler.is_dry_run(),
        })
    }

    fn compile(&self) -> Result<i32> {
        let BuildOptions {
            source_path,
            output_path,
            ..
        } = &self.options;
        info!(
            target: "formgen::build",
            source = %source_path.display(), output = %output_path.display(),
            "Compiling generated source"
        );
        let code = self.compiler.compile(source_path, output_path)?;
        if self.compiler.is_dry_run() {
            info!(target: "formgen::build", code, "Dry run; no executable was built");
        } else if code == 0 {
            info!(target: "formgen::build", output = %output_path.display(), "Build succeeded");
        } else {
            warn!(target: "formgen::build", code, "Compiler exited with failure");
        }
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, Result as FormResult};
    use std::cell::Cell;

    const DEMO: &str = r#"{"window_title":"Demo","window_size":{"width":400,"height":300},
        "elements":[{"id":"a","type":"label","text":"Hi","position":{"x":10,"y":20}},
                    {"id":"s","type":"slider","position":{"x":0,"y":0}}]}"#;

    fn setup(json: &str) -> (tempfile::TempDir, PathBuf, BuildOptions) {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("form.json");
        fs::write(&input, json).unwrap();
        let mut options = BuildOptions::new(dir.path().join("launcher"));
        options.source_path = dir.path().join("launcher.cpp");
        (dir, input, options)
    }

    #[test]
    fn run_writes_source_and_propagates_exit_code() {
        let (_dir, input, options) = setup(DEMO);
        let expected_source = options.source_path.clone();
        let expected_output = options.output_path.clone();
        let fake = move |source: &Path, output: &Path| -> FormResult<i32> {
            assert_eq!(source, expected_source);
            assert_eq!(output, expected_output);
            assert!(source.exists());
            Ok(7)
        };
        let report = Pipeline::new(fake, options).run(&input).unwrap();
        assert_eq!(report.compiler_exit, Some(7));
        assert_eq!(report.exit_code(), 7);
        assert_eq!(report.emitted, 1);
        assert_eq!(report.skipped, vec!["s".to_string()]);
        let code = fs::read_to_string(&report.source_path).unwrap();
        assert!(code.contains("setWindowTitle(\"Demo\")"));
    }

    #[test]
    fn invalid_input_never_reaches_compiler_or_disk() {
        let (_dir, input, options) = setup(
            r#"{"window_title":"x","window_size":{"width":1,"height":1},
                "elements":[{"id":"a","type":"label","text":"t","position":{"x":-5,"y":0}}]}"#,
        );
        let source_path = options.source_path.clone();
        let calls = Cell::new(0);
        let fake = |_: &Path, _: &Path| -> FormResult<i32> {
            calls.set(calls.get() + 1);
            Ok(0)
        };
        let err = Pipeline::new(&fake, options).run(&input).unwrap_err();
        let form_err = err.downcast_ref::<FormError>().unwrap();
        assert_eq!(form_err.kind(), ErrorKind::Value);
        assert!(format!("{err:#}").contains("elements[0].position.x"));
        assert_eq!(calls.get(), 0);
        assert!(!source_path.exists());
    }

    struct LoggingOnly;

    impl Compiler for LoggingOnly {
        fn compile(&self, _: &Path, _: &Path) -> FormResult<i32> {
            Ok(0)
        }

        fn is_dry_run(&self) -> bool {
            true
        }
    }

    #[test]
    fn dry_run_is_not_reported_as_a_build() {
        let (_dir, input, options) = setup(DEMO);
        let report = Pipeline::new(LoggingOnly, options).run(&input).unwrap();
        assert!(report.dry_run);
        assert_eq!(report.compiler_exit, Some(0));

        let (_dir, input, options) = setup(DEMO);
        let fake = |_: &Path, _: &Path| -> FormResult<i32> { Ok(0) };
        let report = Pipeline::new(fake, options).run(&input).unwrap();
        assert!(!report.dry_run);
    }

    #[test]
    fn compile_can_be_disabled() {
        let (_dir, input, mut options) = setup(DEMO);
        options.compile = false;
        let fake = |_: &Path, _: &Path| -> FormResult<i32> { panic!("compiler must not run") };
        let report = Pipeline::new(fake, options).run(&input).unwrap();
        assert_eq!(report.compiler_exit, None);
        assert_eq!(report.exit_code(), 0);
        assert!(!report.dry_run);
        assert!(report.source_path.exists());
    }

    #[test]
    fn unreadable_input_is_io_error() {
        let (dir, _input, options) = setup(DEMO);
        let missing = dir.path().join("nope.json");
        let fake = |_: &Path, _: &Path| -> FormResult<i32> { Ok(0) };
        let err = Pipeline::new(fake, options)
            .run(&missing)
            .unwrap_err();
        assert_eq!(err.downcast_ref::<FormError>().unwrap().kind(), ErrorKind::Io);
    }
}
