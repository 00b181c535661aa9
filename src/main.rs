use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error, info};

use formgen::build::{BuildOptions, DEFAULT_SOURCE_FILE, GxxCompiler, Pipeline};
use formgen::config as cfg;

/// formgen CLI
#[derive(Debug, Parser)]
#[command(
    name = formgen::PKG_NAME,
    version = formgen::PKG_VERSION,
    about = "Generate a Qt launcher from a JSON form description and compile it"
)]
struct Args {
    /// Path to the JSON form description
    #[arg(required_unless_present = "print_schema")]
    input_file: Option<PathBuf>,

    /// Path of the executable the compiler produces
    #[arg(required_unless_present = "print_schema")]
    output_file: Option<PathBuf>,

    /// Where to write the generated C++ source
    #[arg(long = "source", default_value = DEFAULT_SOURCE_FILE)]
    source: PathBuf,

    /// Compiler driver to invoke
    #[arg(long = "compiler", default_value = "g++")]
    compiler: String,

    /// Write the generated source but do not compile it
    #[arg(long = "no-compile")]
    no_compile: bool,

    /// Log the compiler command instead of running it
    #[arg(long = "dry-run")]
    dry_run: bool,

    /// Set log level (e.g., trace, debug, info, warn, error). Overrides RUST_LOG.
    #[arg(long = "log-level")]
    log_level: Option<String>,

    /// Print the JSON Schema for the form description and exit
    #[arg(long = "print-schema")]
    print_schema: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    formgen::init_tracing(args.log_level.as_deref());

    match run(args) {
        Ok(code) => exit_code(code),
        Err(err) => {
            let message = format!("{err:#}");
            error!(error = %message, "formgen failed");
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<i32> {
    if args.print_schema {
        cfg::write_schema_to_writer(std::io::stdout())?;
        println!();
        return Ok(0);
    }

    let (input, output) = args
        .input_file
        .zip(args.output_file)
        .context("Input and output paths are required unless --print-schema is given")?;

    info!(
        version = formgen::PKG_VERSION,
        input = %input.display(),
        output = %output.display(),
        dry_run = args.dry_run,
        "Starting formgen"
    );

    let mut options = BuildOptions::new(output);
    options.source_path = args.source;
    options.compile = !args.no_compile;

    let compiler = GxxCompiler::new(args.compiler, args.dry_run);
    let report = Pipeline::new(compiler, options).run(&input)?;
    debug!(?report, "Pipeline finished");

    Ok(report.exit_code())
}

/// Clamp a compiler exit code into the range a process can report.
fn exit_code(code: i32) -> ExitCode {
    match u8::try_from(code) {
        Ok(code) => ExitCode::from(code),
        Err(_) => ExitCode::FAILURE,
    }
}
