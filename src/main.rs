// luawrap: Lua C API wrapper generator

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use crossterm::style::Stylize;
use tracing_subscriber::EnvFilter;

use luawrap::constants::DEFAULT_INPUT;
use luawrap::transcoder::errors::RunError;
use luawrap::transcoder::sink::{WrapperSink, WriterSink};
use luawrap::{TranscodeOptions, Transcoder};

/// Generate handle-forwarding C++ wrappers from Lua C API signatures
#[derive(Parser, Debug)]
#[command(name = "luawrap", version)]
struct Args {
    /// Declaration listing, one signature per line
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Write wrappers to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report every bad line instead of stopping at the first
    #[arg(long)]
    keep_going: bool,

    /// Log every transcoded line (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout carries only generated code
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<(), RunError> {
    let input = File::open(&args.input).map_err(|source| RunError::Open {
        path: args.input.clone(),
        source,
    })?;
    let reader = BufReader::new(input);
    let options = TranscodeOptions {
        keep_going: args.keep_going,
    };

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|source| RunError::Open {
                path: path.clone(),
                source,
            })?;
            transcode(reader, WriterSink::new(BufWriter::new(file)), options)
        }
        None => transcode(
            reader,
            WriterSink::new(BufWriter::new(io::stdout().lock())),
            options,
        ),
    }
}

fn transcode<R: BufRead, S: WrapperSink>(
    reader: R,
    sink: S,
    options: TranscodeOptions,
) -> Result<(), RunError> {
    Transcoder::new(sink, options).run(reader).map(|_| ())
}

fn report(err: &RunError) {
    let label = "error:".red().bold();
    let line_errors = err.line_errors();

    if line_errors.is_empty() {
        eprintln!("{} {}", label, err);
        return;
    }

    for line_err in line_errors {
        eprintln!("{} line {}: {}", label, line_err.line, line_err.source);
        eprintln!("  {} {}", "-->".blue().bold(), line_err.text);
    }
    if let RunError::Batch { .. } = err {
        eprintln!("{} {}", label, err);
    }
}
