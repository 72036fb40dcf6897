//! Entrypoints called from generated `main` functions.
//!
//! Output goes straight to the process streams. Write errors there (a closed
//! pipe, a full disk) are ignored: the exit status still reports the run.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use crate::sequence::{run_sequence, run_unit};
use crate::unit::Unit;

/// Input filename used by single-unit programs when none is given.
pub const DEFAULT_INPUT: &str = "input.txt";

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

#[derive(Parser)]
#[command(about = "Run every generated unit in order, stopping at the first failure")]
struct AggregateArgs {
    /// Directory holding 1.txt, 2.txt, ... (numbered by table position)
    input_dir: PathBuf,
}

#[derive(Parser)]
#[command(about = "Run a single generated unit")]
struct SingleArgs {
    /// Input file for the unit
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,
}

/// Report a clap parse result. Help and version go to `out`, usage errors to `err`.
fn report_usage<O: Write, E: Write>(error: clap::Error, out: &mut O, err: &mut E) -> u8 {
    let rendered = error.render().to_string();
    if error.use_stderr() {
        let _ = write!(err, "{}", rendered);
    } else {
        let _ = write!(out, "{}", rendered);
    }
    u8::try_from(error.exit_code()).unwrap_or(EXIT_FAILURE)
}

/// Aggregate driver over explicit arguments and streams. Returns the exit status.
///
/// `args` includes the program name, as with [`std::env::args_os`].
pub fn run_aggregate<I, T, O, E>(units: &[Unit], args: I, out: &mut O, err: &mut E) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    O: Write,
    E: Write,
{
    let start = Instant::now();
    let args = match AggregateArgs::try_parse_from(args) {
        Ok(args) => args,
        Err(error) => return report_usage(error, out, err),
    };

    match run_sequence(units, &args.input_dir, out) {
        Ok(_) => {
            let _ = writeln!(out, "Total: {:?}", start.elapsed());
            EXIT_SUCCESS
        }
        Err(failure) => {
            let _ = writeln!(err, "{}", failure);
            EXIT_FAILURE
        }
    }
}

/// Single-unit driver over explicit arguments and streams. Returns the exit status.
pub fn run_single<I, T, O, E>(unit: &Unit, args: I, out: &mut O, err: &mut E) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    O: Write,
    E: Write,
{
    let args = match SingleArgs::try_parse_from(args) {
        Ok(args) => args,
        Err(error) => return report_usage(error, out, err),
    };

    match run_unit(unit, 0, &args.input) {
        Ok(timing) => {
            if !timing.answers.is_empty() {
                let _ = writeln!(out, "{}", timing.answers);
            }
            let _ = writeln!(out, "Unit {} ({:?})", timing.id, timing.elapsed);
            EXIT_SUCCESS
        }
        Err(failure) => {
            let _ = writeln!(err, "unit {} failed: {}", unit.id(), failure);
            EXIT_FAILURE
        }
    }
}

/// `main` body of a generated aggregate program.
pub fn aggregate_main(units: &[Unit]) -> ExitCode {
    let status = run_aggregate(
        units,
        std::env::args_os(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
    ExitCode::from(status)
}

/// `main` body of a generated single-unit program.
pub fn single_main(unit: &Unit) -> ExitCode {
    let status = run_single(
        unit,
        std::env::args_os(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
    ExitCode::from(status)
}
