//! Sequential, fail-fast execution of a unit table.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::debug;

use crate::unit::{Answers, Unit, UnitFailure};

/// Input file for the unit at zero-based `position` in the table.
///
/// Files are named by position (`1.txt` for the first entry), not by unit id.
pub fn input_path(base_dir: &Path, position: usize) -> PathBuf {
    base_dir.join(format!("{}.txt", position + 1))
}

/// Timing of one successful unit.
#[derive(Debug, Clone)]
pub struct UnitTiming {
    /// Zero-based position in the table.
    pub position: usize,
    pub id: u32,
    pub input: PathBuf,
    pub answers: Answers,
    pub elapsed: Duration,
}

/// Outcome of a fully successful run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub timings: Vec<UnitTiming>,
    pub total: Duration,
}

/// The first unit that failed. Units after `position` were never invoked.
#[derive(Debug, Error)]
#[error("unit {id} failed on {}: {failure}", .input.display())]
pub struct RunError {
    pub position: usize,
    pub id: u32,
    pub input: PathBuf,
    #[source]
    pub failure: UnitFailure,
}

/// Invoke one unit and measure it with a monotonic clock.
///
/// Units receive their input path as `&str`; a path that is not valid UTF-8 fails
/// the unit without invoking it.
pub fn run_unit(
    unit: &Unit,
    position: usize,
    input: &Path,
) -> Result<UnitTiming, UnitFailure> {
    let path = input.to_str().ok_or_else(|| {
        UnitFailure::new(format!("input path {} is not valid UTF-8", input.display()))
    })?;

    let start = Instant::now();
    let answers = unit.solve(path)?;
    let elapsed = start.elapsed();

    debug!(position, id = unit.id(), ?elapsed, "unit finished");

    Ok(UnitTiming {
        position,
        id: unit.id(),
        input: input.to_path_buf(),
        answers,
        elapsed,
    })
}

/// Run every unit in table order, printing each unit's answers and elapsed time to `out`.
///
/// Stops at the first failure and returns it; no retries. Write errors on `out`
/// (e.g. a closed pipe) are ignored so they never mask a unit's own result.
pub fn run_sequence<W: Write>(
    units: &[Unit],
    base_dir: &Path,
    out: &mut W,
) -> Result<RunSummary, RunError> {
    let start = Instant::now();
    let mut timings = Vec::with_capacity(units.len());

    for (position, unit) in units.iter().enumerate() {
        let input = input_path(base_dir, position);
        let timing = run_unit(unit, position, &input).map_err(|failure| RunError {
            position,
            id: unit.id(),
            input: input.clone(),
            failure,
        })?;

        if !timing.answers.is_empty() {
            let _ = writeln!(out, "{}", timing.answers);
        }
        let _ = writeln!(out, "Unit {}: {:?}", timing.id, timing.elapsed);
        timings.push(timing);
    }

    Ok(RunSummary {
        timings,
        total: start.elapsed(),
    })
}
