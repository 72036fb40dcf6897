//! Runtime support for programs generated by unitgen.
//!
//! Every generated entrypoint builds a `const` table of [`Unit`]s in registry
//! order and hands it to one of the shim entrypoints:
//!
//! ```text
//! src/bin/day7/main.rs ──► single_main(&UNIT)      reads [INPUT] (default input.txt)
//! src/main.rs          ──► aggregate_main(UNITS)   reads <DIR>/1.txt, <DIR>/2.txt, ...
//! ```
//!
//! Units run strictly one after another. The first failure stops the run.

mod sequence;
mod shim;
mod unit;

pub use sequence::{RunError, RunSummary, UnitTiming, input_path, run_sequence, run_unit};
pub use shim::{
    DEFAULT_INPUT, EXIT_FAILURE, EXIT_SUCCESS, aggregate_main, run_aggregate, run_single,
    single_main,
};
pub use unit::{Answers, Unit, UnitFailure, UnitFn, UnitResult};
