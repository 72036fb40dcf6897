//! Unit function contract.

use std::fmt;

use thiserror::Error;

/// Result returned by a unit's `solve` function.
pub type UnitResult = Result<Answers, UnitFailure>;

/// Signature every unit exposes: takes the input file path, returns answers.
pub type UnitFn = fn(&str) -> UnitResult;

/// One entry of a generated unit table.
#[derive(Clone, Copy)]
pub struct Unit {
    id: u32,
    solve: UnitFn,
}

impl Unit {
    /// Create a table entry. `const` so generated code can build a static table.
    pub const fn new(id: u32, solve: UnitFn) -> Self {
        Self { id, solve }
    }

    /// The unit identifier captured at generation time.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Invoke the unit against an input path.
    pub fn solve(&self, input: &str) -> UnitResult {
        (self.solve)(input)
    }
}

impl fmt::Debug for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unit").field("id", &self.id).finish_non_exhaustive()
    }
}

/// Ordered answers produced by a unit, one per part.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    parts: Vec<String>,
}

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the answer for the next part.
    pub fn part(mut self, answer: impl fmt::Display) -> Self {
        self.parts.push(answer.to_string());
        self
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl fmt::Display for Answers {
    /// One `Part N: answer` line per part, numbered from 1.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, answer) in self.parts.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "Part {}: {}", idx + 1, answer)?;
        }
        Ok(())
    }
}

/// A unit's own reported failure. Opaque to the runtime beyond its message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct UnitFailure {
    message: String,
}

impl UnitFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<std::io::Error> for UnitFailure {
    fn from(err: std::io::Error) -> Self {
        Self::new(err.to_string())
    }
}

impl From<std::num::ParseIntError> for UnitFailure {
    fn from(err: std::num::ParseIntError) -> Self {
        Self::new(err.to_string())
    }
}

impl From<String> for UnitFailure {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for UnitFailure {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}
