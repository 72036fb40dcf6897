//! Error types for unitgen-core.

use std::path::PathBuf;

use thiserror::Error;

use crate::unit::UnitId;

/// Result type for unitgen-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating artifacts.
///
/// Every variant is fatal to a generation run; the driver stops at the first one.
#[derive(Debug, Error)]
pub enum Error {
    /// A unit identifier could not be parsed.
    #[error("invalid unit id '{0}': expected a positive integer or a range like 1-5")]
    InvalidUnitId(String),

    /// No unit identifiers were supplied.
    #[error("no unit ids given")]
    EmptyRegistry,

    /// The same unit identifier appears more than once.
    #[error("duplicate unit id: {0}")]
    DuplicateUnit(UnitId),

    /// A template has unmatched placeholder or block delimiters.
    #[error("template syntax error in '{name}': {message}")]
    TemplateSyntax { name: String, message: String },

    /// A template could not be rendered against its context.
    #[error("failed to render template '{template}': {message}")]
    Render { template: String, message: String },

    /// An artifact could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Scaffolding refused to replace an existing file.
    #[error("file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// IO error outside of artifact writing.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Render the error with a recovery hint for the user, where one applies.
    pub fn with_hint(&self) -> String {
        let hint = match self {
            Error::InvalidUnitId(_) => Some("unit ids are positive integers, e.g. `unitgen generate 1 2 3` or `1-3`"),
            Error::EmptyRegistry => Some("pass at least one unit id"),
            Error::DuplicateUnit(_) => Some("each unit id may appear only once, including inside ranges"),
            Error::Write { .. } => Some("check that the output root exists and is writable"),
            Error::AlreadyExists(_) => Some("remove the file first if you want a fresh stub"),
            Error::TemplateSyntax { .. } | Error::Render { .. } | Error::Io(_) => None,
        };

        match hint {
            Some(hint) => format!("{} (hint: {})", self, hint),
            None => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_names_offending_id() {
        let err = Error::DuplicateUnit(UnitId::new(4).unwrap());
        assert_eq!(err.to_string(), "duplicate unit id: 4");
    }

    #[test]
    fn test_write_error_keeps_source() {
        let err = Error::Write {
            path: PathBuf::from("out/main.rs"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("out/main.rs"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_hint_only_for_user_errors() {
        assert!(Error::EmptyRegistry.with_hint().contains("hint:"));
        let render = Error::Render {
            template: "single".into(),
            message: "missing".into(),
        };
        assert!(!render.with_hint().contains("hint:"));
    }

    #[test]
    fn test_hint_stays_on_one_line() {
        let rendered = Error::DuplicateUnit(UnitId::new(2).unwrap()).with_hint();
        assert_eq!(rendered.lines().count(), 1);
        assert!(rendered.ends_with(")"));
    }
}
