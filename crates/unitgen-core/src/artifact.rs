//! Artifact writer: the only component that touches the filesystem.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};

/// A rendered source file and where it belongs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
}

impl Artifact {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// What a write did to the previous file at the target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// No file existed.
    Created,
    /// A file with different content was replaced.
    Replaced,
    /// A file with identical content was rewritten.
    Unchanged,
}

/// Writes artifacts, creating parent directories and truncating existing files.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    sync: bool,
}

impl Default for ArtifactWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtifactWriter {
    pub fn new() -> Self {
        Self { sync: true }
    }

    /// Whether to `sync_all` each file before reporting success.
    pub fn with_sync(mut self, sync: bool) -> Self {
        self.sync = sync;
        self
    }

    /// Write an artifact, consuming it.
    pub fn write(&self, artifact: Artifact) -> Result<WriteOutcome> {
        self.write_file(&artifact.path, &artifact.content)
    }

    /// Create missing parent directories, then create-or-truncate `path` with `content`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Write`] wrapping the IO cause on directory creation or write failure.
    pub fn write_file(&self, path: &Path, content: &str) -> Result<WriteOutcome> {
        let write_error = |source| Error::Write {
            path: path.to_path_buf(),
            source,
        };

        ensure_parent_dir(path)?;

        let outcome = match fs::read(path) {
            Ok(previous) if previous == content.as_bytes() => WriteOutcome::Unchanged,
            Ok(_) => WriteOutcome::Replaced,
            Err(_) => WriteOutcome::Created,
        };

        let file = File::create(path).map_err(write_error)?;
        self.fill(file, path, content)?;

        match outcome {
            WriteOutcome::Replaced => debug!(path = %path.display(), "replaced existing file"),
            WriteOutcome::Unchanged => debug!(path = %path.display(), "content unchanged"),
            WriteOutcome::Created => {}
        }
        info!(path = %path.display(), bytes = content.len(), "wrote artifact");

        Ok(outcome)
    }

    /// Create `path` with `content`, failing if anything already exists there.
    ///
    /// Existence is checked by the open itself (`O_EXCL`), so a file created
    /// concurrently is never truncated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyExists`] if the path is taken, [`Error::Write`] otherwise.
    pub fn create_new(&self, path: &Path, content: &str) -> Result<()> {
        ensure_parent_dir(path)?;

        let file = match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(Error::AlreadyExists(path.to_path_buf()));
            }
            Err(source) => {
                return Err(Error::Write {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        self.fill(file, path, content)?;

        info!(path = %path.display(), bytes = content.len(), "created file");
        Ok(())
    }

    // The handle is dropped on every return path.
    fn fill(&self, file: File, path: &Path, content: &str) -> Result<()> {
        let write_error = |source| Error::Write {
            path: path.to_path_buf(),
            source,
        };

        let mut out = BufWriter::new(file);
        out.write_all(content.as_bytes()).map_err(write_error)?;
        let file = out.into_inner().map_err(|e| write_error(e.into_error()))?;
        if self.sync {
            file.sync_all().map_err(write_error)?;
        }
        Ok(())
    }
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}
