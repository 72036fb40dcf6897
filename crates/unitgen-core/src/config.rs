//! Generator configuration.

use std::path::PathBuf;

/// Configuration for a generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Generation root. Artifacts land under `<root>/src`. Made absolute before use.
    pub root: PathBuf,

    /// Parse every rendered artifact as Rust before accepting it
    pub verify_syntax: bool,

    /// Call `sync_all` after each artifact is written
    pub sync: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            verify_syntax: true,
            sync: true,
        }
    }
}

impl GeneratorConfig {
    /// Default configuration rooted at `root`.
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    /// Skip the syntax check of rendered output.
    pub fn without_verify(mut self) -> Self {
        self.verify_syntax = false;
        self
    }

    /// Skip `sync_all` after writes. Useful for tests and throwaway trees.
    pub fn without_sync(mut self) -> Self {
        self.sync = false;
        self
    }
}
