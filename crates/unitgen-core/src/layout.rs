//! Deterministic placement of generated artifacts.
//!
//! Everything lives under the generation root:
//!
//! ```text
//! <root>/
//! └── src/
//!     ├── main.rs          # aggregate artifact (generated)
//!     ├── day7.rs          # unit source (human-written, exports `solve`)
//!     └── bin/
//!         └── day7/
//!             └── main.rs  # single-unit artifact (generated)
//! ```
//!
//! The relative `#[path]` in the single-unit template and the `src` suffix in the
//! aggregate template assume exactly this shape.

use std::path::{Path, PathBuf};

use crate::unit::UnitId;

/// Directory, relative to the root, that holds unit sources and the aggregate.
pub const SOURCE_DIR: &str = "src";

/// Directory, relative to [`SOURCE_DIR`], that holds the single-unit programs.
pub const BIN_DIR: &str = "bin";

/// Filename of every generated entrypoint.
pub const ENTRYPOINT: &str = "main.rs";

/// Output paths for one generation root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Name shared by a unit's module, source file and binary.
    pub fn unit_name(id: UnitId) -> String {
        format!("day{}", id)
    }

    /// Human-written source of a unit: `src/day<ID>.rs`.
    pub fn unit_source(&self, id: UnitId) -> PathBuf {
        self.root
            .join(SOURCE_DIR)
            .join(format!("{}.rs", Self::unit_name(id)))
    }

    /// Single-unit artifact: `src/bin/day<ID>/main.rs`.
    pub fn single_artifact(&self, id: UnitId) -> PathBuf {
        self.root
            .join(SOURCE_DIR)
            .join(BIN_DIR)
            .join(Self::unit_name(id))
            .join(ENTRYPOINT)
    }

    /// Aggregate artifact: `src/main.rs`.
    pub fn aggregate_artifact(&self) -> PathBuf {
        self.root.join(SOURCE_DIR).join(ENTRYPOINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_distinct_per_unit() {
        let layout = OutputLayout::new("/work");
        let ids = [1, 11, 2, 111].map(|v| UnitId::new(v).unwrap());
        let mut paths: Vec<_> = ids.iter().map(|&id| layout.single_artifact(id)).collect();
        paths.push(layout.aggregate_artifact());

        let unique: std::collections::HashSet<_> = paths.iter().collect();
        assert_eq!(unique.len(), paths.len());
    }

    #[test]
    fn test_layout_shape() {
        let layout = OutputLayout::new("/work");
        let id = UnitId::new(7).unwrap();
        assert_eq!(layout.single_artifact(id), Path::new("/work/src/bin/day7/main.rs"));
        assert_eq!(layout.unit_source(id), Path::new("/work/src/day7.rs"));
        assert_eq!(layout.aggregate_artifact(), Path::new("/work/src/main.rs"));
    }
}
