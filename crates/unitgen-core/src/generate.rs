//! Generator driver.
//!
//! ```text
//! ids ──► UnitRegistry (validate) ──┬─► render single ──► write src/bin/day<ID>/main.rs   (per id, in order)
//!                                   └─► render aggregate ──► write src/main.rs            (once)
//! ```
//!
//! Validation happens before anything is rendered. After that, the first render or
//! write failure stops the run; artifacts already written stay on disk.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::artifact::{Artifact, ArtifactWriter, WriteOutcome};
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::layout::OutputLayout;
use crate::render::RenderEngine;
use crate::template::TemplateStore;
use crate::unit::{UnitId, UnitRegistry};

/// Summary of a completed generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Every artifact written, in write order. The aggregate is last.
    pub artifacts: Vec<PathBuf>,

    /// Number of artifacts whose content actually changed (created or replaced).
    pub changed: usize,
}

impl GenerationReport {
    /// Path of the aggregate artifact.
    pub fn aggregate(&self) -> Option<&Path> {
        self.artifacts.last().map(PathBuf::as_path)
    }
}

/// Drives rendering and writing for a whole registry.
#[derive(Debug)]
pub struct Generator {
    layout: OutputLayout,
    engine: RenderEngine,
    writer: ArtifactWriter,
}

impl Generator {
    /// Create a generator with the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the root cannot be made absolute.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let engine = RenderEngine::new(TemplateStore::builtin());
        Self::with_engine(config, engine)
    }

    /// Create a generator with a custom render engine.
    pub fn with_engine(config: GeneratorConfig, engine: RenderEngine) -> Result<Self> {
        let root = std::path::absolute(&config.root)?;
        Ok(Self {
            layout: OutputLayout::new(root),
            engine: engine.with_syntax_check(config.verify_syntax),
            writer: ArtifactWriter::new().with_sync(config.sync),
        })
    }

    pub fn layout(&self) -> &OutputLayout {
        &self.layout
    }

    pub fn engine(&self) -> &RenderEngine {
        &self.engine
    }

    /// Render the single-unit artifact for `id`.
    pub fn single_artifact(&self, id: UnitId) -> Result<Artifact> {
        let content = self.engine.render_single(id)?;
        Ok(Artifact::new(self.layout.single_artifact(id), content))
    }

    /// Render the aggregate artifact for the whole registry.
    pub fn aggregate_artifact(&self, registry: &UnitRegistry) -> Result<Artifact> {
        let content = self
            .engine
            .render_aggregate(registry.ids(), self.layout.root())?;
        Ok(Artifact::new(self.layout.aggregate_artifact(), content))
    }

    /// Validate and render every artifact without writing anything.
    ///
    /// Artifacts come back in write order: one per id, then the aggregate.
    pub fn plan(&self, ids: &[UnitId]) -> Result<Vec<Artifact>> {
        let registry = UnitRegistry::new(ids)?;
        let mut artifacts = Vec::with_capacity(registry.len() + 1);
        for id in registry.iter() {
            artifacts.push(self.single_artifact(id)?);
        }
        artifacts.push(self.aggregate_artifact(&registry)?);
        Ok(artifacts)
    }

    /// Generate one program per unit plus the aggregate program.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::EmptyRegistry`] / [`crate::Error::DuplicateUnit`] before anything is written
    /// - [`crate::Error::Render`] or [`crate::Error::Write`] for the first failing artifact
    pub fn generate(&self, ids: &[UnitId]) -> Result<GenerationReport> {
        let registry = UnitRegistry::new(ids)?;
        info!(
            units = registry.len(),
            root = %self.layout.root().display(),
            "generating artifacts"
        );

        let mut report = GenerationReport {
            artifacts: Vec::with_capacity(registry.len() + 1),
            changed: 0,
        };

        for id in registry.iter() {
            let artifact = self.single_artifact(id)?;
            self.write(artifact, &mut report)?;
        }

        let aggregate = self.aggregate_artifact(&registry)?;
        self.write(aggregate, &mut report)?;

        Ok(report)
    }

    fn write(&self, artifact: Artifact, report: &mut GenerationReport) -> Result<()> {
        let path = artifact.path.clone();
        if self.writer.write(artifact)? != WriteOutcome::Unchanged {
            report.changed += 1;
        }
        report.artifacts.push(path);
        Ok(())
    }
}

/// Generate artifacts for `ids` under `base_dir` with the default configuration.
pub fn generate(ids: &[UnitId], base_dir: impl Into<PathBuf>) -> Result<GenerationReport> {
    Generator::new(GeneratorConfig::for_root(base_dir))?.generate(ids)
}
