//! Source generation engine for unitgen.
//!
//! This crate provides:
//! - Unit registry (ordered, duplicate-free unit ids)
//! - Template store (the built-in single-unit and aggregate templates)
//! - Render engine (context → Rust source, optionally syntax-checked)
//! - Artifact writer (the only filesystem writer)
//! - Generator driver tying them together
//!
//! The generated programs link against `unitgen-runtime`.

pub mod artifact;
pub mod config;
pub mod error;
pub mod generate;
pub mod layout;
pub mod render;
pub mod scaffold;
pub mod template;
pub mod unit;

pub use artifact::{Artifact, ArtifactWriter, WriteOutcome};
pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use generate::{GenerationReport, Generator, generate};
pub use layout::OutputLayout;
pub use render::{RenderContext, RenderEngine};
pub use scaffold::{scaffold_unit, unit_stub};
pub use template::{TemplateName, TemplateStore};
pub use unit::{UnitId, UnitRegistry, expand_ids};
