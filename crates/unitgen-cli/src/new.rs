//! New command implementation for unitgen CLI.
//!
//! Scaffolds a unit source file with a stub `solve` function.

use std::path::Path;

use unitgen_core::{ArtifactWriter, OutputLayout, UnitId, scaffold_unit};

use crate::colors;

pub fn execute(id: &str, root: &Path) -> anyhow::Result<()> {
    let id: UnitId = id.parse()?;
    let layout = OutputLayout::new(root);

    let path = scaffold_unit(&layout, id, &ArtifactWriter::new())?;

    println!("Created new unit: {}", path.display());
    println!(
        "{}Run `unitgen generate` with this id to add its entrypoint.{}",
        colors::DIM,
        colors::RESET
    );

    Ok(())
}
