//! Stub source files for new units.

use std::path::PathBuf;

use crate::artifact::ArtifactWriter;
use crate::error::Result;
use crate::layout::OutputLayout;
use crate::unit::UnitId;

/// Source of a fresh unit whose `solve` reads its input and counts lines.
pub fn unit_stub(id: UnitId) -> String {
    format!(
        r#"//! Unit {id}.

use unitgen_runtime::{{Answers, UnitResult}};

pub fn solve(input: &str) -> UnitResult {{
    let text = std::fs::read_to_string(input)?;
    let part1 = text.lines().count();

    Ok(Answers::new().part(part1))
}}
"#,
        id = id
    )
}

/// Write a stub for `id` at its layout path. Never overwrites an existing file.
///
/// # Errors
///
/// Returns [`Error::AlreadyExists`](crate::Error::AlreadyExists) if the unit source is already present.
pub fn scaffold_unit(layout: &OutputLayout, id: UnitId, writer: &ArtifactWriter) -> Result<PathBuf> {
    let path = layout.unit_source(id);
    writer.create_new(&path, &unit_stub(id))?;
    Ok(path)
}
