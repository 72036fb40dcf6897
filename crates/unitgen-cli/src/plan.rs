//! Plan command implementation for unitgen CLI.
//!
//! Renders everything and prints the target paths in write order. Writes nothing.

use unitgen_core::{Generator, GeneratorConfig, expand_ids};

pub fn execute(ids: &[String], config: GeneratorConfig) -> anyhow::Result<()> {
    let ids = expand_ids(ids)?;
    let generator = Generator::new(config)?;

    for artifact in generator.plan(&ids)? {
        println!("{}", artifact.path.display());
    }

    Ok(())
}
