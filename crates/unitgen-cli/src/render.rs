//! Render command implementation for unitgen CLI.
//!
//! Prints one rendered artifact to stdout.

use unitgen_core::{Generator, GeneratorConfig, TemplateName, UnitRegistry, expand_ids};

pub fn execute(template: TemplateName, ids: &[String], config: GeneratorConfig) -> anyhow::Result<()> {
    let ids = expand_ids(ids)?;
    let registry = UnitRegistry::new(&ids)?;
    let generator = Generator::new(config)?;

    let artifact = match template {
        TemplateName::Single => {
            let [id] = registry.ids() else {
                anyhow::bail!(
                    "the single template takes exactly one unit id, got {}",
                    registry.len()
                );
            };
            generator.single_artifact(*id)?
        }
        TemplateName::Aggregate => generator.aggregate_artifact(&registry)?,
    };

    print!("{}", artifact.content);
    Ok(())
}
