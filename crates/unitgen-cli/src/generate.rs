//! Generate command implementation for unitgen CLI.
//!
//! Writes one single-unit program per id and the aggregate program.

use std::time::Instant;

use unitgen_core::{Generator, GeneratorConfig, expand_ids};

use crate::colors;

/// Generate every artifact for `ids` under the configured root.
pub fn execute(ids: &[String], config: GeneratorConfig) -> anyhow::Result<()> {
    let start = Instant::now();
    let ids = expand_ids(ids)?;
    let generator = Generator::new(config)?;

    println!(
        "\n{}unitgen{} - Generating {}{} unit(s){} in {}\n",
        colors::BOLD,
        colors::RESET,
        colors::CYAN,
        ids.len(),
        colors::RESET,
        generator.layout().root().display()
    );

    print!("{}  ◆ Writing artifacts{} ... ", colors::BLUE, colors::RESET);
    colors::flush_stdout();

    // Close the progress line before the error reaches stderr.
    let report = match generator.generate(&ids) {
        Ok(report) => report,
        Err(e) => {
            println!("{}✗{}", colors::RED, colors::RESET);
            return Err(e.into());
        }
    };

    println!(
        "{}✓{} ({} written, {} changed)",
        colors::GREEN,
        colors::RESET,
        report.artifacts.len(),
        report.changed
    );

    println!();
    for path in &report.artifacts {
        println!("{}    {}{}", colors::DIM, path.display(), colors::RESET);
    }

    println!();
    println!(
        "{}Time:{} {:.2}s",
        colors::DIM,
        colors::RESET,
        start.elapsed().as_secs_f64()
    );

    Ok(())
}
