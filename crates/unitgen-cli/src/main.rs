//! unitgen CLI - one entrypoint per unit plus an aggregate runner.

mod colors;
mod generate;
mod new;
mod plan;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use unitgen_core::{GeneratorConfig, TemplateName};

#[derive(Parser)]
#[command(name = "unitgen")]
#[command(about = "Generate one entrypoint per unit plus an aggregate runner")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write src/bin/day<ID>/main.rs for every unit and src/main.rs for all of them
    Generate {
        /// Unit ids in execution order (single ids or ranges like 1-5)
        ids: Vec<String>,

        /// Generation root
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Skip checking that rendered sources parse as Rust
        #[arg(long)]
        no_verify: bool,

        /// Skip fsync after each write
        #[arg(long)]
        no_sync: bool,
    },

    /// Print the paths `generate` would write, without writing
    Plan {
        /// Unit ids in execution order (single ids or ranges like 1-5)
        ids: Vec<String>,

        /// Generation root
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },

    /// Print one rendered artifact to stdout
    Render {
        /// Which template to render
        #[arg(value_enum)]
        template: TemplateArg,

        /// Unit ids (exactly one for `single`)
        ids: Vec<String>,

        /// Generation root
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },

    /// Create src/day<ID>.rs with a stub solve function
    New {
        /// Unit id
        id: String,

        /// Generation root
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum TemplateArg {
    Single,
    Aggregate,
}

impl From<TemplateArg> for TemplateName {
    fn from(arg: TemplateArg) -> Self {
        match arg {
            TemplateArg::Single => TemplateName::Single,
            TemplateArg::Aggregate => TemplateName::Aggregate,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(tracing::Level::DEBUG.into())
    } else {
        tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Helper to format unitgen-core errors with recovery hints
    let format_error = |err: anyhow::Error| -> anyhow::Error {
        if let Some(core_err) = err.downcast_ref::<unitgen_core::Error>() {
            anyhow::anyhow!("{}", core_err.with_hint())
        } else {
            err
        }
    };

    match cli.command {
        Commands::Generate {
            ids,
            root,
            no_verify,
            no_sync,
        } => {
            let mut config = GeneratorConfig::for_root(root);
            if no_verify {
                config = config.without_verify();
            }
            if no_sync {
                config = config.without_sync();
            }
            generate::execute(&ids, config).map_err(format_error)?;
        }

        Commands::Plan { ids, root } => {
            plan::execute(&ids, GeneratorConfig::for_root(root)).map_err(format_error)?;
        }

        Commands::Render {
            template,
            ids,
            root,
        } => {
            render::execute(template.into(), &ids, GeneratorConfig::for_root(root))
                .map_err(format_error)?;
        }

        Commands::New { id, root } => {
            new::execute(&id, &root).map_err(format_error)?;
        }
    }

    Ok(())
}
