mod report;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tether_common::StepDefinition;
use tether_core::{ConfigLoader, HtmlDocument, TetherConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tether", version, about = "Resolve tour step targets and positioning")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Config file (defaults to ./tether.yaml, then ~/.tether/config.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a step against an HTML page and print the result as JSON
    Resolve {
        /// HTML page to query
        #[arg(long)]
        page: PathBuf,
        /// Step definition (YAML or JSON)
        #[arg(long)]
        step: PathBuf,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Print the effective configuration as YAML
    Defaults,
}

fn load_config(path: Option<&Path>) -> anyhow::Result<TetherConfig> {
    let config = match path {
        Some(path) => ConfigLoader::load_from(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ConfigLoader::load_default()?,
    };
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the JSON report.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    match args.command {
        Command::Resolve { page, step, pretty } => {
            tracing::info!(page = %page.display(), step = %step.display(), "resolving step");
            let document = HtmlDocument::load_from(&page)
                .with_context(|| format!("reading page {}", page.display()))?;
            let definition = StepDefinition::load_from(&step)
                .with_context(|| format!("reading step {}", step.display()))?;

            let report = report::build(&definition, &document, &config.positioning)?;
            let output = if pretty {
                serde_json::to_string_pretty(&report)?
            } else {
                serde_json::to_string(&report)?
            };
            println!("{}", output);
        }
        Command::Defaults => {
            print!("{}", serde_yaml::to_string(&config)?);
        }
    }

    Ok(())
}
