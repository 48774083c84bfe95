//! chainbrowse: run a browse mode against a scenario and show what it did

mod config;
mod report;
mod scenario;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use config::ModeKind;
use scenario::Scenario;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "chainbrowse", version, about = "Show which devices a controller may browse at a chain position")]
struct Cli {
    /// Scenario file (TOML)
    scenario: PathBuf,

    /// Mode to activate (defaults to the config file's choice)
    #[arg(long, value_enum)]
    mode: Option<ModeKind>,

    /// Insert new devices to the left of the selection
    #[arg(long, overrides_with = "insert_right")]
    insert_left: bool,

    /// Insert new devices to the right of the selection
    #[arg(long, overrides_with = "insert_left")]
    insert_right: bool,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Reject scenarios with invalid device chains
    #[arg(long)]
    strict: bool,

    /// Print the device tree before running the mode
    #[arg(long)]
    tree: bool,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so JSON output stays clean
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("chainbrowse=info,chainbrowse_services=info"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let cli = Cli::parse();
    let config = config::load_config();
    let kind = cli.mode.unwrap_or(config.browse.default_mode);
    let insert_left = config.browse.resolve_insert_left(cli.insert_left, cli.insert_right);
    let strict = cli.strict || config.browse.strict;

    let scenario = Scenario::load(&cli.scenario)?;
    let mut set = scenario
        .build()
        .with_context(|| format!("building scenario {}", cli.scenario.display()))?;

    match set.validate() {
        Ok(()) => {}
        Err(e) if strict => return Err(e).context("scenario has an invalid device chain"),
        Err(e) => tracing::warn!("{}", e),
    }

    if cli.tree {
        print!("{}", report::render_tree(&set));
    }

    tracing::info!("Running {:?} mode on {}", kind, cli.scenario.display());
    let report = report::run(kind, insert_left, &mut set);

    match cli.format {
        Format::Text => print!("{}", report::render_text(&report)),
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}
