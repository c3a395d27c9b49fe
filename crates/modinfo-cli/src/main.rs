mod commands;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use modinfo_registry::{ModRegistry, ModStatus};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "modinfo", about = "Inspect the bundled mod registry")]
struct Args {
    /// Read mod data from this JSON file instead of the bundled copy
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List records, optionally filtered
    List {
        #[arg(long)]
        status: Option<ModStatus>,
        #[arg(long)]
        server: Option<String>,
    },
    /// Print one record as JSON
    Show { name: String },
    /// Print the whole registry as JSON
    Export,
    /// Count records per status
    Stats,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let loaded;
    let registry: &ModRegistry = match &args.data {
        Some(path) => {
            loaded = modinfo_registry::load_from_path(path)
                .with_context(|| format!("loading mod data from {}", path.display()))?;
            &loaded
        }
        None => modinfo_registry::try_registry()
            .map_err(|e| anyhow::anyhow!("bundled mod data is invalid: {}", e))?,
    };
    debug!("Registry has {} records", registry.len());

    let output = match args.command {
        Command::List { status, server } => commands::list(registry, status, server.as_deref()),
        Command::Show { name } => commands::show(registry, &name)?,
        Command::Export => registry.to_json_pretty()?,
        Command::Stats => commands::stats(registry),
    };

    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
