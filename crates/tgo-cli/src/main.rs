use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use commands::{
    catalog::{self, CatalogArgs},
    compute::{self, ComputeArgs},
    resolve::{self, ResolveArgs},
    version::{self, VersionArgs},
};
use tgo_engine::{EngineConfig, EngineHandle};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "tgo", about = "TGO emission-factor lookup and CO2e calculator")]
struct Cli {
    /// YAML engine configuration.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// JSON factor dataset overriding the configured catalog.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up the factor record a token refers to.
    Resolve(ResolveArgs),
    /// Compute kg CO2e for an activity amount.
    Compute(ComputeArgs),
    /// Inspect, verify or export the factor catalog.
    Catalog(CatalogArgs),
    /// Print version and catalog provenance.
    Version(VersionArgs),
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let config = load_config(cli)?;
    let engine = EngineHandle::from_config(&config)?;
    match &cli.command {
        Command::Resolve(args) => resolve::run(&engine, args),
        Command::Compute(args) => compute::run(&engine, &config, args),
        Command::Catalog(args) => catalog::run(&engine, args),
        Command::Version(args) => version::run(&engine, args),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(cli: &Cli) -> Result<EngineConfig, Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_path(path)?,
        None => EngineConfig::default(),
    };
    if let Some(path) = &cli.catalog {
        config.catalog.path = Some(path.clone());
    }
    tracing::debug!(?config, "engine configuration");
    Ok(config)
}
