use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use color_eyre::Result;
use healthsnap::config::{self, Config};
use healthsnap::system::{self, Collector};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "healthsnap",
    about = "One-shot host health snapshot written as timestamped JSON"
)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory the snapshot file is written into
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config_for_cli(&cli);
    let output_dir = config
        .output
        .directory
        .unwrap_or_else(|| PathBuf::from("."));

    let mut collector = Collector::new();
    let path = healthsnap::run(
        &mut collector,
        system::root_mount(),
        &output_dir,
        Local::now(),
    )?;
    info!("snapshot written to {}", path.display());

    Ok(())
}

fn load_config_for_cli(cli: &Cli) -> Config {
    let mut config = match &cli.config {
        Some(path) => config::load_config_from_path(path),
        None => config::load_config(),
    };

    if let Some(ref dir) = cli.output_dir {
        config.output.directory = Some(dir.clone());
    }

    config
}
