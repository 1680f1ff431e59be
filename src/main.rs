use anyhow::Context;
use clap::Parser;
use hello_mvi::config::Config;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hello-mvi", version, about = "Model-View-Intent greeting screen")]
struct Cli {
    /// Configuration file (default: <config_dir>/hello-mvi/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Event poll and tick interval in milliseconds
    #[arg(long, value_name = "MS")]
    tick_rate: Option<u64>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = resolve_config(&cli)?;
    let log_path = hello_mvi::logging::init_tracing(&config.logging)?;
    tracing::info!(log = %log_path.display(), "Starting hello-mvi {}", env!("CARGO_PKG_VERSION"));

    hello_mvi::ui::runtime::run(&config).await
}

fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().context("failed to load default config")?,
    };

    if let Some(tick_rate) = cli.tick_rate {
        config.ui.tick_rate_ms = tick_rate;
    }
    if let Some(log_file) = &cli.log_file {
        config.logging.file = Some(log_file.clone());
    }

    config.validate()?;
    Ok(config)
}
