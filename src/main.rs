use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use opslag_core::config::OpslagConfig;
use opslag_core::config::constants::config_files;
use opslag_core::serve;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "opslag",
    version,
    about = "Serve per-person post datasets and draft new posts in their style"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(long, default_value = config_files::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Directory holding the per-person CSV files
    #[arg(long)]
    data_dir: Option<String>,

    /// Address to bind the HTTP server to, e.g. 127.0.0.1:3001
    #[arg(long)]
    bind: Option<String>,

    /// Generation model ID, e.g. gpt-4o
    #[arg(long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Cli::parse();

    let mut config = OpslagConfig::load_or_default(&args.config)
        .with_context(|| format!("cannot load configuration from {}", args.config.display()))?;

    if let Some(data_dir) = args.data_dir {
        config.server.data_dir = data_dir;
    }
    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }
    if let Some(model) = args.model {
        config.generation.model = model;
    }

    serve::run(config).await
}
