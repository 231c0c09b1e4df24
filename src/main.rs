use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::EnvFilter;

use marketwatch::shared::config::ConfigLoader;

#[derive(Parser, Debug)]
#[command(version, about = "Polls market prices and reports BUY/SELL/HOLD signals to Telegram")]
struct Args {
    /// Path to config file (optional, environment variables take priority)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Check interval in seconds (overrides CHECK_INTERVAL_SECONDS)
    #[arg(long)]
    interval: Option<u64>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // CLI has higher priority than env and file
    let cfg = match ConfigLoader::load(args.config.as_deref(), args.interval) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("{}. Exiting.", e);
            return Err(e.into());
        }
    };

    marketwatch::app::run(cfg).await
}
