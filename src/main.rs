use clap::Parser;
use gerrit_dashboard::config::AppConfig;
use gerrit_dashboard::server::{self, AppState};
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;

#[derive(Parser)]
#[command(
    name = "gerrit-dashboard",
    about = "Gerrit open-patch review dashboard",
    version
)]
struct Args {
    /// Path to the TOML config file (defaults to ./config.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the listen port from the config file
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = match AppConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("[main] {}", e);
            std::process::exit(1);
        }
    };
    if let Some(port) = args.port {
        config.port = port;
    }

    let state = match AppState::from_config(&config) {
        Ok(state) => state,
        Err(e) => {
            log::error!("[main] {}", e);
            std::process::exit(1);
        }
    };

    let cancel = CancellationToken::new();
    let shutdown = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::info!("[main] shutdown requested");
            shutdown.cancel();
        }
    });

    if let Err(e) = server::serve(state, config.port, cancel).await {
        log::error!("[main] {}", e);
        std::process::exit(1);
    }
}
