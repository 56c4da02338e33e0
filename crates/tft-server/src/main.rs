use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use tft_server::{AppState, Server, ServerConfig};

#[derive(Parser)]
#[command(name = "tft-server", about = "TFT Friendly backend server", version)]
struct Args {
    /// Address to listen on; overrides the config file.
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }

    let server = Server::new(config, AppState::in_memory());
    server.serve().await?;
    Ok(())
}
