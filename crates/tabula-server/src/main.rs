use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use tabula_server::{ServerConfig, TabulaServer};
use tabula_store::MemoryStore;
use tabula_tables::TableService;

/// Tabula: schema-less table store over HTTP.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to a TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Address to listen on (overrides the config file).
    #[arg(long)]
    bind: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ServerConfig::from_toml(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }

    let service = TableService::new(Arc::new(MemoryStore::new()));
    TabulaServer::new(config, service).serve().await?;
    Ok(())
}
