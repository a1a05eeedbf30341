use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;

use webchat::{Cli, GroqClient, WebServer, WebServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let relay_config = cli.relay_config();
    relay_config.validate()?;

    let bind_addr: SocketAddr = format!("{}:{}", cli.host, cli.port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", cli.host, cli.port))?;

    log::info!("Using model {}", relay_config.model_id);

    let backend = Arc::new(GroqClient::new(relay_config));
    let server = WebServer::new(
        WebServerConfig {
            bind_addr,
            static_dir: cli.static_dir.clone(),
        },
        backend,
    );

    server.start().await
}
