//! # Main Entry Point
//!
//! Starts the Tekuila menu MCP server:
//! - Domain: Configuration and Types
//! - Infrastructure: Feed fetching, MCP server and transports
//! - Application: Parsing, Date context, Menu rendering
//!

mod application;
mod domain;
mod infrastructure;
mod strings;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::application::menu::MenuService;
use crate::domain::config::AppConfig;
use crate::infrastructure::feed::FeedFetcher;
use crate::infrastructure::mcp::{MenuServer, transport};
use crate::strings::logs;

#[derive(Debug, Parser)]
#[command(name = "tekuila-mcp", about = "MCP server for the Tekuila restaurant menus")]
struct Args {
    /// Path to the YAML configuration file (optional)
    #[arg(long, default_value = "data/config.yaml")]
    config: PathBuf,

    /// Serve streamable HTTP on this port instead of stdio
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// Bind address for the HTTP transport
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Load Configuration
    let mut config = AppConfig::load(&args.config)?;
    if let Some(port) = args.port {
        config.server.port = Some(port);
    }
    if let Some(host) = args.host {
        config.server.host = host;
    }

    // 2. Logging Setup
    // stdout belongs to the stdio transport, so console output goes to stderr.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.filter));

    let console_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    // The guard flushes the file writer on drop, so it lives until main returns.
    let (file_layer, _guard) = match config.logging.file_target()? {
        Some((dir, name)) => {
            let file_appender = tracing_appender::rolling::never(dir, name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    tracing::info!("{}", logs::SERVER_START);
    if args.config.exists() {
        tracing::info!("{}", logs::config_loaded(&args.config.display().to_string()));
    }

    // 3. Initialize Components
    let fetcher = Arc::new(FeedFetcher::new(&config.feed));
    let menus = Arc::new(MenuService::new(fetcher));
    let server = MenuServer::new(menus);

    tracing::info!("{}", logs::available("tools", &server.tool_names()));
    tracing::info!("{}", logs::available("prompts", &server.prompt_names()));

    // 4. Serve
    match config.server.port {
        Some(port) => transport::serve_http(server, &config.server.host, port).await?,
        None => transport::serve_stdio(server).await?,
    }

    tracing::info!("{}", logs::SERVER_STOPPED);
    Ok(())
}
