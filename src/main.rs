//! OSINT Lookup Bot - Main entry point
//!
//! Loads configuration, builds the query dispatcher and runs the configured
//! chat front-end until it exits.

use anyhow::Result;
use osint_lookup_bot::{Config, LookupMcpServer, QueryDispatcher, TelegramClient, Transport};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries MCP traffic when that transport is used.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Lookup timeout: {} seconds, transport: {:?}",
        config.request_timeout, config.transport
    );

    let dispatcher = QueryDispatcher::from_config(&config);

    match config.transport {
        Transport::Telegram => {
            let client = TelegramClient::new(&config)?;
            osint_lookup_bot::telegram::run_polling(client, dispatcher, config.poll_timeout)
                .await?;
        }
        Transport::Mcp => {
            info!("Starting MCP server with stdio transport");
            osint_lookup_bot::server::run_server(LookupMcpServer::new(dispatcher)).await?;
        }
    }

    info!("OSINT Lookup Bot shutdown complete");
    Ok(())
}
