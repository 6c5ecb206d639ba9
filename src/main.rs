//! 1inch Cross-Chain Swap MCP Server
//!
//! A Model Context Protocol server for 1inch cross-chain swaps and portfolio data.

use rmcp::ServiceExt;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use oneinch_crosschain_mcp::{Config, OneInchServer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging; stdout is reserved for the MCP transport
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    tracing::info!("Starting 1inch Cross-Chain MCP Server");

    let server = OneInchServer::new(config)?;

    // Run with stdio transport
    let transport = rmcp::transport::stdio();
    let running = server.serve(transport).await?;

    running.waiting().await?;

    Ok(())
}
