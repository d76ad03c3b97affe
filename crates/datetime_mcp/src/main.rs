mod cli;
mod config;
mod core;
mod errors;
mod http;
mod server;
mod utils;

use cli::Cli;
use utils::logging;

/// DateTime MCP Server
///
/// Exposes `get_current_datetime` over streamable HTTP at `/mcp`:
/// - GET: status payload for browsers, MCP stream for clients
/// - POST: MCP requests
/// - DELETE: MCP session termination
///
/// Usage: npx @modelcontextprotocol/inspector, then connect to http://localhost:3000/mcp
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse CLI arguments and environment
    let config = Cli::parse_config()?;

    logging::init_logging(config.is_development())?;
    tracing::info!(
        "Starting DateTime MCP server ({:?} environment)",
        config.environment
    );

    if let Err(e) = http::run(config).await {
        tracing::error!("Failed to run DateTime MCP server: {}", e);
        return Err(e.into());
    }

    Ok(())
}
