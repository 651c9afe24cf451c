//! MCP front-end.
//!
//! Serves the lookup tools to an AI assistant over stdin/stdout.

pub mod handlers;

pub use handlers::LookupMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the MCP server with stdio transport until the client disconnects.
pub async fn run_server(server: LookupMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;
    service.waiting().await?;
    Ok(())
}
