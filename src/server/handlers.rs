//! MCP tool handlers for the lookup bot.
//!
//! This module exposes the query dispatcher as MCP tools using the rmcp SDK's
//! tool_router pattern.

use crate::dispatcher::QueryDispatcher;
use crate::domain::QueryKind;
use crate::formatter;
use crate::models::RenderedResponse;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;

/// MCP server that answers phone, IP and email lookups.
#[derive(Clone)]
pub struct LookupMcpServer {
    dispatcher: QueryDispatcher,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for LookupMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Send a phone number, an IPv4 address or an email address to the lookup tool to get country/operator, geolocation or known data breaches.".into()),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct LookupParams {
    /// Phone number, IPv4 address or email address
    query: String,
}

fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

/// JSON body returned by the `lookup` tool.
pub fn lookup_payload(kind: QueryKind, response: &RenderedResponse) -> serde_json::Value {
    serde_json::json!({
        "kind": kind,
        "text": response.text,
        "actions": response.actions,
    })
}

#[tool_router]
impl LookupMcpServer {
    pub fn new(dispatcher: QueryDispatcher) -> Self {
        Self {
            dispatcher,
            tool_router: Self::tool_router(),
        }
    }

    /// Classify a query and run the matching lookup.
    #[tool(
        description = "Look up a phone number (country, operator, mobile flag), an IPv4 address (country, city, ISP) or an email address (known data breaches). Returns the rendered reply and any action links."
    )]
    async fn lookup(&self, params: Parameters<LookupParams>) -> Result<CallToolResult, McpError> {
        let (kind, response) = self.dispatcher.handle_classified(&params.0.query).await;

        let json_response =
            serde_json::to_string_pretty(&lookup_payload(kind, &response)).map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }

    /// Describe the accepted inputs.
    #[tool(description = "Describe which inputs the lookup tool accepts")]
    async fn help(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(
            formatter::render_welcome().text,
        )]))
    }
}
