//! MCP server exposing the Kagi tools
//!
//! Two tools are registered: `kagi_search_fetch` and `kagi_summarizer`.
//! Tool calls never fail at the protocol level; handler errors come back as
//! ordinary text starting with `Error: `.

use crate::kagi::SummaryType;
use crate::tools::KagiTools;
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    transport::stdio,
    ErrorData as McpError, ServerHandler, ServiceExt,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

pub const SERVER_NAME: &str = "kagimcp";

/// Arguments of `kagi_search_fetch`
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchFetchArgs {
    #[schemars(
        description = "One or more concise, keyword-focused search queries. Include essential context within each query for standalone use."
    )]
    #[serde(default)]
    pub queries: Vec<String>,
}

/// Arguments of `kagi_summarizer`
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SummarizerArgs {
    #[schemars(description = "A URL to a document to summarize.")]
    #[serde(default)]
    pub url: String,

    #[schemars(
        description = "Type of summary to produce. Options are 'summary' for paragraph prose and 'takeaway' for a bulleted list of key points."
    )]
    #[serde(default)]
    pub summary_type: Option<SummaryType>,

    #[schemars(
        description = "Desired output language using language codes (e.g., 'EN' for English). If not specified, the document's original language influences the output."
    )]
    #[serde(default)]
    pub target_language: Option<String>,
}

/// rmcp service wrapping [`KagiTools`]
#[derive(Clone)]
pub struct KagiMcpServer {
    tools: KagiTools,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl KagiMcpServer {
    pub fn new(tools: KagiTools) -> Self {
        Self {
            tools,
            tool_router: Self::tool_router(),
        }
    }

    /// Names of the registered tools
    pub fn tool_names(&self) -> Vec<String> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect()
    }

    #[tool(
        description = "Fetch web results based on one or more queries using the Kagi Search API. Use for general search and when the user explicitly tells you to 'fetch' results/information. Results are from all queries given. They are numbered continuously, so that a user may be able to refer to a result by a specific number."
    )]
    async fn kagi_search_fetch(
        &self,
        Parameters(args): Parameters<SearchFetchArgs>,
    ) -> Result<CallToolResult, McpError> {
        let text = self.tools.kagi_search_fetch(&args.queries).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(
        description = "Summarize content from a URL using the Kagi Summarizer API. The Summarizer can summarize any document type (text webpage, video, audio, etc.)"
    )]
    async fn kagi_summarizer(
        &self,
        Parameters(args): Parameters<SummarizerArgs>,
    ) -> Result<CallToolResult, McpError> {
        let text = self
            .tools
            .kagi_summarizer(&args.url, args.summary_type, args.target_language)
            .await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[tool_handler]
impl ServerHandler for KagiMcpServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(
                "Kagi web search and document summarization. Use kagi_search_fetch for web results and kagi_summarizer to summarize a URL."
                    .to_string(),
            ),
            ..Default::default()
        };
        info.server_info.name = SERVER_NAME.to_string();
        info.server_info.version = env!("CARGO_PKG_VERSION").to_string();
        info
    }
}

/// Serve over stdio until the client disconnects or ctrl-c is received
pub async fn serve_stdio(server: KagiMcpServer) -> Result<(), McpError> {
    info!(tools = ?server.tool_names(), "Starting MCP server on stdio");

    let running = server
        .serve(stdio())
        .await
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;

    tokio::select! {
        result = running.waiting() => {
            if let Err(e) = result {
                error!("MCP server task failed: {}", e);
                return Err(McpError::internal_error(e.to_string(), None));
            }
            info!("MCP client disconnected");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received SIGINT, shutting down");
        }
    }

    Ok(())
}
