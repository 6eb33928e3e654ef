//! MCP server handler for the Quran tool catalog.
//!
//! `tools/list` is answered from the [`ToolRegistry`]; `tools/call` is routed
//! by name to the catalog handler and every outcome, success or failure, is
//! normalized into one text [`Envelope`]. A failing tool is a content-level
//! error (`isError: true`), never a JSON-RPC error. Only unknown tool names are
//! reported at protocol level.

use std::sync::Arc;
use std::time::Instant;

use rmcp::{
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult,
        PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool,
    },
    service::RequestContext,
    ErrorData as McpError, RoleServer, ServerHandler,
};

use crate::clients::quran::QuranRemote;
use crate::core::content::{format_failure, format_success, Envelope};
use crate::core::tool::JsonObject;
use crate::domain::QuranService;
use crate::infra::config::ApiConfig;
use crate::tools::registry::ToolRegistry;

pub const SERVER_NAME: &str = "quran";

pub const INSTRUCTIONS: &str = "This is a MCP server for the Quran. It provides tools to get information about Chapters, Verses, and Juzs. Search tool is available to search the Quran for specific text. Or get a random verse.";

#[derive(Clone)]
pub struct QuranSvc {
    registry: ToolRegistry,
    quran: Arc<dyn QuranService>,
}

impl QuranSvc {
    pub fn new(registry: ToolRegistry, quran: Arc<dyn QuranService>) -> Self {
        Self { registry, quran }
    }

    /// Full catalog backed by the Quran.com API.
    pub fn from_config(api: &ApiConfig) -> anyhow::Result<Self> {
        let registry = ToolRegistry::register(crate::tools::catalog())?;
        let remote = QuranRemote::from_config(api)?;
        tracing::info!(tools = registry.len(), base_url = %remote.base_url(), "tool catalog registered");
        Ok(Self::new(registry, Arc::new(remote)))
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Run one tool. `None` when no tool is registered under `name`.
    pub async fn dispatch(&self, name: &str, arguments: Option<JsonObject>) -> Option<Envelope> {
        let tool = self.registry.get(name)?;
        tracing::debug!(tool = name, arguments = ?arguments, "tool call");

        let start = Instant::now();
        let outcome = (tool.handler)(self.quran.as_ref(), arguments.unwrap_or_default()).await;
        let elapsed_ms = start.elapsed().as_millis() as f64;

        let envelope = match outcome {
            Ok(value) => {
                tracing::debug!(tool = name, elapsed_ms, "tool call succeeded");
                format_success(&value)
            }
            Err(err) => {
                tracing::warn!(tool = name, elapsed_ms, error = %err, "tool call failed");
                crate::infra::logging::log_metric(tool.name, "tool_error_total", 1.0);
                format_failure(&err)
            }
        };
        crate::infra::logging::log_metric(tool.name, "tool_latency_ms", elapsed_ms);
        Some(envelope)
    }

    fn tool_list(&self) -> Vec<Tool> {
        self.registry
            .list()
            .into_iter()
            .map(|t| Tool::new(t.name, t.description, Arc::new((t.input_schema)())))
            .collect()
    }
}

impl ServerHandler for QuranSvc {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Implementation::from_build_env()
            },
            instructions: Some(INSTRUCTIONS.into()),
            ..Default::default()
        }
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        async move {
            Ok(ListToolsResult {
                tools: self.tool_list(),
                next_cursor: None,
            })
        }
    }

    fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        async move {
            match self.dispatch(&request.name, request.arguments).await {
                Some(envelope) => Ok(envelope.into()),
                None => Err(McpError::invalid_params(
                    format!("tool not found: {}", request.name),
                    None,
                )),
            }
        }
    }
}
