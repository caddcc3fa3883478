//! MCP session over streamable HTTP.
//!
//! One session owns one transport-level connection. The elicitation
//! handler is installed at connect time and stays bound for the lifetime
//! of the session.

use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;

use rmcp::ServiceExt;
use rmcp::model::CallToolRequestParams;
use rmcp::service::{RoleClient, RunningService};
use rmcp::transport::StreamableHttpClientTransport;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::elicitation::ElicitationHandler;
use crate::error::{McpError, McpResult};
use crate::handler::MaitreClientHandler;
use crate::types::{ServerInfo, ToolDefinition, ToolResult};

/// Timeout for graceful session close.
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Type alias for a running MCP client service.
type McpService = RunningService<RoleClient, MaitreClientHandler>;

/// A live MCP session bound to one server.
pub struct McpSession {
    /// Server name used for logging and elicitation labeling.
    server_name: String,
    /// Running rmcp service.
    service: McpService,
    /// Server info captured from the handshake.
    info: Option<ServerInfo>,
}

impl McpSession {
    /// Connect to an MCP server over streamable HTTP and perform the
    /// handshake, installing `elicitation` as the session's elicitation
    /// handler.
    ///
    /// # Errors
    ///
    /// Returns [`McpError::ConnectionFailed`] if the endpoint is
    /// unreachable or the handshake fails.
    pub async fn connect(
        server_name: impl Into<String>,
        url: &str,
        elicitation: Arc<dyn ElicitationHandler>,
    ) -> McpResult<Self> {
        let server_name = server_name.into();

        let transport = StreamableHttpClientTransport::from_uri(url);
        let handler = MaitreClientHandler::new(&server_name, elicitation);

        let service = handler
            .serve(transport)
            .await
            .map_err(|e| McpError::ConnectionFailed {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let info = service
            .peer_info()
            .map(|info| ServerInfo::from_rmcp(info, &server_name));

        info!(server = %server_name, url = %url, "MCP connection established");

        Ok(Self {
            server_name,
            service,
            info,
        })
    }

    /// Server info from the handshake, if the server provided any.
    #[must_use]
    pub fn server_info(&self) -> Option<&ServerInfo> {
        self.info.as_ref()
    }

    /// Check if the session is still connected.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        !self.service.is_closed()
    }

    /// List all tools available on the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is closed.
    pub async fn list_tools(&self) -> McpResult<Vec<ToolDefinition>> {
        let rmcp_tools = self.service.list_all_tools().await.map_err(McpError::from)?;

        Ok(rmcp_tools
            .iter()
            .map(|t| ToolDefinition::from_rmcp(t, &self.server_name))
            .collect())
    }

    /// Call a tool on the server.
    ///
    /// The call does not return until any elicitation round-trips it
    /// triggered have been resolved by the session's handler.
    ///
    /// # Errors
    ///
    /// Returns [`McpError::ToolCallFailed`] if the invocation fails.
    pub async fn call_tool(&self, tool: &str, args: Value) -> McpResult<ToolResult> {
        debug!(server = %self.server_name, tool = tool, "Calling MCP tool");

        let arguments = match args {
            Value::Object(map) => Some(map),
            Value::Null => None,
            other => {
                // Wrap non-object values
                let mut map = serde_json::Map::new();
                map.insert("value".to_string(), other);
                Some(map)
            },
        };

        let params = CallToolRequestParams {
            meta: None,
            name: Cow::Owned(tool.to_string()),
            arguments,
            task: None,
        };

        let result = self
            .service
            .call_tool(params)
            .await
            .map_err(|e| McpError::ToolCallFailed {
                tool: tool.to_string(),
                reason: e.to_string(),
            })?;

        info!(server = %self.server_name, tool = tool, "Tool call completed");

        Ok(ToolResult::from(result))
    }

    /// Close the session gracefully.
    ///
    /// # Errors
    ///
    /// Currently infallible; close failures are logged and the session is
    /// dropped regardless.
    pub async fn close(mut self) -> McpResult<()> {
        match self.service.close_with_timeout(SHUTDOWN_TIMEOUT).await {
            Ok(Some(reason)) => {
                info!(server = %self.server_name, ?reason, "MCP session closed gracefully");
            },
            Ok(None) => {
                warn!(
                    server = %self.server_name,
                    timeout_secs = SHUTDOWN_TIMEOUT.as_secs(),
                    "MCP session close timed out; dropping"
                );
            },
            Err(e) => {
                warn!(server = %self.server_name, error = %e, "MCP session close join error");
            },
        }
        Ok(())
    }
}

impl std::fmt::Debug for McpSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("McpSession")
            .field("server_name", &self.server_name)
            .field("alive", &self.is_alive())
            .finish_non_exhaustive()
    }
}
