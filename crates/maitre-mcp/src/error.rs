//! MCP-related error types.

use thiserror::Error;

/// Errors that can occur with MCP operations.
#[derive(Debug, Error)]
pub enum McpError {
    /// Transport or handshake failure while establishing the session.
    #[error("failed to connect to MCP server at {url}: {reason}")]
    ConnectionFailed {
        /// Server address the connection was attempted against.
        url: String,
        /// Reason for failure.
        reason: String,
    },

    /// MCP initialization failed.
    #[error("MCP initialization failed: {0}")]
    InitializationFailed(String),

    /// Tool call failed.
    #[error("tool call failed: {tool} - {reason}")]
    ToolCallFailed {
        /// Tool name.
        tool: String,
        /// Reason for failure.
        reason: String,
    },

    /// MCP protocol error from rmcp.
    #[error("MCP protocol error: {0}")]
    ProtocolError(String),
}

impl From<rmcp::ServiceError> for McpError {
    fn from(err: rmcp::ServiceError) -> Self {
        Self::ProtocolError(err.to_string())
    }
}

impl From<rmcp::service::ClientInitializeError> for McpError {
    fn from(err: rmcp::service::ClientInitializeError) -> Self {
        Self::InitializationFailed(err.to_string())
    }
}

/// Result type for MCP operations.
pub type McpResult<T> = Result<T, McpError>;
