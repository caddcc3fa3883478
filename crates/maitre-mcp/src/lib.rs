//! Maitre MCP - session layer with client-side elicitation.
//!
//! This crate wraps the official `rmcp` SDK with:
//! - An [`ElicitationHandler`] trait for collecting user input when a
//!   server pauses a tool call to ask for it
//! - A [`MaitreClientHandler`] bridging that trait to `rmcp::ClientHandler`
//! - An [`McpSession`] for connecting to a server over streamable HTTP and
//!   issuing tool calls
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use maitre_core::{ElicitationRequest, ElicitationResponse, ElicitationFault};
//! use maitre_mcp::{ElicitationHandler, McpSession};
//!
//! struct AlwaysCancel;
//!
//! #[async_trait::async_trait]
//! impl ElicitationHandler for AlwaysCancel {
//!     async fn handle_elicitation(
//!         &self,
//!         request: ElicitationRequest,
//!     ) -> Result<ElicitationResponse, ElicitationFault> {
//!         Ok(ElicitationResponse::cancel(request.request_id))
//!     }
//! }
//!
//! # async fn example() -> Result<(), maitre_mcp::McpError> {
//! let session = McpSession::connect(
//!     "booking",
//!     "http://localhost:8000/mcp",
//!     Arc::new(AlwaysCancel),
//! )
//! .await?;
//!
//! for tool in session.list_tools().await? {
//!     println!("Tool: {}", tool.full_name());
//! }
//!
//! let result = session
//!     .call_tool("book_table", serde_json::json!({"date": "2025-07-01"}))
//!     .await?;
//! println!("Result: {}", result.text_content());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]

mod convert;
mod elicitation;
mod error;
mod handler;
mod session;
mod types;

pub use elicitation::ElicitationHandler;
pub use error::{McpError, McpResult};
pub use handler::MaitreClientHandler;
pub use session::McpSession;
pub use types::{ServerCapabilities, ServerInfo, ToolContent, ToolDefinition, ToolResult};

// Re-export canonical elicitation types from maitre-core for convenience.
// These are the single source of truth — no duplicates in maitre-mcp.
pub use maitre_core::{
    ElicitationAction, ElicitationFault, ElicitationRequest, ElicitationResponse,
};
