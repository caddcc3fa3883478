//! MCP types for tools, results, and server info.

use rmcp::model::{self as rmcp_model, RawContent};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Definition of an MCP tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Tool name.
    pub name: String,
    /// Server this tool belongs to.
    pub server: String,
    /// Human-readable description.
    pub description: Option<String>,
    /// JSON Schema for input parameters.
    pub input_schema: Value,
}

impl ToolDefinition {
    /// Create a new tool definition.
    #[must_use]
    pub fn new(name: impl Into<String>, server: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            server: server.into(),
            description: None,
            input_schema: serde_json::json!({"type": "object"}),
        }
    }

    /// Create from an rmcp `Tool` and server name.
    #[must_use]
    pub fn from_rmcp(tool: &rmcp_model::Tool, server: &str) -> Self {
        Self {
            name: tool.name.to_string(),
            server: server.to_string(),
            description: tool.description.as_deref().map(String::from),
            input_schema: serde_json::to_value(&*tool.input_schema)
                .unwrap_or_else(|_| serde_json::json!({"type": "object"})),
        }
    }

    /// Get the full tool identifier (server:tool).
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}:{}", self.server, self.name)
    }
}

/// Result from calling an MCP tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Whether the call succeeded.
    pub success: bool,
    /// Content returned by the tool.
    pub content: Vec<ToolContent>,
    /// Error message if failed.
    pub error: Option<String>,
    /// Whether this result is an error.
    pub is_error: bool,
}

impl ToolResult {
    /// Create a successful result with text content.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            success: true,
            content: vec![ToolContent::Text {
                text: content.into(),
            }],
            error: None,
            is_error: false,
        }
    }

    /// Create an error result.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        let msg = message.into();
        Self {
            success: false,
            content: vec![ToolContent::Text { text: msg.clone() }],
            error: Some(msg),
            is_error: true,
        }
    }

    /// Get text content as a single string.
    #[must_use]
    pub fn text_content(&self) -> String {
        self.content
            .iter()
            .filter_map(|c| match c {
                ToolContent::Text { text } => Some(text.as_str()),
                ToolContent::Image { .. } => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<rmcp_model::CallToolResult> for ToolResult {
    fn from(result: rmcp_model::CallToolResult) -> Self {
        let is_error = result.is_error.unwrap_or(false);
        let content: Vec<ToolContent> = result.content.iter().map(ToolContent::from_rmcp).collect();

        let error = if is_error {
            // Extract text content as the error message
            let text = content
                .iter()
                .filter_map(|c| match c {
                    ToolContent::Text { text } => Some(text.as_str()),
                    ToolContent::Image { .. } => None,
                })
                .collect::<Vec<_>>()
                .join("\n");
            if text.is_empty() {
                Some("Unknown error".to_string())
            } else {
                Some(text)
            }
        } else {
            None
        };

        Self {
            success: !is_error,
            content,
            error,
            is_error,
        }
    }
}

/// Content types returned by tools.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolContent {
    /// Text content.
    Text {
        /// The text.
        text: String,
    },
    /// Image content.
    Image {
        /// Base64-encoded image data.
        data: String,
        /// MIME type.
        mime_type: String,
    },
}

impl ToolContent {
    /// Convert from an rmcp `Content` (which is `Annotated<RawContent>`).
    fn from_rmcp(content: &rmcp_model::Content) -> Self {
        match &**content {
            RawContent::Text(text) => Self::Text {
                text: text.text.clone(),
            },
            RawContent::Image(image) => Self::Image {
                data: image.data.clone(),
                mime_type: image.mime_type.clone(),
            },
            // Resource and audio variants map to text fallbacks; the
            // booking server returns plain text only.
            RawContent::Resource(embedded) => {
                let text = match &embedded.resource {
                    rmcp_model::ResourceContents::TextResourceContents { text, .. } => text.clone(),
                    rmcp_model::ResourceContents::BlobResourceContents { uri, .. } => {
                        format!("[resource: {uri}]")
                    },
                };
                Self::Text { text }
            },
            RawContent::Audio(_) => Self::Text {
                text: "[audio content]".to_string(),
            },
            RawContent::ResourceLink(resource) => Self::Text {
                text: format!("[resource: {}]", resource.uri),
            },
        }
    }
}

/// Server capabilities negotiated during the handshake.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct ServerCapabilities {
    /// Whether the server supports tools.
    #[serde(default)]
    pub tools: bool,
    /// Whether the server supports resources.
    #[serde(default)]
    pub resources: bool,
    /// Whether the server supports prompts.
    #[serde(default)]
    pub prompts: bool,
    /// Whether the server supports logging.
    #[serde(default)]
    pub logging: bool,
    /// Whether the server supports argument completions.
    #[serde(default)]
    pub completions: bool,
}

impl ServerCapabilities {
    /// Convert from rmcp `ServerCapabilities`.
    #[must_use]
    pub fn from_rmcp(caps: &rmcp_model::ServerCapabilities) -> Self {
        Self {
            tools: caps.tools.is_some(),
            resources: caps.resources.is_some(),
            prompts: caps.prompts.is_some(),
            logging: caps.logging.is_some(),
            completions: caps.completions.is_some(),
        }
    }

    /// Names of the enabled capabilities, for diagnostics.
    #[must_use]
    pub fn enabled(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.tools {
            names.push("tools");
        }
        if self.resources {
            names.push("resources");
        }
        if self.prompts {
            names.push("prompts");
        }
        if self.logging {
            names.push("logging");
        }
        if self.completions {
            names.push("completions");
        }
        names
    }
}

/// Information about a connected server.
#[derive(Debug, Clone)]
pub struct ServerInfo {
    /// Server name.
    pub name: String,
    /// Protocol version.
    pub protocol_version: String,
    /// Server capabilities.
    pub capabilities: ServerCapabilities,
    /// Server instructions.
    pub instructions: Option<String>,
}

impl ServerInfo {
    /// Convert from rmcp `InitializeResult` and a server name.
    #[must_use]
    pub fn from_rmcp(info: &rmcp_model::InitializeResult, name: &str) -> Self {
        Self {
            name: name.to_string(),
            protocol_version: info.protocol_version.to_string(),
            capabilities: ServerCapabilities::from_rmcp(&info.capabilities),
            instructions: info.instructions.clone(),
        }
    }
}
