//! Elicitation requests, responses, and faults.
//!
//! An elicitation is a server-initiated request for structured human input
//! issued in the middle of a tool call. Exactly one [`ElicitationResponse`]
//! or [`ElicitationFault`] is produced per [`ElicitationRequest`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// JSON-RPC internal error code, used for callback faults.
pub const INTERNAL_ERROR: i32 = -32603;

/// A server request for user input, received mid-tool-call.
///
/// Immutable once constructed. The `requested_schema` is the server's
/// advisory description of the expected response shape; consumers classify
/// on the message text and never interpret the schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElicitationRequest {
    /// Unique request ID.
    pub request_id: Uuid,
    /// Server that is requesting the elicitation.
    pub server_name: String,
    /// Human-readable message shown to the user.
    pub message: String,
    /// Advisory response schema, carried verbatim from the wire.
    pub requested_schema: Option<Value>,
}

impl ElicitationRequest {
    /// Create a new elicitation request.
    #[must_use]
    pub fn new(server_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            server_name: server_name.into(),
            message: message.into(),
            requested_schema: None,
        }
    }

    /// Attach the server's advisory schema.
    #[must_use]
    pub fn with_schema(mut self, schema: Value) -> Self {
        self.requested_schema = Some(schema);
        self
    }
}

/// The outcome returned to the server for one elicitation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElicitationResponse {
    /// Request ID this responds to.
    pub request_id: Uuid,
    /// The action taken.
    pub action: ElicitationAction,
}

impl ElicitationResponse {
    /// Create an accept response carrying the collected fields.
    ///
    /// An accept always carries non-empty, well-typed content; callers
    /// build the map from validated fields only.
    #[must_use]
    pub fn accept(request_id: Uuid, content: serde_json::Map<String, Value>) -> Self {
        Self {
            request_id,
            action: ElicitationAction::Accept { content },
        }
    }

    /// Create a decline response.
    #[must_use]
    pub fn decline(request_id: Uuid) -> Self {
        Self {
            request_id,
            action: ElicitationAction::Decline,
        }
    }

    /// Create a cancel response.
    #[must_use]
    pub fn cancel(request_id: Uuid) -> Self {
        Self {
            request_id,
            action: ElicitationAction::Cancel,
        }
    }

    /// Whether this response accepts the elicitation.
    #[must_use]
    pub fn is_accept(&self) -> bool {
        matches!(self.action, ElicitationAction::Accept { .. })
    }
}

/// Action taken in response to an elicitation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElicitationAction {
    /// User submitted validated input.
    Accept {
        /// Field name to validated value.
        content: serde_json::Map<String, Value>,
    },
    /// User explicitly declined to answer.
    Decline,
    /// User cancelled the exchange.
    Cancel,
}

/// Out-of-band failure of the elicitation callback itself.
///
/// Distinct from a declined or cancelled elicitation: a fault means the
/// callback could not produce a response at all (an unexpected internal
/// condition), and is reported to the server as a protocol error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("elicitation fault {code}: {message}")]
pub struct ElicitationFault {
    /// Machine-readable JSON-RPC error code.
    pub code: i32,
    /// Human-readable description of the failure.
    pub message: String,
}

impl ElicitationFault {
    /// Create an internal-error fault.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: INTERNAL_ERROR,
            message: message.into(),
        }
    }
}
