//! Elicitation capability handler trait.
//!
//! Uses the canonical elicitation types from `maitre-core` (single source
//! of truth). No MCP-local duplicates exist.

use async_trait::async_trait;

use maitre_core::{ElicitationFault, ElicitationRequest, ElicitationResponse};

/// Handler for server requests for user input.
///
/// Exactly one handler is installed per session. The session machinery
/// invokes it once per elicitation request and waits for its response
/// before the triggering tool call proceeds; one exchange completes before
/// the next begins.
#[async_trait]
pub trait ElicitationHandler: Send + Sync {
    /// Handle an elicitation request from a server.
    ///
    /// The implementation should:
    /// 1. Display the message to the user
    /// 2. Collect and validate their input
    /// 3. Return an accept, decline, or cancel response
    ///
    /// # Errors
    ///
    /// Returns an [`ElicitationFault`] only when the handler itself faults;
    /// a user declining or cancelling is a normal response, not a fault.
    async fn handle_elicitation(
        &self,
        request: ElicitationRequest,
    ) -> Result<ElicitationResponse, ElicitationFault>;
}
