//! Console elicitation handler.
//!
//! The single entry point the MCP session invokes per elicitation request.
//! Stateless across invocations: each request classifies, validates, and
//! responds from scratch, and nothing carries over between calls.

use async_trait::async_trait;
use maitre_core::{ElicitationFault, ElicitationRequest, ElicitationResponse};
use maitre_mcp::ElicitationHandler;
use serde_json::Value;
use tracing::debug;

use crate::classify::{ResponseStrategy, classify};
use crate::console::{PromptError, PromptSource};
use crate::validators;

/// Elicitation handler that collects input from a prompt source.
pub(crate) struct ConsoleElicitationHandler<P> {
    prompt: P,
}

impl<P: PromptSource> ConsoleElicitationHandler<P> {
    pub(crate) fn new(prompt: P) -> Self {
        Self { prompt }
    }

    /// Run the selected strategy and assemble the response content.
    async fn collect(
        &self,
        strategy: ResponseStrategy,
    ) -> Result<serde_json::Map<String, Value>, PromptError> {
        let mut content = serde_json::Map::new();
        match strategy {
            ResponseStrategy::BookingDate => {
                let date = validators::collect_date(&self.prompt).await?;
                content.insert("date".to_string(), Value::String(date));
            },
            ResponseStrategy::PartySize => {
                let size = validators::collect_party_size(&self.prompt).await?;
                content.insert("party_size".to_string(), Value::from(size));
            },
            ResponseStrategy::Confirmation => {
                let (confirmed, notes) = validators::collect_confirmation(&self.prompt).await?;
                content.insert("confirm".to_string(), Value::Bool(confirmed));
                content.insert("notes".to_string(), Value::String(notes));
            },
            ResponseStrategy::FreeText => {
                let response = validators::collect_free_text(&self.prompt).await?;
                content.insert("response".to_string(), Value::String(response));
            },
        }
        Ok(content)
    }
}

#[async_trait]
impl<P: PromptSource> ElicitationHandler for ConsoleElicitationHandler<P> {
    async fn handle_elicitation(
        &self,
        request: ElicitationRequest,
    ) -> Result<ElicitationResponse, ElicitationFault> {
        self.prompt.say("");
        self.prompt.say("--- Server Request ---");
        self.prompt.say(&format!("Message: {}", request.message));

        let strategy = classify(&request.message);
        debug!(
            request_id = %request.request_id,
            ?strategy,
            "Classified elicitation request"
        );

        match self.collect(strategy).await {
            Ok(content) => Ok(ElicitationResponse::accept(request.request_id, content)),
            Err(PromptError::Cancelled) => {
                // The only place a cancellation is swallowed: it becomes a
                // protocol-level cancel, not an error.
                self.prompt.say("User cancelled input");
                Ok(ElicitationResponse::cancel(request.request_id))
            },
            Err(e) => Err(ElicitationFault::internal(format!(
                "Elicitation failed: {e}"
            ))),
        }
    }
}
