//! `MaitreClientHandler` — bridges the elicitation handler with rmcp.
//!
//! This is the handler passed to `rmcp::ServiceExt::serve()` when
//! connecting to an MCP server. It advertises the form-elicitation client
//! capability and delegates server-initiated elicitation requests to the
//! configured [`ElicitationHandler`].

use std::sync::Arc;

use rmcp::model::{
    ClientCapabilities, ClientInfo, CreateElicitationRequestParams, CreateElicitationResult,
    ElicitationCapability, FormElicitationCapability, Implementation,
};
use rmcp::service::{RequestContext, RoleClient};
use tracing::{debug, warn};

use crate::convert::{core_request, rmcp_result};
use crate::elicitation::ElicitationHandler;

/// Bridge between the maitre elicitation handler and the rmcp
/// `ClientHandler` trait.
pub struct MaitreClientHandler {
    server_name: String,
    elicitation: Arc<dyn ElicitationHandler>,
}

impl MaitreClientHandler {
    /// Create a new handler for a specific server connection.
    pub fn new(server_name: impl Into<String>, elicitation: Arc<dyn ElicitationHandler>) -> Self {
        Self {
            server_name: server_name.into(),
            elicitation,
        }
    }
}

impl rmcp::ClientHandler for MaitreClientHandler {
    fn get_info(&self) -> ClientInfo {
        ClientInfo {
            meta: None,
            protocol_version: Default::default(),
            capabilities: ClientCapabilities {
                elicitation: Some(ElicitationCapability {
                    form: Some(FormElicitationCapability::default()),
                    url: None,
                }),
                ..Default::default()
            },
            client_info: Implementation {
                name: "maitre".to_string(),
                title: Some("Maitre Booking Demo Client".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: None,
                icons: None,
                website_url: None,
            },
        }
    }

    async fn create_elicitation(
        &self,
        request: CreateElicitationRequestParams,
        _context: RequestContext<RoleClient>,
    ) -> Result<CreateElicitationResult, rmcp::ErrorData> {
        match request {
            CreateElicitationRequestParams::FormElicitationParams {
                message,
                requested_schema,
                ..
            } => {
                let request = core_request(&self.server_name, &message, &requested_schema);
                debug!(
                    server = %self.server_name,
                    request_id = %request.request_id,
                    "Received elicitation request"
                );

                match self.elicitation.handle_elicitation(request).await {
                    Ok(response) => Ok(rmcp_result(response)),
                    Err(fault) => {
                        warn!(
                            server = %self.server_name,
                            code = fault.code,
                            error = %fault.message,
                            "Elicitation handler faulted"
                        );
                        Err(rmcp::ErrorData::internal_error(fault.message, None))
                    },
                }
            },
            CreateElicitationRequestParams::UrlElicitationParams { .. } => Err(
                rmcp::ErrorData::internal_error("URL elicitation not supported", None),
            ),
        }
    }
}

impl std::fmt::Debug for MaitreClientHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaitreClientHandler")
            .field("server_name", &self.server_name)
            .finish_non_exhaustive()
    }
}
