//! rmcp ↔ core conversion helpers.
//!
//! Internal helpers used by `handler.rs` to bridge the rmcp elicitation
//! wire types with the canonical `maitre-core` types.

use maitre_core::{ElicitationAction, ElicitationRequest, ElicitationResponse};
use rmcp::model::{
    CreateElicitationResult, ElicitationAction as RmcpElicitationAction, ElicitationSchema,
};
use serde_json::Value;

/// Build a core elicitation request from the rmcp form parameters.
///
/// The requested schema is serialized to raw JSON and carried as advisory
/// data only; classification happens on the message text.
pub(crate) fn core_request(
    server_name: &str,
    message: &str,
    requested_schema: &ElicitationSchema,
) -> ElicitationRequest {
    let request = ElicitationRequest::new(server_name, message);
    match serde_json::to_value(requested_schema) {
        Ok(schema) => request.with_schema(schema),
        Err(_) => request,
    }
}

/// Convert a core elicitation response to the rmcp result shape.
///
/// Accept carries the content map as a JSON object; decline and cancel
/// carry no content.
pub(crate) fn rmcp_result(response: ElicitationResponse) -> CreateElicitationResult {
    match response.action {
        ElicitationAction::Accept { content } => CreateElicitationResult {
            action: RmcpElicitationAction::Accept,
            content: Some(Value::Object(content)),
        },
        ElicitationAction::Decline => CreateElicitationResult {
            action: RmcpElicitationAction::Decline,
            content: None,
        },
        ElicitationAction::Cancel => CreateElicitationResult {
            action: RmcpElicitationAction::Cancel,
            content: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn schema_fixture() -> ElicitationSchema {
        serde_json::from_value(serde_json::json!({
            "type": "object",
            "properties": {
                "date": {
                    "type": "string",
                    "description": "Enter the date for your booking (YYYY-MM-DD)"
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn core_request_carries_message_and_schema() {
        let schema = schema_fixture();
        let request = core_request("booking", "Please enter the date:", &schema);

        assert_eq!(request.server_name, "booking");
        assert_eq!(request.message, "Please enter the date:");
        let advisory = request.requested_schema.expect("schema carried");
        assert!(advisory.get("properties").is_some());
    }

    #[test]
    fn accept_maps_to_accept_with_content() {
        let mut content = serde_json::Map::new();
        content.insert("party_size".to_string(), Value::from(4));
        let response = ElicitationResponse::accept(Uuid::new_v4(), content);

        let result = rmcp_result(response);
        assert!(matches!(result.action, RmcpElicitationAction::Accept));
        let content = result.content.expect("accept carries content");
        assert_eq!(content["party_size"], 4);
    }

    #[test]
    fn cancel_maps_to_cancel_without_content() {
        let result = rmcp_result(ElicitationResponse::cancel(Uuid::new_v4()));
        assert!(matches!(result.action, RmcpElicitationAction::Cancel));
        assert!(result.content.is_none());
    }

    #[test]
    fn decline_maps_to_decline_without_content() {
        let result = rmcp_result(ElicitationResponse::decline(Uuid::new_v4()));
        assert!(matches!(result.action, RmcpElicitationAction::Decline));
        assert!(result.content.is_none());
    }
}
