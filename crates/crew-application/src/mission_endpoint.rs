//! Mission endpoint.
//!
//! Maps a raw request body to a status code and a JSON body. The mapping is
//! independent of any transport, so the HTTP server and tests share it.
//!
//! | Outcome | Status | Body |
//! |---------|--------|------|
//! | document built | 200 | mission document |
//! | `idea` missing, not a string, or blank | 400 | `{"error": INVALID_IDEA_MESSAGE}` |
//! | malformed JSON or internal failure | 500 | `{"error": RETRY_MESSAGE}` |
//!
//! Internal error detail is logged and never returned to the caller.

use serde::Serialize;
use serde_json::{Value, json};

use crate::synthesizer::synthesize;

pub const INVALID_IDEA_MESSAGE: &str =
    "Please provide a project idea or instruction for the agents.";
pub const RETRY_MESSAGE: &str =
    "The agent crew could not process this request right now. Please retry in a moment.";

/// Status and JSON body for one mission request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndpointResponse {
    pub status: u16,
    pub body: Value,
}

impl EndpointResponse {
    fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: json!({ "error": message }),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Handles one mission request body.
pub fn handle_mission_request(body: &[u8]) -> EndpointResponse {
    let payload: Value = match serde_json::from_slice(body) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::error!("[MissionEndpoint] Failed to parse request body: {}", e);
            return EndpointResponse::error(500, RETRY_MESSAGE);
        }
    };

    // A non-string idea reads as empty.
    let idea = payload
        .get("idea")
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or_default();
    if idea.is_empty() {
        tracing::warn!("[MissionEndpoint] Rejected request without an idea");
        return EndpointResponse::error(400, INVALID_IDEA_MESSAGE);
    }

    let document = match synthesize(idea) {
        Ok(document) => document,
        Err(e) if e.is_invalid_input() => {
            tracing::warn!("[MissionEndpoint] Rejected idea: {}", e);
            return EndpointResponse::error(400, INVALID_IDEA_MESSAGE);
        }
        Err(e) => {
            tracing::error!("[MissionEndpoint] Mission synthesis failed: {}", e);
            return EndpointResponse::error(500, RETRY_MESSAGE);
        }
    };

    match serde_json::to_value(&document) {
        Ok(body) => {
            tracing::info!(
                "[MissionEndpoint] Built mission '{}'",
                document.mission_brief.codename
            );
            EndpointResponse::ok(body)
        }
        Err(e) => {
            tracing::error!("[MissionEndpoint] Failed to serialize mission: {}", e);
            EndpointResponse::error(500, RETRY_MESSAGE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_idea_returns_document() {
        let response = handle_mission_request(br#"{"idea": "Plan a birthday party"}"#);
        assert!(response.is_success());
        assert_eq!(response.body["missionBrief"]["codename"], "Birthday Party");
    }

    #[test]
    fn test_blank_idea_is_bad_request() {
        let response = handle_mission_request(br#"{"idea": "   "}"#);
        assert_eq!(response.status, 400);
        assert_eq!(response.body["error"], INVALID_IDEA_MESSAGE);
    }

    #[test]
    fn test_non_string_idea_is_bad_request() {
        assert_eq!(handle_mission_request(br#"{"idea": 42}"#).status, 400);
        assert_eq!(handle_mission_request(br#"{}"#).status, 400);
        assert_eq!(handle_mission_request(br#"[]"#).status, 400);
    }

    #[test]
    fn test_malformed_json_is_retry_error() {
        let response = handle_mission_request(b"{not json");
        assert_eq!(response.status, 500);
        assert_eq!(response.body["error"], RETRY_MESSAGE);
    }
}
