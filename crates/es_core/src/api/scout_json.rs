//! JSON boundary for the scout widget.
//!
//! String-in/string-out helpers so embedding layers can drive a session
//! without touching the Rust types. Errors are plain strings with stable
//! prefixes, matching the rest of the `_json` surface.

use crate::models::{ApiResponse, MatchSetup};
use crate::scout::session::ScoutSession;

/// Build the outbound `/api/submit-match-stats` body for a session.
///
/// Fails without producing a partial payload when the session has no
/// selected player or the setup is incomplete.
pub fn build_match_submission_json(
    session: &ScoutSession,
    setup_json: &str,
) -> Result<String, String> {
    let setup: MatchSetup = serde_json::from_str(setup_json)
        .map_err(|e| format!("Invalid match setup JSON: {}", e))?;
    let payload =
        session.build_submission(&setup).map_err(|e| format!("Submission rejected: {}", e))?;
    serde_json::to_string(&payload).map_err(|e| format!("Failed to serialize payload: {}", e))
}

/// Parse an inbound `{success, message?}` response body.
pub fn parse_api_response_json(response_json: &str) -> Result<ApiResponse, String> {
    serde_json::from_str(response_json).map_err(|e| format!("Invalid response JSON: {}", e))
}

/// Parse the backend verdict and apply the submission protocol: success
/// resets the session, failure keeps it intact and returns the message.
pub fn apply_submission_response_json(
    session: &mut ScoutSession,
    response_json: &str,
) -> Result<(), String> {
    let response = parse_api_response_json(response_json)?;
    session.apply_submission_response(&response).map_err(|e| e.to_string())
}
