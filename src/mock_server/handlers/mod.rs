//! HTTP request handlers for the mock server.

use axum::{
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::mock_server::state::MockState;

pub mod articles;
pub mod auth;
pub mod customers;
pub mod invoices;

pub use articles::*;
pub use auth::*;
pub use customers::*;
pub use invoices::*;

/// Build a Fortnox-style error body.
///
/// Error responses carry a `{"ErrorInformation": {...}}` envelope instead of
/// an entity envelope, so typed clients fail to decode them.
pub(crate) fn error_information(message: &str) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "ErrorInformation": {
            "Error": 1,
            "Message": message,
        }
    }))
}

/// Reject the request when the state requires a specific access token and
/// the `Access-Token` header does not match.
///
/// Returns `None` when the request may proceed.
pub(crate) fn check_access(state: &MockState, headers: &HeaderMap) -> Option<Response> {
    let required = state.required_access_token.as_deref()?;

    let presented = headers
        .get("Access-Token")
        .and_then(|value| value.to_str().ok());

    if presented == Some(required) {
        None
    } else {
        Some(
            (
                StatusCode::UNAUTHORIZED,
                error_information("Invalid access token"),
            )
                .into_response(),
        )
    }
}
