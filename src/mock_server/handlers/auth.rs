//! Token exchange handler.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tokio::sync::RwLock;

use crate::mock_server::state::MockState;

use super::error_information;

/// Response envelope for a successful token exchange.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TokenExchangeResponse {
    pub authorization: AuthorizationBody,
}

/// Inner body carrying the issued access token.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuthorizationBody {
    pub access_token: String,
}

/// GET /
///
/// Exchanges an `Authorization-Code` header for an access token. When the
/// state pins an expected authorization code, any other code is rejected.
pub async fn token_exchange(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
) -> Response {
    let state = state.read().await;

    let Some(code) = headers
        .get("Authorization-Code")
        .and_then(|value| value.to_str().ok())
    else {
        return (
            StatusCode::BAD_REQUEST,
            error_information("Missing Authorization-Code header"),
        )
            .into_response();
    };

    if headers.get("Client-Secret").is_none() {
        return (
            StatusCode::BAD_REQUEST,
            error_information("Missing Client-Secret header"),
        )
            .into_response();
    }

    if let Some(expected) = state.expected_auth_code.as_deref() {
        if code != expected {
            return (
                StatusCode::UNAUTHORIZED,
                error_information("Invalid authorization code"),
            )
                .into_response();
        }
    }

    (
        StatusCode::OK,
        Json(TokenExchangeResponse {
            authorization: AuthorizationBody {
                access_token: state.issued_access_token.clone(),
            },
        }),
    )
        .into_response()
}
