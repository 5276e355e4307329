//! Invoice endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::mock_server::state::MockState;
use crate::Invoice;

use super::{check_access, error_information};

/// Envelope wrapping a single invoice, used for both request and response
/// bodies.
#[derive(Debug, Serialize, Deserialize)]
pub struct InvoiceBody {
    #[serde(rename = "Invoice")]
    pub invoice: Invoice,
}

/// POST /invoices
pub async fn create_invoice(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Json(body): Json<InvoiceBody>,
) -> Response {
    let mut state = state.write().await;

    if let Some(denied) = check_access(&state, &headers) {
        return denied;
    }

    // Invoices can only be raised against an existing customer
    if state.get_customer(&body.invoice.customer_number).is_none() {
        return (
            StatusCode::BAD_REQUEST,
            error_information(&format!(
                "No customer found with number: {}",
                body.invoice.customer_number
            )),
        )
            .into_response();
    }

    let stored = state.insert_invoice(body.invoice);

    (StatusCode::CREATED, Json(InvoiceBody { invoice: stored })).into_response()
}
