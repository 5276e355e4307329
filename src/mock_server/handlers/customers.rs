//! Customer endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::mock_server::state::MockState;
use crate::Customer;

use super::{check_access, error_information};

/// Query parameters for the customer search endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct FindCustomersQuery {
    pub organisationnumber: Option<String>,
}

/// Response envelope for the customer list endpoint.
#[derive(Debug, Serialize)]
pub struct CustomerListBody {
    #[serde(rename = "Customers")]
    pub customers: Vec<Customer>,
}

/// Envelope wrapping a single customer, used for both request and response
/// bodies.
#[derive(Debug, Serialize, Deserialize)]
pub struct CustomerBody {
    #[serde(rename = "Customer")]
    pub customer: Customer,
}

/// GET /customers/
pub async fn find_customers(
    State(state): State<Arc<RwLock<MockState>>>,
    Query(query): Query<FindCustomersQuery>,
    headers: HeaderMap,
) -> Response {
    let state = state.read().await;

    if let Some(denied) = check_access(&state, &headers) {
        return denied;
    }

    let matches = match query.organisationnumber.as_deref() {
        Some(organisation_number) => {
            state.find_customers_by_organisation_number(organisation_number)
        }
        None => state.list_customers(),
    };

    let customers: Vec<Customer> = matches.into_iter().cloned().collect();

    (StatusCode::OK, Json(CustomerListBody { customers })).into_response()
}

/// POST /customers
pub async fn create_customer(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Json(body): Json<CustomerBody>,
) -> Response {
    let mut state = state.write().await;

    if let Some(denied) = check_access(&state, &headers) {
        return denied;
    }

    let stored = state.insert_customer(body.customer);

    (StatusCode::CREATED, Json(CustomerBody { customer: stored })).into_response()
}

/// PUT /customers/{customer_number}
pub async fn update_customer(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(customer_number): Path<String>,
    headers: HeaderMap,
    Json(body): Json<CustomerBody>,
) -> Response {
    // URL-decode the customer number
    let decoded_number = urlencoding::decode(&customer_number)
        .map(|s| s.into_owned())
        .unwrap_or(customer_number);

    let mut state = state.write().await;

    if let Some(denied) = check_access(&state, &headers) {
        return denied;
    }

    match state.update_customer(&decoded_number, body.customer) {
        Some(stored) => (StatusCode::OK, Json(CustomerBody { customer: stored })).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            error_information(&format!("No customer found with number: {decoded_number}")),
        )
            .into_response(),
    }
}
