//! Mock Fortnox API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the Fortnox
//! API for integration and end-to-end testing. Unlike wiremock which mocks at
//! the HTTP level per-test, this server maintains state across requests,
//! enabling realistic workflow testing: a customer created through the client
//! is really there when the read-back lookup arrives.
//!
//! # Example
//!
//! ```ignore
//! use fortnoxapi::mock_server::MockServer;
//! use fortnoxapi::{Customer, FortnoxClient};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = FortnoxClient::with_base_url("test-token", "test-secret", server.url())
//!         .unwrap();
//!
//!     // Server comes with default fixtures
//!     let customer = Customer::by_organisation_number(&client, "556677-8899")
//!         .await
//!         .unwrap();
//!     assert_eq!(customer.name, "Acme AB");
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{DefaultScenario, Fixtures};
pub use server::MockServer;
pub use state::MockState;
