//! E2E tests using the mock Fortnox server.
//!
//! These tests exercise full workflows against the mock server,
//! testing realistic scenarios rather than individual endpoints.

#![cfg(feature = "test-server")]

use fortnoxapi::mock_server::{Fixtures, MockServer, MockState};
use fortnoxapi::{
    Article, Create, Customer, FortnoxClient, FortnoxError, Get, Invoice, InvoiceRow, Update,
};

// =============================================================================
// Server Lifecycle Tests
// =============================================================================

#[tokio::test]
async fn test_server_starts_on_random_port() {
    let server1 = MockServer::start().await;
    let server2 = MockServer::start().await;

    // Both servers should have different URLs
    assert_ne!(server1.url(), server2.url());

    server1.shutdown().await;
    server2.shutdown().await;
}

#[tokio::test]
async fn test_server_shutdown_is_clean() {
    let server = MockServer::start().await;
    let url = server.url().to_string();

    server.shutdown().await;

    // After shutdown, server should not respond
    let client = reqwest::Client::new();
    let result = client.get(format!("{}/health", url)).send().await;

    assert!(result.is_err());
}

// =============================================================================
// Token Exchange Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_token_exchange_then_authenticated_call() {
    let state = MockState::new()
        .with_expected_auth_code("one-time-code")
        .with_issued_access_token("issued-token")
        .with_required_access_token("issued-token")
        .with_article(Fixtures::article("1001", "Widget"));

    let server = MockServer::with_state(state).await;

    // Step 1: Exchange the one-time authorization code for an access token
    let token = FortnoxClient::get_auth_token_from(server.url(), "one-time-code", "secret")
        .await
        .expect("Failed to exchange token");

    assert_eq!(token, "issued-token");

    // Step 2: Use the issued token for an authenticated call
    let client = FortnoxClient::with_base_url(&token, "secret", server.url()).unwrap();
    let article = Article::get(&client, "1001".to_string())
        .await
        .expect("Failed to get article with issued token");

    assert_eq!(article.description, "Widget");

    server.shutdown().await;
}

#[tokio::test]
async fn test_token_exchange_rejects_wrong_code() {
    let state = MockState::new().with_expected_auth_code("one-time-code");
    let server = MockServer::with_state(state).await;

    let result = FortnoxClient::get_auth_token_from(server.url(), "wrong-code", "secret").await;

    // The rejection body carries no Authorization envelope
    assert!(matches!(result, Err(FortnoxError::Decode(_))));

    server.shutdown().await;
}

#[tokio::test]
async fn test_stale_access_token_is_rejected() {
    let state = MockState::new()
        .with_required_access_token("issued-token")
        .with_article(Fixtures::article("1001", "Widget"));
    let server = MockServer::with_state(state).await;

    let client = FortnoxClient::with_base_url("stale-token", "secret", server.url()).unwrap();
    let result = Article::get(&client, "1001".to_string()).await;

    assert!(matches!(result, Err(FortnoxError::Decode(_))));

    server.shutdown().await;
}

#[tokio::test]
async fn test_stale_token_customer_search_reads_as_not_found() {
    let state = MockState::new()
        .with_required_access_token("issued-token")
        .with_customer(Fixtures::customer("1", "Acme AB", "556677-8899"));
    let server = MockServer::with_state(state).await;

    let client = FortnoxClient::with_base_url("stale-token", "secret", server.url()).unwrap();
    let result = Customer::by_organisation_number(&client, "556677-8899").await;

    // The rejection body has no Customers key, which the lenient search
    // decode treats as an empty result
    assert!(matches!(result, Err(FortnoxError::NotFound { .. })));

    server.shutdown().await;
}

// =============================================================================
// Customer Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_find_customer_by_organisation_number() {
    let server = MockServer::start().await;
    let client =
        FortnoxClient::with_base_url("mock-access-token", "secret", server.url()).unwrap();

    let customer = Customer::by_organisation_number(&client, "556677-8899")
        .await
        .expect("Failed to find customer");

    assert_eq!(customer.name, "Acme AB");
    assert_eq!(customer.customer_number, "1");
    assert_eq!(customer.city, "Göteborg");

    server.shutdown().await;
}

#[tokio::test]
async fn test_create_customer_workflow() {
    let server = MockServer::start().await;
    let client =
        FortnoxClient::with_base_url("mock-access-token", "secret", server.url()).unwrap();

    // Step 1: Create a customer; the server assigns the customer number
    let draft = Customer {
        name: "Nya Bolaget AB".to_string(),
        organisation_number: "556999-0001".to_string(),
        email: "faktura@nyabolaget.se".to_string(),
        ..Default::default()
    };

    let created = Customer::create(&client, &draft)
        .await
        .expect("Failed to create customer");

    // Default fixtures occupy numbers 1 and 2
    assert_eq!(created.customer_number, "3");
    assert_eq!(created.name, "Nya Bolaget AB");
    assert!(created.url.ends_with("/customers/3"));

    // Step 2: The customer is now findable by organisation number
    let found = Customer::by_organisation_number(&client, "556999-0001")
        .await
        .expect("Failed to find created customer");

    assert_eq!(found.customer_number, "3");
    assert_eq!(found.email, "faktura@nyabolaget.se");

    server.shutdown().await;
}

#[tokio::test]
async fn test_update_customer_workflow() {
    let server = MockServer::start().await;
    let client =
        FortnoxClient::with_base_url("mock-access-token", "secret", server.url()).unwrap();

    // Step 1: Fetch the original customer
    let mut customer = Customer::by_organisation_number(&client, "556677-8899")
        .await
        .expect("Failed to find customer");

    assert_eq!(customer.name, "Acme AB");

    // Step 2: Update the name
    customer.name = "Acme Industries AB".to_string();

    let updated = Customer::update(&client, &customer)
        .await
        .expect("Failed to update customer");

    assert_eq!(updated.name, "Acme Industries AB");
    assert_eq!(updated.customer_number, "1");

    // Step 3: Verify the update persisted
    let fetched = Customer::by_organisation_number(&client, "556677-8899")
        .await
        .expect("Failed to re-fetch customer");

    assert_eq!(fetched.name, "Acme Industries AB");

    server.shutdown().await;
}

#[tokio::test]
async fn test_update_unknown_customer_is_not_found() {
    let server = MockServer::start().await;
    let client =
        FortnoxClient::with_base_url("mock-access-token", "secret", server.url()).unwrap();

    let customer = Customer {
        name: "Spökbolaget AB".to_string(),
        organisation_number: "559999-9999".to_string(),
        customer_number: "999".to_string(),
        ..Default::default()
    };

    // The PUT is rejected, and the read-back finds nothing either
    let result = Customer::update(&client, &customer).await;

    assert!(matches!(result, Err(FortnoxError::NotFound { .. })));

    server.shutdown().await;
}

#[tokio::test]
async fn test_customer_not_found() {
    let server = MockServer::start().await;
    let client =
        FortnoxClient::with_base_url("mock-access-token", "secret", server.url()).unwrap();

    let result = Customer::by_organisation_number(&client, "559999-9999").await;

    assert!(result.is_err());
    let message = result.unwrap_err().to_string();
    assert!(
        message.contains("not found"),
        "Error should indicate not found: {}",
        message
    );

    server.shutdown().await;
}

// =============================================================================
// Invoice Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_create_invoice_workflow() {
    let server = MockServer::start().await;
    let client =
        FortnoxClient::with_base_url("mock-access-token", "secret", server.url()).unwrap();

    let draft = Invoice {
        customer_number: "1".to_string(),
        invoice_rows: vec![
            InvoiceRow {
                article_number: "1001".to_string(),
                delivered_quantity: "2".to_string(),
            },
            InvoiceRow {
                article_number: "1002".to_string(),
                delivered_quantity: "8".to_string(),
            },
        ],
        ..Default::default()
    };

    let created = Invoice::create(&client, &draft)
        .await
        .expect("Failed to create invoice");

    // The default fixture invoice occupies document number 100
    assert_eq!(created.document_number, "101");
    assert_eq!(created.customer_number, "1");
    assert_eq!(created.invoice_rows.len(), 2);
    assert_eq!(created.invoice_rows[0].article_number, "1001");

    server.shutdown().await;
}

#[tokio::test]
async fn test_create_invoice_for_unknown_customer_fails() {
    let server = MockServer::start().await;
    let client =
        FortnoxClient::with_base_url("mock-access-token", "secret", server.url()).unwrap();

    let draft = Invoice {
        customer_number: "999".to_string(),
        invoice_rows: vec![InvoiceRow {
            article_number: "1001".to_string(),
            delivered_quantity: "1".to_string(),
        }],
        ..Default::default()
    };

    let result = Invoice::create(&client, &draft).await;

    // The error body carries no Invoice envelope
    assert!(matches!(result, Err(FortnoxError::Decode(_))));

    server.shutdown().await;
}

// =============================================================================
// Article Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_get_article() {
    let server = MockServer::start().await;
    let client =
        FortnoxClient::with_base_url("mock-access-token", "secret", server.url()).unwrap();

    let article = Article::get(&client, "1002".to_string())
        .await
        .expect("Failed to get article");

    assert_eq!(article.article_number, "1002");
    assert_eq!(article.description, "Consulting hour");

    server.shutdown().await;
}

#[tokio::test]
async fn test_article_not_found_is_decode_error() {
    let server = MockServer::start().await;
    let client =
        FortnoxClient::with_base_url("mock-access-token", "secret", server.url()).unwrap();

    let result = Article::get(&client, "9999".to_string()).await;

    assert!(matches!(result, Err(FortnoxError::Decode(_))));

    server.shutdown().await;
}

// =============================================================================
// Custom State Tests
// =============================================================================

#[tokio::test]
async fn test_first_match_wins_for_shared_organisation_number() {
    let state = MockState::new()
        .with_customer(Fixtures::customer("20", "Filialen AB", "556000-1111"))
        .with_customer(Fixtures::customer("10", "Huvudkontoret AB", "556000-1111"));

    let server = MockServer::with_state(state).await;
    let client =
        FortnoxClient::with_base_url("mock-access-token", "secret", server.url()).unwrap();

    let customer = Customer::by_organisation_number(&client, "556000-1111")
        .await
        .expect("Failed to find customer");

    // Matches are ordered by customer number and only the first is returned
    assert_eq!(customer.customer_number, "10");
    assert_eq!(customer.name, "Huvudkontoret AB");

    server.shutdown().await;
}

#[tokio::test]
async fn test_empty_server_has_no_customers() {
    let server = MockServer::start_empty().await;
    let client =
        FortnoxClient::with_base_url("mock-access-token", "secret", server.url()).unwrap();

    let result = Customer::by_organisation_number(&client, "556677-8899").await;

    assert!(matches!(result, Err(FortnoxError::NotFound { .. })));

    server.shutdown().await;
}

#[tokio::test]
async fn test_state_can_be_modified_during_test() {
    let server = MockServer::start_empty().await;
    let client =
        FortnoxClient::with_base_url("mock-access-token", "secret", server.url()).unwrap();

    // Insert an article while the server is running
    {
        let state = server.state();
        let mut state = state.write().await;
        state
            .articles
            .insert("5000".to_string(), Fixtures::article("5000", "Late addition"));
    }

    let article = Article::get(&client, "5000".to_string())
        .await
        .expect("Failed to get article added at runtime");

    assert_eq!(article.description, "Late addition");

    server.shutdown().await;
}

// =============================================================================
// URL Encoding Tests
// =============================================================================

#[tokio::test]
async fn test_article_number_with_space() {
    let state = MockState::new().with_article(Fixtures::article("AB 100", "Spacer"));

    let server = MockServer::with_state(state).await;
    let client =
        FortnoxClient::with_base_url("mock-access-token", "secret", server.url()).unwrap();

    // The article number is percent-encoded on the wire and decoded by the
    // server before lookup
    let article = Article::get(&client, "AB 100".to_string())
        .await
        .expect("Failed to get article with space in number");

    assert_eq!(article.description, "Spacer");

    server.shutdown().await;
}
