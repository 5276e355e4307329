//! Fortnox API client library.
//!
//! A Rust library for interacting with the Fortnox REST API: OAuth-style
//! token exchange plus customer, invoice, and article calls, built on a
//! trait-based architecture where each operation (Get, Create, Update) is
//! defined as a trait that entity types implement.
//!
//! # Quick Start
//!
//! ```no_run
//! use fortnoxapi::{Article, Create, Customer, FortnoxClient, Get};
//!
//! #[tokio::main]
//! async fn main() -> fortnoxapi::Result<()> {
//!     // Exchange a one-time authorization code for an access token, then
//!     // build a client for authenticated calls.
//!     let token = FortnoxClient::get_auth_token("auth-code", "client-secret").await?;
//!     let client = FortnoxClient::new(&token, "client-secret")?;
//!
//!     // Look up a customer by organisation number.
//!     let customer = Customer::by_organisation_number(&client, "556677-8899").await?;
//!     println!("customer number: {}", customer.customer_number);
//!
//!     // Register a new customer; the returned value carries the
//!     // server-assigned fields.
//!     let draft = Customer {
//!         name: "Acme AB".to_string(),
//!         organisation_number: "556688-9900".to_string(),
//!         ..Default::default()
//!     };
//!     let created = Customer::create(&client, &draft).await?;
//!     println!("created as {}", created.customer_number);
//!
//!     // Fetch an article from the catalog.
//!     let article = Article::get(&client, "1001".to_string()).await?;
//!     println!("{}: {}", article.article_number, article.description);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! The library is organized around three core traits:
//!
//! - [`Get`] - Fetch a single entity by ID
//! - [`Create`] - Register a new entity
//! - [`Update`] - Modify an existing entity
//!
//! Each entity type (like [`Customer`] or [`Article`]) implements the
//! traits its API endpoints support. All operations go through one
//! low-level primitive, [`FortnoxClient::request_raw`], which adds the
//! credential headers (`Access-Token`, `Client-Secret`, and
//! `Authorization-Code`, each sent only when the corresponding credential
//! is set) and hands back the raw response body for the typed layer to
//! decode.
//!
//! There is no retry or caching layer. Errors surface immediately as
//! [`FortnoxError`].

mod client;
mod error;
mod models;
mod traits;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::FortnoxClient;
pub use error::{FortnoxError, Result};

// Re-export traits
pub use traits::{Create, Get, Update};

// Re-export models
pub use models::{Article, Customer, Invoice, InvoiceRow};
