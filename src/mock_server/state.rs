//! Mock server state management.
//!
//! Provides the in-memory data store for the mock Fortnox API server.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{Article, Customer, Invoice};

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug)]
pub struct MockState {
    /// Customers indexed by customer number.
    pub customers: HashMap<String, Customer>,

    /// Articles indexed by article number.
    pub articles: HashMap<String, Article>,

    /// Invoices indexed by document number.
    pub invoices: HashMap<String, Invoice>,

    /// Access token the token exchange hands out.
    pub issued_access_token: String,

    /// Authorization code the token exchange expects. If set, an exchange
    /// with a different code is rejected.
    pub expected_auth_code: Option<String>,

    /// Access token required on the entity routes. If set, requests must
    /// present this token in the `Access-Token` header.
    pub required_access_token: Option<String>,

    next_customer_number: u64,
    next_document_number: u64,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            customers: HashMap::new(),
            articles: HashMap::new(),
            invoices: HashMap::new(),
            issued_access_token: "mock-access-token".to_string(),
            expected_auth_code: None,
            required_access_token: None,
            next_customer_number: 1,
            next_document_number: 1,
        }
    }
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add a customer to the state. The customer keeps its number.
    pub fn with_customer(mut self, customer: Customer) -> Self {
        self.bump_customer_counter(&customer.customer_number);
        self.customers
            .insert(customer.customer_number.clone(), customer);
        self
    }

    /// Add an article to the state.
    pub fn with_article(mut self, article: Article) -> Self {
        self.articles
            .insert(article.article_number.clone(), article);
        self
    }

    /// Add an invoice to the state. The invoice keeps its document number.
    pub fn with_invoice(mut self, invoice: Invoice) -> Self {
        self.bump_document_counter(&invoice.document_number);
        self.invoices
            .insert(invoice.document_number.clone(), invoice);
        self
    }

    /// Set the access token the token exchange hands out.
    pub fn with_issued_access_token(mut self, token: &str) -> Self {
        self.issued_access_token = token.to_string();
        self
    }

    /// Set the authorization code the token exchange expects.
    pub fn with_expected_auth_code(mut self, code: &str) -> Self {
        self.expected_auth_code = Some(code.to_string());
        self
    }

    /// Set the access token required on the entity routes.
    pub fn with_required_access_token(mut self, token: &str) -> Self {
        self.required_access_token = Some(token.to_string());
        self
    }

    /// Get a customer by customer number.
    pub fn get_customer(&self, customer_number: &str) -> Option<&Customer> {
        self.customers.get(customer_number)
    }

    /// Get an article by article number.
    pub fn get_article(&self, article_number: &str) -> Option<&Article> {
        self.articles.get(article_number)
    }

    /// Get an invoice by document number.
    pub fn get_invoice(&self, document_number: &str) -> Option<&Invoice> {
        self.invoices.get(document_number)
    }

    /// List customers matching an organisation number, ordered by customer
    /// number so that "first match" is deterministic.
    pub fn find_customers_by_organisation_number(
        &self,
        organisation_number: &str,
    ) -> Vec<&Customer> {
        let mut matches: Vec<&Customer> = self
            .customers
            .values()
            .filter(|c| c.organisation_number == organisation_number)
            .collect();
        matches.sort_by(|a, b| a.customer_number.cmp(&b.customer_number));
        matches
    }

    /// List all customers, ordered by customer number.
    pub fn list_customers(&self) -> Vec<&Customer> {
        let mut all: Vec<&Customer> = self.customers.values().collect();
        all.sort_by(|a, b| a.customer_number.cmp(&b.customer_number));
        all
    }

    /// Insert a customer, assigning a customer number (unless the draft
    /// carries one) and the resource URL. Returns the stored customer.
    pub fn insert_customer(&mut self, mut customer: Customer) -> Customer {
        if customer.customer_number.is_empty() {
            customer.customer_number = self.next_customer_number.to_string();
            self.next_customer_number += 1;
        } else {
            self.bump_customer_counter(&customer.customer_number);
        }
        customer.url = format!(
            "https://api.fortnox.se/3/customers/{}",
            customer.customer_number
        );
        self.customers
            .insert(customer.customer_number.clone(), customer.clone());
        customer
    }

    /// Replace a customer's fields, keeping its number and resource URL.
    /// Returns the stored customer, or `None` when the number is unknown.
    pub fn update_customer(
        &mut self,
        customer_number: &str,
        mut updated: Customer,
    ) -> Option<Customer> {
        if !self.customers.contains_key(customer_number) {
            return None;
        }
        updated.customer_number = customer_number.to_string();
        updated.url = format!("https://api.fortnox.se/3/customers/{customer_number}");
        self.customers
            .insert(customer_number.to_string(), updated.clone());
        Some(updated)
    }

    /// Insert an invoice, assigning a document number. Returns the stored
    /// invoice.
    pub fn insert_invoice(&mut self, mut invoice: Invoice) -> Invoice {
        invoice.document_number = self.next_document_number.to_string();
        self.next_document_number += 1;
        self.invoices
            .insert(invoice.document_number.clone(), invoice.clone());
        invoice
    }

    fn bump_customer_counter(&mut self, customer_number: &str) {
        if let Ok(n) = customer_number.parse::<u64>() {
            self.next_customer_number = self.next_customer_number.max(n + 1);
        }
    }

    fn bump_document_counter(&mut self, document_number: &str) {
        if let Ok(n) = document_number.parse::<u64>() {
            self.next_document_number = self.next_document_number.max(n + 1);
        }
    }
}
