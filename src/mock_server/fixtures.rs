//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use crate::{Article, Customer, Invoice, InvoiceRow};

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    /// Create a customer with the fields a server response would carry.
    pub fn customer(customer_number: &str, name: &str, organisation_number: &str) -> Customer {
        Customer {
            name: name.to_string(),
            organisation_number: organisation_number.to_string(),
            customer_number: customer_number.to_string(),
            url: format!("https://api.fortnox.se/3/customers/{customer_number}"),
            ..Default::default()
        }
    }

    /// Create a customer with address details filled in.
    pub fn customer_with_address(
        customer_number: &str,
        name: &str,
        organisation_number: &str,
        address1: &str,
        zip_code: &str,
        city: &str,
    ) -> Customer {
        let mut customer = Self::customer(customer_number, name, organisation_number);
        customer.address1 = address1.to_string();
        customer.zip_code = zip_code.to_string();
        customer.city = city.to_string();
        customer
    }

    /// Create a catalog article.
    pub fn article(article_number: &str, description: &str) -> Article {
        Article {
            article_number: article_number.to_string(),
            description: description.to_string(),
        }
    }

    /// Create an invoice row.
    pub fn invoice_row(article_number: &str, delivered_quantity: &str) -> InvoiceRow {
        InvoiceRow {
            article_number: article_number.to_string(),
            delivered_quantity: delivered_quantity.to_string(),
        }
    }

    /// Create an invoice with a document number already assigned.
    pub fn invoice(document_number: &str, customer_number: &str, rows: Vec<InvoiceRow>) -> Invoice {
        Invoice {
            customer_number: customer_number.to_string(),
            invoice_rows: rows,
            document_number: document_number.to_string(),
        }
    }

    /// Create a default set of test data for common scenarios.
    pub fn default_scenario() -> DefaultScenario {
        DefaultScenario::new()
    }
}

/// A complete test scenario with related entities.
pub struct DefaultScenario {
    pub customers: Vec<Customer>,
    pub articles: Vec<Article>,
    pub invoices: Vec<Invoice>,
}

impl DefaultScenario {
    fn new() -> Self {
        let customers = vec![
            Fixtures::customer_with_address(
                "1",
                "Acme AB",
                "556677-8899",
                "Storgatan 1",
                "411 01",
                "Göteborg",
            ),
            Fixtures::customer("2", "Bolaget i Norden AB", "556011-2233"),
        ];

        let articles = vec![
            Fixtures::article("1001", "Widget"),
            Fixtures::article("1002", "Consulting hour"),
        ];

        let invoices = vec![Fixtures::invoice(
            "100",
            "1",
            vec![Fixtures::invoice_row("1001", "2")],
        )];

        Self {
            customers,
            articles,
            invoices,
        }
    }
}
