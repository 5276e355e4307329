//! Invoice model and trait implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::FortnoxClient;
use crate::error::Result;
use crate::traits::Create;

/// A customer invoice.
///
/// `document_number` is assigned by the server on creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Invoice {
    /// Number of the customer the invoice is billed to.
    #[serde(default)]
    pub customer_number: String,

    /// Line items.
    #[serde(default)]
    pub invoice_rows: Vec<InvoiceRow>,

    /// Server-assigned document number.
    #[serde(default)]
    pub document_number: String,
}

/// A single invoice line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InvoiceRow {
    /// Article being billed.
    #[serde(default)]
    pub article_number: String,

    /// Quantity as a string, the way the API transports it.
    #[serde(default)]
    pub delivered_quantity: String,
}

/// Request envelope wrapping an invoice under its type name.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct InvoiceRequest<'a> {
    invoice: &'a Invoice,
}

/// API response wrapper for a single invoice.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct InvoiceResponse {
    invoice: Invoice,
}

#[async_trait]
impl Create for Invoice {
    /// POST `{"Invoice": …}` to `invoices` and decode the server's own
    /// `{"Invoice": …}` response envelope directly.
    ///
    /// The POST's transport result is not inspected before decoding: a
    /// failed request leaves an empty body, so a transport failure surfaces
    /// as the decode error on that empty body rather than as the original
    /// network error.
    #[tracing::instrument(skip(client, draft))]
    async fn create(client: &FortnoxClient, draft: &Invoice) -> Result<Invoice> {
        let body = client
            .post("invoices", &InvoiceRequest { invoice: draft })
            .await
            .unwrap_or_default();

        let response: InvoiceResponse = serde_json::from_slice(&body)?;
        Ok(response.invoice)
    }
}
