//! Customer model and trait implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::FortnoxClient;
use crate::error::{FortnoxError, Result};
use crate::traits::{Create, Update};

/// A Fortnox customer.
///
/// `customer_number` and `url` are assigned by the server; the remaining
/// fields are caller-supplied on writes and server-returned on reads. The
/// wire format uses PascalCase keys (`Name`, `OrganisationNumber`, …) with
/// the resource URL under `@url`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Customer {
    /// Customer name.
    #[serde(default)]
    pub name: String,

    /// Organisation number, used as the search key for lookups.
    #[serde(default)]
    pub organisation_number: String,

    /// Server-assigned customer number.
    #[serde(default)]
    pub customer_number: String,

    /// Server-assigned resource URL.
    #[serde(rename = "@url", default)]
    pub url: String,

    /// Street address.
    #[serde(default)]
    pub address1: String,

    /// Contact email.
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub our_reference: String,

    #[serde(default)]
    pub your_reference: String,

    #[serde(default)]
    pub zip_code: String,

    #[serde(default)]
    pub city: String,
}

/// Request envelope wrapping a customer under its type name.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct CustomerRequest<'a> {
    customer: &'a Customer,
}

/// API response wrapper for customer searches.
///
/// The `Customers` key is optional on the wire: an omitted key and an empty
/// array both mean the search matched nothing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CustomerListResponse {
    #[serde(default)]
    customers: Vec<Customer>,
}

impl Customer {
    /// Look up a customer by organisation number.
    ///
    /// Issues a GET of `customers/?organisationnumber=<org nr>` and decodes
    /// the `Customers` list. An empty result is a
    /// [`NotFound`](FortnoxError::NotFound) error. When the search matches
    /// more than one customer only the first is returned; the rest are
    /// silently discarded.
    #[tracing::instrument(skip(client))]
    pub async fn by_organisation_number(
        client: &FortnoxClient,
        organisation_number: &str,
    ) -> Result<Customer> {
        let path = format!(
            "customers/?organisationnumber={}",
            urlencoding::encode(organisation_number)
        );

        let body = client.get(&path).await?;
        let response: CustomerListResponse = serde_json::from_slice(&body)?;

        response
            .customers
            .into_iter()
            .next()
            .ok_or_else(|| FortnoxError::NotFound {
                entity_type: "Customer",
                id: organisation_number.to_string(),
            })
    }
}

#[async_trait]
impl Create for Customer {
    /// POST `{"Customer": …}` to `customers`, then read the customer back.
    ///
    /// The POST response body is not decoded; the customer is re-fetched by
    /// organisation number so that server-assigned fields (customer number,
    /// resource URL) are populated. This costs a second round trip and
    /// assumes the organisation number identifies the customer uniquely;
    /// when several customers share it, the wrong one can come back.
    #[tracing::instrument(skip(client, draft))]
    async fn create(client: &FortnoxClient, draft: &Customer) -> Result<Customer> {
        client
            .post("customers", &CustomerRequest { customer: draft })
            .await?;

        Customer::by_organisation_number(client, &draft.organisation_number).await
    }
}

#[async_trait]
impl Update for Customer {
    /// PUT `{"Customer": …}` to `customers/{customer_number}`, then read the
    /// customer back by organisation number, with the same caveats as
    /// [`Create`].
    #[tracing::instrument(skip(client, customer))]
    async fn update(client: &FortnoxClient, customer: &Customer) -> Result<Customer> {
        let path = format!(
            "customers/{}",
            urlencoding::encode(&customer.customer_number)
        );
        client.put(&path, &CustomerRequest { customer }).await?;

        Customer::by_organisation_number(client, &customer.organisation_number).await
    }
}
