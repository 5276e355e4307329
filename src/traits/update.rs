//! Update trait for modifying entities.

use async_trait::async_trait;

use crate::client::FortnoxClient;
use crate::error::Result;

/// Update an existing entity.
///
/// Implement this trait for entity types that can be modified after
/// creation. There is no separate ID parameter: Fortnox write payloads
/// carry their own server-assigned number, so the value identifies itself.
///
/// # Example
///
/// ```ignore
/// use fortnoxapi::{FortnoxClient, Update, Customer};
///
/// let client = FortnoxClient::new("access-token", "client-secret")?;
/// let mut customer = Customer::by_organisation_number(&client, "556677-8899").await?;
/// customer.city = "Göteborg".to_string();
/// let updated = Customer::update(&client, &customer).await?;
/// ```
#[async_trait]
pub trait Update: Sized {
    /// Update the entity and return the server's version of it.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the result cannot be
    /// decoded.
    async fn update(client: &FortnoxClient, value: &Self) -> Result<Self>;
}
