//! Create trait for registering new entities.

use async_trait::async_trait;

use crate::client::FortnoxClient;
use crate::error::Result;

/// Create a new entity on the server.
///
/// The draft value carries the caller-supplied fields; the returned value
/// additionally carries whatever the server assigned (customer numbers,
/// document numbers, resource URLs). How the returned value is obtained is
/// up to the implementation: some resources are read back after the write,
/// others are decoded from the write response itself.
///
/// # Example
///
/// ```ignore
/// use fortnoxapi::{FortnoxClient, Create, Customer};
///
/// let client = FortnoxClient::new("access-token", "client-secret")?;
/// let draft = Customer {
///     name: "Acme AB".to_string(),
///     organisation_number: "556677-8899".to_string(),
///     ..Default::default()
/// };
/// let created = Customer::create(&client, &draft).await?;
/// assert!(!created.customer_number.is_empty());
/// ```
#[async_trait]
pub trait Create: Sized {
    /// Create the entity and return the server's version of it.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the result cannot be
    /// decoded.
    async fn create(client: &FortnoxClient, draft: &Self) -> Result<Self>;
}
