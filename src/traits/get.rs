//! Get trait for fetching single entities.

use async_trait::async_trait;

use crate::client::FortnoxClient;
use crate::error::Result;

/// Fetch a single entity by ID.
///
/// Implement this trait for entity types that can be fetched individually
/// by a unique identifier (typically a number the server assigned).
///
/// # Example
///
/// ```ignore
/// use fortnoxapi::{FortnoxClient, Article, Get};
///
/// let client = FortnoxClient::new("access-token", "client-secret")?;
/// let article = Article::get(&client, "1001".to_string()).await?;
/// ```
#[async_trait]
pub trait Get: Sized {
    /// The ID type for this entity (e.g., an article number).
    type Id;

    /// Fetch the entity by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded into the entity's envelope.
    async fn get(client: &FortnoxClient, id: Self::Id) -> Result<Self>;
}
