//! Article model and trait implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::FortnoxClient;
use crate::error::Result;
use crate::traits::Get;

/// A catalog article, read-only from this client's perspective.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Article {
    #[serde(default)]
    pub article_number: String,

    #[serde(default)]
    pub description: String,
}

/// API response wrapper for a single article.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ArticleResponse {
    article: Article,
}

#[async_trait]
impl Get for Article {
    type Id = String; // Article number

    /// GET `articles/{article_number}` and decode the `{"Article": …}`
    /// envelope.
    #[tracing::instrument(skip(client))]
    async fn get(client: &FortnoxClient, article_number: String) -> Result<Self> {
        let path = format!("articles/{}", urlencoding::encode(&article_number));

        let body = client.get(&path).await?;
        let response: ArticleResponse = serde_json::from_slice(&body)?;
        Ok(response.article)
    }
}
