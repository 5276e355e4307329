//! Article endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tokio::sync::RwLock;

use crate::mock_server::state::MockState;
use crate::Article;

use super::{check_access, error_information};

/// Response envelope wrapping a single article.
#[derive(Debug, Serialize)]
pub struct ArticleBody {
    #[serde(rename = "Article")]
    pub article: Article,
}

/// GET /articles/{article_number}
pub async fn get_article(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(article_number): Path<String>,
    headers: HeaderMap,
) -> Response {
    // URL-decode the article number
    let decoded_number = urlencoding::decode(&article_number)
        .map(|s| s.into_owned())
        .unwrap_or(article_number);

    let state = state.read().await;

    if let Some(denied) = check_access(&state, &headers) {
        return denied;
    }

    match state.get_article(&decoded_number) {
        Some(article) => (
            StatusCode::OK,
            Json(ArticleBody {
                article: article.clone(),
            }),
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            error_information(&format!("No article found with number: {decoded_number}")),
        )
            .into_response(),
    }
}
