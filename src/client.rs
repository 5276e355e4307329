//! Fortnox API client.
//!
//! Low-level HTTP client that handles credential headers and raw requests.
//! Higher-level operations are implemented via traits on entity types.

use std::sync::Arc;

use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{FortnoxError, Result};

const DEFAULT_API_URL: &str = "https://api.fortnox.se/3/";
const USER_AGENT: &str = concat!("fortnoxapi/", env!("CARGO_PKG_VERSION"));

/// Credential set carried by a client.
///
/// Token exchange populates the authorization code and client secret;
/// authenticated calls populate the access token and client secret. A field
/// that is `None` never produces a header.
#[derive(Clone, Default)]
struct Credentials {
    access_token: Option<String>,
    client_secret: Option<String>,
    authorization_code: Option<String>,
}

/// Low-level Fortnox API client.
///
/// Holds the credentials and base URL, and sends authenticated requests.
/// Entity-specific operations are implemented via the [`Get`](crate::Get),
/// [`Create`](crate::Create), and [`Update`](crate::Update) traits on model
/// types.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool. Credentials are immutable once the client is built.
///
/// # Example
///
/// ```no_run
/// use fortnoxapi::FortnoxClient;
///
/// # async fn example() -> fortnoxapi::Result<()> {
/// // Exchange a one-time authorization code for an access token.
/// let token = FortnoxClient::get_auth_token("auth-code", "client-secret").await?;
///
/// // Then construct a client for authenticated calls.
/// let client = FortnoxClient::new(&token, "client-secret")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct FortnoxClient {
    http: Client,
    base_url: Arc<Url>,
    credentials: Credentials,
}

impl std::fmt::Debug for FortnoxClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FortnoxClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl FortnoxClient {
    /// Create a client for authenticated use against the production API.
    ///
    /// # Arguments
    ///
    /// * `access_token` - access token obtained via [`get_auth_token`](Self::get_auth_token)
    /// * `client_secret` - integration client secret
    ///
    /// An empty string for either credential means the corresponding header
    /// is never sent.
    pub fn new(access_token: &str, client_secret: &str) -> Result<Self> {
        Self::with_base_url(access_token, client_secret, DEFAULT_API_URL)
    }

    /// Create a client against a custom base URL (test servers, staging).
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn with_base_url(access_token: &str, client_secret: &str, base_url: &str) -> Result<Self> {
        Self::from_credentials(
            Credentials {
                access_token: non_empty(access_token),
                client_secret: non_empty(client_secret),
                authorization_code: None,
            },
            base_url,
        )
    }

    /// Exchange a one-time authorization code for an access token.
    ///
    /// Sends a GET of the bare API base with the `Authorization-Code` and
    /// `Client-Secret` headers (no access token yet) and extracts the token
    /// from the nested `{"Authorization":{"AccessToken":…}}` envelope.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the request fails, or a decode error if
    /// the response is not valid JSON in that shape.
    pub async fn get_auth_token(auth_code: &str, client_secret: &str) -> Result<String> {
        Self::get_auth_token_from(DEFAULT_API_URL, auth_code, client_secret).await
    }

    /// Perform the token exchange against a custom base URL.
    #[tracing::instrument(skip(auth_code, client_secret))]
    pub async fn get_auth_token_from(
        base_url: &str,
        auth_code: &str,
        client_secret: &str,
    ) -> Result<String> {
        let client = Self::from_credentials(
            Credentials {
                access_token: None,
                client_secret: non_empty(client_secret),
                authorization_code: non_empty(auth_code),
            },
            base_url,
        )?;

        let body = client.get("").await?;
        let response: AuthTokenResponse = serde_json::from_slice(&body)?;
        Ok(response.authorization.access_token)
    }

    fn from_credentials(credentials: Credentials, base_url: &str) -> Result<Self> {
        // Ensure base URL ends with / so that Url::join appends fragments.
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base_url_str)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .build()
            .map_err(FortnoxError::Http)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            credentials,
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Send a request and return the raw response body.
    ///
    /// This is the single low-level primitive all typed operations go
    /// through. The path fragment is joined onto the base URL; credential
    /// headers are added only for populated credential fields; a body, when
    /// present, is sent as JSON. The response status is not inspected: the
    /// body bytes come back as-is and the caller's decode decides the
    /// outcome. A failure while reading the body yields an empty body
    /// rather than an error; only connection and request construction
    /// failures surface as errors.
    #[tracing::instrument(skip(self, body, extra_headers))]
    pub async fn request_raw(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
        extra_headers: Option<HeaderMap>,
    ) -> Result<Vec<u8>> {
        let url = self.base_url.join(path)?;

        let mut request = self.http.request(method, url);
        if let Some(token) = &self.credentials.access_token {
            request = request.header("Access-Token", token);
        }
        if let Some(secret) = &self.credentials.client_secret {
            request = request.header("Client-Secret", secret);
        }
        if let Some(code) = &self.credentials.authorization_code {
            request = request.header("Authorization-Code", code);
        }
        if let Some(headers) = extra_headers {
            request = request.headers(headers);
        }
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = request.send().await.map_err(FortnoxError::Http)?;

        // A body read failure is swallowed and treated as an empty body.
        Ok(response
            .bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .unwrap_or_default())
    }

    /// Make a GET request and return the raw body.
    pub(crate) async fn get(&self, path: &str) -> Result<Vec<u8>> {
        self.request_raw(Method::GET, path, None, None).await
    }

    /// Make a POST request with a JSON body and return the raw body.
    pub(crate) async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Vec<u8>> {
        let bytes = serde_json::to_vec(body)?;
        self.request_raw(Method::POST, path, Some(bytes), None).await
    }

    /// Make a PUT request with a JSON body and return the raw body.
    pub(crate) async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Vec<u8>> {
        let bytes = serde_json::to_vec(body)?;
        self.request_raw(Method::PUT, path, Some(bytes), None).await
    }
}

/// Token exchange response envelope.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AuthTokenResponse {
    authorization: Authorization,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Authorization {
    access_token: String,
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_debug_redacts_credentials() {
        let client = FortnoxClient::new("secret-token", "secret-secret").unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("FortnoxClient"));
        assert!(debug.contains("base_url"));
        // Credentials must not leak into debug output
        assert!(!debug.contains("secret-token"));
        assert!(!debug.contains("secret-secret"));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client1 =
            FortnoxClient::with_base_url("token", "secret", "https://api.fortnox.se/3").unwrap();
        let client2 =
            FortnoxClient::with_base_url("token", "secret", "https://api.fortnox.se/3/").unwrap();
        assert_eq!(client1.base_url().as_str(), client2.base_url().as_str());
    }

    #[test]
    fn test_empty_credentials_are_normalized() {
        let client = FortnoxClient::new("", "").unwrap();
        assert!(client.credentials.access_token.is_none());
        assert!(client.credentials.client_secret.is_none());
        assert!(client.credentials.authorization_code.is_none());
    }

    #[test]
    fn test_auth_token_envelope_shape() {
        let body = br#"{"Authorization":{"AccessToken":"abc123"}}"#;
        let response: AuthTokenResponse = serde_json::from_slice(body).unwrap();
        assert_eq!(response.authorization.access_token, "abc123");

        // A valid JSON body without the envelope key is a shape error.
        let err = serde_json::from_slice::<AuthTokenResponse>(br#"{"Token":"abc123"}"#);
        assert!(err.is_err());
    }
}
