//! Catalog HTTP client for the four movie list endpoints

use crate::settings::Settings;
use crate::types::{Category, MovieResponse};
use futures::future::BoxFuture;
use tracing::debug;

/// A category fetch failed. The orchestrator treats every variant the same way.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Server answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Connection, timeout or body decoding failure.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Request/response contract the screen depends on
pub trait CatalogApi: Send + Sync {
    fn fetch(&self, category: Category) -> BoxFuture<'static, Result<MovieResponse, FetchError>>;
}

#[derive(Clone)]
pub struct TmdbClient {
    client: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
}

impl TmdbClient {
    pub fn with_client(client: reqwest::Client, settings: &Settings) -> Self {
        Self {
            client,
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            api_token: settings.api_token.clone().filter(|t| !t.is_empty()),
        }
    }

    pub fn endpoint_url(&self, category: Category) -> String {
        format!("{}/{}", self.base_url, category.endpoint())
    }
}

impl CatalogApi for TmdbClient {
    fn fetch(&self, category: Category) -> BoxFuture<'static, Result<MovieResponse, FetchError>> {
        let url = self.endpoint_url(category);
        let mut request = self.client.get(&url);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        Box::pin(async move {
            debug!(%category, %url, "Requesting movie list");
            let response = request.send().await?;
            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(FetchError::Status { status, body });
            }
            Ok(response.json::<MovieResponse>().await?)
        })
    }
}
