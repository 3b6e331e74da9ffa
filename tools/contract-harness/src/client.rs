//! Query client port and its live HTTP implementation.

#![allow(async_fn_in_trait)]

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, Url};
use tracing::{debug, warn};

use cocktail_domain::search::SearchParam;

use crate::error::ContractError;

/// Status code and body exactly as received. Nothing is parsed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    /// Every contract case expects `200 OK`; anything else is a transport
    /// failure, not a contract violation.
    pub fn ensure_ok(&self) -> Result<(), ContractError> {
        if self.status == 200 {
            return Ok(());
        }
        Err(ContractError::Transport {
            status: Some(self.status),
            message: format!("expected HTTP 200, got {}", self.status),
        })
    }
}

/// Port for issuing `search.php` queries.
///
/// One call is one request: no caching, no retries.
pub trait QueryClient: Send + Sync {
    async fn search(&self, param: SearchParam, value: &str) -> Result<RawResponse, ContractError>;
}

/// `QueryClient` over HTTP via `reqwest`.
#[derive(Clone)]
pub struct HttpQueryClient {
    client: Client,
    search_url: Url,
}

impl HttpQueryClient {
    /// `base_url` is the versioned API root; `search.php` is resolved against it.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let search_url = search_url(base_url)?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client, search_url })
    }

    fn url_for(&self, param: SearchParam, value: &str) -> Url {
        let mut url = self.search_url.clone();
        url.query_pairs_mut().append_pair(param.as_str(), value);
        url
    }
}

impl QueryClient for HttpQueryClient {
    async fn search(&self, param: SearchParam, value: &str) -> Result<RawResponse, ContractError> {
        let url = self.url_for(param, value);
        debug!(%url, "GET");

        let resp = self.client.get(url).send().await.map_err(transport)?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(transport)?;

        debug!(status, bytes = body.len(), "response");
        Ok(RawResponse { status, body })
    }
}

fn transport(err: reqwest::Error) -> ContractError {
    let message = if err.is_timeout() {
        format!("request timed out: {err}")
    } else {
        err.to_string()
    };
    warn!(error = %message, "request failed");
    ContractError::Transport {
        status: err.status().map(|s| s.as_u16()),
        message,
    }
}

/// Resolve `search.php` against the API root, tolerating a missing trailing slash.
fn search_url(base_url: &str) -> Result<Url> {
    let mut root = base_url.trim().to_owned();
    if !root.ends_with('/') {
        root.push('/');
    }
    Url::parse(&root)
        .and_then(|u| u.join("search.php"))
        .with_context(|| format!("invalid base URL: {base_url}"))
}
