//! Recorded-fixture `QueryClient`.
//!
//! Each file in the recording directory holds one request and the response
//! the live API gave for it:
//!
//! ```json
//! {
//!   "request":  { "param": "s", "value": "testingcocktail" },
//!   "response": { "status": 200, "body": "{\"drinks\":null}" }
//! }
//! ```
//!
//! `body` is either a JSON string (replayed byte-for-byte) or any other JSON
//! value (replayed as compact JSON text).

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use cocktail_domain::search::{SearchParam, SearchQuery};

use crate::client::{QueryClient, RawResponse};
use crate::error::ContractError;

#[derive(Debug, Clone, Deserialize)]
pub struct Recording {
    pub request: SearchQuery,
    pub response: RecordedResponse,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecordedResponse {
    pub status: u16,
    pub body: RecordedBody,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RecordedBody {
    Text(String),
    Json(Value),
}

impl RecordedBody {
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Json(value) => value.to_string(),
        }
    }
}

/// Replays recorded responses keyed by exact `(param, value)`.
#[derive(Debug, Clone, Default)]
pub struct RecordedQueryClient {
    responses: HashMap<(SearchParam, String), RawResponse>,
}

impl RecordedQueryClient {
    /// Load every `*.json` file in `dir`. Two recordings of the same query are
    /// rejected.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut paths: Vec<_> = fs::read_dir(dir)
            .with_context(|| format!("cannot open {}", dir.display()))?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().map(|e| e == "json").unwrap_or(false))
            .collect();
        paths.sort();

        let mut client = Self::default();
        for path in paths {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("cannot read {}", path.display()))?;
            let recording: Recording = serde_json::from_str(&content)
                .with_context(|| format!("invalid recording JSON in {}", path.display()))?;
            client
                .insert(recording)
                .with_context(|| format!("in {}", path.display()))?;
        }

        debug!(count = client.len(), dir = %dir.display(), "loaded recordings");
        Ok(client)
    }

    pub fn from_recordings(recordings: impl IntoIterator<Item = Recording>) -> Result<Self> {
        let mut client = Self::default();
        for recording in recordings {
            client.insert(recording)?;
        }
        Ok(client)
    }

    /// Register a canned response directly.
    pub fn with_response(mut self, query: SearchQuery, response: RawResponse) -> Self {
        self.responses.insert((query.param, query.value), response);
        self
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    fn insert(&mut self, recording: Recording) -> Result<()> {
        let Recording { request, response } = recording;
        let key = (request.param, request.value);
        if self.responses.contains_key(&key) {
            bail!("duplicate recording for search.php?{}={}", key.0, key.1);
        }
        self.responses.insert(
            key,
            RawResponse {
                status: response.status,
                body: response.body.into_text(),
            },
        );
        Ok(())
    }
}

impl QueryClient for RecordedQueryClient {
    async fn search(&self, param: SearchParam, value: &str) -> Result<RawResponse, ContractError> {
        match self.responses.get(&(param, value.to_owned())) {
            Some(resp) => {
                debug!(%param, value, status = resp.status, "replaying recording");
                Ok(resp.clone())
            }
            None => Err(ContractError::Transport {
                status: None,
                message: format!("no recorded response for search.php?{param}={value}"),
            }),
        }
    }
}
