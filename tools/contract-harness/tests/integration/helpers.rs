use std::sync::{Arc, Mutex};

use cocktail_domain::search::SearchParam;
use cocktail_testing::fixture::recorded_dir;
use contract_harness::client::{QueryClient, RawResponse};
use contract_harness::error::ContractError;
use contract_harness::recorded::RecordedQueryClient;

// ── StubClient ───────────────────────────────────────────────────────────────

/// Answers every query with the same outcome and remembers what was asked.
pub struct StubClient {
    pub outcome: Result<RawResponse, ContractError>,
    pub calls: Arc<Mutex<Vec<(SearchParam, String)>>>,
}

impl StubClient {
    pub fn responding(status: u16, body: &str) -> Self {
        Self {
            outcome: Ok(RawResponse {
                status,
                body: body.to_owned(),
            }),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(ContractError::Transport {
                status: None,
                message: message.to_owned(),
            }),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns a shared handle to the call log for post-execution inspection.
    pub fn calls_handle(&self) -> Arc<Mutex<Vec<(SearchParam, String)>>> {
        Arc::clone(&self.calls)
    }
}

impl QueryClient for StubClient {
    async fn search(&self, param: SearchParam, value: &str) -> Result<RawResponse, ContractError> {
        self.calls.lock().unwrap().push((param, value.to_owned()));
        self.outcome.clone()
    }
}

// ── Recordings ───────────────────────────────────────────────────────────────

pub fn recorded_client() -> RecordedQueryClient {
    RecordedQueryClient::load(&recorded_dir()).expect("recordings should load")
}
