//! Scenario runner — sends one query and verifies the response.

use tracing::{debug, warn};

use crate::client::QueryClient;
use crate::error::ContractError;
use crate::scenario::Scenario;
use crate::verifier;

/// Result of running a single scenario.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub scenario_id: &'static str,
    /// `None` when no response was received.
    pub status: Option<u16>,
    pub error: Option<ContractError>,
}

impl RunResult {
    pub fn passed(&self) -> bool {
        self.error.is_none()
    }
}

pub struct Runner<C> {
    client: C,
}

impl<C: QueryClient> Runner<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub async fn run(&self, scenario: &Scenario) -> RunResult {
        let query = &scenario.query;
        debug!(scenario = scenario.id, %query, "running");

        let resp = match self.client.search(query.param, &query.value).await {
            Ok(resp) => resp,
            Err(e) => {
                warn!(scenario = scenario.id, error = %e, "no response");
                return RunResult {
                    scenario_id: scenario.id,
                    status: None,
                    error: Some(e),
                };
            }
        };

        let outcome = resp.ensure_ok().and_then(|()| {
            verifier::verify(query.param, &resp.body, &query.value, scenario.expectation)
        });

        RunResult {
            scenario_id: scenario.id,
            status: Some(resp.status),
            error: outcome.err(),
        }
    }

    /// Run scenarios one after another. Each result is independent of the others.
    pub async fn run_all(&self, scenarios: &[Scenario]) -> Vec<RunResult> {
        let mut results = Vec::with_capacity(scenarios.len());
        for scenario in scenarios {
            results.push(self.run(scenario).await);
        }
        results
    }
}
