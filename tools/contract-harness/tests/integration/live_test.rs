//! Catalog against the public API. Needs network access:
//! `cargo test -p contract-harness -- --ignored`

use cocktail_domain::search::SearchParam;
use contract_harness::client::{HttpQueryClient, QueryClient};
use contract_harness::config::HarnessConfig;
use contract_harness::runner::Runner;
use contract_harness::scenario::{self, Scenario};

fn live_client() -> HttpQueryClient {
    let config = HarnessConfig::from_env();
    HttpQueryClient::new(&config.base_url, config.request_timeout).expect("valid base URL")
}

async fn run_live(scenarios: Vec<Scenario>) {
    let runner = Runner::new(live_client());
    let mut failures = Vec::new();
    for s in &scenarios {
        let result = runner.run(s).await;
        if let Some(err) = result.error {
            failures.push(format!("{}: {err}", s.id));
        }
    }
    assert!(failures.is_empty(), "{failures:#?}");
}

#[tokio::test]
#[ignore = "calls the public API"]
async fn live_drink_scenarios() {
    run_live(scenario::for_param(SearchParam::DrinkName)).await;
}

#[tokio::test]
#[ignore = "calls the public API"]
async fn live_ingredient_scenarios() {
    run_live(scenario::for_param(SearchParam::IngredientName)).await;
}

#[tokio::test]
#[ignore = "calls the public API"]
async fn live_empty_drink_body_is_exact() {
    let resp = live_client()
        .search(SearchParam::DrinkName, "testingcocktail")
        .await
        .unwrap();
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body, r#"{"drinks":null}"#);
}

#[tokio::test]
#[ignore = "calls the public API"]
async fn live_empty_ingredient_body_is_exact() {
    let resp = live_client()
        .search(SearchParam::IngredientName, "testingingredient")
        .await
        .unwrap();
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body, r#"{"ingredients":null}"#);
}
