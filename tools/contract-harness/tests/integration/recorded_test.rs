use cocktail_domain::drink::DrinkRecord;
use cocktail_domain::ingredient::{AlcoholFlag, IngredientRecord};
use cocktail_domain::search::SearchParam;
use contract_harness::client::QueryClient;
use contract_harness::error::ContractError;
use contract_harness::runner::Runner;
use contract_harness::scenario::catalog;
use contract_harness::verifier::{Expectation, MatchMode, verify_drink_search};

use crate::helpers::recorded_client;

// ── catalog ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_record_every_catalog_query() {
    let client = recorded_client();
    assert_eq!(client.len(), catalog().len());
}

#[tokio::test]
async fn should_pass_every_scenario_against_recordings() {
    let runner = Runner::new(recorded_client());
    for scenario in catalog() {
        let result = runner.run(&scenario).await;
        assert!(
            result.passed(),
            "{} failed: {:?}",
            scenario.id,
            result.error
        );
        assert_eq!(result.status, Some(200));
    }
}

// ── empty bodies ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_replay_exact_empty_drink_body() {
    let resp = recorded_client()
        .search(SearchParam::DrinkName, "testingcocktail")
        .await
        .unwrap();
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body, r#"{"drinks":null}"#);
}

#[tokio::test]
async fn should_replay_exact_empty_ingredient_body() {
    let resp = recorded_client()
        .search(SearchParam::IngredientName, "testingingredient")
        .await
        .unwrap();
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body, r#"{"ingredients":null}"#);
}

// ── record content ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_only_margar_drinks_for_partial_name() {
    let resp = recorded_client()
        .search(SearchParam::DrinkName, "margar")
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_str(&resp.body).unwrap();
    let drinks: Vec<DrinkRecord> = serde_json::from_value(body["drinks"].clone()).unwrap();

    assert!(!drinks.is_empty());
    for drink in &drinks {
        assert!(drink.folded_name().unwrap().contains("margar"));
        assert!(!drink.portions().is_empty());
        assert!(drink.last_modified().is_some());
    }
}

#[tokio::test]
async fn should_find_pina_colada_by_non_ascii_name() {
    let resp = recorded_client()
        .search(SearchParam::DrinkName, "Piña Colada")
        .await
        .unwrap();
    let result = verify_drink_search(
        &resp.body,
        "Piña Colada",
        Expectation::Matches(MatchMode::Partial),
    );
    assert!(result.is_ok(), "{result:?}");
}

#[tokio::test]
async fn should_mark_vodka_alcoholic_with_abv() {
    let resp = recorded_client()
        .search(SearchParam::IngredientName, "vodka")
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_str(&resp.body).unwrap();
    let ingredients: Vec<IngredientRecord> =
        serde_json::from_value(body["ingredients"].clone()).unwrap();

    assert_eq!(ingredients.len(), 1);
    assert_eq!(ingredients[0].alcohol_flag(), AlcoholFlag::Alcoholic);
    assert_eq!(ingredients[0].abv_percent(), Some(40.0));
}

#[tokio::test]
async fn should_report_unrecorded_query_as_transport_error() {
    let result = recorded_client()
        .search(SearchParam::DrinkName, "mojito")
        .await;
    assert!(
        matches!(result, Err(ContractError::Transport { status: None, .. })),
        "expected Transport, got {result:?}"
    );
}
