use cocktail_domain::search::{SearchParam, SearchQuery};
use cocktail_testing::bodies::{drink, drinks_body, with_null};
use contract_harness::error::ContractError;
use contract_harness::runner::Runner;
use contract_harness::scenario::{Scenario, catalog};
use contract_harness::verifier::{Expectation, MatchMode};

use crate::helpers::StubClient;

fn scenario(id: &str) -> Scenario {
    catalog()
        .into_iter()
        .find(|s| s.id == id)
        .unwrap_or_else(|| panic!("no scenario {id}"))
}

#[tokio::test]
async fn should_send_scenario_query_to_client() {
    let stub = StubClient::responding(200, r#"{"drinks":null}"#);
    let calls = stub.calls_handle();
    let runner = Runner::new(stub);

    let result = runner.run(&scenario("drinks/non_existing")).await;

    assert!(result.passed(), "{:?}", result.error);
    let calls = calls.lock().unwrap();
    assert_eq!(
        *calls,
        vec![(SearchParam::DrinkName, "testingcocktail".to_owned())]
    );
}

#[tokio::test]
async fn should_report_non_200_as_transport_error() {
    let runner = Runner::new(StubClient::responding(503, r#"{"drinks":null}"#));

    let result = runner.run(&scenario("drinks/non_existing")).await;

    assert_eq!(result.status, Some(503));
    assert!(
        matches!(
            result.error,
            Some(ContractError::Transport {
                status: Some(503),
                ..
            })
        ),
        "expected Transport, got {:?}",
        result.error
    );
}

#[tokio::test]
async fn should_report_network_failure_without_status() {
    let runner = Runner::new(StubClient::failing("connection refused"));

    let result = runner.run(&scenario("ingredients/existing_fields")).await;

    assert_eq!(result.status, None);
    assert!(result.error.as_ref().is_some_and(ContractError::is_transport));
}

#[tokio::test]
async fn should_report_malformed_body_as_schema_error() {
    let runner = Runner::new(StubClient::responding(200, "<html>oops</html>"));

    let result = runner.run(&scenario("drinks/existing_fields")).await;

    assert!(matches!(result.error, Some(ContractError::Schema(_))));
}

#[tokio::test]
async fn should_report_null_field_as_assertion_failure() {
    let body = drinks_body(vec![with_null(drink("Margarita"), "strInstructions")]);
    let runner = Runner::new(StubClient::responding(200, &body));

    let result = runner.run(&scenario("drinks/existing_fields")).await;

    match result.error {
        Some(ContractError::Assertion(failure)) => {
            assert_eq!(failure.record, Some(0));
            assert_eq!(failure.field, "strInstructions");
        }
        other => panic!("expected Assertion, got {other:?}"),
    }
}

#[tokio::test]
async fn should_keep_results_independent() {
    let body = drinks_body(vec![drink("Margarita")]);
    let runner = Runner::new(StubClient::responding(200, &body));
    let scenarios = vec![
        scenario("drinks/existing_fields"),
        scenario("drinks/non_existing"),
        Scenario {
            id: "drinks/adhoc_partial",
            description: "ad-hoc partial match",
            query: SearchQuery::drink("marg"),
            expectation: Expectation::Matches(MatchMode::Partial),
        },
    ];

    let results = runner.run_all(&scenarios).await;

    let passed: Vec<_> = results.iter().map(|r| r.passed()).collect();
    assert_eq!(passed, vec![true, false, true]);
    assert_eq!(results[1].scenario_id, "drinks/non_existing");
}
