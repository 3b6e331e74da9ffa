//! The catalog of contract cases run against the search API.

use cocktail_domain::search::{SearchParam, SearchQuery};

use crate::verifier::{Expectation, MatchMode};

/// One contract case: a query plus what its response must satisfy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    /// `{family}/{case}`, unique within the catalog.
    pub id: &'static str,
    pub description: &'static str,
    pub query: SearchQuery,
    pub expectation: Expectation,
}

impl Scenario {
    pub fn param(&self) -> SearchParam {
        self.query.param
    }
}

/// Every case, drinks first.
pub fn catalog() -> Vec<Scenario> {
    vec![
        Scenario {
            id: "drinks/existing_fields",
            description: "existing cocktail returns every required field",
            query: SearchQuery::drink("margarita"),
            expectation: Expectation::Matches(MatchMode::Exact),
        },
        Scenario {
            id: "drinks/non_existing",
            description: "unknown cocktail returns {\"drinks\":null}",
            query: SearchQuery::drink("testingcocktail"),
            expectation: Expectation::NoMatches,
        },
        Scenario {
            id: "drinks/case_insensitive",
            description: "mixed-case cocktail name still matches",
            query: SearchQuery::drink("MargArIta"),
            expectation: Expectation::Matches(MatchMode::CaseInsensitive),
        },
        Scenario {
            id: "drinks/partial_name",
            description: "partial cocktail name matches only names containing it",
            query: SearchQuery::drink("margar"),
            expectation: Expectation::Matches(MatchMode::Partial),
        },
        Scenario {
            id: "drinks/special_characters",
            description: "non-ASCII cocktail name matches",
            query: SearchQuery::drink("Piña Colada"),
            expectation: Expectation::Matches(MatchMode::CaseInsensitive),
        },
        Scenario {
            id: "ingredients/existing_fields",
            description: "existing ingredient returns required fields and consistent ABV",
            query: SearchQuery::ingredient("vodka"),
            expectation: Expectation::Matches(MatchMode::Exact),
        },
        Scenario {
            id: "ingredients/case_insensitive",
            description: "mixed-case ingredient name still matches",
            query: SearchQuery::ingredient("vOdKA"),
            expectation: Expectation::Matches(MatchMode::CaseInsensitive),
        },
        Scenario {
            id: "ingredients/partial_name",
            description: "partial ingredient name matches",
            query: SearchQuery::ingredient("vod"),
            expectation: Expectation::Matches(MatchMode::Exact),
        },
        Scenario {
            id: "ingredients/non_existing",
            description: "unknown ingredient returns {\"ingredients\":null}",
            query: SearchQuery::ingredient("testingingredient"),
            expectation: Expectation::NoMatches,
        },
    ]
}

/// The catalog restricted to one parameter family.
pub fn for_param(param: SearchParam) -> Vec<Scenario> {
    catalog().into_iter().filter(|s| s.param() == param).collect()
}
