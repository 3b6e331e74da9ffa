//! Response contract checks for `search.php`.
//!
//! Every check is stateless and fail-fast: the first violated invariant is
//! returned and nothing after it is examined.

use serde_json::{Map, Value};
use tracing::debug;

use cocktail_domain::drink::{DATE_MODIFIED_FORMAT, DrinkRecord, REQUIRED_DRINK_FIELDS};
use cocktail_domain::ingredient::{AlcoholFlag, IngredientRecord, REQUIRED_INGREDIENT_FIELDS};
use cocktail_domain::search::SearchParam;

use crate::error::{AssertionFailure, ContractError};

/// How strictly a result is checked against the query term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Every record must carry every required field. An empty array passes.
    Exact,
    /// As `Exact`, the array must be non-empty, and every record name must
    /// contain the term (case-folded).
    Partial,
    /// Only a non-null, non-empty result is required. For ingredients the
    /// field checks still apply.
    CaseInsensitive,
}

/// What the caller knows about the query term ahead of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    /// The term has no matches: the body must be the exact empty literal.
    NoMatches,
    Matches(MatchMode),
}

/// Fields `DrinkRecord` reads as text, beyond the required ones.
const DRINK_TEXT_FIELDS: &[&str] = &["idDrink"];

/// Fields `IngredientRecord` reads as text, beyond the required ones.
const INGREDIENT_TEXT_FIELDS: &[&str] = &["strAlcohol", "strABV"];

/// Dispatch on the parameter that produced `body`.
pub fn verify(
    param: SearchParam,
    body: &str,
    query_term: &str,
    expectation: Expectation,
) -> Result<(), ContractError> {
    match param {
        SearchParam::DrinkName => verify_drink_search(body, query_term, expectation),
        SearchParam::IngredientName => verify_ingredient_search(body, query_term, expectation),
    }
}

pub fn verify_drink_search(
    body: &str,
    query_term: &str,
    expectation: Expectation,
) -> Result<(), ContractError> {
    let param = SearchParam::DrinkName;
    let parsed = parse(body)?;

    let mode = match expectation {
        Expectation::NoMatches => return verify_empty(param, &parsed, body),
        Expectation::Matches(mode) => mode,
    };

    let records = result_records(param, &parsed, mode)?;
    debug!(records = records.len(), mode = mode_name(mode), "verifying drinks");
    if mode == MatchMode::CaseInsensitive {
        return Ok(());
    }

    let needle = query_term.to_lowercase();
    for (i, raw) in records.iter().enumerate() {
        require_fields(i, raw, REQUIRED_DRINK_FIELDS)?;
        require_text(i, raw, REQUIRED_DRINK_FIELDS)?;
        require_text(i, raw, DRINK_TEXT_FIELDS)?;
        let drink: DrinkRecord = typed(i, raw)?;

        if drink.last_modified().is_none() {
            return Err(AssertionFailure::record(
                i,
                "dateModified",
                format!("timestamp in {DATE_MODIFIED_FORMAT} format"),
                format!("{:?}", drink.date_modified.unwrap_or_default()),
            )
            .into());
        }

        if mode == MatchMode::Partial {
            let name = drink.folded_name().unwrap_or_default();
            if !name.contains(&needle) {
                return Err(AssertionFailure::record(
                    i,
                    "strDrink",
                    format!("name containing {needle:?}"),
                    format!("{:?}", drink.name.unwrap_or_default()),
                )
                .into());
            }
        }
    }
    Ok(())
}

pub fn verify_ingredient_search(
    body: &str,
    query_term: &str,
    expectation: Expectation,
) -> Result<(), ContractError> {
    let param = SearchParam::IngredientName;
    let parsed = parse(body)?;

    let mode = match expectation {
        Expectation::NoMatches => return verify_empty(param, &parsed, body),
        Expectation::Matches(mode) => mode,
    };

    let records = result_records(param, &parsed, mode)?;
    debug!(
        records = records.len(),
        mode = mode_name(mode),
        "verifying ingredients"
    );

    let needle = query_term.to_lowercase();
    for (i, raw) in records.iter().enumerate() {
        require_fields(i, raw, REQUIRED_INGREDIENT_FIELDS)?;
        require_text(i, raw, REQUIRED_INGREDIENT_FIELDS)?;
        require_text(i, raw, INGREDIENT_TEXT_FIELDS)?;
        let ingredient: IngredientRecord = typed(i, raw)?;
        check_alcohol(i, &ingredient)?;

        if mode == MatchMode::Partial {
            let name = ingredient.name.as_deref().unwrap_or_default();
            if !name.to_lowercase().contains(&needle) {
                return Err(AssertionFailure::record(
                    i,
                    "strIngredient",
                    format!("name containing {needle:?}"),
                    format!("{name:?}"),
                )
                .into());
            }
        }
    }
    Ok(())
}

/// `strABV` accompanies a truthy `strAlcohol`; otherwise both are absent.
fn check_alcohol(index: usize, ingredient: &IngredientRecord) -> Result<(), ContractError> {
    match ingredient.alcohol_flag() {
        AlcoholFlag::Alcoholic => {
            if ingredient.abv.is_none() {
                return Err(AssertionFailure::record(
                    index,
                    "strABV",
                    "present when strAlcohol is yes",
                    "null",
                )
                .into());
            }
        }
        AlcoholFlag::NonAlcoholic | AlcoholFlag::Unspecified => {
            if let Some(raw) = &ingredient.alcohol {
                return Err(AssertionFailure::record(
                    index,
                    "strAlcohol",
                    "null for a non-alcoholic ingredient",
                    format!("{raw:?}"),
                )
                .into());
            }
            if let Some(abv) = &ingredient.abv {
                return Err(AssertionFailure::record(
                    index,
                    "strABV",
                    "null for a non-alcoholic ingredient",
                    format!("{abv:?}"),
                )
                .into());
            }
        }
    }
    Ok(())
}

fn parse(body: &str) -> Result<Value, ContractError> {
    serde_json::from_str(body)
        .map_err(|e| ContractError::schema(format!("body is not valid JSON: {e}")))
}

/// Structural equality with `{key: null}`, then byte equality with the literal.
fn verify_empty(param: SearchParam, parsed: &Value, body: &str) -> Result<(), ContractError> {
    let mut empty = Map::new();
    empty.insert(param.result_key().to_owned(), Value::Null);
    let expected = Value::Object(empty);
    if *parsed != expected {
        return Err(AssertionFailure::body(
            param.result_key(),
            expected.to_string(),
            parsed.to_string(),
        )
        .into());
    }
    if body != param.empty_body() {
        return Err(
            AssertionFailure::body("body", param.empty_body(), format!("{body:?}")).into(),
        );
    }
    Ok(())
}

/// The non-null result array under the parameter's key. `Partial` and
/// `CaseInsensitive` also require at least one record.
fn result_records(
    param: SearchParam,
    parsed: &Value,
    mode: MatchMode,
) -> Result<&[Value], ContractError> {
    let key = param.result_key();
    let object = parsed.as_object().ok_or_else(|| {
        ContractError::schema(format!(
            "top-level value is {}, not an object",
            type_name(parsed)
        ))
    })?;
    let value = object
        .get(key)
        .ok_or_else(|| ContractError::schema(format!("missing top-level key {key:?}")))?;
    if value.is_null() {
        return Err(AssertionFailure::body(key, "non-null array", "null").into());
    }
    let records = value.as_array().ok_or_else(|| {
        ContractError::schema(format!("{key:?} is {}, not an array", type_name(value)))
    })?;
    if records.is_empty() && mode != MatchMode::Exact {
        return Err(AssertionFailure::body(key, "at least one record", "0 records").into());
    }
    Ok(records)
}

fn require_fields(index: usize, raw: &Value, fields: &[&str]) -> Result<(), ContractError> {
    let record = as_record(index, raw)?;
    for field in fields {
        match record.get(*field) {
            None => {
                return Err(AssertionFailure::record(index, *field, "present", "missing").into());
            }
            Some(Value::Null) => {
                return Err(AssertionFailure::record(index, *field, "non-null", "null").into());
            }
            Some(_) => {}
        }
    }
    Ok(())
}

/// Present, non-null values of `fields` must be JSON strings.
fn require_text(index: usize, raw: &Value, fields: &[&str]) -> Result<(), ContractError> {
    let record = as_record(index, raw)?;
    for field in fields {
        match record.get(*field) {
            None | Some(Value::Null) | Some(Value::String(_)) => {}
            Some(other) => {
                return Err(
                    AssertionFailure::record(index, *field, "a string", type_name(other)).into(),
                );
            }
        }
    }
    Ok(())
}

fn as_record(index: usize, raw: &Value) -> Result<&Map<String, Value>, ContractError> {
    raw.as_object().ok_or_else(|| {
        ContractError::schema(format!(
            "record[{index}] is {}, not an object",
            type_name(raw)
        ))
    })
}

fn typed<T: serde::de::DeserializeOwned>(index: usize, raw: &Value) -> Result<T, ContractError> {
    T::deserialize(raw).map_err(|e| ContractError::schema(format!("record[{index}]: {e}")))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn mode_name(mode: MatchMode) -> &'static str {
    match mode {
        MatchMode::Exact => "exact",
        MatchMode::Partial => "partial",
        MatchMode::CaseInsensitive => "case-insensitive",
    }
}
