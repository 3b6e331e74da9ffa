//! Canned response bodies shaped like the live API.
//!
//! Builders return `serde_json::Value` so a test can null out or remove a
//! single field before serializing.

use serde_json::{Value, json};

/// A drink carrying every required field.
pub fn drink(name: &str) -> Value {
    json!({
        "idDrink": "11007",
        "strDrink": name,
        "strTags": "IBA,ContemporaryClassic",
        "strCategory": "Ordinary Drink",
        "strAlcoholic": "Alcoholic",
        "strGlass": "Cocktail glass",
        "strInstructions": "Shake with ice and strain.",
        "strIngredient1": "Tequila",
        "strIngredient2": "Triple sec",
        "strIngredient3": null,
        "strMeasure1": "1 1/2 oz ",
        "strMeasure2": "1/2 oz ",
        "strMeasure3": null,
        "strCreativeCommonsConfirmed": "Yes",
        "dateModified": "2015-08-18 14:42:59"
    })
}

/// An alcoholic ingredient with an ABV.
pub fn alcoholic_ingredient(name: &str, abv: &str) -> Value {
    json!({
        "idIngredient": "1",
        "strIngredient": name,
        "strDescription": format!("{name} is a distilled beverage."),
        "strType": name,
        "strAlcohol": "Yes",
        "strABV": abv
    })
}

/// An ingredient with null alcohol flag and null ABV.
pub fn plain_ingredient(name: &str) -> Value {
    json!({
        "idIngredient": "181",
        "strIngredient": name,
        "strDescription": format!("{name} is a citrus fruit."),
        "strType": "Fruit",
        "strAlcohol": null,
        "strABV": null
    })
}

/// `{"drinks":[...]}` as compact text.
pub fn drinks_body(drinks: Vec<Value>) -> String {
    json!({ "drinks": drinks }).to_string()
}

/// `{"ingredients":[...]}` as compact text.
pub fn ingredients_body(ingredients: Vec<Value>) -> String {
    json!({ "ingredients": ingredients }).to_string()
}

/// Return `record` with `field` set to JSON null.
pub fn with_null(mut record: Value, field: &str) -> Value {
    record[field] = Value::Null;
    record
}

/// Return `record` with `field` set to `value`.
pub fn with_field(mut record: Value, field: &str, value: Value) -> Value {
    record[field] = value;
    record
}

/// Return `record` with `field` removed entirely.
pub fn without(mut record: Value, field: &str) -> Value {
    if let Some(map) = record.as_object_mut() {
        map.remove(field);
    }
    record
}
