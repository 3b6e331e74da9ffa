//! Drink record as returned by `search.php?s=`.

use chrono::NaiveDateTime;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Fields every returned drink must carry with a non-null value.
pub const REQUIRED_DRINK_FIELDS: &[&str] = &[
    "strDrink",
    "strTags",
    "strCategory",
    "strAlcoholic",
    "strGlass",
    "strInstructions",
    "strIngredient1",
    "strMeasure1",
    "strCreativeCommonsConfirmed",
    "dateModified",
];

/// Wire format of `dateModified`, e.g. `"2015-08-18 14:42:59"`.
pub const DATE_MODIFIED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The API numbers ingredient/measure columns 1 through 15.
pub const MAX_INGREDIENT_SLOTS: usize = 15;

/// One drink from the `drinks` array.
///
/// Every field is optional at this layer; presence is a contract concern
/// checked by the verifier, not a deserialization concern.
#[derive(Debug, Clone, Deserialize)]
pub struct DrinkRecord {
    #[serde(rename = "idDrink")]
    pub id: Option<String>,
    #[serde(rename = "strDrink")]
    pub name: Option<String>,
    #[serde(rename = "strTags")]
    pub tags: Option<String>,
    #[serde(rename = "strCategory")]
    pub category: Option<String>,
    #[serde(rename = "strAlcoholic")]
    pub alcoholic: Option<String>,
    #[serde(rename = "strGlass")]
    pub glass: Option<String>,
    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,
    #[serde(rename = "strCreativeCommonsConfirmed")]
    pub creative_commons_confirmed: Option<String>,
    #[serde(rename = "dateModified")]
    pub date_modified: Option<String>,
    /// Numbered `strIngredientN` / `strMeasureN` columns plus anything else.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// An (ingredient, measure) pair. Measure is often null for garnishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Portion {
    pub ingredient: String,
    pub measure: Option<String>,
}

impl DrinkRecord {
    /// Non-empty ingredient slots in column order.
    pub fn portions(&self) -> Vec<Portion> {
        (1..=MAX_INGREDIENT_SLOTS)
            .filter_map(|n| {
                let ingredient = self.column(&format!("strIngredient{n}"))?;
                Some(Portion {
                    ingredient: ingredient.to_owned(),
                    measure: self.column(&format!("strMeasure{n}")).map(str::to_owned),
                })
            })
            .collect()
    }

    /// Parsed `dateModified`. `None` when absent or not in the wire format.
    pub fn last_modified(&self) -> Option<NaiveDateTime> {
        self.date_modified
            .as_deref()
            .and_then(|s| NaiveDateTime::parse_from_str(s, DATE_MODIFIED_FORMAT).ok())
    }

    /// Case-folded name, used for substring matching.
    pub fn folded_name(&self) -> Option<String> {
        self.name.as_deref().map(str::to_lowercase)
    }

    fn column(&self, key: &str) -> Option<&str> {
        self.rest
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
