//! Ingredient record as returned by `search.php?i=`.

use serde::Deserialize;

/// Fields every returned ingredient must carry with a non-null value.
pub const REQUIRED_INGREDIENT_FIELDS: &[&str] =
    &["idIngredient", "strIngredient", "strDescription", "strType"];

/// Tri-state reading of `strAlcohol`.
///
/// The wire value is a loosely cased string (`"Yes"`, `"yes"`, `"No"`) or
/// null. It is parsed once here so callers branch on a variant instead of
/// comparing strings. Any non-blank value other than `"no"` counts as
/// alcoholic, so an unexpected value still demands an ABV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlcoholFlag {
    Alcoholic,
    NonAlcoholic,
    /// Null, missing or empty.
    Unspecified,
}

impl AlcoholFlag {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Self::Unspecified,
            Some(s) if s.eq_ignore_ascii_case("no") => Self::NonAlcoholic,
            Some(_) => Self::Alcoholic,
        }
    }

    pub fn is_alcoholic(self) -> bool {
        matches!(self, Self::Alcoholic)
    }
}

/// One ingredient from the `ingredients` array.
#[derive(Debug, Clone, Deserialize)]
pub struct IngredientRecord {
    #[serde(rename = "idIngredient")]
    pub id: Option<String>,
    #[serde(rename = "strIngredient")]
    pub name: Option<String>,
    #[serde(rename = "strDescription")]
    pub description: Option<String>,
    #[serde(rename = "strType")]
    pub kind: Option<String>,
    /// Raw `strAlcohol`; see [`IngredientRecord::alcohol_flag`].
    #[serde(rename = "strAlcohol")]
    pub alcohol: Option<String>,
    #[serde(rename = "strABV")]
    pub abv: Option<String>,
}

impl IngredientRecord {
    pub fn alcohol_flag(&self) -> AlcoholFlag {
        AlcoholFlag::parse(self.alcohol.as_deref())
    }

    /// ABV as a number. `None` when absent or unparseable.
    pub fn abv_percent(&self) -> Option<f64> {
        self.abv.as_deref().and_then(|s| s.trim().parse().ok())
    }
}
