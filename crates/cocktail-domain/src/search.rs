//! Search query types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Query-string parameter accepted by `search.php`.
///
/// Wire format: `"s"` (drink name) or `"i"` (ingredient name).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchParam {
    #[serde(rename = "s")]
    DrinkName,
    #[serde(rename = "i")]
    IngredientName,
}

impl SearchParam {
    /// Query-string key sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DrinkName => "s",
            Self::IngredientName => "i",
        }
    }

    /// Convert from the wire key. Returns `None` for unknown keys.
    pub fn from_wire(key: &str) -> Option<Self> {
        match key {
            "s" => Some(Self::DrinkName),
            "i" => Some(Self::IngredientName),
            _ => None,
        }
    }

    /// Top-level key of the JSON object returned for this parameter.
    pub fn result_key(self) -> &'static str {
        match self {
            Self::DrinkName => "drinks",
            Self::IngredientName => "ingredients",
        }
    }

    /// The literal body the API returns when nothing matches.
    pub fn empty_body(self) -> &'static str {
        match self {
            Self::DrinkName => r#"{"drinks":null}"#,
            Self::IngredientName => r#"{"ingredients":null}"#,
        }
    }
}

impl fmt::Display for SearchParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `search.php` request: which parameter and what value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub param: SearchParam,
    pub value: String,
}

impl SearchQuery {
    pub fn drink(name: impl Into<String>) -> Self {
        Self {
            param: SearchParam::DrinkName,
            value: name.into(),
        }
    }

    pub fn ingredient(name: impl Into<String>) -> Self {
        Self {
            param: SearchParam::IngredientName,
            value: name.into(),
        }
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "search.php?{}={}", self.param, self.value)
    }
}
