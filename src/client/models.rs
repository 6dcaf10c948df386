use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Product record as returned by the catalog endpoints.
///
/// Text fields tolerate `null`, and identifiers may arrive as strings or
/// numbers depending on how the dataset was indexed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub brand: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub main_category: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub subcategory: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "nullable_string")]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationList {
    #[serde(deserialize_with = "string_or_number")]
    pub product_id: String,
    pub recommendations: Vec<ProductSummary>,
    #[serde(default)]
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub query: String,
    pub results: Vec<ProductSummary>,
    #[serde(default)]
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedCount {
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogStats {
    #[serde(default)]
    pub stats: IndexMap<String, Value>,
    #[serde(default)]
    pub categories: Vec<NamedCount>,
    #[serde(default)]
    pub brands: Vec<NamedCount>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number identifier, got {other}"
        ))),
    }
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
