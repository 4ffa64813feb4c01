use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// A product offered in the catalogue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Database-generated identifier
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Monitor")]
    pub name: String,
    #[schema(example = 300.0)]
    pub price: f64,
    /// Whether the product is in stock
    pub availability: bool,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(max = 100), custom(function = "not_blank"))]
    #[schema(example = "Monitor")]
    pub name: String,

    /// Accepts a JSON number or a numeric string
    #[serde(deserialize_with = "lenient::number")]
    #[validate(range(exclusive_min = 0.0))]
    #[schema(example = 300.0)]
    pub price: f64,
}

/// DTO replacing every mutable field of a product
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(max = 100), custom(function = "not_blank"))]
    #[schema(example = "Curved Monitor")]
    pub name: String,

    /// Accepts a JSON number or a numeric string
    #[serde(deserialize_with = "lenient::number")]
    #[validate(range(exclusive_min = 0.0))]
    #[schema(example = 450.0)]
    pub price: f64,

    /// Accepts a JSON boolean or the strings "true"/"false"
    #[serde(deserialize_with = "lenient::boolean")]
    pub availability: bool,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Deserializers for form-style clients that send scalars as strings.
mod lenient {
    use axum_helpers::validation::parse_numeric;
    use serde::{de::Error, Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrText {
        Bool(bool),
        Text(String),
    }

    pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match NumberOrText::deserialize(deserializer)? {
            NumberOrText::Number(n) => Ok(n),
            NumberOrText::Text(s) => parse_numeric(&s)
                .ok_or_else(|| D::Error::custom(format!("invalid number: {:?}", s))),
        }
    }

    pub fn boolean<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match BoolOrText::deserialize(deserializer)? {
            BoolOrText::Bool(b) => Ok(b),
            BoolOrText::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                _ => Err(D::Error::custom(format!("invalid boolean: {:?}", s))),
            },
        }
    }
}
