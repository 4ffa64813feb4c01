//! Input rules for the product routes.

use axum_helpers::validation::{numeric_value, Check, Location, Rule, RuleSet};
use serde_json::Value;

fn positive(value: Option<&Value>) -> bool {
    numeric_value(value).is_some_and(|price| price > 0.0)
}

const ID_IS_INT: Rule = Rule::new("id", Location::Params, Check::IsInt, "Invalid ID");
const NAME_NOT_EMPTY: Rule = Rule::new(
    "name",
    Location::Body,
    Check::NotEmpty,
    "Product name cannot be empty",
);
const PRICE_IS_NUMERIC: Rule = Rule::new(
    "price",
    Location::Body,
    Check::IsNumeric,
    "Enter a valid number",
);
const PRICE_NOT_EMPTY: Rule = Rule::new(
    "price",
    Location::Body,
    Check::NotEmpty,
    "Product price cannot be empty",
);
const PRICE_POSITIVE: Rule = Rule::new(
    "price",
    Location::Body,
    Check::Custom(positive),
    "Invalid price",
);
const AVAILABILITY_NOT_EMPTY: Rule = Rule::new(
    "availability",
    Location::Body,
    Check::NotEmpty,
    "Invalid availability value",
);

/// Get, patch and delete by id.
pub const ID_RULES: RuleSet = &[ID_IS_INT];

/// Create.
pub const CREATE_RULES: RuleSet = &[
    NAME_NOT_EMPTY,
    PRICE_IS_NUMERIC,
    PRICE_NOT_EMPTY,
    PRICE_POSITIVE,
];

/// Full update.
pub const UPDATE_RULES: RuleSet = &[
    ID_IS_INT,
    NAME_NOT_EMPTY,
    PRICE_IS_NUMERIC,
    PRICE_NOT_EMPTY,
    PRICE_POSITIVE,
    AVAILABILITY_NOT_EMPTY,
];
