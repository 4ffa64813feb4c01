//! Declarative request validation.
//!
//! A [`RuleSet`] is a static slice of [`Rule`] records checked against path
//! parameters and the parsed JSON body. Two route-level middlewares wire it
//! in front of a handler:
//!
//! 1. [`validate_request`] evaluates every rule and records the failures on
//!    the request.
//! 2. [`handle_input_errors`] answers `400 {"errors": [...]}` when any were
//!    recorded, otherwise hands the request to the handler.
//!
//! [`with_rules`] applies both in that order.
//!
//! ```ignore
//! use axum_helpers::validation::{with_rules, Check, Location, Rule, RuleSet};
//!
//! const ID_RULES: RuleSet = &[Rule::new("id", Location::Params, Check::IsInt, "Invalid ID")];
//!
//! let router = Router::new().route("/{id}", with_rules(get(get_product), ID_RULES));
//! ```

mod middleware;
mod rules;

pub use middleware::{handle_input_errors, validate_request, with_rules, FieldErrors};
pub use rules::{
    evaluate, is_int, is_numeric, numeric_value, parse_numeric, Check, FieldError, InputErrors, Location, Rule,
    RuleSet,
};
