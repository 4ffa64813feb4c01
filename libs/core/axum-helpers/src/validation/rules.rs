use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use utoipa::ToSchema;

/// Where a rule looks for its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// Path parameter
    Params,
    /// Top-level field of the JSON body
    Body,
}

/// The test a rule applies to its field.
#[derive(Debug, Clone, Copy)]
pub enum Check {
    /// Optional sign followed by digits without leading zeros.
    IsInt,
    /// Present and not blank.
    NotEmpty,
    /// A JSON number, or a string holding a finite decimal number.
    IsNumeric,
    /// Arbitrary predicate over the raw value; `None` when the field is absent.
    Custom(fn(Option<&Value>) -> bool),
}

/// One validation rule: `field` at `location` must pass `check`, otherwise
/// `message` is reported.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub field: &'static str,
    pub location: Location,
    pub check: Check,
    pub message: &'static str,
}

impl Rule {
    pub const fn new(
        field: &'static str,
        location: Location,
        check: Check,
        message: &'static str,
    ) -> Self {
        Self {
            field,
            location,
            check,
            message,
        }
    }
}

/// Ordered rules for one route.
pub type RuleSet = &'static [Rule];

/// A single failed rule.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FieldError {
    /// Always `"field"`
    #[serde(rename = "type")]
    pub kind: String,
    /// The offending value, omitted when the field was absent
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub value: Option<Value>,
    /// Message declared on the rule
    pub msg: String,
    /// Name of the field
    pub path: String,
    pub location: Location,
}

/// Body of a `400` produced by rule validation.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct InputErrors {
    pub errors: Vec<FieldError>,
}

/// Textual form of a value as the string checks see it.
fn as_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Integer grammar: `[-+]?(0|[1-9][0-9]*)`.
pub fn is_int(raw: &str) -> bool {
    let digits = raw.strip_prefix(['-', '+']).unwrap_or(raw);
    match digits.as_bytes() {
        [] => false,
        [b'0'] => true,
        [b'0', ..] => false,
        bytes => bytes.iter().all(u8::is_ascii_digit),
    }
}

/// Decimal grammar: `[-+]?([0-9]*\.)?[0-9]+`. No exponent, no surrounding
/// whitespace.
pub fn parse_numeric(raw: &str) -> Option<f64> {
    let unsigned = raw.strip_prefix(['-', '+']).unwrap_or(raw);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => ("", unsigned),
    };

    let well_formed = !fraction.is_empty()
        && whole.bytes().all(|b| b.is_ascii_digit())
        && fraction.bytes().all(|b| b.is_ascii_digit());
    if !well_formed {
        return None;
    }

    raw.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Numeric value of a field: JSON numbers as-is, strings when they match
/// [`parse_numeric`].
pub fn numeric_value(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_numeric(s),
        _ => None,
    }
}

pub fn is_numeric(value: Option<&Value>) -> bool {
    numeric_value(value).is_some()
}

impl Check {
    fn passes(&self, value: Option<&Value>) -> bool {
        match self {
            Check::IsInt => is_int(&as_text(value)),
            Check::NotEmpty => !as_text(value).trim().is_empty(),
            Check::IsNumeric => is_numeric(value),
            Check::Custom(predicate) => predicate(value),
        }
    }
}

/// Run every rule in declaration order and collect the failures.
///
/// A field failing one rule is still checked against the rules after it.
pub fn evaluate(
    rules: &[Rule],
    params: &HashMap<String, String>,
    body: Option<&Value>,
) -> Vec<FieldError> {
    rules
        .iter()
        .filter_map(|rule| {
            let value = match rule.location {
                Location::Params => params.get(rule.field).map(|v| Value::String(v.clone())),
                Location::Body => body.and_then(|b| b.get(rule.field)).cloned(),
            };

            if rule.check.passes(value.as_ref()) {
                None
            } else {
                Some(FieldError {
                    kind: "field".to_string(),
                    value,
                    msg: rule.message.to_string(),
                    path: rule.field.to_string(),
                    location: rule.location,
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn positive(value: Option<&Value>) -> bool {
        numeric_value(value).is_some_and(|n| n > 0.0)
    }

    const RULES: RuleSet = &[
        Rule::new("id", Location::Params, Check::IsInt, "Invalid ID"),
        Rule::new("name", Location::Body, Check::NotEmpty, "name required"),
        Rule::new("price", Location::Body, Check::IsNumeric, "price numeric"),
        Rule::new("price", Location::Body, Check::Custom(positive), "price positive"),
    ];

    fn params(id: &str) -> HashMap<String, String> {
        HashMap::from([("id".to_string(), id.to_string())])
    }

    #[test]
    fn test_is_int_grammar() {
        for ok in ["0", "7", "-12", "+3", "1234567890"] {
            assert!(is_int(ok), "{ok} should be an int");
        }
        for bad in ["", "-", "01", "-0012", "1.5", "abc", " 1", "1e3"] {
            assert!(!is_int(bad), "{bad} should not be an int");
        }
    }

    #[test]
    fn test_numeric_value() {
        assert_eq!(numeric_value(Some(&json!(300))), Some(300.0));
        assert_eq!(numeric_value(Some(&json!("12.5"))), Some(12.5));
        assert_eq!(numeric_value(Some(&json!(""))), None);
        assert_eq!(numeric_value(Some(&json!("NaN"))), None);
        assert_eq!(numeric_value(Some(&json!("inf"))), None);
        assert_eq!(numeric_value(Some(&json!(true))), None);
        assert_eq!(numeric_value(None), None);
    }

    #[test]
    fn test_parse_numeric_grammar() {
        for (raw, expected) in [("12", 12.0), ("-3.25", -3.25), ("+7", 7.0), (".5", 0.5), ("007", 7.0)] {
            assert_eq!(parse_numeric(raw), Some(expected), "{raw} should parse");
        }
        for bad in ["1e3", " 12 ", "12 ", "12.", "-", ".", "1.2.3", "0x10", "Infinity", ""] {
            assert_eq!(parse_numeric(bad), None, "{bad} should not parse");
        }
    }

    #[test]
    fn test_valid_input_has_no_errors() {
        let body = json!({"name": "Monitor", "price": 300});
        assert!(evaluate(RULES, &params("1"), Some(&body)).is_empty());
    }

    #[test]
    fn test_all_failures_collected_in_order() {
        let body = json!({"name": "  ", "price": "abc"});
        let errors = evaluate(RULES, &params("x"), Some(&body));

        let messages: Vec<_> = errors.iter().map(|e| e.msg.as_str()).collect();
        assert_eq!(
            messages,
            ["Invalid ID", "name required", "price numeric", "price positive"]
        );
        assert_eq!(errors[0].location, Location::Params);
        assert_eq!(errors[0].value, Some(json!("x")));
        assert_eq!(errors[2].path, "price");
    }

    #[test]
    fn test_missing_body_field_has_no_value() {
        let errors = evaluate(RULES, &params("1"), Some(&json!({"price": 5})));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "name");
        assert_eq!(errors[0].value, None);

        let serialized = serde_json::to_value(&errors[0]).unwrap();
        assert_eq!(
            serialized,
            json!({"type": "field", "msg": "name required", "path": "name", "location": "body"})
        );
    }

    #[test]
    fn test_not_empty_accepts_false() {
        const FLAG_RULES: RuleSet = &[Rule::new("flag", Location::Body, Check::NotEmpty, "flag")];
        assert!(evaluate(FLAG_RULES, &HashMap::new(), Some(&json!({"flag": false}))).is_empty());
        assert_eq!(evaluate(FLAG_RULES, &HashMap::new(), None).len(), 1);
    }
}
