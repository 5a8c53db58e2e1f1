use std::{fmt, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::trace;

use crate::errors::RuleError;

// Leading integer content, as accepted by a lenient integer parse
// ("12abc" -> 12, "  -0x1f" -> -31).
static LEADING_INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[+-]?(?:0[xX][0-9a-fA-F]|0(?:[^xX]|$)|[1-9])").unwrap());

/// Named predicate classifying the shape of a raw field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCheck {
    Number,
    Numeric,
    String,
    Boolean,
    Array,
    Object,
    PositiveInteger,
    CurrentYearOrNumber,
}

impl TypeCheck {
    pub const ALL: [TypeCheck; 8] = [
        TypeCheck::Number,
        TypeCheck::Numeric,
        TypeCheck::String,
        TypeCheck::Boolean,
        TypeCheck::Array,
        TypeCheck::Object,
        TypeCheck::PositiveInteger,
        TypeCheck::CurrentYearOrNumber,
    ];

    /// Returns the configuration name of the type.
    pub fn name(&self) -> &'static str {
        match self {
            TypeCheck::Number => "number",
            TypeCheck::Numeric => "numeric",
            TypeCheck::String => "string",
            TypeCheck::Boolean => "boolean",
            TypeCheck::Array => "array",
            TypeCheck::Object => "object",
            TypeCheck::PositiveInteger => "positive_integer",
            TypeCheck::CurrentYearOrNumber => "current_year_or_number",
        }
    }

    /// Evaluates the predicate against a raw value.
    pub fn check(&self, value: &Value) -> bool {
        match self {
            TypeCheck::Number => value.is_number(),
            TypeCheck::Numeric => value.as_str().is_some_and(is_numeric_str),
            TypeCheck::String => value.is_string(),
            TypeCheck::Boolean => value.is_boolean(),
            TypeCheck::Array => value.is_array(),
            // Null counts as an object
            TypeCheck::Object => value.is_object() || value.is_null(),
            TypeCheck::PositiveInteger => match value {
                Value::Number(_) => true,
                Value::String(s) => s != "0" && is_digits(s),
                _ => false,
            },
            TypeCheck::CurrentYearOrNumber => match value {
                Value::String(s) => is_digits(s) || s.trim().eq_ignore_ascii_case("now"),
                _ => false,
            },
        }
    }

    pub fn error_message(&self) -> String {
        format!("value is not {}", self.name().replace('_', " "))
    }
}

impl fmt::Display for TypeCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TypeCheck {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeCheck::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| RuleError::UnknownType(s.to_string()))
    }
}

/// True when the string starts with parsable integer content.
pub fn is_numeric_str(s: &str) -> bool {
    LEADING_INTEGER.is_match(s)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Checks `value` against every configured type and returns one message per
/// failed type, in configured order.
pub fn type_errors(types: &[TypeCheck], value: &Value) -> Vec<String> {
    types
        .iter()
        .filter_map(|t| {
            let valid = t.check(value);
            trace!(check = t.name(), %value, valid, "type check");
            (!valid).then(|| t.error_message())
        })
        .collect()
}
