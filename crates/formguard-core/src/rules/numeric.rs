use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, trace};

use crate::{errors::RuleError, rules::types::is_numeric_str};

static DECIMAL_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$").unwrap());

static RADIX_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0([xXoObB])([0-9a-zA-Z]+)$").unwrap());

/// Comparison applied to the numeric value of a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericRule {
    NoRule,
    GreaterThan(f64),
    LessThan(f64),
    Between(f64, f64),
    EqualTo(f64),
}

impl NumericRule {
    pub const NAMES: [&'static str; 5] =
        ["no_rule", "greater_than", "less_than", "between", "equal_to"];

    /// Builds a rule from its configuration name and argument list.
    ///
    /// Fails when the name is unknown or the number of arguments does not
    /// match the rule.
    pub fn from_parts(name: &str, args: &[f64]) -> Result<Self, RuleError> {
        let expected = match name {
            "no_rule" => 0,
            "greater_than" | "less_than" | "equal_to" => 1,
            "between" => 2,
            _ => return Err(RuleError::UnknownRule(name.to_string())),
        };
        if args.len() != expected {
            return Err(RuleError::InvalidArguments {
                rule: name.to_string(),
                expected,
                found: args.len(),
            });
        }
        let rule = match name {
            "no_rule" => NumericRule::NoRule,
            "greater_than" => NumericRule::GreaterThan(args[0]),
            "less_than" => NumericRule::LessThan(args[0]),
            "equal_to" => NumericRule::EqualTo(args[0]),
            _ => NumericRule::Between(args[0], args[1]),
        };
        Ok(rule)
    }

    pub fn name(&self) -> &'static str {
        match self {
            NumericRule::NoRule => "no_rule",
            NumericRule::GreaterThan(_) => "greater_than",
            NumericRule::LessThan(_) => "less_than",
            NumericRule::Between(..) => "between",
            NumericRule::EqualTo(_) => "equal_to",
        }
    }

    pub fn args(&self) -> Vec<f64> {
        match *self {
            NumericRule::NoRule => Vec::new(),
            NumericRule::GreaterThan(a) | NumericRule::LessThan(a) | NumericRule::EqualTo(a) => {
                vec![a]
            }
            NumericRule::Between(min, max) => vec![min, max],
        }
    }

    pub fn check(&self, value: f64) -> bool {
        match *self {
            NumericRule::NoRule => true,
            NumericRule::GreaterThan(a) => value > a,
            NumericRule::LessThan(a) => value < a,
            NumericRule::Between(min, max) => min <= value && value <= max,
            NumericRule::EqualTo(a) => value == a,
        }
    }

    /// e.g. `value has to be between 1 and 10`
    pub fn error_message(&self) -> String {
        let args: Vec<String> = self.args().into_iter().map(format_arg).collect();
        format!(
            "value has to be {} {}",
            self.name().replace('_', " "),
            args.join(" and ")
        )
    }
}

impl fmt::Display for NumericRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn format_arg(arg: f64) -> String {
    if arg == 0.0 {
        // covers -0
        "0".to_string()
    } else {
        arg.to_string()
    }
}

/// Converts a string to a number the way a unary plus does.
///
/// Surrounding whitespace is ignored and an empty string is zero. Accepts
/// decimal literals, unsigned `0x`/`0o`/`0b` literals and `Infinity`.
/// Returns `None` for anything else, e.g. `"12abc"`.
pub fn coerce_number(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return Some(0.0);
    }
    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }
    if let Some(caps) = RADIX_LITERAL.captures(s) {
        let radix = match &caps[1] {
            "x" | "X" => 16,
            "o" | "O" => 8,
            _ => 2,
        };
        return caps[2].chars().try_fold(0f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
        });
    }
    if DECIMAL_LITERAL.is_match(s) {
        s.parse::<f64>().ok()
    } else {
        None
    }
}

/// Checks `value` against every configured rule and returns one message per
/// failed rule, in configured order.
///
/// Rules only apply to numeric strings: any other value yields no message. The
/// value is coerced once and the same number feeds every rule.
pub fn rule_errors(rules: &[NumericRule], value: &Value) -> Vec<String> {
    if rules.is_empty() {
        return Vec::new();
    }
    let Some(raw) = value.as_str().filter(|s| is_numeric_str(s)) else {
        return Vec::new();
    };
    let Some(number) = coerce_number(raw) else {
        debug!(value = raw, "value is not a well-formed number, rules skipped");
        return Vec::new();
    };
    rules
        .iter()
        .filter_map(|rule| {
            let valid = rule.check(number);
            trace!(rule = rule.name(), number, valid, "rule check");
            (!valid).then(|| rule.error_message())
        })
        .collect()
}
