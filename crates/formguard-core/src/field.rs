use serde::{Deserialize, Serialize};

use crate::{
    compiler::RawFieldSpec,
    rules::{NumericRule, TypeCheck},
};

/// Expected types and value rules for one field.
///
/// Types and rules are checked independently: order only decides the order
/// of the reported messages, and duplicates are reported twice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFieldSpec", into = "RawFieldSpec")]
pub struct FieldSpec {
    types: Vec<TypeCheck>,
    rules: Vec<NumericRule>,
}

impl FieldSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(types: Vec<TypeCheck>, rules: Vec<NumericRule>) -> Self {
        Self { types, rules }
    }

    pub fn types(&self) -> &[TypeCheck] {
        self.types.as_slice()
    }

    pub fn rules(&self) -> &[NumericRule] {
        self.rules.as_slice()
    }

    /// Add an expected type
    pub fn is_type(&mut self, type_check: TypeCheck) -> &mut Self {
        self.types.push(type_check);
        self
    }

    pub fn is_number(&mut self) -> &mut Self {
        self.is_type(TypeCheck::Number)
    }

    /// String starting with an integer
    pub fn is_numeric(&mut self) -> &mut Self {
        self.is_type(TypeCheck::Numeric)
    }

    pub fn is_string(&mut self) -> &mut Self {
        self.is_type(TypeCheck::String)
    }

    pub fn is_boolean(&mut self) -> &mut Self {
        self.is_type(TypeCheck::Boolean)
    }

    pub fn is_array(&mut self) -> &mut Self {
        self.is_type(TypeCheck::Array)
    }

    /// Key-value container or null
    pub fn is_object(&mut self) -> &mut Self {
        self.is_type(TypeCheck::Object)
    }

    pub fn is_positive_integer(&mut self) -> &mut Self {
        self.is_type(TypeCheck::PositiveInteger)
    }

    /// Digit-only string or "now"
    pub fn is_current_year_or_number(&mut self) -> &mut Self {
        self.is_type(TypeCheck::CurrentYearOrNumber)
    }

    /// Add a value rule
    pub fn with_rule(&mut self, rule: NumericRule) -> &mut Self {
        self.rules.push(rule);
        self
    }

    pub fn no_rule(&mut self) -> &mut Self {
        self.with_rule(NumericRule::NoRule)
    }

    pub fn greater_than(&mut self, min: f64) -> &mut Self {
        self.with_rule(NumericRule::GreaterThan(min))
    }

    pub fn less_than(&mut self, max: f64) -> &mut Self {
        self.with_rule(NumericRule::LessThan(max))
    }

    /// Inclusive on both ends
    pub fn between(&mut self, min: f64, max: f64) -> &mut Self {
        self.with_rule(NumericRule::Between(min, max))
    }

    pub fn equal_to(&mut self, value: f64) -> &mut Self {
        self.with_rule(NumericRule::EqualTo(value))
    }
}
