//! Configuration compilation module.
//!
//! Converts the name-based field configuration written by configuration
//! authors (`{"types": ["numeric"], "rules": [["greater_than", [0]]]}`) into a
//! typed `FieldSpec`, resolving every name against the closed type and rule
//! vocabularies.

use serde::{Deserialize, Serialize};


use crate::{
    rules::{NumericRule, TypeCheck},
    FieldSpec, RuleError,
};

/// A rule as written in configuration: name and numeric arguments.
pub type RawRule = (String, Vec<f64>);

/// Wire shape of a field configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawFieldSpec {
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub rules: Vec<RawRule>,
}

/// Compile a raw field configuration into a `FieldSpec`.
///
/// # Errors
///
/// - `RuleError::UnknownType` if a type name is not part of the vocabulary
/// - `RuleError::UnknownRule` if a rule name is not part of the vocabulary
/// - `RuleError::InvalidArguments` if a rule has the wrong number of arguments
pub fn compile_field(raw: &RawFieldSpec) -> Result<FieldSpec, RuleError> {
    let types = raw
        .types
        .iter()
        .map(|name| name.parse::<TypeCheck>())
        .collect::<Result<Vec<_>, _>>()?;
    let rules = raw
        .rules
        .iter()
        .map(|(name, args)| NumericRule::from_parts(name, args))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(FieldSpec::from_parts(types, rules))
}

impl TryFrom<RawFieldSpec> for FieldSpec {
    type Error = RuleError;

    fn try_from(raw: RawFieldSpec) -> Result<Self, Self::Error> {
        compile_field(&raw)
    }
}

impl From<FieldSpec> for RawFieldSpec {
    fn from(spec: FieldSpec) -> Self {
        Self {
            types: spec.types().iter().map(|t| t.name().to_string()).collect(),
            rules: spec
                .rules()
                .iter()
                .map(|r| (r.name().to_string(), r.args()))
                .collect(),
        }
    }
}
