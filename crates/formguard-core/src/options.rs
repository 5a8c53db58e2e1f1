use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{errors::RuleError, ErrorReport, FieldSpec, Fields, Validator};

/// Validation configuration: field name to `FieldSpec`.
///
/// Supplied entirely by the caller. Named form presets are just several
/// `ValidationOptions` kept by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationOptions {
    fields: IndexMap<String, FieldSpec>,
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON document such as
    /// `{"year": {"types": ["numeric"], "rules": [["greater_than", [0]]]}}`.
    pub fn from_json_str(json: &str) -> Result<Self, RuleError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_field(mut self, name: impl Into<String>, spec: FieldSpec) -> Self {
        self.insert(name, spec);
        self
    }

    /// Add a field configuration, replacing any previous one for that name.
    pub fn insert(&mut self, name: impl Into<String>, spec: FieldSpec) -> Option<FieldSpec> {
        self.fields.insert(name.into(), spec)
    }

    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldSpec)> {
        self.fields.iter()
    }

    /// Validate `fields` with a fresh `Validator` and return its report.
    pub fn validate(&self, fields: &Fields) -> Result<ErrorReport, RuleError> {
        let mut validator = Validator::new(self, fields);
        validator.validate()?;
        Ok(validator.into_errors())
    }
}
