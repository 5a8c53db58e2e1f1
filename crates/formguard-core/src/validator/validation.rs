//! Validation engine.
//!
//! The `Validator` checks every field of a payload against its configured
//! `FieldSpec` and collects human-readable messages in an `ErrorReport`.

use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    errors::RuleError,
    rules::{rule_errors, type_errors},
    ErrorReport, FieldSpec, Fields, ValidationOptions,
};

/// Validates one payload against one set of options.
///
/// # Design
///
/// - Borrows both the options and the payload: field values are never modified
/// - Single use: `validate()` runs once, a second call fails with
///   `RuleError::AlreadyValidated` unless `reset()` is called in between
/// - Independent instances share nothing and can run on different threads
#[derive(Debug)]
pub struct Validator<'a> {
    options: &'a ValidationOptions,
    fields: &'a Fields,
    errors: ErrorReport,
    validated: bool,
}

impl<'a> Validator<'a> {
    pub fn new(options: &'a ValidationOptions, fields: &'a Fields) -> Self {
        Self {
            options,
            fields,
            errors: ErrorReport::new(),
            validated: false,
        }
    }

    /// Validate every field present in the payload, in payload order.
    ///
    /// For each field the type checks run first, then the value rules. Failed
    /// checks are recorded in `errors()` and never stop the run.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - All fields were checked, see `errors()`
    /// * `Err(RuleError::UnconfiguredField)` - A payload field has no
    ///   configuration. Nothing is validated and `errors()` stays empty
    /// * `Err(RuleError::AlreadyValidated)` - `validate()` already ran
    pub fn validate(&mut self) -> Result<(), RuleError> {
        if self.validated {
            return Err(RuleError::AlreadyValidated);
        }
        let specs = self.resolve_specs()?;
        self.validated = true;

        for (field, value, spec) in specs {
            debug!(field = field.as_str(), "validating field");
            validate_field(&mut self.errors, field, value, spec);
        }
        Ok(())
    }

    /// Pair each payload field with its configuration.
    fn resolve_specs(&self) -> Result<Vec<(&'a String, &'a Value, &'a FieldSpec)>, RuleError> {
        let options: &'a ValidationOptions = self.options;
        let fields: &'a Fields = self.fields;
        fields
            .iter()
            .map(|(field, value)| match options.get(field) {
                Some(spec) => Ok((field, value, spec)),
                None => {
                    warn!(field = field.as_str(), "field has no validation options");
                    Err(RuleError::UnconfiguredField(field.clone()))
                }
            })
            .collect()
    }

    pub fn errors(&self) -> &ErrorReport {
        &self.errors
    }

    pub fn into_errors(self) -> ErrorReport {
        self.errors
    }

    /// True when no field recorded a message.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Clear the collected errors so `validate()` can run again.
    pub fn reset(&mut self) {
        self.errors.clear();
        self.validated = false;
    }
}

fn validate_field(errors: &mut ErrorReport, field: &str, value: &Value, spec: &FieldSpec) {
    errors.extend_errors(field, type_errors(spec.types(), value));
    errors.extend_errors(field, rule_errors(spec.rules(), value));
}
