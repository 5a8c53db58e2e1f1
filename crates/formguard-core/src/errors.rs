use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuleError {
    /// A payload field has no entry in the validation options
    #[error("Field '{0}' is not configured in ValidationOptions")]
    UnconfiguredField(String),

    /// Type name outside of the supported vocabulary
    #[error("Unknown type '{0}'")]
    UnknownType(String),

    /// Rule name outside of the supported vocabulary
    #[error("Unknown rule '{0}'")]
    UnknownRule(String),

    /// The rule was configured with the wrong number of arguments
    #[error("Rule '{rule}' expects {expected} argument(s), found {found}")]
    InvalidArguments {
        rule: String,
        expected: usize,
        found: usize,
    },

    #[error("Validator already ran, call reset() before validating again")]
    AlreadyValidated,

    /// The configuration document could not be decoded
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<serde_json::Error> for RuleError {
    fn from(e: serde_json::Error) -> Self {
        RuleError::ConfigError(e.to_string())
    }
}
