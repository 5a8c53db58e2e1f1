pub mod compiler;
pub mod errors;
pub mod field;
pub mod options;
pub mod results;
pub mod rules;
pub mod types;
pub mod validator;

pub use errors::RuleError;
pub use field::FieldSpec;
pub use options::ValidationOptions;
pub use results::ErrorReport;
pub use rules::{NumericRule, TypeCheck};
pub use types::Fields;
pub use validator::Validator;
