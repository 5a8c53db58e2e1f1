pub mod numeric;
pub mod types;

pub use numeric::{coerce_number, rule_errors, NumericRule};
pub use types::{type_errors, TypeCheck};
