pub mod validation;

pub use self::validation::Validator;
