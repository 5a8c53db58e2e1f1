pub mod formatters;

use formguard_core::ErrorReport;
pub use formatters::{json::JsonFormatter, stdout::StdOutFormatter};

/// Receives the outcome of validating one or more named forms.
pub trait Reporter {
    fn on_start(&self);
    fn on_form_result(&mut self, form: &str, report: &ErrorReport);
    fn on_summary(&self, passed: usize, failed: usize);
}
