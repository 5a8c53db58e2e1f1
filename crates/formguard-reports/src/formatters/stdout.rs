use formguard_core::ErrorReport;
use prettytable::{Cell, Row, Table};

use crate::Reporter;

pub struct StdOutFormatter {
    intro: String,
    intro_len: usize,
}

impl StdOutFormatter {
    pub fn new(version: String) -> Self {
        let s = format!("FormGuard v{} - Validation Report", version);
        let n = s.len();
        Self {
            intro: s,
            intro_len: n,
        }
    }

    /// Renders a form result: a status line, then one row per message.
    pub fn render_form(&self, form: &str, report: &ErrorReport) -> String {
        if report.is_empty() {
            return format!("{} - PASSED\n", form);
        }

        let mut table = Table::new();
        table.add_row(Row::new(vec![Cell::new("Field"), Cell::new("Error")]));
        for (field, errors) in report.iter() {
            for error in errors {
                table.add_row(Row::new(vec![Cell::new(field), Cell::new(error)]));
            }
        }
        format!("{} - FAILED\n{}", form, table)
    }

    pub fn print_form_result(&self, form: &str, report: &ErrorReport) {
        println!("\n{}", self.render_form(form, report));
    }

    pub fn print_summary(&self, passed: usize, failed: usize) {
        println!("{}", "=".repeat(self.intro_len));
        println!("Result: {} failed, {} passed", failed, passed);
    }
}

impl Reporter for StdOutFormatter {
    fn on_start(&self) {
        let i = "=".repeat(self.intro_len);

        println!("{}", self.intro);
        println!("{}", i);
    }

    fn on_form_result(&mut self, form: &str, report: &ErrorReport) {
        self.print_form_result(form, report);
    }

    fn on_summary(&self, passed: usize, failed: usize) {
        self.print_summary(passed, failed);
    }
}
