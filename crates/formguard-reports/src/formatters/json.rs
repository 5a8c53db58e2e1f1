use chrono::Local;
use formguard_core::ErrorReport;
use serde::{Deserialize, Serialize};
use serde_json::Error;

use crate::Reporter;

#[derive(Serialize, Deserialize)]
pub struct JsonFormatter {
    version: String,
    timestamp: String,
    forms: Vec<FormFormatter>,
}

#[derive(Serialize, Deserialize)]
struct FormFormatter {
    name: String,
    pass: bool,
    fields: Vec<FieldFormatter>,
}

#[derive(Serialize, Deserialize)]
struct FieldFormatter {
    name: String,
    errors: Vec<String>,
}

impl JsonFormatter {
    pub fn new(version: String) -> Self {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        Self {
            version,
            timestamp,
            forms: Vec::new(),
        }
    }

    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Reporter for JsonFormatter {
    fn on_start(&self) {}

    fn on_form_result(&mut self, form: &str, report: &ErrorReport) {
        let fields: Vec<FieldFormatter> = report
            .iter()
            .map(|(name, errors)| FieldFormatter {
                name: name.clone(),
                errors: errors.clone(),
            })
            .collect();
        self.forms.push(FormFormatter {
            name: form.to_string(),
            pass: report.is_empty(),
            fields,
        });
    }

    fn on_summary(&self, _passed: usize, _failed: usize) {}
}
