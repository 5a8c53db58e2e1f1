//! Validates a few submitted salary forms against caller-side presets.
//!
//! Run with `RUST_LOG=formguard_core=trace` to follow every check.

use std::collections::HashMap;

use formguard_core::{FieldSpec, Fields, RuleError, ValidationOptions, Validator};
use formguard_reports::{JsonFormatter, Reporter, StdOutFormatter};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum FormOption {
    SalaryForm,
    LeaveForm,
}

fn presets() -> Result<HashMap<FormOption, ValidationOptions>, RuleError> {
    let salary_form = ValidationOptions::from_json_str(
        r#"{
            "year": {"types": ["numeric"], "rules": [["greater_than", [0]]]},
            "salary": {"types": ["numeric"], "rules": [["greater_than", [0]]]},
            "days": {"types": ["numeric"], "rules": [["greater_than", [0]]]}
        }"#,
    )?;

    let mut days = FieldSpec::new();
    days.is_positive_integer().between(1.0, 30.0);
    let mut since = FieldSpec::new();
    since.is_current_year_or_number();
    let leave_form = ValidationOptions::new()
        .with_field("days", days)
        .with_field("since", since);

    Ok(HashMap::from([
        (FormOption::SalaryForm, salary_form),
        (FormOption::LeaveForm, leave_form),
    ]))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let presets = presets()?;
    let submissions = [
        (
            FormOption::SalaryForm,
            r#"{"year": "2024", "salary": "3200", "days": "21"}"#,
        ),
        (
            FormOption::SalaryForm,
            r#"{"year": "0", "salary": "lots", "days": 12}"#,
        ),
        (FormOption::LeaveForm, r#"{"days": "0", "since": "Now"}"#),
        (FormOption::LeaveForm, r#"{"days": "3", "reason": "trip"}"#),
    ];

    let version = env!("CARGO_PKG_VERSION");
    let mut stdout = StdOutFormatter::new(version.to_string());
    let mut json = JsonFormatter::new(version.to_string());
    stdout.on_start();

    let (mut passed, mut failed) = (0, 0);
    for (i, (form, payload)) in submissions.iter().enumerate() {
        let fields: Fields = serde_json::from_str(payload)?;
        let name = format!("{:?} #{}", form, i + 1);

        let mut validator = Validator::new(&presets[form], &fields);
        match validator.validate() {
            Ok(()) => {
                if validator.is_valid() {
                    passed += 1;
                } else {
                    failed += 1;
                }
                stdout.on_form_result(&name, validator.errors());
                json.on_form_result(&name, validator.errors());
            }
            Err(e) => {
                failed += 1;
                println!("\n{} - rejected: {}", name, e);
            }
        }
    }
    stdout.on_summary(passed, failed);

    println!("\n{}", json.to_json()?);
    Ok(())
}
