use formguard_core::{
    ErrorReport, FieldSpec, Fields, NumericRule, RuleError, TypeCheck, ValidationOptions, Validator,
};
use serde_json::{json, Value};

fn fields(value: Value) -> Fields {
    match value {
        Value::Object(map) => map,
        _ => panic!("Expected an object payload"),
    }
}

fn options(json: &str) -> ValidationOptions {
    ValidationOptions::from_json_str(json).unwrap()
}

fn run(options: &ValidationOptions, payload: &Fields) -> ErrorReport {
    let mut validator = Validator::new(options, payload);
    validator.validate().unwrap();
    validator.into_errors()
}

#[test]
fn test_year_zero_fails_greater_than() {
    let options = options(r#"{"year": {"types": ["numeric"], "rules": [["greater_than", [0]]]}}"#);
    let errors = run(&options, &fields(json!({"year": "0"})));

    assert_eq!(errors.get("year").unwrap(), ["value has to be greater than 0"]);
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_numeric_string_is_not_number() {
    let options = options(r#"{"salary": {"types": ["number"], "rules": []}}"#);
    let errors = run(&options, &fields(json!({"salary": "1000"})));

    assert_eq!(errors.get("salary").unwrap(), ["value is not number"]);
}

#[test]
fn test_zero_is_not_positive_integer() {
    let options = options(r#"{"days": {"types": ["positive_integer"], "rules": []}}"#);
    let errors = run(&options, &fields(json!({"days": "0"})));

    assert_eq!(errors.get("days").unwrap(), ["value is not positive integer"]);
}

#[test]
fn test_now_is_current_year() {
    let options = options(r#"{"x": {"types": ["current_year_or_number"], "rules": []}}"#);
    let errors = run(&options, &fields(json!({"x": "Now"})));

    assert!(errors.is_empty());
    assert!(!errors.contains_field("x"));
}

#[test]
fn test_rules_never_run_on_non_numeric_values() {
    let options = options(r#"{"year": {"types": ["numeric"], "rules": [["greater_than", [0]]]}}"#);
    let errors = run(&options, &fields(json!({"year": "abc"})));

    assert_eq!(errors.get("year").unwrap(), ["value is not numeric"]);
}

#[test]
fn test_rules_gated_even_without_numeric_type() {
    // No type requires numeric: the rule is still skipped for a number value
    let mut spec = FieldSpec::new();
    spec.is_number().less_than(10.0);
    let options = ValidationOptions::new().with_field("count", spec);

    let errors = run(&options, &fields(json!({"count": 50})));
    assert!(errors.is_empty());
}

#[test]
fn test_types_then_rules_in_configured_order() {
    let options = options(
        r#"{"age": {
            "types": ["number", "boolean", "string"],
            "rules": [["equal_to", [3]], ["between", [1, 10]]]
        }}"#,
    );
    let errors = run(&options, &fields(json!({"age": "42"})));

    assert_eq!(
        errors.get("age").unwrap(),
        [
            "value is not number",
            "value is not boolean",
            "value has to be equal to 3",
            "value has to be between 1 and 10",
        ]
    );
}

#[test]
fn test_two_types_and_one_rule_give_three_errors() {
    let mut spec = FieldSpec::new();
    spec.is_number()
        .is_positive_integer()
        .is_numeric()
        .greater_than(0.0);
    let options = ValidationOptions::new().with_field("days", spec);

    let errors = run(&options, &fields(json!({"days": "-2"})));
    assert_eq!(
        errors.get("days").unwrap(),
        [
            "value is not number",
            "value is not positive integer",
            "value has to be greater than 0",
        ]
    );
}

#[test]
fn test_no_rule_never_fails() {
    let mut spec = FieldSpec::new();
    spec.no_rule();
    let options = ValidationOptions::new().with_field("n", spec);

    for value in ["0", "-12", "99999", "0x10", "  7  "] {
        let errors = run(&options, &fields(json!({ "n": value })));
        assert!(errors.is_empty(), "{value} should pass no_rule");
    }
}

#[test]
fn test_every_rule_sees_coerced_value() {
    let mut spec = FieldSpec::new();
    spec.is_numeric()
        .greater_than(5.0)
        .less_than(3.0)
        .equal_to(4.0);
    let options = ValidationOptions::new().with_field("v", spec);

    let errors = run(&options, &fields(json!({"v": "4"})));
    assert_eq!(
        errors.get("v").unwrap(),
        [
            "value has to be greater than 5",
            "value has to be less than 3",
        ]
    );
}

#[test]
fn test_duplicate_entries_are_reported_twice() {
    let options = options(
        r#"{"v": {"types": ["boolean", "boolean"], "rules": [["less_than", [1]], ["less_than", [1]]]}}"#,
    );
    let errors = run(&options, &fields(json!({"v": "5"})));

    assert_eq!(
        errors.get("v").unwrap(),
        [
            "value is not boolean",
            "value is not boolean",
            "value has to be less than 1",
            "value has to be less than 1",
        ]
    );
}

#[test]
fn test_fields_missing_from_payload_are_not_reported() {
    let options = options(
        r#"{
            "year": {"types": ["numeric"], "rules": [["greater_than", [0]]]},
            "salary": {"types": ["numeric"], "rules": [["greater_than", [0]]]}
        }"#,
    );
    let errors = run(&options, &fields(json!({"year": "2020"})));

    assert!(errors.is_empty());
    assert!(!errors.contains_field("salary"));
}

#[test]
fn test_valid_fields_have_no_entry() {
    let options = options(
        r#"{
            "year": {"types": ["numeric"], "rules": [["between", [1900, 2100]]]},
            "name": {"types": ["string"], "rules": []},
            "tags": {"types": ["array"], "rules": []},
            "meta": {"types": ["object"], "rules": []},
            "active": {"types": ["boolean"], "rules": []}
        }"#,
    );
    let payload = fields(json!({
        "year": "2000",
        "name": "Ada",
        "tags": ["a"],
        "meta": null,
        "active": false,
        "days": "x"
    }));
    let mut options = options;
    let mut days = FieldSpec::new();
    days.is_positive_integer();
    options.insert("days", days);

    let errors = run(&options, &payload);
    let reported: Vec<&String> = errors.fields().collect();
    assert_eq!(reported, ["days"]);
}

#[test]
fn test_report_follows_payload_order() {
    let mut spec = FieldSpec::new();
    spec.is_number();
    let options = ValidationOptions::new()
        .with_field("a", spec.clone())
        .with_field("b", spec.clone())
        .with_field("c", spec);

    let errors = run(&options, &fields(json!({"c": "1", "a": "1", "b": "1"})));
    let reported: Vec<&String> = errors.fields().collect();
    assert_eq!(reported, ["c", "a", "b"]);
}

#[test]
fn test_unconfigured_field_is_reported_by_name() {
    let options = options(r#"{"year": {"types": ["numeric"], "rules": []}}"#);
    let payload = fields(json!({"year": "2020", "bonus": "10"}));
    let mut validator = Validator::new(&options, &payload);

    let err = validator.validate().unwrap_err();
    assert_eq!(err, RuleError::UnconfiguredField("bonus".to_string()));
    assert_eq!(
        err.to_string(),
        "Field 'bonus' is not configured in ValidationOptions"
    );
    assert!(validator.errors().is_empty());
}

#[test]
fn test_payload_is_not_modified() {
    let options = options(r#"{"year": {"types": ["numeric"], "rules": [["greater_than", [0]]]}}"#);
    let payload = fields(json!({"year": " 0x10 "}));
    let before = payload.clone();

    let errors = run(&options, &payload);
    assert!(errors.is_empty());
    assert_eq!(payload, before);
    assert_eq!(payload["year"], json!(" 0x10 "));
}

#[test]
fn test_options_validate_shortcut() {
    let mut spec = FieldSpec::new();
    spec.is_type(TypeCheck::Numeric)
        .with_rule(NumericRule::Between(1.0, 12.0));
    let options = ValidationOptions::new().with_field("month", spec);

    let errors = options.validate(&fields(json!({"month": "13"}))).unwrap();
    assert_eq!(errors.get("month").unwrap(), ["value has to be between 1 and 12"]);

    let err = options
        .validate(&fields(json!({"week": "1"})))
        .unwrap_err();
    assert_eq!(err, RuleError::UnconfiguredField("week".to_string()));
}
