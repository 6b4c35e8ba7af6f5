mod harness;

use groundwork_config::Config;
use groundwork_core::{ErrorKind, ErrorRecord, HttpError, is_bad_request_error, is_validation_error};
use harness::config::ConfigBuilder;
use indoc::indoc;
use serde_json::json;

#[test]
fn valid_input_passes() {
    let config = ConfigBuilder::new().with_username().with_email().with_age().build();

    let input = json!({ "username": "spock", "email": "spock@vulcan.org", "age": "161" });
    config.fields.validate(&input).unwrap();
}

#[test]
fn optional_fields_may_be_absent_or_null() {
    let config = ConfigBuilder::new().with_username().with_email().with_age().build();

    config.fields.validate(&json!({ "username": "spock" })).unwrap();
    config
        .fields
        .validate(&json!({ "username": "spock", "email": null, "age": null }))
        .unwrap();
}

#[test]
fn missing_required_field() {
    let config = ConfigBuilder::new().with_username().build();

    let err = config.fields.validate(&json!({})).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.message(), "username may not be null or undefined");
    assert!(is_validation_error(&err));
    assert!(!is_bad_request_error(&err));
}

#[test]
fn first_failing_rule_in_declaration_order() {
    let config = ConfigBuilder::new().with_email().with_username().build();

    let err = config
        .fields
        .validate(&json!({ "username": "x", "email": "not-an-email" }))
        .unwrap_err();
    assert_eq!(err.message(), "Email is not a valid email address");
}

#[test]
fn rule_messages() {
    let config = ConfigBuilder::new().with_username().with_age().build();

    let cases = [
        (json!({ "username": "ab" }), "username must be at least 3 characters"),
        (json!({ "username": "a".repeat(17) }), "username must be at most 16 characters"),
        (json!({ "username": "no spaces" }), r"username must match /^\w+$/"),
        (json!({ "username": 42 }), "username must be a string"),
        (json!({ "username": "spock", "age": "   " }), "Age may not be blank"),
        (json!({ "username": "spock", "age": "old" }), "Age is not a number"),
    ];

    for (input, message) in cases {
        let err = config.fields.validate(&input).unwrap_err();
        assert_eq!(err.message(), message, "input: {input}");
    }
}

#[test]
fn rules_loaded_from_toml() {
    let config: Config = indoc! {r#"
        [fields.code]
        name = "Code"
        required = true
        regex = "^[A-Z]{3}-\\d{3}$"

        [fields.amount]
        is_number = true
    "#}
    .parse()
    .unwrap();

    config.fields.validate(&json!({ "code": "ABC-123", "amount": "0x1F" })).unwrap();

    let err = config.fields.validate(&json!({ "code": "abc" })).unwrap_err();
    assert_eq!(err.message(), r"Code must match /^[A-Z]{3}-\d{3}$/");
}

#[test]
fn failure_body_and_record() {
    let config = ConfigBuilder::new().with_username().build();
    let err = config.fields.validate(&json!({ "username": "ab" })).unwrap_err();

    insta::assert_json_snapshot!(err.to_body(), @r#"
    {
      "error": {
        "name": "ValidationError",
        "message": "username must be at least 3 characters",
        "code": 400
      }
    }
    "#);

    // Round trip through an untyped boundary keeps the error recognisable
    let wire = serde_json::to_value(ErrorRecord::from(&err)).unwrap();
    assert!(is_validation_error(&wire));

    let record: ErrorRecord = serde_json::from_value(wire).unwrap();
    assert!(is_validation_error(&record));
}
