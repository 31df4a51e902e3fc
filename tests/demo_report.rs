use calculator_fixture::{demo, Calculator, DemoReport};
use serde_test::{assert_tokens, Token};

#[test_log::test]
fn test_report_matches_direct_calls() {
    let report = demo::run();

    let mut calc = Calculator::new();
    assert_eq!(report.calculator_sum, calc.add(2.5, 1.5));
    assert_eq!(report.calculator_difference, calc.subtract(10.0, 4.5));
    assert_eq!(report.last_result, calc.last_result());
    assert_eq!(report.numbers.len(), report.numbers_len);
}

#[test_log::test]
fn test_custom_message() {
    let report = demo::run_with_message("héllo");
    assert_eq!(report.message_length, Some("héllo".len()));
    assert!(report.render().starts_with("héllo\n"));
}

#[test]
fn test_report_json_omits_missing_length() {
    let report = demo::run_with_message("");
    let json = serde_json::to_value(&report).unwrap();
    assert!(json.get("message_length").is_none());

    let parsed: DemoReport = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, report);
}

#[test]
fn test_calculator_serde_shape() {
    let mut calc = Calculator::new();
    calc.add(2.5, 1.5);

    assert_tokens(
        &calc,
        &[
            Token::Struct {
                name: "Calculator",
                len: 1,
            },
            Token::Str("last_result"),
            Token::F64(4.0),
            Token::StructEnd,
        ],
    );
}
