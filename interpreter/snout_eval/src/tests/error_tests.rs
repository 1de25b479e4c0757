//! Runtime error production and propagation.

use pretty_assertions::assert_eq;

use crate::tests::eval_err;
use crate::EvalErrorKind;

#[test]
fn produces_the_expected_error_messages() {
    let cases = [
        ("5 + true;", "type mismatch: INTEGER + BOOLEAN"),
        ("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN"),
        ("-true", "unknown operator: -BOOLEAN"),
        ("true + false;", "unknown operator: BOOLEAN + BOOLEAN"),
        ("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN"),
        (
            "if (10 > 1) { true + false; }",
            "unknown operator: BOOLEAN + BOOLEAN",
        ),
        (
            "if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
            "unknown operator: BOOLEAN + BOOLEAN",
        ),
        ("foobar", "identifier not found: foobar"),
        ("\"Hello\" - \"World\"", "unknown operator: STRING - STRING"),
        ("\"a\" == \"b\"", "unknown operator: STRING == STRING"),
        ("\"a\" < \"b\"", "unknown operator: STRING < STRING"),
    ];
    for (src, expected) in cases {
        assert_eq!(eval_err(src).to_string(), expected, "for {src:?}");
    }
}

#[test]
fn division_by_zero_is_a_language_error() {
    assert_eq!(eval_err("5 / 0").to_string(), "division by zero");
    assert_eq!(eval_err("let x = 0; 10 / x").to_string(), "division by zero");
}

#[test]
fn arithmetic_overflow_is_a_language_error() {
    let cases = [
        "9223372036854775807 + 1",
        "-9223372036854775807 - 2",
        "9223372036854775807 * 2",
        "(-9223372036854775807 - 1) / -1",
        "-(-9223372036854775807 - 1)",
    ];
    for src in cases {
        assert_eq!(
            eval_err(src).kind,
            EvalErrorKind::IntegerOverflow,
            "for {src:?}"
        );
    }
}

#[test]
fn errors_abort_the_surrounding_construct() {
    // An error in flight is never replaced by null or a partial value.
    let cases = [
        ("[1, 2 + true, 3]", "type mismatch: INTEGER + BOOLEAN"),
        ("{\"a\": 1 + true}", "type mismatch: INTEGER + BOOLEAN"),
        ("{1 + true: 1}", "type mismatch: INTEGER + BOOLEAN"),
        ("len(1 + true)", "type mismatch: INTEGER + BOOLEAN"),
        (
            "let f = fn(x) { x }; f(missing)",
            "identifier not found: missing",
        ),
        ("(5 + true)[0]", "type mismatch: INTEGER + BOOLEAN"),
        (
            "let f = fn() { missing }; f()",
            "identifier not found: missing",
        ),
    ];
    for (src, expected) in cases {
        assert_eq!(eval_err(src).to_string(), expected, "for {src:?}");
    }
}

#[test]
fn error_from_the_callee_preempts_argument_evaluation() {
    assert_eq!(
        eval_err("missing(1 / 0)").to_string(),
        "identifier not found: missing"
    );
}

#[test]
fn left_operand_error_preempts_the_right() {
    assert_eq!(
        eval_err("(true + false) + (1 / 0)").to_string(),
        "unknown operator: BOOLEAN + BOOLEAN"
    );
}
