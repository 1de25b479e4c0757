//! Parser tests.
//!
//! Structural checks match on AST nodes directly; precedence checks go
//! through `Display`, which prints every grouping explicitly.

use pretty_assertions::assert_eq;
use snout_ir::{Expr, InfixOp, PrefixOp, Stmt};

use crate::parse;

/// Parse a source that must be syntactically valid.
fn parse_ok(src: &str) -> Vec<Stmt> {
    let (program, errors) = parse(src);
    assert!(errors.is_empty(), "unexpected parse errors: {errors:?}");
    program.statements
}

/// Parse a single expression statement.
fn parse_expr(src: &str) -> Expr {
    let mut statements = parse_ok(src);
    assert_eq!(statements.len(), 1, "expected one statement in {src:?}");
    match statements.pop() {
        Some(Stmt::Expr(expr)) => expr,
        other => panic!("expected an expression statement, got {other:?}"),
    }
}

/// Collected error messages for an invalid source.
fn parse_errors(src: &str) -> Vec<String> {
    let (_, errors) = parse(src);
    errors.iter().map(ToString::to_string).collect()
}

#[test]
fn parses_let_statements() {
    let statements = parse_ok("let x = 5; let y = true; let foobar = y;");
    assert_eq!(statements.len(), 3);
    match &statements[0] {
        Stmt::Let { name, value } => {
            assert_eq!(name, "x");
            assert_eq!(value, &Expr::Int(5));
        }
        other => panic!("expected a let statement, got {other:?}"),
    }
    match &statements[2] {
        Stmt::Let { name, value } => {
            assert_eq!(name, "foobar");
            assert_eq!(value, &Expr::Ident("y".to_owned()));
        }
        other => panic!("expected a let statement, got {other:?}"),
    }
}

#[test]
fn parses_return_statements() {
    let statements = parse_ok("return 5; return; return x + y;");
    assert_eq!(statements.len(), 3);
    assert_eq!(statements[0], Stmt::Return(Some(Expr::Int(5))));
    assert_eq!(statements[1], Stmt::Return(None));
    assert!(matches!(&statements[2], Stmt::Return(Some(Expr::Infix { .. }))));
}

#[test]
fn bare_return_before_closing_brace() {
    let expr = parse_expr("fn(x) { return }");
    match expr {
        Expr::Function { body, .. } => {
            assert_eq!(body.statements, vec![Stmt::Return(None)]);
        }
        other => panic!("expected a function literal, got {other:?}"),
    }
}

#[test]
fn parses_literal_expressions() {
    assert_eq!(parse_expr("foobar;"), Expr::Ident("foobar".to_owned()));
    assert_eq!(parse_expr("5;"), Expr::Int(5));
    assert_eq!(parse_expr("true;"), Expr::Bool(true));
    assert_eq!(parse_expr("false;"), Expr::Bool(false));
    assert_eq!(
        parse_expr("\"hello world\";"),
        Expr::Str("hello world".to_owned())
    );
}

#[test]
fn parses_prefix_expressions() {
    assert_eq!(
        parse_expr("!5;"),
        Expr::Prefix {
            op: PrefixOp::Not,
            right: Box::new(Expr::Int(5)),
        }
    );
    assert_eq!(
        parse_expr("-15;"),
        Expr::Prefix {
            op: PrefixOp::Neg,
            right: Box::new(Expr::Int(15)),
        }
    );
}

#[test]
fn parses_infix_expressions() {
    let cases = [
        ("5 + 5;", InfixOp::Add),
        ("5 - 5;", InfixOp::Sub),
        ("5 * 5;", InfixOp::Mul),
        ("5 / 5;", InfixOp::Div),
        ("5 < 5;", InfixOp::Lt),
        ("5 > 5;", InfixOp::Gt),
        ("5 == 5;", InfixOp::Eq),
        ("5 != 5;", InfixOp::NotEq),
    ];
    for (src, expected_op) in cases {
        match parse_expr(src) {
            Expr::Infix { op, left, right } => {
                assert_eq!(op, expected_op, "operator for {src:?}");
                assert_eq!(*left, Expr::Int(5));
                assert_eq!(*right, Expr::Int(5));
            }
            other => panic!("expected an infix expression for {src:?}, got {other:?}"),
        }
    }
}

#[test]
fn operator_precedence() {
    let cases = [
        ("-a * b", "((-a) * b)"),
        ("!-a", "(!(-a))"),
        ("a + b + c", "((a + b) + c)"),
        ("a + b - c", "((a + b) - c)"),
        ("a * b * c", "((a * b) * c)"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
        ("3 + 4; -5 * 5", "(3 + 4) ((-5) * 5)"),
        ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
        ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
        ("true", "true"),
        ("3 > 5 == false", "((3 > 5) == false)"),
        ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
        ("(5 + 5) * 2", "((5 + 5) * 2)"),
        ("2 / (5 + 5)", "(2 / (5 + 5))"),
        ("-(5 + 5)", "(-(5 + 5))"),
        ("!(true == true)", "(!(true == true))"),
        ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
        (
            "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
            "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))",
        ),
        ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)"),
        (
            "add(a * b[2], b[1], 2 * [1, 2][1])",
            "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))",
        ),
    ];
    for (src, expected) in cases {
        let (program, errors) = parse(src);
        assert!(errors.is_empty(), "unexpected parse errors for {src:?}: {errors:?}");
        assert_eq!(program.to_string(), expected, "precedence for {src:?}");
    }
}

#[test]
fn parses_if_expression() {
    match parse_expr("if (x < y) { x }") {
        Expr::If {
            cond,
            consequence,
            alternative,
        } => {
            assert_eq!(cond.to_string(), "(x < y)");
            assert_eq!(consequence.statements.len(), 1);
            assert!(alternative.is_none());
        }
        other => panic!("expected an if expression, got {other:?}"),
    }
}

#[test]
fn parses_if_else_expression() {
    match parse_expr("if (x < y) { x } else { y }") {
        Expr::If { alternative, .. } => match alternative {
            Some(alt) => assert_eq!(
                alt.statements,
                vec![Stmt::Expr(Expr::Ident("y".to_owned()))]
            ),
            None => panic!("expected an else branch"),
        },
        other => panic!("expected an if expression, got {other:?}"),
    }
}

#[test]
fn parses_function_literals() {
    match parse_expr("fn(x, y) { x + y; }") {
        Expr::Function { params, body } => {
            assert_eq!(params, vec!["x".to_owned(), "y".to_owned()]);
            assert_eq!(body.statements.len(), 1);
        }
        other => panic!("expected a function literal, got {other:?}"),
    }
}

#[test]
fn parses_function_parameter_lists() {
    let cases = [
        ("fn() {};", vec![]),
        ("fn(x) {};", vec!["x"]),
        ("fn(x, y, z) {};", vec!["x", "y", "z"]),
    ];
    for (src, expected) in cases {
        match parse_expr(src) {
            Expr::Function { params, .. } => {
                assert_eq!(params, expected, "parameters for {src:?}");
            }
            other => panic!("expected a function literal for {src:?}, got {other:?}"),
        }
    }
}

#[test]
fn parses_call_expressions() {
    match parse_expr("add(1, 2 * 3, 4 + 5);") {
        Expr::Call { callee, args } => {
            assert_eq!(*callee, Expr::Ident("add".to_owned()));
            assert_eq!(args.len(), 3);
            assert_eq!(args[0], Expr::Int(1));
            assert_eq!(args[1].to_string(), "(2 * 3)");
            assert_eq!(args[2].to_string(), "(4 + 5)");
        }
        other => panic!("expected a call expression, got {other:?}"),
    }
}

#[test]
fn calls_a_function_literal_directly() {
    assert_eq!(
        parse_expr("fn(x) { x; }(5)").to_string(),
        "fn(x) { x }(5)"
    );
}

#[test]
fn parses_array_literals() {
    match parse_expr("[1, 2 * 2, 3 + 3]") {
        Expr::Array(elements) => {
            assert_eq!(elements.len(), 3);
            assert_eq!(elements[0], Expr::Int(1));
            assert_eq!(elements[1].to_string(), "(2 * 2)");
        }
        other => panic!("expected an array literal, got {other:?}"),
    }
    assert_eq!(parse_expr("[]"), Expr::Array(Vec::new()));
}

#[test]
fn parses_index_expressions() {
    match parse_expr("myArray[1 + 1]") {
        Expr::Index { left, index } => {
            assert_eq!(*left, Expr::Ident("myArray".to_owned()));
            assert_eq!(index.to_string(), "(1 + 1)");
        }
        other => panic!("expected an index expression, got {other:?}"),
    }
}

#[test]
fn parses_hash_literals_in_source_order() {
    match parse_expr("{\"one\": 1, \"two\": 2, \"three\": 3}") {
        Expr::Hash(pairs) => {
            let keys: Vec<String> = pairs.iter().map(|(k, _)| k.to_string()).collect();
            assert_eq!(keys, vec!["one", "two", "three"]);
            assert_eq!(pairs[1].1, Expr::Int(2));
        }
        other => panic!("expected a hash literal, got {other:?}"),
    }
}

#[test]
fn parses_empty_hash_and_expression_keys() {
    assert_eq!(parse_expr("{}"), Expr::Hash(Vec::new()));
    match parse_expr("{1 + 1: 2, true: 3}") {
        Expr::Hash(pairs) => {
            assert_eq!(pairs[0].0.to_string(), "(1 + 1)");
            assert_eq!(pairs[1].0, Expr::Bool(true));
        }
        other => panic!("expected a hash literal, got {other:?}"),
    }
}

#[test]
fn reports_expected_token_errors() {
    let errors = parse_errors("let x 5;");
    assert_eq!(
        errors,
        vec!["expected next token to be `=`, got integer `5`".to_owned()]
    );
}

#[test]
fn reports_missing_let_name() {
    let errors = parse_errors("let = 10;");
    assert_eq!(
        errors,
        vec![
            "expected an identifier, got `=`".to_owned(),
            "no expression can begin with `=`".to_owned(),
        ]
    );
}

#[test]
fn reports_no_prefix_rule() {
    let errors = parse_errors("let x = ;");
    assert_eq!(
        errors,
        vec!["no expression can begin with `;`".to_owned()]
    );
}

#[test]
fn collects_multiple_errors_in_one_pass() {
    let errors = parse_errors("let x 5; let = 10; let 838383;");
    // Recovery re-enters at the bad token, so the stray `=` also
    // reports a missing prefix rule.
    assert_eq!(
        errors,
        vec![
            "expected next token to be `=`, got integer `5`".to_owned(),
            "expected an identifier, got `=`".to_owned(),
            "no expression can begin with `=`".to_owned(),
            "expected an identifier, got integer `838383`".to_owned(),
        ]
    );
}

#[test]
fn recovers_and_parses_later_statements() {
    let (program, errors) = parse("let x 5; let y = 2;");
    assert_eq!(errors.len(), 1);
    assert!(program
        .statements
        .iter()
        .any(|stmt| matches!(stmt, Stmt::Let { name, .. } if name == "y")));
}
