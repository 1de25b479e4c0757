//! Evaluator test suites, grouped by concern.

mod error_tests;

use snout_ir::Program;

use crate::{Env, EvalError, Interpreter, Interrupt, Value};

/// Parse a source that must be syntactically valid.
fn program(src: &str) -> Program {
    let (program, errors) = snout_parse::parse(src);
    assert!(errors.is_empty(), "parse errors in {src:?}: {errors:?}");
    program
}

/// Evaluate in a fresh environment with identity rendering.
fn eval(src: &str) -> Result<Option<Value>, Interrupt> {
    Interpreter::new().eval_program(&program(src), &Env::new())
}

/// Evaluate a source whose last statement must produce a value.
fn eval_ok(src: &str) -> Value {
    match eval(src) {
        Ok(Some(value)) => value,
        other => panic!("expected a value for {src:?}, got {other:?}"),
    }
}

/// Evaluate a source that must fail at runtime.
fn eval_err(src: &str) -> EvalError {
    match eval(src) {
        Err(Interrupt::Error(error)) => error,
        other => panic!("expected a runtime error for {src:?}, got {other:?}"),
    }
}
