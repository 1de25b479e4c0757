//! Runtime error types and the block-aborting carrier.
//!
//! `return` and runtime failure both travel as the `Err` side of
//! [`EvalResult`]: an [`Interrupt`] aborts the enclosing statement
//! sequence when it appears, which gives `?` exactly the propagation the
//! language needs. The program driver converts `Interrupt::Return` back
//! into a plain value; `Interrupt::Error` only ever surfaces to the
//! caller.

use std::fmt;

/// Typed category for a runtime failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// Name resolution failed in every scope up the chain.
    IdentifierNotFound { name: String },
    /// Infix operands of two different types where the operator needs
    /// matching ones.
    TypeMismatch {
        left: &'static str,
        op: &'static str,
        right: &'static str,
    },
    /// A prefix operator applied to a type it does not support.
    UnknownPrefixOperator {
        op: &'static str,
        operand: &'static str,
    },
    /// An infix operator applied to same-typed operands it does not
    /// support.
    UnknownInfixOperator {
        left: &'static str,
        op: &'static str,
        right: &'static str,
    },
    /// Call target is not a function or builtin.
    NotCallable { type_name: &'static str },
    /// Argument count does not match the parameter list.
    WrongArity { want: usize, got: usize },
    /// A hash key of a type with no hash derivation.
    NotHashable { type_name: &'static str },
    /// Index applied to a value that supports no indexing.
    IndexNotSupported { type_name: &'static str },
    /// Integer division with a zero divisor.
    DivisionByZero,
    /// 64-bit signed arithmetic left the representable range.
    IntegerOverflow,
    /// Builtin argument of an unsupported type.
    BadBuiltinArgument {
        builtin: &'static str,
        expected: Option<&'static str>,
        got: &'static str,
    },
}

/// A runtime failure, carried as a first-class language value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
}

impl EvalError {
    pub fn identifier_not_found(name: impl Into<String>) -> Self {
        EvalError {
            kind: EvalErrorKind::IdentifierNotFound { name: name.into() },
        }
    }

    pub fn type_mismatch(left: &'static str, op: &'static str, right: &'static str) -> Self {
        EvalError {
            kind: EvalErrorKind::TypeMismatch { left, op, right },
        }
    }

    pub fn unknown_prefix_operator(op: &'static str, operand: &'static str) -> Self {
        EvalError {
            kind: EvalErrorKind::UnknownPrefixOperator { op, operand },
        }
    }

    pub fn unknown_infix_operator(left: &'static str, op: &'static str, right: &'static str) -> Self {
        EvalError {
            kind: EvalErrorKind::UnknownInfixOperator { left, op, right },
        }
    }

    pub fn not_callable(type_name: &'static str) -> Self {
        EvalError {
            kind: EvalErrorKind::NotCallable { type_name },
        }
    }

    pub fn wrong_arity(want: usize, got: usize) -> Self {
        EvalError {
            kind: EvalErrorKind::WrongArity { want, got },
        }
    }

    pub fn not_hashable(type_name: &'static str) -> Self {
        EvalError {
            kind: EvalErrorKind::NotHashable { type_name },
        }
    }

    pub fn index_not_supported(type_name: &'static str) -> Self {
        EvalError {
            kind: EvalErrorKind::IndexNotSupported { type_name },
        }
    }

    pub fn division_by_zero() -> Self {
        EvalError {
            kind: EvalErrorKind::DivisionByZero,
        }
    }

    pub fn integer_overflow() -> Self {
        EvalError {
            kind: EvalErrorKind::IntegerOverflow,
        }
    }

    pub fn unsupported_builtin_argument(builtin: &'static str, got: &'static str) -> Self {
        EvalError {
            kind: EvalErrorKind::BadBuiltinArgument {
                builtin,
                expected: None,
                got,
            },
        }
    }

    pub fn builtin_argument_must_be(
        builtin: &'static str,
        expected: &'static str,
        got: &'static str,
    ) -> Self {
        EvalError {
            kind: EvalErrorKind::BadBuiltinArgument {
                builtin,
                expected: Some(expected),
                got,
            },
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            EvalErrorKind::IdentifierNotFound { name } => {
                write!(f, "identifier not found: {name}")
            }
            EvalErrorKind::TypeMismatch { left, op, right } => {
                write!(f, "type mismatch: {left} {op} {right}")
            }
            EvalErrorKind::UnknownPrefixOperator { op, operand } => {
                write!(f, "unknown operator: {op}{operand}")
            }
            EvalErrorKind::UnknownInfixOperator { left, op, right } => {
                write!(f, "unknown operator: {left} {op} {right}")
            }
            EvalErrorKind::NotCallable { type_name } => {
                write!(f, "not a function: {type_name}")
            }
            EvalErrorKind::WrongArity { want, got } => {
                write!(f, "wrong number of arguments. got={got}, want={want}")
            }
            EvalErrorKind::NotHashable { type_name } => {
                write!(f, "unusable as hash key: {type_name}")
            }
            EvalErrorKind::IndexNotSupported { type_name } => {
                write!(f, "index operator not supported: {type_name}")
            }
            EvalErrorKind::DivisionByZero => f.write_str("division by zero"),
            EvalErrorKind::IntegerOverflow => f.write_str("integer overflow"),
            EvalErrorKind::BadBuiltinArgument {
                builtin,
                expected: Some(expected),
                got,
            } => {
                write!(f, "argument to `{builtin}` must be {expected}, got {got}")
            }
            EvalErrorKind::BadBuiltinArgument {
                builtin,
                expected: None,
                got,
            } => {
                write!(f, "argument to `{builtin}` not supported, got {got}")
            }
        }
    }
}

impl std::error::Error for EvalError {}

/// What aborts an enclosing statement sequence.
///
/// `Return` is unwound by function application and by the program driver;
/// `Error` passes every boundary unchanged.
#[derive(Clone, Debug, PartialEq)]
pub enum Interrupt {
    Return(crate::Value),
    Error(EvalError),
}

impl From<EvalError> for Interrupt {
    fn from(error: EvalError) -> Self {
        Interrupt::Error(error)
    }
}

/// Result of evaluating one node.
pub type EvalResult<T = crate::Value> = Result<T, Interrupt>;
