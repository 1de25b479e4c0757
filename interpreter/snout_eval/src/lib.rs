//! Tree-walking evaluator for Snout.
//!
//! The runtime is a closed value enum, a reference-shared environment
//! chain, and a recursive walk over the AST. Control flow that escapes
//! a block (`return`, runtime errors) rides the `Err` side of
//! [`EvalResult`] so `?` propagates it. Display-time localization is a
//! pluggable [`render::RenderHook`]; the evaluator itself never touches
//! the network.

mod builtins;
mod env;
mod errors;
mod interpreter;
mod operators;
pub mod render;
mod value;

#[cfg(test)]
mod tests;

pub use builtins::Builtin;
pub use env::Env;
pub use errors::{EvalError, EvalErrorKind, EvalResult, Interrupt};
pub use interpreter::Interpreter;
pub use render::{render_error, RenderHook};
pub use value::{FunctionValue, HashKey, HashValue, Value};
