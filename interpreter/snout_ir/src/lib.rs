//! Core data types for the Snout interpreter.
//!
//! Holds the passive pieces every other crate depends on: source spans,
//! tokens, and the AST. No lexing, parsing, or evaluation logic lives here.

pub mod ast;
mod span;
mod token;

pub use ast::{Block, Expr, InfixOp, PrefixOp, Program, Stmt};
pub use span::Span;
pub use token::{Token, TokenKind};
