//! Abstract syntax tree for Snout.
//!
//! A `Program` owns an ordered list of statements; expressions form an
//! immutable tree under them. Nothing here evaluates anything - the tree
//! is inert data shared by the parser and the evaluator.
//!
//! `Display` renders source-shaped text. The evaluator relies on this for
//! function value inspection, and the parser tests assert on it to check
//! precedence grouping.

use std::fmt;

/// A parsed program: ordered top-level statements.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Program { statements }
    }
}

/// Statement nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stmt {
    /// `let <name> = <value>;`
    Let { name: String, value: Expr },
    /// `return;` or `return <expr>;`
    Return(Option<Expr>),
    /// A bare expression evaluated for its value.
    Expr(Expr),
}

/// A braced sequence of statements, used as function and `if` bodies.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

impl Block {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Block { statements }
    }
}

/// Prefix operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrefixOp {
    /// `!` - negation under the truthiness rule.
    Not,
    /// `-` - integer negation.
    Neg,
}

/// Infix operators, lowest binding power first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InfixOp {
    Eq,
    NotEq,
    Lt,
    Gt,
    Add,
    Sub,
    Mul,
    Div,
}

/// Expression nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    /// Name reference: `x`
    Ident(String),
    /// Integer literal: `42`
    Int(i64),
    /// String literal: `"hello"`
    Str(String),
    /// Boolean literal: `true` / `false`
    Bool(bool),
    /// `!x`, `-x`
    Prefix { op: PrefixOp, right: Box<Expr> },
    /// `a + b`, `a == b`, ...
    Infix {
        op: InfixOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `if (<cond>) { ... } else { ... }` - the alternative is optional.
    If {
        cond: Box<Expr>,
        consequence: Block,
        alternative: Option<Block>,
    },
    /// `fn(a, b) { ... }`
    Function { params: Vec<String>, body: Block },
    /// `callee(a, b)`
    Call { callee: Box<Expr>, args: Vec<Expr> },
    /// `[a, b, c]`
    Array(Vec<Expr>),
    /// `left[index]`
    Index { left: Box<Expr>, index: Box<Expr> },
    /// `{k1: v1, k2: v2}` - pairs in source order.
    Hash(Vec<(Expr, Expr)>),
}

impl fmt::Display for PrefixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefixOp::Not => f.write_str("!"),
            PrefixOp::Neg => f.write_str("-"),
        }
    }
}

impl fmt::Display for InfixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            InfixOp::Eq => "==",
            InfixOp::NotEq => "!=",
            InfixOp::Lt => "<",
            InfixOp::Gt => ">",
            InfixOp::Add => "+",
            InfixOp::Sub => "-",
            InfixOp::Mul => "*",
            InfixOp::Div => "/",
        };
        f.write_str(symbol)
    }
}

/// Write `items` separated by `sep`.
fn write_separated<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    sep: &str,
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_separated(f, &self.statements, " ")
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_separated(f, &self.statements, " ")
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Let { name, value } => write!(f, "let {name} = {value};"),
            Stmt::Return(None) => f.write_str("return;"),
            Stmt::Return(Some(value)) => write!(f, "return {value};"),
            Stmt::Expr(expr) => write!(f, "{expr}"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Ident(name) => f.write_str(name),
            Expr::Int(value) => write!(f, "{value}"),
            Expr::Str(value) => f.write_str(value),
            Expr::Bool(value) => write!(f, "{value}"),
            Expr::Prefix { op, right } => write!(f, "({op}{right})"),
            Expr::Infix { op, left, right } => write!(f, "({left} {op} {right})"),
            Expr::If {
                cond,
                consequence,
                alternative,
            } => {
                write!(f, "if ({cond}) {{ {consequence} }}")?;
                if let Some(alt) = alternative {
                    write!(f, " else {{ {alt} }}")?;
                }
                Ok(())
            }
            Expr::Function { params, body } => {
                f.write_str("fn(")?;
                write_separated(f, params, ", ")?;
                write!(f, ") {{ {body} }}")
            }
            Expr::Call { callee, args } => {
                write!(f, "{callee}(")?;
                write_separated(f, args, ", ")?;
                f.write_str(")")
            }
            Expr::Array(elements) => {
                f.write_str("[")?;
                write_separated(f, elements, ", ")?;
                f.write_str("]")
            }
            Expr::Index { left, index } => write!(f, "({left}[{index}])"),
            Expr::Hash(pairs) => {
                f.write_str("{")?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}
