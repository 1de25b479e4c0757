//! The tree-walking evaluator.
//!
//! Statements and expressions are walked directly off the AST against a
//! shared environment chain. Sub-evaluation results are threaded with
//! `?`, so a `return` in flight or a runtime error aborts the enclosing
//! sequence at the first opportunity; nothing downstream of a failed
//! sub-evaluation runs.

use std::rc::Rc;

use snout_ir::{Block, Expr, Program, Stmt};

use crate::env::Env;
use crate::render::{Identity, PrintHandler, RenderHook, StdoutPrint};
use crate::value::{FunctionValue, HashKey, HashValue};
use crate::{operators, Builtin, EvalError, EvalResult, Interrupt, Value};

/// Evaluator state: the render hook for display-time localization and
/// the sink `puts` writes to. All language state lives in the [`Env`]
/// passed per call, so one interpreter serves a whole REPL session.
pub struct Interpreter {
    hook: Box<dyn RenderHook>,
    printer: Box<dyn PrintHandler>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}

impl Interpreter {
    /// Identity rendering, standard output.
    pub fn new() -> Self {
        Interpreter {
            hook: Box::new(Identity),
            printer: Box::new(StdoutPrint),
        }
    }

    pub fn with_parts(hook: Box<dyn RenderHook>, printer: Box<dyn PrintHandler>) -> Self {
        Interpreter { hook, printer }
    }

    pub fn hook(&self) -> &dyn RenderHook {
        self.hook.as_ref()
    }

    /// Render a value with the configured hook.
    pub fn inspect(&self, value: &Value) -> String {
        value.inspect(self.hook.as_ref())
    }

    /// Evaluate a whole program.
    ///
    /// `Ok(None)` means the last statement produced nothing to display
    /// (a `let` binding, or an empty program). A top-level `return` is
    /// unwound here into its carried value.
    pub fn eval_program(&mut self, program: &Program, env: &Env) -> EvalResult<Option<Value>> {
        let mut result = None;
        for stmt in &program.statements {
            result = match self.eval_stmt(stmt, env) {
                Ok(value) => value,
                Err(Interrupt::Return(value)) => return Ok(Some(value)),
                Err(error) => return Err(error),
            };
        }
        tracing::trace!(statements = program.statements.len(), "evaluated program");
        Ok(result)
    }

    fn eval_stmt(&mut self, stmt: &Stmt, env: &Env) -> EvalResult<Option<Value>> {
        match stmt {
            Stmt::Let { name, value } => {
                let value = self.eval_expr(value, env)?;
                env.set(name.clone(), value);
                Ok(None)
            }
            Stmt::Return(None) => Err(Interrupt::Return(Value::Null)),
            Stmt::Return(Some(value)) => {
                let value = self.eval_expr(value, env)?;
                Err(Interrupt::Return(value))
            }
            Stmt::Expr(expr) => self.eval_expr(expr, env).map(Some),
        }
    }

    /// Evaluate a block to its last expression value, `null` when the
    /// block is empty or ends in a binding. `return` is not unwound
    /// here; it keeps propagating to the enclosing function or program.
    fn eval_block(&mut self, block: &Block, env: &Env) -> EvalResult {
        let mut result = None;
        for stmt in &block.statements {
            result = self.eval_stmt(stmt, env)?;
        }
        Ok(result.unwrap_or(Value::Null))
    }

    fn eval_expr(&mut self, expr: &Expr, env: &Env) -> EvalResult {
        match expr {
            Expr::Ident(name) => self.eval_ident(name, env),
            Expr::Int(value) => Ok(Value::Int(*value)),
            Expr::Str(value) => Ok(Value::str(value.as_str())),
            Expr::Bool(value) => Ok(Value::Bool(*value)),
            Expr::Prefix { op, right } => {
                let right = self.eval_expr(right, env)?;
                operators::eval_prefix(*op, right)
            }
            Expr::Infix { op, left, right } => {
                let left = self.eval_expr(left, env)?;
                let right = self.eval_expr(right, env)?;
                operators::eval_infix(*op, left, right)
            }
            Expr::If {
                cond,
                consequence,
                alternative,
            } => self.eval_if(cond, consequence, alternative.as_ref(), env),
            Expr::Function { params, body } => Ok(Value::Function(Rc::new(FunctionValue {
                params: params.clone(),
                body: body.clone(),
                env: env.clone(),
            }))),
            Expr::Call { callee, args } => {
                let callee = self.eval_expr(callee, env)?;
                let args = self.eval_expressions(args, env)?;
                self.apply(callee, args)
            }
            Expr::Array(elements) => {
                let elements = self.eval_expressions(elements, env)?;
                Ok(Value::Array(Rc::new(elements)))
            }
            Expr::Index { left, index } => {
                let left = self.eval_expr(left, env)?;
                let index = self.eval_expr(index, env)?;
                eval_index(left, index)
            }
            Expr::Hash(pairs) => self.eval_hash_literal(pairs, env),
        }
    }

    fn eval_ident(&mut self, name: &str, env: &Env) -> EvalResult {
        if let Some(value) = env.get(name) {
            return Ok(value);
        }
        match Builtin::lookup(name) {
            Some(builtin) => Ok(Value::Builtin(builtin)),
            None => Err(EvalError::identifier_not_found(name).into()),
        }
    }

    fn eval_if(
        &mut self,
        cond: &Expr,
        consequence: &Block,
        alternative: Option<&Block>,
        env: &Env,
    ) -> EvalResult {
        let cond = self.eval_expr(cond, env)?;
        if cond.is_truthy() {
            self.eval_block(consequence, env)
        } else if let Some(alternative) = alternative {
            self.eval_block(alternative, env)
        } else {
            Ok(Value::Null)
        }
    }

    /// Left-to-right; the first failing element aborts the whole list.
    fn eval_expressions(&mut self, exprs: &[Expr], env: &Env) -> EvalResult<Vec<Value>> {
        let mut values = Vec::with_capacity(exprs.len());
        for expr in exprs {
            values.push(self.eval_expr(expr, env)?);
        }
        Ok(values)
    }

    /// Apply a function or builtin to already-evaluated arguments.
    fn apply(&mut self, callee: Value, args: Vec<Value>) -> EvalResult {
        match callee {
            Value::Function(function) => {
                if args.len() != function.params.len() {
                    return Err(EvalError::wrong_arity(function.params.len(), args.len()).into());
                }
                let scope = Env::enclosed(&function.env);
                for (param, arg) in function.params.iter().zip(args) {
                    scope.set(param.clone(), arg);
                }
                match self.eval_block(&function.body, &scope) {
                    Err(Interrupt::Return(value)) => Ok(value),
                    other => other,
                }
            }
            Value::Builtin(builtin) => {
                builtin.apply(args, self.hook.as_ref(), self.printer.as_mut())
            }
            other => Err(EvalError::not_callable(other.type_name()).into()),
        }
    }

    fn eval_hash_literal(&mut self, pairs: &[(Expr, Expr)], env: &Env) -> EvalResult {
        let mut hash = HashValue::with_capacity(pairs.len());
        for (key_expr, value_expr) in pairs {
            let key = self.eval_expr(key_expr, env)?;
            let derived = HashKey::of(&key)
                .ok_or_else(|| EvalError::not_hashable(key.type_name()))?;
            let value = self.eval_expr(value_expr, env)?;
            hash.insert(derived, key, value);
        }
        Ok(Value::Hash(Rc::new(hash)))
    }
}

fn eval_index(left: Value, index: Value) -> EvalResult {
    match (left, index) {
        (Value::Array(elements), Value::Int(i)) => {
            let element = usize::try_from(i)
                .ok()
                .and_then(|i| elements.get(i).cloned());
            Ok(element.unwrap_or(Value::Null))
        }
        (Value::Hash(hash), key) => {
            let derived =
                HashKey::of(&key).ok_or_else(|| EvalError::not_hashable(key.type_name()))?;
            Ok(hash.get(&derived).cloned().unwrap_or(Value::Null))
        }
        (left, _) => Err(EvalError::index_not_supported(left.type_name()).into()),
    }
}
