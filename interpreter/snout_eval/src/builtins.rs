//! Builtin functions.
//!
//! A closed enum rather than function pointers in a registry: name
//! lookup happens during identifier resolution (after environment
//! lookup misses), and dispatch is one exhaustive `match`.

use std::rc::Rc;

use crate::render::{PrintHandler, RenderHook};
use crate::{EvalError, EvalResult, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Builtin {
    Len,
    First,
    Last,
    Rest,
    Push,
    Puts,
}

impl Builtin {
    /// Resolve a free identifier to a builtin, if one exists by that
    /// name. Environment bindings shadow builtins, so this runs only
    /// after scope lookup fails.
    pub fn lookup(name: &str) -> Option<Builtin> {
        match name {
            "len" => Some(Builtin::Len),
            "first" => Some(Builtin::First),
            "last" => Some(Builtin::Last),
            "rest" => Some(Builtin::Rest),
            "push" => Some(Builtin::Push),
            "puts" => Some(Builtin::Puts),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Len => "len",
            Builtin::First => "first",
            Builtin::Last => "last",
            Builtin::Rest => "rest",
            Builtin::Push => "push",
            Builtin::Puts => "puts",
        }
    }

    pub(crate) fn apply(
        self,
        args: Vec<Value>,
        hook: &dyn RenderHook,
        printer: &mut dyn PrintHandler,
    ) -> EvalResult {
        match self {
            Builtin::Len => {
                let arg = one_arg(args)?;
                match &arg {
                    Value::Str(value) => Ok(int_len(value.len())),
                    Value::Array(elements) => Ok(int_len(elements.len())),
                    other => Err(EvalError::unsupported_builtin_argument(
                        self.name(),
                        other.type_name(),
                    )
                    .into()),
                }
            }
            Builtin::First => {
                let elements = one_array_arg(self, args)?;
                Ok(elements.first().cloned().unwrap_or(Value::Null))
            }
            Builtin::Last => {
                let elements = one_array_arg(self, args)?;
                Ok(elements.last().cloned().unwrap_or(Value::Null))
            }
            Builtin::Rest => {
                let elements = one_array_arg(self, args)?;
                if elements.is_empty() {
                    Ok(Value::Null)
                } else {
                    Ok(Value::Array(Rc::new(elements[1..].to_vec())))
                }
            }
            Builtin::Push => {
                let [target, extra] = two_args(args)?;
                match target {
                    Value::Array(elements) => {
                        let mut pushed = elements.as_ref().clone();
                        pushed.push(extra);
                        Ok(Value::Array(Rc::new(pushed)))
                    }
                    other => Err(EvalError::builtin_argument_must_be(
                        self.name(),
                        "ARRAY",
                        other.type_name(),
                    )
                    .into()),
                }
            }
            Builtin::Puts => {
                for arg in &args {
                    printer.print_line(&arg.inspect(hook));
                }
                Ok(Value::Null)
            }
        }
    }
}

fn int_len(len: usize) -> Value {
    Value::Int(i64::try_from(len).unwrap_or(i64::MAX))
}

fn one_arg(mut args: Vec<Value>) -> EvalResult<Value> {
    if args.len() != 1 {
        return Err(EvalError::wrong_arity(1, args.len()).into());
    }
    Ok(args.swap_remove(0))
}

fn two_args(mut args: Vec<Value>) -> EvalResult<[Value; 2]> {
    if args.len() != 2 {
        return Err(EvalError::wrong_arity(2, args.len()).into());
    }
    let second = args.swap_remove(1);
    let first = args.swap_remove(0);
    Ok([first, second])
}

fn one_array_arg(builtin: Builtin, args: Vec<Value>) -> EvalResult<Rc<Vec<Value>>> {
    match one_arg(args)? {
        Value::Array(elements) => Ok(elements),
        other => Err(EvalError::builtin_argument_must_be(
            builtin.name(),
            "ARRAY",
            other.type_name(),
        )
        .into()),
    }
}
