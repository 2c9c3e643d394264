use super::{Type, Value};
use crate::{Error, Result};

use std::fmt;

/// Built-in functions available to mapping expressions.
///
/// Every function has a fixed, side-effect free definition so that a query
/// provider can translate calls natively instead of invoking Rust code.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub enum Func {
    /// `s.to_uppercase()`
    ToUppercase,

    /// `s.to_lowercase()`
    ToLowercase,

    /// `s.trim()`
    Trim,

    /// `s.len()`, also the length of a list
    Len,

    /// `s.contains(needle)`
    Contains,

    /// `s.starts_with(prefix)`
    StartsWith,

    /// `n.abs()`
    Abs,

    /// `concat(a, b, ...)`; null operands concatenate as the empty string
    Concat,

    /// `coalesce(a, b, ...)`; the first non-null operand
    Coalesce,
}

impl Func {
    pub fn name(self) -> &'static str {
        match self {
            Self::ToUppercase => "to_uppercase",
            Self::ToLowercase => "to_lowercase",
            Self::Trim => "trim",
            Self::Len => "len",
            Self::Contains => "contains",
            Self::StartsWith => "starts_with",
            Self::Abs => "abs",
            Self::Concat => "concat",
            Self::Coalesce => "coalesce",
        }
    }

    /// Returns `true` if the function is called on a receiver.
    pub fn is_method(self) -> bool {
        !matches!(self, Self::Concat | Self::Coalesce)
    }

    /// Checks the call shape: receiver presence and argument count.
    pub fn verify(self, has_target: bool, num_args: usize) -> Result<()> {
        if has_target != self.is_method() {
            return Err(Error::malformed_mapping_expression(if self.is_method() {
                format!("`{self}` must be called on a receiver")
            } else {
                format!("`{self}` cannot be called on a receiver")
            }));
        }

        let expected = match self {
            Self::ToUppercase | Self::ToLowercase | Self::Trim | Self::Len | Self::Abs => Some(0),
            Self::Contains | Self::StartsWith => Some(1),
            Self::Concat | Self::Coalesce => None,
        };

        match expected {
            Some(expected) if expected != num_args => {
                Err(Error::malformed_mapping_expression(format!(
                    "`{self}` takes {expected} argument(s) but {num_args} were supplied"
                )))
            }
            None if num_args == 0 => Err(Error::malformed_mapping_expression(format!(
                "`{self}` requires at least one argument"
            ))),
            _ => Ok(()),
        }
    }

    pub fn ret_ty(self, target: Option<&Type>, args: &[Type]) -> Type {
        match self {
            Self::ToUppercase | Self::ToLowercase | Self::Trim | Self::Concat => Type::String,
            Self::Len => Type::I64,
            Self::Contains | Self::StartsWith => Type::Bool,
            Self::Abs => target.map(|ty| ty.strip_option().clone()).unwrap_or(Type::Unknown),
            Self::Coalesce => {
                let ty = args
                    .iter()
                    .cloned()
                    .reduce(Type::unify)
                    .unwrap_or(Type::Unknown);

                // A single non-nullable operand makes the result non-null
                if args.iter().any(|arg| !arg.is_nullable()) {
                    ty.strip_option().clone()
                } else {
                    ty
                }
            }
        }
    }

    /// Applies the function to already evaluated operands.
    pub fn apply(self, target: Option<Value>, args: Vec<Value>) -> Result<Value> {
        if !self.is_method() {
            return self.apply_free(args);
        }

        let target = match target {
            None => {
                return Err(Error::expression_evaluation_failed(format!(
                    "`{self}` called without a receiver"
                )))
            }
            Some(Value::Null) => {
                return Err(Error::expression_evaluation_failed(format!(
                    "cannot call `{self}` on null"
                )))
            }
            Some(target) => target,
        };

        let mut args = args.into_iter();

        Ok(match (self, target) {
            (Self::ToUppercase, Value::String(s)) => Value::String(s.to_uppercase()),
            (Self::ToLowercase, Value::String(s)) => Value::String(s.to_lowercase()),
            (Self::Trim, Value::String(s)) => Value::String(s.trim().to_string()),
            (Self::Len, Value::String(s)) => Value::I64(i64::try_from(s.chars().count())?),
            (Self::Len, Value::List(items)) => Value::I64(i64::try_from(items.len())?),
            (Self::Contains, Value::String(s)) => match args.next() {
                Some(Value::String(needle)) => Value::Bool(s.contains(&needle)),
                Some(Value::Null) => Value::Bool(false),
                arg => return Err(bad_operand(self, arg)),
            },
            (Self::Contains, Value::List(items)) => match args.next() {
                Some(needle) => Value::Bool(items.contains(&needle)),
                arg => return Err(bad_operand(self, arg)),
            },
            (Self::StartsWith, Value::String(s)) => match args.next() {
                Some(Value::String(prefix)) => Value::Bool(s.starts_with(&prefix)),
                Some(Value::Null) => Value::Bool(false),
                arg => return Err(bad_operand(self, arg)),
            },
            (Self::Abs, Value::I64(v)) => Value::I64(v.checked_abs().ok_or_else(|| {
                Error::expression_evaluation_failed(format!("`abs` of {v} overflows i64"))
            })?),
            (Self::Abs, Value::F64(v)) => Value::F64(v.abs()),
            (_, target) => return Err(bad_operand(self, Some(target))),
        })
    }

    fn apply_free(self, args: Vec<Value>) -> Result<Value> {
        match self {
            Self::Concat => {
                let mut ret = String::new();

                for arg in args {
                    match arg {
                        Value::Null => {}
                        Value::String(s) => ret.push_str(&s),
                        Value::I64(v) => ret.push_str(&v.to_string()),
                        Value::F64(v) => ret.push_str(&v.to_string()),
                        Value::Bool(v) => ret.push_str(&v.to_string()),
                        arg => return Err(bad_operand(self, Some(arg))),
                    }
                }

                Ok(Value::String(ret))
            }
            Self::Coalesce => Ok(args
                .into_iter()
                .find(|arg| !arg.is_null())
                .unwrap_or(Value::Null)),
            _ => unreachable!("`{self}` is a method"),
        }
    }
}

fn bad_operand(func: Func, value: Option<Value>) -> Error {
    match value {
        Some(value) => Error::expression_evaluation_failed(format!(
            "`{func}` does not accept {:?}",
            value.infer_ty()
        )),
        None => Error::expression_evaluation_failed(format!("`{func}` is missing an operand")),
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Debug for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
