use super::{Expr, Func};

/// Calls a built-in function, optionally on a receiver.
///
/// # Examples
///
/// ```text
/// arg(0).name.to_uppercase()   // method call, receiver `arg(0).name`
/// concat(arg(0).first, " ")    // function call, no receiver
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExprCall {
    /// The receiver of a method call; `None` for a free function.
    pub target: Option<Box<Expr>>,

    /// The function to call.
    pub func: Func,

    /// Call arguments, not including the receiver.
    pub args: Vec<Expr>,
}

impl Expr {
    /// Calls `func` as a method of `target`.
    pub fn method<T>(target: impl Into<Self>, func: Func, args: impl IntoIterator<Item = T>) -> Self
    where
        T: Into<Self>,
    {
        ExprCall {
            target: Some(Box::new(target.into())),
            func,
            args: args.into_iter().map(Into::into).collect(),
        }
        .into()
    }

    /// Calls `func` as a free function.
    pub fn call<T>(func: Func, args: impl IntoIterator<Item = T>) -> Self
    where
        T: Into<Self>,
    {
        ExprCall {
            target: None,
            func,
            args: args.into_iter().map(Into::into).collect(),
        }
        .into()
    }

    pub fn is_call(&self) -> bool {
        matches!(self, Self::Call(_))
    }
}

impl From<ExprCall> for Expr {
    fn from(value: ExprCall) -> Self {
        Self::Call(value)
    }
}
