use super::Expr;

/// A positional lambda parameter.
///
/// # Examples
///
/// ```text
/// arg(0)  // the first parameter, the mapping source
/// arg(1)  // the second parameter
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct ExprArg {
    /// The zero-based position of the argument.
    pub position: usize,
}

impl Expr {
    pub fn arg(position: usize) -> Self {
        Self::Arg(ExprArg::new(position))
    }

    pub fn as_arg(&self) -> Option<&ExprArg> {
        match self {
            Self::Arg(expr_arg) => Some(expr_arg),
            _ => None,
        }
    }
}

impl ExprArg {
    pub fn new(position: usize) -> ExprArg {
        ExprArg { position }
    }
}

impl From<usize> for ExprArg {
    fn from(value: usize) -> Self {
        Self { position: value }
    }
}

impl From<ExprArg> for Expr {
    fn from(value: ExprArg) -> Self {
        Self::Arg(value)
    }
}
