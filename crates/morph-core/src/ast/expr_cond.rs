use super::Expr;

/// Conditional expression: `test ? if_true : if_false`.
///
/// Only the selected branch is evaluated, which is what makes the null guards
/// inserted by the mapper safe.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprCond {
    pub test: Box<Expr>,
    pub if_true: Box<Expr>,
    pub if_false: Box<Expr>,
}

impl Expr {
    pub fn cond(
        test: impl Into<Self>,
        if_true: impl Into<Self>,
        if_false: impl Into<Self>,
    ) -> Self {
        ExprCond {
            test: Box::new(test.into()),
            if_true: Box::new(if_true.into()),
            if_false: Box::new(if_false.into()),
        }
        .into()
    }

    pub fn is_cond(&self) -> bool {
        matches!(self, Self::Cond(_))
    }

    pub fn as_cond(&self) -> Option<&ExprCond> {
        match self {
            Self::Cond(expr_cond) => Some(expr_cond),
            _ => None,
        }
    }
}

impl From<ExprCond> for Expr {
    fn from(value: ExprCond) -> Self {
        Self::Cond(value)
    }
}
