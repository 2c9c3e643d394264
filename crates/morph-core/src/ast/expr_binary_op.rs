use super::{BinaryOp, Expr};

/// A binary operation between two expressions.
///
/// # Examples
///
/// ```text
/// eq(a, b)   // a == b
/// ne(a, b)   // a != b
/// add(a, b)  // a + b, also string concatenation
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExprBinaryOp {
    /// The left-hand side expression.
    pub lhs: Box<Expr>,

    /// The operator to apply.
    pub op: BinaryOp,

    /// The right-hand side expression.
    pub rhs: Box<Expr>,
}

impl Expr {
    pub fn binary_op(lhs: impl Into<Self>, op: BinaryOp, rhs: impl Into<Self>) -> Self {
        ExprBinaryOp {
            op,
            lhs: Box::new(lhs.into()),
            rhs: Box::new(rhs.into()),
        }
        .into()
    }

    pub fn eq(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Expr::binary_op(lhs, BinaryOp::Eq, rhs)
    }

    pub fn ne(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Expr::binary_op(lhs, BinaryOp::Ne, rhs)
    }

    pub fn ge(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Expr::binary_op(lhs, BinaryOp::Ge, rhs)
    }

    pub fn gt(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Expr::binary_op(lhs, BinaryOp::Gt, rhs)
    }

    pub fn le(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Expr::binary_op(lhs, BinaryOp::Le, rhs)
    }

    pub fn lt(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Expr::binary_op(lhs, BinaryOp::Lt, rhs)
    }

    pub fn add(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Expr::binary_op(lhs, BinaryOp::Add, rhs)
    }

    pub fn sub(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Expr::binary_op(lhs, BinaryOp::Sub, rhs)
    }

    /// `expr != null`
    pub fn ne_null(expr: impl Into<Self>) -> Self {
        Expr::ne(expr, Expr::null())
    }

    /// `expr == null`
    pub fn eq_null(expr: impl Into<Self>) -> Self {
        Expr::eq(expr, Expr::null())
    }

    pub fn as_binary_op(&self) -> Option<&ExprBinaryOp> {
        match self {
            Self::BinaryOp(expr_binary_op) => Some(expr_binary_op),
            _ => None,
        }
    }
}

impl ExprBinaryOp {
    /// If this is `x == null`, `x != null`, or a mirrored form, returns the
    /// operator and `x`.
    pub fn as_null_comparison(&self) -> Option<(BinaryOp, &Expr)> {
        if !matches!(self.op, BinaryOp::Eq | BinaryOp::Ne) {
            return None;
        }

        match (&*self.lhs, &*self.rhs) {
            (lhs, rhs) if rhs.is_value_null() && !lhs.is_value_null() => Some((self.op, lhs)),
            (lhs, rhs) if lhs.is_value_null() && !rhs.is_value_null() => Some((self.op, rhs)),
            _ => None,
        }
    }
}

impl From<ExprBinaryOp> for Expr {
    fn from(value: ExprBinaryOp) -> Self {
        Self::BinaryOp(value)
    }
}
