use super::Expr;

/// `!operand` in a mapping body.
///
/// A null operand stays null, so a negated lookup through a missing
/// reference reads as "unknown" rather than `true`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprNot {
    pub expr: Box<Expr>,
}

impl Expr {
    pub fn not(operand: impl Into<Self>) -> Self {
        Self::Not(ExprNot {
            expr: Box::new(operand.into()),
        })
    }
}

impl From<ExprNot> for Expr {
    fn from(value: ExprNot) -> Self {
        Self::Not(value)
    }
}
