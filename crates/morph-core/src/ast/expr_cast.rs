use super::{Expr, Type};

/// `operand as Type`, converting a source value to the destination field's
/// type.
///
/// Conversion rules live in [`Type::cast`]. Null converts to null, so the
/// result is only non-null when the operand is.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprCast {
    pub expr: Box<Expr>,

    /// Target of the conversion
    pub ty: Type,
}

impl Expr {
    pub fn cast(operand: impl Into<Self>, ty: impl Into<Type>) -> Self {
        Self::Cast(ExprCast {
            expr: Box::new(operand.into()),
            ty: ty.into(),
        })
    }
}

impl From<ExprCast> for Expr {
    fn from(value: ExprCast) -> Self {
        Self::Cast(value)
    }
}
