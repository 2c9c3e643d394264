use super::Expr;
use crate::schema::ModelId;

/// Positional constructor call. Arguments fill the model's fields in order.
///
/// Unlike an object initializer, a constructor names no members, so it cannot
/// be replayed as assignments onto an existing value.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprConstruct {
    /// The model being created.
    pub model: ModelId,

    /// One argument per field, in field order.
    pub args: Vec<Expr>,
}

impl Expr {
    pub fn construct<T>(model: ModelId, args: impl IntoIterator<Item = T>) -> Self
    where
        T: Into<Self>,
    {
        ExprConstruct {
            model,
            args: args.into_iter().map(Into::into).collect(),
        }
        .into()
    }
}

impl From<ExprConstruct> for Expr {
    fn from(value: ExprConstruct) -> Self {
        Self::Construct(value)
    }
}
