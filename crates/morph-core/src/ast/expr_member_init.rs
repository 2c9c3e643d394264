use super::{Binding, Expr};
use crate::schema::ModelId;

/// Object initializer: creates a model value and assigns members inline.
///
/// Members without a binding hold null, which loads as the member's default.
///
/// # Examples
///
/// ```text
/// new { full_name = arg(0).name, dept_name = arg(0).dept.name }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExprMemberInit {
    /// The model being created.
    pub model: ModelId,

    /// Member bindings in declaration order.
    pub bindings: Vec<Binding>,

    /// Number of fields in the model, once resolved.
    pub width: Option<usize>,
}

impl Expr {
    pub fn member_init<B>(model: ModelId, bindings: impl IntoIterator<Item = B>) -> Self
    where
        B: Into<Binding>,
    {
        ExprMemberInit {
            model,
            bindings: bindings.into_iter().map(Into::into).collect(),
            width: None,
        }
        .into()
    }

    pub fn is_member_init(&self) -> bool {
        matches!(self, Self::MemberInit(_))
    }

    pub fn as_member_init(&self) -> Option<&ExprMemberInit> {
        match self {
            Self::MemberInit(expr_member_init) => Some(expr_member_init),
            _ => None,
        }
    }
}

impl ExprMemberInit {
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }
}

impl<'a> IntoIterator for &'a ExprMemberInit {
    type IntoIter = std::slice::Iter<'a, Binding>;
    type Item = &'a Binding;

    fn into_iter(self) -> Self::IntoIter {
        self.bindings.iter()
    }
}

impl From<ExprMemberInit> for Expr {
    fn from(value: ExprMemberInit) -> Self {
        Self::MemberInit(value)
    }
}
