use super::Expr;

/// Reads a member of a model value.
///
/// Members are authored by name. Building a mapper resolves the name to a
/// field position in the base model; evaluation reads by position.
///
/// # Examples
///
/// ```text
/// arg(0).dept        // member `dept` of the source
/// arg(0).dept.name   // a member-access chain
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExprMember {
    /// The value whose member is read.
    pub base: Box<Expr>,

    /// The member name.
    pub name: String,

    /// Field position within the base model, once resolved.
    pub index: Option<usize>,
}

impl Expr {
    /// Reads member `name` of `base`.
    pub fn member(base: impl Into<Self>, name: impl Into<String>) -> Self {
        ExprMember {
            base: Box::new(base.into()),
            name: name.into(),
            index: None,
        }
        .into()
    }

    /// Reads member `name` of this expression.
    pub fn field(self, name: impl Into<String>) -> Self {
        Self::member(self, name)
    }

    pub fn is_member(&self) -> bool {
        matches!(self, Self::Member(_))
    }

    pub fn as_member(&self) -> Option<&ExprMember> {
        match self {
            Self::Member(expr_member) => Some(expr_member),
            _ => None,
        }
    }
}

impl ExprMember {
    /// Iterates the bases of this access from the outermost (`self.base`) to
    /// the root of the chain.
    pub fn bases(&self) -> impl Iterator<Item = &Expr> {
        let mut next = Some(&*self.base);

        std::iter::from_fn(move || {
            let current = next?;
            next = match current {
                Expr::Member(expr_member) => Some(&*expr_member.base),
                _ => None,
            };
            Some(current)
        })
    }
}

impl From<ExprMember> for Expr {
    fn from(value: ExprMember) -> Self {
        Self::Member(value)
    }
}
