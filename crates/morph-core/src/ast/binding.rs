use super::Expr;

/// One `member = value` pair of an object initializer.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    /// The destination member name.
    pub name: String,

    /// Field position within the destination model, once resolved.
    pub index: Option<usize>,

    /// The value assigned to the member.
    pub expr: Expr,
}

impl Binding {
    pub fn new(name: impl Into<String>, expr: impl Into<Expr>) -> Binding {
        Binding {
            name: name.into(),
            index: None,
            expr: expr.into(),
        }
    }
}

impl<N: Into<String>, E: Into<Expr>> From<(N, E)> for Binding {
    fn from((name, expr): (N, E)) -> Self {
        Binding::new(name, expr)
    }
}
