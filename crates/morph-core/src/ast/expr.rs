use super::*;

/// A node of a mapping expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// AND a set of boolean expressions
    And(ExprAnd),

    /// A lambda parameter, referenced by position
    Arg(ExprArg),

    /// Binary expression
    BinaryOp(ExprBinaryOp),

    /// Method or function call
    Call(ExprCall),

    /// Cast an expression to a different type
    Cast(ExprCast),

    /// Conditional (ternary) expression
    Cond(ExprCond),

    /// Positional constructor call
    Construct(ExprConstruct),

    /// Reads a member of a model value
    Member(ExprMember),

    /// Object initializer: a new model value with members bound inline
    MemberInit(ExprMemberInit),

    /// Negate a boolean expression
    Not(ExprNot),

    /// OR a set of boolean expressions
    Or(ExprOr),

    /// Evaluates to a constant value
    Value(Value),
}

impl Expr {
    pub fn null() -> Self {
        Self::Value(Value::Null)
    }

    /// Is a value that evaluates to null
    pub fn is_value_null(&self) -> bool {
        matches!(self, Self::Value(Value::Null))
    }

    /// Returns true if the expression is the `true` boolean expression
    pub fn is_true(&self) -> bool {
        matches!(self, Self::Value(Value::Bool(true)))
    }

    /// Returns `true` if the expression is the `false` boolean expression
    pub fn is_false(&self) -> bool {
        matches!(self, Self::Value(Value::Bool(false)))
    }

    /// Returns true if the expression is a constant value.
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(..))
    }

    pub fn is_arg(&self) -> bool {
        matches!(self, Self::Arg(_))
    }

    /// Returns `true` if the expression is a chain of member reads rooted at a
    /// lambda parameter, e.g. `arg(0).dept.manager`.
    pub fn is_member_chain(&self) -> bool {
        match self {
            Self::Arg(_) => true,
            Self::Member(expr_member) => expr_member.base.is_member_chain(),
            _ => false,
        }
    }

    /// Looks through cast wrappers.
    pub fn strip_cast(&self) -> &Expr {
        match self {
            Self::Cast(expr_cast) => expr_cast.expr.strip_cast(),
            expr => expr,
        }
    }

    pub fn take(&mut self) -> Self {
        std::mem::replace(self, Self::Value(Value::Null))
    }

    pub fn substitute(&mut self, mut input: impl substitute::Input) {
        self.substitute_ref(&mut input);
    }

    pub(crate) fn substitute_ref(&mut self, input: &mut impl substitute::Input) {
        substitute::Substitute::new(input).visit_expr_mut(self);
    }
}

impl Default for Expr {
    fn default() -> Self {
        Self::Value(Value::default())
    }
}

impl Node for Expr {
    fn visit<V: Visit>(&self, mut visit: V) {
        visit.visit_expr(self);
    }

    fn visit_mut<V: VisitMut>(&mut self, mut visit: V) {
        visit.visit_expr_mut(self);
    }
}

// === Conversions ===

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::Value(value.into())
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Value(value.into())
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Self::Value(value.into())
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Self::Value(value.into())
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<&Expr> for Expr {
    fn from(value: &Expr) -> Self {
        value.clone()
    }
}
