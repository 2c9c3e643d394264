use super::{Expr, ExprArg, Value};

/// Supplies lambda arguments during evaluation.
pub trait Input {
    fn resolve_arg(&mut self, expr_arg: &ExprArg) -> Option<Expr> {
        let _ = expr_arg;
        None
    }
}

/// Input for expressions that reference no arguments.
#[derive(Debug, Default)]
pub struct ConstInput {}

impl ConstInput {
    pub fn new() -> ConstInput {
        ConstInput {}
    }
}

impl Input for ConstInput {}

impl Input for &[Value] {
    fn resolve_arg(&mut self, expr_arg: &ExprArg) -> Option<Expr> {
        self.get(expr_arg.position).cloned().map(Expr::Value)
    }
}

impl Input for &Vec<Value> {
    fn resolve_arg(&mut self, expr_arg: &ExprArg) -> Option<Expr> {
        self.get(expr_arg.position).cloned().map(Expr::Value)
    }
}

impl<const N: usize> Input for [Value; N] {
    fn resolve_arg(&mut self, expr_arg: &ExprArg) -> Option<Expr> {
        self.get(expr_arg.position).cloned().map(Expr::Value)
    }
}

impl<I: Input> Input for &mut I {
    fn resolve_arg(&mut self, expr_arg: &ExprArg) -> Option<Expr> {
        (**self).resolve_arg(expr_arg)
    }
}
