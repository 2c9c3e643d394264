use super::{visit_mut, Expr, ExprArg};

/// Supplies replacements for arguments during substitution.
pub trait Input {
    fn resolve_arg(&mut self, expr_arg: &ExprArg) -> Option<Expr>;
}

/// Substitutes `arg(from)` with `arg(to)`, leaving other arguments untouched.
#[derive(Debug, Clone, Copy)]
pub struct RenameArg {
    pub from: usize,
    pub to: usize,
}

impl Input for RenameArg {
    fn resolve_arg(&mut self, expr_arg: &ExprArg) -> Option<Expr> {
        (expr_arg.position == self.from).then(|| Expr::arg(self.to))
    }
}

pub(crate) struct Substitute<'a, I> {
    input: &'a mut I,
}

impl<'a, I> Substitute<'a, I> {
    pub(crate) fn new(input: &'a mut I) -> Substitute<'a, I> {
        Substitute { input }
    }
}

impl<I> visit_mut::VisitMut for Substitute<'_, I>
where
    I: Input,
{
    fn visit_expr_mut(&mut self, expr: &mut Expr) {
        if let Expr::Arg(expr_arg) = expr {
            if let Some(substitute) = self.input.resolve_arg(expr_arg) {
                *expr = substitute;
            }
        } else {
            visit_mut::visit_expr_mut(self, expr);
        }
    }
}
