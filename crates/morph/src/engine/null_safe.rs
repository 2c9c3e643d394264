#[cfg(test)]
mod tests;

use morph_core::{
    ast::{visit, visit_mut, BinaryOp, Expr, ExprCond, Lambda, Node, Type, Visit, VisitMut},
    Schema,
};

/// Guards member reads and method calls whose receiver may be null.
///
/// An access such as `arg(0).dept.name`, where `dept` is nullable, becomes
/// `arg(0).dept != null ? arg(0).dept.name : null`. Tests are joined with
/// `&&` innermost link first and the fallback is the default value of the
/// access's type.
///
/// Conditionals whose test only compares expressions with null, and whose
/// branches read through at least one of those expressions, are treated as
/// guards written by the author: their test is left alone and the
/// expressions they prove non-null are not guarded again inside the
/// matching branch. The rewriter emits exactly this shape, so rewriting is
/// idempotent.
///
/// Returns the number of guards inserted.
pub fn rewrite(schema: &Schema, lambda: &mut Lambda) -> usize {
    let Lambda { params, body } = lambda;

    let mut null_safe = NullSafe {
        schema,
        params: &params[..],
        proven: vec![],
        guards: 0,
    };

    null_safe.visit_expr_mut(body);
    null_safe.guards
}

struct NullSafe<'a> {
    schema: &'a Schema,
    params: &'a [Type],

    /// Expressions known to be non-null at the current position.
    proven: Vec<Expr>,

    guards: usize,
}

/// What an author-written null check proves in each branch.
struct NullCheck {
    if_true: Vec<Expr>,
    if_false: Vec<Expr>,
}

impl VisitMut for NullSafe<'_> {
    fn visit_expr_mut(&mut self, i: &mut Expr) {
        if let Expr::Cond(expr_cond) = i {
            self.visit_cond(expr_cond);
        } else if receiver(i).is_some() {
            self.visit_access(i);
        } else {
            visit_mut::visit_expr_mut(self, i);
        }
    }
}

impl NullSafe<'_> {
    fn visit_cond(&mut self, expr_cond: &mut ExprCond) {
        let Some(null_check) = self.null_check(expr_cond) else {
            visit_mut::visit_expr_cond_mut(self, expr_cond);
            return;
        };

        self.visit_assuming(&mut expr_cond.if_true, null_check.if_true);
        self.visit_assuming(&mut expr_cond.if_false, null_check.if_false);
    }

    /// Rewrites a member read or method call, guarding every nullable link of
    /// its receiver chain that is not already proven non-null.
    fn visit_access(&mut self, expr: &mut Expr) {
        self.visit_links(expr);

        let mut tests = vec![];
        let mut next = receiver(expr);

        while let Some(base) = next {
            if self.needs_guard(base) {
                tests.push(Expr::ne_null(base.clone()));
            }
            next = receiver(base);
        }

        if tests.is_empty() {
            return;
        }

        tests.reverse();

        let fallback = expr.infer_ty(self.schema, self.params).default_value();
        let access = expr.take();

        *expr = Expr::cond(Expr::and_from_vec(tests), access, fallback);
        self.guards += 1;
    }

    /// Rewrites the parts of an access chain that are not links themselves:
    /// call arguments and the root of the chain.
    fn visit_links(&mut self, expr: &mut Expr) {
        match expr {
            Expr::Member(expr_member) => self.visit_link(&mut expr_member.base),
            Expr::Call(expr_call) => {
                for arg in &mut expr_call.args {
                    self.visit_expr_mut(arg);
                }

                if let Some(target) = &mut expr_call.target {
                    self.visit_link(target);
                }
            }
            _ => {}
        }
    }

    fn visit_link(&mut self, base: &mut Expr) {
        if receiver(base).is_some() {
            self.visit_links(base);
        } else {
            self.visit_expr_mut(base);
        }
    }

    fn needs_guard(&self, base: &Expr) -> bool {
        // Parameters are checked by the mapper before evaluation; literals are
        // the author's responsibility.
        if matches!(base, Expr::Arg(_) | Expr::Value(_)) {
            return false;
        }

        base.infer_ty(self.schema, self.params).is_nullable() && !self.proven.contains(base)
    }

    fn visit_assuming(&mut self, expr: &mut Expr, proven: Vec<Expr>) {
        let depth = self.proven.len();
        self.proven.extend(proven);
        self.visit_expr_mut(expr);
        self.proven.truncate(depth);
    }

    /// Returns the rewritten form of `expr` without touching the guard count.
    fn rewritten(&mut self, expr: &Expr, proven: &[Expr]) -> Expr {
        let guards = self.guards;
        let mut expr = expr.clone();

        self.visit_assuming(&mut expr, proven.to_vec());
        self.guards = guards;
        expr
    }

    /// Classifies `expr_cond` as an author-written null check.
    ///
    /// Both the original and the rewritten form of each compared expression
    /// are matched, so a check keeps being recognized after its branches have
    /// been rewritten.
    fn null_check(&mut self, expr_cond: &ExprCond) -> Option<NullCheck> {
        let mut operands = vec![];

        if !null_comparisons(&expr_cond.test, &mut operands) {
            return None;
        }

        let assumed: Vec<Expr> = operands.iter().map(|operand| (*operand).clone()).collect();
        let forms: Vec<(&Expr, Expr)> = operands
            .iter()
            .map(|operand| (*operand, self.rewritten(operand, &assumed)))
            .collect();

        let guards_a_branch = forms.iter().any(|(operand, rewritten)| {
            [&*expr_cond.if_true, &*expr_cond.if_false]
                .into_iter()
                .any(|branch| is_base_in(operand, branch) || is_base_in(rewritten, branch))
        });

        if !guards_a_branch {
            return None;
        }

        let proven = |holds: bool| -> Vec<Expr> {
            let mut proven = vec![];
            proven_by(&expr_cond.test, holds, &mut proven);

            forms
                .iter()
                .filter(|(operand, _)| proven.contains(operand))
                .flat_map(|(operand, rewritten)| [(*operand).clone(), rewritten.clone()])
                .collect()
        };

        Some(NullCheck {
            if_true: proven(true),
            if_false: proven(false),
        })
    }
}

/// The receiver of a member read or method call.
fn receiver(expr: &Expr) -> Option<&Expr> {
    match expr {
        Expr::Member(expr_member) => Some(&*expr_member.base),
        Expr::Call(expr_call) => expr_call.target.as_deref(),
        _ => None,
    }
}

/// Collects the compared expressions of a test made only of null comparisons
/// joined by `&&` and `||`. Returns `false` for any other shape.
fn null_comparisons<'a>(test: &'a Expr, operands: &mut Vec<&'a Expr>) -> bool {
    match test {
        Expr::BinaryOp(expr_binary_op) => match expr_binary_op.as_null_comparison() {
            Some((_, operand)) => {
                operands.push(operand);
                true
            }
            None => false,
        },
        Expr::And(expr_and) => expr_and
            .operands
            .iter()
            .all(|operand| null_comparisons(operand, operands)),
        Expr::Or(expr_or) => expr_or
            .operands
            .iter()
            .all(|operand| null_comparisons(operand, operands)),
        _ => false,
    }
}

/// Collects the expressions that are non-null whenever `test` evaluates to
/// `holds`.
fn proven_by<'a>(test: &'a Expr, holds: bool, proven: &mut Vec<&'a Expr>) {
    match test {
        Expr::BinaryOp(expr_binary_op) => {
            if let Some((op, operand)) = expr_binary_op.as_null_comparison() {
                if (op == BinaryOp::Ne) == holds {
                    proven.push(operand);
                }
            }
        }
        Expr::And(expr_and) if holds => {
            for operand in &expr_and.operands {
                proven_by(operand, true, proven);
            }
        }
        Expr::Or(expr_or) if !holds => {
            for operand in &expr_or.operands {
                proven_by(operand, false, proven);
            }
        }
        _ => {}
    }
}

/// Returns `true` if `needle` is the receiver of some access in `haystack`.
fn is_base_in(needle: &Expr, haystack: &Expr) -> bool {
    struct FindBase<'a> {
        needle: &'a Expr,
        found: bool,
    }

    impl Visit for FindBase<'_> {
        fn visit_expr(&mut self, i: &Expr) {
            if self.found {
                return;
            }

            if receiver(i) == Some(self.needle) {
                self.found = true;
                return;
            }

            visit::visit_expr(self, i);
        }
    }

    let mut find = FindBase {
        needle,
        found: false,
    };
    haystack.visit(&mut find);
    find.found
}
