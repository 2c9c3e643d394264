#![allow(unused_variables)]

use super::*;

pub trait Visit {
    fn visit<N: Node>(&mut self, i: &N)
    where
        Self: Sized,
    {
        i.visit(self);
    }

    fn visit_binding(&mut self, i: &Binding) {
        visit_binding(self, i);
    }

    fn visit_expr(&mut self, i: &Expr) {
        visit_expr(self, i);
    }

    fn visit_expr_and(&mut self, i: &ExprAnd) {
        visit_expr_and(self, i);
    }

    fn visit_expr_arg(&mut self, i: &ExprArg) {
        visit_expr_arg(self, i);
    }

    fn visit_expr_binary_op(&mut self, i: &ExprBinaryOp) {
        visit_expr_binary_op(self, i);
    }

    fn visit_expr_call(&mut self, i: &ExprCall) {
        visit_expr_call(self, i);
    }

    fn visit_expr_cast(&mut self, i: &ExprCast) {
        visit_expr_cast(self, i);
    }

    fn visit_expr_cond(&mut self, i: &ExprCond) {
        visit_expr_cond(self, i);
    }

    fn visit_expr_construct(&mut self, i: &ExprConstruct) {
        visit_expr_construct(self, i);
    }

    fn visit_expr_member(&mut self, i: &ExprMember) {
        visit_expr_member(self, i);
    }

    fn visit_expr_member_init(&mut self, i: &ExprMemberInit) {
        visit_expr_member_init(self, i);
    }

    fn visit_expr_not(&mut self, i: &ExprNot) {
        visit_expr_not(self, i);
    }

    fn visit_expr_or(&mut self, i: &ExprOr) {
        visit_expr_or(self, i);
    }

    fn visit_lambda(&mut self, i: &Lambda) {
        visit_lambda(self, i);
    }

    fn visit_value(&mut self, i: &Value) {
        visit_value(self, i);
    }
}

impl<V: Visit> Visit for &mut V {
    fn visit_binding(&mut self, i: &Binding) {
        Visit::visit_binding(&mut **self, i);
    }

    fn visit_expr(&mut self, i: &Expr) {
        Visit::visit_expr(&mut **self, i);
    }

    fn visit_expr_and(&mut self, i: &ExprAnd) {
        Visit::visit_expr_and(&mut **self, i);
    }

    fn visit_expr_arg(&mut self, i: &ExprArg) {
        Visit::visit_expr_arg(&mut **self, i);
    }

    fn visit_expr_binary_op(&mut self, i: &ExprBinaryOp) {
        Visit::visit_expr_binary_op(&mut **self, i);
    }

    fn visit_expr_call(&mut self, i: &ExprCall) {
        Visit::visit_expr_call(&mut **self, i);
    }

    fn visit_expr_cast(&mut self, i: &ExprCast) {
        Visit::visit_expr_cast(&mut **self, i);
    }

    fn visit_expr_cond(&mut self, i: &ExprCond) {
        Visit::visit_expr_cond(&mut **self, i);
    }

    fn visit_expr_construct(&mut self, i: &ExprConstruct) {
        Visit::visit_expr_construct(&mut **self, i);
    }

    fn visit_expr_member(&mut self, i: &ExprMember) {
        Visit::visit_expr_member(&mut **self, i);
    }

    fn visit_expr_member_init(&mut self, i: &ExprMemberInit) {
        Visit::visit_expr_member_init(&mut **self, i);
    }

    fn visit_expr_not(&mut self, i: &ExprNot) {
        Visit::visit_expr_not(&mut **self, i);
    }

    fn visit_expr_or(&mut self, i: &ExprOr) {
        Visit::visit_expr_or(&mut **self, i);
    }

    fn visit_lambda(&mut self, i: &Lambda) {
        Visit::visit_lambda(&mut **self, i);
    }

    fn visit_value(&mut self, i: &Value) {
        Visit::visit_value(&mut **self, i);
    }
}

pub fn visit_binding<V>(v: &mut V, node: &Binding)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.expr);
}

pub fn visit_expr<V>(v: &mut V, node: &Expr)
where
    V: Visit + ?Sized,
{
    match node {
        Expr::And(expr) => v.visit_expr_and(expr),
        Expr::Arg(expr) => v.visit_expr_arg(expr),
        Expr::BinaryOp(expr) => v.visit_expr_binary_op(expr),
        Expr::Call(expr) => v.visit_expr_call(expr),
        Expr::Cast(expr) => v.visit_expr_cast(expr),
        Expr::Cond(expr) => v.visit_expr_cond(expr),
        Expr::Construct(expr) => v.visit_expr_construct(expr),
        Expr::Member(expr) => v.visit_expr_member(expr),
        Expr::MemberInit(expr) => v.visit_expr_member_init(expr),
        Expr::Not(expr) => v.visit_expr_not(expr),
        Expr::Or(expr) => v.visit_expr_or(expr),
        Expr::Value(expr) => v.visit_value(expr),
    }
}

pub fn visit_expr_and<V>(v: &mut V, node: &ExprAnd)
where
    V: Visit + ?Sized,
{
    for expr in node {
        v.visit_expr(expr);
    }
}

pub fn visit_expr_arg<V>(v: &mut V, node: &ExprArg)
where
    V: Visit + ?Sized,
{
}

pub fn visit_expr_binary_op<V>(v: &mut V, node: &ExprBinaryOp)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.lhs);
    v.visit_expr(&node.rhs);
}

pub fn visit_expr_call<V>(v: &mut V, node: &ExprCall)
where
    V: Visit + ?Sized,
{
    if let Some(target) = &node.target {
        v.visit_expr(target);
    }

    for arg in &node.args {
        v.visit_expr(arg);
    }
}

pub fn visit_expr_cast<V>(v: &mut V, node: &ExprCast)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.expr);
}

pub fn visit_expr_cond<V>(v: &mut V, node: &ExprCond)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.test);
    v.visit_expr(&node.if_true);
    v.visit_expr(&node.if_false);
}

pub fn visit_expr_construct<V>(v: &mut V, node: &ExprConstruct)
where
    V: Visit + ?Sized,
{
    for arg in &node.args {
        v.visit_expr(arg);
    }
}

pub fn visit_expr_member<V>(v: &mut V, node: &ExprMember)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.base);
}

pub fn visit_expr_member_init<V>(v: &mut V, node: &ExprMemberInit)
where
    V: Visit + ?Sized,
{
    for binding in &node.bindings {
        v.visit_binding(binding);
    }
}

pub fn visit_expr_not<V>(v: &mut V, node: &ExprNot)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.expr);
}

pub fn visit_expr_or<V>(v: &mut V, node: &ExprOr)
where
    V: Visit + ?Sized,
{
    for expr in node {
        v.visit_expr(expr);
    }
}

pub fn visit_lambda<V>(v: &mut V, node: &Lambda)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.body);
}

pub fn visit_value<V>(v: &mut V, node: &Value)
where
    V: Visit + ?Sized,
{
}
