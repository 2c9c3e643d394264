#![allow(unused_variables)]

use super::*;

pub trait VisitMut {
    fn visit_mut<N: Node>(&mut self, i: &mut N)
    where
        Self: Sized,
    {
        i.visit_mut(self);
    }

    fn visit_binding_mut(&mut self, i: &mut Binding) {
        visit_binding_mut(self, i);
    }

    fn visit_expr_mut(&mut self, i: &mut Expr) {
        visit_expr_mut(self, i);
    }

    fn visit_expr_and_mut(&mut self, i: &mut ExprAnd) {
        visit_expr_and_mut(self, i);
    }

    fn visit_expr_arg_mut(&mut self, i: &mut ExprArg) {
        visit_expr_arg_mut(self, i);
    }

    fn visit_expr_binary_op_mut(&mut self, i: &mut ExprBinaryOp) {
        visit_expr_binary_op_mut(self, i);
    }

    fn visit_expr_call_mut(&mut self, i: &mut ExprCall) {
        visit_expr_call_mut(self, i);
    }

    fn visit_expr_cast_mut(&mut self, i: &mut ExprCast) {
        visit_expr_cast_mut(self, i);
    }

    fn visit_expr_cond_mut(&mut self, i: &mut ExprCond) {
        visit_expr_cond_mut(self, i);
    }

    fn visit_expr_construct_mut(&mut self, i: &mut ExprConstruct) {
        visit_expr_construct_mut(self, i);
    }

    fn visit_expr_member_mut(&mut self, i: &mut ExprMember) {
        visit_expr_member_mut(self, i);
    }

    fn visit_expr_member_init_mut(&mut self, i: &mut ExprMemberInit) {
        visit_expr_member_init_mut(self, i);
    }

    fn visit_expr_not_mut(&mut self, i: &mut ExprNot) {
        visit_expr_not_mut(self, i);
    }

    fn visit_expr_or_mut(&mut self, i: &mut ExprOr) {
        visit_expr_or_mut(self, i);
    }

    fn visit_lambda_mut(&mut self, i: &mut Lambda) {
        visit_lambda_mut(self, i);
    }

    fn visit_value_mut(&mut self, i: &mut Value) {
        visit_value_mut(self, i);
    }
}

impl<V: VisitMut> VisitMut for &mut V {
    fn visit_binding_mut(&mut self, i: &mut Binding) {
        VisitMut::visit_binding_mut(&mut **self, i);
    }

    fn visit_expr_mut(&mut self, i: &mut Expr) {
        VisitMut::visit_expr_mut(&mut **self, i);
    }

    fn visit_expr_and_mut(&mut self, i: &mut ExprAnd) {
        VisitMut::visit_expr_and_mut(&mut **self, i);
    }

    fn visit_expr_arg_mut(&mut self, i: &mut ExprArg) {
        VisitMut::visit_expr_arg_mut(&mut **self, i);
    }

    fn visit_expr_binary_op_mut(&mut self, i: &mut ExprBinaryOp) {
        VisitMut::visit_expr_binary_op_mut(&mut **self, i);
    }

    fn visit_expr_call_mut(&mut self, i: &mut ExprCall) {
        VisitMut::visit_expr_call_mut(&mut **self, i);
    }

    fn visit_expr_cast_mut(&mut self, i: &mut ExprCast) {
        VisitMut::visit_expr_cast_mut(&mut **self, i);
    }

    fn visit_expr_cond_mut(&mut self, i: &mut ExprCond) {
        VisitMut::visit_expr_cond_mut(&mut **self, i);
    }

    fn visit_expr_construct_mut(&mut self, i: &mut ExprConstruct) {
        VisitMut::visit_expr_construct_mut(&mut **self, i);
    }

    fn visit_expr_member_mut(&mut self, i: &mut ExprMember) {
        VisitMut::visit_expr_member_mut(&mut **self, i);
    }

    fn visit_expr_member_init_mut(&mut self, i: &mut ExprMemberInit) {
        VisitMut::visit_expr_member_init_mut(&mut **self, i);
    }

    fn visit_expr_not_mut(&mut self, i: &mut ExprNot) {
        VisitMut::visit_expr_not_mut(&mut **self, i);
    }

    fn visit_expr_or_mut(&mut self, i: &mut ExprOr) {
        VisitMut::visit_expr_or_mut(&mut **self, i);
    }

    fn visit_lambda_mut(&mut self, i: &mut Lambda) {
        VisitMut::visit_lambda_mut(&mut **self, i);
    }

    fn visit_value_mut(&mut self, i: &mut Value) {
        VisitMut::visit_value_mut(&mut **self, i);
    }
}

pub fn visit_binding_mut<V>(v: &mut V, node: &mut Binding)
where
    V: VisitMut + ?Sized,
{
    v.visit_expr_mut(&mut node.expr);
}

pub fn visit_expr_mut<V>(v: &mut V, node: &mut Expr)
where
    V: VisitMut + ?Sized,
{
    match node {
        Expr::And(expr) => v.visit_expr_and_mut(expr),
        Expr::Arg(expr) => v.visit_expr_arg_mut(expr),
        Expr::BinaryOp(expr) => v.visit_expr_binary_op_mut(expr),
        Expr::Call(expr) => v.visit_expr_call_mut(expr),
        Expr::Cast(expr) => v.visit_expr_cast_mut(expr),
        Expr::Cond(expr) => v.visit_expr_cond_mut(expr),
        Expr::Construct(expr) => v.visit_expr_construct_mut(expr),
        Expr::Member(expr) => v.visit_expr_member_mut(expr),
        Expr::MemberInit(expr) => v.visit_expr_member_init_mut(expr),
        Expr::Not(expr) => v.visit_expr_not_mut(expr),
        Expr::Or(expr) => v.visit_expr_or_mut(expr),
        Expr::Value(expr) => v.visit_value_mut(expr),
    }
}

pub fn visit_expr_and_mut<V>(v: &mut V, node: &mut ExprAnd)
where
    V: VisitMut + ?Sized,
{
    for expr in node {
        v.visit_expr_mut(expr);
    }
}

pub fn visit_expr_arg_mut<V>(v: &mut V, node: &mut ExprArg)
where
    V: VisitMut + ?Sized,
{
}

pub fn visit_expr_binary_op_mut<V>(v: &mut V, node: &mut ExprBinaryOp)
where
    V: VisitMut + ?Sized,
{
    v.visit_expr_mut(&mut node.lhs);
    v.visit_expr_mut(&mut node.rhs);
}

pub fn visit_expr_call_mut<V>(v: &mut V, node: &mut ExprCall)
where
    V: VisitMut + ?Sized,
{
    if let Some(target) = &mut node.target {
        v.visit_expr_mut(target);
    }

    for arg in &mut node.args {
        v.visit_expr_mut(arg);
    }
}

pub fn visit_expr_cast_mut<V>(v: &mut V, node: &mut ExprCast)
where
    V: VisitMut + ?Sized,
{
    v.visit_expr_mut(&mut node.expr);
}

pub fn visit_expr_cond_mut<V>(v: &mut V, node: &mut ExprCond)
where
    V: VisitMut + ?Sized,
{
    v.visit_expr_mut(&mut node.test);
    v.visit_expr_mut(&mut node.if_true);
    v.visit_expr_mut(&mut node.if_false);
}

pub fn visit_expr_construct_mut<V>(v: &mut V, node: &mut ExprConstruct)
where
    V: VisitMut + ?Sized,
{
    for arg in &mut node.args {
        v.visit_expr_mut(arg);
    }
}

pub fn visit_expr_member_mut<V>(v: &mut V, node: &mut ExprMember)
where
    V: VisitMut + ?Sized,
{
    v.visit_expr_mut(&mut node.base);
}

pub fn visit_expr_member_init_mut<V>(v: &mut V, node: &mut ExprMemberInit)
where
    V: VisitMut + ?Sized,
{
    for binding in &mut node.bindings {
        v.visit_binding_mut(binding);
    }
}

pub fn visit_expr_not_mut<V>(v: &mut V, node: &mut ExprNot)
where
    V: VisitMut + ?Sized,
{
    v.visit_expr_mut(&mut node.expr);
}

pub fn visit_expr_or_mut<V>(v: &mut V, node: &mut ExprOr)
where
    V: VisitMut + ?Sized,
{
    for expr in node {
        v.visit_expr_mut(expr);
    }
}

pub fn visit_lambda_mut<V>(v: &mut V, node: &mut Lambda)
where
    V: VisitMut + ?Sized,
{
    v.visit_expr_mut(&mut node.body);
}

pub fn visit_value_mut<V>(v: &mut V, node: &mut Value)
where
    V: VisitMut + ?Sized,
{
}
