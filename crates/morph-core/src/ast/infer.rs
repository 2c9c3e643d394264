use super::{BinaryOp, Expr, Type};
use crate::Schema;

impl Expr {
    /// Infers the type of the expression given the types of the lambda
    /// parameters. Returns [`Type::Unknown`] for parts that cannot be typed.
    pub fn infer_ty(&self, schema: &Schema, args: &[Type]) -> Type {
        match self {
            Expr::And(_) | Expr::Or(_) => Type::Bool,
            Expr::Arg(expr_arg) => args.get(expr_arg.position).cloned().unwrap_or(Type::Unknown),
            Expr::BinaryOp(expr_binary_op) => match expr_binary_op.op {
                BinaryOp::Add | BinaryOp::Sub => {
                    let lhs = expr_binary_op.lhs.infer_ty(schema, args);
                    let rhs = expr_binary_op.rhs.infer_ty(schema, args);

                    if matches!(expr_binary_op.op, BinaryOp::Add) && is_concat(&lhs, &rhs) {
                        // A null side is skipped, so only two nulls concatenate to null
                        if lhs == Type::String || rhs == Type::String {
                            Type::String
                        } else {
                            Type::option(Type::String)
                        }
                    } else {
                        lhs.unify(rhs)
                    }
                }
                _ => Type::Bool,
            },
            Expr::Call(expr_call) => {
                let target = expr_call
                    .target
                    .as_ref()
                    .map(|target| target.infer_ty(schema, args));
                let arg_tys: Vec<_> = expr_call
                    .args
                    .iter()
                    .map(|arg| arg.infer_ty(schema, args))
                    .collect();

                expr_call.func.ret_ty(target.as_ref(), &arg_tys)
            }
            Expr::Cast(expr_cast) => {
                if expr_cast.expr.infer_ty(schema, args).is_nullable() {
                    Type::option(expr_cast.ty.clone())
                } else {
                    expr_cast.ty.clone()
                }
            }
            Expr::Cond(expr_cond) => {
                let if_true = expr_cond.if_true.infer_ty(schema, args);
                let if_false = expr_cond.if_false.infer_ty(schema, args);
                if_true.unify(if_false)
            }
            Expr::Construct(expr_construct) => Type::Model(expr_construct.model),
            Expr::Member(expr_member) => {
                let base = expr_member.base.infer_ty(schema, args);

                let Some(model) = base.as_model().and_then(|id| schema.get_model(id)) else {
                    return Type::Unknown;
                };

                let field = match expr_member.index {
                    Some(index) => model.fields.get(index),
                    None => model.field_by_name(&expr_member.name),
                };

                field.map(|field| field.ty.clone()).unwrap_or(Type::Unknown)
            }
            Expr::MemberInit(expr_member_init) => Type::Model(expr_member_init.model),
            Expr::Not(expr_not) => {
                if expr_not.expr.infer_ty(schema, args).is_nullable() {
                    Type::option(Type::Bool)
                } else {
                    Type::Bool
                }
            }
            Expr::Value(value) => value.infer_ty(),
        }
    }
}

fn is_concat(lhs: &Type, rhs: &Type) -> bool {
    lhs.strip_option() == &Type::String || rhs.strip_option() == &Type::String
}
