use morph_core::{
    ast::{Expr, Value, ValueRecord},
    Error, Result,
};

use std::sync::Arc;

/// A compiled expression. Takes the lambda arguments by position.
pub(crate) type Thunk = Arc<dyn Fn(&[Value]) -> Result<Value> + Send + Sync>;

/// Compiles a resolved expression into a tree of closures.
///
/// The expression must have been resolved; unresolved member or binding names
/// are reported as malformed.
pub(crate) fn compile(expr: &Expr) -> Result<Thunk> {
    Ok(match expr {
        Expr::And(expr_and) => {
            let operands = compile_all(&expr_and.operands)?;

            thunk(move |args| {
                for operand in &operands {
                    if !operand(args)?.as_condition()? {
                        return Ok(false.into());
                    }
                }
                Ok(true.into())
            })
        }
        Expr::Arg(expr_arg) => {
            let position = expr_arg.position;

            thunk(move |args| {
                args.get(position).cloned().ok_or_else(|| {
                    Error::expression_evaluation_failed(format!(
                        "failed to resolve argument {position}"
                    ))
                })
            })
        }
        Expr::BinaryOp(expr_binary_op) => {
            let op = expr_binary_op.op;
            let lhs = compile(&expr_binary_op.lhs)?;
            let rhs = compile(&expr_binary_op.rhs)?;

            thunk(move |args| op.apply(lhs(args)?, rhs(args)?))
        }
        Expr::Call(expr_call) => {
            let func = expr_call.func;
            let target = expr_call.target.as_deref().map(compile).transpose()?;
            let call_args = compile_all(&expr_call.args)?;

            thunk(move |args| {
                let target = match &target {
                    Some(target) => Some(target(args)?),
                    None => None,
                };
                let values = call_args
                    .iter()
                    .map(|arg| arg(args))
                    .collect::<Result<Vec<_>>>()?;

                func.apply(target, values)
            })
        }
        Expr::Cast(expr_cast) => {
            let ty = expr_cast.ty.clone();
            let inner = compile(&expr_cast.expr)?;

            thunk(move |args| ty.cast(inner(args)?))
        }
        Expr::Cond(expr_cond) => {
            let test = compile(&expr_cond.test)?;
            let if_true = compile(&expr_cond.if_true)?;
            let if_false = compile(&expr_cond.if_false)?;

            thunk(move |args| {
                if test(args)?.as_condition()? {
                    if_true(args)
                } else {
                    if_false(args)
                }
            })
        }
        Expr::Construct(expr_construct) => {
            let fields = compile_all(&expr_construct.args)?;

            thunk(move |args| {
                fields
                    .iter()
                    .map(|field| field(args))
                    .collect::<Result<ValueRecord>>()
                    .map(Value::Record)
            })
        }
        Expr::Member(expr_member) => {
            let Some(index) = expr_member.index else {
                return Err(unresolved("member", &expr_member.name));
            };
            let name = expr_member.name.clone();
            let base = compile(&expr_member.base)?;

            thunk(move |args| base(args)?.into_member(index, &name))
        }
        Expr::MemberInit(expr_member_init) => {
            let Some(width) = expr_member_init.width else {
                return Err(Error::malformed_mapping_expression(
                    "object initializer has not been resolved",
                ));
            };

            let bindings = expr_member_init
                .bindings
                .iter()
                .map(|binding| match binding.index {
                    Some(index) if index < width => Ok((index, compile(&binding.expr)?)),
                    _ => Err(unresolved("binding", &binding.name)),
                })
                .collect::<Result<Vec<_>>>()?;

            thunk(move |args| {
                let mut record = ValueRecord::nulls(width);
                for (index, binding) in &bindings {
                    record[*index] = binding(args)?;
                }
                Ok(record.into())
            })
        }
        Expr::Not(expr_not) => {
            let inner = compile(&expr_not.expr)?;

            thunk(move |args| match inner(args)? {
                Value::Bool(value) => Ok((!value).into()),
                Value::Null => Ok(Value::Null),
                value => Err(Error::expression_evaluation_failed(format!(
                    "cannot negate {:?}",
                    value.infer_ty()
                ))),
            })
        }
        Expr::Or(expr_or) => {
            let operands = compile_all(&expr_or.operands)?;

            thunk(move |args| {
                for operand in &operands {
                    if operand(args)?.as_condition()? {
                        return Ok(true.into());
                    }
                }
                Ok(false.into())
            })
        }
        Expr::Value(value) => {
            let value = value.clone();
            thunk(move |_| Ok(value.clone()))
        }
    })
}

fn thunk<F>(f: F) -> Thunk
where
    F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
{
    Arc::new(f)
}

fn compile_all(exprs: &[Expr]) -> Result<Vec<Thunk>> {
    exprs.iter().map(compile).collect()
}

fn unresolved(what: &str, name: &str) -> Error {
    Error::malformed_mapping_expression(format!("{what} `{name}` has not been resolved"))
}
