use super::{BinaryOp, Expr, ExprMemberInit, Input, Value, ValueRecord};
use crate::{Error, Result};

use std::cmp::Ordering;

impl Expr {
    pub fn eval(&self, mut input: impl Input) -> Result<Value> {
        self.eval_ref(&mut input)
    }

    fn eval_ref(&self, input: &mut impl Input) -> Result<Value> {
        match self {
            Expr::And(expr_and) => {
                debug_assert!(!expr_and.operands.is_empty());

                for operand in &expr_and.operands {
                    if !operand.eval_ref(input)?.as_condition()? {
                        return Ok(false.into());
                    }
                }

                Ok(true.into())
            }
            Expr::Arg(expr_arg) => {
                let Some(expr) = input.resolve_arg(expr_arg) else {
                    return Err(Error::expression_evaluation_failed(format!(
                        "failed to resolve argument {}",
                        expr_arg.position
                    )));
                };
                expr.eval_ref(input)
            }
            Expr::BinaryOp(expr_binary_op) => {
                let lhs = expr_binary_op.lhs.eval_ref(input)?;
                let rhs = expr_binary_op.rhs.eval_ref(input)?;
                expr_binary_op.op.apply(lhs, rhs)
            }
            Expr::Call(expr_call) => {
                let target = match &expr_call.target {
                    Some(target) => Some(target.eval_ref(input)?),
                    None => None,
                };

                let mut args = Vec::with_capacity(expr_call.args.len());
                for arg in &expr_call.args {
                    args.push(arg.eval_ref(input)?);
                }

                expr_call.func.apply(target, args)
            }
            Expr::Cast(expr_cast) => expr_cast.ty.cast(expr_cast.expr.eval_ref(input)?),
            Expr::Cond(expr_cond) => {
                if expr_cond.test.eval_ref(input)?.as_condition()? {
                    expr_cond.if_true.eval_ref(input)
                } else {
                    expr_cond.if_false.eval_ref(input)
                }
            }
            Expr::Construct(expr_construct) => {
                let mut fields = Vec::with_capacity(expr_construct.args.len());
                for arg in &expr_construct.args {
                    fields.push(arg.eval_ref(input)?);
                }
                Ok(Value::record_from_vec(fields))
            }
            Expr::Member(expr_member) => {
                let Some(index) = expr_member.index else {
                    return Err(Error::expression_evaluation_failed(format!(
                        "member `{}` has not been resolved",
                        expr_member.name
                    )));
                };

                expr_member
                    .base
                    .eval_ref(input)?
                    .into_member(index, &expr_member.name)
            }
            Expr::MemberInit(expr_member_init) => {
                let mut record = expr_member_init.empty_record()?;

                for binding in &expr_member_init.bindings {
                    let Some(slot) = binding.index.and_then(|index| record.get_mut(index)) else {
                        return Err(Error::expression_evaluation_failed(format!(
                            "binding `{}` does not address a field of the record",
                            binding.name
                        )));
                    };

                    *slot = binding.expr.eval_ref(input)?;
                }

                Ok(record.into())
            }
            Expr::Not(expr_not) => match expr_not.expr.eval_ref(input)? {
                Value::Bool(value) => Ok((!value).into()),
                Value::Null => Ok(Value::Null),
                value => Err(Error::expression_evaluation_failed(format!(
                    "cannot negate {:?}",
                    value.infer_ty()
                ))),
            },
            Expr::Or(expr_or) => {
                debug_assert!(!expr_or.operands.is_empty());

                for operand in &expr_or.operands {
                    if operand.eval_ref(input)?.as_condition()? {
                        return Ok(true.into());
                    }
                }

                Ok(false.into())
            }
            Expr::Value(value) => Ok(value.clone()),
        }
    }
}

impl ExprMemberInit {
    /// A record with every field of the model set to null.
    pub fn empty_record(&self) -> Result<ValueRecord> {
        let Some(width) = self.width else {
            return Err(Error::expression_evaluation_failed(
                "object initializer has not been resolved",
            ));
        };

        Ok(ValueRecord::nulls(width))
    }
}

impl Value {
    /// Interprets the value as the test of a condition. Null is false.
    pub fn as_condition(&self) -> Result<bool> {
        match self {
            Value::Bool(value) => Ok(*value),
            Value::Null => Ok(false),
            value => Err(Error::expression_evaluation_failed(format!(
                "expected a boolean condition, found {:?}",
                value.infer_ty()
            ))),
        }
    }

    /// Reads the field at `index` of a record value.
    pub fn into_member(self, index: usize, name: &str) -> Result<Value> {
        match self {
            Value::Record(mut record) if index < record.len() => Ok(record.take(index)),
            Value::Record(_) => Err(Error::expression_evaluation_failed(format!(
                "record has no field at position {index} (`{name}`)"
            ))),
            Value::Null => Err(Error::expression_evaluation_failed(format!(
                "cannot read member `{name}` of null"
            ))),
            value => Err(Error::expression_evaluation_failed(format!(
                "cannot read member `{name}` of {:?}",
                value.infer_ty()
            ))),
        }
    }
}

impl BinaryOp {
    /// Applies the operator to already evaluated operands.
    ///
    /// Ordering comparisons involving null are false; arithmetic involving null
    /// is null; `+` concatenates when either side is a string.
    pub fn apply(self, lhs: Value, rhs: Value) -> Result<Value> {
        match self {
            BinaryOp::Eq => Ok((values_eq(&lhs, &rhs)).into()),
            BinaryOp::Ne => Ok((!values_eq(&lhs, &rhs)).into()),
            BinaryOp::Ge => Ok(cmp_ordered(&lhs, &rhs)?.is_some_and(|o| o != Ordering::Less).into()),
            BinaryOp::Gt => Ok(cmp_ordered(&lhs, &rhs)?.is_some_and(|o| o == Ordering::Greater).into()),
            BinaryOp::Le => Ok(cmp_ordered(&lhs, &rhs)?.is_some_and(|o| o != Ordering::Greater).into()),
            BinaryOp::Lt => Ok(cmp_ordered(&lhs, &rhs)?.is_some_and(|o| o == Ordering::Less).into()),
            BinaryOp::Add => add(lhs, rhs),
            BinaryOp::Sub => match (lhs, rhs) {
                (Value::Null, _) | (_, Value::Null) => Ok(Value::Null),
                (Value::I64(lhs), Value::I64(rhs)) => Ok(Value::I64(lhs.wrapping_sub(rhs))),
                (lhs, rhs) => match (as_f64(&lhs), as_f64(&rhs)) {
                    (Some(lhs), Some(rhs)) => Ok(Value::F64(lhs - rhs)),
                    _ => Err(mismatch(self, &lhs, &rhs)),
                },
            },
        }
    }
}

fn values_eq(lhs: &Value, rhs: &Value) -> bool {
    match (lhs, rhs) {
        (Value::I64(lhs), Value::F64(rhs)) | (Value::F64(rhs), Value::I64(lhs)) => {
            (*lhs as f64) == *rhs
        }
        (lhs, rhs) => lhs == rhs,
    }
}

fn add(lhs: Value, rhs: Value) -> Result<Value> {
    match (lhs, rhs) {
        (Value::String(mut lhs), Value::String(rhs)) => {
            lhs.push_str(&rhs);
            Ok(Value::String(lhs))
        }
        (Value::String(lhs), Value::Null) | (Value::Null, Value::String(lhs)) => {
            Ok(Value::String(lhs))
        }
        (Value::Null, _) | (_, Value::Null) => Ok(Value::Null),
        (Value::I64(lhs), Value::I64(rhs)) => Ok(Value::I64(lhs.wrapping_add(rhs))),
        (lhs, rhs) => match (as_f64(&lhs), as_f64(&rhs)) {
            (Some(lhs), Some(rhs)) => Ok(Value::F64(lhs + rhs)),
            _ => Err(mismatch(BinaryOp::Add, &lhs, &rhs)),
        },
    }
}

fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::I64(v) => Some(*v as f64),
        Value::F64(v) => Some(*v),
        _ => None,
    }
}

/// Returns `None` when either side is null.
fn cmp_ordered(lhs: &Value, rhs: &Value) -> Result<Option<Ordering>> {
    Ok(match (lhs, rhs) {
        (Value::Null, _) | (_, Value::Null) => None,
        (Value::I64(lhs), Value::I64(rhs)) => Some(lhs.cmp(rhs)),
        (Value::String(lhs), Value::String(rhs)) => Some(lhs.cmp(rhs)),
        (Value::Bool(lhs), Value::Bool(rhs)) => Some(lhs.cmp(rhs)),
        (lhs, rhs) => match (as_f64(lhs), as_f64(rhs)) {
            (Some(lhs), Some(rhs)) => lhs.partial_cmp(&rhs),
            _ => {
                return Err(Error::expression_evaluation_failed(format!(
                    "cannot compare {:?} with {:?}",
                    lhs.infer_ty(),
                    rhs.infer_ty()
                )))
            }
        },
    })
}

fn mismatch(op: BinaryOp, lhs: &Value, rhs: &Value) -> Error {
    Error::expression_evaluation_failed(format!(
        "cannot apply `{op}` to {:?} and {:?}",
        lhs.infer_ty(),
        rhs.infer_ty()
    ))
}
