use morph_core::{
    ast::{Expr, Lambda, Type},
    schema::{Model, ModelId},
    Error, Result, Schema,
};

/// Resolves member and binding names to field positions and checks that the
/// body is well formed.
///
/// Resolution is idempotent: already resolved nodes are checked again against
/// the schema.
pub fn resolve(schema: &Schema, lambda: &mut Lambda) -> Result<()> {
    let Lambda { params, body } = lambda;

    Resolve {
        schema,
        params: &params[..],
    }
    .resolve_expr(body)
}

struct Resolve<'a> {
    schema: &'a Schema,
    params: &'a [Type],
}

impl<'a> Resolve<'a> {
    fn resolve_expr(&mut self, expr: &mut Expr) -> Result<()> {
        match expr {
            Expr::And(expr_and) => {
                for operand in &mut expr_and.operands {
                    self.resolve_expr(operand)?;
                }
            }
            Expr::Arg(expr_arg) => {
                if expr_arg.position >= self.params.len() {
                    return Err(Error::malformed_mapping_expression(format!(
                        "`arg({})` is out of range; the lambda takes {} parameter(s)",
                        expr_arg.position,
                        self.params.len()
                    )));
                }
            }
            Expr::BinaryOp(expr_binary_op) => {
                self.resolve_expr(&mut expr_binary_op.lhs)?;
                self.resolve_expr(&mut expr_binary_op.rhs)?;
            }
            Expr::Call(expr_call) => {
                if let Some(target) = &mut expr_call.target {
                    self.resolve_expr(target)?;
                }

                for arg in &mut expr_call.args {
                    self.resolve_expr(arg)?;
                }

                expr_call
                    .func
                    .verify(expr_call.target.is_some(), expr_call.args.len())?;
            }
            Expr::Cast(expr_cast) => self.resolve_expr(&mut expr_cast.expr)?,
            Expr::Cond(expr_cond) => {
                self.resolve_expr(&mut expr_cond.test)?;
                self.resolve_expr(&mut expr_cond.if_true)?;
                self.resolve_expr(&mut expr_cond.if_false)?;
            }
            Expr::Construct(expr_construct) => {
                for arg in &mut expr_construct.args {
                    self.resolve_expr(arg)?;
                }

                let model = self.model(expr_construct.model)?;

                if model.fields.len() != expr_construct.args.len() {
                    return Err(Error::malformed_mapping_expression(format!(
                        "constructor of `{}` takes {} argument(s) but {} were supplied",
                        model.name,
                        model.fields.len(),
                        expr_construct.args.len()
                    )));
                }

                for (field, arg) in model.fields.iter().zip(&expr_construct.args) {
                    self.check_assignable(model, &field.name, &field.ty, arg)?;
                }
            }
            Expr::Member(expr_member) => {
                self.resolve_expr(&mut expr_member.base)?;

                let base_ty = expr_member.base.infer_ty(self.schema, self.params);

                let Some(model) = base_ty.as_model().and_then(|id| self.schema.get_model(id))
                else {
                    return Err(Error::malformed_mapping_expression(format!(
                        "cannot read member `{}` of `{}`; it is not a model",
                        expr_member.name, expr_member.base
                    )));
                };

                let Some(field) = model.field_by_name(&expr_member.name) else {
                    return Err(Error::malformed_mapping_expression(format!(
                        "unknown member `{}` on `{}`",
                        expr_member.name, model.name
                    )));
                };

                expr_member.index = Some(field.id.index);
            }
            Expr::MemberInit(expr_member_init) => {
                let model = self.model(expr_member_init.model)?;
                let mut seen = vec![false; model.fields.len()];

                for binding in &mut expr_member_init.bindings {
                    self.resolve_expr(&mut binding.expr)?;

                    let Some(field) = model.field_by_name(&binding.name) else {
                        return Err(Error::malformed_mapping_expression(format!(
                            "unknown member `{}` on `{}`",
                            binding.name, model.name
                        )));
                    };

                    if !field.assignable {
                        return Err(Error::malformed_mapping_expression(format!(
                            "member `{}` of `{}` is not assignable",
                            field.name, model.name
                        )));
                    }

                    if std::mem::replace(&mut seen[field.id.index], true) {
                        return Err(Error::malformed_mapping_expression(format!(
                            "member `{}` of `{}` is bound more than once",
                            field.name, model.name
                        )));
                    }

                    self.check_assignable(model, &field.name, &field.ty, &binding.expr)?;
                    binding.index = Some(field.id.index);
                }

                expr_member_init.width = Some(model.fields.len());
            }
            Expr::Not(expr_not) => self.resolve_expr(&mut expr_not.expr)?,
            Expr::Or(expr_or) => {
                for operand in &mut expr_or.operands {
                    self.resolve_expr(operand)?;
                }
            }
            Expr::Value(_) => {}
        }

        Ok(())
    }

    fn model(&self, id: ModelId) -> Result<&'a Model> {
        self.schema.get_model(id).ok_or_else(|| {
            Error::malformed_mapping_expression(format!(
                "model {id:?} is not part of the mapping schema"
            ))
        })
    }

    fn check_assignable(&self, model: &Model, name: &str, ty: &Type, expr: &Expr) -> Result<()> {
        let expr_ty = expr.infer_ty(self.schema, self.params);

        if ty.is_assignable_from(&expr_ty) {
            Ok(())
        } else {
            Err(Error::malformed_mapping_expression(format!(
                "cannot assign `{expr}` of type {expr_ty:?} to member `{name}` of `{}` ({ty:?})",
                model.name
            )))
        }
    }
}
