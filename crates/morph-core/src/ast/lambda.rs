use super::{Expr, Node, Type, Value, Visit, VisitMut};
use crate::{Result, Schema};

/// An expression together with the types of the parameters it reads.
///
/// `arg(n)` inside `body` refers to `params[n]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Lambda {
    pub params: Vec<Type>,
    pub body: Expr,
}

impl Lambda {
    pub fn new(params: impl IntoIterator<Item = Type>, body: impl Into<Expr>) -> Lambda {
        Lambda {
            params: params.into_iter().collect(),
            body: body.into(),
        }
    }

    pub fn infer_ty(&self, schema: &Schema) -> Type {
        self.body.infer_ty(schema, &self.params)
    }

    /// Evaluates the body with `args` bound to the parameters.
    pub fn call(&self, args: &[Value]) -> Result<Value> {
        if args.len() != self.params.len() {
            return Err(crate::Error::expression_evaluation_failed(format!(
                "lambda takes {} argument(s) but {} were supplied",
                self.params.len(),
                args.len()
            )));
        }

        self.body.eval(args)
    }
}

impl Node for Lambda {
    fn visit<V: Visit>(&self, mut visit: V) {
        visit.visit_expr(&self.body);
    }

    fn visit_mut<V: VisitMut>(&mut self, mut visit: V) {
        visit.visit_expr_mut(&mut self.body);
    }
}
