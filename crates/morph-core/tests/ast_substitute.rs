use morph_core::ast::{substitute::RenameArg, ConstInput, Expr, ExprArg, Value};

#[test]
fn rename_arg_rewrites_matching_position() {
    let mut expr = Expr::eq(Expr::arg(0).field("name"), Expr::arg(1).field("name"));
    expr.substitute(RenameArg { from: 0, to: 1 });

    assert_eq!(
        expr,
        Expr::eq(Expr::arg(1).field("name"), Expr::arg(1).field("name"))
    );
}

#[test]
fn rename_arg_reaches_every_node() {
    let mut expr = Expr::cond(
        Expr::ne_null(Expr::arg(0).field("dept")),
        Expr::method(
            Expr::arg(0).field("dept").field("name"),
            morph_core::ast::Func::Contains,
            [Expr::arg(0).field("needle")],
        ),
        Expr::not(Expr::arg(0)),
    );
    expr.substitute(RenameArg { from: 0, to: 3 });

    let rendered = expr.to_string();
    assert!(!rendered.contains("arg(0)"), "got: {rendered}");
    assert_eq!(rendered.matches("arg(3)").count(), 4, "got: {rendered}");
}

struct Bind(Vec<Value>);

impl morph_core::ast::substitute::Input for Bind {
    fn resolve_arg(&mut self, expr_arg: &ExprArg) -> Option<Expr> {
        self.0.get(expr_arg.position).cloned().map(Expr::Value)
    }
}

#[test]
fn substitute_with_values_makes_expression_constant() {
    let mut expr = Expr::add(Expr::arg(0), Expr::arg(1));
    expr.substitute(Bind(vec![Value::I64(2), Value::I64(40)]));

    assert_eq!(expr.eval(ConstInput::new()).unwrap(), Value::I64(42));
}
