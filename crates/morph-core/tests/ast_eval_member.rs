use morph_core::{
    ast::{Binding, ConstInput, Expr, ExprMember, ExprMemberInit, Value},
    schema::ModelId,
};

fn member(base: Expr, name: &str, index: usize) -> Expr {
    ExprMember {
        base: Box::new(base),
        name: name.to_string(),
        index: Some(index),
    }
    .into()
}

fn employee(name: &str, dept: Value) -> Value {
    Value::record_from_vec(vec![name.into(), dept])
}

fn department(name: &str) -> Value {
    Value::record_from_vec(vec![name.into()])
}

// ---------------------------------------------------------------------------
// Reading resolved members
// ---------------------------------------------------------------------------

#[test]
fn member_reads_field_by_position() {
    let expr = member(Expr::arg(0), "name", 0);
    let input = [employee("Alice", Value::Null)];

    assert_eq!(expr.eval(input).unwrap(), Value::from("Alice"));
}

#[test]
fn member_chain_reads_nested_record() {
    let expr = member(member(Expr::arg(0), "dept", 1), "name", 0);
    let input = [employee("Alice", department("Sales"))];

    assert_eq!(expr.eval(input).unwrap(), Value::from("Sales"));
}

#[test]
fn member_of_constant_record() {
    let expr = member(Expr::Value(department("Ops")), "name", 0);
    assert_eq!(expr.eval(ConstInput::new()).unwrap(), Value::from("Ops"));
}

#[test]
fn null_field_reads_as_null() {
    let expr = member(Expr::arg(0), "dept", 1);
    let input = [employee("Bob", Value::Null)];

    assert_eq!(expr.eval(input).unwrap(), Value::Null);
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[test]
fn member_of_null_is_error() {
    let expr = member(member(Expr::arg(0), "dept", 1), "name", 0);
    let input = [employee("Bob", Value::Null)];

    let err = expr.eval(input).unwrap_err();
    assert!(err.is_expression_evaluation_failed());
    assert!(err.to_string().contains("`name` of null"), "got: {err}");
}

#[test]
fn member_of_scalar_is_error() {
    let expr = member(Expr::from(42i64), "name", 0);
    assert!(expr.eval(ConstInput::new()).is_err());
}

#[test]
fn unresolved_member_is_error() {
    let expr = Expr::arg(0).field("name");
    let input = [employee("Alice", Value::Null)];

    let err = expr.eval(input).unwrap_err();
    assert!(err.to_string().contains("not been resolved"), "got: {err}");
}

#[test]
fn member_out_of_range_is_error() {
    let expr = member(Expr::arg(0), "missing", 7);
    let input = [employee("Alice", Value::Null)];

    assert!(expr.eval(input).is_err());
}

#[test]
fn arg_out_of_range_is_error() {
    let input = [Value::from(1i64)];
    assert!(Expr::arg(1).eval(input).is_err());
}

#[test]
fn arg_without_input_is_error() {
    assert!(Expr::arg(0).eval(ConstInput::new()).is_err());
}

#[test]
fn binding_outside_record_width_is_error() {
    let expr: Expr = ExprMemberInit {
        model: ModelId::of::<()>(),
        bindings: vec![Binding {
            name: "extra".to_string(),
            index: Some(3),
            expr: Expr::from(1i64),
        }],
        width: Some(1),
    }
    .into();

    let err = expr.eval(ConstInput::new()).unwrap_err();
    assert!(err.is_expression_evaluation_failed());
    assert!(err.to_string().contains("`extra`"), "got: {err}");
}
