mod support;
use support::*;

use morph::{
    ast::{Expr, Func, Lambda, Type},
    engine::{resolve, rewrite},
    init, register,
    schema::Schema,
    CompiledMapper, Mapping, Model,
};
use proptest::prelude::*;

fn schema() -> Schema {
    let mut builder = Schema::builder();
    register::<Employee>(&mut builder);
    register::<EmployeeDto>(&mut builder);
    builder.build().unwrap()
}

fn src() -> Expr {
    Expr::arg(0)
}

/// String-typed expressions over an `Employee`, mixing unguarded chains with
/// author-written null checks.
fn string_expr() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![
        Just(src().field("name")),
        Just(src().field("nickname")),
        Just(src().field("dept").field("name")),
        Just(src().field("dept").field("head").field("name")),
        "[a-z]{0,4}".prop_map(Expr::from),
    ];

    leaf.prop_recursive(4, 24, 3, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(lhs, rhs)| Expr::add(lhs, rhs)),
            prop_oneof![
                Just(src().field("nickname")),
                Just(src().field("dept").field("name")),
            ]
            .prop_map(|target| Expr::method(target, Func::ToUppercase, Vec::<Expr>::new())),
            inner.clone().prop_map(|operand| Expr::method(
                Expr::cast(operand, Type::String),
                Func::ToUppercase,
                Vec::<Expr>::new()
            )),
            (inner.clone(), inner.clone()).prop_map(|(lhs, rhs)| Expr::method(
                Expr::add(lhs, rhs),
                Func::Trim,
                Vec::<Expr>::new()
            )),
            (inner.clone(), inner.clone()).prop_map(|(lhs, rhs)| {
                Expr::cond(
                    Expr::method(Expr::add(lhs, rhs), Func::Contains, ["a"]),
                    "yes",
                    "no",
                )
            }),
            (inner.clone(), inner.clone()).prop_map(|(if_true, if_false)| {
                Expr::cond(Expr::ne_null(src().field("dept")), if_true, if_false)
            }),
            (inner.clone(), inner.clone()).prop_map(|(if_true, if_false)| {
                Expr::cond(Expr::eq_null(src().field("nickname")), if_true, if_false)
            }),
            (inner.clone(), inner).prop_map(|(if_true, if_false)| {
                Expr::cond(
                    Expr::or(
                        Expr::eq_null(src().field("dept")),
                        Expr::eq_null(src().field("nickname")),
                    ),
                    if_true,
                    if_false,
                )
            }),
        ]
    })
}

fn employee() -> impl Strategy<Value = Employee> {
    (
        "[A-Z][a-z]{0,6}",
        0i64..100,
        proptest::option::of("[a-z]{1,6}"),
        proptest::option::of((
            "[A-Z][a-z]{0,6}",
            0i64..10_000,
            proptest::option::of("[A-Z][a-z]{0,6}"),
        )),
    )
        .prop_map(|(name, age, nickname, dept)| Employee {
            name,
            age,
            nickname,
            dept: dept.map(|(name, budget, head)| Department {
                name,
                budget,
                head: head.map(|name| Person { name }),
            }),
        })
}

proptest! {
    #[test]
    fn rewrite_is_idempotent(body in string_expr()) {
        let schema = schema();
        let mut lambda = Lambda::new([Type::Model(Employee::id())], body);
        resolve(&schema, &mut lambda).unwrap();

        rewrite(&schema, &mut lambda);
        let once = lambda.clone();

        prop_assert_eq!(rewrite(&schema, &mut lambda), 0);
        prop_assert_eq!(lambda, once);
    }

    #[test]
    fn rewritten_mapping_never_reads_through_null(
        body in string_expr(),
        employee in employee(),
    ) {
        let mapping = Mapping::<Employee, EmployeeDto>::new(|src| {
            init::<EmployeeDto>([
                ("full_name", body.clone()),
                ("dept_name", src.field("dept").field("name")),
            ])
        });
        let mapper = CompiledMapper::new(&mapping).unwrap();

        let dto = mapper.map(Some(&employee)).unwrap().unwrap();
        prop_assert_eq!(
            dto.dept_name,
            employee.dept.as_ref().map(|dept| dept.name.clone())
        );

        let mut updated = EmployeeDto::default();
        mapper.update(Some(&employee), Some(&mut updated)).unwrap();
        prop_assert_eq!(updated.full_name, dto.full_name);
    }
}
