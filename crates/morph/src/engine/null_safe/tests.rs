use super::*;

use crate::engine::resolve;
use morph_core::{
    ast::Func,
    schema::{Model, ModelId},
};
use pretty_assertions::assert_eq;

struct Address;
struct Department;
struct Employee;
struct Person;

fn schema() -> Schema {
    let person = ModelId::of::<Person>();
    let department = ModelId::of::<Department>();
    let address = ModelId::of::<Address>();

    let mut builder = Schema::builder();
    builder.register(
        Model::new(person, "Person")
            .with_field("name", Type::String)
            .with_field("nickname", Type::option(Type::String)),
    );
    builder.register(
        Model::new(department, "Department")
            .with_field("name", Type::String)
            .with_field("budget", Type::I64)
            .with_field("head", Type::option(person)),
    );
    builder.register(Model::new(address, "Address").with_field("city", Type::String));
    builder.register(
        Model::new(ModelId::of::<Employee>(), "Employee")
            .with_field("name", Type::String)
            .with_field("age", Type::I64)
            .with_field("dept", Type::option(department))
            .with_field("home", address)
            .with_field("nickname", Type::option(Type::String)),
    );
    builder.build().unwrap()
}

fn src() -> Expr {
    Expr::arg(0)
}

fn resolved(body: Expr) -> (Schema, Lambda) {
    let schema = schema();
    let mut lambda = Lambda::new([Type::Model(ModelId::of::<Employee>())], body);
    resolve(&schema, &mut lambda).unwrap();
    (schema, lambda)
}

/// Rewrites `body` and checks that a second rewrite changes nothing.
fn rewrite_body(body: Expr) -> (String, usize) {
    let (schema, mut lambda) = resolved(body);
    let guards = rewrite(&schema, &mut lambda);

    let mut again = lambda.clone();
    assert_eq!(rewrite(&schema, &mut again), 0);
    assert_eq!(again, lambda);

    (lambda.body.to_string(), guards)
}

#[test]
fn unguarded_access_is_guarded() {
    let (rewritten, guards) = rewrite_body(src().field("dept").field("name"));

    assert_eq!(rewritten, "arg(0).dept != null ? arg(0).dept.name : null");
    assert_eq!(guards, 1);
}

#[test]
fn author_guard_is_left_alone() {
    let body = Expr::cond(
        Expr::ne_null(src().field("dept")),
        src().field("dept").field("name"),
        Expr::null(),
    );
    let (rewritten, guards) = rewrite_body(body);

    assert_eq!(rewritten, "arg(0).dept != null ? arg(0).dept.name : null");
    assert_eq!(guards, 0);
}

#[test]
fn mirrored_author_guard_is_left_alone() {
    let body = Expr::cond(
        Expr::ne(Expr::null(), src().field("dept")),
        src().field("dept").field("name"),
        "none",
    );
    let (rewritten, guards) = rewrite_body(body);

    assert_eq!(rewritten, "null != arg(0).dept ? arg(0).dept.name : \"none\"");
    assert_eq!(guards, 0);
}

#[test]
fn every_nullable_link_is_tested_innermost_first() {
    let (rewritten, _) = rewrite_body(src().field("dept").field("head").field("name"));

    assert_eq!(
        rewritten,
        "arg(0).dept != null && arg(0).dept.head != null ? arg(0).dept.head.name : null"
    );
}

#[test]
fn value_typed_member_falls_back_to_zero() {
    let (rewritten, _) = rewrite_body(src().field("dept").field("budget"));
    assert_eq!(rewritten, "arg(0).dept != null ? arg(0).dept.budget : 0");
}

#[test]
fn non_nullable_bases_are_not_guarded() {
    let (rewritten, guards) = rewrite_body(src().field("home").field("city"));
    assert_eq!(rewritten, "arg(0).home.city");
    assert_eq!(guards, 0);

    let (rewritten, guards) = rewrite_body(src().field("name"));
    assert_eq!(rewritten, "arg(0).name");
    assert_eq!(guards, 0);
}

#[test]
fn method_receiver_is_guarded_like_a_member_base() {
    let body = Expr::method(
        src().field("dept").field("name"),
        Func::ToUppercase,
        Vec::<Expr>::new(),
    );
    let (rewritten, _) = rewrite_body(body);

    assert_eq!(
        rewritten,
        "arg(0).dept != null ? arg(0).dept.name.to_uppercase() : null"
    );
}

#[test]
fn nullable_receiver_itself_is_guarded() {
    let body = Expr::method(
        src().field("dept").field("head").field("nickname"),
        Func::Trim,
        Vec::<Expr>::new(),
    );
    let (rewritten, _) = rewrite_body(body);

    assert_eq!(
        rewritten,
        "arg(0).dept != null && arg(0).dept.head != null && arg(0).dept.head.nickname != null \
         ? arg(0).dept.head.nickname.trim() : null"
    );
}

#[test]
fn cast_receiver_of_a_nullable_value_is_guarded() {
    let body = Expr::method(
        Expr::cast(src().field("nickname"), Type::String),
        Func::ToUppercase,
        Vec::<Expr>::new(),
    );
    let (rewritten, guards) = rewrite_body(body);

    assert_eq!(
        rewritten,
        "arg(0).nickname as String != null ? (arg(0).nickname as String).to_uppercase() : null"
    );
    assert_eq!(guards, 1);
}

#[test]
fn cast_receiver_of_a_non_null_value_is_not_guarded() {
    let body = Expr::method(
        Expr::cast(src().field("age"), Type::String),
        Func::Trim,
        Vec::<Expr>::new(),
    );
    let (rewritten, guards) = rewrite_body(body);

    assert_eq!(rewritten, "(arg(0).age as String).trim()");
    assert_eq!(guards, 0);
}

#[test]
fn concatenation_with_a_non_null_string_is_not_guarded() {
    let body = Expr::method(
        Expr::add(src().field("nickname"), src().field("name")),
        Func::ToUppercase,
        Vec::<Expr>::new(),
    );
    let (rewritten, guards) = rewrite_body(body);

    assert_eq!(rewritten, "(arg(0).nickname + arg(0).name).to_uppercase()");
    assert_eq!(guards, 0);
}

#[test]
fn concatenation_of_nullable_strings_is_guarded() {
    let body = Expr::method(
        Expr::add(src().field("nickname"), src().field("dept").field("name")),
        Func::Contains,
        ["x"],
    );
    let (rewritten, guards) = rewrite_body(body);

    assert_eq!(
        rewritten,
        "arg(0).nickname + (arg(0).dept != null ? arg(0).dept.name : null) != null \
         ? (arg(0).nickname + (arg(0).dept != null ? arg(0).dept.name : null)).contains(\"x\") \
         : false"
    );
    assert_eq!(guards, 2);
}

#[test]
fn call_arguments_are_rewritten_independently() {
    let body = Expr::method(
        src().field("name"),
        Func::Contains,
        [src().field("dept").field("name")],
    );
    let (rewritten, guards) = rewrite_body(body);

    assert_eq!(
        rewritten,
        "arg(0).name.contains(arg(0).dept != null ? arg(0).dept.name : null)"
    );
    assert_eq!(guards, 1);
}

#[test]
fn disjunction_of_null_tests_proves_the_else_branch() {
    let body = Expr::cond(
        Expr::or(
            Expr::eq_null(src().field("dept")),
            Expr::eq_null(src().field("dept").field("head")),
        ),
        "nobody",
        src().field("dept").field("head").field("name"),
    );
    let (rewritten, guards) = rewrite_body(body);

    assert_eq!(
        rewritten,
        "arg(0).dept == null || arg(0).dept.head == null ? \"nobody\" : arg(0).dept.head.name"
    );
    assert_eq!(guards, 0);
}

#[test]
fn conjunction_test_is_not_rewritten() {
    let body = Expr::cond(
        Expr::and(
            Expr::ne_null(src().field("dept")),
            Expr::ne_null(src().field("dept").field("head")),
        ),
        src().field("dept").field("head").field("name"),
        Expr::null(),
    );
    let (rewritten, guards) = rewrite_body(body);

    assert_eq!(
        rewritten,
        "arg(0).dept != null && arg(0).dept.head != null ? arg(0).dept.head.name : null"
    );
    assert_eq!(guards, 0);
}

#[test]
fn partial_author_guard_gets_the_missing_link() {
    let body = Expr::cond(
        Expr::ne_null(src().field("dept")),
        src().field("dept").field("head").field("name"),
        Expr::null(),
    );
    let (rewritten, guards) = rewrite_body(body);

    assert_eq!(
        rewritten,
        "arg(0).dept != null ? (arg(0).dept.head != null ? arg(0).dept.head.name : null) : null"
    );
    assert_eq!(guards, 1);
}

#[test]
fn proof_does_not_leak_into_the_other_branch() {
    let body = Expr::cond(
        Expr::ne_null(src().field("dept")),
        src().field("dept").field("name"),
        src().field("dept").field("name"),
    );
    let (rewritten, guards) = rewrite_body(body);

    assert_eq!(
        rewritten,
        "arg(0).dept != null ? arg(0).dept.name : (arg(0).dept != null ? arg(0).dept.name : null)"
    );
    assert_eq!(guards, 1);
}

#[test]
fn ordinary_conditional_is_rewritten_throughout() {
    let body = Expr::cond(
        Expr::gt(src().field("dept").field("budget"), 100i64),
        src().field("dept").field("name"),
        "small",
    );
    let (rewritten, guards) = rewrite_body(body);

    assert_eq!(
        rewritten,
        "(arg(0).dept != null ? arg(0).dept.budget : 0) > 100 \
         ? (arg(0).dept != null ? arg(0).dept.name : null) : \"small\""
    );
    assert_eq!(guards, 2);
}

#[test]
fn null_check_on_an_unrelated_base_is_not_trusted() {
    // The test mentions `head` but the branch reads through `dept`
    let body = Expr::cond(
        Expr::ne_null(src().field("dept").field("head")),
        "headed",
        src().field("dept").field("name"),
    );
    let (rewritten, guards) = rewrite_body(body);

    assert_eq!(
        rewritten,
        "(arg(0).dept != null ? arg(0).dept.head : null) != null \
         ? \"headed\" : (arg(0).dept != null ? arg(0).dept.name : null)"
    );
    assert_eq!(guards, 2);
}

#[test]
fn bindings_are_rewritten_in_place() {
    struct Dto;

    let schema = {
        let mut builder = Schema::builder();
        for model in schema().models() {
            builder.register(model.clone());
        }
        builder.register(
            Model::new(ModelId::of::<Dto>(), "Dto")
                .with_field("full_name", Type::String)
                .with_field("dept_name", Type::String)
                .with_field("head_name", Type::String),
        );
        builder.build().unwrap()
    };

    let mut lambda = Lambda::new(
        [Type::Model(ModelId::of::<Employee>())],
        Expr::member_init(
            ModelId::of::<Dto>(),
            [
                ("full_name", src().field("name")),
                ("dept_name", src().field("dept").field("name")),
                ("head_name", src().field("dept").field("head").field("name")),
            ],
        ),
    );
    resolve(&schema, &mut lambda).unwrap();

    assert_eq!(rewrite(&schema, &mut lambda), 2);
    assert_eq!(
        lambda.body.to_string(),
        "new { full_name = arg(0).name, \
         dept_name = arg(0).dept != null ? arg(0).dept.name : null, \
         head_name = arg(0).dept != null && arg(0).dept.head != null ? arg(0).dept.head.name : null }"
    );
}
