use super::{Expr, Lambda, Type};

use std::fmt;

// Binding strength, loosest first. Operands of a node that bind more loosely
// than the node requires are parenthesized.
const COND: u8 = 1;
const OR: u8 = 2;
const AND: u8 = 3;
const CMP: u8 = 4;
const ADD: u8 = 5;
const UNARY: u8 = 6;
const ATOM: u8 = 7;

impl Expr {
    fn precedence(&self) -> u8 {
        match self {
            Expr::Cond(_) => COND,
            Expr::Or(_) => OR,
            Expr::And(_) => AND,
            Expr::BinaryOp(expr_binary_op) if expr_binary_op.op.is_comparison() => CMP,
            Expr::BinaryOp(_) => ADD,
            Expr::Not(_) | Expr::Cast(_) => UNARY,
            _ => ATOM,
        }
    }
}

struct Operand<'a>(&'a Expr, u8);

impl fmt::Display for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Operand(expr, min) = *self;

        if expr.precedence() < min {
            write!(f, "({expr})")
        } else {
            write!(f, "{expr}")
        }
    }
}

struct Join<'a>(&'a [Expr], &'static str, u8);

impl fmt::Display for Join<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Join(operands, sep, min) = *self;

        for (i, operand) in operands.iter().enumerate() {
            if i > 0 {
                f.write_str(sep)?;
            }
            write!(f, "{}", Operand(operand, min))?;
        }

        Ok(())
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::And(expr_and) => write!(f, "{}", Join(&expr_and.operands, " && ", AND + 1)),
            Expr::Arg(expr_arg) => write!(f, "arg({})", expr_arg.position),
            Expr::BinaryOp(expr_binary_op) => {
                let (lhs_min, rhs_min) = if expr_binary_op.op.is_comparison() {
                    (CMP + 1, CMP + 1)
                } else {
                    (ADD, ADD + 1)
                };

                write!(
                    f,
                    "{} {} {}",
                    Operand(&expr_binary_op.lhs, lhs_min),
                    expr_binary_op.op,
                    Operand(&expr_binary_op.rhs, rhs_min)
                )
            }
            Expr::Call(expr_call) => {
                if let Some(target) = &expr_call.target {
                    write!(f, "{}.", Operand(target, ATOM))?;
                }
                write!(f, "{}({})", expr_call.func, Join(&expr_call.args, ", ", COND))
            }
            Expr::Cast(expr_cast) => {
                write!(f, "{} as {}", Operand(&expr_cast.expr, ATOM), TypeName(&expr_cast.ty))
            }
            Expr::Cond(expr_cond) => write!(
                f,
                "{} ? {} : {}",
                Operand(&expr_cond.test, OR),
                Operand(&expr_cond.if_true, OR),
                Operand(&expr_cond.if_false, OR)
            ),
            Expr::Construct(expr_construct) => {
                write!(f, "new({})", Join(&expr_construct.args, ", ", COND))
            }
            Expr::Member(expr_member) => {
                write!(f, "{}.{}", Operand(&expr_member.base, ATOM), expr_member.name)
            }
            Expr::MemberInit(expr_member_init) => {
                if expr_member_init.bindings.is_empty() {
                    return f.write_str("new {}");
                }

                f.write_str("new { ")?;
                for (i, binding) in expr_member_init.bindings.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{} = {}", binding.name, binding.expr)?;
                }
                f.write_str(" }")
            }
            Expr::Not(expr_not) => write!(f, "!{}", Operand(&expr_not.expr, UNARY)),
            Expr::Or(expr_or) => write!(f, "{}", Join(&expr_or.operands, " || ", OR + 1)),
            Expr::Value(value) => write!(f, "{value}"),
        }
    }
}

impl fmt::Display for Lambda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("|")?;
        for i in 0..self.params.len() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "arg({i})")?;
        }
        write!(f, "| {}", self.body)
    }
}

struct TypeName<'a>(&'a Type);

impl fmt::Display for TypeName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Type::Bool => f.write_str("bool"),
            Type::I64 => f.write_str("i64"),
            Type::F64 => f.write_str("f64"),
            Type::String => f.write_str("String"),
            Type::Model(_) => f.write_str("Model"),
            Type::List(item) => write!(f, "Vec<{}>", TypeName(item)),
            Type::Option(inner) => write!(f, "Option<{}>", TypeName(inner)),
            Type::Null => f.write_str("null"),
            Type::Unknown => f.write_str("_"),
        }
    }
}
