use morph_core::ast::{substitute::RenameArg, Expr, ExprMember, Lambda};

use std::fmt;

/// One `destination.member = value` operation of an in-place update.
///
/// `target` reads from `arg(0)`, the destination; `value` reads the source
/// as `arg(1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub target: ExprMember,
    pub value: Expr,
}

/// The result of splitting a mapping body into assignments.
#[derive(Debug, Clone, PartialEq)]
pub enum Extracted {
    /// The body is an object initializer; one assignment per binding, in
    /// declaration order.
    Supported(Vec<Assignment>),

    /// The body does not bind members, so no updater can be derived.
    Unsupported,
}

/// Derives in-place assignments from a mapping body.
///
/// The body must be an object initializer, possibly wrapped in casts. Each
/// binding becomes an assignment to the same member of a destination
/// parameter, with the source parameter moved from position 0 to position 1.
/// An initializer without bindings yields an empty but supported list.
pub fn extract(projection: &Lambda) -> Extracted {
    let Expr::MemberInit(expr_member_init) = projection.body.strip_cast() else {
        return Extracted::Unsupported;
    };

    let assignments = expr_member_init
        .bindings
        .iter()
        .map(|binding| {
            let mut value = binding.expr.clone();
            value.substitute(RenameArg { from: 0, to: 1 });

            Assignment {
                target: ExprMember {
                    base: Box::new(Expr::arg(0)),
                    name: binding.name.clone(),
                    index: binding.index,
                },
                value,
            }
        })
        .collect();

    Extracted::Supported(assignments)
}

impl Extracted {
    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Supported(_))
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", Expr::Member(self.target.clone()), self.value)
    }
}
