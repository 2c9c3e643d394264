mod binding;
pub use binding::Binding;

mod eval;

mod expr;
pub use expr::Expr;

mod expr_and;
pub use expr_and::ExprAnd;

mod expr_arg;
pub use expr_arg::ExprArg;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_call;
pub use expr_call::ExprCall;

mod expr_cast;
pub use expr_cast::ExprCast;

mod expr_cond;
pub use expr_cond::ExprCond;

mod expr_construct;
pub use expr_construct::ExprConstruct;

mod expr_member;
pub use expr_member::ExprMember;

mod expr_member_init;
pub use expr_member_init::ExprMemberInit;

mod expr_not;
pub use expr_not::ExprNot;

mod expr_or;
pub use expr_or::ExprOr;

mod fmt;

mod func;
pub use func::Func;

mod infer;

mod input;
pub use input::{ConstInput, Input};

mod lambda;
pub use lambda::Lambda;

mod node;
pub use node::Node;

mod op_binary;
pub use op_binary::BinaryOp;

pub mod substitute;

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;

mod value_record;
pub use value_record::ValueRecord;

pub mod visit;
pub use visit::Visit;

pub mod visit_mut;
pub use visit_mut::VisitMut;
