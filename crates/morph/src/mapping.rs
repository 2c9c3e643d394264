use crate::Model;

use morph_core::{
    ast::{Binding, Expr},
    schema::ModelId,
};

use std::{fmt, marker::PhantomData};

/// A declarative description of how to build a `D` from an `S`.
///
/// The body reads the source through `arg(0)` and must produce a `D`, ideally
/// through an object initializer so that in-place updates are available.
///
/// ```
/// # use morph::{init, Mapping, Model, Result};
/// # use morph::ast::{Value, ValueRecord};
/// # use morph::schema;
/// # #[derive(Default)] struct User { name: String }
/// # #[derive(Default)] struct UserDto { display_name: String }
/// # impl Model for User {
/// #     fn schema() -> schema::Model {
/// #         schema::Model::new(Self::id(), "User").with_field("name", morph::ast::Type::String)
/// #     }
/// #     fn to_value(&self) -> ValueRecord { ValueRecord::from_vec(vec![self.name.clone().into()]) }
/// #     fn load(_: ValueRecord) -> Result<Self> { unimplemented!() }
/// #     fn assign(&mut self, _: usize, _: Value) -> Result<()> { unimplemented!() }
/// # }
/// # impl Model for UserDto {
/// #     fn schema() -> schema::Model {
/// #         schema::Model::new(Self::id(), "UserDto").with_field("display_name", morph::ast::Type::String)
/// #     }
/// #     fn to_value(&self) -> ValueRecord { unimplemented!() }
/// #     fn load(_: ValueRecord) -> Result<Self> { unimplemented!() }
/// #     fn assign(&mut self, _: usize, _: Value) -> Result<()> { unimplemented!() }
/// # }
/// let mapping = Mapping::<User, UserDto>::new(|user| {
///     init::<UserDto>([("display_name", user.field("name"))])
/// });
///
/// assert_eq!(
///     mapping.body().to_string(),
///     "new { display_name = arg(0).name }"
/// );
/// ```
pub struct Mapping<S, D> {
    body: Expr,
    _p: PhantomData<fn(&S) -> D>,
}

/// The mapping source, `arg(0)` of the mapping body.
#[derive(Debug, Clone, Copy)]
pub struct Param {
    _p: (),
}

impl<S: Model, D: Model> Mapping<S, D> {
    /// Creates a mapping from a function that builds the body from the source
    /// parameter.
    pub fn new(f: impl FnOnce(Param) -> Expr) -> Mapping<S, D> {
        Mapping::from_expr(f(Param { _p: () }))
    }

    /// Creates a mapping from a body that reads the source as `arg(0)`.
    pub fn from_expr(body: impl Into<Expr>) -> Mapping<S, D> {
        Mapping {
            body: body.into(),
            _p: PhantomData,
        }
    }

    pub fn body(&self) -> &Expr {
        &self.body
    }

    pub fn source(&self) -> ModelId {
        S::id()
    }

    pub fn destination(&self) -> ModelId {
        D::id()
    }
}

impl Param {
    pub fn expr(self) -> Expr {
        Expr::arg(0)
    }

    /// Reads member `name` of the source.
    pub fn field(self, name: impl Into<String>) -> Expr {
        self.expr().field(name)
    }
}

impl From<Param> for Expr {
    fn from(value: Param) -> Self {
        value.expr()
    }
}

impl<S, D> Clone for Mapping<S, D> {
    fn clone(&self) -> Self {
        Mapping {
            body: self.body.clone(),
            _p: PhantomData,
        }
    }
}

impl<S, D> fmt::Debug for Mapping<S, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapping")
            .field("source", &std::any::type_name::<S>())
            .field("destination", &std::any::type_name::<D>())
            .field("body", &self.body)
            .finish()
    }
}

/// Object initializer for `D`: `new D { name = expr, ... }`.
pub fn init<D: Model>(bindings: impl IntoIterator<Item = impl Into<Binding>>) -> Expr {
    Expr::member_init(D::id(), bindings)
}

/// Positional constructor call for `D`, one argument per field.
pub fn construct<D: Model>(args: impl IntoIterator<Item = impl Into<Expr>>) -> Expr {
    Expr::construct(D::id(), args)
}
