use super::Value;
use crate::{schema::ModelId, Error, Result};

/// An expression type.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 64-bit integer
    I64,

    /// 64-bit floating point number
    F64,

    /// String type
    String,

    /// An instance of a model
    Model(ModelId),

    /// A list of a single type
    List(Box<Type>),

    /// A value of the inner type, or null
    Option(Box<Type>),

    /// The type of the null literal
    Null,

    /// A type that could not be inferred
    Unknown,
}

impl Type {
    pub fn list(ty: impl Into<Self>) -> Self {
        Self::List(Box::new(ty.into()))
    }

    /// Wraps `ty` so it admits null. Already-nullable types are returned as is.
    pub fn option(ty: impl Into<Self>) -> Self {
        match ty.into() {
            ty @ (Self::Option(_) | Self::Null | Self::Unknown) => ty,
            ty => Self::Option(Box::new(ty)),
        }
    }

    /// Returns `true` if a value of this type may be null.
    ///
    /// Member access through a nullable base is what the null-safety rewrite
    /// guards.
    pub fn is_nullable(&self) -> bool {
        matches!(self, Self::Option(_) | Self::Null)
    }

    pub fn is_model(&self) -> bool {
        matches!(self.strip_option(), Self::Model(_))
    }

    /// Returns the model behind this type, looking through `Option`.
    pub fn as_model(&self) -> Option<ModelId> {
        match self.strip_option() {
            Self::Model(id) => Some(*id),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self.strip_option(), Self::I64 | Self::F64)
    }

    pub fn strip_option(&self) -> &Self {
        match self {
            Self::Option(inner) => inner,
            ty => ty,
        }
    }

    /// The null/empty sentinel for this type.
    ///
    /// Reference-like types (strings, models, lists, nullable types) default to
    /// null; value types default to their zero value.
    pub fn default_value(&self) -> Value {
        match self {
            Self::Bool => Value::Bool(false),
            Self::I64 => Value::I64(0),
            Self::F64 => Value::F64(0.0),
            Self::String
            | Self::Model(_)
            | Self::List(_)
            | Self::Option(_)
            | Self::Null
            | Self::Unknown => Value::Null,
        }
    }

    /// Returns `true` if a value of type `other` may be stored where this type
    /// is expected. Nullability is not enforced: null loads as the default of
    /// the target.
    pub fn is_assignable_from(&self, other: &Type) -> bool {
        match (self.strip_option(), other.strip_option()) {
            (Self::Unknown, _) | (_, Self::Unknown | Self::Null) => true,
            (Self::F64, Self::I64) => true,
            (Self::List(lhs), Self::List(rhs)) => lhs.is_assignable_from(rhs),
            (lhs, rhs) => lhs == rhs,
        }
    }

    /// Picks the type of an expression that yields either `self` or `other`.
    pub fn unify(self, other: Type) -> Type {
        match (self, other) {
            (lhs, rhs) if lhs == rhs => lhs,
            (Self::Null, ty) | (ty, Self::Null) => Type::option(ty),
            (Self::Unknown, ty) | (ty, Self::Unknown) => ty,
            (Self::Option(inner), ty) | (ty, Self::Option(inner)) => {
                Type::option((*inner).unify(ty))
            }
            (Self::I64, Self::F64) | (Self::F64, Self::I64) => Self::F64,
            (lhs, _) => lhs,
        }
    }

    /// Converts `value` to this type.
    pub fn cast(&self, value: Value) -> Result<Value> {
        if value.is_null() {
            return Ok(Value::Null);
        }

        Ok(match (self.strip_option(), value) {
            (Self::Unknown, value) => value,
            (Self::Bool, value @ Value::Bool(_)) => value,
            (Self::I64, value @ Value::I64(_)) => value,
            (Self::I64, Value::F64(v)) => Value::I64(v as i64),
            (Self::I64, Value::String(v)) => Value::I64(
                v.trim()
                    .parse()
                    .map_err(|_| Error::type_conversion(Value::String(v.clone()), "I64"))?,
            ),
            (Self::F64, value @ Value::F64(_)) => value,
            (Self::F64, Value::I64(v)) => Value::F64(v as f64),
            (Self::F64, Value::String(v)) => Value::F64(
                v.trim()
                    .parse()
                    .map_err(|_| Error::type_conversion(Value::String(v.clone()), "F64"))?,
            ),
            (Self::String, value @ Value::String(_)) => value,
            (Self::String, Value::Bool(v)) => Value::String(v.to_string()),
            (Self::String, Value::I64(v)) => Value::String(v.to_string()),
            (Self::String, Value::F64(v)) => Value::String(v.to_string()),
            (Self::Model(_), value @ Value::Record(_)) => value,
            (Self::List(item), Value::List(items)) => Value::List(
                items
                    .into_iter()
                    .map(|item_value| item.cast(item_value))
                    .collect::<Result<_>>()?,
            ),
            (ty, value) => {
                return Err(Error::type_conversion(value, ty.name()));
            }
        })
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::I64 => "I64",
            Self::F64 => "F64",
            Self::String => "String",
            Self::Model(_) => "Model",
            Self::List(_) => "List",
            Self::Option(_) => "Option",
            Self::Null => "Null",
            Self::Unknown => "Unknown",
        }
    }
}

impl From<ModelId> for Type {
    fn from(value: ModelId) -> Self {
        Self::Model(value)
    }
}

impl From<&Self> for Type {
    fn from(value: &Self) -> Self {
        value.clone()
    }
}
