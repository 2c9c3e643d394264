use crate::{Model, Result};

use morph_core::{
    ast::{Type, Value},
    Error,
};

/// A field type that converts to and from [`Value`].
///
/// Null loads as the type's default value, matching the fallback the
/// null-safety rewrite produces for a missing link.
pub trait Primitive: Sized {
    fn ty() -> Type;

    fn load(value: Value) -> Result<Self>;

    fn to_value(&self) -> Value;
}

impl Primitive for bool {
    fn ty() -> Type {
        Type::Bool
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(false),
            value => value.try_into(),
        }
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Primitive for i64 {
    fn ty() -> Type {
        Type::I64
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(0),
            value => value.try_into(),
        }
    }

    fn to_value(&self) -> Value {
        Value::I64(*self)
    }
}

impl Primitive for i32 {
    fn ty() -> Type {
        Type::I64
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(0),
            value => value.try_into(),
        }
    }

    fn to_value(&self) -> Value {
        Value::I64((*self).into())
    }
}

impl Primitive for f64 {
    fn ty() -> Type {
        Type::F64
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(0.0),
            value => value.try_into(),
        }
    }

    fn to_value(&self) -> Value {
        Value::F64(*self)
    }
}

impl Primitive for String {
    fn ty() -> Type {
        Type::String
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(String::new()),
            value => value.try_into(),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl<T: Primitive> Primitive for Option<T> {
    fn ty() -> Type {
        Type::option(T::ty())
    }

    fn load(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }

    fn to_value(&self) -> Value {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: Primitive> Primitive for Vec<T> {
    fn ty() -> Type {
        Type::list(T::ty())
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(vec![]),
            Value::List(items) => items.into_iter().map(T::load).collect(),
            value => Err(Error::type_conversion(value, "List")),
        }
    }

    fn to_value(&self) -> Value {
        Value::List(self.iter().map(Primitive::to_value).collect())
    }
}

/// Loads a required nested model. Null is an error: there is no default
/// instance to fall back to.
pub fn load_nested<T: Model>(value: Value) -> Result<T> {
    match value {
        Value::Record(record) => T::load(record),
        value => Err(Error::type_conversion(value, "Record")),
    }
}

/// Loads an optional nested model.
pub fn load_nested_option<T: Model>(value: Value) -> Result<Option<T>> {
    if value.is_null() {
        Ok(None)
    } else {
        Ok(Some(load_nested(value)?))
    }
}

pub fn nested_value<T: Model>(value: &T) -> Value {
    Value::Record(value.to_value())
}

pub fn nested_option_value<T: Model>(value: &Option<T>) -> Value {
    value.as_ref().map(nested_value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_loads_as_default() {
        assert!(!bool::load(Value::Null).unwrap());
        assert_eq!(i64::load(Value::Null).unwrap(), 0);
        assert_eq!(f64::load(Value::Null).unwrap(), 0.0);
        assert_eq!(String::load(Value::Null).unwrap(), "");
        assert_eq!(Option::<i64>::load(Value::Null).unwrap(), None);
        assert_eq!(Vec::<String>::load(Value::Null).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn option_round_trips_some() {
        let value = Some("Ada".to_string()).to_value();
        assert_eq!(value, Value::from("Ada"));
        assert_eq!(
            Option::<String>::load(value).unwrap(),
            Some("Ada".to_string())
        );
    }

    #[test]
    fn i32_rejects_out_of_range() {
        assert!(i32::load(Value::I64(i64::MAX)).is_err());
    }

    #[test]
    fn wrong_type_is_conversion_error() {
        let err = String::load(Value::I64(1)).unwrap_err();
        assert!(err.is_type_conversion());
    }

    #[test]
    fn types() {
        assert_eq!(Option::<String>::ty(), Type::option(Type::String));
        assert_eq!(Vec::<i32>::ty(), Type::list(Type::I64));
        assert!(Option::<bool>::ty().is_nullable());
        assert!(!bool::ty().is_nullable());
    }
}
