use super::{Field, FieldId};
use crate::ast::Type;

use std::{any::TypeId, fmt};

#[derive(Debug, Clone)]
pub struct Model {
    /// Uniquely identifies the model within the schema
    pub id: ModelId,

    /// Name of the model, used in diagnostics
    pub name: String,

    /// Fields contained by the model, in record order
    pub fields: Vec<Field>,
}

/// Identifies a model by the Rust type that backs it.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct ModelId(TypeId);

impl Model {
    pub fn new(id: ModelId, name: impl Into<String>) -> Model {
        Model {
            id,
            name: name.into(),
            fields: vec![],
        }
    }

    /// Appends an assignable field.
    pub fn with_field(self, name: impl Into<String>, ty: impl Into<Type>) -> Model {
        self.push_field(name.into(), ty.into(), true)
    }

    /// Appends a field that can be read but not assigned by an initializer.
    pub fn with_readonly_field(self, name: impl Into<String>, ty: impl Into<Type>) -> Model {
        self.push_field(name.into(), ty.into(), false)
    }

    fn push_field(mut self, name: String, ty: Type, assignable: bool) -> Model {
        let id = FieldId {
            model: self.id,
            index: self.fields.len(),
        };

        self.fields.push(Field {
            id,
            name,
            ty,
            assignable,
        });
        self
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }
}

impl ModelId {
    pub fn of<T: ?Sized + 'static>() -> ModelId {
        ModelId(TypeId::of::<T>())
    }
}

impl From<&Model> for ModelId {
    fn from(value: &Model) -> Self {
        value.id
    }
}

impl fmt::Debug for ModelId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ModelId({:?})", self.0)
    }
}
