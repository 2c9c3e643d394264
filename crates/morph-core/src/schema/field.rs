use super::ModelId;
use crate::ast::Type;

use std::fmt;

#[derive(Debug, Clone)]
pub struct Field {
    /// Uniquely identifies the field within the containing model.
    pub id: FieldId,

    /// The field name
    pub name: String,

    /// The field's value type. Nullable fields use [`Type::Option`].
    pub ty: Type,

    /// True if an object initializer may assign this field.
    pub assignable: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct FieldId {
    pub model: ModelId,
    pub index: usize,
}

impl Field {
    /// Gets the id.
    pub fn id(&self) -> FieldId {
        self.id
    }

    /// Gets whether the field can hold null.
    pub fn nullable(&self) -> bool {
        self.ty.is_nullable()
    }
}

impl From<&Field> for FieldId {
    fn from(value: &Field) -> Self {
        value.id
    }
}

impl fmt::Debug for FieldId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "FieldId({:?}/{})", self.model, self.index)
    }
}
