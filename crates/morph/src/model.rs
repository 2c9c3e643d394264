use crate::Result;

use morph_core::{
    ast::{Value, ValueRecord},
    schema::{self, ModelId},
};

/// A Rust type that mappings read from or write to.
///
/// Instances cross into mapping expressions as positional records: field `i`
/// of the record is field `i` of [`Model::schema`].
pub trait Model: Sized + 'static {
    fn id() -> ModelId {
        ModelId::of::<Self>()
    }

    /// Describes the model's fields.
    fn schema() -> schema::Model;

    /// Registers models referenced by this model's fields.
    fn register_nested(builder: &mut schema::Builder) {
        let _ = builder;
    }

    /// Converts an instance into its record form.
    fn to_value(&self) -> ValueRecord;

    /// Loads an instance, populating fields from the given record.
    fn load(record: ValueRecord) -> Result<Self>;

    /// Sets a single field, used by in-place updates.
    fn assign(&mut self, field: usize, value: Value) -> Result<()>;
}

/// Adds `M` and every model it references to `builder`. Call it from
/// [`Model::register_nested`] for each nested model type.
pub fn register<M: Model>(builder: &mut schema::Builder) {
    if builder.register(M::schema()) {
        M::register_nested(builder);
    }
}
