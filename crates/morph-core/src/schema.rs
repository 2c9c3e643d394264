mod builder;
pub use builder::Builder;

mod field;
pub use field::{Field, FieldId};

mod model;
pub use model::{Model, ModelId};

use indexmap::IndexMap;

/// The set of models a mapping can read from and write to.
#[derive(Debug, Default, Clone)]
pub struct Schema {
    pub models: IndexMap<ModelId, Model>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }

    pub fn get_model(&self, id: impl Into<ModelId>) -> Option<&Model> {
        self.models.get(&id.into())
    }

    /// Returns the model name, or a placeholder when the model is not part of
    /// this schema.
    pub fn model_name(&self, id: ModelId) -> &str {
        self.get_model(id).map(|model| &model.name[..]).unwrap_or("<unknown>")
    }
}
