use super::{Model, ModelId, Schema};
use crate::{ast::Type, Error, Result};

use indexmap::IndexMap;

/// Collects models and checks that they reference each other consistently.
#[derive(Debug, Default)]
pub struct Builder {
    models: IndexMap<ModelId, Model>,
}

impl Builder {
    /// Adds a model. Registering the same model twice keeps the first
    /// definition; returns `false` in that case.
    pub fn register(&mut self, model: Model) -> bool {
        if self.models.contains_key(&model.id) {
            return false;
        }

        self.models.insert(model.id, model);
        true
    }

    pub fn contains(&self, id: ModelId) -> bool {
        self.models.contains_key(&id)
    }

    pub fn build(self) -> Result<Schema> {
        for model in self.models.values() {
            for (index, field) in model.fields.iter().enumerate() {
                if field.id.model != model.id || field.id.index != index {
                    return Err(Error::malformed_mapping_expression(format!(
                        "field `{}.{}` has an inconsistent id",
                        model.name, field.name
                    )));
                }

                if let Some(target) = referenced_model(&field.ty) {
                    if !self.models.contains_key(&target) {
                        return Err(Error::malformed_mapping_expression(format!(
                            "field `{}.{}` references a model that is not registered",
                            model.name, field.name
                        )));
                    }
                }
            }
        }

        Ok(Schema {
            models: self.models,
        })
    }
}

fn referenced_model(ty: &Type) -> Option<ModelId> {
    match ty {
        Type::Model(id) => Some(*id),
        Type::Option(inner) | Type::List(inner) => referenced_model(inner),
        _ => None,
    }
}
