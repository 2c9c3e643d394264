use super::{Entry, Registry};
use crate::{CompiledMapper, Mapper, Mapping, Model, Result};

use morph_core::{err, Error};

use indexmap::IndexMap;
use std::{
    any::TypeId,
    sync::Arc,
};

/// Compiles and collects mappers before they are published in a
/// [`Registry`].
#[derive(Debug, Default)]
pub struct Builder {
    entries: IndexMap<(TypeId, TypeId), Entry>,
}

impl Builder {
    /// Compiles `mapping` and registers it for `S -> D`.
    ///
    /// Fails if the mapping does not compile or if the pair already has a
    /// mapper.
    pub fn register<S: Model, D: Model>(&mut self, mapping: Mapping<S, D>) -> Result<&mut Self> {
        let mapper = CompiledMapper::new(&mapping)?;
        self.register_mapper::<S, D>(Arc::new(mapper))
    }

    /// Registers a mapper that was built elsewhere.
    pub fn register_mapper<S: Model, D: Model>(
        &mut self,
        mapper: Arc<dyn Mapper<S, D>>,
    ) -> Result<&mut Self> {
        let source_name = S::schema().name;
        let destination_name = D::schema().name;
        let key = (TypeId::of::<S>(), TypeId::of::<D>());

        if self.entries.contains_key(&key) {
            return Err(Error::malformed_mapping_expression(format!(
                "a mapping from `{source_name}` to `{destination_name}` is already registered"
            ))
            .context(err!("registering `{source_name}` -> `{destination_name}`")));
        }

        tracing::debug!(
            source = %source_name,
            destination = %destination_name,
            "registered mapper"
        );

        self.entries.insert(
            key,
            Entry {
                source_name,
                destination_name,
                mapper: Box::new(mapper),
            },
        );

        Ok(self)
    }

    pub fn build(&mut self) -> Registry {
        Registry {
            entries: std::mem::take(&mut self.entries),
        }
    }
}
