mod builder;
pub use builder::Builder;

use crate::{Mapper, Model, Query, Result};

use morph_core::Error;

use indexmap::IndexMap;
use std::{
    any::{Any, TypeId},
    fmt,
    sync::Arc,
};

/// Resolves the mapper for a `(source, destination)` pair at the call site.
///
/// Populated once through [`Registry::builder`] and then only read, so a
/// shared reference can be handed to any number of threads.
pub struct Registry {
    entries: IndexMap<(TypeId, TypeId), Entry>,
}

#[derive(Debug)]
struct Entry {
    source_name: String,
    destination_name: String,

    /// An `Arc<dyn Mapper<S, D>>` for the pair the entry is keyed by.
    mapper: Box<dyn Any + Send + Sync>,
}

impl Registry {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the mapper registered for `S -> D`.
    pub fn get<S: Model, D: Model>(&self) -> Result<&dyn Mapper<S, D>> {
        let key = (TypeId::of::<S>(), TypeId::of::<D>());

        let mapper = self
            .entries
            .get(&key)
            .and_then(|entry| entry.mapper.downcast_ref::<Arc<dyn Mapper<S, D>>>());

        match mapper {
            Some(mapper) => {
                tracing::trace!(
                    source = std::any::type_name::<S>(),
                    destination = std::any::type_name::<D>(),
                    "resolved mapper"
                );
                Ok(mapper.as_ref())
            }
            None => Err(Error::unregistered_mapping(
                &S::schema().name,
                &D::schema().name,
            )),
        }
    }

    pub fn map<S: Model, D: Model>(&self, source: Option<&S>) -> Result<Option<D>> {
        self.get::<S, D>()?.map(source)
    }

    pub fn update<S: Model, D: Model>(
        &self,
        source: Option<&S>,
        destination: Option<&mut D>,
    ) -> Result<()> {
        self.get::<S, D>()?.update(source, destination)
    }

    pub fn project<S: Model, D: Model>(&self, query: Query<S>) -> Result<Query<D>> {
        Ok(self.get::<S, D>()?.project(query))
    }

    pub fn contains<S: Model, D: Model>(&self) -> bool {
        self.entries
            .contains_key(&(TypeId::of::<S>(), TypeId::of::<D>()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(
                self.entries
                    .values()
                    .map(|entry| format!("{} -> {}", entry.source_name, entry.destination_name)),
            )
            .finish()
    }
}
