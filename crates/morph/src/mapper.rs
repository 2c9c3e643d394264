use crate::{
    engine::{self, Extracted, Thunk},
    model, Mapping, Model, Query, Result,
};

use morph_core::{
    ast::{Lambda, Type, Value},
    err, Error, Schema,
};

use std::{fmt, marker::PhantomData};

/// The per-pair mapping contract: build, update in place, or project.
pub trait Mapper<S, D>: Send + Sync {
    /// Builds a new destination. A missing source maps to a missing
    /// destination.
    fn map(&self, source: Option<&S>) -> Result<Option<D>>;

    /// Copies the mapped values onto an existing destination.
    fn update(&self, source: Option<&S>, destination: Option<&mut D>) -> Result<()>;

    /// Appends the mapping to a deferred query without executing anything.
    fn project(&self, query: Query<S>) -> Query<D>;
}

/// A mapping compiled once into a factory, an optional updater and a
/// projection.
///
/// All three are derived from the same null-safe rewrite of the mapping
/// body, so they agree on every input. The mapper is immutable and can be
/// shared across threads.
pub struct CompiledMapper<S, D> {
    /// The rewritten body, handed to query providers.
    projection: Lambda,

    factory: Thunk,

    /// `None` when the body is not an object initializer or updates were
    /// disabled.
    updater: Option<Vec<(usize, Thunk)>>,

    source_name: String,
    destination_name: String,

    _p: PhantomData<fn(&S) -> D>,
}

/// Configures how a [`CompiledMapper`] is built.
pub struct Builder<'a, S, D> {
    mapping: &'a Mapping<S, D>,
    updater: bool,
}

impl<S: Model, D: Model> CompiledMapper<S, D> {
    /// Compiles `mapping` with default settings.
    pub fn new(mapping: &Mapping<S, D>) -> Result<CompiledMapper<S, D>> {
        CompiledMapper::builder(mapping).build()
    }

    pub fn builder(mapping: &Mapping<S, D>) -> Builder<'_, S, D> {
        Builder {
            mapping,
            updater: true,
        }
    }

    pub fn map(&self, source: Option<&S>) -> Result<Option<D>> {
        match source {
            Some(source) => self.map_one(source).map(Some),
            None => Ok(None),
        }
    }

    /// Builds a destination from a source that is known to be present.
    pub fn map_one(&self, source: &S) -> Result<D> {
        let args = [Value::Record(source.to_value())];
        let value = (self.factory)(&args)?;

        D::load(value.to_record()?)
    }

    pub fn update(&self, source: Option<&S>, destination: Option<&mut D>) -> Result<()> {
        let Some(source) = source else {
            return Err(Error::invalid_argument("source"));
        };

        let Some(destination) = destination else {
            return Err(Error::invalid_argument("destination"));
        };

        let Some(assignments) = &self.updater else {
            return Err(Error::unsupported_mapping_shape(&self.destination_name));
        };

        // Values only read the source; the destination is written through
        // `Model::assign` and never read.
        let args = [Value::Null, Value::Record(source.to_value())];

        // Every value is evaluated before the first write, so a failing
        // assignment leaves the destination untouched.
        let values = assignments
            .iter()
            .map(|(field, value)| Ok((*field, value(&args)?)))
            .collect::<Result<Vec<_>>>()?;

        for (field, value) in values {
            destination.assign(field, value)?;
        }

        Ok(())
    }

    pub fn project(&self, query: Query<S>) -> Query<D> {
        query.project(self.projection.clone())
    }

    /// The rewritten, uncompiled mapping body.
    pub fn projection(&self) -> &Lambda {
        &self.projection
    }

    pub fn supports_update(&self) -> bool {
        self.updater.is_some()
    }
}

impl<S: Model, D: Model> Mapper<S, D> for CompiledMapper<S, D> {
    fn map(&self, source: Option<&S>) -> Result<Option<D>> {
        CompiledMapper::map(self, source)
    }

    fn update(&self, source: Option<&S>, destination: Option<&mut D>) -> Result<()> {
        CompiledMapper::update(self, source, destination)
    }

    fn project(&self, query: Query<S>) -> Query<D> {
        CompiledMapper::project(self, query)
    }
}

impl<S, D> fmt::Debug for CompiledMapper<S, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledMapper")
            .field("source", &self.source_name)
            .field("destination", &self.destination_name)
            .field("projection", &self.projection.body.to_string())
            .field("supports_update", &self.updater.is_some())
            .finish()
    }
}

impl<S: Model, D: Model> Builder<'_, S, D> {
    /// Enables or disables the in-place updater. Enabled by default.
    pub fn updater(mut self, enabled: bool) -> Self {
        self.updater = enabled;
        self
    }

    pub fn build(self) -> Result<CompiledMapper<S, D>> {
        let source = S::schema();
        let destination = D::schema();
        let context = err!("compiling mapping `{}` -> `{}`", source.name, destination.name);

        self.build_with(source.name, destination.name)
            .map_err(|e| e.context(context))
    }

    fn build_with(self, source_name: String, destination_name: String) -> Result<CompiledMapper<S, D>> {
        let mut builder = Schema::builder();
        model::register::<S>(&mut builder);
        model::register::<D>(&mut builder);
        let schema = builder.build()?;

        let mut projection = Lambda::new([Type::Model(S::id())], self.mapping.body().clone());
        engine::resolve(&schema, &mut projection)?;

        let ty = projection.infer_ty(&schema);
        if ty.as_model() != Some(D::id()) || ty.is_nullable() {
            return Err(Error::malformed_mapping_expression(format!(
                "body `{}` does not produce a `{destination_name}`",
                projection.body
            )));
        }

        let guards = engine::rewrite(&schema, &mut projection);
        let factory = engine::compile(&projection.body)?;

        let updater = if !self.updater {
            None
        } else {
            match engine::extract(&projection) {
                Extracted::Supported(assignments) => Some(
                    assignments
                        .iter()
                        .map(|assignment| match assignment.target.index {
                            Some(field) => Ok((field, engine::compile(&assignment.value)?)),
                            None => Err(Error::malformed_mapping_expression(format!(
                                "member `{}` has not been resolved",
                                assignment.target.name
                            ))),
                        })
                        .collect::<Result<Vec<_>>>()?,
                ),
                Extracted::Unsupported => {
                    tracing::warn!(
                        source = %source_name,
                        destination = %destination_name,
                        "mapping body is not an object initializer; in-place updates are unavailable"
                    );
                    None
                }
            }
        };

        tracing::debug!(
            source = %source_name,
            destination = %destination_name,
            guards,
            supports_update = updater.is_some(),
            projection = %projection.body,
            "compiled mapper"
        );

        Ok(CompiledMapper {
            projection,
            factory,
            updater,
            source_name,
            destination_name,
            _p: PhantomData,
        })
    }
}
