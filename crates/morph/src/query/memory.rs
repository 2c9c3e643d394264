use super::{Plan, Provider, Query, SourceId};
use crate::{Model, Result};

use morph_core::{ast::Value, Error};

use std::sync::Arc;

/// A provider over rows held in memory.
///
/// Projections are evaluated by interpreting their expression trees, the way
/// a database provider would translate them, not by calling compiled
/// mappers.
#[derive(Debug, Default)]
pub struct MemoryProvider {
    sources: Vec<Vec<Value>>,
}

impl MemoryProvider {
    pub fn new() -> MemoryProvider {
        MemoryProvider::default()
    }

    /// Stores `rows` as a new source.
    pub fn insert<T: Model>(&mut self, rows: impl IntoIterator<Item = T>) -> SourceId {
        let id = SourceId(self.sources.len());

        self.sources.push(
            rows.into_iter()
                .map(|row| Value::Record(row.to_value()))
                .collect(),
        );

        id
    }

    /// Starts a query over `source`.
    pub fn query<T: Model>(self: &Arc<Self>, source: SourceId) -> Query<T> {
        Query::new(self.clone(), source)
    }
}

impl Provider for MemoryProvider {
    fn execute(&self, plan: &Plan) -> Result<Vec<Value>> {
        let Some(rows) = self.sources.get(plan.source.0) else {
            return Err(Error::invalid_argument("source"));
        };

        tracing::trace!(
            source = plan.source.0,
            rows = rows.len(),
            projections = plan.projections.len(),
            "executing plan"
        );

        rows.iter()
            .map(|row| {
                plan.projections
                    .iter()
                    .try_fold(row.clone(), |value, projection| projection.call(&[value]))
            })
            .collect()
    }
}
