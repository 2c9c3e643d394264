//! Deferred queries that carry mapping projections to a provider.

mod cursor;
pub use cursor::Cursor;

mod memory;
pub use memory::MemoryProvider;

mod plan;
pub use plan::{Plan, SourceId};

mod provider;
pub use provider::Provider;

use crate::{Model, Result};

use morph_core::ast::Lambda;

use std::{fmt, marker::PhantomData, sync::Arc};

/// A lazy sequence of `T` produced by a [`Provider`].
///
/// Building a query never executes it. Each call to [`Query::exec`] or
/// [`Query::iter`] hands the full plan to the provider again, so a query is
/// as restartable as its provider.
pub struct Query<T> {
    provider: Arc<dyn Provider>,
    plan: Plan,
    _p: PhantomData<fn() -> T>,
}

impl<T: Model> Query<T> {
    /// A query reading every row of `source`.
    pub fn new(provider: Arc<dyn Provider>, source: SourceId) -> Query<T> {
        Query {
            provider,
            plan: Plan::new(source),
            _p: PhantomData,
        }
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    /// Appends a projection to the plan. Nothing is evaluated.
    pub fn project<U: Model>(self, projection: Lambda) -> Query<U> {
        let mut plan = self.plan;
        plan.projections.push(projection);

        Query {
            provider: self.provider,
            plan,
            _p: PhantomData,
        }
    }

    /// Executes the plan and returns a cursor over the loaded rows.
    pub fn iter(&self) -> Result<Cursor<T>> {
        let values = self.provider.execute(&self.plan)?;
        Ok(Cursor::new(values))
    }

    /// Executes the plan and loads every row.
    pub fn exec(&self) -> Result<Vec<T>> {
        self.iter()?.collect()
    }
}

impl<T> Clone for Query<T> {
    fn clone(&self) -> Self {
        Query {
            provider: self.provider.clone(),
            plan: self.plan.clone(),
            _p: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Query<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query").field("plan", &self.plan).finish()
    }
}
