use crate::{load_nested, Model, Result};

use morph_core::ast::Value;

use std::marker::PhantomData;

/// Loads rows returned by a provider one at a time.
pub struct Cursor<M> {
    values: std::vec::IntoIter<Value>,
    _p: PhantomData<M>,
}

impl<M: Model> Cursor<M> {
    pub(crate) fn new(values: Vec<Value>) -> Self {
        Self {
            values: values.into_iter(),
            _p: PhantomData,
        }
    }
}

impl<M: Model> Iterator for Cursor<M> {
    type Item = Result<M>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.values.next()?;
        Some(load_nested(row))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}
