use super::{Visit, VisitMut};
use std::fmt;

/// A piece of a mapping tree that a visitor can walk.
///
/// Implemented by [`Expr`](super::Expr) and [`Lambda`](super::Lambda).
/// Walking a lambda starts at its body; parameters are not visited.
pub trait Node: fmt::Debug {
    /// Hands `self` to the matching `visit_*` method of `visit`.
    fn visit<V: Visit>(&self, visit: V)
    where
        Self: Sized;

    /// Hands `self` to the matching `visit_*_mut` method of `visit`, which
    /// may rewrite the node in place.
    fn visit_mut<V: VisitMut>(&mut self, visit: V);
}
