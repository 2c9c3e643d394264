use super::Plan;
use crate::Result;

use morph_core::ast::Value;

/// A deferred-execution engine.
///
/// Providers receive the projections as expression trees and are expected to
/// translate them natively rather than call back into compiled mappers.
pub trait Provider: Send + Sync {
    /// Runs `plan`, returning one value per resulting row.
    fn execute(&self, plan: &Plan) -> Result<Vec<Value>>;
}
