//! The passes that turn a mapping body into executable artifacts.
//!
//! A mapping is resolved against the schema, rewritten to be null-safe, then
//! split into the factory closure, the optional updater, and the projection.

mod compile;
pub(crate) use compile::{compile, Thunk};

mod extract;
pub use extract::{extract, Assignment, Extracted};

mod null_safe;
pub use null_safe::rewrite;

mod resolve;
pub use resolve::resolve;
