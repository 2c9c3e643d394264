pub mod ast;

mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::Schema;

/// A Result type alias that uses Morph's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
