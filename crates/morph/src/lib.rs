pub mod engine;

mod mapper;
pub use mapper::{Builder as MapperBuilder, CompiledMapper, Mapper};

mod mapping;
pub use mapping::{construct, init, Mapping, Param};

mod model;
pub use model::{register, Model};

mod primitive;
pub use primitive::{
    load_nested, load_nested_option, nested_option_value, nested_value, Primitive,
};

pub mod query;
pub use query::Query;

pub mod registry;
pub use registry::Registry;

pub use morph_core::{ast, bail, err, schema, Error, Result};
