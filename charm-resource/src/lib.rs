mod error;
mod meta;
mod resource_type;
mod source;

pub use error::{Error, Result};
pub use meta::{parse_meta, parse_meta_json, Meta};
pub use resource_type::ResourceType;
pub use source::{Field, MetaSource};
