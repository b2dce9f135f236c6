//! Infrastructure adapters

mod yaml_validator;

pub use yaml_validator::YamlChunkValidator;
