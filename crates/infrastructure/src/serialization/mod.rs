//! YAML helpers used to check templates before expansion.
//!
//! The stream is split into documents and each one is decoded independently;
//! decoded values are never kept.

mod yaml;

pub use yaml::*;
