//! shelltpl Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod adapters;
pub mod serialization;

pub use adapters::YamlChunkValidator;
pub use serialization::{chunk_documents, decode_document, is_blank_document};
