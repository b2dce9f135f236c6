//! shelltpl Domain - Core types
//!
//! This crate defines the values, positions, options and errors shared by the
//! substitution engine. All types here are pure Rust with no I/O dependencies.

pub mod environment;
pub mod error;
pub mod options;
pub mod position;

pub use environment::{Environment, Number, Value};
pub use error::{RenderError, RenderResult};
pub use options::TemplateOptions;
pub use position::Position;
