//! shelltpl Application - Substitution engine and ports
//!
//! This crate defines the application layer with:
//! - The `$NAME` / `${NAME}` / `$$` name parser and scanner
//! - Reference resolution against an environment
//! - Port traits (interfaces for external dependencies)
//! - The [`ShellTemplate`] that ties validation and expansion together

pub mod ports;
pub mod template;
pub mod variable_resolver;

pub use ports::{DocumentValidator, NoValidation};
pub use template::{ShellTemplate, Template};
pub use variable_resolver::{envsubst, expand_with_positions, parse_name};
