//! Variable resolution module
//!
//! Provides parsing and resolution of `$NAME`, `${NAME}` and `$$` references
//! in strings.
//!
//! # Usage
//!
//! ```
//! use shelltpl_application::variable_resolver::envsubst;
//! use shelltpl_domain::{Environment, Value};
//!
//! let mut env = Environment::new();
//! env.insert("host".to_string(), Value::from("localhost"));
//!
//! let result = envsubst("url: http://${host}/api", &env, false).unwrap();
//! assert_eq!(result, "url: http://localhost/api");
//! ```

pub mod engine;
pub mod parser;
pub mod scanner;

pub use engine::{envsubst, extract_variable_names, find_unresolved, resolve_reference};
pub use parser::{is_name_byte, is_shell_special, parse_name};
pub use scanner::expand_with_positions;
