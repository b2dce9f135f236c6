//! Environment and value domain types

mod value;

pub use value::{Environment, Number, Value};
