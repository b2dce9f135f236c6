//! Variable resolution engine
//!
//! Resolves references found by the scanner against an [`Environment`] and
//! enforces presence and type rules.

use std::collections::HashSet;
use std::convert::Infallible;

use shelltpl_domain::{Environment, Position, RenderError, RenderResult, Value};
use tracing::{debug, trace};

use super::scanner::expand_with_positions;

/// Name produced by `$$` and `${$}`.
pub const DOLLAR: &str = "$";

/// Resolves a single reference.
///
/// Returns `Ok(Some(text))` to substitute, `Ok(None)` to leave the reference
/// as written.
///
/// - `$` always becomes a literal `$`.
/// - Any other name, including the empty name of a lone `$` or a malformed
///   `${`, is looked up in `env`.
/// - Missing or null values are left as written when `ignore_unset` is set
///   and are an error otherwise.
/// - Values other than strings, numbers and booleans are always an error.
///
/// # Errors
/// Returns [`RenderError::UnsetVariable`] or
/// [`RenderError::UnsupportedValueType`].
pub fn resolve_reference(
    name: &str,
    position: Position,
    env: &Environment,
    ignore_unset: bool,
) -> RenderResult<Option<String>> {
    if name == DOLLAR {
        return Ok(Some(DOLLAR.to_string()));
    }

    match env.get(name) {
        None | Some(Value::Null) => {
            if ignore_unset {
                trace!(%position, variable = name, "unset variable left as written");
                Ok(None)
            } else {
                debug!(%position, variable = name, "variable isn't set");
                Err(RenderError::unset(name, position))
            }
        }
        Some(value) if value.is_primitive() => {
            trace!(
                %position,
                variable = name,
                kind = value.kind(),
                "variable resolved"
            );
            Ok(value.to_substitution())
        }
        Some(value) => {
            debug!(
                %position,
                variable = name,
                kind = value.kind(),
                "unsupported value type"
            );
            Err(RenderError::unsupported(name, position))
        }
    }
}

/// Expands all references in `text` against `env`.
///
/// # Errors
/// Returns the first resolution error; no partial output is produced.
///
/// # Examples
///
/// ```
/// use shelltpl_application::variable_resolver::envsubst;
/// use shelltpl_domain::{Environment, Value};
///
/// let mut env = Environment::new();
/// env.insert("FOO".to_string(), Value::from("bar"));
///
/// assert_eq!(envsubst("a: $FOO\n", &env, false).unwrap(), "a: bar\n");
/// ```
pub fn envsubst(text: &str, env: &Environment, ignore_unset: bool) -> RenderResult<String> {
    expand_with_positions(text, |name, position| {
        resolve_reference(name, position, env, ignore_unset)
    })
}

/// Lists the names referenced in `text`, in order of appearance.
///
/// Duplicates are kept; `$$` and empty references are skipped.
#[must_use]
pub fn extract_variable_names(text: &str) -> Vec<String> {
    let mut names = Vec::new();
    let scanned = expand_with_positions(text, |name, _| {
        if !name.is_empty() && name != DOLLAR {
            names.push(name.to_string());
        }
        Ok::<_, Infallible>(None)
    });
    match scanned {
        Ok(_) => names,
        Err(never) => match never {},
    }
}

/// Lists the referenced names that `env` cannot substitute.
///
/// Each name is reported once, in order of first appearance.
#[must_use]
pub fn find_unresolved(text: &str, env: &Environment) -> Vec<String> {
    let mut seen = HashSet::new();
    extract_variable_names(text)
        .into_iter()
        .filter(|name| env.get(name).is_none_or(Value::is_null))
        .filter(|name| seen.insert(name.clone()))
        .collect()
}
