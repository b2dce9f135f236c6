//! Single-pass scanner for `$` references
//!
//! Copies text through unchanged, handing every reference to a resolution
//! callback together with the position of its `$`.

use shelltpl_domain::Position;

use super::parser::parse_name;

/// Expands every `$` reference in `text` using `resolve`.
///
/// `resolve` receives the parsed name and the 1-indexed line/column of the
/// `$`. Returning `Ok(Some(value))` substitutes `value`; `Ok(None)` keeps the
/// reference exactly as written. The first error stops the scan.
///
/// A `$` that is the last byte of the text is copied literally. Replacement
/// values are never scanned again.
///
/// # Errors
/// Returns the first error produced by `resolve`.
///
/// # Examples
///
/// ```
/// use shelltpl_application::variable_resolver::scanner::expand_with_positions;
///
/// let out = expand_with_positions("a: $X", |name, _| {
///     Ok::<_, ()>(Some(name.to_lowercase()))
/// });
/// assert_eq!(out, Ok("a: x".to_string()));
/// ```
pub fn expand_with_positions<F, E>(text: &str, mut resolve: F) -> Result<String, E>
where
    F: FnMut(&str, Position) -> Result<Option<String>, E>,
{
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len() * 2);
    let mut copied = 0;
    let mut line = 1;
    let mut line_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                line += 1;
                line_start = i + 1;
            }
            b'$' if i + 1 < bytes.len() => {
                out.push_str(&text[copied..i]);

                let (name, width) = parse_name(&text[i + 1..]);
                let end = i + 1 + width;
                let position = Position::new(line, i - line_start + 1);

                match resolve(name, position)? {
                    Some(value) => out.push_str(&value),
                    None => out.push_str(&text[i..end]),
                }

                // Braced names may span lines.
                for (offset, byte) in bytes[i + 1..end].iter().enumerate() {
                    if *byte == b'\n' {
                        line += 1;
                        line_start = i + 1 + offset + 1;
                    }
                }

                copied = end;
                i = end;
                continue;
            }
            _ => {}
        }
        i += 1;
    }

    out.push_str(&text[copied..]);
    Ok(out)
}
