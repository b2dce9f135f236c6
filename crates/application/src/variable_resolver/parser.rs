//! Name parser for `$NAME`, `${NAME}` and `$X` references
//!
//! Works on the text immediately following a `$` and reports how many bytes
//! of it belong to the reference.

/// Returns true for characters usable as a bare one-character name
/// (`* # $ @ ! ? -` and the digits), mirroring shell special parameters.
#[must_use]
pub const fn is_shell_special(byte: u8) -> bool {
    matches!(
        byte,
        b'*' | b'#' | b'$' | b'@' | b'!' | b'?' | b'-' | b'0'..=b'9'
    )
}

/// Returns true for characters allowed in an unbraced identifier.
#[must_use]
pub const fn is_name_byte(byte: u8) -> bool {
    byte == b'_' || byte.is_ascii_alphanumeric()
}

/// Parses the variable name at the start of `rest`.
///
/// Returns the name and the number of bytes of `rest` it consumed.
///
/// - `{X}` with a shell-special `X` yields `X`, width 3.
/// - `{...}` yields the text up to the first `}`; without a closing brace
///   the name is empty and only the `{` is consumed.
/// - A leading shell-special character is a one-character name, so `$123`
///   refers to `1`.
/// - Otherwise the longest run of `[A-Za-z0-9_]`, which may be empty.
///
/// # Examples
///
/// ```
/// use shelltpl_application::variable_resolver::parser::parse_name;
///
/// assert_eq!(parse_name("{HOST}:80"), ("HOST", 6));
/// assert_eq!(parse_name("PORT/api"), ("PORT", 4));
/// assert_eq!(parse_name("$"), ("$", 1));
/// ```
#[must_use]
pub fn parse_name(rest: &str) -> (&str, usize) {
    let bytes = rest.as_bytes();
    match bytes.first() {
        None => ("", 0),
        Some(b'{') => {
            if bytes.len() > 2 && is_shell_special(bytes[1]) && bytes[2] == b'}' {
                return (&rest[1..2], 3);
            }
            bytes[1..]
                .iter()
                .position(|&b| b == b'}')
                .map_or(("", 1), |close| (&rest[1..=close], close + 2))
        }
        Some(&first) if is_shell_special(first) => (&rest[..1], 1),
        Some(_) => {
            let len = bytes.iter().take_while(|&&b| is_name_byte(b)).count();
            (&rest[..len], len)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_identifier() {
        assert_eq!(parse_name("FOO"), ("FOO", 3));
        assert_eq!(parse_name("my_var2 rest"), ("my_var2", 7));
        assert_eq!(parse_name("_x.y"), ("_x", 2));
    }

    #[test]
    fn test_braced_identifier() {
        assert_eq!(parse_name("{FOO}"), ("FOO", 5));
        assert_eq!(parse_name("{FOO}bar"), ("FOO", 5));
        assert_eq!(parse_name("{a.b-c}"), ("a.b-c", 7));
    }

    #[test]
    fn test_braced_special() {
        assert_eq!(parse_name("{$}"), ("$", 3));
        assert_eq!(parse_name("{1}"), ("1", 3));
        assert_eq!(parse_name("{?}x"), ("?", 3));
    }

    #[test]
    fn test_braced_multi_digit_uses_general_rule() {
        assert_eq!(parse_name("{12}"), ("12", 4));
    }

    #[test]
    fn test_empty_braces() {
        assert_eq!(parse_name("{}"), ("", 2));
    }

    #[test]
    fn test_unclosed_brace_consumes_only_brace() {
        assert_eq!(parse_name("{FOO"), ("", 1));
        assert_eq!(parse_name("{"), ("", 1));
    }

    #[test]
    fn test_special_characters() {
        for special in ["*", "#", "$", "@", "!", "?", "-"] {
            let input = format!("{special}tail");
            assert_eq!(parse_name(&input), (special, 1));
        }
    }

    #[test]
    fn test_leading_digit_is_single_character_name() {
        assert_eq!(parse_name("123"), ("1", 1));
        assert_eq!(parse_name("0abc"), ("0", 1));
    }

    #[test]
    fn test_no_name() {
        assert_eq!(parse_name(" FOO"), ("", 0));
        assert_eq!(parse_name("\n"), ("", 0));
        assert_eq!(parse_name("é"), ("", 0));
        assert_eq!(parse_name(""), ("", 0));
    }

    #[test]
    fn test_classifiers() {
        assert!(is_shell_special(b'9'));
        assert!(!is_shell_special(b'a'));
        assert!(is_name_byte(b'_'));
        assert!(is_name_byte(b'Z'));
        assert!(!is_name_byte(b'-'));
    }
}
