//! ASCII character classification used by the scanner.
//!
//! Identifiers and numbers are ASCII-only. Any other character outside a
//! string literal is an unexpected character.

/// Checks if a character is an ASCII decimal digit.
///
/// # Example
///
/// ```
/// use quillc_lex::chars::is_digit;
///
/// assert!(is_digit('7'));
/// assert!(!is_digit('a'));
/// assert!(!is_digit('٣')); // Arabic-Indic three
/// ```
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character can start an identifier: `[a-zA-Z_]`.
///
/// # Example
///
/// ```
/// use quillc_lex::chars::is_alpha;
///
/// assert!(is_alpha('x'));
/// assert!(is_alpha('_'));
/// assert!(!is_alpha('1'));
/// assert!(!is_alpha('α'));
/// ```
#[inline]
pub fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character can continue an identifier: `[a-zA-Z0-9_]`.
#[inline]
pub fn is_alnum(c: char) -> bool {
    is_alpha(c) || is_digit(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_classes() {
        for c in ['a', 'z', 'A', 'Z', '_'] {
            assert!(is_alpha(c));
            assert!(is_alnum(c));
        }
        for c in '0'..='9' {
            assert!(is_digit(c));
            assert!(!is_alpha(c));
            assert!(is_alnum(c));
        }
    }

    #[test]
    fn test_rejects_non_ascii() {
        for c in ['é', 'ß', '日', '\0', ' ', '$'] {
            assert!(!is_alnum(c));
        }
    }
}
