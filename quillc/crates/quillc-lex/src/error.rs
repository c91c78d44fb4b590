//! Lexical fault kinds.
//!
//! The scanner never returns `Err`: every fault becomes a
//! [`TokenKind::Error`](crate::TokenKind::Error) token whose lexeme is the
//! message of one of these variants. Callers decide whether an error token
//! aborts a larger parse.

use thiserror::Error;

/// A lexical fault detected while scanning.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexError {
    /// A character that cannot start any token.
    #[error("Unexpected character.")]
    UnexpectedCharacter,

    /// A string literal with no closing quote before end of input.
    #[error("Unterminated string.")]
    UnterminatedString,
}

impl LexError {
    /// Returns the message carried by error tokens of this kind.
    ///
    /// Same text as the `Display` output, but borrowed for `'static` so it
    /// can live in a token's lexeme without allocating.
    pub const fn message(self) -> &'static str {
        match self {
            LexError::UnexpectedCharacter => "Unexpected character.",
            LexError::UnterminatedString => "Unterminated string.",
        }
    }

    /// Maps an error token's message back to its kind.
    pub fn from_message(message: &str) -> Option<Self> {
        [LexError::UnexpectedCharacter, LexError::UnterminatedString]
            .into_iter()
            .find(|e| e.message() == message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_message() {
        for err in [LexError::UnexpectedCharacter, LexError::UnterminatedString] {
            assert_eq!(err.to_string(), err.message());
        }
    }

    #[test]
    fn test_from_message() {
        assert_eq!(
            LexError::from_message("Unterminated string."),
            Some(LexError::UnterminatedString)
        );
        assert_eq!(LexError::from_message("something else"), None);
    }
}
