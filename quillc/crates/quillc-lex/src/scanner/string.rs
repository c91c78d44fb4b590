//! String literal scanning.

use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans a string literal whose opening quote is consumed.
    ///
    /// Strings may span lines; the cursor counts every newline inside. There
    /// are no escape sequences, so the first `"` closes the literal. The
    /// lexeme keeps both quotes. Reaching end of input first yields an
    /// unterminated-string error token and leaves the cursor at the end.
    pub(crate) fn lex_string(&mut self) -> Token<'a> {
        while !self.cursor.is_at_end() && self.cursor.current_char() != '"' {
            self.cursor.advance();
        }

        if self.cursor.is_at_end() {
            return self.error_token(LexError::UnterminatedString);
        }

        // Closing quote
        self.cursor.advance();
        self.make_token(TokenKind::String)
    }
}
