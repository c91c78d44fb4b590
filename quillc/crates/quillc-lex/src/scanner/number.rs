//! Number literal scanning.

use crate::chars::is_digit;
use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans a number literal whose first digit is consumed.
    ///
    /// A fractional part is taken only when the `.` is followed by a digit,
    /// so `3.` scans as `3` followed by a separate dot. There is no exponent
    /// or sign handling; the lexeme is returned unparsed.
    pub(crate) fn lex_number(&mut self) -> Token<'a> {
        self.skip_digits();

        if self.cursor.current_char() == '.' && is_digit(self.cursor.peek_char(1)) {
            self.cursor.advance();
            self.skip_digits();
        }

        self.make_token(TokenKind::Number)
    }

    fn skip_digits(&mut self) {
        while is_digit(self.cursor.current_char()) {
            self.cursor.advance();
        }
    }
}
