//! Identifier and keyword scanning.

use crate::chars::is_alnum;
use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans an identifier or keyword whose first character is consumed.
    ///
    /// Consumes the maximal run of `[a-zA-Z0-9_]`, then looks the whole
    /// lexeme up in the keyword table. Only an exact match is a keyword.
    pub(crate) fn lex_identifier(&mut self) -> Token<'a> {
        while is_alnum(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);
        let kind = keyword_from_ident(text).unwrap_or(TokenKind::Identifier);
        self.make_token(kind)
    }
}
