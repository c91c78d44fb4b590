//! One and two character operators.
//!
//! Each of `!`, `=`, `<` and `>` takes a following `=` if one is present
//! (maximal munch), otherwise it stands alone.

use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Handles: `!`, `!=`
    pub(crate) fn lex_bang(&mut self) -> Token<'a> {
        self.lex_with_equals(TokenKind::BangEqual, TokenKind::Bang)
    }

    /// Handles: `=`, `==`
    pub(crate) fn lex_equals(&mut self) -> Token<'a> {
        self.lex_with_equals(TokenKind::EqualEqual, TokenKind::Equal)
    }

    /// Handles: `<`, `<=`
    pub(crate) fn lex_less(&mut self) -> Token<'a> {
        self.lex_with_equals(TokenKind::LessThanEqual, TokenKind::LessThan)
    }

    /// Handles: `>`, `>=`
    pub(crate) fn lex_greater(&mut self) -> Token<'a> {
        self.lex_with_equals(TokenKind::GreaterThanEqual, TokenKind::GreaterThan)
    }

    fn lex_with_equals(&mut self, with_equals: TokenKind, alone: TokenKind) -> Token<'a> {
        if self.cursor.match_char('=') {
            self.make_token(with_equals)
        } else {
            self.make_token(alone)
        }
    }
}
