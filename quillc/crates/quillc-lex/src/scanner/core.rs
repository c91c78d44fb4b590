//! Core scanner implementation.
//!
//! This module contains the `Scanner` struct, the per-call dispatch on the
//! first character of a token, and token construction.

use std::iter::FusedIterator;

use crate::chars::{is_alpha, is_digit};
use crate::cursor::Cursor;
use crate::error::LexError;
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Pull-based scanner for Quill source code.
///
/// Each call to [`scan_token`](Scanner::scan_token) produces exactly one
/// token and moves the cursor past it. Malformed input never aborts the
/// scan: it yields an [`TokenKind::Error`] token and scanning can continue.
/// Once the input is exhausted every call returns [`TokenKind::Eof`].
///
/// # Example
///
/// ```
/// use quillc_lex::{Scanner, TokenKind};
///
/// let mut scanner = Scanner::new("var x = 1;");
/// assert_eq!(scanner.scan_token().kind, TokenKind::Var);
/// assert_eq!(scanner.scan_token().lexeme, "x");
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    /// Character cursor; holds the current offset and line counter.
    pub(crate) cursor: Cursor<'a>,

    /// Byte offset of the first character of the token being built.
    pub(crate) token_start: usize,

    /// Line on which the token being built starts.
    pub(crate) token_start_line: u32,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_start_line: 1,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Skips whitespace, newlines and `//` comments, then classifies the
    /// first significant character. At end of input this returns an EOF
    /// token with an empty lexeme, and keeps doing so on every later call.
    pub fn scan_token(&mut self) -> Token<'a> {
        self.skip_whitespace();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();

        if self.cursor.is_at_end() {
            return self.make_token(TokenKind::Eof);
        }

        let c = self.cursor.advance();

        if is_digit(c) {
            return self.lex_number();
        }
        if is_alpha(c) {
            return self.lex_identifier();
        }

        match c {
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            '{' => self.make_token(TokenKind::LeftBrace),
            '}' => self.make_token(TokenKind::RightBrace),
            ';' => self.make_token(TokenKind::Semicolon),
            ',' => self.make_token(TokenKind::Comma),
            '.' => self.make_token(TokenKind::Dot),
            '-' => self.make_token(TokenKind::Minus),
            '+' => self.make_token(TokenKind::Plus),
            '/' => self.make_token(TokenKind::Slash),
            '*' => self.make_token(TokenKind::Star),
            '!' => self.lex_bang(),
            '=' => self.lex_equals(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '"' => self.lex_string(),
            _ => self.error_token(LexError::UnexpectedCharacter),
        }
    }

    /// Builds a token of `kind` spanning from the token start to the cursor.
    pub(crate) fn make_token(&self, kind: TokenKind) -> Token<'a> {
        Token::new(
            kind,
            self.cursor.slice_from(self.token_start),
            self.token_start_line,
            self.current_span(),
        )
    }

    /// Builds an error token for `error` spanning the consumed text.
    pub(crate) fn error_token(&self, error: LexError) -> Token<'a> {
        let span = self.current_span();
        tracing::debug!(
            line = self.token_start_line,
            start = span.start,
            end = span.end,
            "lexical error: {}",
            error
        );
        Token::from_error(error, self.token_start_line, span)
    }

    fn current_span(&self) -> Span {
        Span::new(self.token_start, self.cursor.position())
    }

    /// Returns the current line number (1-based).
    ///
    /// This is the line of the next unconsumed character, which may be past
    /// the line of the last token returned.
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the byte offset of the next unconsumed character.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the source text being scanned.
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }
}

/// Yields tokens up to, but not including, the EOF token.
impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.scan_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

impl FusedIterator for Scanner<'_> {}
