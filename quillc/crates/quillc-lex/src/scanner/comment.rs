//! Whitespace and comment skipping.

use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Skips whitespace, newlines and line comments.
    ///
    /// Stops at the first character that starts a token, or at end of
    /// input. Newlines are counted by the cursor as they are consumed.
    pub(crate) fn skip_whitespace(&mut self) {
        loop {
            match self.cursor.current_char() {
                ' ' | '\r' | '\t' | '\n' => {
                    self.cursor.advance();
                },
                '/' if self.cursor.peek_char(1) == '/' => self.skip_line_comment(),
                _ => return,
            }
        }
    }

    /// Skips a line comment up to, but not including, the newline.
    fn skip_line_comment(&mut self) {
        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Scanner, TokenKind};

    #[test]
    fn test_skip_whitespace() {
        let mut scanner = Scanner::new(" \t\r hello");
        scanner.skip_whitespace();
        assert_eq!(scanner.position(), 4);
        assert_eq!(scanner.scan_token().lexeme, "hello");
    }

    #[test]
    fn test_skip_line_comment() {
        let mut scanner = Scanner::new("// hello\n123");
        let token = scanner.scan_token();
        assert_eq!(token.kind, TokenKind::Number);
        assert_eq!(token.lexeme, "123");
        assert_eq!(token.line, 2);
    }

    #[test]
    fn test_comment_at_end_of_input() {
        let mut scanner = Scanner::new("1 // trailing");
        assert_eq!(scanner.scan_token().kind, TokenKind::Number);
        let eof = scanner.scan_token();
        assert!(eof.is_eof());
        assert_eq!(eof.line, 1);
    }

    #[test]
    fn test_consecutive_comments() {
        let mut scanner = Scanner::new("// one\n// two\n\n// three\nx");
        let token = scanner.scan_token();
        assert_eq!(token.lexeme, "x");
        assert_eq!(token.line, 5);
    }

    #[test]
    fn test_single_slash_is_a_token() {
        let mut scanner = Scanner::new("/ /");
        assert_eq!(scanner.scan_token().kind, TokenKind::Slash);
        assert_eq!(scanner.scan_token().kind, TokenKind::Slash);
        assert!(scanner.scan_token().is_eof());
    }

    #[test]
    fn test_block_comments_are_not_comments() {
        let kinds: Vec<_> = Scanner::new("/* */").map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Slash, TokenKind::Star, TokenKind::Star, TokenKind::Slash]
        );
    }
}
