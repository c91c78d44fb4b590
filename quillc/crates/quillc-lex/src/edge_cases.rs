//! Edge case tests for quillc-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, Scanner, Span, Token, TokenKind};

    fn scan_all(source: &str) -> Vec<Token<'_>> {
        Scanner::new(source).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_single_char_ident() {
        let t = scan_all("x");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_edge_single_underscore() {
        let t = scan_all("_");
        assert_eq!(t[0].kind, TokenKind::Identifier);
        assert_eq!(t[0].lexeme, "_");
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = scan_all(&name);
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].lexeme.len(), 10000);
    }

    #[test]
    fn test_edge_long_number() {
        let digits = "9".repeat(500);
        let t = scan_all(&digits);
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TokenKind::Number);
    }

    #[test]
    fn test_edge_digit_then_letters() {
        let t = scan_all("123abc");
        assert_eq!(t[0].lexeme, "123");
        assert_eq!(t[1].lexeme, "abc");
    }

    #[test]
    fn test_edge_adjacent_tokens_without_spaces() {
        let kinds: Vec<_> = scan_all("a==b!=c<=d>=e").iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::EqualEqual,
                TokenKind::Identifier,
                TokenKind::BangEqual,
                TokenKind::Identifier,
                TokenKind::LessThanEqual,
                TokenKind::Identifier,
                TokenKind::GreaterThanEqual,
                TokenKind::Identifier,
            ]
        );
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let t = scan_all("a\r\nb\r\nc");
        let lines: Vec<_> = t.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 2, 3]);
    }

    #[test]
    fn test_edge_comment_without_newline_then_eof() {
        let tokens = tokenize("// only a comment");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
        assert_eq!(tokens[0].span, Span::point(17));
    }

    #[test]
    fn test_edge_slash_before_comment() {
        let kinds: Vec<_> = scan_all("a / b // c").iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Identifier, TokenKind::Slash, TokenKind::Identifier]
        );
    }

    #[test]
    fn test_edge_unterminated_string_after_tokens() {
        let tokens = tokenize("print \"oops\nmore");
        assert_eq!(tokens[0].kind, TokenKind::Print);
        assert_eq!(tokens[1].kind, TokenKind::Error);
        assert_eq!(tokens[1].span, Span::new(6, 16));
        assert_eq!(tokens[2].kind, TokenKind::Eof);
        assert_eq!(tokens[2].line, 2);
    }

    #[test]
    fn test_edge_consecutive_errors() {
        let t = scan_all("@#$");
        assert_eq!(t.len(), 3);
        assert!(t.iter().all(|t| t.is_error()));
        assert_eq!(t[2].span, Span::new(2, 3));
    }

    #[test]
    fn test_edge_unsupported_punctuation() {
        for source in ["[", "]", "%", "&", "|", "^", "~", ":", "?", "'"] {
            let t = scan_all(source);
            assert_eq!(t.len(), 1, "{source}");
            assert!(t[0].is_error(), "{source}");
        }
    }

    #[test]
    fn test_edge_error_line_after_newlines() {
        let t = scan_all("\n\n  @");
        assert!(t[0].is_error());
        assert_eq!(t[0].line, 3);
    }

    #[test]
    fn test_edge_emoji_outside_string() {
        let t = scan_all("a 😀 b");
        assert_eq!(t.len(), 3);
        assert!(t[1].is_error());
        assert_eq!(t[1].span.len(), 4);
        assert_eq!(t[2].lexeme, "b");
    }

    #[test]
    fn test_edge_lexeme_matches_span() {
        let source = "fun add(a, b) { return a + b; } // sum\nprint add(1.5, 2);";
        for token in scan_all(source) {
            assert_eq!(token.span.slice(source), Some(token.lexeme));
        }
    }
}
