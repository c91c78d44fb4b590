//! Property-based tests for quillc-lex, using proptest for arbitrary inputs.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{keyword_from_ident, tokenize, Scanner, TokenKind};

    proptest! {
        #[test]
        fn test_property_never_panics_and_ends_with_eof(input in "\\PC{0,200}") {
            let tokens = tokenize(&input);
            let last = tokens.last().unwrap();
            prop_assert!(last.is_eof());
            prop_assert_eq!(last.span.end, input.len());
        }

        #[test]
        fn test_property_lexeme_roundtrip(input in "[ -~\\n\\t]{0,200}") {
            for token in tokenize(&input) {
                if token.is_error() || token.is_eof() {
                    continue;
                }
                prop_assert_eq!(token.span.slice(&input), Some(token.lexeme));
            }
        }

        #[test]
        fn test_property_spans_are_ordered(input in "\\PC{0,200}") {
            let mut previous_end = 0;
            for token in tokenize(&input) {
                prop_assert!(token.span.start >= previous_end);
                prop_assert!(token.span.start <= token.span.end);
                previous_end = token.span.end;
            }
        }

        #[test]
        fn test_property_lines_never_decrease(input in "[a-z0-9 \\n\"/.]{0,200}") {
            let mut previous_line = 1;
            for token in tokenize(&input) {
                prop_assert!(token.line >= previous_line);
                previous_line = token.line;
            }
        }

        #[test]
        fn test_property_identifier_or_keyword(input in "[a-zA-Z_][a-zA-Z0-9_]{0,60}") {
            let tokens: Vec<_> = Scanner::new(&input).collect();
            prop_assert_eq!(tokens.len(), 1);
            let expected = keyword_from_ident(&input).unwrap_or(TokenKind::Identifier);
            prop_assert_eq!(tokens[0].kind, expected);
            prop_assert_eq!(tokens[0].lexeme, input.as_str());
        }

        #[test]
        fn test_property_decimal_numbers(input in "[0-9]{1,20}(\\.[0-9]{1,20})?") {
            let tokens: Vec<_> = Scanner::new(&input).collect();
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].kind, TokenKind::Number);
            prop_assert!(tokens[0].number_value().is_some());
        }

        #[test]
        fn test_property_string_literals(body in "[^\"]{0,100}") {
            let source = format!("\"{}\"", body);
            let tokens: Vec<_> = Scanner::new(&source).collect();
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].kind, TokenKind::String);
            prop_assert_eq!(tokens[0].lexeme, source.as_str());
        }

        #[test]
        fn test_property_eof_idempotent(input in "\\PC{0,50}", extra in 1usize..8) {
            let mut scanner = Scanner::new(&input);
            let eof = loop {
                let token = scanner.scan_token();
                if token.is_eof() {
                    break token;
                }
            };
            for _ in 0..extra {
                prop_assert_eq!(scanner.scan_token(), eof);
            }
        }
    }
}
