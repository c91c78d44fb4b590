//! quillc-lex - Lexical Scanner for the Quill Scripting Language
//!
//! This crate turns Quill source text into a lazy stream of classified
//! tokens for the parser. Scanning is pull-based: each call to
//! [`Scanner::scan_token`] produces exactly one token.
//!
//! # Example Usage
//!
//! ```
//! use quillc_lex::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("print x >= 3.5; // done");
//!
//! let token = scanner.scan_token();
//! assert_eq!(token.kind, TokenKind::Print);
//!
//! // Or iterate; iteration stops before the EOF token
//! let rest: Vec<TokenKind> = scanner.map(|t| t.kind).collect();
//! assert_eq!(
//!     rest,
//!     [TokenKind::Identifier, TokenKind::GreaterThanEqual, TokenKind::Number, TokenKind::Semicolon]
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, the token value and the keyword table
//! - [`scanner`] - The scanner and its per-rule submodules
//! - [`cursor`] - Character cursor with line tracking
//! - [`chars`] - ASCII character classification
//! - [`span`] - Byte ranges of tokens in the source
//! - [`error`] - Lexical fault kinds
//!
//! # Token Categories
//!
//! **Punctuation**: `(` `)` `{` `}` `,` `.` `;`
//!
//! **Operators**: `-` `+` `/` `*` `!` `!=` `=` `==` `<` `<=` `>` `>=`
//!
//! **Literals**: numbers (`42`, `3.14`), strings (`"text"`, may span lines,
//! no escapes), identifiers (`[a-zA-Z_][a-zA-Z0-9_]*`)
//!
//! **Keywords**: `and` `class` `def` `else` `false` `for` `fun` `if` `let`
//! `nil` `or` `print` `return` `super` `this` `true` `var` `while`
//!
//! Further tags (bitwise, compound assignment, words like `lambda` or
//! `yield`) are part of [`TokenKind`] but are not produced yet.
//!
//! **Comments**: `//` to end of line.
//!
//! # Errors
//!
//! The scanner never fails. An unexpected character or an unterminated
//! string yields a [`TokenKind::Error`] token whose lexeme is the message,
//! and scanning can continue from there.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod error;
pub mod scanner;
pub mod span;
pub mod token;

#[cfg(test)]
mod edge_cases;
#[cfg(test)]
mod properties;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::LexError;
pub use scanner::Scanner;
pub use span::Span;
pub use token::{keyword_from_ident, Token, TokenKind};

/// Scans all of `source`, returning every token including the final EOF.
///
/// # Example
///
/// ```
/// use quillc_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("a = 1");
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[3].kind, TokenKind::Eof);
/// ```
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.scan_token();
        let done = token.is_eof();
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}
