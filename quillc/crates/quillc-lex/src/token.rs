//! Token definitions for the Quill scanner.
//!
//! A [`Token`] is a small `Copy` value that borrows its lexeme from the
//! source text. Its [`TokenKind`] is drawn from a closed tag set that the
//! parser depends on; some tags are reserved and never produced by the
//! current scanning rules.

use std::fmt;

use crate::error::LexError;
use crate::span::Span;

/// The closed set of token tags.
///
/// The order and the set of variants are part of the interface consumed by
/// the parser. Tags listed in [`TokenKind::is_reserved`] exist for forward
/// compatibility only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    // Single-character punctuation and arithmetic
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `;`
    Semicolon,
    /// `/`
    Slash,
    /// `*`
    Star,
    /// `%` (reserved)
    Percentage,
    /// `**` (reserved)
    Exponent,

    // Bitwise operators (reserved)
    /// `&`
    BitwiseAnd,
    /// `<<`
    BitwiseLeftShift,
    /// `~`
    BitwiseNot,
    /// `|`
    BitwiseOr,
    /// `>>`
    BitwiseRightShift,
    /// `^`
    BitwiseXor,

    // Logical operators (reserved)
    /// `&&`
    LogicalAnd,
    /// logical negation
    LogicalNot,
    /// `||`
    LogicalOr,

    // Assignment operators (reserved)
    /// `:=`
    Assign,
    /// `+=`
    AssignPlus,
    /// `/=`
    AssignSlash,
    /// `**=`
    AssignExponent,
    /// `//=`
    AssignDoubleSlash,
    /// `%=`
    AssignPercentage,
    /// `*=`
    AssignStar,
    /// `-=`
    AssignMinus,

    // Bitwise assignment operators (reserved)
    /// `&=`
    AssignBitwiseAnd,
    /// `<<=`
    AssignBitwiseLeftShift,
    /// `|=`
    AssignBitwiseOr,
    /// `>>=`
    AssignBitwiseRightShift,
    /// `^=`
    AssignBitwiseXor,

    // Comparison
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterThanEqual,
    /// `<`
    LessThan,
    /// `<=`
    LessThanEqual,
    /// `<>` (reserved)
    NotEqual,
    /// `!=`
    BangEqual,
    /// `!`
    Bang,

    // Literals
    /// An identifier that is not a keyword.
    Identifier,
    /// A number literal such as `42` or `3.14`.
    Number,
    /// A string literal, including its quotes.
    String,

    // Keywords
    /// `and`
    And,
    /// `as` (reserved)
    As,
    /// `assert` (reserved)
    Assert,
    /// `break` (reserved)
    Break,
    /// `class`
    Class,
    /// `continue` (reserved)
    Continue,
    /// `contract` (reserved)
    Contract,
    /// `def`
    Def,
    /// `del` (reserved)
    Del,
    /// `elif` (reserved)
    Elif,
    /// `else`
    Else,
    /// `except` (reserved)
    Except,
    /// `false`
    False,
    /// `finally` (reserved)
    Finally,
    /// `for`
    For,
    /// `from` (reserved)
    From,
    /// `fun`
    Fun,
    /// `global` (reserved)
    Global,
    /// `if`
    If,
    /// `import` (reserved)
    Import,
    /// `in` (reserved)
    In,
    /// `is` (reserved)
    Is,
    /// `lambda` (reserved)
    Lambda,
    /// `let`
    Let,
    /// `nil`
    Nil,
    /// `none` (reserved)
    None,
    /// `not` (reserved)
    Not,
    /// `or`
    Or,
    /// `pass` (reserved)
    Pass,
    /// `print`
    Print,
    /// `raise` (reserved)
    Raise,
    /// `return`
    Return,
    /// `super`
    Super,
    /// `this`
    This,
    /// `true`
    True,
    /// `try` (reserved)
    Try,
    /// `var`
    Var,
    /// `while`
    While,
    /// `with` (reserved)
    With,
    /// `yield` (reserved)
    Yield,

    // Terminal
    /// A lexical fault; the token's lexeme holds the message.
    Error,
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Every tag, in declaration order.
    pub const ALL: [TokenKind; 89] = {
        use TokenKind::*;
        [
            LeftParen, RightParen, LeftBrace, RightBrace, Comma, Dot, Minus, Plus, Semicolon,
            Slash, Star, Percentage, Exponent, BitwiseAnd, BitwiseLeftShift, BitwiseNot,
            BitwiseOr, BitwiseRightShift, BitwiseXor, LogicalAnd, LogicalNot, LogicalOr, Assign,
            AssignPlus, AssignSlash, AssignExponent, AssignDoubleSlash, AssignPercentage,
            AssignStar, AssignMinus, AssignBitwiseAnd, AssignBitwiseLeftShift, AssignBitwiseOr,
            AssignBitwiseRightShift, AssignBitwiseXor, Equal, EqualEqual, GreaterThan,
            GreaterThanEqual, LessThan, LessThanEqual, NotEqual, BangEqual, Bang, Identifier,
            Number, String, And, As, Assert, Break, Class, Continue, Contract, Def, Del, Elif,
            Else, Except, False, Finally, For, From, Fun, Global, If, Import, In, Is, Lambda, Let,
            Nil, None, Not, Or, Pass, Print, Raise, Return, Super, This, True, Try, Var, While,
            With, Yield, Error, Eof,
        ]
    };

    /// Returns the stable upper-snake-case name of this tag.
    pub fn name(self) -> &'static str {
        use TokenKind::*;
        match self {
            LeftParen => "LEFT_PAREN",
            RightParen => "RIGHT_PAREN",
            LeftBrace => "LEFT_BRACE",
            RightBrace => "RIGHT_BRACE",
            Comma => "COMMA",
            Dot => "DOT",
            Minus => "MINUS",
            Plus => "PLUS",
            Semicolon => "SEMICOLON",
            Slash => "SLASH",
            Star => "STAR",
            Percentage => "PERCENTAGE",
            Exponent => "EXPONENT",
            BitwiseAnd => "BITWISE_AND",
            BitwiseLeftShift => "BITWISE_LEFT_SHIFT",
            BitwiseNot => "BITWISE_NOT",
            BitwiseOr => "BITWISE_OR",
            BitwiseRightShift => "BITWISE_RIGHT_SHIFT",
            BitwiseXor => "BITWISE_XOR",
            LogicalAnd => "LOGICAL_AND",
            LogicalNot => "LOGICAL_NOT",
            LogicalOr => "LOGICAL_OR",
            Assign => "ASSIGN",
            AssignPlus => "ASSIGN_PLUS",
            AssignSlash => "ASSIGN_SLASH",
            AssignExponent => "ASSIGN_EXPONENT",
            AssignDoubleSlash => "ASSIGN_DOUBLE_SLASH",
            AssignPercentage => "ASSIGN_PERCENTAGE",
            AssignStar => "ASSIGN_STAR",
            AssignMinus => "ASSIGN_MINUS",
            AssignBitwiseAnd => "ASSIGN_BITWISE_AND",
            AssignBitwiseLeftShift => "ASSIGN_BITWISE_LEFT_SHIFT",
            AssignBitwiseOr => "ASSIGN_BITWISE_OR",
            AssignBitwiseRightShift => "ASSIGN_BITWISE_RIGHT_SHIFT",
            AssignBitwiseXor => "ASSIGN_BITWISE_XOR",
            Equal => "EQUAL",
            EqualEqual => "EQUAL_EQUAL",
            GreaterThan => "GREATER_THAN",
            GreaterThanEqual => "GREATER_THAN_EQUAL",
            LessThan => "LESS_THAN",
            LessThanEqual => "LESS_THAN_EQUAL",
            NotEqual => "NOT_EQUAL",
            BangEqual => "BANG_EQUAL",
            Bang => "BANG",
            Identifier => "IDENTIFIER",
            Number => "NUMBER",
            String => "STRING",
            And => "AND",
            As => "AS",
            Assert => "ASSERT",
            Break => "BREAK",
            Class => "CLASS",
            Continue => "CONTINUE",
            Contract => "CONTRACT",
            Def => "DEF",
            Del => "DEL",
            Elif => "ELIF",
            Else => "ELSE",
            Except => "EXCEPT",
            False => "FALSE",
            Finally => "FINALLY",
            For => "FOR",
            From => "FROM",
            Fun => "FUN",
            Global => "GLOBAL",
            If => "IF",
            Import => "IMPORT",
            In => "IN",
            Is => "IS",
            Lambda => "LAMBDA",
            Let => "LET",
            Nil => "NIL",
            None => "NONE",
            Not => "NOT",
            Or => "OR",
            Pass => "PASS",
            Print => "PRINT",
            Raise => "RAISE",
            Return => "RETURN",
            Super => "SUPER",
            This => "THIS",
            True => "TRUE",
            Try => "TRY",
            Var => "VAR",
            While => "WHILE",
            With => "WITH",
            Yield => "YIELD",
            Error => "ERROR",
            Eof => "EOF",
        }
    }

    /// Returns true for every keyword tag, scanned or reserved.
    pub fn is_keyword(self) -> bool {
        (TokenKind::And as u8..=TokenKind::Yield as u8).contains(&(self as u8))
    }

    /// Returns true for tags that exist in the tag set but are never
    /// produced by the scanner.
    pub fn is_reserved(self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            Percentage
                | Exponent
                | BitwiseAnd
                | BitwiseLeftShift
                | BitwiseNot
                | BitwiseOr
                | BitwiseRightShift
                | BitwiseXor
                | LogicalAnd
                | LogicalNot
                | LogicalOr
                | Assign
                | AssignPlus
                | AssignSlash
                | AssignExponent
                | AssignDoubleSlash
                | AssignPercentage
                | AssignStar
                | AssignMinus
                | AssignBitwiseAnd
                | AssignBitwiseLeftShift
                | AssignBitwiseOr
                | AssignBitwiseRightShift
                | AssignBitwiseXor
                | NotEqual
                | As
                | Assert
                | Break
                | Continue
                | Contract
                | Del
                | Elif
                | Except
                | Finally
                | From
                | Global
                | Import
                | In
                | Is
                | Lambda
                | None
                | Not
                | Pass
                | Raise
                | Try
                | With
                | Yield
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps an identifier to the keyword it spells, if any.
///
/// The match is exact: `print` is a keyword, `printer` and `prin` are not.
/// Reserved words such as `import` or `lambda` are not recognized and
/// scan as identifiers.
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    let kind = match ident {
        "and" => TokenKind::And,
        "class" => TokenKind::Class,
        "def" => TokenKind::Def,
        "else" => TokenKind::Else,
        "false" => TokenKind::False,
        "for" => TokenKind::For,
        "fun" => TokenKind::Fun,
        "if" => TokenKind::If,
        "let" => TokenKind::Let,
        "nil" => TokenKind::Nil,
        "or" => TokenKind::Or,
        "print" => TokenKind::Print,
        "return" => TokenKind::Return,
        "super" => TokenKind::Super,
        "this" => TokenKind::This,
        "true" => TokenKind::True,
        "var" => TokenKind::Var,
        "while" => TokenKind::While,
        _ => return None,
    };
    Some(kind)
}

/// A single token produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The token's tag.
    pub kind: TokenKind,
    /// The source text of the token, or the message of an error token.
    pub lexeme: &'a str,
    /// Line (1-based) of the token's first character.
    pub line: u32,
    /// Byte range of the source consumed by this token.
    pub span: Span,
}

impl<'a> Token<'a> {
    /// Creates a token.
    pub fn new(kind: TokenKind, lexeme: &'a str, line: u32, span: Span) -> Self {
        Self {
            kind,
            lexeme,
            line,
            span,
        }
    }

    /// Creates an error token carrying the message of `error`.
    pub fn from_error(error: LexError, line: u32, span: Span) -> Self {
        Self::new(TokenKind::Error, error.message(), line, span)
    }

    /// Returns the token's tag.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the lexeme, or the message of an error token.
    pub fn lexeme(&self) -> &'a str {
        self.lexeme
    }

    /// Returns the line of the token's first character.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the byte range of source consumed by this token.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns true for the end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Returns true for error tokens.
    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }

    /// Recovers the lexical fault an error token was built from.
    ///
    /// Returns `None` for any other kind of token.
    pub fn error(&self) -> Option<LexError> {
        if self.is_error() {
            LexError::from_message(self.lexeme)
        } else {
            None
        }
    }

    /// Parses the value of a number token.
    ///
    /// The scanner only classifies numbers; this is a convenience for
    /// consumers. Returns `None` for non-number tokens.
    pub fn number_value(&self) -> Option<f64> {
        if self.kind == TokenKind::Number {
            self.lexeme.parse().ok()
        } else {
            None
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} '{}'", self.line, self.kind, self.lexeme)
    }
}
