//! Character cursor for traversing source code.
//!
//! The cursor owns the scan position (a byte offset into the source) and the
//! line counter. It is UTF-8 aware: advancing always moves past a whole
//! character, so every offset it reports is a valid slice boundary.

/// A forward-only cursor over source text.
///
/// # Example
///
/// ```
/// use quillc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("a\nb");
/// assert_eq!(cursor.current_char(), 'a');
/// cursor.advance();
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'b');
/// assert_eq!(cursor.line(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`, on line 1.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
        }
    }

    /// Returns the character at the cursor, or `'\0'` at end of input.
    ///
    /// A literal NUL in the source is also returned as `'\0'`; use
    /// [`is_at_end`](Self::is_at_end) to tell the two apart.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters ahead of the cursor
    /// (0 = current), or `'\0'` past the end of input.
    ///
    /// # Example
    ///
    /// ```
    /// use quillc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("ab");
    /// assert_eq!(cursor.peek_char(1), 'b');
    /// assert_eq!(cursor.peek_char(2), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let bytes = self.source.as_bytes();

        // Fast path: every character up to and including the target is ASCII.
        if let Some(window) = bytes.get(self.position..=self.position + offset) {
            if window.is_ascii() {
                return window[offset] as char;
            }
        }

        self.remaining().chars().nth(offset).unwrap_or('\0')
    }

    /// Consumes the current character and returns it.
    ///
    /// Increments the line counter when the character is `'\n'`. Returns
    /// `'\0'` and does nothing at end of input.
    #[inline]
    pub fn advance(&mut self) -> char {
        let Some(c) = self.remaining().chars().next() else {
            return '\0';
        };
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        c
    }

    /// Consumes the current character if it equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use quillc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("==");
    /// assert!(cursor.match_char('='));
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
