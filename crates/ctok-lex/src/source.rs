//! Line-buffered character source for the scanner.
//!
//! This module provides the `CharSource` struct which feeds the scanner
//! one character at a time from any line-oriented reader. It supports a
//! single level of pushback so the scanner can undo the read that ended
//! a token.

use std::io::{self, BufRead};

/// A character stream over a line-oriented reader.
///
/// The source buffers one physical line at a time. A synthetic `'\n'` is
/// appended to every line so that the buffer is never empty and a pushback
/// near the end of a line always stays within the current buffer.
///
/// # Example
///
/// ```
/// use ctok_lex::CharSource;
///
/// let mut source = CharSource::new("int x;".as_bytes());
///
/// assert_eq!(source.next_char().unwrap(), Some('i'));
/// assert_eq!(source.next_char().unwrap(), Some('n'));
/// ```
pub struct CharSource<R> {
    /// The underlying reader supplying physical lines.
    reader: R,

    /// Characters of the current line, including the synthetic newline.
    buf: Vec<char>,

    /// Read cursor within `buf`. Never exceeds `buf.len()`.
    pos: usize,

    /// Number of lines pulled so far (1-based once reading starts).
    line: u32,

    /// Whether the underlying reader has been exhausted.
    eof: bool,
}

impl<R: BufRead> CharSource<R> {
    /// Creates a new character source over the given reader.
    ///
    /// # Example
    ///
    /// ```
    /// use ctok_lex::CharSource;
    ///
    /// let source = CharSource::new("int main() {}".as_bytes());
    /// ```
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            pos: 0,
            line: 0,
            eof: false,
        }
    }

    /// Returns the next character in program order, or `None` once the
    /// underlying reader is exhausted.
    ///
    /// Crossing a line boundary pulls the next physical line. The line
    /// terminator (`\n` or `\r\n`) is stripped and a synthetic `'\n'` is
    /// appended, so every line yields a trailing newline character.
    ///
    /// The only failure is an I/O error from the underlying reader.
    ///
    /// # Example
    ///
    /// ```
    /// use ctok_lex::CharSource;
    ///
    /// let mut source = CharSource::new("a".as_bytes());
    /// assert_eq!(source.next_char().unwrap(), Some('a'));
    /// assert_eq!(source.next_char().unwrap(), Some('\n'));
    /// assert_eq!(source.next_char().unwrap(), None);
    /// ```
    pub fn next_char(&mut self) -> io::Result<Option<char>> {
        if self.pos < self.buf.len() {
            let c = self.buf[self.pos];
            self.pos += 1;
            return Ok(Some(c));
        }

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            self.eof = true;
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        self.buf = line.chars().collect();
        self.buf.push('\n');
        self.pos = 1;
        self.line += 1;
        Ok(Some(self.buf[0]))
    }

    /// Rewinds the cursor by exactly one position.
    ///
    /// Usage contract: call at most once between two calls to
    /// [`next_char`](Self::next_char). Deeper pushback is not supported.
    /// Calling this after end of stream has been observed is a no-op, so
    /// the scanner cannot rewind past the end of the input.
    ///
    /// # Example
    ///
    /// ```
    /// use ctok_lex::CharSource;
    ///
    /// let mut source = CharSource::new("ab".as_bytes());
    /// assert_eq!(source.next_char().unwrap(), Some('a'));
    /// source.push_back();
    /// assert_eq!(source.next_char().unwrap(), Some('a'));
    /// ```
    pub fn push_back(&mut self) {
        if !self.eof && self.pos > 0 {
            self.pos -= 1;
        }
    }

    /// Returns the current line number (1-based once reading starts).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns true if end of stream has been observed.
    pub fn is_at_end(&self) -> bool {
        self.eof
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(source: &mut CharSource<&[u8]>) -> String {
        let mut out = String::new();
        while let Some(c) = source.next_char().unwrap() {
            out.push(c);
        }
        out
    }

    #[test]
    fn test_single_line_gets_synthetic_newline() {
        let mut source = CharSource::new("abc".as_bytes());
        assert_eq!(drain(&mut source), "abc\n");
    }

    #[test]
    fn test_multiple_lines() {
        let mut source = CharSource::new("ab\ncd\n".as_bytes());
        assert_eq!(drain(&mut source), "ab\ncd\n");
    }

    #[test]
    fn test_crlf_terminator_stripped() {
        let mut source = CharSource::new("ab\r\ncd".as_bytes());
        assert_eq!(drain(&mut source), "ab\ncd\n");
    }

    #[test]
    fn test_empty_input() {
        let mut source = CharSource::new("".as_bytes());
        assert_eq!(source.next_char().unwrap(), None);
        assert!(source.is_at_end());
    }

    #[test]
    fn test_empty_line_yields_newline() {
        let mut source = CharSource::new("\nx".as_bytes());
        assert_eq!(source.next_char().unwrap(), Some('\n'));
        assert_eq!(source.next_char().unwrap(), Some('x'));
    }

    #[test]
    fn test_push_back_rereads_character() {
        let mut source = CharSource::new("xy".as_bytes());
        assert_eq!(source.next_char().unwrap(), Some('x'));
        source.push_back();
        assert_eq!(source.next_char().unwrap(), Some('x'));
        assert_eq!(source.next_char().unwrap(), Some('y'));
    }

    #[test]
    fn test_push_back_at_line_start() {
        // Crossing a line boundary leaves the cursor past the first
        // character of the new line, so one pushback is always valid.
        let mut source = CharSource::new("a\nb".as_bytes());
        assert_eq!(source.next_char().unwrap(), Some('a'));
        assert_eq!(source.next_char().unwrap(), Some('\n'));
        assert_eq!(source.next_char().unwrap(), Some('b'));
        source.push_back();
        assert_eq!(source.next_char().unwrap(), Some('b'));
    }

    #[test]
    fn test_push_back_after_eof_is_noop() {
        let mut source = CharSource::new("a".as_bytes());
        assert_eq!(source.next_char().unwrap(), Some('a'));
        assert_eq!(source.next_char().unwrap(), Some('\n'));
        assert_eq!(source.next_char().unwrap(), None);
        source.push_back();
        assert_eq!(source.next_char().unwrap(), None);
    }

    #[test]
    fn test_line_numbers() {
        let mut source = CharSource::new("ab\ncd".as_bytes());
        assert_eq!(source.line(), 0);
        source.next_char().unwrap();
        assert_eq!(source.line(), 1);
        source.next_char().unwrap(); // 'b'
        source.next_char().unwrap(); // '\n'
        assert_eq!(source.line(), 1);
        source.next_char().unwrap(); // 'c'
        assert_eq!(source.line(), 2);
    }

    #[test]
    fn test_is_at_end_only_after_read_past_input() {
        let mut source = CharSource::new("a".as_bytes());
        assert!(!source.is_at_end());
        source.next_char().unwrap();
        source.next_char().unwrap();
        assert!(!source.is_at_end());
        source.next_char().unwrap();
        assert!(source.is_at_end());
    }
}
