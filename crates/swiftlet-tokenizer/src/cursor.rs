use std::str::Chars;

use text_size::{TextLen, TextSize};

pub(crate) const EOF_CHAR: char = '\0';

/// Character cursor that measures the length of the piece being scanned.
pub(crate) struct Cursor<'a> {
    chars: Chars<'a>,
    len: TextSize,
    previous: char,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self { chars: text.chars(), len: text.text_len(), previous: EOF_CHAR }
    }

    /// Bytes left to scan.
    pub(crate) fn len(&self) -> TextSize {
        self.rest().text_len()
    }

    pub(crate) fn rest(&self) -> &'a str {
        self.chars.as_str()
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.chars.as_str().is_empty()
    }

    /// Last consumed character, or [`EOF_CHAR`] at the start of input.
    pub(crate) fn previous(&self) -> char {
        self.previous
    }

    pub(crate) fn pos_within_token(&self) -> TextSize {
        self.len - self.len()
    }

    pub(crate) fn reset_pos_within_token(&mut self) {
        self.len = self.len();
    }

    pub(crate) fn peek(&self) -> char {
        self.chars.clone().next().unwrap_or(EOF_CHAR)
    }

    pub(crate) fn second(&self) -> char {
        let mut chars = self.chars.clone();
        chars.next();
        chars.next().unwrap_or(EOF_CHAR)
    }

    pub(crate) fn matches(&self, c: char) -> bool {
        !self.is_eof() && self.peek() == c
    }

    pub(crate) fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    pub(crate) fn advance(&mut self) -> char {
        self.previous = self.chars.next().unwrap_or(EOF_CHAR);
        self.previous
    }

    /// Consumes `prefix`, which the caller has checked with [`Self::starts_with`].
    pub(crate) fn advance_str(&mut self, prefix: &str) {
        for _ in prefix.chars() {
            self.advance();
        }
    }

    pub(crate) fn advance_while(&mut self, f: impl Fn(char) -> bool + Copy) {
        while !self.is_eof() && f(self.peek()) {
            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_position_within_piece() {
        let mut cursor = Cursor::new("ab cd");
        cursor.advance_while(|c| c.is_ascii_alphabetic());
        assert_eq!(cursor.pos_within_token(), TextSize::new(2));
        assert_eq!(cursor.previous(), 'b');

        cursor.reset_pos_within_token();
        assert_eq!(cursor.peek(), ' ');
        assert_eq!(cursor.second(), 'c');
        assert!(cursor.starts_with(" cd"));
        cursor.advance_str(" cd");
        assert!(cursor.is_eof());
        assert!(!cursor.matches(EOF_CHAR));
    }
}
