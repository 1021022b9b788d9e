//! Lexer for Swift source text.
//!
//! Tokens are stored in an index-addressable table; each token keeps the range
//! of its content and, in side tables, the trivia in front of and behind it.
//! Trailing trivia runs up to (not including) the first newline, so every
//! newline starts the leading trivia of the next token.

mod cursor;

use cursor::{Cursor, EOF_CHAR};
pub use swiftlet_yellow::SyntaxKind;
use swiftlet_yellow::SyntaxKind::*;
use swiftlet_yellow::{GreenTrivia, TriviaPiece, TriviaPieceKind};
use text_size::{TextRange, TextSize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    /// Content range, trivia excluded.
    pub range: TextRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    #[error("unterminated '/*' comment")]
    UnterminatedBlockComment,
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("invalid UTF-8 in source; the rest of the file is ignored")]
    InvalidUtf8,
    #[error("invalid character in source file")]
    UnknownCharacter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub offset: TextSize,
}

/// Splits `bytes` into its longest valid UTF-8 prefix and, if the input was
/// cut, the error describing where.
pub fn utf8_prefix(bytes: &[u8]) -> (&str, Option<LexError>) {
    match std::str::from_utf8(bytes) {
        Ok(text) => (text, None),
        Err(error) => {
            let text = std::str::from_utf8(&bytes[..error.valid_up_to()]).unwrap_or_default();
            let offset = TextSize::new(error.valid_up_to() as u32);
            (text, Some(LexError { kind: LexErrorKind::InvalidUtf8, offset }))
        }
    }
}

pub struct Tokenizer<'a> {
    text: &'a str,
    cursor: Cursor<'a>,
    tokens: Vec<Token>,
    leading: Vec<GreenTrivia>,
    trailing: Vec<GreenTrivia>,
    errors: Vec<LexError>,
    trivia_pieces: Vec<TriviaPiece>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        let capacity = text.len() / 4;
        Self {
            text,
            cursor: Cursor::new(text),
            tokens: Vec::with_capacity(capacity),
            leading: Vec::with_capacity(capacity),
            trailing: Vec::with_capacity(capacity),
            errors: Vec::new(),
            trivia_pieces: Vec::with_capacity(4),
        }
    }

    /// Lexes the next token and returns its index.
    ///
    /// Once the end-of-file token has been produced, every further call
    /// returns its index again.
    pub fn next_token_index(&mut self) -> usize {
        if let Some(last) = self.tokens.last()
            && last.kind == EOF
        {
            return self.tokens.len() - 1;
        }

        let leading = self.trivia(false);
        let previous_trailing_empty = self.trailing.last().is_none_or(GreenTrivia::is_empty);
        let joint = leading.is_empty() && previous_trailing_empty;

        let (kind, range) = self.syntax_kind(joint);
        let trailing = if kind == EOF { GreenTrivia::empty() } else { self.trivia(true) };

        self.tokens.push(Token { kind, range });
        self.leading.push(leading);
        self.trailing.push(trailing);
        self.tokens.len() - 1
    }

    pub fn token(&self, index: usize) -> Token {
        self.tokens[index]
    }

    pub fn leading_trivia(&self, index: usize) -> &GreenTrivia {
        &self.leading[index]
    }

    pub fn trailing_trivia(&self, index: usize) -> &GreenTrivia {
        &self.trailing[index]
    }

    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Drains the remaining input into an immutable table.
    pub fn finish(mut self) -> Tokens<'a> {
        while self.tokens.last().is_none_or(|token| token.kind != EOF) {
            self.next_token_index();
        }
        Tokens {
            text: self.text,
            tokens: self.tokens,
            leading: self.leading,
            trailing: self.trailing,
            errors: self.errors,
        }
    }

    fn offset(&self) -> TextSize {
        TextSize::of(self.text) - self.cursor.len()
    }

    fn range(&self) -> TextRange {
        let len = self.cursor.pos_within_token();
        TextRange::at(self.offset() - len, len)
    }

    fn text(&self) -> &'a str {
        &self.text[self.range()]
    }

    fn error(&mut self, kind: LexErrorKind, offset: TextSize) {
        tracing::debug!(?kind, offset = u32::from(offset), "lex error");
        self.errors.push(LexError { kind, offset });
    }

    fn trivia(&mut self, trailing: bool) -> GreenTrivia {
        self.cursor.reset_pos_within_token();
        loop {
            let kind = match self.cursor.peek() {
                _ if self.cursor.is_eof() => break,
                '\n' | '\r' if trailing => break,
                '\n' => {
                    self.cursor.advance();
                    TriviaPieceKind::Newline
                }
                '\r' => {
                    self.cursor.advance();
                    if self.cursor.matches('\n') {
                        self.cursor.advance();
                    }
                    TriviaPieceKind::Newline
                }
                ' ' | '\u{b}' | '\u{c}' => {
                    self.cursor.advance_while(|c| matches!(c, ' ' | '\u{b}' | '\u{c}'));
                    TriviaPieceKind::Space
                }
                '\t' => {
                    self.cursor.advance_while(|c| c == '\t');
                    TriviaPieceKind::Tab
                }
                '/' if self.cursor.second() == '/' => {
                    self.cursor.advance_while(|c| c != '\n' && c != '\r');
                    TriviaPieceKind::LineComment
                }
                '/' if self.cursor.second() == '*' => {
                    self.block_comment();
                    TriviaPieceKind::BlockComment
                }
                _ => break,
            };

            self.trivia_pieces.push(TriviaPiece::new(kind, self.cursor.pos_within_token()));
            self.cursor.reset_pos_within_token();
        }

        let trivia = GreenTrivia::new(&self.trivia_pieces);
        self.trivia_pieces.clear();
        trivia
    }

    fn block_comment(&mut self) {
        let start = self.offset();
        self.cursor.advance_str("/*");
        let mut depth = 1u32;
        while depth > 0 {
            if self.cursor.is_eof() {
                self.error(LexErrorKind::UnterminatedBlockComment, start);
                return;
            }
            if self.cursor.starts_with("/*") {
                self.cursor.advance_str("/*");
                depth += 1;
            } else if self.cursor.starts_with("*/") {
                self.cursor.advance_str("*/");
                depth -= 1;
            } else {
                self.cursor.advance();
            }
        }
    }

    fn syntax_kind(&mut self, joint: bool) -> (SyntaxKind, TextRange) {
        self.cursor.reset_pos_within_token();
        if self.cursor.is_eof() {
            return (EOF, self.range());
        }

        let start = self.offset();
        let previous = self.cursor.previous();

        let kind = match self.cursor.advance() {
            '(' => LEFT_PAREN,
            ')' => RIGHT_PAREN,
            '[' => LEFT_BRACKET,
            ']' => RIGHT_BRACKET,
            '{' => LEFT_BRACE,
            '}' => RIGHT_BRACE,
            ':' => COLON,
            ',' => COMMA,
            ';' => SEMICOLON,
            '@' => AT,
            '"' => self.string(0),
            '#' => self.pound(start),
            '`' => self.backtick_identifier(start),
            first_char @ '0'..='9' => self.number(first_char),
            '$' => {
                self.cursor.advance_while(is_identifier_continue);
                NAME
            }
            c if is_identifier_start(c) => {
                self.cursor.advance_while(is_identifier_continue);
                keyword(self.text()).unwrap_or(NAME)
            }
            first_char if is_operator(first_char) => self.operator(first_char, previous, joint),
            _ => {
                self.error(LexErrorKind::UnknownCharacter, start);
                UNKNOWN
            }
        };

        (kind, self.range())
    }

    fn operator(&mut self, first_char: char, previous: char, joint: bool) -> SyntaxKind {
        let left_bound = joint && !matches!(previous, '(' | '[' | '{' | ',' | ';' | ':' | EOF_CHAR);

        if left_bound && first_char == '?' {
            return POSTFIX_QUESTION;
        }
        if left_bound && first_char == '!' && !self.cursor.matches('=') {
            return POSTFIX_OPERATOR;
        }

        let allow_dot = first_char == '.';
        loop {
            let c = self.cursor.peek();
            if self.cursor.is_eof() || !is_operator(c) || (c == '.' && !allow_dot) {
                break;
            }
            if c == '/' && matches!(self.cursor.second(), '/' | '*') {
                break;
            }
            self.cursor.advance();
        }

        let right_bound = match self.cursor.peek() {
            _ if self.cursor.is_eof() => false,
            ')' | ']' | '}' | ',' | ';' | ':' => false,
            '/' if matches!(self.cursor.second(), '/' | '*') => false,
            '.' => !left_bound,
            peeked => !peeked.is_whitespace(),
        };

        match self.text() {
            "=" => EQ,
            "->" => ARROW,
            "." => DOT,
            "?" if !left_bound => QUESTION,
            _ if left_bound == right_bound => BINARY_OPERATOR,
            _ if left_bound => POSTFIX_OPERATOR,
            _ => PREFIX_OPERATOR,
        }
    }

    /// `#"raw"#` strings; any other `#` is not part of the language subset.
    fn pound(&mut self, start: TextSize) -> SyntaxKind {
        let hashes = 1 + self.cursor.rest().chars().take_while(|&c| c == '#').count();
        if self.cursor.rest()[hashes - 1..].starts_with('"') {
            for _ in 1..hashes {
                self.cursor.advance();
            }
            self.cursor.advance();
            return self.string(hashes);
        }
        self.error(LexErrorKind::UnknownCharacter, start);
        UNKNOWN
    }

    /// Lexes a string literal after its first `"`.
    fn string(&mut self, hashes: usize) -> SyntaxKind {
        let start = self.offset() - self.cursor.pos_within_token();
        let pounds = "#".repeat(hashes);
        let multiline = self.cursor.starts_with("\"\"");
        if multiline {
            self.cursor.advance_str("\"\"");
        }
        let close = if multiline { format!("\"\"\"{pounds}") } else { format!("\"{pounds}") };
        let escape = format!("\\{pounds}");

        loop {
            if self.cursor.is_eof() {
                self.error(LexErrorKind::UnterminatedString, start);
                break;
            }
            if !multiline && matches!(self.cursor.peek(), '\n' | '\r') {
                self.error(LexErrorKind::UnterminatedString, start);
                break;
            }
            if self.cursor.starts_with(&close) {
                self.cursor.advance_str(&close);
                break;
            }
            if self.cursor.starts_with(&escape) {
                self.cursor.advance_str(&escape);
                if self.cursor.matches('(') {
                    self.cursor.advance();
                    self.interpolation();
                } else {
                    self.cursor.advance();
                }
                continue;
            }
            self.cursor.advance();
        }
        STRING
    }

    /// Skips a `\( ... )` segment, including nested parentheses and strings.
    fn interpolation(&mut self) {
        let mut depth = 1u32;
        while depth > 0 && !self.cursor.is_eof() {
            match self.cursor.advance() {
                '(' => depth += 1,
                ')' => depth -= 1,
                '"' => {
                    self.string(0);
                }
                _ => {}
            }
        }
    }

    fn backtick_identifier(&mut self, start: TextSize) -> SyntaxKind {
        self.cursor.advance_while(|c| c != '`' && c != '\n' && c != '\r');
        if self.cursor.matches('`') {
            self.cursor.advance();
            NAME
        } else {
            self.error(LexErrorKind::UnknownCharacter, start);
            UNKNOWN
        }
    }

    fn number(&mut self, c: char) -> SyntaxKind {
        if c == '0' {
            match self.cursor.peek() {
                'b' | 'o' => {
                    self.cursor.advance();
                    self.digits(false);
                    return INT_NUMBER;
                }
                'x' => {
                    self.cursor.advance();
                    self.digits(true);
                    return INT_NUMBER;
                }
                _ => self.digits(false),
            }
        } else {
            self.digits(false);
        }

        if self.cursor.matches('.') && self.cursor.second().is_ascii_digit() {
            self.cursor.advance();
            self.digits(false);
            self.float_exponent();
            return FLOAT_NUMBER;
        }

        if self.cursor.matches('e') || self.cursor.matches('E') {
            self.float_exponent();
            return FLOAT_NUMBER;
        }

        INT_NUMBER
    }

    fn digits(&mut self, allow_hex: bool) {
        loop {
            match self.cursor.peek() {
                '_' | '0'..='9' => {
                    self.cursor.advance();
                }
                'a'..='f' | 'A'..='F' if allow_hex => {
                    self.cursor.advance();
                }
                _ => return,
            }
        }
    }

    fn float_exponent(&mut self) {
        if self.cursor.matches('e') || self.cursor.matches('E') {
            self.cursor.advance();
            if self.cursor.matches('-') || self.cursor.matches('+') {
                self.cursor.advance();
            }
            self.digits(false);
        }
    }
}

/// The fully lexed token table that the parser addresses by index.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    tokens: Vec<Token>,
    leading: Vec<GreenTrivia>,
    trailing: Vec<GreenTrivia>,
    errors: Vec<LexError>,
}

pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokenizer::new(text).finish()
}

impl<'a> Tokens<'a> {
    /// Number of tokens, the end-of-file token included.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn source(&self) -> &'a str {
        self.text
    }

    /// Returns the token at `index`, clamping to the end-of-file token.
    pub fn get(&self, index: usize) -> Token {
        self.tokens[index.min(self.tokens.len() - 1)]
    }

    pub fn kind(&self, index: usize) -> SyntaxKind {
        self.get(index).kind
    }

    pub fn text(&self, index: usize) -> &'a str {
        &self.text[self.get(index).range]
    }

    pub fn leading_trivia(&self, index: usize) -> &GreenTrivia {
        &self.leading[index.min(self.leading.len() - 1)]
    }

    pub fn trailing_trivia(&self, index: usize) -> &GreenTrivia {
        &self.trailing[index.min(self.trailing.len() - 1)]
    }

    /// `true` when nothing separates token `index` from the one before it.
    pub fn is_joint(&self, index: usize) -> bool {
        index > 0
            && index < self.tokens.len()
            && self.leading_trivia(index).is_empty()
            && self.trailing_trivia(index - 1).is_empty()
    }

    /// `true` when a line break precedes token `index`.
    pub fn has_newline_before(&self, index: usize) -> bool {
        self.leading_trivia(index).has_newline()
    }

    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    pub fn iter(&self) -> impl Iterator<Item = Token> + '_ {
        self.tokens.iter().copied()
    }
}

fn keyword(text: &str) -> Option<SyntaxKind> {
    Some(match text {
        "associatedtype" => ASSOCIATEDTYPE_KW,
        "class" => CLASS_KW,
        "deinit" => DEINIT_KW,
        "enum" => ENUM_KW,
        "extension" => EXTENSION_KW,
        "func" => FUNC_KW,
        "import" => IMPORT_KW,
        "init" => INIT_KW,
        "inout" => INOUT_KW,
        "let" => LET_KW,
        "protocol" => PROTOCOL_KW,
        "static" => STATIC_KW,
        "struct" => STRUCT_KW,
        "typealias" => TYPEALIAS_KW,
        "var" => VAR_KW,
        "break" => BREAK_KW,
        "case" => CASE_KW,
        "catch" => CATCH_KW,
        "continue" => CONTINUE_KW,
        "default" => DEFAULT_KW,
        "defer" => DEFER_KW,
        "do" => DO_KW,
        "else" => ELSE_KW,
        "fallthrough" => FALLTHROUGH_KW,
        "for" => FOR_KW,
        "guard" => GUARD_KW,
        "if" => IF_KW,
        "in" => IN_KW,
        "repeat" => REPEAT_KW,
        "return" => RETURN_KW,
        "switch" => SWITCH_KW,
        "throw" => THROW_KW,
        "where" => WHERE_KW,
        "while" => WHILE_KW,
        "as" => AS_KW,
        "is" => IS_KW,
        "try" => TRY_KW,
        "throws" => THROWS_KW,
        "rethrows" => RETHROWS_KW,
        "true" => TRUE_KW,
        "false" => FALSE_KW,
        "nil" => NIL_KW,
        "self" => SELF_KW,
        "Self" => CAPITAL_SELF_KW,
        "super" => SUPER_KW,
        "_" => UNDERSCORE,
        _ => return None,
    })
}

fn is_identifier_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

fn is_identifier_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

fn is_operator(c: char) -> bool {
    matches!(
        c,
        '/' | '=' | '-' | '+' | '*' | '%' | '<' | '>' | '!' | '&' | '|' | '^' | '~' | '.' | '?'
    )
}

#[cfg(test)]
mod tests;
