use drop_bomb::DropBomb;
use swiftlet_errors::Diagnostic;
use swiftlet_tokenizer::{LexError, LexErrorKind, Tokens};
use swiftlet_yellow::SyntaxKind::{self, *};
use swiftlet_yellow::{Builder, GreenNode, GreenTrivia, SyntaxSet};
use text_size::{TextRange, TextSize};

/// Event-producing recursive-descent parser over a token table.
///
/// The grammar never builds nodes directly: it records start/token/finish
/// events which [`Parser::finish`] replays into a [`Builder`]. Speculative
/// parses rewind by truncating the event and error logs.
pub(crate) struct Parser<'t> {
    tokens: &'t Tokens<'t>,
    pos: usize,
    /// Bytes of the current token's content already consumed as a separate
    /// token, e.g. the first `>` of `>>` closing a generic argument list.
    split: TextSize,
    events: Vec<Event>,
    errors: Vec<Diagnostic>,
    trailing_closures: bool,
    /// Open nesting levels, counted against [`MAX_NESTING`].
    depth: u32,
}

/// Deepest nesting of constructs the parser descends into. Anything deeper is
/// reported and skipped so that neither parsing nor the resulting tree can
/// exhaust the stack.
pub(crate) const MAX_NESTING: u32 = 256;

impl<'t> Parser<'t> {
    pub(crate) fn new(tokens: &'t Tokens<'t>) -> Self {
        Self {
            tokens,
            pos: 0,
            split: TextSize::new(0),
            events: Vec::with_capacity(tokens.len() * 2),
            errors: Vec::new(),
            trailing_closures: true,
            depth: 0,
        }
    }

    /// Kind of the current token. A partially consumed operator is
    /// reclassified by what is left of it.
    pub(crate) fn peek_kind(&self) -> SyntaxKind {
        let kind = self.tokens.kind(self.pos);
        if self.split == TextSize::new(0) {
            return kind;
        }
        match self.peek_text() {
            "?" => POSTFIX_QUESTION,
            "!" => POSTFIX_OPERATOR,
            "=" => EQ,
            _ => kind,
        }
    }

    pub(crate) fn nth_kind(&self, n: usize) -> SyntaxKind {
        if n == 0 { self.peek_kind() } else { self.tokens.kind(self.pos + n) }
    }

    pub(crate) fn peek_text(&self) -> &'t str {
        &self.tokens.text(self.pos)[usize::from(self.split)..]
    }

    pub(crate) fn nth_text(&self, n: usize) -> &'t str {
        if n == 0 { self.peek_text() } else { self.tokens.text(self.pos + n) }
    }

    pub(crate) fn at(&self, kind: SyntaxKind) -> bool {
        self.peek_kind() == kind
    }

    pub(crate) fn nth_at(&self, n: usize, kind: SyntaxKind) -> bool {
        self.nth_kind(n) == kind
    }

    pub(crate) fn at_set(&self, set: &SyntaxSet) -> bool {
        set.contains(self.peek_kind())
    }

    /// At an operator token spelled exactly `op`, whatever its fixity.
    pub(crate) fn at_op(&self, op: &str) -> bool {
        self.peek_kind().is_operator() && self.peek_text() == op
    }

    /// At an identifier spelled `word`, e.g. `get` or `async`.
    pub(crate) fn at_contextual(&self, word: &str) -> bool {
        self.nth_contextual(0, word)
    }

    pub(crate) fn nth_contextual(&self, n: usize, word: &str) -> bool {
        self.nth_at(n, NAME) && self.nth_text(n) == word
    }

    pub(crate) fn has_newline_before(&self) -> bool {
        self.nth_has_newline_before(0)
    }

    pub(crate) fn nth_has_newline_before(&self, n: usize) -> bool {
        (n > 0 || self.split == TextSize::new(0)) && self.tokens.has_newline_before(self.pos + n)
    }

    /// No trivia separates the current token from the previous one.
    pub(crate) fn is_joint(&self) -> bool {
        self.split > TextSize::new(0) || self.tokens.is_joint(self.pos)
    }

    pub(crate) fn trailing_closures(&self) -> bool {
        self.trailing_closures
    }

    /// Runs `f` with trailing closures enabled or disabled, e.g. disabled
    /// inside an `if` condition where `{` opens the body.
    pub(crate) fn with_trailing_closures<T>(
        &mut self,
        allowed: bool,
        f: impl FnOnce(&mut Self) -> T,
    ) -> T {
        let saved = std::mem::replace(&mut self.trailing_closures, allowed);
        let result = f(self);
        self.trailing_closures = saved;
        result
    }

    /// Runs `f` one nesting level deeper; past [`MAX_NESTING`] the construct
    /// is skipped instead and `None` is returned.
    pub(crate) fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> Option<T> {
        if !self.enter() {
            return None;
        }
        let result = f(self);
        self.leave(1);
        Some(result)
    }

    /// Opens one nesting level, e.g. for each operator of a left-associative
    /// chain. When the limit is reached, everything up to the closer of the
    /// enclosing group goes into an `ERROR` node and `false` is returned.
    pub(crate) fn enter(&mut self) -> bool {
        if self.depth < MAX_NESTING {
            self.depth += 1;
            return true;
        }
        self.skip_nested();
        false
    }

    pub(crate) fn leave(&mut self, levels: u32) {
        debug_assert!(levels <= self.depth);
        self.depth -= levels;
    }

    fn skip_nested(&mut self) {
        let m = self.start();
        self.error("expression or declaration is too deeply nested");
        let start = self.pos;
        let mut open = 0u32;
        loop {
            match self.peek_kind() {
                EOF => break,
                LEFT_PAREN | LEFT_BRACKET | LEFT_BRACE => open += 1,
                RIGHT_PAREN | RIGHT_BRACKET | RIGHT_BRACE if open == 0 => break,
                RIGHT_PAREN | RIGHT_BRACKET | RIGHT_BRACE => open -= 1,
                _ => {}
            }
            self.advance();
        }
        if self.pos == start {
            m.abandon(self);
        } else {
            m.complete(self, ERROR);
        }
    }

    pub(crate) fn advance(&mut self) {
        let kind = self.peek_kind();
        self.advance_as(kind);
    }

    /// Consumes the current token under a different kind, e.g. a keyword
    /// used as an argument label becomes a `NAME`.
    pub(crate) fn advance_as(&mut self, kind: SyntaxKind) {
        if self.at(EOF) {
            return;
        }
        let len = self.tokens.get(self.pos).range.len() - self.split;
        self.push_token(kind, len);
    }

    /// Consumes the first `len` bytes of the current token as its own token.
    pub(crate) fn advance_split(&mut self, kind: SyntaxKind, len: TextSize) {
        debug_assert!(self.split + len <= self.tokens.get(self.pos).range.len());
        self.push_token(kind, len);
    }

    /// Records the end-of-file token; the last token of every tree.
    pub(crate) fn advance_eof(&mut self) {
        debug_assert!(self.at(EOF));
        self.events.push(Event::Token {
            kind: EOF,
            index: self.pos as u32,
            start: TextSize::new(0),
            end: TextSize::new(0),
        });
    }

    fn push_token(&mut self, kind: SyntaxKind, len: TextSize) {
        let start = self.split;
        let end = start + len;
        self.events.push(Event::Token { kind, index: self.pos as u32, start, end });
        if end == self.tokens.get(self.pos).range.len() {
            self.pos += 1;
            self.split = TextSize::new(0);
        } else {
            self.split = end;
        }
    }

    pub(crate) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if !self.at(kind) {
            return false;
        }
        self.advance();
        true
    }

    pub(crate) fn expect(&mut self, kind: SyntaxKind) -> bool {
        if self.eat(kind) {
            return true;
        }
        self.error(&format!("expected {}", describe(kind)));
        false
    }

    pub(crate) fn start(&mut self) -> Marker {
        let pos = self.events.len() as u32;
        self.events.push(Event::TOMBSTONE);
        Marker::new(pos)
    }

    pub(crate) fn error(&mut self, message: &str) {
        let token = self.tokens.get(self.pos).range;
        let range = TextRange::new(token.start() + self.split, token.end());
        self.errors.push(Diagnostic::error(message, range));
    }

    /// Reports `message` and wraps the current token in an `ERROR` node.
    pub(crate) fn error_and_bump(&mut self, message: &str) {
        if self.at(EOF) {
            self.error(message);
            return;
        }
        let m = self.start();
        self.error(message);
        self.advance();
        m.complete(self, ERROR);
    }

    /// Wraps the current token in an `ERROR` node whose error has already
    /// been reported.
    pub(crate) fn bump_error(&mut self) {
        let m = self.start();
        self.advance();
        m.complete(self, ERROR);
    }

    /// Like [`Parser::error_and_bump`], but leaves tokens that an enclosing
    /// construct can resume at.
    pub(crate) fn error_recover(&mut self, message: &str, recovery: &SyntaxSet) {
        if self.at_set(recovery) || self.at_set(&ALWAYS_RECOVER) {
            self.error(message);
        } else {
            self.error_and_bump(message);
        }
    }

    pub(crate) fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            pos: self.pos,
            split: self.split,
            events: self.events.len(),
            errors: self.errors.len(),
        }
    }

    /// Restores the state captured by `checkpoint`.
    ///
    /// Markers completed before the checkpoint must not be preceded between
    /// the checkpoint and the rewind.
    pub(crate) fn rewind(&mut self, checkpoint: Checkpoint) {
        self.pos = checkpoint.pos;
        self.split = checkpoint.split;
        self.events.truncate(checkpoint.events);
        self.errors.truncate(checkpoint.errors);
    }

    pub(crate) fn has_errors_since(&self, checkpoint: Checkpoint) -> bool {
        self.errors.len() > checkpoint.errors
    }

    pub(crate) fn at_same_position(&self, checkpoint: Checkpoint) -> bool {
        self.pos == checkpoint.pos && self.split == checkpoint.split
    }

    /// Runs a speculative parse, keeping its events on `Ok` and rewinding on
    /// `Err`.
    pub(crate) fn speculate<T>(
        &mut self,
        what: &'static str,
        f: impl FnOnce(&mut Self, Checkpoint) -> Result<T, Rollback>,
    ) -> Option<T> {
        let checkpoint = self.checkpoint();
        match f(self, checkpoint) {
            Ok(value) => {
                tracing::trace!(what, offset = ?self.tokens.get(checkpoint.pos).range.start(), "speculation committed");
                Some(value)
            }
            Err(Rollback) => {
                tracing::trace!(what, offset = ?self.tokens.get(checkpoint.pos).range.start(), "speculation rolled back");
                self.rewind(checkpoint);
                None
            }
        }
    }

    pub(crate) fn finish(self) -> (GreenNode, Vec<Diagnostic>) {
        let Parser { tokens, mut events, mut errors, .. } = self;
        let mut builder = Builder::new(tokens.source());
        let mut forward_parents = Vec::new();

        for i in 0..events.len() {
            match std::mem::replace(&mut events[i], Event::TOMBSTONE) {
                Event::Start { kind, forward_parent } => {
                    if kind == TOMBSTONE {
                        continue;
                    }

                    forward_parents.push(kind);
                    let mut idx = i;
                    let mut fp = forward_parent;
                    while let Some(fwd) = fp {
                        idx += fwd as usize;

                        fp = match std::mem::replace(&mut events[idx], Event::TOMBSTONE) {
                            Event::Start { kind, forward_parent } => {
                                if kind != TOMBSTONE {
                                    forward_parents.push(kind);
                                }
                                forward_parent
                            }
                            _ => unreachable!(),
                        };
                    }

                    for kind in forward_parents.drain(..).rev() {
                        builder.start_node(kind);
                    }
                }
                Event::Finish => {
                    builder.finish_node();
                }
                Event::Token { kind, index, start, end } => {
                    let index = index as usize;
                    let content = tokens.get(index).range.len();
                    let leading = if start == TextSize::new(0) {
                        tokens.leading_trivia(index).clone()
                    } else {
                        GreenTrivia::empty()
                    };
                    let trailing = if end == content {
                        tokens.trailing_trivia(index).clone()
                    } else {
                        GreenTrivia::empty()
                    };
                    builder.token(leading, kind, end - start, trailing);
                }
            }
        }

        let text = tokens.source();
        errors.extend(tokens.errors().iter().map(|error| lex_diagnostic(error, text)));
        errors.sort_by_key(|diagnostic| diagnostic.range().start());
        (builder.finish(), errors)
    }
}

const ALWAYS_RECOVER: SyntaxSet = SyntaxSet::new([LEFT_BRACE, RIGHT_BRACE, EOF]);

pub(crate) fn lex_diagnostic(error: &LexError, text: &str) -> Diagnostic {
    let rest = &text[usize::from(error.offset)..];
    let len = match error.kind {
        LexErrorKind::UnterminatedBlockComment => TextSize::of("/*"),
        LexErrorKind::InvalidUtf8 => TextSize::new(0),
        LexErrorKind::UnterminatedString | LexErrorKind::UnknownCharacter => {
            rest.chars().next().map_or(TextSize::new(0), TextSize::of)
        }
    };
    Diagnostic::error(error.kind.to_string(), TextRange::at(error.offset, len))
}

fn describe(kind: SyntaxKind) -> String {
    let punctuation = match kind {
        LEFT_PAREN => "(",
        RIGHT_PAREN => ")",
        LEFT_BRACKET => "[",
        RIGHT_BRACKET => "]",
        LEFT_BRACE => "{",
        RIGHT_BRACE => "}",
        LEFT_ANGLE => "<",
        RIGHT_ANGLE => ">",
        COMMA => ",",
        COLON => ":",
        SEMICOLON => ";",
        AT => "@",
        DOT => ".",
        EQ => "=",
        ARROW => "->",
        ELLIPSIS => "...",
        NAME => return "identifier".to_owned(),
        _ if kind.is_keyword() => {
            let name = format!("{kind:?}");
            return format!("'{}'", name.trim_end_matches("_KW").to_lowercase());
        }
        _ => return format!("{kind:?}"),
    };
    format!("'{punctuation}'")
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Checkpoint {
    pos: usize,
    split: TextSize,
    events: usize,
    errors: usize,
}

/// Returned by a speculative parse that should be undone.
#[derive(Debug)]
pub(crate) struct Rollback;

enum Event {
    Start { kind: SyntaxKind, forward_parent: Option<u32> },
    /// The bytes `start..end` of token `index`'s content. Leading trivia goes
    /// with the first part of a token, trailing trivia with the last.
    Token { kind: SyntaxKind, index: u32, start: TextSize, end: TextSize },
    Finish,
}

impl Event {
    const TOMBSTONE: Self = Event::Start { kind: TOMBSTONE, forward_parent: None };
}

pub(crate) struct Marker {
    position: u32,
    bomb: DropBomb,
}

impl Marker {
    fn new(pos: u32) -> Marker {
        Marker {
            position: pos,
            bomb: DropBomb::new("Marker must be either completed or abandoned"),
        }
    }

    pub(crate) fn complete(mut self, p: &mut Parser<'_>, kind: SyntaxKind) -> CompletedMarker {
        self.bomb.defuse();

        match &mut p.events[self.position as usize] {
            Event::Start { kind: slot, .. } => {
                *slot = kind;
            }
            _ => unreachable!(),
        }

        p.events.push(Event::Finish);
        CompletedMarker::new(self.position, kind)
    }

    /// Drops the marker; whatever was parsed after it stays in the parent.
    pub(crate) fn abandon(mut self, p: &mut Parser<'_>) {
        self.bomb.defuse();

        if self.position as usize == p.events.len() - 1 {
            match p.events.pop() {
                Some(Event::Start { kind: TOMBSTONE, forward_parent: None }) => {}
                _ => unreachable!(),
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct CompletedMarker {
    pos: u32,
    kind: SyntaxKind,
}

impl CompletedMarker {
    fn new(pos: u32, kind: SyntaxKind) -> Self {
        CompletedMarker { pos, kind }
    }

    pub(crate) fn kind(&self) -> SyntaxKind {
        self.kind
    }

    pub(crate) fn precede(self, p: &mut Parser<'_>) -> Marker {
        let new_pos = p.start();

        match &mut p.events[self.pos as usize] {
            Event::Start { forward_parent, .. } => {
                *forward_parent = Some(new_pos.position - self.pos);
            }
            _ => unreachable!(),
        }

        new_pos
    }
}
