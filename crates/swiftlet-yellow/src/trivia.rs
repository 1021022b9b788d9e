//! Trivia pieces attached to tokens.

use std::fmt;

use text_size::TextSize;
use triomphe::ThinArc;

/// Kinds of trivia stored alongside tokens.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TriviaPieceKind {
    /// A run of spaces (and the rare vertical tab or form feed).
    Space,
    Tab,
    /// A single `\n`, `\r` or `\r\n`.
    Newline,
    LineComment,
    BlockComment,
}

impl TriviaPieceKind {
    pub fn is_newline(self) -> bool {
        self == TriviaPieceKind::Newline
    }

    pub fn is_comment(self) -> bool {
        matches!(self, TriviaPieceKind::LineComment | TriviaPieceKind::BlockComment)
    }
}

/// A trivia fragment with its kind and length.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TriviaPiece {
    pub kind: TriviaPieceKind,
    pub len: TextSize,
}

impl TriviaPiece {
    /// Creates a new trivia piece with the given kind and length.
    pub fn new(kind: TriviaPieceKind, len: TextSize) -> Self {
        Self { kind, len }
    }
}

/// Immutable, shared run of trivia pieces with a cached total length.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct GreenTrivia {
    ptr: Option<ThinArc<TextSize, TriviaPiece>>,
}

impl fmt::Debug for GreenTrivia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GreenTrivia")
            .field("pieces", &self.pieces())
            .field("total_len", &self.len())
            .finish()
    }
}

impl GreenTrivia {
    pub fn new(pieces: &[TriviaPiece]) -> Self {
        if pieces.is_empty() {
            return Self::empty();
        }
        let total_len = pieces.iter().map(|piece| piece.len).sum();
        Self { ptr: Some(ThinArc::from_header_and_slice(total_len, pieces)) }
    }

    pub const fn empty() -> Self {
        Self { ptr: None }
    }

    pub fn len(&self) -> TextSize {
        match self.ptr {
            None => TextSize::new(0),
            Some(ref ptr) => ptr.header.header,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ptr.is_none()
    }

    pub fn pieces(&self) -> &[TriviaPiece] {
        match &self.ptr {
            None => &[],
            Some(ptr) => &ptr.slice,
        }
    }

    pub fn has_newline(&self) -> bool {
        self.pieces().iter().any(|piece| piece.kind.is_newline())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slices_share_the_empty_representation() {
        assert_eq!(GreenTrivia::new(&[]), GreenTrivia::empty());
        assert_eq!(GreenTrivia::empty().len(), TextSize::new(0));
    }

    #[test]
    fn total_length_is_cached() {
        let trivia = GreenTrivia::new(&[
            TriviaPiece::new(TriviaPieceKind::Newline, 1.into()),
            TriviaPiece::new(TriviaPieceKind::Space, 4.into()),
            TriviaPiece::new(TriviaPieceKind::LineComment, 9.into()),
        ]);
        assert_eq!(trivia.len(), TextSize::new(14));
        assert_eq!(trivia.pieces().len(), 3);
        assert!(trivia.has_newline());
    }
}
