//! Green layer: immutable, position-independent nodes and tokens.
//!
//! Green elements own their full text (tokens include their trivia), so a
//! subtree can be rendered without the original buffer. Equality is
//! structural, which makes two parses of the same text compare equal.

use std::fmt;

use text_size::{TextRange, TextSize};
use triomphe::Arc;

use crate::{GreenTrivia, NodeOrToken, SyntaxKind};

pub type GreenElement = NodeOrToken<GreenNode, GreenToken>;

impl GreenElement {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            NodeOrToken::Node(node) => node.kind(),
            NodeOrToken::Token(token) => token.kind(),
        }
    }

    pub fn text_len(&self) -> TextSize {
        match self {
            NodeOrToken::Node(node) => node.text_len(),
            NodeOrToken::Token(token) => token.text_len(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash)]
struct GreenNodeData {
    kind: SyntaxKind,
    text_len: TextSize,
    children: Box<[GreenElement]>,
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct GreenNode {
    data: Arc<GreenNodeData>,
}

impl GreenNode {
    pub fn new(kind: SyntaxKind, children: Vec<GreenElement>) -> Self {
        let text_len = children.iter().map(GreenElement::text_len).sum();
        Self { data: Arc::new(GreenNodeData { kind, text_len, children: children.into() }) }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.data.kind
    }

    pub fn text_len(&self) -> TextSize {
        self.data.text_len
    }

    pub fn children(&self) -> &[GreenElement] {
        &self.data.children
    }
}

impl fmt::Debug for GreenNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GreenNode")
            .field("kind", &self.kind())
            .field("text_len", &self.text_len())
            .field("children", &self.children().len())
            .finish()
    }
}

impl fmt::Display for GreenNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for child in self.children() {
            match child {
                NodeOrToken::Node(node) => fmt::Display::fmt(node, f)?,
                NodeOrToken::Token(token) => f.write_str(token.text())?,
            }
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq, Hash)]
struct GreenTokenData {
    kind: SyntaxKind,
    leading: GreenTrivia,
    text: Box<str>,
    trailing: GreenTrivia,
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct GreenToken {
    data: Arc<GreenTokenData>,
}

impl GreenToken {
    /// Creates a token from its full text, trivia included.
    pub fn new(kind: SyntaxKind, leading: GreenTrivia, text: &str, trailing: GreenTrivia) -> Self {
        debug_assert!(leading.len() + trailing.len() <= TextSize::of(text));
        Self { data: Arc::new(GreenTokenData { kind, leading, text: text.into(), trailing }) }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.data.kind
    }

    /// Full text including leading and trailing trivia.
    pub fn text(&self) -> &str {
        &self.data.text
    }

    pub fn text_len(&self) -> TextSize {
        TextSize::of(self.text())
    }

    pub fn leading(&self) -> &GreenTrivia {
        &self.data.leading
    }

    pub fn trailing(&self) -> &GreenTrivia {
        &self.data.trailing
    }

    /// Range of the token content relative to the start of the token.
    pub fn trimmed_range(&self) -> TextRange {
        TextRange::new(self.leading().len(), self.text_len() - self.trailing().len())
    }

    pub fn text_trimmed(&self) -> &str {
        &self.text()[self.trimmed_range()]
    }
}

impl fmt::Debug for GreenToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GreenToken")
            .field("kind", &self.kind())
            .field("text", &self.text())
            .field("leading", self.leading())
            .field("trailing", self.trailing())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TriviaPiece, TriviaPieceKind};

    fn whitespace(len: u32) -> GreenTrivia {
        GreenTrivia::new(&[TriviaPiece::new(TriviaPieceKind::Space, len.into())])
    }

    #[test]
    fn token_text() {
        let token = GreenToken::new(SyntaxKind::LET_KW, whitespace(3), "   let \t\t", whitespace(3));

        assert_eq!("   let \t\t", token.text());
        assert_eq!("let", token.text_trimmed());
        assert_eq!(TextRange::new(3.into(), 6.into()), token.trimmed_range());
    }

    #[test]
    fn structural_equality() {
        let make = || {
            GreenNode::new(
                SyntaxKind::NAME_EXPR,
                vec![NodeOrToken::Token(GreenToken::new(
                    SyntaxKind::NAME,
                    GreenTrivia::empty(),
                    "x",
                    GreenTrivia::empty(),
                ))],
            )
        };
        assert_eq!(make(), make());
        assert_eq!(make().text_len(), TextSize::new(1));
        assert_eq!(make().to_string(), "x");
    }
}
