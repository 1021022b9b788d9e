//! Positioned view over the green tree.
//!
//! A [`SyntaxNode`] is a green node plus its absolute offset. Children are
//! computed on demand; nodes never point back to their parents.

use std::fmt;

use text_size::{TextRange, TextSize};

use crate::{GreenNode, GreenToken, SyntaxKind, TriviaPieceKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeOrToken<N, T> {
    Node(N),
    Token(T),
}

impl<N, T> NodeOrToken<N, T> {
    pub fn into_node(self) -> Option<N> {
        match self {
            NodeOrToken::Node(node) => Some(node),
            NodeOrToken::Token(_) => None,
        }
    }

    pub fn into_token(self) -> Option<T> {
        match self {
            NodeOrToken::Node(_) => None,
            NodeOrToken::Token(token) => Some(token),
        }
    }

    pub fn as_ref(&self) -> NodeOrToken<&N, &T> {
        match self {
            NodeOrToken::Node(node) => NodeOrToken::Node(node),
            NodeOrToken::Token(token) => NodeOrToken::Token(token),
        }
    }
}

impl<N: fmt::Display, T: fmt::Display> fmt::Display for NodeOrToken<N, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeOrToken::Node(node) => fmt::Display::fmt(node, f),
            NodeOrToken::Token(token) => fmt::Display::fmt(token, f),
        }
    }
}

pub type SyntaxElement = NodeOrToken<SyntaxNode, SyntaxToken>;

impl SyntaxElement {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            NodeOrToken::Node(node) => node.kind(),
            NodeOrToken::Token(token) => token.kind(),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SyntaxNode {
    green: GreenNode,
    offset: TextSize,
}

impl SyntaxNode {
    pub fn new_root(green: GreenNode) -> Self {
        Self { green, offset: TextSize::new(0) }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.green.kind()
    }

    pub fn green(&self) -> &GreenNode {
        &self.green
    }

    /// Range including the trivia of the first and last token.
    pub fn text_range(&self) -> TextRange {
        TextRange::at(self.offset, self.green.text_len())
    }

    /// Range from the first non-trivia character to the last one.
    ///
    /// Nodes without any content collapse to an empty range at the position
    /// where their content would have started.
    pub fn trimmed_range(&self) -> TextRange {
        let mut tokens = self.tokens().filter(|token| !token.trimmed_range().is_empty());
        match tokens.next() {
            Some(first) => {
                let last = tokens.last().unwrap_or_else(|| first.clone());
                TextRange::new(first.trimmed_range().start(), last.trimmed_range().end())
            }
            None => {
                let start = self
                    .first_token()
                    .map_or(self.offset, |token| token.trimmed_range().start());
                TextRange::empty(start)
            }
        }
    }

    pub fn text_trimmed(&self) -> String {
        let text = self.to_string();
        let range = self.trimmed_range() - self.offset;
        text[range].to_owned()
    }

    pub fn children_with_tokens(&self) -> impl Iterator<Item = SyntaxElement> + '_ {
        let mut offset = self.offset;
        self.green.children().iter().map(move |child| {
            let child_offset = offset;
            offset += child.text_len();
            match child {
                NodeOrToken::Node(node) => {
                    NodeOrToken::Node(SyntaxNode { green: node.clone(), offset: child_offset })
                }
                NodeOrToken::Token(token) => {
                    NodeOrToken::Token(SyntaxToken { green: token.clone(), offset: child_offset })
                }
            }
        })
    }

    pub fn children(&self) -> impl Iterator<Item = SyntaxNode> + '_ {
        self.children_with_tokens().filter_map(NodeOrToken::into_node)
    }

    pub fn child_tokens(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        self.children_with_tokens().filter_map(NodeOrToken::into_token)
    }

    /// Every node in the subtree, this one included, in preorder.
    pub fn descendants(&self) -> impl Iterator<Item = SyntaxNode> {
        self.preorder().filter_map(|event| match event {
            WalkEvent::Enter(NodeOrToken::Node(node)) => Some(node),
            _ => None,
        })
    }

    /// Every token in the subtree, in source order.
    pub fn tokens(&self) -> impl Iterator<Item = SyntaxToken> {
        self.preorder().filter_map(|event| match event {
            WalkEvent::Enter(NodeOrToken::Token(token)) => Some(token),
            _ => None,
        })
    }

    pub fn first_token(&self) -> Option<SyntaxToken> {
        self.tokens().next()
    }

    pub fn preorder(&self) -> Preorder {
        Preorder::new(self.clone())
    }
}

impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.green, f)
    }
}

impl fmt::Debug for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{:?}", self.kind(), self.text_range())
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SyntaxToken {
    green: GreenToken,
    offset: TextSize,
}

impl SyntaxToken {
    pub fn kind(&self) -> SyntaxKind {
        self.green.kind()
    }

    pub fn green(&self) -> &GreenToken {
        &self.green
    }

    /// Full text including trivia.
    pub fn text(&self) -> &str {
        self.green.text()
    }

    pub fn text_trimmed(&self) -> &str {
        self.green.text_trimmed()
    }

    pub fn text_range(&self) -> TextRange {
        TextRange::at(self.offset, self.green.text_len())
    }

    /// Range of the token content, trivia excluded.
    pub fn trimmed_range(&self) -> TextRange {
        self.green.trimmed_range() + self.offset
    }

    pub fn leading_trivia(&self) -> TriviaIter<'_> {
        TriviaIter::new(self.text(), TextSize::new(0), self.green.leading().pieces())
    }

    pub fn trailing_trivia(&self) -> TriviaIter<'_> {
        let start = self.green.trimmed_range().end();
        TriviaIter::new(self.text(), start, self.green.trailing().pieces())
    }

    pub fn has_leading_newline(&self) -> bool {
        self.green.leading().has_newline()
    }
}

impl fmt::Display for SyntaxToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl fmt::Debug for SyntaxToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{:?} {:?}", self.kind(), self.trimmed_range(), self.text_trimmed())
    }
}

/// Iterator over the trivia pieces of one side of a token, with their text.
pub struct TriviaIter<'a> {
    text: &'a str,
    offset: TextSize,
    pieces: std::slice::Iter<'a, crate::TriviaPiece>,
}

impl<'a> TriviaIter<'a> {
    fn new(text: &'a str, offset: TextSize, pieces: &'a [crate::TriviaPiece]) -> Self {
        Self { text, offset, pieces: pieces.iter() }
    }
}

impl<'a> Iterator for TriviaIter<'a> {
    type Item = (TriviaPieceKind, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let piece = self.pieces.next()?;
        let range = TextRange::at(self.offset, piece.len);
        self.offset = range.end();
        Some((piece.kind, &self.text[range]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pieces.size_hint()
    }
}

impl ExactSizeIterator for TriviaIter<'_> {}

/// Preorder walk event.
#[derive(Debug, Clone)]
pub enum WalkEvent<T> {
    Enter(T),
    Leave(T),
}

/// Preorder traversal over nodes and tokens, driven by an explicit stack.
pub struct Preorder {
    stack: Vec<(SyntaxNode, std::vec::IntoIter<SyntaxElement>)>,
    start: Option<SyntaxNode>,
}

impl Preorder {
    fn new(start: SyntaxNode) -> Self {
        Self { stack: Vec::new(), start: Some(start) }
    }

    fn enter(&mut self, node: SyntaxNode) -> WalkEvent<SyntaxElement> {
        let children = node.children_with_tokens().collect::<Vec<_>>();
        self.stack.push((node.clone(), children.into_iter()));
        WalkEvent::Enter(NodeOrToken::Node(node))
    }
}

impl Iterator for Preorder {
    type Item = WalkEvent<SyntaxElement>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.start.take() {
            return Some(self.enter(start));
        }

        let (_, children) = self.stack.last_mut()?;
        match children.next() {
            Some(NodeOrToken::Token(token)) => Some(WalkEvent::Enter(NodeOrToken::Token(token))),
            Some(NodeOrToken::Node(node)) => Some(self.enter(node)),
            None => {
                let (node, _) = self.stack.pop()?;
                Some(WalkEvent::Leave(NodeOrToken::Node(node)))
            }
        }
    }
}
