//! Bottom-up builder for the immutable green tree.

use text_size::TextSize;

use crate::{GreenElement, GreenNode, GreenToken, GreenTrivia, NodeOrToken, SyntaxKind};

const DEFAULT_TREE_DEPTH: usize = 128;
const DEFAULT_CHILDREN_LEN: usize = 1024;

/// Builds a [`GreenNode`] from a flat sequence of start/token/finish calls.
///
/// Tokens must be pushed in source order; each token's text is sliced from
/// the source at the current offset, so the finished tree covers the source
/// exactly.
pub struct Builder<'a> {
    text: &'a str,
    offset: TextSize,
    parents: Vec<(SyntaxKind, usize)>,
    children: Vec<GreenElement>,
}

impl Drop for Builder<'_> {
    fn drop(&mut self) {
        if !std::thread::panicking() && !self.parents.is_empty() {
            panic!("you should call `Builder::finish()`");
        }
    }
}

impl<'a> Builder<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            offset: TextSize::new(0),
            parents: Vec::with_capacity(DEFAULT_TREE_DEPTH),
            children: Vec::with_capacity(DEFAULT_CHILDREN_LEN),
        }
    }

    /// Starts a new node of the given kind.
    pub fn start_node(&mut self, kind: SyntaxKind) {
        self.parents.push((kind, self.children.len()));
    }

    /// Finishes the most recently started node.
    #[track_caller]
    pub fn finish_node(&mut self) {
        let (kind, first_child) = self.parents.pop().expect("no opened nodes?");
        let children = self.children.drain(first_child..).collect();
        self.children.push(NodeOrToken::Node(GreenNode::new(kind, children)));
    }

    /// Adds a token whose content is `len` bytes long, surrounded by its
    /// leading and trailing trivia.
    #[track_caller]
    pub fn token(
        &mut self,
        leading: GreenTrivia,
        kind: SyntaxKind,
        len: TextSize,
        trailing: GreenTrivia,
    ) {
        assert!(!self.parents.is_empty(), "tokens must live inside a node");
        let start = self.offset;
        let end = start + leading.len() + len + trailing.len();
        let text = &self.text[usize::from(start)..usize::from(end)];
        self.offset = end;
        self.children.push(NodeOrToken::Token(GreenToken::new(kind, leading, text, trailing)));
    }

    /// Finishes building and returns the root node.
    #[track_caller]
    pub fn finish(mut self) -> GreenNode {
        assert!(self.parents.is_empty(), "unfinished nodes left in the builder");
        debug_assert_eq!(usize::from(self.offset), self.text.len(), "tree does not cover the text");
        match self.children.pop() {
            Some(NodeOrToken::Node(root)) if self.children.is_empty() => root,
            _ => panic!("expected a single root node"),
        }
    }
}
