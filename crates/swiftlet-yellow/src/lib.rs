//! Lossless, immutable syntax tree with attached trivia.
//!
//! Green nodes are reference counted and position independent; the syntax
//! layer adds absolute offsets on demand. Every byte of the source lives in
//! exactly one token, either as content or as leading/trailing trivia.

/// Typed AST wrappers around the raw syntax tree.
pub mod ast;
mod builder;
mod dump;
mod green;
mod syntax;
mod syntax_kind;
mod syntax_set;
mod trivia;

/// Incremental builder for constructing a green tree.
pub use builder::Builder;
/// Canonical, trivia-free rendering of a tree.
pub use dump::{DumpOptions, dump};
pub use green::{GreenElement, GreenNode, GreenToken};
/// Primary syntax tree API types and adapters.
pub use syntax::{
    NodeOrToken, Preorder, SyntaxElement, SyntaxNode, SyntaxToken, TriviaIter, WalkEvent,
};
/// Token and node kinds used throughout the tree.
pub use syntax_kind::SyntaxKind;
/// Compact set for grouping `SyntaxKind` values.
pub use syntax_set::SyntaxSet;
/// Trivia pieces attached to tokens.
pub use trivia::{GreenTrivia, TriviaPiece, TriviaPieceKind};
