//! Canonical structural dump.
//!
//! One line per node or significant token, indented by two spaces per level.
//! Trivia, punctuation and the end-of-file token never appear, so inputs that
//! differ only in whitespace and comments dump to the same text.

use std::fmt::Write as _;

use crate::{NodeOrToken, SyntaxKind, SyntaxNode, SyntaxToken};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DumpOptions {
    /// Append `@start..end` (the trimmed byte range) after every kind.
    pub ranges: bool,
}

pub fn dump(node: &SyntaxNode, options: DumpOptions) -> String {
    let mut out = String::new();
    dump_node(&mut out, node, 0, options);
    out
}

fn dump_node(out: &mut String, node: &SyntaxNode, depth: usize, options: DumpOptions) {
    indent(out, depth);
    let _ = write!(out, "{:?}", node.kind());
    if options.ranges {
        let range = node.trimmed_range();
        let _ = write!(out, "@{}..{}", u32::from(range.start()), u32::from(range.end()));
    }
    out.push('\n');

    for child in node.children_with_tokens() {
        match child {
            NodeOrToken::Node(child) if is_elided(&child) => {}
            NodeOrToken::Node(child) => dump_node(out, &child, depth + 1, options),
            NodeOrToken::Token(token) if is_significant(&token, node.kind()) => {
                dump_token(out, &token, depth + 1, options);
            }
            NodeOrToken::Token(_) => {}
        }
    }
}

fn dump_token(out: &mut String, token: &SyntaxToken, depth: usize, options: DumpOptions) {
    indent(out, depth);
    let _ = write!(out, "{:?}", token.kind());
    if options.ranges {
        let range = token.trimmed_range();
        let _ = write!(out, "@{}..{}", u32::from(range.start()), u32::from(range.end()));
    }
    let _ = writeln!(out, " {:?}", token.text_trimmed());
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

fn is_significant(token: &SyntaxToken, parent: SyntaxKind) -> bool {
    match token.kind() {
        SyntaxKind::EOF => false,
        // `try?`, `as?` and `init?` share their node kind with the plain forms.
        SyntaxKind::POSTFIX_QUESTION => matches!(
            parent,
            SyntaxKind::TRY_EXPR | SyntaxKind::AS_EXPR | SyntaxKind::INIT_DECL
        ),
        kind => !kind.is_punctuation(),
    }
}

/// An empty argument list carries no structure: `foo {}` and `foo() {}` are
/// the same call.
fn is_elided(node: &SyntaxNode) -> bool {
    node.kind() == SyntaxKind::ARG_LIST && !node.children().any(|arg| arg.kind() == SyntaxKind::ARG)
}
