//! Recursive-descent parser producing a lossless syntax tree.
//!
//! Every byte of the input, trivia included, ends up in exactly one token of
//! the tree, and parsing never fails: malformed input yields `ERROR` nodes
//! plus diagnostics.

use std::fmt::Write as _;

use swiftlet_errors::Diagnostic;
use swiftlet_inputs::File;
use swiftlet_tokenizer::{LexError, tokenize, utf8_prefix};
use swiftlet_yellow::ast::{self, Node as _};
use swiftlet_yellow::{DumpOptions, GreenNode, SyntaxNode, dump};

mod grammar;
mod parser;

/// The result of parsing one file: the tree and everything that went wrong
/// while building it, ordered by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parse {
    green: GreenNode,
    errors: Vec<Diagnostic>,
}

impl Parse {
    pub fn green(&self) -> &GreenNode {
        &self.green
    }

    pub fn syntax_node(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    pub fn tree(&self) -> Option<ast::SourceFile> {
        ast::SourceFile::cast(self.syntax_node())
    }

    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    pub fn dump(&self, options: DumpOptions) -> String {
        dump(&self.syntax_node(), options)
    }

    /// The canonical dump followed by the diagnostics, if any.
    pub fn debug_dump(&self) -> String {
        self.dump_with_errors(DumpOptions::default())
    }

    /// [`Parse::dump`] followed by an `errors:` section listing the
    /// diagnostics, if any.
    pub fn dump_with_errors(&self, options: DumpOptions) -> String {
        let mut out = self.dump(options);
        if !self.errors.is_empty() {
            out.push_str("errors:\n");
            for error in &self.errors {
                let _ = writeln!(out, "  {error}");
            }
        }
        out
    }
}

pub fn parse(text: &str) -> Parse {
    let _span = tracing::debug_span!("parse", len = text.len()).entered();
    let tokens = tokenize(text);
    let mut parser = parser::Parser::new(&tokens);
    grammar::source_file(&mut parser);
    let (green, errors) = parser.finish();
    tracing::debug!(tokens = tokens.len(), errors = errors.len(), "parsed");
    Parse { green, errors }
}

/// Parses raw file contents. Invalid UTF-8 ends the input: the valid prefix
/// is parsed and the cut is reported.
pub fn parse_bytes(bytes: &[u8]) -> Parse {
    let (text, encoding_error) = utf8_prefix(bytes);
    parse_decoded(text, encoding_error)
}

fn parse_decoded(text: &str, encoding_error: Option<LexError>) -> Parse {
    let mut parse = parse(text);
    if let Some(error) = encoding_error {
        parse.errors.push(parser::lex_diagnostic(&error, text));
    }
    parse
}

pub trait FileParse {
    fn parse(self, db: &dyn salsa::Database) -> &Parse;
}

impl FileParse for File {
    fn parse(self, db: &dyn salsa::Database) -> &Parse {
        parse_file(db, self)
    }
}

#[salsa::tracked(returns(ref))]
pub fn parse_file(db: &dyn salsa::Database, file: File) -> Parse {
    let _span = tracing::debug_span!("parse_file", path = %file.path(db)).entered();
    parse_decoded(file.text(db), file.encoding_error(db))
}
