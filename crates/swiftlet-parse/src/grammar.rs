use swiftlet_yellow::SyntaxKind::{self, *};
use swiftlet_yellow::SyntaxSet;

use crate::parser::Parser;

mod attributes;
mod decls;
mod exprs;
mod generics;
mod patterns;
mod stmts;
mod types;

pub(crate) fn source_file(p: &mut Parser<'_>) {
    let m = p.start();
    items(p, &SyntaxSet::EMPTY);
    p.advance_eof();
    m.complete(p, SOURCE_FILE);
}

/// Parses declarations and statements until `end` or the end of input.
///
/// Items sharing a line must be separated by `;`.
pub(crate) fn items(p: &mut Parser<'_>, end: &SyntaxSet) {
    while !p.at(EOF) && !p.at_set(end) {
        if p.eat(SEMICOLON) {
            continue;
        }
        if p.at_set(&CLOSERS) {
            p.error_and_bump(&format!("unexpected '{}'", p.peek_text()));
            continue;
        }

        let before = p.checkpoint();
        item(p);
        if p.at_same_position(before) {
            if p.has_errors_since(before) {
                p.bump_error();
            } else {
                p.error_and_bump("expected expression or declaration");
            }
            continue;
        }

        let at_boundary = p.at(SEMICOLON) || p.at(EOF) || p.at_set(end) || p.at_set(&CLOSERS);
        if !at_boundary && !p.has_newline_before() {
            p.error("consecutive statements on a line must be separated by ';'");
        }
    }
}

pub(crate) fn item(p: &mut Parser<'_>) {
    p.nested(|p| {
        if decls::at_decl(p) {
            decls::decl(p);
        } else {
            stmts::stmt(p);
        }
    });
}

/// Consumes an identifier, reporting `expected identifier` otherwise.
pub(crate) fn name(p: &mut Parser<'_>, recovery: &SyntaxSet) -> bool {
    if p.eat(NAME) {
        return true;
    }
    p.error_recover("expected identifier", recovery);
    false
}

/// Identifiers, `_`, and keywords in positions where any word is a name,
/// such as argument labels.
pub(crate) fn at_label(p: &Parser<'_>, n: usize) -> bool {
    let kind = p.nth_kind(n);
    kind == NAME || kind == UNDERSCORE || kind.is_keyword()
}

pub(crate) fn label(p: &mut Parser<'_>) {
    if p.at(UNDERSCORE) {
        p.advance();
    } else {
        p.advance_as(NAME);
    }
}

pub(crate) fn delimited(
    p: &mut Parser<'_>,
    bra: SyntaxKind,
    ket: SyntaxKind,
    delim: SyntaxKind,
    unexpected_delim_message: &'static str,
    first_set: &SyntaxSet,
    mut parser: impl FnMut(&mut Parser<'_>) -> bool,
) {
    debug_assert_eq!(p.peek_kind(), bra);
    p.advance();

    while !p.at(ket) && !p.at(EOF) {
        if p.at(delim) {
            let m = p.start();
            p.error(unexpected_delim_message);
            p.advance();
            m.complete(p, ERROR);
            continue;
        }

        if !parser(p) {
            break;
        }

        if !p.eat(delim) {
            if first_set.contains(p.peek_kind()) {
                p.expect(delim);
            } else {
                break;
            }
        }
    }

    p.expect(ket);
}

const CLOSERS: SyntaxSet = SyntaxSet::new([RIGHT_PAREN, RIGHT_BRACKET, RIGHT_BRACE]);
