use swiftlet_yellow::SyntaxKind::*;

use crate::parser::Parser;

const MODIFIERS: &[&str] = &[
    "borrowing",
    "consuming",
    "convenience",
    "distributed",
    "dynamic",
    "fileprivate",
    "final",
    "indirect",
    "internal",
    "lazy",
    "mutating",
    "nonisolated",
    "nonmutating",
    "open",
    "optional",
    "override",
    "package",
    "private",
    "public",
    "required",
    "unowned",
    "weak",
];

pub(super) fn attributes(p: &mut Parser<'_>) {
    while p.at(AT) {
        attribute(p);
    }
}

/// `@name` with an optional parenthesized argument clause kept as raw tokens.
pub(super) fn attribute(p: &mut Parser<'_>) {
    let m = p.start();
    p.advance();
    if p.at(NAME) {
        p.advance();
    } else if p.peek_kind().is_keyword() {
        p.advance_as(NAME);
    } else {
        p.error("expected an attribute name");
    }

    if p.at(LEFT_PAREN) && p.is_joint() {
        attribute_arguments(p);
    }
    m.complete(p, ATTRIBUTE);
}

fn attribute_arguments(p: &mut Parser<'_>) {
    let m = p.start();
    let mut depth = 0usize;
    loop {
        match p.peek_kind() {
            EOF => {
                p.expect(RIGHT_PAREN);
                break;
            }
            LEFT_PAREN => depth += 1,
            RIGHT_PAREN => {
                depth -= 1;
                if depth == 0 {
                    p.advance();
                    break;
                }
            }
            _ => {}
        }
        p.advance();
    }
    m.complete(p, ATTRIBUTE_ARGUMENTS);
}

pub(super) fn modifiers(p: &mut Parser<'_>) {
    while let Some(len) = modifier_len(p, 0) {
        let m = p.start();
        for _ in 0..len {
            p.advance();
        }
        m.complete(p, DECL_MODIFIER);
    }
}

/// Number of tokens taken by the declaration modifier `n` tokens ahead:
/// one, or four for a detail such as `private(set)`.
pub(super) fn modifier_len(p: &Parser<'_>, n: usize) -> Option<usize> {
    match p.nth_kind(n) {
        STATIC_KW => Some(1),
        CLASS_KW
            if matches!(p.nth_kind(n + 1), FUNC_KW | VAR_KW | LET_KW | STATIC_KW)
                || is_modifier_name(p, n + 1) =>
        {
            Some(1)
        }
        NAME if is_modifier_name(p, n) => {
            let detail = p.nth_at(n + 1, LEFT_PAREN)
                && p.nth_at(n + 2, NAME)
                && p.nth_at(n + 3, RIGHT_PAREN);
            Some(if detail { 4 } else { 1 })
        }
        _ => None,
    }
}

fn is_modifier_name(p: &Parser<'_>, n: usize) -> bool {
    p.nth_at(n, NAME) && MODIFIERS.contains(&p.nth_text(n))
}
