use swiftlet_yellow::SyntaxKind::*;
use swiftlet_yellow::SyntaxSet;

use super::{attributes, decls, delimited, generics};
use crate::parser::{CompletedMarker, Parser};

const TYPE_FIRST: SyntaxSet =
    SyntaxSet::new([NAME, CAPITAL_SELF_KW, UNDERSCORE, LEFT_PAREN, LEFT_BRACKET, AT, INOUT_KW]);

const TYPE_RECOVERY: SyntaxSet = SyntaxSet::new([
    COMMA,
    COLON,
    SEMICOLON,
    EQ,
    ARROW,
    RIGHT_PAREN,
    RIGHT_BRACKET,
    WHERE_KW,
]);

/// Ownership and isolation specifiers written in front of a parameter type.
const SPECIFIERS: &[&str] =
    &["_const", "__owned", "__shared", "borrowing", "consuming", "isolated", "sending"];

pub(super) fn type_(p: &mut Parser<'_>) -> Option<CompletedMarker> {
    let lhs = postfix_type(p)?;
    if !p.at_op("&") {
        return Some(lhs);
    }

    let m = lhs.precede(p);
    while p.at_op("&") {
        p.advance();
        postfix_type(p);
    }
    Some(m.complete(p, COMPOSITION_TYPE))
}

fn postfix_type(p: &mut Parser<'_>) -> Option<CompletedMarker> {
    let mut lhs = primary_type(p)?;
    if lhs.kind() == FUNCTION_TYPE {
        return Some(lhs);
    }

    let mut levels = 0;
    loop {
        lhs = match p.peek_kind() {
            DOT if p.nth_at(1, NAME) || p.nth_kind(1).is_keyword() => {
                let m = lhs.precede(p);
                p.advance();
                if p.at_contextual("Type") || p.at_contextual("Protocol") {
                    p.advance();
                    m.complete(p, METATYPE_TYPE)
                } else {
                    p.advance_as(NAME);
                    if at_generic_args(p) {
                        generics::generic_arg_list(p);
                    }
                    m.complete(p, MEMBER_TYPE)
                }
            }
            POSTFIX_QUESTION => {
                let m = lhs.precede(p);
                p.advance();
                m.complete(p, OPTIONAL_TYPE)
            }
            POSTFIX_OPERATOR if p.peek_text() == "!" => {
                let m = lhs.precede(p);
                p.advance();
                m.complete(p, IMPLICITLY_UNWRAPPED_OPTIONAL_TYPE)
            }
            _ => break,
        };
        if !p.enter() {
            break;
        }
        levels += 1;
    }
    p.leave(levels);
    Some(lhs)
}

fn primary_type(p: &mut Parser<'_>) -> Option<CompletedMarker> {
    p.nested(primary_type_inner).flatten()
}

fn primary_type_inner(p: &mut Parser<'_>) -> Option<CompletedMarker> {
    match p.peek_kind() {
        NAME if (p.at_contextual("some") || p.at_contextual("any")) && at_type_after(p, 1) => {
            let m = p.start();
            let keyword = if p.at_contextual("some") { SOME_KW } else { ANY_KW };
            p.advance_as(keyword);
            type_(p);
            Some(m.complete(p, SOME_OR_ANY_TYPE))
        }
        NAME if at_specifier(p) => Some(attributed_type(p)),
        AT | INOUT_KW => Some(attributed_type(p)),
        NAME | CAPITAL_SELF_KW | UNDERSCORE => {
            let m = p.start();
            p.advance();
            if at_generic_args(p) {
                generics::generic_arg_list(p);
            }
            Some(m.complete(p, IDENT_TYPE))
        }
        LEFT_BRACKET => Some(collection_type(p)),
        LEFT_PAREN => Some(tuple_or_function_type(p)),
        _ if generics::at_right_angle(p) => {
            p.error("expected type");
            None
        }
        _ => {
            p.error_recover("expected type", &TYPE_RECOVERY);
            None
        }
    }
}

fn at_generic_args(p: &Parser<'_>) -> bool {
    p.at_op("<") && p.is_joint()
}

fn at_type_after(p: &Parser<'_>, n: usize) -> bool {
    TYPE_FIRST.contains(p.nth_kind(n)) && !p.nth_has_newline_before(n)
}

fn at_specifier(p: &Parser<'_>) -> bool {
    p.at(NAME) && SPECIFIERS.contains(&p.peek_text()) && at_type_after(p, 1)
}

/// Attributes and specifiers, then the type they apply to.
fn attributed_type(p: &mut Parser<'_>) -> CompletedMarker {
    let m = p.start();
    loop {
        if p.at(AT) {
            attributes::attribute(p);
        } else if p.at(INOUT_KW) || at_specifier(p) {
            p.advance();
        } else {
            break;
        }
    }
    type_(p);
    m.complete(p, ATTRIBUTED_TYPE)
}

/// `[Element]` or `[Key: Value]`.
fn collection_type(p: &mut Parser<'_>) -> CompletedMarker {
    let m = p.start();
    p.advance();
    type_(p);
    let kind = if p.eat(COLON) {
        type_(p);
        DICTIONARY_TYPE
    } else {
        ARRAY_TYPE
    };
    p.expect(RIGHT_BRACKET);
    m.complete(p, kind)
}

fn tuple_or_function_type(p: &mut Parser<'_>) -> CompletedMarker {
    let params = tuple_type(p);
    let at_effects = p.at_contextual("async") || p.at(THROWS_KW) || p.at(RETHROWS_KW);
    if !at_effects && !p.at(ARROW) {
        return params;
    }

    let m = params.precede(p);
    decls::effect_specifiers(p);
    if p.expect(ARROW) {
        type_(p);
    }
    m.complete(p, FUNCTION_TYPE)
}

pub(super) fn tuple_type(p: &mut Parser<'_>) -> CompletedMarker {
    let m = p.start();
    delimited(
        p,
        LEFT_PAREN,
        RIGHT_PAREN,
        COMMA,
        "unexpected ',' separator",
        &TYPE_FIRST,
        tuple_type_element,
    );
    m.complete(p, TUPLE_TYPE)
}

/// `label name: Type`, `label: Type`, or a bare `Type`.
fn tuple_type_element(p: &mut Parser<'_>) -> bool {
    let m = p.start();
    if super::at_label(p, 0) && p.nth_at(1, COLON) {
        super::label(p);
        p.advance();
    } else if super::at_label(p, 0) && super::at_label(p, 1) && p.nth_at(2, COLON) {
        super::label(p);
        super::label(p);
        p.advance();
    }
    type_(p);
    if p.at_op("...") {
        p.advance_as(ELLIPSIS);
    }
    if p.at(EQ) {
        decls::initializer_clause(p);
    }
    m.complete(p, TUPLE_TYPE_ELEMENT);
    true
}
