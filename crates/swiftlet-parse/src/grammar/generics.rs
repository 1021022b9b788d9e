use swiftlet_yellow::SyntaxKind::*;
use text_size::TextSize;

use super::types;
use crate::parser::Parser;

/// `<T, U: P where ...>` after a declaration name.
pub(super) fn generic_param_list(p: &mut Parser<'_>) {
    let m = p.start();
    p.advance_as(LEFT_ANGLE);
    loop {
        if !p.at(NAME) {
            p.error("expected an identifier to name generic parameter");
            break;
        }
        let param = p.start();
        p.advance();
        if p.eat(COLON) {
            types::type_(p);
        }
        param.complete(p, GENERIC_PARAM);
        if !p.eat(COMMA) {
            break;
        }
    }
    if p.at(WHERE_KW) {
        where_clause(p);
    }
    expect_right_angle(p);
    m.complete(p, GENERIC_PARAM_LIST);
}

/// `<Int, [String]>` after a type or expression name.
pub(super) fn generic_arg_list(p: &mut Parser<'_>) {
    let m = p.start();
    p.advance_as(LEFT_ANGLE);
    if !at_right_angle(p) {
        loop {
            types::type_(p);
            if !p.eat(COMMA) {
                break;
            }
        }
    }
    expect_right_angle(p);
    m.complete(p, GENERIC_ARG_LIST);
}

/// Tokens scanned for the `>` that closes a generic argument list in
/// expression position. Past this, the `<` is a comparison.
pub(super) const GENERIC_ARGS_LOOKAHEAD: usize = 64;

/// Whether the `<` at the current token is closed within
/// [`GENERIC_ARGS_LOOKAHEAD`] tokens, with only tokens that can be part of a
/// type in between. Looks at tokens only and builds nothing.
pub(super) fn at_closed_generic_args(p: &Parser<'_>) -> bool {
    let mut open = 0usize;
    for n in 0..GENERIC_ARGS_LOOKAHEAD {
        let kind = p.nth_kind(n);
        let text = p.nth_text(n);
        match kind {
            NAME | CAPITAL_SELF_KW | UNDERSCORE | DOT | COMMA | COLON | ARROW | AT
            | INOUT_KW | THROWS_KW | LEFT_BRACKET | RIGHT_BRACKET | LEFT_PAREN
            | RIGHT_PAREN | POSTFIX_QUESTION => {}
            _ if kind.is_operator() && text == "<" => open += 1,
            _ if kind.is_operator() && text.starts_with('>') => {
                let closing = text.len() - text.trim_start_matches('>').len();
                if closing >= open {
                    return true;
                }
                if closing < text.len() {
                    return false;
                }
                open -= closing;
            }
            _ if kind.is_operator() && matches!(text, "&" | "!" | "?" | "~") => {}
            _ => return false,
        }
    }
    false
}

/// At an operator starting with `>`, which may close an angle list.
pub(super) fn at_right_angle(p: &Parser<'_>) -> bool {
    p.peek_kind().is_operator() && p.peek_text().starts_with('>')
}

/// Consumes one `>`, splitting it off longer operators such as `>>` or `>?`.
pub(super) fn eat_right_angle(p: &mut Parser<'_>) -> bool {
    if !at_right_angle(p) {
        return false;
    }
    if p.peek_text().len() == 1 {
        p.advance_as(RIGHT_ANGLE);
    } else {
        p.advance_split(RIGHT_ANGLE, TextSize::of('>'));
    }
    true
}

pub(super) fn expect_right_angle(p: &mut Parser<'_>) {
    if !eat_right_angle(p) {
        p.error("expected '>'");
    }
}

pub(super) fn where_clause(p: &mut Parser<'_>) {
    let m = p.start();
    p.advance();
    loop {
        requirement(p);
        if !p.eat(COMMA) {
            break;
        }
    }
    m.complete(p, WHERE_CLAUSE);
}

fn requirement(p: &mut Parser<'_>) {
    let m = p.start();
    types::type_(p);
    if p.eat(COLON) {
        types::type_(p);
        m.complete(p, CONFORMANCE_REQUIREMENT);
    } else if p.at_op("==") {
        p.advance();
        types::type_(p);
        m.complete(p, SAME_TYPE_REQUIREMENT);
    } else {
        p.error("expected ':' or '==' to indicate a conformance or same-type requirement");
        m.complete(p, ERROR);
    }
}

pub(super) fn inheritance_clause(p: &mut Parser<'_>) {
    let m = p.start();
    p.advance();
    loop {
        let inherited = p.start();
        if !p.eat(CLASS_KW) {
            types::type_(p);
        }
        inherited.complete(p, INHERITED_TYPE);
        if !p.eat(COMMA) {
            break;
        }
    }
    m.complete(p, INHERITANCE_CLAUSE);
}
