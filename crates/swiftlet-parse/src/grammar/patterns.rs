use swiftlet_yellow::SyntaxKind::*;
use swiftlet_yellow::SyntaxSet;

use super::{delimited, exprs};
use crate::parser::{CompletedMarker, Parser};

const PATTERN_FIRST: SyntaxSet = SyntaxSet::new([NAME, UNDERSCORE, LEFT_PAREN, LET_KW, VAR_KW]);

const PATTERN_RECOVERY: SyntaxSet =
    SyntaxSet::new([COLON, EQ, COMMA, RIGHT_PAREN, IN_KW, WHERE_KW]);

pub(super) fn pattern(p: &mut Parser<'_>) {
    p.nested(pattern_inner);
}

fn pattern_inner(p: &mut Parser<'_>) {
    match p.peek_kind() {
        NAME => {
            let m = p.start();
            p.advance();
            m.complete(p, IDENT_PATTERN);
        }
        UNDERSCORE => {
            let m = p.start();
            p.advance();
            m.complete(p, WILDCARD_PATTERN);
        }
        LEFT_PAREN => {
            let m = p.start();
            delimited(
                p,
                LEFT_PAREN,
                RIGHT_PAREN,
                COMMA,
                "unexpected ',' in tuple pattern",
                &PATTERN_FIRST,
                |p| {
                    pattern(p);
                    true
                },
            );
            m.complete(p, TUPLE_PATTERN);
        }
        LET_KW | VAR_KW => {
            value_binding_pattern(p);
        }
        _ => p.error_recover("expected pattern", &PATTERN_RECOVERY),
    }
}

/// `let x` or `var (a, b)`. In expression position the bound part may
/// itself be an expression pattern such as `.some(x)`.
pub(super) fn value_binding_pattern(p: &mut Parser<'_>) -> CompletedMarker {
    let m = p.start();
    p.advance();
    let simple = match p.peek_kind() {
        NAME | UNDERSCORE => !matches!(p.nth_kind(1), DOT | LEFT_PAREN),
        LEFT_PAREN => true,
        _ => false,
    };
    if simple {
        pattern(p);
    } else {
        exprs::postfix_expr(p);
    }
    m.complete(p, VALUE_BINDING_PATTERN)
}
