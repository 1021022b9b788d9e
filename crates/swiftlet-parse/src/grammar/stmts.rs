use swiftlet_yellow::SyntaxKind::{self, *};
use swiftlet_yellow::SyntaxSet;

use super::{attributes, decls, exprs, patterns};
use crate::parser::{CompletedMarker, Parser};

const CASE_END: SyntaxSet = SyntaxSet::new([CASE_KW, DEFAULT_KW, AT, RIGHT_BRACE]);

pub(super) fn stmt(p: &mut Parser<'_>) {
    match p.peek_kind() {
        RETURN_KW => return_stmt(p),
        THROW_KW => {
            let m = p.start();
            p.advance();
            exprs::expr(p);
            m.complete(p, THROW_STMT);
        }
        BREAK_KW | CONTINUE_KW => {
            let kind = if p.at(BREAK_KW) { BREAK_STMT } else { CONTINUE_STMT };
            let m = p.start();
            p.advance();
            if p.at(NAME) && !p.has_newline_before() {
                p.advance();
            }
            m.complete(p, kind);
        }
        FALLTHROUGH_KW => {
            let m = p.start();
            p.advance();
            m.complete(p, FALLTHROUGH_STMT);
        }
        DEFER_KW => {
            let m = p.start();
            p.advance();
            block(p, "expected '{' after 'defer'");
            m.complete(p, DEFER_STMT);
        }
        DO_KW => do_stmt(p),
        IF_KW => {
            if_(p, IF_STMT);
        }
        GUARD_KW => guard_stmt(p),
        WHILE_KW => while_stmt(p),
        REPEAT_KW => repeat_stmt(p),
        FOR_KW => for_in_stmt(p),
        SWITCH_KW => {
            switch_(p, SWITCH_STMT);
        }
        _ => {
            let m = p.start();
            if exprs::expr(p).is_some() {
                m.complete(p, EXPR_STMT);
            } else {
                m.abandon(p);
            }
        }
    }
}

/// A `{ ... }` body. Only called at `{`.
pub(super) fn code_block(p: &mut Parser<'_>) {
    let m = p.start();
    p.advance();
    p.with_trailing_closures(true, |p| super::items(p, &SyntaxSet::new([RIGHT_BRACE])));
    p.expect(RIGHT_BRACE);
    m.complete(p, CODE_BLOCK);
}

fn block(p: &mut Parser<'_>, missing: &str) {
    if p.at(LEFT_BRACE) {
        code_block(p);
    } else {
        p.error(missing);
    }
}

fn return_stmt(p: &mut Parser<'_>) {
    let m = p.start();
    p.advance();
    if exprs::at_expr_start(p) {
        exprs::expr(p);
    }
    m.complete(p, RETURN_STMT);
}

/// `if` in statement or expression position; `kind` is `IF_STMT` or
/// `IF_EXPR`, and an `else if` chain keeps it.
pub(super) fn if_(p: &mut Parser<'_>, kind: SyntaxKind) -> CompletedMarker {
    let m = p.start();
    p.advance();
    condition_list(p);
    block(p, "expected '{' after 'if' condition");
    if p.eat(ELSE_KW) {
        if p.at(IF_KW) {
            p.nested(|p| if_(p, kind));
        } else {
            block(p, "expected '{' or 'if' after 'else'");
        }
    }
    m.complete(p, kind)
}

fn guard_stmt(p: &mut Parser<'_>) {
    let m = p.start();
    p.advance();
    condition_list(p);
    if p.expect(ELSE_KW) {
        block(p, "expected '{' after 'guard else'");
    }
    m.complete(p, GUARD_STMT);
}

fn while_stmt(p: &mut Parser<'_>) {
    let m = p.start();
    p.advance();
    condition_list(p);
    block(p, "expected '{' after 'while' condition");
    m.complete(p, WHILE_STMT);
}

fn repeat_stmt(p: &mut Parser<'_>) {
    let m = p.start();
    p.advance();
    block(p, "expected '{' after 'repeat'");
    if p.expect(WHILE_KW) {
        exprs::expr(p);
    }
    m.complete(p, REPEAT_STMT);
}

fn for_in_stmt(p: &mut Parser<'_>) {
    let m = p.start();
    p.advance();
    p.eat(TRY_KW);
    if p.at_contextual("await") {
        p.advance_as(AWAIT_KW);
    }
    p.eat(CASE_KW);
    patterns::pattern(p);
    if p.at(COLON) {
        decls::type_annotation(p);
    }
    if p.expect(IN_KW) {
        p.with_trailing_closures(false, exprs::expr);
    }
    if p.at(WHERE_KW) {
        where_guard(p);
    }
    block(p, "expected '{' to start the body of for-each loop");
    m.complete(p, FOR_IN_STMT);
}

fn where_guard(p: &mut Parser<'_>) {
    let m = p.start();
    p.advance();
    p.with_trailing_closures(false, exprs::expr);
    m.complete(p, WHERE_GUARD);
}

fn condition_list(p: &mut Parser<'_>) {
    let m = p.start();
    p.with_trailing_closures(false, |p| {
        loop {
            condition(p);
            if !p.eat(COMMA) {
                break;
            }
        }
    });
    m.complete(p, CONDITION_LIST);
}

fn condition(p: &mut Parser<'_>) {
    if !p.at(LET_KW) && !p.at(VAR_KW) {
        exprs::expr(p);
        return;
    }

    let m = p.start();
    p.advance();
    patterns::pattern(p);
    if p.at(COLON) {
        decls::type_annotation(p);
    }
    if p.at(EQ) {
        decls::initializer_clause(p);
    }
    m.complete(p, OPTIONAL_BINDING_CONDITION);
}

/// `switch` in statement or expression position.
pub(super) fn switch_(p: &mut Parser<'_>, kind: SyntaxKind) -> CompletedMarker {
    let m = p.start();
    p.advance();
    p.with_trailing_closures(false, exprs::expr);
    if !p.at(LEFT_BRACE) {
        p.error("expected '{' after 'switch' subject expression");
        return m.complete(p, kind);
    }

    p.advance();
    while !p.at(RIGHT_BRACE) && !p.at(EOF) {
        if p.at_set(&CASE_END) {
            switch_case(p);
        } else {
            p.error_and_bump("all statements inside a switch must be covered by a 'case' or 'default'");
        }
    }
    p.expect(RIGHT_BRACE);
    m.complete(p, kind)
}

fn switch_case(p: &mut Parser<'_>) {
    let m = p.start();
    attributes::attributes(p);
    if p.at(DEFAULT_KW) {
        let label = p.start();
        p.advance();
        p.expect(COLON);
        label.complete(p, SWITCH_DEFAULT_LABEL);
    } else if p.at(CASE_KW) {
        let label = p.start();
        p.advance();
        case_items(p);
        p.expect(COLON);
        label.complete(p, SWITCH_CASE_LABEL);
    } else {
        p.error("expected 'case' or 'default' after attribute");
    }

    p.with_trailing_closures(true, |p| super::items(p, &CASE_END));
    m.complete(p, SWITCH_CASE);
}

/// Comma-separated patterns, each with an optional `where` guard.
fn case_items(p: &mut Parser<'_>) {
    p.with_trailing_closures(false, |p| {
        loop {
            exprs::expr(p);
            if p.at(WHERE_KW) {
                where_guard(p);
            }
            if !p.eat(COMMA) {
                break;
            }
        }
    });
}

fn do_stmt(p: &mut Parser<'_>) {
    let m = p.start();
    p.advance();
    block(p, "expected '{' after 'do'");
    while p.at(CATCH_KW) {
        let clause = p.start();
        p.advance();
        if !p.at(LEFT_BRACE) {
            case_items(p);
        }
        block(p, "expected '{' after 'catch' pattern");
        clause.complete(p, CATCH_CLAUSE);
    }
    m.complete(p, DO_STMT);
}
