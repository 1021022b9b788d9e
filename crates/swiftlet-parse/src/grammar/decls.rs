use swiftlet_yellow::SyntaxKind::{self, *};
use swiftlet_yellow::SyntaxSet;

use super::attributes::{attributes, modifier_len, modifiers};
use super::{delimited, exprs, generics, patterns, stmts, types};
use crate::parser::{Marker, Parser};

/// Upper bound on the modifiers scanned when deciding whether a declaration
/// starts here.
const MAX_MODIFIERS: usize = 8;

const ACCESSOR_NAMES: &[&str] = &["get", "set", "willSet", "didSet", "_read", "_modify"];

const DECL_RECOVERY: SyntaxSet = SyntaxSet::new([LEFT_PAREN, LEFT_ANGLE, COLON, WHERE_KW, EQ]);

const PARAM_FIRST: SyntaxSet = SyntaxSet::new([NAME, UNDERSCORE, AT]);

pub(crate) fn at_decl(p: &Parser<'_>) -> bool {
    let mut n = 0;
    for _ in 0..MAX_MODIFIERS {
        match p.nth_kind(n) {
            AT | FUNC_KW | INIT_KW | DEINIT_KW | VAR_KW | LET_KW | PROTOCOL_KW | STRUCT_KW
            | CLASS_KW | ENUM_KW | EXTENSION_KW | ASSOCIATEDTYPE_KW | TYPEALIAS_KW
            | IMPORT_KW => return true,
            // `case` opens a declaration only after a modifier such as
            // `indirect`; on its own it belongs to the enclosing construct.
            CASE_KW => return n > 0,
            _ => match modifier_len(p, n) {
                Some(len) => n += len,
                None => return false,
            },
        }
    }
    false
}

pub(crate) fn decl(p: &mut Parser<'_>) {
    let m = p.start();
    attributes(p);
    modifiers(p);
    match p.peek_kind() {
        FUNC_KW => func_decl(p, m),
        INIT_KW => init_decl(p, m),
        DEINIT_KW => deinit_decl(p, m),
        VAR_KW | LET_KW => var_decl(p, m),
        PROTOCOL_KW => protocol_decl(p, m),
        STRUCT_KW => nominal_decl(p, m, STRUCT_DECL),
        CLASS_KW => nominal_decl(p, m, CLASS_DECL),
        ENUM_KW => nominal_decl(p, m, ENUM_DECL),
        EXTENSION_KW => extension_decl(p, m),
        CASE_KW => enum_case_decl(p, m),
        ASSOCIATEDTYPE_KW => associated_type_decl(p, m),
        TYPEALIAS_KW => typealias_decl(p, m),
        IMPORT_KW => import_decl(p, m),
        _ => {
            p.error_recover("expected declaration", &SyntaxSet::EMPTY);
            m.complete(p, ERROR);
        }
    }
}

fn func_decl(p: &mut Parser<'_>, m: Marker) {
    p.advance();
    if p.eat(NAME) {
        if p.at_op("<") {
            generics::generic_param_list(p);
        }
    } else if p.peek_kind().is_operator() {
        p.advance();
    } else {
        p.error_recover("expected an identifier in function declaration", &DECL_RECOVERY);
    }

    signature(p, "expected '(' in argument list of function declaration");
    if p.at(ARROW) {
        return_clause(p);
    }
    if p.at(WHERE_KW) {
        generics::where_clause(p);
    }
    if p.at(LEFT_BRACE) {
        stmts::code_block(p);
    }
    m.complete(p, FUNC_DECL);
}

/// Parameter list followed by `async`, `throws` or `rethrows`.
fn signature(p: &mut Parser<'_>, missing_params: &str) {
    if p.at(LEFT_PAREN) {
        param_list(p);
    } else {
        p.error(missing_params);
    }
    effect_specifiers(p);
}

fn init_decl(p: &mut Parser<'_>, m: Marker) {
    p.advance();
    if p.at(POSTFIX_QUESTION) || (p.at(POSTFIX_OPERATOR) && p.peek_text() == "!") {
        p.advance();
    }
    if p.at_op("<") {
        generics::generic_param_list(p);
    }
    signature(p, "expected '(' in initializer parameter list");
    if p.at(WHERE_KW) {
        generics::where_clause(p);
    }
    if p.at(LEFT_BRACE) {
        stmts::code_block(p);
    }
    m.complete(p, INIT_DECL);
}

fn deinit_decl(p: &mut Parser<'_>, m: Marker) {
    p.advance();
    if p.at(LEFT_BRACE) {
        stmts::code_block(p);
    }
    m.complete(p, DEINIT_DECL);
}

pub(super) fn param_list(p: &mut Parser<'_>) {
    let m = p.start();
    delimited(
        p,
        LEFT_PAREN,
        RIGHT_PAREN,
        COMMA,
        "unexpected ',' in parameter list",
        &PARAM_FIRST,
        param,
    );
    m.complete(p, PARAM_LIST);
}

/// `label name: Type...  = default`, with at most two names.
fn param(p: &mut Parser<'_>) -> bool {
    let m = p.start();
    attributes(p);

    let mut names = 0;
    while names < 2 && super::at_label(p, 0) && !p.at(INOUT_KW) {
        super::label(p);
        names += 1;
    }
    if names == 0 {
        p.error_recover("expected parameter name", &SyntaxSet::new([COMMA, RIGHT_PAREN]));
        m.complete(p, ERROR);
        return false;
    }

    if p.expect(COLON) {
        types::type_(p);
        if p.at_op("...") {
            p.advance_as(ELLIPSIS);
        }
    }
    if p.at(EQ) {
        initializer_clause(p);
    }
    m.complete(p, PARAM);
    true
}

pub(super) fn effect_specifiers(p: &mut Parser<'_>) {
    let is_async = p.at_contextual("async");
    if !is_async && !p.at(THROWS_KW) && !p.at(RETHROWS_KW) {
        return;
    }

    let m = p.start();
    if is_async {
        p.advance_as(ASYNC_KW);
    }
    if p.at(THROWS_KW) || p.at(RETHROWS_KW) {
        p.advance();
        if p.at(LEFT_PAREN) && p.is_joint() {
            p.advance();
            types::type_(p);
            p.expect(RIGHT_PAREN);
        }
    }
    m.complete(p, EFFECT_SPECIFIERS);
}

pub(super) fn return_clause(p: &mut Parser<'_>) {
    let m = p.start();
    p.advance();
    types::type_(p);
    m.complete(p, RETURN_CLAUSE);
}

pub(super) fn type_annotation(p: &mut Parser<'_>) {
    let m = p.start();
    p.advance();
    types::type_(p);
    m.complete(p, TYPE_ANNOTATION);
}

pub(super) fn initializer_clause(p: &mut Parser<'_>) {
    let m = p.start();
    p.advance();
    exprs::expr(p);
    m.complete(p, INITIALIZER_CLAUSE);
}

fn var_decl(p: &mut Parser<'_>, m: Marker) {
    p.advance();
    loop {
        pattern_binding(p);
        if !p.eat(COMMA) {
            break;
        }
    }
    m.complete(p, VAR_DECL);
}

fn pattern_binding(p: &mut Parser<'_>) {
    let m = p.start();
    patterns::pattern(p);
    if p.at(COLON) {
        type_annotation(p);
    }
    let initialized = p.at(EQ);
    if initialized {
        initializer_clause(p);
    }
    if p.at(LEFT_BRACE) && (!initialized || at_observer(p, 1)) {
        accessor_block(p);
    }
    m.complete(p, PATTERN_BINDING);
}

/// `willSet` or `didSet` `n` tokens ahead: a `{` before it opens property
/// observers rather than a trailing closure.
pub(super) fn at_observer(p: &Parser<'_>, n: usize) -> bool {
    p.nth_contextual(n, "willSet") || p.nth_contextual(n, "didSet")
}

fn accessor_block(p: &mut Parser<'_>) {
    let m = p.start();
    p.advance();
    if at_accessor(p) {
        while !p.at(RIGHT_BRACE) && !p.at(EOF) {
            if p.eat(SEMICOLON) {
                continue;
            }
            if at_accessor(p) {
                accessor_decl(p);
            } else {
                p.error_and_bump("expected 'get', 'set', 'willSet' or 'didSet' accessor");
            }
        }
    } else {
        super::items(p, &SyntaxSet::new([RIGHT_BRACE]));
    }
    p.expect(RIGHT_BRACE);
    m.complete(p, ACCESSOR_BLOCK);
}

fn at_accessor(p: &Parser<'_>) -> bool {
    if p.at(AT) {
        return true;
    }
    let mut n = 0;
    while p.nth_contextual(n, "mutating") || p.nth_contextual(n, "nonmutating") {
        n += 1;
    }
    p.nth_at(n, NAME) && ACCESSOR_NAMES.contains(&p.nth_text(n))
}

fn accessor_decl(p: &mut Parser<'_>) {
    let m = p.start();
    attributes(p);
    while p.at_contextual("mutating") || p.at_contextual("nonmutating") {
        let modifier = p.start();
        p.advance();
        modifier.complete(p, DECL_MODIFIER);
    }
    if !p.eat(NAME) {
        p.error("expected accessor name");
    }
    if p.at(LEFT_PAREN) {
        p.advance();
        p.expect(NAME);
        p.expect(RIGHT_PAREN);
    }
    effect_specifiers(p);
    if p.at(LEFT_BRACE) {
        stmts::code_block(p);
    }
    m.complete(p, ACCESSOR_DECL);
}

fn protocol_decl(p: &mut Parser<'_>, m: Marker) {
    p.advance();
    super::name(p, &DECL_RECOVERY);
    if p.at_op("<") {
        primary_associated_type_list(p);
    }
    type_header(p);
    m.complete(p, PROTOCOL_DECL);
}

fn primary_associated_type_list(p: &mut Parser<'_>) {
    let m = p.start();
    p.advance_as(LEFT_ANGLE);
    loop {
        if p.at(NAME) {
            let name = p.start();
            p.advance();
            name.complete(p, PRIMARY_ASSOCIATED_TYPE);
        } else {
            p.error("expected primary associated type name");
            break;
        }
        if !p.eat(COMMA) {
            break;
        }
    }
    generics::expect_right_angle(p);
    m.complete(p, PRIMARY_ASSOCIATED_TYPE_LIST);
}

/// The inheritance clause, `where` clause and member block shared by all
/// type declarations.
fn type_header(p: &mut Parser<'_>) {
    if p.at(COLON) {
        generics::inheritance_clause(p);
    }
    if p.at(WHERE_KW) {
        generics::where_clause(p);
    }
    member_block(p);
}

fn nominal_decl(p: &mut Parser<'_>, m: Marker, kind: SyntaxKind) {
    p.advance();
    super::name(p, &DECL_RECOVERY);
    if p.at_op("<") {
        generics::generic_param_list(p);
    }
    type_header(p);
    m.complete(p, kind);
}

fn extension_decl(p: &mut Parser<'_>, m: Marker) {
    p.advance();
    types::type_(p);
    type_header(p);
    m.complete(p, EXTENSION_DECL);
}

fn member_block(p: &mut Parser<'_>) {
    if !p.at(LEFT_BRACE) {
        p.error("expected '{' in declaration body");
        return;
    }

    let m = p.start();
    p.advance();
    while !p.at(RIGHT_BRACE) && !p.at(EOF) {
        if p.eat(SEMICOLON) {
            continue;
        }
        if p.at(CASE_KW) || at_decl(p) {
            p.nested(decl);
            if !p.at(SEMICOLON) && !p.at(RIGHT_BRACE) && !p.at(EOF) && !p.has_newline_before() {
                p.error("consecutive declarations on a line must be separated by ';'");
            }
        } else {
            skip_to_member(p);
        }
    }
    p.expect(RIGHT_BRACE);
    m.complete(p, MEMBER_BLOCK);
}

/// Wraps everything up to the next declaration in one `ERROR` node.
fn skip_to_member(p: &mut Parser<'_>) {
    let m = p.start();
    p.error("expected declaration");
    loop {
        p.advance();
        if p.at(CASE_KW) || p.at(SEMICOLON) || p.at(RIGHT_BRACE) || p.at(EOF) || at_decl(p) {
            break;
        }
    }
    m.complete(p, ERROR);
}

fn enum_case_decl(p: &mut Parser<'_>, m: Marker) {
    p.advance();
    loop {
        let element = p.start();
        super::name(p, &SyntaxSet::new([COMMA, LEFT_PAREN, EQ]));
        if p.at(LEFT_PAREN) {
            types::tuple_type(p);
        }
        if p.at(EQ) {
            initializer_clause(p);
        }
        element.complete(p, ENUM_CASE_ELEMENT);
        if !p.eat(COMMA) {
            break;
        }
    }
    m.complete(p, ENUM_CASE_DECL);
}

fn associated_type_decl(p: &mut Parser<'_>, m: Marker) {
    p.advance();
    super::name(p, &DECL_RECOVERY);
    if p.at(COLON) {
        generics::inheritance_clause(p);
    }
    if p.at(EQ) {
        type_initializer(p);
    }
    if p.at(WHERE_KW) {
        generics::where_clause(p);
    }
    m.complete(p, ASSOCIATED_TYPE_DECL);
}

fn typealias_decl(p: &mut Parser<'_>, m: Marker) {
    p.advance();
    super::name(p, &DECL_RECOVERY);
    if p.at_op("<") {
        generics::generic_param_list(p);
    }
    if p.at(EQ) {
        type_initializer(p);
    } else {
        p.error("expected '=' in type alias declaration");
    }
    if p.at(WHERE_KW) {
        generics::where_clause(p);
    }
    m.complete(p, TYPEALIAS_DECL);
}

fn type_initializer(p: &mut Parser<'_>) {
    let m = p.start();
    p.advance();
    types::type_(p);
    m.complete(p, TYPE_INITIALIZER);
}

fn import_decl(p: &mut Parser<'_>, m: Marker) {
    p.advance();
    if matches!(
        p.peek_kind(),
        TYPEALIAS_KW | STRUCT_KW | CLASS_KW | ENUM_KW | PROTOCOL_KW | LET_KW | VAR_KW | FUNC_KW
    ) {
        p.advance();
    }

    let path = p.start();
    super::name(p, &SyntaxSet::EMPTY);
    while p.at(DOT) {
        p.advance();
        if p.peek_kind().is_keyword() {
            p.advance_as(NAME);
        } else if p.peek_kind().is_operator() {
            p.advance();
        } else {
            super::name(p, &SyntaxSet::EMPTY);
        }
    }
    path.complete(p, IMPORT_PATH);
    m.complete(p, IMPORT_DECL);
}
