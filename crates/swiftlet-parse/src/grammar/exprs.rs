use swiftlet_yellow::SyntaxKind::{self, *};
use swiftlet_yellow::SyntaxSet;

use super::{decls, delimited, generics, patterns, stmts, types};
use crate::parser::{CompletedMarker, Parser, Rollback};

const EXPR_FIRST: SyntaxSet = SyntaxSet::new([
    NAME,
    INT_NUMBER,
    FLOAT_NUMBER,
    STRING,
    TRUE_KW,
    FALSE_KW,
    NIL_KW,
    SELF_KW,
    SUPER_KW,
    CAPITAL_SELF_KW,
    UNDERSCORE,
    LEFT_PAREN,
    LEFT_BRACKET,
    LEFT_BRACE,
    DOT,
    PREFIX_OPERATOR,
    TRY_KW,
    IF_KW,
    SWITCH_KW,
]);

const EXPR_RECOVERY: SyntaxSet = SyntaxSet::new([
    RIGHT_PAREN,
    RIGHT_BRACKET,
    COMMA,
    COLON,
    SEMICOLON,
    ELSE_KW,
    IN_KW,
    CASE_KW,
    DEFAULT_KW,
    WHERE_KW,
]);

/// Offset of the `{` in `label: {`.
const LABELED_CLOSURE_LOOKAHEAD: usize = 2;

/// Binding power of the tightest-binding operators; prefix operands are
/// parsed at this level.
const PREFIX_BP: u8 = u8::MAX;

pub(crate) fn at_expr_start(p: &Parser<'_>) -> bool {
    p.at_set(&EXPR_FIRST)
}

pub(super) fn expr(p: &mut Parser<'_>) -> Option<CompletedMarker> {
    expr_bp(p, 0)
}

fn expr_bp(p: &mut Parser<'_>, min_bp: u8) -> Option<CompletedMarker> {
    let mut lhs = unary_expr(p, min_bp)?;

    let mut levels = 0;
    while let Some(op) = infix_op(p) {
        let (l_bp, r_bp) = op.binding_power();
        if l_bp < min_bp || !p.enter() {
            break;
        }
        levels += 1;

        let m = lhs.precede(p);
        lhs = match op {
            Infix::Assign => {
                p.advance();
                expr_bp(p, r_bp);
                m.complete(p, ASSIGN_EXPR)
            }
            Infix::Ternary => {
                p.advance();
                expr(p);
                if p.expect(COLON) {
                    expr_bp(p, r_bp);
                }
                m.complete(p, TERNARY_EXPR)
            }
            Infix::Cast => {
                let kind = if p.at(IS_KW) { IS_EXPR } else { AS_EXPR };
                p.advance();
                if kind == AS_EXPR
                    && (p.at(POSTFIX_QUESTION) || (p.at(POSTFIX_OPERATOR) && p.peek_text() == "!"))
                {
                    p.advance();
                }
                types::type_(p);
                m.complete(p, kind)
            }
            Infix::Binary(..) => {
                p.advance();
                expr_bp(p, r_bp);
                m.complete(p, BINARY_EXPR)
            }
        };
    }
    p.leave(levels);

    Some(lhs)
}

#[derive(Debug, Clone, Copy)]
enum Infix {
    Assign,
    Ternary,
    Cast,
    Binary(Precedence),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Precedence {
    Assignment = 1,
    Ternary,
    Default,
    Disjunction,
    Conjunction,
    Comparison,
    NilCoalescing,
    Casting,
    Range,
    Addition,
    Multiplication,
    BitwiseShift,
}

impl Precedence {
    fn is_right_associative(self) -> bool {
        matches!(self, Precedence::Assignment | Precedence::Ternary | Precedence::NilCoalescing)
    }
}

impl Infix {
    fn precedence(self) -> Precedence {
        match self {
            Infix::Assign => Precedence::Assignment,
            Infix::Ternary => Precedence::Ternary,
            Infix::Cast => Precedence::Casting,
            Infix::Binary(precedence) => precedence,
        }
    }

    fn binding_power(self) -> (u8, u8) {
        let precedence = self.precedence();
        let level = precedence as u8 * 2;
        if precedence.is_right_associative() { (level + 1, level) } else { (level, level + 1) }
    }
}

fn infix_op(p: &Parser<'_>) -> Option<Infix> {
    Some(match p.peek_kind() {
        EQ => Infix::Assign,
        QUESTION => Infix::Ternary,
        IS_KW | AS_KW => Infix::Cast,
        BINARY_OPERATOR => Infix::Binary(binary_precedence(p.peek_text())),
        _ => return None,
    })
}

fn binary_precedence(op: &str) -> Precedence {
    match op {
        "*=" | "/=" | "%=" | "+=" | "-=" | "<<=" | ">>=" | "&=" | "|=" | "^=" | "&+=" | "&-="
        | "&*=" | "&<<=" | "&>>=" => Precedence::Assignment,
        "||" => Precedence::Disjunction,
        "&&" => Precedence::Conjunction,
        "==" | "!=" | "<" | "<=" | ">" | ">=" | "===" | "!==" | "~=" => Precedence::Comparison,
        "??" => Precedence::NilCoalescing,
        "..." | "..<" => Precedence::Range,
        "+" | "-" | "&+" | "&-" | "|" | "^" => Precedence::Addition,
        "*" | "/" | "%" | "&" | "&*" => Precedence::Multiplication,
        "<<" | ">>" | "&<<" | "&>>" => Precedence::BitwiseShift,
        _ => Precedence::Default,
    }
}

fn unary_expr(p: &mut Parser<'_>, min_bp: u8) -> Option<CompletedMarker> {
    p.nested(|p| prefixed_expr(p, min_bp)).flatten()
}

fn prefixed_expr(p: &mut Parser<'_>, min_bp: u8) -> Option<CompletedMarker> {
    match p.peek_kind() {
        TRY_KW => {
            let m = p.start();
            p.advance();
            if p.at(POSTFIX_QUESTION) || (p.at(POSTFIX_OPERATOR) && p.peek_text() == "!") {
                p.advance();
            }
            expr_bp(p, min_bp);
            Some(m.complete(p, TRY_EXPR))
        }
        NAME if p.at_contextual("await")
            && at_expr_start_after(p, 1)
            && !p.nth_has_newline_before(1) =>
        {
            let m = p.start();
            p.advance_as(AWAIT_KW);
            expr_bp(p, min_bp);
            Some(m.complete(p, AWAIT_EXPR))
        }
        PREFIX_OPERATOR => Some(prefix_expr(p)),
        BINARY_OPERATOR if at_expr_start_after(p, 1) => Some(prefix_expr(p)),
        _ => postfix_expr(p),
    }
}

fn at_expr_start_after(p: &Parser<'_>, n: usize) -> bool {
    EXPR_FIRST.contains(p.nth_kind(n))
}

fn prefix_expr(p: &mut Parser<'_>) -> CompletedMarker {
    let m = p.start();
    let kind = if p.peek_text() == "&" { INOUT_EXPR } else { PREFIX_EXPR };
    p.advance_as(PREFIX_OPERATOR);
    unary_expr(p, PREFIX_BP);
    m.complete(p, kind)
}

pub(super) fn postfix_expr(p: &mut Parser<'_>) -> Option<CompletedMarker> {
    let mut lhs = primary_expr(p)?;

    let mut levels = 0;
    loop {
        lhs = match p.peek_kind() {
            DOT => member_access(p, lhs),
            BINARY_OPERATOR
                if p.at_op("<") && p.is_joint() && is_specializable(lhs.kind()) =>
            {
                match specialization(p, lhs) {
                    Some(specialized) => specialized,
                    None => break,
                }
            }
            LEFT_PAREN if !p.has_newline_before() => {
                let m = lhs.precede(p);
                arg_list(p);
                trailing_closures(p);
                m.complete(p, CALL_EXPR)
            }
            LEFT_BRACKET if !p.has_newline_before() => {
                let m = lhs.precede(p);
                p.with_trailing_closures(true, |p| {
                    delimited(
                        p,
                        LEFT_BRACKET,
                        RIGHT_BRACKET,
                        COMMA,
                        "unexpected ',' in subscript",
                        &EXPR_FIRST,
                        arg,
                    );
                });
                m.complete(p, SUBSCRIPT_EXPR)
            }
            LEFT_BRACE if at_trailing_closure(p) && takes_trailing_closure(lhs.kind()) => {
                let m = lhs.precede(p);
                trailing_closures(p);
                m.complete(p, CALL_EXPR)
            }
            POSTFIX_QUESTION => {
                let m = lhs.precede(p);
                p.advance();
                m.complete(p, OPTIONAL_CHAINING_EXPR)
            }
            POSTFIX_OPERATOR => {
                let kind = if p.peek_text() == "!" { FORCE_UNWRAP_EXPR } else { POSTFIX_EXPR };
                let m = lhs.precede(p);
                p.advance();
                m.complete(p, kind)
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

fn is_specializable(kind: SyntaxKind) -> bool {
    matches!(kind, NAME_EXPR | MEMBER_ACCESS_EXPR | IMPLICIT_MEMBER_EXPR)
}

fn takes_trailing_closure(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        NAME_EXPR
            | MEMBER_ACCESS_EXPR
            | IMPLICIT_MEMBER_EXPR
            | SPECIALIZE_EXPR
            | SUBSCRIPT_EXPR
            | OPTIONAL_CHAINING_EXPR
            | FORCE_UNWRAP_EXPR
    )
}

/// Tries `base<Args>`; the angle brackets are taken as generic arguments
/// only when the token after `>` could not continue a comparison.
fn specialization(p: &mut Parser<'_>, lhs: CompletedMarker) -> Option<CompletedMarker> {
    if !generics::at_closed_generic_args(p) {
        return None;
    }
    p.speculate("generic argument list", |p, checkpoint| {
        generics::generic_arg_list(p);
        if p.has_errors_since(checkpoint) || !at_generic_args_follower(p) {
            return Err(Rollback);
        }
        Ok(())
    })?;
    let m = lhs.precede(p);
    Some(m.complete(p, SPECIALIZE_EXPR))
}

fn at_generic_args_follower(p: &Parser<'_>) -> bool {
    match p.peek_kind() {
        LEFT_PAREN => !p.has_newline_before(),
        DOT | RIGHT_PAREN | RIGHT_BRACKET | RIGHT_BRACE | COMMA | SEMICOLON | COLON | EOF
        | POSTFIX_QUESTION => true,
        POSTFIX_OPERATOR if p.peek_text() == "!" => true,
        BINARY_OPERATOR if matches!(p.peek_text(), "==" | "!=") => true,
        _ => p.has_newline_before(),
    }
}

fn member_access(p: &mut Parser<'_>, lhs: CompletedMarker) -> CompletedMarker {
    let m = lhs.precede(p);
    p.advance();
    member_name(p);
    m.complete(p, MEMBER_ACCESS_EXPR)
}

fn member_name(p: &mut Parser<'_>) {
    match p.peek_kind() {
        NAME | INT_NUMBER | FLOAT_NUMBER | INIT_KW | SELF_KW => p.advance(),
        kind if kind.is_keyword() => p.advance_as(NAME),
        _ => p.error("expected member name following '.'"),
    }
}

fn at_trailing_closure(p: &Parser<'_>) -> bool {
    p.at(LEFT_BRACE)
        && p.trailing_closures()
        && !p.has_newline_before()
        && !decls::at_observer(p, 1)
}

fn at_labeled_trailing_closure(p: &Parser<'_>) -> bool {
    (p.at(NAME) || p.at(UNDERSCORE))
        && p.nth_at(1, COLON)
        && p.nth_at(LABELED_CLOSURE_LOOKAHEAD, LEFT_BRACE)
}

fn trailing_closures(p: &mut Parser<'_>) {
    if !at_trailing_closure(p) {
        return;
    }
    closure_expr(p);
    while at_labeled_trailing_closure(p) {
        let m = p.start();
        p.advance();
        p.advance();
        closure_expr(p);
        m.complete(p, LABELED_TRAILING_CLOSURE);
    }
}

fn arg_list(p: &mut Parser<'_>) {
    let m = p.start();
    p.with_trailing_closures(true, |p| {
        delimited(
            p,
            LEFT_PAREN,
            RIGHT_PAREN,
            COMMA,
            "unexpected ',' separator",
            &EXPR_FIRST,
            arg,
        );
    });
    m.complete(p, ARG_LIST);
}

/// `label: value`, `value`, or a bare operator such as the `+` in
/// `reduce(0, +)`.
fn arg(p: &mut Parser<'_>) -> bool {
    let m = p.start();
    if super::at_label(p, 0) && p.nth_at(1, COLON) {
        super::label(p);
        p.advance();
    }
    if p.peek_kind().is_operator() && matches!(p.nth_kind(1), COMMA | RIGHT_PAREN | RIGHT_BRACKET)
    {
        p.advance();
    } else {
        expr(p);
    }
    m.complete(p, ARG);
    true
}

fn primary_expr(p: &mut Parser<'_>) -> Option<CompletedMarker> {
    let kind = match p.peek_kind() {
        NAME | SELF_KW | SUPER_KW | CAPITAL_SELF_KW => NAME_EXPR,
        INT_NUMBER => INTEGER_LITERAL_EXPR,
        FLOAT_NUMBER => FLOAT_LITERAL_EXPR,
        STRING => STRING_LITERAL_EXPR,
        TRUE_KW | FALSE_KW => BOOLEAN_LITERAL_EXPR,
        NIL_KW => NIL_LITERAL_EXPR,
        UNDERSCORE => DISCARD_EXPR,
        LEFT_PAREN => return Some(paren_or_tuple_expr(p)),
        LEFT_BRACKET => return Some(collection_expr(p)),
        LEFT_BRACE => return Some(closure_expr(p)),
        DOT => return Some(implicit_member_expr(p)),
        IF_KW => return Some(stmts::if_(p, IF_EXPR)),
        SWITCH_KW => return Some(stmts::switch_(p, SWITCH_EXPR)),
        LET_KW | VAR_KW => return Some(patterns::value_binding_pattern(p)),
        _ => {
            p.error_recover("expected expression", &EXPR_RECOVERY);
            return None;
        }
    };

    let m = p.start();
    p.advance();
    Some(m.complete(p, kind))
}

fn implicit_member_expr(p: &mut Parser<'_>) -> CompletedMarker {
    let m = p.start();
    p.advance();
    member_name(p);
    m.complete(p, IMPLICIT_MEMBER_EXPR)
}

/// `(x)` is a parenthesized expression; `()`, `(x,)`, `(a: x)` and
/// `(x, y)` are tuples.
fn paren_or_tuple_expr(p: &mut Parser<'_>) -> CompletedMarker {
    let m = p.start();
    p.advance();
    let kind = p.with_trailing_closures(true, |p| {
        if p.at(RIGHT_PAREN) {
            return TUPLE_EXPR;
        }

        let mut kind = PAREN_EXPR;
        loop {
            let element = p.start();
            let labeled = super::at_label(p, 0) && p.nth_at(1, COLON);
            if labeled {
                super::label(p);
                p.advance();
            }
            expr(p);

            if kind == PAREN_EXPR && !labeled && !p.at(COMMA) {
                element.abandon(p);
            } else {
                element.complete(p, TUPLE_ELEMENT);
                kind = TUPLE_EXPR;
            }

            if !p.eat(COMMA) || p.at(RIGHT_PAREN) {
                break;
            }
        }
        kind
    });
    p.expect(RIGHT_PAREN);
    m.complete(p, kind)
}

/// Array and dictionary literals, told apart by the `:` after the first
/// element.
fn collection_expr(p: &mut Parser<'_>) -> CompletedMarker {
    let m = p.start();
    p.advance();
    let kind = p.with_trailing_closures(true, |p| {
        if p.at(COLON) && p.nth_at(1, RIGHT_BRACKET) {
            p.advance();
            return DICTIONARY_EXPR;
        }

        let mut collection = None;
        while !p.at(RIGHT_BRACKET) && !p.at(EOF) {
            let element = p.start();
            expr(p);
            let pair = p.eat(COLON);
            if pair {
                expr(p);
                element.complete(p, DICTIONARY_ELEMENT);
            } else {
                element.abandon(p);
            }
            let kind = *collection.get_or_insert(if pair { DICTIONARY_EXPR } else { ARRAY_EXPR });
            if (kind == DICTIONARY_EXPR) != pair {
                p.error("expected ':' in dictionary literal");
            }

            if !p.eat(COMMA) {
                break;
            }
        }
        collection.unwrap_or(ARRAY_EXPR)
    });
    p.expect(RIGHT_BRACKET);
    m.complete(p, kind)
}

pub(super) fn closure_expr(p: &mut Parser<'_>) -> CompletedMarker {
    let m = p.start();
    p.advance();
    p.with_trailing_closures(true, |p| {
        if at_closure_signature(p) {
            closure_signature(p);
        }
        super::items(p, &SyntaxSet::new([RIGHT_BRACE]));
    });
    p.expect(RIGHT_BRACE);
    m.complete(p, CLOSURE_EXPR)
}

fn at_closure_signature(p: &Parser<'_>) -> bool {
    if p.at(LEFT_PAREN) {
        return true;
    }
    (p.at(NAME) || p.at(UNDERSCORE))
        && (matches!(p.nth_kind(1), COMMA | IN_KW | ARROW | THROWS_KW)
            || p.nth_contextual(1, "async"))
}

/// `(a: Int, b) async throws -> T in` or `a, b in`, kept only if it ends
/// in `in`.
fn closure_signature(p: &mut Parser<'_>) {
    p.speculate("closure signature", |p, checkpoint| {
        let m = p.start();
        let mut complete = true;
        if p.at(LEFT_PAREN) {
            delimited(
                p,
                LEFT_PAREN,
                RIGHT_PAREN,
                COMMA,
                "unexpected ',' in closure parameters",
                &SyntaxSet::new([NAME, UNDERSCORE]),
                closure_param,
            );
        } else {
            loop {
                if !p.at(NAME) && !p.at(UNDERSCORE) {
                    complete = false;
                    break;
                }
                let param = p.start();
                p.advance();
                param.complete(p, CLOSURE_PARAM);
                if !p.eat(COMMA) {
                    break;
                }
            }
        }
        decls::effect_specifiers(p);
        if p.at(ARROW) {
            decls::return_clause(p);
        }
        complete &= p.eat(IN_KW);
        m.complete(p, CLOSURE_SIGNATURE);

        if !complete || p.has_errors_since(checkpoint) {
            return Err(Rollback);
        }
        Ok(())
    });
}

fn closure_param(p: &mut Parser<'_>) -> bool {
    if !p.at(NAME) && !p.at(UNDERSCORE) {
        p.error("expected closure parameter name");
        return false;
    }
    let m = p.start();
    p.advance();
    if p.at(NAME) {
        p.advance();
    }
    if p.eat(COLON) {
        types::type_(p);
        if p.at_op("...") {
            p.advance_as(ELLIPSIS);
        }
    }
    m.complete(p, CLOSURE_PARAM);
    true
}
