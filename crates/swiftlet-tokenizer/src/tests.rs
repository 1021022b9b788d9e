use super::*;

fn lex(text: &str) -> Vec<(SyntaxKind, &str)> {
    let tokens = tokenize(text);
    tokens.iter().map(|token| (token.kind, &text[token.range])).collect()
}

fn trivia_kinds(trivia: &GreenTrivia) -> Vec<TriviaPieceKind> {
    trivia.pieces().iter().map(|piece| piece.kind).collect()
}

#[test]
fn test_integer_literals() {
    let inputs = ["123", "0", "0b1010", "0o755", "0x1f", "123_456"];

    for input in inputs {
        assert_eq!(lex(input), [(INT_NUMBER, input), (EOF, "")], "Input: '{input}'");
    }
}

#[test]
fn test_float_literals() {
    let inputs = ["123.456", "0.0", "1e10", "1.0e-5", "123_456.789_012"];

    for input in inputs {
        assert_eq!(lex(input), [(FLOAT_NUMBER, input), (EOF, "")], "Input: '{input}'");
    }
}

#[test]
fn closed_range_between_integers() {
    assert_eq!(
        lex("0...1"),
        [(INT_NUMBER, "0"), (BINARY_OPERATOR, "..."), (INT_NUMBER, "1"), (EOF, "")]
    );
    assert_eq!(
        lex("0..<n"),
        [(INT_NUMBER, "0"), (BINARY_OPERATOR, "..<"), (NAME, "n"), (EOF, "")]
    );
}

#[test]
fn test_eq_operator() {
    assert_eq!(lex("x = y"), [(NAME, "x"), (EQ, "="), (NAME, "y"), (EOF, "")]);
    assert_eq!(lex("x=y"), [(NAME, "x"), (EQ, "="), (NAME, "y"), (EOF, "")]);
    assert_eq!(lex("x == y"), [(NAME, "x"), (BINARY_OPERATOR, "=="), (NAME, "y"), (EOF, "")]);
}

#[test]
fn test_dot_and_arrow() {
    assert_eq!(lex("object.property"), [(NAME, "object"), (DOT, "."), (NAME, "property"), (EOF, "")]);
    assert_eq!(lex(".none"), [(DOT, "."), (NAME, "none"), (EOF, "")]);
    assert_eq!(lex("a->b"), [(NAME, "a"), (ARROW, "->"), (NAME, "b"), (EOF, "")]);
}

#[test]
fn operator_fixity_follows_whitespace() {
    let cases = [
        ("a+b", BINARY_OPERATOR, "+"),
        ("a + b", BINARY_OPERATOR, "+"),
        ("- a", BINARY_OPERATOR, "-"),
        ("a ++", BINARY_OPERATOR, "++"),
        ("a++", POSTFIX_OPERATOR, "++"),
    ];
    for (input, kind, op) in cases {
        let tokens = lex(input);
        assert!(tokens.contains(&(kind, op)), "Input: '{input}', tokens: {tokens:?}");
    }

    assert_eq!(lex("-a"), [(PREFIX_OPERATOR, "-"), (NAME, "a"), (EOF, "")]);
    assert_eq!(lex("(-a)")[1], (PREFIX_OPERATOR, "-"));
}

#[test]
fn question_and_exclamation_marks() {
    assert_eq!(
        lex("x?.y"),
        [(NAME, "x"), (POSTFIX_QUESTION, "?"), (DOT, "."), (NAME, "y"), (EOF, "")]
    );
    assert_eq!(
        lex("a ? b : c"),
        [(NAME, "a"), (QUESTION, "?"), (NAME, "b"), (COLON, ":"), (NAME, "c"), (EOF, "")]
    );
    assert_eq!(
        lex("x! != y"),
        [(NAME, "x"), (POSTFIX_OPERATOR, "!"), (BINARY_OPERATOR, "!="), (NAME, "y"), (EOF, "")]
    );
    assert_eq!(lex("a ?? b")[1], (BINARY_OPERATOR, "??"));
    assert_eq!(lex("!flag")[0], (PREFIX_OPERATOR, "!"));
}

#[test]
fn comments_end_operators() {
    assert_eq!(
        lex("a-// note\nb"),
        [(NAME, "a"), (POSTFIX_OPERATOR, "-"), (NAME, "b"), (EOF, "")]
    );
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(
        lex("func async _ _x $0 `class` Self"),
        [
            (FUNC_KW, "func"),
            (NAME, "async"),
            (UNDERSCORE, "_"),
            (NAME, "_x"),
            (NAME, "$0"),
            (NAME, "`class`"),
            (CAPITAL_SELF_KW, "Self"),
            (EOF, ""),
        ]
    );
    assert_eq!(lex("héllo")[0], (NAME, "héllo"));
}

#[test]
fn string_literals() {
    assert_eq!(lex(r#""a\"b""#), [(STRING, r#""a\"b""#), (EOF, "")]);
    assert_eq!(lex(r#""x \(f("y")) z""#)[0], (STRING, r#""x \(f("y")) z""#));
    assert_eq!(lex("\"\"\"\nhi \"there\"\n\"\"\"")[0], (STRING, "\"\"\"\nhi \"there\"\n\"\"\""));
    assert_eq!(lex(r##"#"a"b"#"##)[0], (STRING, r##"#"a"b"#"##));
    assert_eq!(lex(r#""""#), [(STRING, r#""""#), (EOF, "")]);
}

#[test]
fn unterminated_string_stops_at_line_end() {
    let tokens = tokenize("\"abc\nx");
    assert_eq!(tokens.text(0), "\"abc");
    assert_eq!(tokens.kind(1), NAME);
    assert_eq!(
        tokens.errors(),
        [LexError { kind: LexErrorKind::UnterminatedString, offset: TextSize::new(0) }]
    );
}

#[test]
fn block_comments_nest() {
    let tokens = tokenize("/* a /* b */ c */x");
    assert_eq!(tokens.kind(0), NAME);
    assert_eq!(tokens.leading_trivia(0).len(), TextSize::new(17));
    assert_eq!(trivia_kinds(tokens.leading_trivia(0)), [TriviaPieceKind::BlockComment]);
    assert!(tokens.errors().is_empty());
}

#[test]
fn unterminated_block_comment() {
    let tokens = tokenize("a /* b");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens.kind(1), EOF);
    assert_eq!(
        trivia_kinds(tokens.trailing_trivia(0)),
        [TriviaPieceKind::Space, TriviaPieceKind::BlockComment]
    );
    assert_eq!(
        tokens.errors(),
        [LexError { kind: LexErrorKind::UnterminatedBlockComment, offset: TextSize::new(2) }]
    );
}

#[test]
fn unknown_character() {
    let tokens = tokenize("a # b");
    assert_eq!(tokens.kind(1), UNKNOWN);
    assert_eq!(tokens.text(1), "#");
    assert_eq!(tokens.kind(2), NAME);
    assert_eq!(tokens.errors()[0].kind, LexErrorKind::UnknownCharacter);
    assert_eq!(tokens.errors()[0].offset, TextSize::new(2));
}

#[test]
fn trailing_trivia_stops_before_newline() {
    let tokens = tokenize("a // c\n  b");
    assert_eq!(
        trivia_kinds(tokens.trailing_trivia(0)),
        [TriviaPieceKind::Space, TriviaPieceKind::LineComment]
    );
    assert_eq!(
        trivia_kinds(tokens.leading_trivia(1)),
        [TriviaPieceKind::Newline, TriviaPieceKind::Space]
    );
    assert!(tokens.has_newline_before(1));
    assert!(!tokens.is_joint(1));
}

#[test]
fn eof_owns_final_trivia() {
    let tokens = tokenize("a\n// end\n");
    assert!(tokens.trailing_trivia(0).is_empty());
    assert_eq!(tokens.kind(1), EOF);
    assert_eq!(
        trivia_kinds(tokens.leading_trivia(1)),
        [TriviaPieceKind::Newline, TriviaPieceKind::LineComment, TriviaPieceKind::Newline]
    );
}

#[test]
fn next_token_index_repeats_eof() {
    let mut tokenizer = Tokenizer::new("x");
    assert_eq!(tokenizer.next_token_index(), 0);
    assert_eq!(tokenizer.next_token_index(), 1);
    assert_eq!(tokenizer.token(1).kind, EOF);
    assert_eq!(tokenizer.next_token_index(), 1);
    assert_eq!(tokenizer.next_token_index(), 1);
}

#[test]
fn tokens_cover_the_source() {
    let text = "func\r\nf /* x */ (a: Int)\t-> Int {\n  // body\n  return a+1 }\n\n";
    let tokens = tokenize(text);
    let mut offset = TextSize::new(0);
    for index in 0..tokens.len() {
        let token = tokens.get(index);
        assert_eq!(token.range.start() - tokens.leading_trivia(index).len(), offset);
        offset = token.range.end() + tokens.trailing_trivia(index).len();
    }
    assert_eq!(offset, TextSize::of(text));
    assert!(tokens.is_joint(tokens.len() - 4), "`a+` has no trivia between the tokens");
}

#[test]
fn utf8_prefix_truncates_at_invalid_byte() {
    let (text, error) = utf8_prefix(b"ab\xffcd");
    assert_eq!(text, "ab");
    assert_eq!(error, Some(LexError { kind: LexErrorKind::InvalidUtf8, offset: TextSize::new(2) }));

    assert_eq!(utf8_prefix(b"fine"), ("fine", None));
}
