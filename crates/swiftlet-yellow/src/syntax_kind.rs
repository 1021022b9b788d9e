#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(u16)]
pub enum SyntaxKind {
    LEFT_PAREN,
    RIGHT_PAREN,
    LEFT_BRACKET,
    RIGHT_BRACKET,
    LEFT_BRACE,
    RIGHT_BRACE,
    LEFT_ANGLE,
    RIGHT_ANGLE,
    COMMA,
    COLON,
    SEMICOLON,
    AT,
    DOT,
    EQ,
    ARROW,

    BINARY_OPERATOR,
    PREFIX_OPERATOR,
    POSTFIX_OPERATOR,
    QUESTION,
    POSTFIX_QUESTION,
    ELLIPSIS,

    ASSOCIATEDTYPE_KW,
    CLASS_KW,
    DEINIT_KW,
    ENUM_KW,
    EXTENSION_KW,
    FUNC_KW,
    IMPORT_KW,
    INIT_KW,
    INOUT_KW,
    LET_KW,
    PROTOCOL_KW,
    STATIC_KW,
    STRUCT_KW,
    TYPEALIAS_KW,
    VAR_KW,
    BREAK_KW,
    CASE_KW,
    CATCH_KW,
    CONTINUE_KW,
    DEFAULT_KW,
    DEFER_KW,
    DO_KW,
    ELSE_KW,
    FALLTHROUGH_KW,
    FOR_KW,
    GUARD_KW,
    IF_KW,
    IN_KW,
    REPEAT_KW,
    RETURN_KW,
    SWITCH_KW,
    THROW_KW,
    WHERE_KW,
    WHILE_KW,
    AS_KW,
    IS_KW,
    TRY_KW,
    THROWS_KW,
    RETHROWS_KW,
    TRUE_KW,
    FALSE_KW,
    NIL_KW,
    SELF_KW,
    CAPITAL_SELF_KW,
    SUPER_KW,
    UNDERSCORE,

    ASYNC_KW,
    AWAIT_KW,
    SOME_KW,
    ANY_KW,

    NAME,
    INT_NUMBER,
    FLOAT_NUMBER,
    STRING,

    UNKNOWN,
    EOF,

    SOURCE_FILE,
    CODE_BLOCK,
    MEMBER_BLOCK,

    ATTRIBUTE,
    ATTRIBUTE_ARGUMENTS,
    DECL_MODIFIER,

    FUNC_DECL,
    INIT_DECL,
    DEINIT_DECL,
    VAR_DECL,
    PATTERN_BINDING,
    TYPE_ANNOTATION,
    INITIALIZER_CLAUSE,
    ACCESSOR_BLOCK,
    ACCESSOR_DECL,
    PROTOCOL_DECL,
    PRIMARY_ASSOCIATED_TYPE_LIST,
    PRIMARY_ASSOCIATED_TYPE,
    STRUCT_DECL,
    CLASS_DECL,
    ENUM_DECL,
    ENUM_CASE_DECL,
    ENUM_CASE_ELEMENT,
    EXTENSION_DECL,
    ASSOCIATED_TYPE_DECL,
    TYPEALIAS_DECL,
    TYPE_INITIALIZER,
    IMPORT_DECL,
    IMPORT_PATH,

    PARAM_LIST,
    PARAM,
    EFFECT_SPECIFIERS,
    RETURN_CLAUSE,

    GENERIC_PARAM_LIST,
    GENERIC_PARAM,
    GENERIC_ARG_LIST,
    INHERITANCE_CLAUSE,
    INHERITED_TYPE,
    WHERE_CLAUSE,
    CONFORMANCE_REQUIREMENT,
    SAME_TYPE_REQUIREMENT,

    IDENT_PATTERN,
    WILDCARD_PATTERN,
    TUPLE_PATTERN,
    VALUE_BINDING_PATTERN,

    EXPR_STMT,
    RETURN_STMT,
    THROW_STMT,
    BREAK_STMT,
    CONTINUE_STMT,
    FALLTHROUGH_STMT,
    DEFER_STMT,
    DO_STMT,
    CATCH_CLAUSE,
    IF_STMT,
    GUARD_STMT,
    WHILE_STMT,
    REPEAT_STMT,
    FOR_IN_STMT,
    SWITCH_STMT,
    CONDITION_LIST,
    OPTIONAL_BINDING_CONDITION,
    SWITCH_CASE,
    SWITCH_CASE_LABEL,
    SWITCH_DEFAULT_LABEL,
    WHERE_GUARD,

    NAME_EXPR,
    INTEGER_LITERAL_EXPR,
    FLOAT_LITERAL_EXPR,
    STRING_LITERAL_EXPR,
    BOOLEAN_LITERAL_EXPR,
    NIL_LITERAL_EXPR,
    DISCARD_EXPR,
    PAREN_EXPR,
    TUPLE_EXPR,
    TUPLE_ELEMENT,
    ARRAY_EXPR,
    DICTIONARY_EXPR,
    DICTIONARY_ELEMENT,
    CLOSURE_EXPR,
    CLOSURE_SIGNATURE,
    CLOSURE_PARAM,
    CALL_EXPR,
    ARG_LIST,
    ARG,
    LABELED_TRAILING_CLOSURE,
    SUBSCRIPT_EXPR,
    MEMBER_ACCESS_EXPR,
    IMPLICIT_MEMBER_EXPR,
    SPECIALIZE_EXPR,
    OPTIONAL_CHAINING_EXPR,
    FORCE_UNWRAP_EXPR,
    POSTFIX_EXPR,
    PREFIX_EXPR,
    INOUT_EXPR,
    BINARY_EXPR,
    ASSIGN_EXPR,
    TERNARY_EXPR,
    IS_EXPR,
    AS_EXPR,
    TRY_EXPR,
    AWAIT_EXPR,
    IF_EXPR,
    SWITCH_EXPR,

    IDENT_TYPE,
    MEMBER_TYPE,
    ARRAY_TYPE,
    DICTIONARY_TYPE,
    TUPLE_TYPE,
    TUPLE_TYPE_ELEMENT,
    FUNCTION_TYPE,
    OPTIONAL_TYPE,
    IMPLICITLY_UNWRAPPED_OPTIONAL_TYPE,
    METATYPE_TYPE,
    COMPOSITION_TYPE,
    SOME_OR_ANY_TYPE,
    ATTRIBUTED_TYPE,

    ERROR,
    TOMBSTONE,
}

impl SyntaxKind {
    /// Tokens whose meaning is fully carried by the node that owns them.
    ///
    /// The canonical dump leaves these out.
    pub const fn is_punctuation(self) -> bool {
        matches!(
            self,
            SyntaxKind::LEFT_PAREN
                | SyntaxKind::RIGHT_PAREN
                | SyntaxKind::LEFT_BRACKET
                | SyntaxKind::RIGHT_BRACKET
                | SyntaxKind::LEFT_BRACE
                | SyntaxKind::RIGHT_BRACE
                | SyntaxKind::LEFT_ANGLE
                | SyntaxKind::RIGHT_ANGLE
                | SyntaxKind::COMMA
                | SyntaxKind::COLON
                | SyntaxKind::SEMICOLON
                | SyntaxKind::AT
                | SyntaxKind::DOT
                | SyntaxKind::EQ
                | SyntaxKind::ARROW
                | SyntaxKind::QUESTION
                | SyntaxKind::POSTFIX_QUESTION
        )
    }

    pub const fn is_keyword(self) -> bool {
        self as u16 >= SyntaxKind::ASSOCIATEDTYPE_KW as u16
            && self as u16 <= SyntaxKind::ANY_KW as u16
    }

    pub const fn is_operator(self) -> bool {
        matches!(
            self,
            SyntaxKind::BINARY_OPERATOR | SyntaxKind::PREFIX_OPERATOR | SyntaxKind::POSTFIX_OPERATOR
        )
    }

    pub const fn is_literal(self) -> bool {
        matches!(self, SyntaxKind::INT_NUMBER | SyntaxKind::FLOAT_NUMBER | SyntaxKind::STRING)
    }

    /// Returns `true` for kinds produced by the tokenizer or the parser's
    /// token remapping, as opposed to node kinds.
    pub const fn is_token(self) -> bool {
        self as u16 <= SyntaxKind::EOF as u16
    }
}
