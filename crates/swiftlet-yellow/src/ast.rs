use crate::SyntaxKind::{self, *};
use crate::{SyntaxNode, SyntaxToken};

pub trait Node: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;

    fn cast(syntax: SyntaxNode) -> Option<Self>;

    fn syntax(&self) -> &SyntaxNode;
}

macro_rules! ast_node {
    ($($(#[$meta:meta])* $name:ident = $kind:ident;)*) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl Node for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == $kind
            }

            fn cast(syntax: SyntaxNode) -> Option<Self> {
                Self::can_cast(syntax.kind()).then_some(Self(syntax))
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    )*};
}

macro_rules! ast_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident($node:ident)),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant($node),)*
        }

        impl Node for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                $($node::can_cast(kind))||*
            }

            fn cast(syntax: SyntaxNode) -> Option<Self> {
                $(if $node::can_cast(syntax.kind()) {
                    return $node::cast(syntax).map(Self::$variant);
                })*
                None
            }

            fn syntax(&self) -> &SyntaxNode {
                match self {
                    $(Self::$variant(it) => it.syntax(),)*
                }
            }
        }
    };
}

fn child<N: Node>(parent: &SyntaxNode) -> Option<N> {
    parent.children().find_map(N::cast)
}

fn children<'a, N: Node + 'a>(parent: &'a SyntaxNode) -> impl Iterator<Item = N> + 'a {
    parent.children().filter_map(N::cast)
}

fn token(parent: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    parent.child_tokens().find(|token| token.kind() == kind)
}

fn name_token(parent: &SyntaxNode) -> Option<SyntaxToken> {
    token(parent, NAME)
}

ast_node! {
    SourceFile = SOURCE_FILE;
    CodeBlock = CODE_BLOCK;
    MemberBlock = MEMBER_BLOCK;
    Attribute = ATTRIBUTE;
    DeclModifier = DECL_MODIFIER;

    FuncDecl = FUNC_DECL;
    InitDecl = INIT_DECL;
    DeinitDecl = DEINIT_DECL;
    VarDecl = VAR_DECL;
    PatternBinding = PATTERN_BINDING;
    TypeAnnotation = TYPE_ANNOTATION;
    InitializerClause = INITIALIZER_CLAUSE;
    AccessorBlock = ACCESSOR_BLOCK;
    ProtocolDecl = PROTOCOL_DECL;
    PrimaryAssociatedTypeList = PRIMARY_ASSOCIATED_TYPE_LIST;
    StructDecl = STRUCT_DECL;
    ClassDecl = CLASS_DECL;
    EnumDecl = ENUM_DECL;
    EnumCaseDecl = ENUM_CASE_DECL;
    EnumCaseElement = ENUM_CASE_ELEMENT;
    ExtensionDecl = EXTENSION_DECL;
    AssociatedTypeDecl = ASSOCIATED_TYPE_DECL;
    TypeAliasDecl = TYPEALIAS_DECL;
    TypeInitializer = TYPE_INITIALIZER;
    ImportDecl = IMPORT_DECL;

    ParamList = PARAM_LIST;
    Param = PARAM;
    EffectSpecifiers = EFFECT_SPECIFIERS;
    ReturnClause = RETURN_CLAUSE;

    GenericParamList = GENERIC_PARAM_LIST;
    GenericParam = GENERIC_PARAM;
    GenericArgList = GENERIC_ARG_LIST;
    InheritanceClause = INHERITANCE_CLAUSE;
    InheritedType = INHERITED_TYPE;
    WhereClause = WHERE_CLAUSE;
    ConformanceRequirement = CONFORMANCE_REQUIREMENT;
    SameTypeRequirement = SAME_TYPE_REQUIREMENT;

    IdentPattern = IDENT_PATTERN;
    WildcardPattern = WILDCARD_PATTERN;
    TuplePattern = TUPLE_PATTERN;
    ValueBindingPattern = VALUE_BINDING_PATTERN;

    ExprStmt = EXPR_STMT;
    ReturnStmt = RETURN_STMT;
    ThrowStmt = THROW_STMT;
    BreakStmt = BREAK_STMT;
    ContinueStmt = CONTINUE_STMT;
    FallthroughStmt = FALLTHROUGH_STMT;
    DeferStmt = DEFER_STMT;
    DoStmt = DO_STMT;
    CatchClause = CATCH_CLAUSE;
    IfStmt = IF_STMT;
    GuardStmt = GUARD_STMT;
    WhileStmt = WHILE_STMT;
    RepeatStmt = REPEAT_STMT;
    ForInStmt = FOR_IN_STMT;
    SwitchStmt = SWITCH_STMT;
    ConditionList = CONDITION_LIST;
    OptionalBindingCondition = OPTIONAL_BINDING_CONDITION;
    SwitchCase = SWITCH_CASE;

    NameExpr = NAME_EXPR;
    IntegerLiteralExpr = INTEGER_LITERAL_EXPR;
    FloatLiteralExpr = FLOAT_LITERAL_EXPR;
    StringLiteralExpr = STRING_LITERAL_EXPR;
    BooleanLiteralExpr = BOOLEAN_LITERAL_EXPR;
    NilLiteralExpr = NIL_LITERAL_EXPR;
    DiscardExpr = DISCARD_EXPR;
    ParenExpr = PAREN_EXPR;
    TupleExpr = TUPLE_EXPR;
    TupleElement = TUPLE_ELEMENT;
    ArrayExpr = ARRAY_EXPR;
    DictionaryExpr = DICTIONARY_EXPR;
    ClosureExpr = CLOSURE_EXPR;
    ClosureSignature = CLOSURE_SIGNATURE;
    CallExpr = CALL_EXPR;
    ArgList = ARG_LIST;
    Arg = ARG;
    LabeledTrailingClosure = LABELED_TRAILING_CLOSURE;
    SubscriptExpr = SUBSCRIPT_EXPR;
    MemberAccessExpr = MEMBER_ACCESS_EXPR;
    ImplicitMemberExpr = IMPLICIT_MEMBER_EXPR;
    SpecializeExpr = SPECIALIZE_EXPR;
    OptionalChainingExpr = OPTIONAL_CHAINING_EXPR;
    ForceUnwrapExpr = FORCE_UNWRAP_EXPR;
    PostfixExpr = POSTFIX_EXPR;
    PrefixExpr = PREFIX_EXPR;
    InoutExpr = INOUT_EXPR;
    BinaryExpr = BINARY_EXPR;
    AssignExpr = ASSIGN_EXPR;
    TernaryExpr = TERNARY_EXPR;
    IsExpr = IS_EXPR;
    AsExpr = AS_EXPR;
    TryExpr = TRY_EXPR;
    AwaitExpr = AWAIT_EXPR;
    IfExpr = IF_EXPR;
    SwitchExpr = SWITCH_EXPR;

    IdentType = IDENT_TYPE;
    MemberType = MEMBER_TYPE;
    ArrayType = ARRAY_TYPE;
    DictionaryType = DICTIONARY_TYPE;
    TupleType = TUPLE_TYPE;
    FunctionType = FUNCTION_TYPE;
    OptionalType = OPTIONAL_TYPE;
    ImplicitlyUnwrappedOptionalType = IMPLICITLY_UNWRAPPED_OPTIONAL_TYPE;
    MetatypeType = METATYPE_TYPE;
    CompositionType = COMPOSITION_TYPE;
    SomeOrAnyType = SOME_OR_ANY_TYPE;
    AttributedType = ATTRIBUTED_TYPE;
}

ast_enum! {
    Decl {
        Func(FuncDecl),
        Init(InitDecl),
        Deinit(DeinitDecl),
        Var(VarDecl),
        Protocol(ProtocolDecl),
        Struct(StructDecl),
        Class(ClassDecl),
        Enum(EnumDecl),
        EnumCase(EnumCaseDecl),
        Extension(ExtensionDecl),
        AssociatedType(AssociatedTypeDecl),
        TypeAlias(TypeAliasDecl),
        Import(ImportDecl),
    }
}

ast_enum! {
    Stmt {
        Expr(ExprStmt),
        Return(ReturnStmt),
        Throw(ThrowStmt),
        Break(BreakStmt),
        Continue(ContinueStmt),
        Fallthrough(FallthroughStmt),
        Defer(DeferStmt),
        Do(DoStmt),
        If(IfStmt),
        Guard(GuardStmt),
        While(WhileStmt),
        Repeat(RepeatStmt),
        ForIn(ForInStmt),
        Switch(SwitchStmt),
    }
}

ast_enum! {
    /// Anything that may appear in a source file or a code block.
    Item {
        Decl(Decl),
        Stmt(Stmt),
    }
}

ast_enum! {
    Expr {
        Name(NameExpr),
        IntegerLiteral(IntegerLiteralExpr),
        FloatLiteral(FloatLiteralExpr),
        StringLiteral(StringLiteralExpr),
        BooleanLiteral(BooleanLiteralExpr),
        NilLiteral(NilLiteralExpr),
        Discard(DiscardExpr),
        Paren(ParenExpr),
        Tuple(TupleExpr),
        Array(ArrayExpr),
        Dictionary(DictionaryExpr),
        Closure(ClosureExpr),
        Call(CallExpr),
        Subscript(SubscriptExpr),
        MemberAccess(MemberAccessExpr),
        ImplicitMember(ImplicitMemberExpr),
        Specialize(SpecializeExpr),
        OptionalChaining(OptionalChainingExpr),
        ForceUnwrap(ForceUnwrapExpr),
        Postfix(PostfixExpr),
        Prefix(PrefixExpr),
        Inout(InoutExpr),
        Binary(BinaryExpr),
        Assign(AssignExpr),
        Ternary(TernaryExpr),
        Is(IsExpr),
        As(AsExpr),
        Try(TryExpr),
        Await(AwaitExpr),
        If(IfExpr),
        Switch(SwitchExpr),
        ValueBinding(ValueBindingPattern),
    }
}

ast_enum! {
    Type {
        Ident(IdentType),
        Member(MemberType),
        Array(ArrayType),
        Dictionary(DictionaryType),
        Tuple(TupleType),
        Function(FunctionType),
        Optional(OptionalType),
        ImplicitlyUnwrappedOptional(ImplicitlyUnwrappedOptionalType),
        Metatype(MetatypeType),
        Composition(CompositionType),
        SomeOrAny(SomeOrAnyType),
        Attributed(AttributedType),
    }
}

ast_enum! {
    Pattern {
        Ident(IdentPattern),
        Wildcard(WildcardPattern),
        Tuple(TuplePattern),
        ValueBinding(ValueBindingPattern),
    }
}

ast_enum! {
    GenericRequirement {
        Conformance(ConformanceRequirement),
        SameType(SameTypeRequirement),
    }
}

impl SourceFile {
    pub fn items(&self) -> impl Iterator<Item = Item> + '_ {
        children(&self.0)
    }
}

impl CodeBlock {
    pub fn items(&self) -> impl Iterator<Item = Item> + '_ {
        children(&self.0)
    }
}

impl MemberBlock {
    pub fn members(&self) -> impl Iterator<Item = Decl> + '_ {
        children(&self.0)
    }
}

impl Attribute {
    pub fn name(&self) -> Option<SyntaxToken> {
        name_token(&self.0)
    }

    pub fn has_arguments(&self) -> bool {
        self.0.children().any(|node| node.kind() == ATTRIBUTE_ARGUMENTS)
    }
}

impl DeclModifier {
    pub fn token(&self) -> Option<SyntaxToken> {
        self.0.first_token()
    }
}

impl FuncDecl {
    pub fn attributes(&self) -> impl Iterator<Item = Attribute> + '_ {
        children(&self.0)
    }

    pub fn modifiers(&self) -> impl Iterator<Item = DeclModifier> + '_ {
        children(&self.0)
    }

    /// The function name: an identifier or, for operator functions, the
    /// operator token.
    pub fn name(&self) -> Option<SyntaxToken> {
        self.0.child_tokens().find(|token| token.kind() == NAME || token.kind().is_operator())
    }

    pub fn generic_params(&self) -> Option<GenericParamList> {
        child(&self.0)
    }

    pub fn params(&self) -> Option<ParamList> {
        child(&self.0)
    }

    pub fn effects(&self) -> Option<EffectSpecifiers> {
        child(&self.0)
    }

    pub fn return_clause(&self) -> Option<ReturnClause> {
        child(&self.0)
    }

    pub fn where_clause(&self) -> Option<WhereClause> {
        child(&self.0)
    }

    /// `None` for protocol requirements.
    pub fn body(&self) -> Option<CodeBlock> {
        child(&self.0)
    }
}

impl InitDecl {
    pub fn params(&self) -> Option<ParamList> {
        child(&self.0)
    }

    pub fn is_failable(&self) -> bool {
        self.0.child_tokens().any(|token| {
            token.kind() == POSTFIX_QUESTION
                || (token.kind() == POSTFIX_OPERATOR && token.text_trimmed() == "!")
        })
    }

    pub fn body(&self) -> Option<CodeBlock> {
        child(&self.0)
    }
}

impl DeinitDecl {
    pub fn body(&self) -> Option<CodeBlock> {
        child(&self.0)
    }
}

impl VarDecl {
    pub fn is_let(&self) -> bool {
        token(&self.0, LET_KW).is_some()
    }

    pub fn bindings(&self) -> impl Iterator<Item = PatternBinding> + '_ {
        children(&self.0)
    }
}

impl PatternBinding {
    pub fn pattern(&self) -> Option<Pattern> {
        child(&self.0)
    }

    pub fn ty(&self) -> Option<Type> {
        child::<TypeAnnotation>(&self.0)?.ty()
    }

    pub fn initializer(&self) -> Option<Expr> {
        child::<InitializerClause>(&self.0)?.value()
    }

    pub fn accessors(&self) -> Option<AccessorBlock> {
        child(&self.0)
    }
}

impl TypeAnnotation {
    pub fn ty(&self) -> Option<Type> {
        child(&self.0)
    }
}

impl InitializerClause {
    pub fn value(&self) -> Option<Expr> {
        child(&self.0)
    }
}

impl AccessorBlock {
    /// Names of the explicit accessors (`get`, `set`, ...); empty for a
    /// shorthand getter.
    pub fn accessor_names(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        self.0.children().filter(|node| node.kind() == ACCESSOR_DECL).filter_map(|node| {
            node.child_tokens().find(|token| token.kind() == NAME)
        })
    }
}

impl ProtocolDecl {
    pub fn name(&self) -> Option<SyntaxToken> {
        name_token(&self.0)
    }

    pub fn primary_associated_types(&self) -> Option<PrimaryAssociatedTypeList> {
        child(&self.0)
    }

    pub fn inheritance(&self) -> Option<InheritanceClause> {
        child(&self.0)
    }

    pub fn where_clause(&self) -> Option<WhereClause> {
        child(&self.0)
    }

    pub fn members(&self) -> Option<MemberBlock> {
        child(&self.0)
    }
}

impl PrimaryAssociatedTypeList {
    pub fn names(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        self.0
            .children()
            .filter(|node| node.kind() == PRIMARY_ASSOCIATED_TYPE)
            .filter_map(|node| node.first_token())
    }
}

macro_rules! nominal_accessors {
    ($($name:ident),*) => {$(
        impl $name {
            pub fn name(&self) -> Option<SyntaxToken> {
                name_token(&self.0)
            }

            pub fn generic_params(&self) -> Option<GenericParamList> {
                child(&self.0)
            }

            pub fn inheritance(&self) -> Option<InheritanceClause> {
                child(&self.0)
            }

            pub fn where_clause(&self) -> Option<WhereClause> {
                child(&self.0)
            }

            pub fn members(&self) -> Option<MemberBlock> {
                child(&self.0)
            }
        }
    )*};
}

nominal_accessors!(StructDecl, ClassDecl, EnumDecl);

impl EnumCaseDecl {
    pub fn elements(&self) -> impl Iterator<Item = EnumCaseElement> + '_ {
        children(&self.0)
    }
}

impl EnumCaseElement {
    pub fn name(&self) -> Option<SyntaxToken> {
        name_token(&self.0)
    }

    pub fn associated_values(&self) -> Option<TupleType> {
        child(&self.0)
    }

    pub fn raw_value(&self) -> Option<Expr> {
        child::<InitializerClause>(&self.0)?.value()
    }
}

impl ExtensionDecl {
    pub fn extended_type(&self) -> Option<Type> {
        child(&self.0)
    }

    pub fn inheritance(&self) -> Option<InheritanceClause> {
        child(&self.0)
    }

    pub fn where_clause(&self) -> Option<WhereClause> {
        child(&self.0)
    }

    pub fn members(&self) -> Option<MemberBlock> {
        child(&self.0)
    }
}

impl AssociatedTypeDecl {
    pub fn name(&self) -> Option<SyntaxToken> {
        name_token(&self.0)
    }

    pub fn inheritance(&self) -> Option<InheritanceClause> {
        child(&self.0)
    }

    pub fn default_type(&self) -> Option<Type> {
        child::<TypeInitializer>(&self.0)?.ty()
    }

    pub fn where_clause(&self) -> Option<WhereClause> {
        child(&self.0)
    }
}

impl TypeAliasDecl {
    pub fn name(&self) -> Option<SyntaxToken> {
        name_token(&self.0)
    }

    pub fn generic_params(&self) -> Option<GenericParamList> {
        child(&self.0)
    }

    pub fn aliased_type(&self) -> Option<Type> {
        child::<TypeInitializer>(&self.0)?.ty()
    }

    pub fn where_clause(&self) -> Option<WhereClause> {
        child(&self.0)
    }
}

impl TypeInitializer {
    pub fn ty(&self) -> Option<Type> {
        child(&self.0)
    }
}

impl ImportDecl {
    /// The dotted module path, e.g. `["Foundation", "NSString"]`.
    pub fn path(&self) -> Vec<SyntaxToken> {
        self.0
            .children()
            .find(|node| node.kind() == IMPORT_PATH)
            .map(|path| path.child_tokens().filter(|token| token.kind() == NAME).collect())
            .unwrap_or_default()
    }
}

impl ParamList {
    pub fn params(&self) -> impl Iterator<Item = Param> + '_ {
        children(&self.0)
    }
}

impl Param {
    fn names(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        self.0
            .child_tokens()
            .take_while(|token| token.kind() != COLON)
            .filter(|token| matches!(token.kind(), NAME | UNDERSCORE))
    }

    /// The argument label: the first name, which is also the binding name
    /// when only one is written.
    pub fn label(&self) -> Option<SyntaxToken> {
        self.names().next()
    }

    pub fn binding_name(&self) -> Option<SyntaxToken> {
        self.names().last()
    }

    pub fn ty(&self) -> Option<Type> {
        child(&self.0)
    }

    pub fn is_variadic(&self) -> bool {
        token(&self.0, ELLIPSIS).is_some()
    }

    pub fn default_value(&self) -> Option<Expr> {
        child::<InitializerClause>(&self.0)?.value()
    }
}

impl EffectSpecifiers {
    pub fn is_async(&self) -> bool {
        token(&self.0, ASYNC_KW).is_some()
    }

    pub fn is_throwing(&self) -> bool {
        token(&self.0, THROWS_KW).is_some() || token(&self.0, RETHROWS_KW).is_some()
    }
}

impl ReturnClause {
    pub fn ty(&self) -> Option<Type> {
        child(&self.0)
    }
}

impl GenericParamList {
    pub fn params(&self) -> impl Iterator<Item = GenericParam> + '_ {
        children(&self.0)
    }
}

impl GenericParam {
    pub fn name(&self) -> Option<SyntaxToken> {
        name_token(&self.0)
    }

    /// Inline constraint, as in `<T: Equatable>`.
    pub fn constraint(&self) -> Option<Type> {
        child(&self.0)
    }
}

impl GenericArgList {
    pub fn args(&self) -> impl Iterator<Item = Type> + '_ {
        children(&self.0)
    }
}

impl InheritanceClause {
    pub fn types(&self) -> impl Iterator<Item = Type> + '_ {
        children::<InheritedType>(&self.0).filter_map(|inherited| child(&inherited.0))
    }
}

impl WhereClause {
    pub fn requirements(&self) -> impl Iterator<Item = GenericRequirement> + '_ {
        children(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// `T: P`
    Conformance,
    /// `T == U`
    SameType,
}

impl GenericRequirement {
    pub fn subject(&self) -> Option<Type> {
        children(self.syntax()).next()
    }

    pub fn relation(&self) -> Relation {
        match self {
            GenericRequirement::Conformance(_) => Relation::Conformance,
            GenericRequirement::SameType(_) => Relation::SameType,
        }
    }

    pub fn constraint(&self) -> Option<Type> {
        children(self.syntax()).nth(1)
    }
}

impl IdentPattern {
    pub fn name(&self) -> Option<SyntaxToken> {
        self.0.first_token()
    }
}

impl TuplePattern {
    pub fn elements(&self) -> impl Iterator<Item = Pattern> + '_ {
        children(&self.0)
    }
}

impl ValueBindingPattern {
    pub fn is_let(&self) -> bool {
        token(&self.0, LET_KW).is_some()
    }

    pub fn pattern(&self) -> Option<Pattern> {
        child(&self.0)
    }
}

impl ExprStmt {
    pub fn expr(&self) -> Option<Expr> {
        child(&self.0)
    }
}

impl ReturnStmt {
    pub fn value(&self) -> Option<Expr> {
        child(&self.0)
    }
}

impl ThrowStmt {
    pub fn value(&self) -> Option<Expr> {
        child(&self.0)
    }
}

impl DeferStmt {
    pub fn body(&self) -> Option<CodeBlock> {
        child(&self.0)
    }
}

impl DoStmt {
    pub fn body(&self) -> Option<CodeBlock> {
        child(&self.0)
    }

    pub fn catch_clauses(&self) -> impl Iterator<Item = CatchClause> + '_ {
        children(&self.0)
    }
}

impl CatchClause {
    pub fn body(&self) -> Option<CodeBlock> {
        child(&self.0)
    }
}

/// Shared shape of `if` statements and `if` expressions.
macro_rules! if_accessors {
    ($($name:ident),*) => {$(
        impl $name {
            pub fn conditions(&self) -> Option<ConditionList> {
                child(&self.0)
            }

            pub fn then_branch(&self) -> Option<CodeBlock> {
                child(&self.0)
            }

            /// The `else` branch: a block, or a nested `if` of the same kind.
            pub fn else_branch(&self) -> Option<ElseBranch> {
                token(&self.0, ELSE_KW)?;
                self.0.children().skip_while(|node| node.kind() != CODE_BLOCK).nth(1).and_then(
                    |node| match node.kind() {
                        CODE_BLOCK => Some(ElseBranch::Block(CodeBlock(node))),
                        IF_STMT | IF_EXPR => Some(ElseBranch::If(node)),
                        _ => None,
                    },
                )
            }
        }
    )*};
}

if_accessors!(IfStmt, IfExpr);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElseBranch {
    Block(CodeBlock),
    If(SyntaxNode),
}

impl GuardStmt {
    pub fn conditions(&self) -> Option<ConditionList> {
        child(&self.0)
    }

    pub fn else_body(&self) -> Option<CodeBlock> {
        child(&self.0)
    }
}

impl WhileStmt {
    pub fn conditions(&self) -> Option<ConditionList> {
        child(&self.0)
    }

    pub fn body(&self) -> Option<CodeBlock> {
        child(&self.0)
    }
}

impl RepeatStmt {
    pub fn body(&self) -> Option<CodeBlock> {
        child(&self.0)
    }

    pub fn condition(&self) -> Option<Expr> {
        child(&self.0)
    }
}

impl ForInStmt {
    pub fn pattern(&self) -> Option<Pattern> {
        child(&self.0)
    }

    pub fn sequence(&self) -> Option<Expr> {
        child(&self.0)
    }

    pub fn body(&self) -> Option<CodeBlock> {
        child(&self.0)
    }
}

impl ConditionList {
    pub fn conditions(&self) -> impl Iterator<Item = Condition> + '_ {
        self.0.children().filter_map(|node| {
            if let Some(binding) = OptionalBindingCondition::cast(node.clone()) {
                return Some(Condition::Binding(binding));
            }
            Expr::cast(node).map(Condition::Expr)
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Condition {
    Expr(Expr),
    Binding(OptionalBindingCondition),
}

impl OptionalBindingCondition {
    pub fn pattern(&self) -> Option<Pattern> {
        child(&self.0)
    }

    pub fn initializer(&self) -> Option<Expr> {
        child::<InitializerClause>(&self.0)?.value()
    }
}

macro_rules! switch_accessors {
    ($($name:ident),*) => {$(
        impl $name {
            pub fn subject(&self) -> Option<Expr> {
                child(&self.0)
            }

            pub fn cases(&self) -> impl Iterator<Item = SwitchCase> + '_ {
                children(&self.0)
            }
        }
    )*};
}

switch_accessors!(SwitchStmt, SwitchExpr);

impl SwitchCase {
    pub fn is_default(&self) -> bool {
        self.0.children().any(|node| node.kind() == SWITCH_DEFAULT_LABEL)
    }

    pub fn items(&self) -> impl Iterator<Item = Item> + '_ {
        children(&self.0)
    }
}

impl NameExpr {
    pub fn name(&self) -> Option<SyntaxToken> {
        self.0.first_token()
    }
}

impl ParenExpr {
    pub fn expr(&self) -> Option<Expr> {
        child(&self.0)
    }
}

impl TupleExpr {
    pub fn elements(&self) -> impl Iterator<Item = TupleElement> + '_ {
        children(&self.0)
    }
}

impl TupleElement {
    pub fn label(&self) -> Option<SyntaxToken> {
        name_token(&self.0)
    }

    pub fn expr(&self) -> Option<Expr> {
        child(&self.0)
    }
}

impl ArrayExpr {
    pub fn elements(&self) -> impl Iterator<Item = Expr> + '_ {
        children(&self.0)
    }
}

impl ClosureExpr {
    pub fn signature(&self) -> Option<ClosureSignature> {
        child(&self.0)
    }

    pub fn items(&self) -> impl Iterator<Item = Item> + '_ {
        children(&self.0)
    }
}

impl CallExpr {
    pub fn callee(&self) -> Option<Expr> {
        child(&self.0)
    }

    /// Arguments inside the parentheses; empty when the call is written
    /// with trailing closures only.
    pub fn args(&self) -> impl Iterator<Item = Arg> + '_ {
        child::<ArgList>(&self.0).into_iter().flat_map(|list| list.args().collect::<Vec<_>>())
    }

    /// The unlabeled trailing closure followed by the labeled ones.
    pub fn trailing_closures(&self) -> impl Iterator<Item = ClosureExpr> + '_ {
        self.0.children().skip(1).filter_map(|node| match node.kind() {
            CLOSURE_EXPR => ClosureExpr::cast(node),
            LABELED_TRAILING_CLOSURE => child(&node),
            _ => None,
        })
    }
}

impl ArgList {
    pub fn args(&self) -> impl Iterator<Item = Arg> + '_ {
        children(&self.0)
    }
}

impl Arg {
    pub fn label(&self) -> Option<SyntaxToken> {
        let mut tokens = self.0.child_tokens();
        let first = tokens.next()?;
        tokens.any(|token| token.kind() == COLON).then_some(first)
    }

    pub fn expr(&self) -> Option<Expr> {
        child(&self.0)
    }
}

impl LabeledTrailingClosure {
    pub fn label(&self) -> Option<SyntaxToken> {
        name_token(&self.0)
    }

    pub fn closure(&self) -> Option<ClosureExpr> {
        child(&self.0)
    }
}

impl SubscriptExpr {
    pub fn base(&self) -> Option<Expr> {
        child(&self.0)
    }

    pub fn args(&self) -> impl Iterator<Item = Arg> + '_ {
        children(&self.0)
    }
}

impl MemberAccessExpr {
    pub fn base(&self) -> Option<Expr> {
        child(&self.0)
    }

    pub fn member(&self) -> Option<SyntaxToken> {
        self.0.child_tokens().skip_while(|token| token.kind() != DOT).nth(1)
    }
}

impl ImplicitMemberExpr {
    pub fn member(&self) -> Option<SyntaxToken> {
        name_token(&self.0)
    }
}

impl SpecializeExpr {
    pub fn base(&self) -> Option<Expr> {
        child(&self.0)
    }

    pub fn generic_args(&self) -> Option<GenericArgList> {
        child(&self.0)
    }
}

impl BinaryExpr {
    pub fn lhs(&self) -> Option<Expr> {
        children(&self.0).next()
    }

    pub fn op(&self) -> Option<SyntaxToken> {
        token(&self.0, BINARY_OPERATOR)
    }

    pub fn rhs(&self) -> Option<Expr> {
        children(&self.0).nth(1)
    }
}

impl AssignExpr {
    pub fn target(&self) -> Option<Expr> {
        children(&self.0).next()
    }

    pub fn value(&self) -> Option<Expr> {
        children(&self.0).nth(1)
    }
}

impl PrefixExpr {
    pub fn op(&self) -> Option<SyntaxToken> {
        token(&self.0, PREFIX_OPERATOR)
    }

    pub fn expr(&self) -> Option<Expr> {
        child(&self.0)
    }
}

impl TernaryExpr {
    pub fn condition(&self) -> Option<Expr> {
        children(&self.0).next()
    }

    pub fn then_expr(&self) -> Option<Expr> {
        children(&self.0).nth(1)
    }

    pub fn else_expr(&self) -> Option<Expr> {
        children(&self.0).nth(2)
    }
}

impl AsExpr {
    pub fn expr(&self) -> Option<Expr> {
        child(&self.0)
    }

    pub fn ty(&self) -> Option<Type> {
        child(&self.0)
    }
}

impl IsExpr {
    pub fn expr(&self) -> Option<Expr> {
        child(&self.0)
    }

    pub fn ty(&self) -> Option<Type> {
        child(&self.0)
    }
}

impl TryExpr {
    pub fn expr(&self) -> Option<Expr> {
        child(&self.0)
    }
}

impl AwaitExpr {
    pub fn expr(&self) -> Option<Expr> {
        child(&self.0)
    }
}

impl IdentType {
    pub fn name(&self) -> Option<SyntaxToken> {
        self.0.first_token()
    }

    pub fn generic_args(&self) -> Option<GenericArgList> {
        child(&self.0)
    }
}

impl MemberType {
    pub fn base(&self) -> Option<Type> {
        child(&self.0)
    }

    pub fn name(&self) -> Option<SyntaxToken> {
        name_token(&self.0)
    }
}

impl FunctionType {
    pub fn params(&self) -> Option<TupleType> {
        child(&self.0)
    }

    pub fn effects(&self) -> Option<EffectSpecifiers> {
        child(&self.0)
    }

    pub fn result(&self) -> Option<Type> {
        children(&self.0).nth(1)
    }
}

impl OptionalType {
    pub fn wrapped(&self) -> Option<Type> {
        child(&self.0)
    }
}

impl CompositionType {
    pub fn types(&self) -> impl Iterator<Item = Type> + '_ {
        children(&self.0)
    }
}

impl AttributedType {
    pub fn attributes(&self) -> impl Iterator<Item = Attribute> + '_ {
        children(&self.0)
    }

    /// Specifier keywords such as `inout` or `_const`.
    pub fn specifiers(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        self.0.child_tokens()
    }

    pub fn ty(&self) -> Option<Type> {
        child(&self.0)
    }
}

impl Item {
    pub fn as_decl(&self) -> Option<&Decl> {
        match self {
            Item::Decl(decl) => Some(decl),
            Item::Stmt(_) => None,
        }
    }
}
