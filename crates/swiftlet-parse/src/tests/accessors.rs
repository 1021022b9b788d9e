use std::fs;
use std::path::Path;

use swiftlet_yellow::ast::{self, Node as _};
use swiftlet_yellow::{SyntaxKind, SyntaxToken};

use crate::parse;

fn fixture(name: &str) -> ast::SourceFile {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data").join(name);
    let text = fs::read_to_string(&path).unwrap();
    parse(&text).tree().unwrap()
}

fn source(text: &str) -> ast::SourceFile {
    let parse = parse(text);
    assert!(parse.errors().is_empty(), "{:?}", parse.errors());
    parse.tree().unwrap()
}

fn decls(file: &ast::SourceFile) -> Vec<ast::Decl> {
    file.items().filter_map(|item| item.as_decl().cloned()).collect()
}

fn stmts(items: impl Iterator<Item = ast::Item>) -> Vec<ast::Stmt> {
    items
        .filter_map(|item| match item {
            ast::Item::Stmt(stmt) => Some(stmt),
            ast::Item::Decl(_) => None,
        })
        .collect()
}

fn text(token: Option<SyntaxToken>) -> String {
    token.unwrap().text_trimmed().to_owned()
}

fn ident(ty: Option<ast::Type>) -> String {
    match ty {
        Some(ast::Type::Ident(ty)) => text(ty.name()),
        other => panic!("expected an identifier type, found {other:?}"),
    }
}

fn name_expr(expr: Option<ast::Expr>) -> String {
    match expr {
        Some(ast::Expr::Name(expr)) => text(expr.name()),
        other => panic!("expected a name, found {other:?}"),
    }
}

/// The initializer of the first binding of a `let`/`var` item.
fn initializer(item: Option<ast::Item>) -> ast::Expr {
    let Some(ast::Item::Decl(ast::Decl::Var(var))) = item else {
        panic!("expected a variable declaration, found {item:?}");
    };
    var.bindings().next().unwrap().initializer().unwrap()
}

#[test]
fn struct_header() {
    let file = fixture("verify_parse.swift");
    let ast::Decl::Struct(decl) = &decls(&file)[14] else {
        panic!("expected `Struct`");
    };
    assert_eq!(text(decl.name()), "Struct");

    let params = decl.generic_params().unwrap().params().collect::<Vec<_>>();
    let params = params
        .iter()
        .map(|param| (text(param.name()), ident(param.constraint())))
        .collect::<Vec<_>>();
    assert_eq!(params, [("T1".into(), "Proto1".into()), ("T2".into(), "Proto2".into())]);

    let inherited = decl.inheritance().unwrap().types().collect::<Vec<_>>();
    assert_eq!(inherited.len(), 3);
    assert_eq!(ident(Some(inherited[0].clone())), "Proto1");
    assert_eq!(ident(Some(inherited[1].clone())), "Proto2");
    let ast::Type::Attributed(unchecked) = &inherited[2] else {
        panic!("expected `@unchecked Sendable`, found {:?}", inherited[2]);
    };
    let attributes = unchecked.attributes().collect::<Vec<_>>();
    assert_eq!(attributes.len(), 1);
    assert_eq!(text(attributes[0].name()), "unchecked");
    assert!(!attributes[0].has_arguments());
    assert_eq!(unchecked.specifiers().count(), 0);
    assert_eq!(ident(unchecked.ty()), "Sendable");

    let requirements = decl.where_clause().unwrap().requirements().collect::<Vec<_>>();
    assert_eq!(requirements.len(), 2);
    assert_eq!(requirements[0].relation(), ast::Relation::Conformance);
    assert_eq!(ident(requirements[0].subject()), "T1");
    assert_eq!(ident(requirements[0].constraint()), "Proto3");
    assert_eq!(requirements[1].relation(), ast::Relation::SameType);
    let Some(ast::Type::Member(member)) = requirements[1].subject() else {
        panic!("expected `T1.A`");
    };
    assert_eq!(ident(member.base()), "T1");
    assert_eq!(text(member.name()), "A");
    assert_eq!(ident(requirements[1].constraint()), "Int");

    let members = decl.members().unwrap().members().collect::<Vec<_>>();
    let [ast::Decl::Func(method)] = members.as_slice() else {
        panic!("expected a single method, found {members:?}");
    };
    assert_eq!(text(method.name()), "method");
    assert_eq!(method.modifiers().count(), 0);
    let param = method.params().unwrap().params().next().unwrap();
    assert_eq!(text(param.label()), "_");
    assert_eq!(text(param.binding_name()), "b");
    assert_eq!(ident(param.ty()), "Bool");
    assert!(method.body().is_some());
}

#[test]
fn protocol_with_associated_types() {
    let file = fixture("verify_parse.swift");
    let ast::Decl::Protocol(proto) = &decls(&file)[12] else {
        panic!("expected `Proto3`");
    };
    assert_eq!(text(proto.name()), "Proto3");

    let primary = proto.primary_associated_types().unwrap();
    assert_eq!(primary.names().map(|name| name.text_trimmed().to_owned()).collect::<Vec<_>>(), [
        "A", "B"
    ]);
    assert_eq!(ident(proto.inheritance().unwrap().types().next()), "Proto1");

    let requirement = proto.where_clause().unwrap().requirements().next().unwrap();
    let Some(ast::Type::Ident(subject)) = requirement.subject() else {
        panic!("expected `Self`");
    };
    assert_eq!(subject.name().unwrap().kind(), SyntaxKind::CAPITAL_SELF_KW);
    assert_eq!(ident(requirement.constraint()), "Proto2");

    let members = proto.members().unwrap().members().collect::<Vec<_>>();
    let [ast::Decl::AssociatedType(a), ast::Decl::AssociatedType(b), ast::Decl::Func(method)] =
        members.as_slice()
    else {
        panic!("unexpected members {members:?}");
    };

    assert_eq!(text(a.name()), "A");
    assert!(a.inheritance().is_none() && a.default_type().is_none());
    let requirement = a.where_clause().unwrap().requirements().next().unwrap();
    assert_eq!(ident(requirement.subject()), "B");
    assert_eq!(ident(requirement.constraint()), "Proto1");

    assert_eq!(text(b.name()), "B");
    assert_eq!(ident(b.inheritance().unwrap().types().next()), "Equatable");
    assert_eq!(ident(b.default_type()), "Int");
    assert!(b.where_clause().is_none());

    assert_eq!(text(method.name()), "method");
    assert!(method.body().is_none(), "protocol requirements have no body");
}

#[test]
fn typealias_and_class() {
    let file = fixture("verify_parse.swift");
    let decls = decls(&file);

    let ast::Decl::TypeAlias(alias) = &decls[13] else {
        panic!("expected `Alias`");
    };
    assert_eq!(text(alias.name()), "Alias");
    assert_eq!(alias.generic_params().unwrap().params().count(), 1);
    assert_eq!(ident(alias.aliased_type()), "String");
    assert_eq!(alias.where_clause().unwrap().requirements().count(), 1);

    let ast::Decl::Class(class) = &decls[15] else {
        panic!("expected `Class`");
    };
    assert_eq!(text(class.name()), "Class");
    assert_eq!(class.generic_params().unwrap().params().count(), 1);
    assert_eq!(ident(class.inheritance().unwrap().types().next()), "Proto1");
    assert_eq!(class.where_clause().unwrap().requirements().count(), 1);
    assert_eq!(class.members().unwrap().members().count(), 1);

    let ast::Decl::Func(test10) = &decls[9] else {
        panic!("expected `test10`");
    };
    let requirement = test10.where_clause().unwrap().requirements().next().unwrap();
    assert_eq!(ident(requirement.subject()), "T");
}

#[test]
fn function_bodies() {
    let file = fixture("verify_parse.swift");
    let decls = decls(&file);
    let ast::Decl::Func(test1) = &decls[0] else {
        panic!("expected `test1`");
    };

    let params = test1.params().unwrap().params().collect::<Vec<_>>();
    assert_eq!(text(params[0].label()), "y");
    assert_eq!(text(params[0].binding_name()), "x");
    assert_eq!(text(params[1].label()), "fn");
    assert_eq!(text(params[1].binding_name()), "fn");
    let Some(ast::Type::Function(fn_type)) = params[1].ty() else {
        panic!("expected `(Int) -> Int`");
    };
    assert!(fn_type.params().is_some() && fn_type.effects().is_none());
    assert_eq!(ident(fn_type.result()), "Int");
    assert_eq!(ident(test1.return_clause().unwrap().ty()), "Int");

    let body = test1.body().unwrap();
    let mut items = body.items();
    let Some(ast::Item::Decl(ast::Decl::Var(xx))) = items.next() else {
        panic!("expected `let xx`");
    };
    assert!(xx.is_let());
    let binding = xx.bindings().next().unwrap();
    let Some(ast::Pattern::Ident(pattern)) = binding.pattern() else {
        panic!("expected an identifier pattern");
    };
    assert_eq!(text(pattern.name()), "xx");
    assert!(binding.ty().is_none() && binding.accessors().is_none());
    let Some(ast::Expr::Call(call)) = binding.initializer() else {
        panic!("expected `fn(42)`");
    };
    assert_eq!(name_expr(call.callee()), "fn");
    let args = call.args().collect::<Vec<_>>();
    assert_eq!(args.len(), 1);
    assert!(args[0].label().is_none());
    assert!(matches!(args[0].expr(), Some(ast::Expr::IntegerLiteral(_))));
    assert_eq!(call.trailing_closures().count(), 0);

    let ast::Expr::Array(array) = initializer(items.next()) else {
        panic!("expected `[0]`");
    };
    assert_eq!(array.elements().count(), 1);

    let ast::Expr::Tuple(tuple) = initializer(items.next()) else {
        panic!("expected `(0, 1)`");
    };
    let elements = tuple.elements().collect::<Vec<_>>();
    assert_eq!(elements.len(), 2);
    assert!(elements.iter().all(|element| element.label().is_none()));
    assert!(matches!(elements[1].expr(), Some(ast::Expr::IntegerLiteral(_))));

    let Some(ast::Item::Stmt(ast::Stmt::Return(ret))) = items.next() else {
        panic!("expected `return fn(x)`");
    };
    assert!(matches!(ret.value(), Some(ast::Expr::Call(_))));

    let ast::Decl::Func(test3) = &decls[2] else {
        panic!("expected `test3`");
    };
    let params = test3.params().unwrap().params().collect::<Vec<_>>();
    assert!(matches!(params[0].default_value(), Some(ast::Expr::IntegerLiteral(_))));
    assert!(matches!(params[1].default_value(), Some(ast::Expr::NilLiteral(_))));
    let Some(ast::Type::Optional(optional)) = params[1].ty() else {
        panic!("expected `Int?`");
    };
    assert_eq!(ident(optional.wrapped()), "Int");
    assert!(!params[1].is_variadic());

    for (index, specifier) in [(6, "inout"), (7, "_const")] {
        let ast::Decl::Func(func) = &decls[index] else {
            panic!("expected a function at {index}");
        };
        let Some(ast::Type::Attributed(ty)) = func.params().unwrap().params().next().unwrap().ty()
        else {
            panic!("expected an attributed parameter type");
        };
        let specifiers = ty.specifiers().map(|token| token.text_trimmed().to_owned());
        assert_eq!(specifiers.collect::<Vec<_>>(), [specifier]);
        assert_eq!(ty.attributes().count(), 0);
    }
}

#[test]
fn if_branches() {
    let file = fixture("verify_parse.swift");
    let decls = decls(&file);

    let ast::Decl::Func(test2) = &decls[1] else {
        panic!("expected `test2`");
    };
    let Some(ast::Item::Stmt(ast::Stmt::If(stmt))) = test2.body().unwrap().items().next() else {
        panic!("expected an if statement");
    };
    let conditions = stmt.conditions().unwrap().conditions().collect::<Vec<_>>();
    assert!(matches!(conditions.as_slice(), [ast::Condition::Expr(ast::Expr::Name(_))]));
    assert!(stmt.then_branch().is_some());
    assert!(matches!(stmt.else_branch(), Some(ast::ElseBranch::Block(_))));

    let ast::Decl::Func(test5) = &decls[4] else {
        panic!("expected `test5`");
    };
    let Some(ast::Item::Stmt(ast::Stmt::Return(ret))) = test5.body().unwrap().items().next()
    else {
        panic!("expected `return if ...`");
    };
    let Some(ast::Expr::If(expr)) = ret.value() else {
        panic!("expected an if expression");
    };
    assert_eq!(expr.conditions().unwrap().conditions().count(), 1);
    let then_branch = expr.then_branch().unwrap();
    assert!(matches!(stmts(then_branch.items()).as_slice(), [ast::Stmt::Expr(_)]));
    assert!(matches!(expr.else_branch(), Some(ast::ElseBranch::Block(_))));

    let file = source("let v = if a { 1 } else if b { 2 } else { 3 }\nif c { }");
    let mut items = file.items();
    let ast::Expr::If(chain) = initializer(items.next()) else {
        panic!("expected an if expression");
    };
    let Some(ast::ElseBranch::If(nested)) = chain.else_branch() else {
        panic!("expected `else if`");
    };
    let nested = ast::IfExpr::cast(nested).unwrap();
    assert!(matches!(nested.else_branch(), Some(ast::ElseBranch::Block(_))));

    let Some(ast::Item::Stmt(ast::Stmt::If(bare))) = items.next() else {
        panic!("expected an if statement");
    };
    assert!(bare.else_branch().is_none());
}

#[test]
fn calls_and_closures() {
    let file = fixture("closures.swift");
    let items = file.items().collect::<Vec<_>>();

    let ast::Expr::Call(sorted) = initializer(items.get(2).cloned()) else {
        panic!("expected `items.sorted {{ ... }}`");
    };
    let Some(ast::Expr::MemberAccess(callee)) = sorted.callee() else {
        panic!("expected a member access callee");
    };
    assert_eq!(name_expr(callee.base()), "items");
    assert_eq!(text(callee.member()), "sorted");
    let closures = sorted.trailing_closures().collect::<Vec<_>>();
    assert_eq!(closures.len(), 1);
    assert!(closures[0].signature().is_some());
    let Some(ast::Stmt::Expr(body)) = stmts(closures[0].items()).pop() else {
        panic!("expected a single expression body");
    };
    let Some(ast::Expr::Binary(comparison)) = body.expr() else {
        panic!("expected `a < b`");
    };
    assert_eq!(name_expr(comparison.lhs()), "a");
    assert_eq!(text(comparison.op()), "<");
    assert_eq!(name_expr(comparison.rhs()), "b");

    let Some(ast::Item::Stmt(ast::Stmt::Expr(stmt))) = items.get(4).cloned() else {
        panic!("expected `foo() {{ }} onFailure: {{ }}`");
    };
    let Some(ast::Expr::Call(call)) = stmt.expr() else {
        panic!("expected a call");
    };
    assert_eq!(name_expr(call.callee()), "foo");
    assert_eq!(call.args().count(), 0);
    assert_eq!(call.trailing_closures().count(), 2);
    let labeled = call
        .syntax()
        .children()
        .find_map(ast::LabeledTrailingClosure::cast)
        .unwrap();
    assert_eq!(text(labeled.label()), "onFailure");
    assert!(labeled.closure().unwrap().signature().is_none());

    let file = source("f(x, to: y)\nlet z = a[0, 1]");
    let mut items = file.items();
    let Some(ast::Item::Stmt(ast::Stmt::Expr(stmt))) = items.next() else {
        panic!("expected a call statement");
    };
    let Some(ast::Expr::Call(call)) = stmt.expr() else {
        panic!("expected a call");
    };
    let labels = call.args().map(|arg| arg.label().map(|label| label.text_trimmed().to_owned()));
    assert_eq!(labels.collect::<Vec<_>>(), [None, Some("to".to_owned())]);
    let ast::Expr::Subscript(subscript) = initializer(items.next()) else {
        panic!("expected a subscript");
    };
    assert_eq!(name_expr(subscript.base()), "a");
    assert_eq!(subscript.args().count(), 2);
}

#[test]
fn statements() {
    let file = fixture("statements.swift");
    let stmts = stmts(file.items());
    let [
        ast::Stmt::ForIn(for_in),
        ast::Stmt::While(while_stmt),
        ast::Stmt::Repeat(repeat),
        ast::Stmt::Guard(guard),
        ast::Stmt::Switch(switch),
        ast::Stmt::Do(do_stmt),
        ast::Stmt::Defer(defer),
    ] = stmts.as_slice()
    else {
        panic!("unexpected statements {stmts:?}");
    };

    assert!(matches!(for_in.pattern(), Some(ast::Pattern::Ident(_))));
    let Some(ast::Expr::Binary(range)) = for_in.sequence() else {
        panic!("expected `0..<n`");
    };
    assert_eq!(text(range.op()), "..<");
    assert!(for_in.body().is_some());

    assert_eq!(while_stmt.conditions().unwrap().conditions().count(), 1);
    assert!(while_stmt.body().is_some());

    assert!(repeat.body().is_some());
    assert!(matches!(repeat.condition(), Some(ast::Expr::Binary(_))));

    let conditions = guard.conditions().unwrap().conditions().collect::<Vec<_>>();
    let [ast::Condition::Binding(binding)] = conditions.as_slice() else {
        panic!("expected `let y = opt`");
    };
    assert!(matches!(binding.pattern(), Some(ast::Pattern::Ident(_))));
    assert_eq!(name_expr(binding.initializer()), "opt");
    assert!(guard.else_body().is_some());

    assert_eq!(name_expr(switch.subject()), "value");
    let cases = switch.cases().collect::<Vec<_>>();
    assert_eq!(cases.iter().map(|case| case.is_default()).collect::<Vec<_>>(), [
        false, false, true
    ]);
    assert!(matches!(
        self::stmts(cases[0].items()).as_slice(),
        [ast::Stmt::Break(_)]
    ));
    assert!(matches!(
        self::stmts(cases[1].items()).as_slice(),
        [ast::Stmt::Fallthrough(_)]
    ));

    assert!(do_stmt.body().is_some());
    let catches = do_stmt.catch_clauses().collect::<Vec<_>>();
    assert_eq!(catches.len(), 2);
    let Some(ast::Stmt::Throw(throw)) = self::stmts(catches[0].body().unwrap().items()).pop()
    else {
        panic!("expected `throw error`");
    };
    assert_eq!(name_expr(throw.value()), "error");
    let Some(ast::Expr::As(cast)) = catches[0].syntax().children().find_map(ast::Expr::cast)
    else {
        panic!("expected `let error as MyError`");
    };
    let Some(ast::Expr::ValueBinding(bound)) = cast.expr() else {
        panic!("expected a value binding");
    };
    assert!(bound.is_let());
    assert!(matches!(bound.pattern(), Some(ast::Pattern::Ident(_))));
    assert_eq!(ident(cast.ty()), "MyError");

    assert!(defer.body().is_some());

    let file = source("while true { continue }");
    let Some(ast::Item::Stmt(ast::Stmt::While(stmt))) = file.items().next() else {
        panic!("expected a while loop");
    };
    let body = self::stmts(stmt.body().unwrap().items());
    assert!(matches!(body.as_slice(), [ast::Stmt::Continue(_)]));
}

#[test]
fn type_declarations() {
    let file = fixture("decls.swift");
    let decls = decls(&file);

    let ast::Decl::Import(import) = &decls[0] else {
        panic!("expected an import");
    };
    let path = import.path().iter().map(|name| name.text_trimmed().to_owned()).collect::<Vec<_>>();
    assert_eq!(path, ["Foundation", "Data"]);

    let ast::Decl::Class(class) = &decls[1] else {
        panic!("expected `Box`");
    };
    let members = class.members().unwrap().members().collect::<Vec<_>>();
    let [
        ast::Decl::Var(value),
        ast::Decl::Var(shared),
        ast::Decl::Init(init),
        ast::Decl::Deinit(deinit),
    ] = members.as_slice()
    else {
        panic!("unexpected members {members:?}");
    };
    assert!(!value.is_let() && shared.is_let());
    let binding = value.bindings().next().unwrap();
    assert_eq!(ident(binding.ty()), "T");
    let observers = binding.accessors().unwrap().accessor_names().collect::<Vec<_>>();
    assert_eq!(observers.len(), 1);
    assert_eq!(observers[0].text_trimmed(), "didSet");
    assert!(init.is_failable());
    assert_eq!(init.params().unwrap().params().count(), 1);
    assert!(init.body().is_some());
    assert!(deinit.body().is_some());

    let ast::Decl::Enum(shape) = &decls[2] else {
        panic!("expected `Shape`");
    };
    assert_eq!(text(shape.name()), "Shape");
    assert!(shape.generic_params().is_none() && shape.inheritance().is_none());
    assert!(shape.where_clause().is_none());
    let cases = shape.members().unwrap().members().collect::<Vec<_>>();
    let [ast::Decl::EnumCase(first), ast::Decl::EnumCase(_)] = cases.as_slice() else {
        panic!("unexpected cases {cases:?}");
    };
    let elements = first.elements().collect::<Vec<_>>();
    assert_eq!(text(elements[0].name()), "circle");
    assert!(elements[0].associated_values().is_some());
    assert!(elements[1].raw_value().is_none());

    let ast::Decl::Extension(extension) = &decls[3] else {
        panic!("expected an extension");
    };
    assert_eq!(ident(extension.extended_type()), "Array");
    assert!(extension.inheritance().is_none());
    assert_eq!(extension.where_clause().unwrap().requirements().count(), 1);
    assert_eq!(extension.members().unwrap().members().count(), 0);

    let ast::Decl::Var(count) = &decls[4] else {
        panic!("expected `count`");
    };
    let accessors = count.bindings().next().unwrap().accessors().unwrap();
    let names = accessors.accessor_names().map(|name| name.text_trimmed().to_owned());
    assert_eq!(names.collect::<Vec<_>>(), ["get", "set"]);

    let file = source("enum E: Int { case a = 1 }");
    let Some(ast::Decl::Enum(raw)) = self::decls(&file).pop() else {
        panic!("expected an enum");
    };
    let Some(ast::Decl::EnumCase(case)) = raw.members().unwrap().members().next() else {
        panic!("expected a case");
    };
    let element = case.elements().next().unwrap();
    assert!(matches!(element.raw_value(), Some(ast::Expr::IntegerLiteral(_))));
}

#[test]
fn attributes_modifiers_and_variadics() {
    let file = source("@available(*, deprecated) public static func g(_ xs: Int...) {}");
    let Some(ast::Decl::Func(func)) = decls(&file).pop() else {
        panic!("expected a function");
    };
    let attributes = func.attributes().collect::<Vec<_>>();
    assert_eq!(text(attributes[0].name()), "available");
    assert!(attributes[0].has_arguments());
    let modifiers = func.modifiers().map(|modifier| modifier.token().unwrap().kind());
    assert_eq!(modifiers.collect::<Vec<_>>(), [SyntaxKind::NAME, SyntaxKind::STATIC_KW]);
    assert!(func.params().unwrap().params().next().unwrap().is_variadic());
    assert!(func.generic_params().is_none() && func.effects().is_none());
}

#[test]
fn operators() {
    let file = source(
        "x = a ? b : c\nlet n = -x\nlet f = try? g()\nlet h = await k()\nlet i = y is Int\nlet j = .some\nlet s = f<Int>\nlet u = (x)",
    );
    let mut items = file.items();

    let Some(ast::Item::Stmt(ast::Stmt::Expr(stmt))) = items.next() else {
        panic!("expected an assignment");
    };
    let Some(ast::Expr::Assign(assign)) = stmt.expr() else {
        panic!("expected an assignment");
    };
    assert_eq!(name_expr(assign.target()), "x");
    let Some(ast::Expr::Ternary(ternary)) = assign.value() else {
        panic!("expected a ternary");
    };
    assert_eq!(name_expr(ternary.condition()), "a");
    assert_eq!(name_expr(ternary.then_expr()), "b");
    assert_eq!(name_expr(ternary.else_expr()), "c");

    let ast::Expr::Prefix(negation) = initializer(items.next()) else {
        panic!("expected a prefix expression");
    };
    assert_eq!(text(negation.op()), "-");
    assert_eq!(name_expr(negation.expr()), "x");

    let ast::Expr::Try(attempt) = initializer(items.next()) else {
        panic!("expected `try?`");
    };
    assert!(matches!(attempt.expr(), Some(ast::Expr::Call(_))));

    let ast::Expr::Await(awaited) = initializer(items.next()) else {
        panic!("expected `await`");
    };
    assert!(matches!(awaited.expr(), Some(ast::Expr::Call(_))));

    let ast::Expr::Is(check) = initializer(items.next()) else {
        panic!("expected `is`");
    };
    assert_eq!(name_expr(check.expr()), "y");
    assert_eq!(ident(check.ty()), "Int");

    let ast::Expr::ImplicitMember(member) = initializer(items.next()) else {
        panic!("expected `.some`");
    };
    assert_eq!(text(member.member()), "some");

    let ast::Expr::Specialize(specialized) = initializer(items.next()) else {
        panic!("expected `f<Int>`");
    };
    assert_eq!(name_expr(specialized.base()), "f");
    assert_eq!(ident(specialized.generic_args().unwrap().args().next()), "Int");

    let ast::Expr::Paren(paren) = initializer(items.next()) else {
        panic!("expected `(x)`");
    };
    assert_eq!(name_expr(paren.expr()), "x");
}

#[test]
fn types_and_patterns() {
    let file = source(
        "let t: (Int) async throws -> [String: Int] = g\nlet p: any P & Q = v\nlet (a, _) = pair\nlet w: Array<Int> = []",
    );
    let decls = decls(&file);

    let ast::Decl::Var(t) = &decls[0] else {
        panic!("expected `t`");
    };
    let Some(ast::Type::Function(function)) = t.bindings().next().unwrap().ty() else {
        panic!("expected a function type");
    };
    let effects = function.effects().unwrap();
    assert!(effects.is_async() && effects.is_throwing());
    assert!(matches!(function.result(), Some(ast::Type::Dictionary(_))));

    let ast::Decl::Var(p) = &decls[1] else {
        panic!("expected `p`");
    };
    let Some(ast::Type::SomeOrAny(existential)) = p.bindings().next().unwrap().ty() else {
        panic!("expected `any P & Q`");
    };
    let Some(ast::Type::Composition(composition)) =
        existential.syntax().children().find_map(ast::Type::cast)
    else {
        panic!("expected a composition");
    };
    assert_eq!(composition.types().count(), 2);

    let ast::Decl::Var(pair) = &decls[2] else {
        panic!("expected a tuple binding");
    };
    let Some(ast::Pattern::Tuple(tuple)) = pair.bindings().next().unwrap().pattern() else {
        panic!("expected a tuple pattern");
    };
    let elements = tuple.elements().collect::<Vec<_>>();
    assert!(matches!(elements.as_slice(), [ast::Pattern::Ident(_), ast::Pattern::Wildcard(_)]));

    let ast::Decl::Var(w) = &decls[3] else {
        panic!("expected `w`");
    };
    let Some(ast::Type::Ident(array)) = w.bindings().next().unwrap().ty() else {
        panic!("expected `Array<Int>`");
    };
    assert_eq!(ident(array.generic_args().unwrap().args().next()), "Int");
}
