use crate::{bind, resolve, BindResult};
use nanots_common::{DiagnosticSink, Meaning};
use nanots_parser::{parse, Ast, NodeKind};

fn bind_source(source: &str) -> (Ast, BindResult) {
    let mut diagnostics = DiagnosticSink::new();
    let ast = parse(source, &mut diagnostics);
    let result = bind(&ast, &mut diagnostics);
    assert!(diagnostics.is_empty(), "unexpected parse diagnostics: {:?}", diagnostics.errors().collect::<Vec<_>>());
    (ast, result)
}

#[test]
fn resolves_a_module_level_var() {
    let (ast, result) = bind_source("var x: number = 1;");
    let module = ast.root;
    assert!(resolve(&ast, &result, module, "x", Meaning::Value).is_some());
    assert!(resolve(&ast, &result, module, "x", Meaning::Type).is_none());
}

#[test]
fn type_alias_is_visible_only_in_type_meaning() {
    let (ast, result) = bind_source("type Id = number;");
    let module = ast.root;
    assert!(resolve(&ast, &result, module, "Id", Meaning::Type).is_some());
    assert!(resolve(&ast, &result, module, "Id", Meaning::Value).is_none());
}

#[test]
fn function_parameter_shadows_outer_var() {
    let (ast, result) = bind_source("var x: number = 1; var f = function (x: string) { return x; };");
    let module = ast.root;
    let outer = resolve(&ast, &result, module, "x", Meaning::Value).unwrap();

    let NodeKind::Module { statements } = ast.kind(module) else {
        unreachable!()
    };
    let NodeKind::Var { initializer, .. } = ast.kind(statements[1]) else {
        unreachable!()
    };
    let function_id = *initializer;
    let inner = resolve(&ast, &result, function_id, "x", Meaning::Value).unwrap();
    assert_ne!(outer, inner, "parameter must shadow the outer var");
}

#[test]
fn named_function_expression_can_resolve_its_own_name_inside_its_body() {
    let (ast, result) = bind_source("var f = function fact(n: number) { return fact(n); };");
    let NodeKind::Module { statements } = ast.kind(ast.root) else {
        unreachable!()
    };
    let NodeKind::Var { initializer, .. } = ast.kind(statements[0]) else {
        unreachable!()
    };
    let function_id = *initializer;
    assert!(resolve(&ast, &result, function_id, "fact", Meaning::Value).is_some());
    assert!(
        resolve(&ast, &result, ast.root, "fact", Meaning::Value).is_none(),
        "a named function expression's own name is not visible outside itself"
    );
}

#[test]
fn object_property_name_resolves_through_its_own_object() {
    let (ast, result) = bind_source("var o = { a: 1 };");
    let NodeKind::Module { statements } = ast.kind(ast.root) else {
        unreachable!()
    };
    let NodeKind::Var { initializer, .. } = ast.kind(statements[0]) else {
        unreachable!()
    };
    let object_id = *initializer;
    let NodeKind::Object { properties } = ast.kind(object_id) else {
        unreachable!()
    };
    let property_id = properties[0];
    assert!(resolve(&ast, &result, property_id, "a", Meaning::Value).is_some());
}

#[test]
fn redeclaring_a_value_in_the_same_scope_is_diagnosed() {
    let mut diagnostics = DiagnosticSink::new();
    let ast = parse("var x = 1; var x = 2;", &mut diagnostics);
    let _ = bind(&ast, &mut diagnostics);
    let messages: Vec<_> = diagnostics.errors().map(|d| d.message.as_str()).collect();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with("Cannot redeclare x; first declared at"));
}

#[test]
fn redeclaring_in_different_meanings_is_not_diagnosed() {
    let mut diagnostics = DiagnosticSink::new();
    let ast = parse("type Id = number; var Id = 1;", &mut diagnostics);
    let _ = bind(&ast, &mut diagnostics);
    assert!(diagnostics.is_empty());
}

#[test]
fn type_parameter_resolves_inside_its_own_signature() {
    let (ast, result) = bind_source("type Id = <T>(x: T) => T;");
    let NodeKind::Module { statements } = ast.kind(ast.root) else {
        unreachable!()
    };
    let NodeKind::TypeAlias { typename, .. } = ast.kind(statements[0]) else {
        unreachable!()
    };
    let signature_id = *typename;
    assert!(resolve(&ast, &result, signature_id, "T", Meaning::Type).is_some());
    assert!(resolve(&ast, &result, ast.root, "T", Meaning::Type).is_none());
}
