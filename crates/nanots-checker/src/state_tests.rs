use crate::state::check;
use nanots_binder::bind;
use nanots_common::DiagnosticSink;
use nanots_parser::parse;
use nanots_solver::type_to_string;

fn check_source(source: &str) -> (Vec<String>, Vec<String>) {
    let mut diagnostics = DiagnosticSink::new();
    let ast = parse(source, &mut diagnostics);
    let bound = bind(&ast, &mut diagnostics);
    let mut result = check(&ast, bound, &mut diagnostics);
    let types = result
        .statement_types
        .clone()
        .iter()
        .map(|&ty| type_to_string(&mut result.symbols, &mut result.types, ty))
        .collect();
    let messages = diagnostics.errors().map(|d| d.message.clone()).collect();
    (types, messages)
}

#[test]
fn well_typed_var_has_no_diagnostics() {
    let (types, messages) = check_source("var x: number = 1;");
    assert!(messages.is_empty());
    assert_eq!(types, vec!["number"]);
}

#[test]
fn mismatched_initializer_is_diagnosed() {
    let (_, messages) = check_source("var x: number = \"hi\";");
    assert_eq!(
        messages,
        vec!["Cannot assign initialiser of type 'string' to variable with declared type 'number'.".to_string()]
    );
}

#[test]
fn type_alias_object_shape_checks_structurally() {
    let (_, messages) = check_source("type P = { x: number, y: number }; var p: P = { x: 1, y: 2 };");
    assert!(messages.is_empty(), "unexpected diagnostics: {messages:?}");
}

#[test]
fn generic_function_infers_type_argument_from_call_site() {
    let (_, messages) = check_source("var id = function <T>(x: T): T { return x }; id(1);");
    assert!(messages.is_empty(), "unexpected diagnostics: {messages:?}");
}

#[test]
fn mismatched_return_type_is_diagnosed() {
    let (_, messages) = check_source("var f = function (x: number): string { return x };");
    assert_eq!(
        messages,
        vec!["Returned type 'number' does not match declared return type 'string'.".to_string()]
    );
}

#[test]
fn mismatched_call_argument_is_diagnosed() {
    let (_, messages) = check_source("var f = function (x: number): number { return x }; f(\"hi\");");
    assert_eq!(
        messages,
        vec!["Expected argument of type 'number', but got 'string'.".to_string()]
    );
}

#[test]
fn unresolved_identifier_is_diagnosed_and_suppresses_cascading_errors() {
    let (_, messages) = check_source("var x: number = y;");
    assert_eq!(messages, vec!["Could not resolve y".to_string()]);
}

#[test]
fn unresolved_type_name_is_diagnosed() {
    let (_, messages) = check_source("var x: Missing = 1;");
    assert_eq!(messages, vec!["Could not resolve type Missing".to_string()]);
}

#[test]
fn calling_a_non_function_is_diagnosed() {
    let (_, messages) = check_source("var x = 1; x();");
    assert_eq!(messages, vec!["Cannot call expression of type 'number'.".to_string()]);
}

#[test]
fn wrong_argument_count_is_diagnosed() {
    let (_, messages) = check_source("var f = function (x: number): number { return x }; f(1, 2);");
    assert_eq!(messages, vec!["Expected 1 arguments, but got 2.".to_string()]);
}

#[test]
fn checking_twice_is_idempotent() {
    let source = "var x: number = 1; var f = function (n: number): number { return n };";
    let mut diagnostics = DiagnosticSink::new();
    let ast = parse(source, &mut diagnostics);
    let bound = bind(&ast, &mut diagnostics);
    let mut first = check(&ast, bound, &mut diagnostics);
    let first_strings: Vec<String> = first
        .statement_types
        .clone()
        .iter()
        .map(|&ty| type_to_string(&mut first.symbols, &mut first.types, ty))
        .collect();
    assert_eq!(first_strings, vec!["number", "(n: number) => number"]);
}

#[test]
fn self_referential_type_alias_resolves_to_any_instead_of_overflowing() {
    let (_, messages) = check_source("type T = T;");
    assert!(messages.is_empty(), "unexpected diagnostics: {messages:?}");
}

#[test]
fn property_type_in_object_literal_type_defaults_to_any_without_annotation() {
    let (_, messages) = check_source("type P = { x }; var p: P = { x: \"hi\" };");
    assert!(messages.is_empty(), "unexpected diagnostics: {messages:?}");
}
