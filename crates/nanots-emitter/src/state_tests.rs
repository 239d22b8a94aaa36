use crate::{emit, strip};
use nanots_common::DiagnosticSink;
use nanots_parser::parse;

fn transform_source(source: &str) -> String {
    let mut diagnostics = DiagnosticSink::new();
    let ast = parse(source, &mut diagnostics);
    assert!(diagnostics.errors().next().is_none(), "source failed to parse: {source}");
    let stripped = strip(&ast, ast.module_statements());
    emit(&stripped)
}

#[test]
fn var_type_annotation_is_dropped() {
    assert_eq!(transform_source("var x: number = 1;"), "var x = 1");
}

#[test]
fn type_alias_statement_is_dropped() {
    assert_eq!(
        transform_source("type P = { x: number, y: number }; var p: P = { x: 1, y: 2 };"),
        "var p = { x: 1, y: 2 }"
    );
}

#[test]
fn function_signature_annotations_are_dropped_but_body_kept() {
    assert_eq!(
        transform_source("var f = function <T>(x: T): T { return x };"),
        "var f = function (x) {\n  return x\n}"
    );
}

#[test]
fn anonymous_function_has_no_name_after_parens() {
    assert_eq!(transform_source("function (x: number): number { return x };"), "function (x) {\n  return x\n}");
}

#[test]
fn call_arguments_pass_through_unchanged() {
    assert_eq!(transform_source("var f = function (x: number): number { return x }; f(1);"), "var f = function (x) {\n  return x\n};\nf(1)");
}

#[test]
fn empty_object_literal_emits_without_interior_space() {
    assert_eq!(transform_source("var o = {};"), "var o = {}");
}

#[test]
fn string_literal_round_trips_escapes() {
    assert_eq!(transform_source("var s = \"a\\nb\";"), "var s = \"a\\nb\"");
}

#[test]
fn stripped_output_reparses_with_no_diagnostics() {
    let source = "type P = { x: number }; var p: P = { x: 1 }; var f = function <T>(y: T): T { return y }; f(p);";
    let stripped = transform_source(source);
    let mut diagnostics = DiagnosticSink::new();
    parse(&stripped, &mut diagnostics);
    assert!(diagnostics.errors().next().is_none(), "re-parse of emitted output failed: {stripped}");
}

#[test]
fn stripped_output_rechecks_with_no_diagnostics() {
    let source = "type P = { x: number }; var p: P = { x: 1 }; var f = function <T>(y: T): T { return y }; f(p);";
    let stripped = transform_source(source);

    let mut diagnostics = DiagnosticSink::new();
    let ast = parse(&stripped, &mut diagnostics);
    let bound = nanots_binder::bind(&ast, &mut diagnostics);
    let _ = nanots_checker::check(&ast, bound, &mut diagnostics);
    assert!(
        diagnostics.errors().next().is_none(),
        "re-check of emitted output failed: {stripped}: {:?}",
        diagnostics.errors().collect::<Vec<_>>()
    );
}
