//! End-to-end behaviour on small inputs

use tsast::analyzer::{get_function_name, is_async, is_exported};
use tsast::{Analyzer, NodeType, ParseError, Statement, TypeScriptParser};

fn parser() -> TypeScriptParser {
    TypeScriptParser::new().expect("Failed to create parser")
}

#[test]
fn test_plain_function_declaration() {
    let tree = parser()
        .build_typed_tree(b"function test() { return 42; }")
        .unwrap();

    assert_eq!(tree.statements().len(), 1);
    let function = tree.statements()[0]
        .as_function()
        .expect("function declaration");
    assert_eq!(function.name, "test");
    assert!(!function.is_async);
    assert!(!function.is_exported);
    assert!(!function.is_generator);
}

#[test]
fn test_exported_async_function() {
    let tree = parser()
        .build_typed_tree(b"export async function f() {}")
        .unwrap();

    assert_eq!(tree.statements().len(), 1);
    let function = tree.statements()[0]
        .as_function()
        .expect("exported function should not stay an ExportDeclaration");
    assert_eq!(function.name, "f");
    assert!(function.is_async);
    assert!(function.is_exported);
}

#[test]
fn test_arrow_function_named_by_binding() {
    let tree = parser()
        .build_typed_tree(b"const add = (a, b) => a + b;")
        .unwrap();

    let functions = Analyzer::new(tree.root()).find_functions();
    assert_eq!(functions.len(), 1);
    assert_eq!(functions[0].node_type(), NodeType::ArrowFunction);
    assert_eq!(get_function_name(functions[0]), "add");
    assert!(!is_async(functions[0]));
    assert!(!is_exported(functions[0]));

    let variable = tree.statements()[0].as_variable().unwrap();
    assert_eq!(variable.names, vec!["add"]);
}

#[test]
fn test_for_of_loop() {
    let tree = parser()
        .build_typed_tree(b"for (const item of items) {}")
        .unwrap();

    match tree.statements() {
        [Statement::ForOfStatement { is_await, .. }] => assert!(!is_await),
        other => panic!("expected one for-of statement, got {other:?}"),
    }
}

#[test]
fn test_empty_source_fails() {
    let err = parser().build_typed_tree(b"").unwrap_err();
    assert!(matches!(err, ParseError::EmptyInput));
}

#[test]
fn test_unparseable_function_yields_unknown_descendants() {
    let tree = parser().parse(b"function {{{{ invalid").unwrap();

    assert_eq!(tree.root().byte_range(), 0..21);
    assert!(tree.has_errors());
    let unknown = tree
        .nodes()
        .filter(|n| !n.is_root() && n.node_type() == NodeType::Unknown)
        .count();
    assert!(unknown > 0);

    // Reconstruction degrades instead of failing
    assert!(parser().build_typed_tree(b"function {{{{ invalid").is_ok());
}

#[test]
fn test_malformed_source_still_parses() {
    let tree = parser().parse(b"let x = ((;\n}}} class {").unwrap();

    assert!(tree.has_errors());
    assert!(tree.error_count() > 0);
    for node in tree.nodes().filter(|n| n.kind() == "ERROR") {
        assert!(node.is_error());
        assert_eq!(node.node_type(), NodeType::Unknown);
    }
}
