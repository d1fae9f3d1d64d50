//! Queries and helper predicates on parsed TypeScript

use tsast::analyzer::{
    count_parameters, count_properties, get_function_name, get_identifier_name,
    get_interface_name, get_literal_value, get_type_alias_name, has_extends, has_parameters,
    is_async, is_exported, is_generic_type, is_optional_property, is_readonly,
};
use tsast::{Analyzer, NodeType, SyntaxTree, TypeScriptParser, VisitControl};

fn parse(source: &str) -> SyntaxTree {
    let mut parser = TypeScriptParser::new().expect("Failed to create parser");
    parser.parse(source.as_bytes()).expect("Failed to parse")
}

#[test]
fn test_exported_arrow_detected_through_ancestors() {
    let tree = parse("export const handler = async () => {};");
    let functions = Analyzer::new(tree.root()).find_functions();

    assert_eq!(functions.len(), 1);
    let arrow = functions[0];
    assert_eq!(arrow.node_type(), NodeType::ArrowFunction);
    assert_eq!(get_function_name(arrow), "handler");
    assert!(is_exported(arrow));
    assert!(is_async(arrow));
}

#[test]
fn test_export_detection_is_bounded() {
    // export_statement is the fourth ancestor of the inner arrow
    let tree = parse("export function wrap() { return () => 1; }");
    let arrow = Analyzer::new(tree.root())
        .find_nodes_by_type(NodeType::ArrowFunction)
        .pop()
        .unwrap();

    assert!(!is_exported(arrow));
    // The nearest preceding identifier is the enclosing function's name
    assert_eq!(get_function_name(arrow), "wrap");
}

#[test]
fn test_functions_found_in_pre_order() {
    let tree = parse("function outer() { const inner = () => 1; }");
    let functions = Analyzer::new(tree.root()).find_functions();

    let names: Vec<String> = functions.iter().map(|f| get_function_name(*f)).collect();
    assert_eq!(names, vec!["outer", "inner"]);
    assert!(!is_exported(functions[1]));
}

#[test]
fn test_object_literal_arrow_takes_variable_name() {
    let tree = parse("const api = { get: () => 1 };");
    let arrow = Analyzer::new(tree.root()).find_functions()[0];

    // The property key is not an identifier node, so the variable wins
    assert_eq!(get_function_name(arrow), "api");
}

#[test]
fn test_methods_and_parameters() {
    let tree = parse("class Store { async save(item: Item) {} static create() {} }");
    let methods = Analyzer::new(tree.root()).find_methods();

    assert_eq!(methods.len(), 2);
    assert!(is_async(methods[0]));
    assert!(!is_async(methods[1]));
    assert!(has_parameters(methods[0]));
    assert_eq!(count_parameters(methods[0]), 1);
    assert_eq!(count_parameters(methods[1]), 0);
}

#[test]
fn test_parameter_count_ignores_list_node() {
    let tree = parse("function f(a: number, b?: string) {}");
    let function = Analyzer::new(tree.root()).find_functions()[0];

    assert!(has_parameters(function));
    assert_eq!(count_parameters(function), 2);
    // The root's only child is the function, not a parameter list
    assert!(!has_parameters(tree.root()));
}

#[test]
fn test_interface_helpers() {
    let tree = parse("interface User extends Base { readonly id: string; nick?: string; }");
    let analyzer = Analyzer::new(tree.root());
    let interfaces = analyzer.find_interfaces();
    assert_eq!(interfaces.len(), 1);

    let iface = interfaces[0];
    assert!(has_extends(iface));
    assert!(!is_generic_type(iface));
    // Interface names are type identifiers, not identifiers
    assert_eq!(get_interface_name(iface), "");

    let properties = Analyzer::new(iface).find_nodes_by_type(NodeType::Property);
    assert_eq!(properties.len(), 2);
    assert!(is_readonly(properties[0]));
    assert!(!is_optional_property(properties[0]));
    assert!(is_optional_property(properties[1]));

    // Properties sit in the body, so only the body counts them
    let body = properties[0].parent().unwrap();
    assert_eq!(count_properties(body), 2);
    assert_eq!(count_properties(iface), 0);
}

#[test]
fn test_type_alias_helpers() {
    let tree = parse("type Pair<K, V> = [K, V];");
    let aliases = Analyzer::new(tree.root()).find_type_aliases();

    assert_eq!(aliases.len(), 1);
    assert!(is_generic_type(aliases[0]));
    assert!(!has_extends(aliases[0]));
    assert_eq!(get_type_alias_name(aliases[0]), "");
}

#[test]
fn test_expressions_identifiers_literals() {
    let tree = parse("foo(a + b, \"s\", 42, true, null);");
    let analyzer = Analyzer::new(tree.root());

    let expressions: Vec<&str> = analyzer
        .find_expressions()
        .iter()
        .map(|n| n.kind())
        .collect();
    assert_eq!(expressions, vec!["call_expression", "binary_expression"]);

    let identifiers: Vec<String> = analyzer
        .find_identifiers()
        .into_iter()
        .map(|n| get_identifier_name(n).into_owned())
        .collect();
    assert_eq!(identifiers, vec!["foo", "a", "b"]);

    let literals: Vec<String> = analyzer
        .find_literals()
        .into_iter()
        .map(|n| get_literal_value(n).into_owned())
        .collect();
    assert_eq!(literals, vec!["\"s\"", "42", "true", "null"]);

    assert_eq!(analyzer.count_nodes_by_type(NodeType::Literal), 4);
}

#[test]
fn test_visit_can_skip_function_bodies() {
    let tree = parse("function a() { x(); }\nfunction b() { y(); }\nz();");
    let analyzer = Analyzer::new(tree.root());

    let mut calls_outside = 0;
    analyzer.visit(|node| {
        if node.kind() == "call_expression" {
            calls_outside += 1;
        }
        if node.node_type() == NodeType::Function {
            VisitControl::Stop
        } else {
            VisitControl::Continue
        }
    });

    assert_eq!(calls_outside, 1);
    assert_eq!(analyzer.count_nodes(|n| n.kind() == "call_expression"), 3);
}
