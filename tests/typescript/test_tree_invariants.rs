//! Structural properties of converted trees

use tsast::{Node, SyntaxTree, TypeScriptParser};

const SOURCE: &str = r#"
// Greeting helpers
import { format } from "./format";

interface Greeter {
    readonly name: string;
    greet(target?: string): string;
}

export class Polite implements Greeter {
    constructor(public name: string) {}

    greet(target = "world"): string {
        return format(`Hello, ${target}! from ${this.name}`);
    }
}

const shout = (s: string) => s.toUpperCase();
for (let i = 0; i < 3; i++) { console.log(shout("héllo")); }
"#;

fn walk<'t>(node: Node<'t>, out: &mut Vec<Node<'t>>) {
    out.push(node);
    for child in node.children() {
        walk(child, out);
    }
}

#[test]
fn test_root_covers_whole_source() {
    let mut parser = TypeScriptParser::new().unwrap();
    let tree = parser.parse(SOURCE.as_bytes()).unwrap();

    assert_eq!(tree.root().byte_range(), 0..SOURCE.len());
    assert_eq!(tree.root().range().start.offset, 0);
    assert!(tree.root().parent().is_none());
    assert!(!tree.has_errors());
}

#[test]
fn test_children_nested_and_ordered() {
    let mut parser = TypeScriptParser::new().unwrap();
    let tree = parser.parse(SOURCE.as_bytes()).unwrap();

    let mut nodes = Vec::new();
    walk(tree.root(), &mut nodes);
    assert_eq!(nodes.len(), tree.len());

    for node in nodes {
        let children: Vec<Node> = node.children().collect();
        for child in &children {
            assert!(
                node.range().contains_range(&child.range()),
                "{child:?} escapes {node:?}"
            );
            assert_eq!(child.parent(), Some(node));
        }
        for pair in children.windows(2) {
            assert!(pair[0].range().end.offset <= pair[1].range().start.offset);
        }
    }
}

#[test]
fn test_text_matches_source_slice() {
    let mut parser = TypeScriptParser::new().unwrap();
    let tree = parser.parse(SOURCE.as_bytes()).unwrap();

    for node in tree.nodes() {
        assert_eq!(node.text(), &SOURCE[node.byte_range()]);
    }
}

#[test]
fn test_rows_and_columns_are_recorded() {
    let mut parser = TypeScriptParser::new().unwrap();
    let tree = parser.parse(SOURCE.as_bytes()).unwrap();

    let import = tree
        .nodes()
        .find(|n| n.kind() == "import_statement")
        .unwrap();
    assert_eq!(import.range().start.row, 2);
    assert_eq!(import.range().start.column, 0);
}

/// A valid module with one stray Latin-1 byte inside a string literal.
fn latin1_source() -> Vec<u8> {
    let mut source = b"const greeting = \"caf".to_vec();
    source.push(0xE9);
    source.extend_from_slice(b"\";\nfunction greet() { return greeting; }\n");
    source
}

fn assert_invariants(tree: &SyntaxTree, source: &[u8]) {
    assert_eq!(tree.source(), source);
    assert_eq!(tree.root().byte_range(), 0..source.len());

    for node in tree.nodes() {
        let bytes = &source[node.byte_range()];
        assert_eq!(node.text(), String::from_utf8_lossy(bytes), "{node:?}");
        for child in node.children() {
            assert!(node.range().contains_range(&child.range()));
        }
    }
}

#[test]
fn test_invariants_hold_for_invalid_utf8() {
    let source = latin1_source();
    let mut parser = TypeScriptParser::new().unwrap();
    let tree = parser.parse(&source).unwrap();

    assert!(!tree.is_valid_utf8());
    assert_invariants(&tree, &source);

    // Text outside the bad byte is untouched
    let function = tree
        .nodes()
        .find(|n| n.kind() == "function_declaration")
        .unwrap();
    assert_eq!(function.text(), "function greet() { return greeting; }");
}

#[test]
fn test_invalid_utf8_statements() {
    let source = latin1_source();
    let mut parser = TypeScriptParser::new().unwrap();
    let tree = parser.build_typed_tree(&source).unwrap();

    let statements = tree.statements();
    assert_eq!(statements[0].kind_name(), "VariableStatement");
    let last = statements.last().unwrap();
    assert_eq!(last.kind_name(), "FunctionDeclaration");
    assert_eq!(last.name(), Some("greet"));
}

#[test]
fn test_invariants_hold_for_valid_source() {
    let mut parser = TypeScriptParser::new().unwrap();
    let tree = parser.parse(SOURCE.as_bytes()).unwrap();
    assert!(tree.is_valid_utf8());
    assert_invariants(&tree, SOURCE.as_bytes());
}

#[test]
fn test_typed_tree_is_idempotent() {
    let mut parser = TypeScriptParser::new().unwrap();
    let first = parser.build_typed_tree(SOURCE.as_bytes()).unwrap();
    let second = parser.build_typed_tree(SOURCE.as_bytes()).unwrap();

    assert_eq!(first.statements(), second.statements());
    assert_eq!(
        serde_json::to_string(first.statements()).unwrap(),
        serde_json::to_string(second.statements()).unwrap()
    );
}
