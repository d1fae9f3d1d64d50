//! Statement reconstruction
//!
//! Converted nodes carry no structural fields, so each top-level node is
//! classified by ordered text patterns. The first matching rule wins:
//!
//! | # | Pattern (trimmed text)                          | Statement               |
//! |---|-------------------------------------------------|-------------------------|
//! | 1 | starts `const ` / `let ` / `var `               | `VariableStatement`     |
//! | 2 | starts `function ` / `async function`           | `FunctionDeclaration`   |
//! | 3 | starts `class ` / `abstract class`              | `ClassDeclaration`      |
//! | 4 | starts `if ` / `if(`                            | `IfStatement`           |
//! | 5 | starts `while ` / `while(`                      | `WhileStatement`        |
//! | 6 | starts `for ` / `for(`, then ` of ` / ` in `    | `For{Of,In,}Statement`  |
//! | 7 | starts `switch ` / `switch(`                    | `SwitchStatement`       |
//! | 8 | starts `try ` / `try{`                          | `TryStatement`          |
//! | 9 | starts `return` / `throw ` / `break` / `continue` | jump statements       |
//! | 10 | starts `import `                               | `ImportDeclaration`     |
//! | 11 | starts `export `                               | `ExportDeclaration`     |
//! | 12 | contains `enum `                               | `EnumDeclaration`       |
//! | 13 | contains `namespace `                          | `NamespaceDeclaration`  |
//! | 13a-e | `debugger`, `with (`, `;`, `{`, `label:`    | remaining statements    |
//! | 14 | anything else that is not a comment            | `ExpressionStatement`   |
//!
//! Rules 2 and 3 also accept `export [default] ` in front of the keyword
//! (rule 2 then allows `function*` too), producing an exported declaration
//! instead of an `ExportDeclaration`.
//!
//! Matching is on raw text, so a string literal or identifier containing a
//! keyword can misclassify (`log("enum ")` is an enum). Never an error.

use crate::analyzer::identifier_child;
use crate::ast::{
    ClassDeclaration, EnumDeclaration, ExportDeclaration, FunctionDeclaration, ImportDeclaration,
    NamespaceDeclaration, Node, NodeType, Statement, VariableKind, VariableStatement,
};
use regex::Regex;
use std::sync::LazyLock;

static LABEL_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z_$][A-Za-z0-9_$]*)\s*:").expect("Invalid label regex")
});

const FUNCTION_PREFIXES: &[&str] = &["function ", "async function"];
const EXPORTED_FUNCTION_PREFIXES: &[&str] = &["function ", "function*", "async function"];
const CLASS_PREFIXES: &[&str] = &["class ", "abstract class"];

/// Build the statement sequence for the direct children of `root`.
pub fn reconstruct_statements(root: Node<'_>) -> Vec<Statement> {
    let statements: Vec<Statement> = root.children().filter_map(build_statement).collect();

    tracing::debug!(
        children = root.child_count(),
        statements = statements.len(),
        "reconstructed statements"
    );
    statements
}

/// Classify one node. `None` means the node is blank or a comment.
pub fn build_statement(node: Node<'_>) -> Option<Statement> {
    let text = node.text();
    let trimmed = text.trim();

    if starts_with_any(trimmed, &["const ", "let ", "var "]) {
        return Some(build_variable_statement(node));
    }

    if starts_with_any(trimmed, FUNCTION_PREFIXES)
        || is_exported_start(trimmed, EXPORTED_FUNCTION_PREFIXES)
    {
        return Some(build_function_declaration(node));
    }

    if starts_with_any(trimmed, CLASS_PREFIXES) || is_exported_start(trimmed, CLASS_PREFIXES) {
        return Some(build_class_declaration(node));
    }

    let id = node.id();

    if starts_with_any(trimmed, &["if ", "if("]) {
        return Some(Statement::IfStatement { node: id });
    }

    if starts_with_any(trimmed, &["while ", "while("]) {
        return Some(Statement::WhileStatement { node: id });
    }

    if starts_with_any(trimmed, &["for ", "for("]) {
        return Some(build_for_statement(node));
    }

    if starts_with_any(trimmed, &["switch ", "switch("]) {
        return Some(Statement::SwitchStatement { node: id });
    }

    if starts_with_any(trimmed, &["try ", "try{"]) {
        return Some(Statement::TryStatement { node: id });
    }

    if trimmed.starts_with("return") {
        return Some(Statement::ReturnStatement { node: id });
    }

    if trimmed.starts_with("throw ") {
        return Some(Statement::ThrowStatement { node: id });
    }

    if trimmed.starts_with("break") {
        return Some(Statement::BreakStatement {
            node: id,
            label: jump_label(trimmed, "break"),
        });
    }

    if trimmed.starts_with("continue") {
        return Some(Statement::ContinueStatement {
            node: id,
            label: jump_label(trimmed, "continue"),
        });
    }

    if trimmed.starts_with("import ") {
        return Some(Statement::ImportDeclaration(ImportDeclaration {
            node: id,
            source: module_specifier(node).unwrap_or_default(),
        }));
    }

    if trimmed.starts_with("export ") {
        return Some(Statement::ExportDeclaration(ExportDeclaration {
            node: id,
            is_default: text.contains("export default"),
            source: module_specifier(node),
        }));
    }

    if text.contains("enum ") {
        return Some(build_enum_declaration(node));
    }

    if text.contains("namespace ") {
        return Some(Statement::NamespaceDeclaration(NamespaceDeclaration {
            node: id,
            name: word_after(&text, "namespace ").unwrap_or_default(),
            is_exported: trimmed.starts_with("export "),
        }));
    }

    if trimmed.starts_with("debugger") {
        return Some(Statement::DebuggerStatement { node: id });
    }

    if starts_with_any(trimmed, &["with (", "with("]) {
        return Some(Statement::WithStatement { node: id });
    }

    if trimmed == ";" {
        return Some(Statement::EmptyStatement { node: id });
    }

    if trimmed.starts_with('{') {
        return Some(Statement::BlockStatement { node: id });
    }

    if let Some(caps) = LABEL_PREFIX.captures(trimmed) {
        return Some(Statement::LabeledStatement {
            node: id,
            label: caps[1].to_string(),
        });
    }

    if trimmed.is_empty() || is_comment(trimmed) {
        tracing::trace!(kind = node.kind(), "discarding blank or comment node");
        return None;
    }

    Some(Statement::ExpressionStatement { node: id })
}

fn build_variable_statement(node: Node<'_>) -> Statement {
    let text = node.text();
    let kind = if text.contains("const ") {
        VariableKind::Const
    } else if text.contains("let ") {
        VariableKind::Let
    } else {
        VariableKind::Var
    };

    let names = node
        .children()
        .filter(|child| child.kind() == "variable_declarator")
        .filter_map(identifier_child)
        .collect();

    Statement::VariableStatement(VariableStatement {
        node: node.id(),
        kind,
        names,
    })
}

fn build_function_declaration(node: Node<'_>) -> Statement {
    let text = node.text();

    Statement::FunctionDeclaration(FunctionDeclaration {
        node: node.id(),
        name: function_name(node),
        is_async: text.contains("async "),
        is_exported: text.trim().starts_with("export "),
        is_generator: text.contains("function*"),
    })
}

fn build_class_declaration(node: Node<'_>) -> Statement {
    let text = node.text();

    Statement::ClassDeclaration(ClassDeclaration {
        node: node.id(),
        name: class_name(node),
        is_abstract: text.contains("abstract "),
        is_exported: text.trim().starts_with("export "),
    })
}

fn build_for_statement(node: Node<'_>) -> Statement {
    let text = node.text();
    let id = node.id();

    if text.contains(" of ") {
        Statement::ForOfStatement {
            node: id,
            is_await: text.contains("await "),
        }
    } else if text.contains(" in ") {
        Statement::ForInStatement { node: id }
    } else {
        Statement::ForStatement { node: id }
    }
}

fn build_enum_declaration(node: Node<'_>) -> Statement {
    let text = node.text();

    Statement::EnumDeclaration(EnumDeclaration {
        node: node.id(),
        name: identifier_child(node)
            .or_else(|| word_after(&text, "enum "))
            .unwrap_or_default(),
        is_const: text.contains("const enum"),
        is_exported: text.trim().starts_with("export "),
    })
}

/// Function name from an identifier child, else from the text up to `(`.
fn function_name(node: Node<'_>) -> String {
    if let Some(name) = identifier_child(node) {
        return name;
    }

    let full = node.text();
    let text = strip_modifiers(full.trim(), "async ");
    let rest = match text.strip_prefix("function") {
        Some(rest) => rest.trim_start().trim_start_matches('*').trim(),
        None => text,
    };

    match rest.find('(') {
        Some(idx) if idx > 0 => rest[..idx].trim().to_string(),
        _ => String::new(),
    }
}

/// Class name from an identifier child, else from the text up to the
/// earliest of `{`, ` extends`, ` implements` or `<`.
///
/// Anonymous classes (`export default class extends Base {}`) give an
/// empty name.
fn class_name(node: Node<'_>) -> String {
    if let Some(name) = identifier_child(node) {
        return name;
    }

    let full = node.text();
    let text = strip_modifiers(full.trim(), "abstract ");
    let rest = text.strip_prefix("class ").unwrap_or(text).trim();

    if starts_with_any(rest, &["extends ", "implements "]) {
        return String::new();
    }

    let end = ["{", " extends", " implements", "<"]
        .iter()
        .filter_map(|delim| rest.find(delim))
        .min();

    match end {
        Some(0) => String::new(),
        Some(idx) => rest[..idx].trim().to_string(),
        None => rest.to_string(),
    }
}

/// Drop a leading `export [default] ` and then `modifier`.
fn strip_modifiers<'a>(text: &'a str, modifier: &str) -> &'a str {
    let text = strip_export(text).unwrap_or(text);
    text.strip_prefix(modifier).map(str::trim_start).unwrap_or(text)
}

/// Remainder after `export ` and an optional `default `.
fn strip_export(text: &str) -> Option<&str> {
    let rest = text.strip_prefix("export ")?.trim_start();
    Some(rest.strip_prefix("default ").map(str::trim_start).unwrap_or(rest))
}

fn is_exported_start(trimmed: &str, prefixes: &[&str]) -> bool {
    strip_export(trimmed).is_some_and(|rest| starts_with_any(rest, prefixes))
}

fn starts_with_any(text: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|prefix| text.starts_with(prefix))
}

fn is_comment(trimmed: &str) -> bool {
    trimmed.starts_with("//") || trimmed.starts_with("/*")
}

/// `break outer;` -> `Some("outer")`
fn jump_label(trimmed: &str, keyword: &str) -> Option<String> {
    let rest = trimmed.strip_prefix(keyword)?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let label = rest.trim().trim_end_matches(';').trim();
    let is_identifier = !label.is_empty()
        && label
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '$');
    is_identifier.then(|| label.to_string())
}

/// The token following `keyword`, up to whitespace or `{`.
fn word_after(text: &str, keyword: &str) -> Option<String> {
    let start = text.find(keyword)? + keyword.len();
    let word: String = text[start..]
        .trim_start()
        .chars()
        .take_while(|c| !c.is_whitespace() && *c != '{')
        .collect();
    (!word.is_empty()).then_some(word)
}

/// Quoted module path of an import or re-export, without the quotes.
fn module_specifier(node: Node<'_>) -> Option<String> {
    node.children()
        .find(|child| child.node_type() == NodeType::Literal && child.kind() == "string")
        .map(|literal| {
            literal
                .text()
                .trim_matches(|c| c == '"' || c == '\'' || c == '`')
                .to_string()
        })
}
