//! Parser lifecycle, file input and configuration

use std::fs;
use tempfile::TempDir;
use tsast::logging::{init_from_settings, init_logging};
use tsast::{Dialect, ParseError, Settings, TypeScriptParser};

#[test]
fn test_parse_file_and_typed_tree_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sample.ts");
    fs::write(&path, "export class Greeter {}\nconst g = new Greeter();\n").unwrap();

    let mut parser = TypeScriptParser::new().unwrap();
    let syntax = parser.parse_file(&path).unwrap();
    assert_eq!(syntax.root().child_count(), 2);

    let tree = parser.build_typed_tree_from_file(&path).unwrap();
    let class = tree.statements()[0].as_class().unwrap();
    assert_eq!(class.name, "Greeter");
    assert!(class.is_exported);
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.ts");

    let mut parser = TypeScriptParser::new().unwrap();
    let err = parser.parse_file(&path).unwrap_err();

    match &err {
        ParseError::FileRead { path: failed, .. } => assert_eq!(failed, &path),
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(err.status_code(), "FILE_READ_ERROR");
    assert!(!err.recovery_suggestions().is_empty());
}

#[test]
fn test_empty_file_is_empty_input() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.ts");
    fs::write(&path, "").unwrap();

    let mut parser = TypeScriptParser::new().unwrap();
    assert!(matches!(
        parser.build_typed_tree_from_file(&path),
        Err(ParseError::EmptyInput)
    ));
}

#[test]
fn test_closed_parser_refuses_work() {
    let mut parser = TypeScriptParser::new().unwrap();
    parser.build_typed_tree(b"let a = 1;").unwrap();

    parser.close();
    parser.close();

    let err = parser.build_typed_tree(b"let a = 1;").unwrap_err();
    assert_eq!(err.status_code(), "ENGINE_FAILURE");
}

#[test]
fn test_tsx_dialect_accepts_jsx() {
    let source = b"const view = <div className=\"box\">{label}</div>;";

    let mut parser = TypeScriptParser::with_dialect(Dialect::Tsx).unwrap();
    let tree = parser.build_typed_tree(source).unwrap();
    assert!(!tree.syntax().has_errors());
    assert_eq!(tree.statements()[0].kind_name(), "VariableStatement");
}

#[test]
fn test_parser_from_saved_settings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".tsast").join("settings.toml");

    let mut settings = Settings::default();
    settings.parser.dialect = Dialect::Tsx;
    settings.save(&path).unwrap();

    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded.parser.dialect, Dialect::Tsx);

    let parser = TypeScriptParser::from_settings(&loaded).unwrap();
    assert_eq!(parser.dialect(), Dialect::Tsx);
    assert!(!parser.is_closed());
}

#[test]
fn test_logging_init_is_repeatable() {
    let settings = Settings::default();
    init_logging(&settings.logging);
    // A second subscriber cannot be installed
    assert!(!init_logging(&settings.logging));

    let debug = Settings {
        debug: true,
        ..Settings::default()
    };
    assert_eq!(debug.effective_logging().level, "warn,tsast=debug");
    assert!(!init_from_settings(&debug));

    let mut parser = TypeScriptParser::new().unwrap();
    assert!(parser.parse(b"let logged = true;").is_ok());
}
