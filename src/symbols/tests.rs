use super::symbols::{register_top_level, BuiltinType, SymbolKind};
use crate::{
    errors::{diagnostics::CollectingSink, errors::ErrorImpl},
    parser::parser::parse_source,
};

fn register(source: &str) -> Result<super::symbols::Scope, crate::errors::errors::Error> {
    let sink = CollectingSink::new();
    let (parser, result) = parse_source(source, "test.fsl", &sink);
    let program = match result {
        Ok(program) => program,
        Err(error) => panic!("unexpected parse failure: {}", error),
    };

    register_top_level(parser.store(), &program)
}

#[test]
fn test_register_symbol_kinds() {
    let scope = match register(
        "Main :: () -> void {}\nPoint :: struct { X : i32; }\nCount := 1;\nLimit :: 10;",
    ) {
        Ok(scope) => scope,
        Err(error) => panic!("{}", error),
    };

    assert_eq!(scope.len(), 4);
    assert_eq!(scope.get_symbol("Main").map(|s| s.kind), Some(SymbolKind::Procedure));
    assert_eq!(scope.get_symbol("Point").map(|s| s.kind), Some(SymbolKind::Struct));
    assert_eq!(scope.get_symbol("Count").map(|s| s.kind), Some(SymbolKind::Variable));
    assert_eq!(scope.get_symbol("Limit").map(|s| s.is_const), Some(true));
    assert!(scope.get_symbol("Missing").is_none());

    let names: Vec<&str> = scope.symbols().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Main", "Point", "Count", "Limit"]);
}

#[test]
fn test_redeclaration_is_rejected() {
    let error = match register("A :: 1;\nB :: 2;\nA := 3;") {
        Ok(_) => panic!("expected a redeclaration error"),
        Err(error) => error,
    };

    assert_eq!(
        error.kind(),
        &ErrorImpl::SymbolAlreadyDeclared {
            symbol: "A".to_string()
        }
    );
    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().column, 1);
}

#[test]
fn test_builtin_types() {
    assert_eq!(BuiltinType::from_name("i32"), Some(BuiltinType::I32));
    assert_eq!(BuiltinType::from_name("void"), Some(BuiltinType::Void));
    assert_eq!(BuiltinType::from_name("string"), None);

    assert_eq!(BuiltinType::U16.size(), 2);
    assert_eq!(BuiltinType::F64.size(), 8);
    assert_eq!(BuiltinType::Void.size(), 0);
}
