//! Integration tests for the front-end.
//!
//! These tests drive the public API from source text through tokenization
//! and parsing, then through the pretty-printer, symbol registration,
//! error rendering and highlighting.

use std::{collections::HashSet, rc::Rc, thread};

use fasel::{
    ast::{ast::NodeKind, printer::AstPrinter},
    errors::{
        diagnostics::{CollectingSink, LogSink},
        errors::ErrorImpl,
    },
    highlight::highlight::{highlight, HighlightClass},
    lexer::lexer::tokenize,
    parser::parser::{parse, parse_source},
    render_error,
    symbols::symbols::{register_top_level, SymbolKind},
};

const SAMPLE: &str = r#"
Unintialized : string;
Boring :: 1;
Mutable := 1 + !!(1 * 2); // unary operators stack
ReturnValue :: SomeFunction(1);
ArrayElement :: SomeArray[9];
Field :: SomeObject.SomeField.Array[9];
Something :: AnotherFunction(1 + 2, 3)[get_index()];
Constant :: (1 + 2) * 3 + 4 * 5 + 6 + 7 * 8 * 9 + 10;
UnaryOperator := !true;
UnaryOperator2 := &SomeArray["Index"];
DynamicArray : [?] i32;

SomeFunction :: (A : i32, B : i32, C : *i32) -> i32 {
    return A + B;
}

Main := (Argc: i32, Argv: **char) -> i32 {
    A = 1 + 3;
    B = "Hello, Friend!";
    C = Friends[10000 + 24] + a + b;
    Print(c);
}

ProgrammingLanguage :: "Fast Automation & Scripting Engine Language";
LastButNotLeast :: "Hello, Sailor!";

some_struct :: struct {
    Foo : i32;
    Bar : f32;
    Baz : string;
    Poo : *void;
    Array : [?] *void;
    DynamicArray : [?] *void;
}

SomeStruct : some_struct;

Foo :: /* comment */ (A : i32, B : i32) -> f32 {
    //C := 1 + 2;
}

MutableExplicitNoInit : i32;
MutableExplicitYesInit : i32 = 0;
MutableInferred := 0;
ConstantExplicit : i32 : 0;
ConstantInferred :: 0;
"#;

fn print(source: &str) -> String {
    let sink = CollectingSink::new();
    let (parser, result) = parse_source(source, "sample.fsl", &sink);
    let program = result.unwrap();
    AstPrinter::new(parser.store()).program(&program)
}

#[test]
fn test_parse_sample_program() {
    let sink = CollectingSink::new();
    let (parser, result) = parse_source(SAMPLE, "sample.fsl", &sink);

    let program = result.unwrap();
    assert!(sink.is_empty());
    assert_eq!(program.decls.len(), 23);

    let store = parser.into_store();
    assert_eq!(store.len_of(NodeKind::Decl), 23 + 6);
    assert_eq!(store.len_of(NodeKind::ProcedureDecl), 3);
    assert_eq!(store.len_of(NodeKind::Struct), 1);
}

#[test]
fn test_tokens_reproduce_source() {
    let tokens = tokenize(SAMPLE, Some("sample.fsl".to_string()));
    let rebuilt: String = tokens.iter().map(|token| token.value.as_str()).collect();

    assert_eq!(rebuilt, SAMPLE);
}

#[test]
fn test_printed_program_reparses() {
    let printed = print(SAMPLE);
    let reprinted = print(&printed);

    assert_eq!(printed, reprinted);
    assert!(printed.contains("Constant :: ((((((1 + 2) * 3) + (4 * 5)) + 6) + ((7 * 8) * 9)) + 10);"));
    assert!(printed.contains("SomeFunction :: (A : i32, B : i32, C : *i32) -> i32 {\n    return (A + B);\n}\n"));
    assert!(printed.contains("    DynamicArray : [?] *void;\n"));
}

#[test]
fn test_control_flow_round_trip() {
    let source = "Loop :: () -> void {
        Total := 0;
        for I := 0; I == 10; I += 1 { Total += I; }
        while Total { Total -= 1; }
        if Total == 0 { Print(Total); } else { return -1; }
        Inner :: () -> void {};
        (Total = 2);
    }";

    let printed = print(source);

    assert_eq!(printed, print(&printed));
    assert!(printed.contains("    for I := 0; (I == 10); (I += 1) {\n"));
    assert!(printed.contains("    Inner :: () -> void {\n    };\n"));
}

#[test]
fn test_register_sample_symbols() {
    let sink = CollectingSink::new();
    let (parser, result) = parse_source(SAMPLE, "sample.fsl", &sink);
    let program = result.unwrap();

    let scope = register_top_level(parser.store(), &program).unwrap();

    assert_eq!(scope.len(), 23);
    assert_eq!(scope.get_symbol("SomeFunction").unwrap().kind, SymbolKind::Procedure);
    assert_eq!(scope.get_symbol("Main").unwrap().kind, SymbolKind::Procedure);
    assert_eq!(scope.get_symbol("some_struct").unwrap().kind, SymbolKind::Struct);
    assert_eq!(scope.get_symbol("SomeStruct").unwrap().kind, SymbolKind::Variable);
    assert!(scope.get_symbol("ConstantExplicit").unwrap().is_const);
    assert!(!scope.get_symbol("Main").unwrap().is_const);
}

#[test]
fn test_first_error_stops_the_parse() {
    let source = "A :: 1;\nB := (1 + 2;\nC :: 3;\n";
    let sink = CollectingSink::new();

    let (_, result) = parse_source(source, "broken.fsl", &sink);
    let error = result.unwrap_err();

    assert_eq!(sink.len(), 1);
    assert_eq!(error.get_position().line, 2);
    assert!(matches!(error.kind(), ErrorImpl::UnexpectedToken { .. }));

    let rendered = render_error(&error, source);
    assert!(rendered.contains("-> broken.fsl:2:"));
    assert!(rendered.contains("2 | B := (1 + 2;"));
}

#[test]
fn test_unterminated_string_fails_at_parse_time() {
    let source = "Greeting :: \"hello";
    let sink = CollectingSink::new();

    let (_, result) = parse_source(source, "broken.fsl", &sink);
    let error = result.unwrap_err();

    assert_eq!(
        error.kind(),
        &ErrorImpl::UnexpectedToken {
            found: "end of file".to_string(),
            expected: "`;`".to_string(),
        }
    );
}

#[test]
fn test_log_sink_parse() {
    let tokens = tokenize("X :: 1 +;", Some("log.fsl".to_string()));
    let (parser, result) = parse(tokens, Rc::new("log.fsl".to_string()), &LogSink);

    assert!(result.is_err());
    assert_eq!(parser.cursor(), 0);
}

#[test]
fn test_parallel_parses_are_independent() {
    let handles: Vec<_> = (0..4)
        .map(|n| {
            thread::spawn(move || {
                let source = format!("Value{} :: {} * 2 + 1;\n{}", n, n, SAMPLE);
                print(&source)
            })
        })
        .collect();

    for (n, handle) in handles.into_iter().enumerate() {
        let printed = handle.join().unwrap();
        assert!(printed.starts_with(&format!("Value{} :: (({} * 2) + 1);\n", n, n)));
    }
}

#[test]
fn test_highlight_command_line() {
    let commands: HashSet<String> = ["teleport".to_string()].into_iter().collect();

    let ranges = highlight("teleport Player 10.5 // to the roof", &commands);
    let classes: Vec<HighlightClass> = ranges
        .iter()
        .filter(|range| range.class != HighlightClass::Whitespace)
        .map(|range| range.class)
        .collect();

    assert_eq!(
        classes,
        vec![
            HighlightClass::Command,
            HighlightClass::Identifier,
            HighlightClass::Literal,
            HighlightClass::Comment,
        ]
    );
}
