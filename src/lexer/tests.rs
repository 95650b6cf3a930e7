//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric and string literals
//! - Operators, maximal munch and punctuation
//! - Comments and whitespace
//! - Invalid characters and unterminated literals

use super::{
    lexer::tokenize,
    tokens::{LiteralKind, Token, TokenKind},
};

fn significant(source: &str) -> Vec<Token> {
    tokenize(source, Some("test.fsl".to_string()))
        .into_iter()
        .filter(|token| !token.kind.is_trivia())
        .collect()
}

fn kinds(source: &str) -> Vec<TokenKind> {
    significant(source).iter().map(|token| token.kind).collect()
}

#[test]
fn test_tokenize_keywords() {
    let tokens = significant("if then else while for defer return struct enum");

    assert_eq!(tokens[0].kind, TokenKind::If);
    assert_eq!(tokens[1].kind, TokenKind::Then);
    assert_eq!(tokens[2].kind, TokenKind::Else);
    assert_eq!(tokens[3].kind, TokenKind::While);
    assert_eq!(tokens[4].kind, TokenKind::For);
    assert_eq!(tokens[5].kind, TokenKind::Defer);
    assert_eq!(tokens[6].kind, TokenKind::Return);
    assert_eq!(tokens[7].kind, TokenKind::Struct);
    assert_eq!(tokens[8].kind, TokenKind::Enum);
    assert_eq!(tokens.len(), 9);
}

#[test]
fn test_keyword_prefixes_stay_identifiers() {
    let tokens = significant("iffy returned structs");

    assert!(tokens.iter().all(|token| token.kind == TokenKind::Identifier));
    assert_eq!(tokens[1].value, "returned");
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = significant("foo bar baz_123 _underscore CamelCase");

    assert_eq!(tokens.len(), 5);
    assert!(tokens.iter().all(|token| token.kind == TokenKind::Identifier));
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].value, "_underscore");
    assert_eq!(tokens[4].value, "CamelCase");
}

#[test]
fn test_tokenize_numbers() {
    let tokens = significant("42 3.14 0 1.2.3");

    assert_eq!(tokens[0].kind, TokenKind::Literal);
    assert_eq!(tokens[0].literal, LiteralKind::Integer);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].literal, LiteralKind::Float);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].literal, LiteralKind::Integer);
    // Multiple decimal points are not rejected.
    assert_eq!(tokens[3].literal, LiteralKind::Float);
    assert_eq!(tokens[3].value, "1.2.3");
    assert_eq!(tokens.len(), 4);
}

#[test]
fn test_tokenize_strings() {
    let tokens = significant(r#""hello" "multiple words" """#);

    assert_eq!(tokens[0].kind, TokenKind::Literal);
    assert_eq!(tokens[0].literal, LiteralKind::String);
    assert_eq!(tokens[0].value, "\"hello\"");
    assert_eq!(tokens[1].value, "\"multiple words\"");
    assert_eq!(tokens[2].value, "\"\"");
    assert_eq!(tokens.len(), 3);
}

#[test]
fn test_strings_have_no_escapes() {
    let tokens = significant(r#""a\"b""#);

    assert_eq!(tokens[0].value, r#""a\""#);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "b");
    // The trailing quote opens a string that never closes.
    assert_eq!(tokens[2].kind, TokenKind::Literal);
    assert_eq!(tokens[2].value, "\"");
}

#[test]
fn test_unterminated_string_is_truncated() {
    let tokens = significant("x \"never closed");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1].kind, TokenKind::Literal);
    assert_eq!(tokens[1].literal, LiteralKind::String);
    assert_eq!(tokens[1].value, "\"never closed");
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("+ - * / = == ++ += -- -= -> /= *="),
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Assignment,
            TokenKind::Equals,
            TokenKind::PlusPlus,
            TokenKind::PlusEquals,
            TokenKind::MinusMinus,
            TokenKind::MinusEquals,
            TokenKind::Arrow,
            TokenKind::SlashEquals,
            TokenKind::StarEquals,
        ]
    );
}

#[test]
fn test_maximal_munch_without_spaces() {
    assert_eq!(
        kinds("a+=b"),
        vec![TokenKind::Identifier, TokenKind::PlusEquals, TokenKind::Identifier]
    );
    assert_eq!(kinds("+++"), vec![TokenKind::PlusPlus, TokenKind::Plus]);
    assert_eq!(kinds("==="), vec![TokenKind::Equals, TokenKind::Assignment]);
    assert_eq!(
        kinds("x:=1"),
        vec![
            TokenKind::Identifier,
            TokenKind::Colon,
            TokenKind::Assignment,
            TokenKind::Literal
        ]
    );
    assert_eq!(
        kinds("()->i32"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::Arrow,
            TokenKind::Identifier
        ]
    );
}

#[test]
fn test_operator_at_end_of_input() {
    assert_eq!(kinds("a -"), vec![TokenKind::Identifier, TokenKind::Dash]);
    assert_eq!(kinds("/"), vec![TokenKind::Slash]);
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds(", . ; : { } ( ) [ ] ? ! & ~"),
        vec![
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::Semicolon,
            TokenKind::Colon,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::Question,
            TokenKind::Not,
            TokenKind::Ampersand,
            TokenKind::Tilde,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    let tokens = tokenize("a // line\nb /* block */ c", None);
    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::Whitespace,
            TokenKind::LineComment,
            TokenKind::Identifier,
            TokenKind::Whitespace,
            TokenKind::BlockComment,
            TokenKind::Whitespace,
            TokenKind::Identifier,
        ]
    );
    // The newline belongs to the line comment.
    assert_eq!(tokens[2].value, "// line\n");
    assert_eq!(tokens[5].value, "/* block */");
}

#[test]
fn test_block_comment_with_stars() {
    let tokens = tokenize("/** x * y **/", None);

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::BlockComment);
}

#[test]
fn test_nested_block_comments_end_at_first_close() {
    let tokens = tokenize("/* a /* b */ c */", None);

    assert_eq!(tokens[0].kind, TokenKind::BlockComment);
    assert_eq!(tokens[0].value, "/* a /* b */");
    assert_eq!(
        kinds("/* a /* b */ c */"),
        vec![TokenKind::Identifier, TokenKind::Star, TokenKind::Slash]
    );
}

#[test]
fn test_unterminated_block_comment_is_truncated() {
    let tokens = tokenize("a /* never", None);

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[2].kind, TokenKind::BlockComment);
    assert_eq!(tokens[2].value, "/* never");
}

#[test]
fn test_invalid_characters() {
    let tokens = significant("a @ b");

    assert_eq!(tokens[1].kind, TokenKind::Invalid);
    assert_eq!(tokens[1].value, "@");

    let tokens = significant("x é");
    assert_eq!(tokens[1].kind, TokenKind::Invalid);
    assert_eq!(tokens[1].value, "é");
    assert_eq!(tokens.len(), 2);
}

#[test]
fn test_tokens_reproduce_source() {
    let source = "Main := (Argc: i32) -> i32 {\n\tA = 1.5 + \"str\"; // note\n}\n/* tail @ é */ ?";
    let tokens = tokenize(source, None);

    let rebuilt: String = tokens.iter().map(|token| token.value.as_str()).collect();
    assert_eq!(rebuilt, source);

    for pair in tokens.windows(2) {
        assert_eq!(pair[0].span.end.offset, pair[1].span.start.offset);
    }
    for token in &tokens {
        let range = token.span.start.offset as usize..token.span.end.offset as usize;
        assert_eq!(&source[range], token.value);
    }
}

#[test]
fn test_token_line_and_column() {
    let tokens = significant("a\n  bb\n\tc");

    assert_eq!((tokens[0].line(), tokens[0].column()), (1, 1));
    assert_eq!((tokens[1].line(), tokens[1].column()), (2, 3));
    assert_eq!((tokens[2].line(), tokens[2].column()), (3, 2));
    assert_eq!(tokens[1].span.end.column, 5);
}

#[test]
fn test_tokenize_empty_source() {
    assert!(tokenize("", None).is_empty());
}

#[test]
fn test_default_file_name() {
    let tokens = tokenize("x", None);
    assert_eq!(tokens[0].span.start.file.as_str(), "shell");

    let tokens = tokenize("x", Some("main.fsl".to_string()));
    assert_eq!(tokens[0].span.start.file.as_str(), "main.fsl");
}

#[test]
fn test_token_display() {
    let tokens = significant("foo ; 42");

    assert_eq!(tokens[0].to_string(), "identifier `foo`");
    assert_eq!(tokens[1].to_string(), "`;`");
    assert_eq!(tokens[2].to_string(), "literal `42`");
}
