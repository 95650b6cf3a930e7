use std::collections::HashSet;

use super::highlight::{highlight, Color, HighlightClass};

#[test]
fn test_known_command() {
    let commands: HashSet<String> = ["spawn".to_string()].into_iter().collect();

    let ranges = highlight("spawn enemy 3", &commands);

    assert_eq!(ranges[0].class, HighlightClass::Command);
    assert_eq!((ranges[0].start, ranges[0].end), (0, 5));
    assert_eq!(ranges[1].class, HighlightClass::Whitespace);
    assert_eq!(ranges[2].class, HighlightClass::Identifier);
    assert_eq!(ranges[4].class, HighlightClass::Literal);
    assert_eq!(ranges.len(), 5);
}

#[test]
fn test_unknown_command_is_exact_match() {
    let commands: &[&str] = &["spawn"];

    let ranges = highlight("spawner", commands);

    assert_eq!(ranges.len(), 1);
    assert_eq!(ranges[0].class, HighlightClass::UnknownCommand);
}

#[test]
fn test_token_classes() {
    let commands: &[&str] = &[];

    let ranges = highlight("x if a == 1 { } // done\n@ [", commands);
    let classes: Vec<HighlightClass> = ranges
        .iter()
        .filter(|range| range.class != HighlightClass::Whitespace)
        .map(|range| range.class)
        .collect();

    assert_eq!(
        classes,
        vec![
            HighlightClass::UnknownCommand,
            HighlightClass::Keyword,
            HighlightClass::Identifier,
            HighlightClass::Punctuation,
            HighlightClass::Literal,
            HighlightClass::Punctuation,
            HighlightClass::Punctuation,
            HighlightClass::Comment,
            HighlightClass::Invalid,
            HighlightClass::Other,
        ]
    );
}

#[test]
fn test_return_is_not_a_keyword_color() {
    let commands: &[&str] = &["cmd"];

    let ranges = highlight("cmd return while", commands);

    assert_eq!(ranges[2].class, HighlightClass::Other);
    assert_eq!(ranges[4].class, HighlightClass::Keyword);
}

#[test]
fn test_ranges_cover_input() {
    let commands: &[&str] = &["set"];
    let text = "set  volume = 0.5; /* loud */";

    let ranges = highlight(text, commands);

    assert_eq!(ranges.first().map(|range| range.start), Some(0));
    assert_eq!(ranges.last().map(|range| range.end), Some(text.len()));
    for pair in ranges.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
}

#[test]
fn test_empty_input() {
    let commands: &[&str] = &["set"];

    assert!(highlight("", commands).is_empty());
}

#[test]
fn test_class_colors() {
    assert_eq!(HighlightClass::Command.color(), Color::rgba(30, 220, 30, 255));
    assert_eq!(HighlightClass::Invalid.color(), Color::rgba(255, 0, 0, 255));
    assert_eq!(HighlightClass::Other.color(), Color::rgba(255, 127, 127, 255));
}
