use std::collections::HashSet;

use crate::lexer::{lexer::tokenize, tokens::TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightClass {
    Command,
    UnknownCommand,
    Comment,
    Invalid,
    Identifier,
    Literal,
    Keyword,
    Punctuation,
    Whitespace,
    Other,
}

impl HighlightClass {
    pub fn color(&self) -> Color {
        match self {
            HighlightClass::Command => Color::rgba(30, 220, 30, 255),
            HighlightClass::UnknownCommand => Color::rgba(255, 255, 70, 255),
            HighlightClass::Comment => Color::rgba(0, 255, 0, 255),
            HighlightClass::Invalid => Color::rgba(255, 0, 0, 255),
            HighlightClass::Identifier => Color::rgba(170, 170, 170, 255),
            HighlightClass::Literal => Color::rgba(200, 120, 90, 255),
            HighlightClass::Keyword => Color::rgba(255, 255, 255, 255),
            HighlightClass::Punctuation => Color::rgba(140, 140, 140, 255),
            HighlightClass::Whitespace => Color::rgba(255, 255, 0, 255),
            HighlightClass::Other => Color::rgba(255, 127, 127, 255),
        }
    }

    fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::LineComment | TokenKind::BlockComment => HighlightClass::Comment,
            TokenKind::Invalid => HighlightClass::Invalid,
            TokenKind::Identifier => HighlightClass::Identifier,
            TokenKind::Literal => HighlightClass::Literal,
            TokenKind::Whitespace => HighlightClass::Whitespace,
            TokenKind::Comma
            | TokenKind::Dot
            | TokenKind::OpenCurly
            | TokenKind::CloseCurly
            | TokenKind::OpenParen
            | TokenKind::CloseParen
            | TokenKind::Semicolon
            | TokenKind::Colon
            | TokenKind::Plus
            | TokenKind::Dash
            | TokenKind::Slash
            | TokenKind::Star
            | TokenKind::Assignment
            | TokenKind::PlusEquals
            | TokenKind::MinusEquals
            | TokenKind::SlashEquals
            | TokenKind::StarEquals
            | TokenKind::Equals
            | TokenKind::Arrow => HighlightClass::Punctuation,
            TokenKind::Return => HighlightClass::Other,
            kind if kind.is_keyword() => HighlightClass::Keyword,
            _ => HighlightClass::Other,
        }
    }
}

/// Byte range `[start, end)` of the input and how to colour it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightRange {
    pub start: usize,
    pub end: usize,
    pub class: HighlightClass,
}

/// Exact-name lookup of known commands.
pub trait CommandRegistry {
    fn contains_command(&self, name: &str) -> bool;
}

impl CommandRegistry for HashSet<String> {
    fn contains_command(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl CommandRegistry for [&str] {
    fn contains_command(&self, name: &str) -> bool {
        self.iter().any(|command| *command == name)
    }
}

/// One range per token of `text`, in order.
pub fn highlight<R: CommandRegistry + ?Sized>(text: &str, registry: &R) -> Vec<HighlightRange> {
    let tokens = tokenize(text, None);

    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            let class = if i == 0 {
                if registry.contains_command(&token.value) {
                    HighlightClass::Command
                } else {
                    HighlightClass::UnknownCommand
                }
            } else {
                HighlightClass::of(token.kind)
            };

            HighlightRange {
                start: token.span.start.offset as usize,
                end: token.span.end.offset as usize,
                class,
            }
        })
        .collect()
}
