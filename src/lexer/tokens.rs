use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("for", TokenKind::For);
        map.insert("defer", TokenKind::Defer);
        map.insert("return", TokenKind::Return);
        map.insert("struct", TokenKind::Struct);
        map.insert("enum", TokenKind::Enum);
        map
    };

    /// Characters that always form a token on their own.
    pub static ref SINGLE_CHAR_LOOKUP: HashMap<u8, TokenKind> = {
        let mut map = HashMap::new();
        map.insert(b',', TokenKind::Comma);
        map.insert(b'.', TokenKind::Dot);
        map.insert(b';', TokenKind::Semicolon);
        map.insert(b':', TokenKind::Colon);
        map.insert(b'{', TokenKind::OpenCurly);
        map.insert(b'}', TokenKind::CloseCurly);
        map.insert(b'(', TokenKind::OpenParen);
        map.insert(b')', TokenKind::CloseParen);
        map.insert(b'[', TokenKind::OpenBracket);
        map.insert(b']', TokenKind::CloseBracket);
        map.insert(b'?', TokenKind::Question);
        map.insert(b'!', TokenKind::Not);
        map.insert(b'&', TokenKind::Ampersand);
        map.insert(b'~', TokenKind::Tilde);
        map
    };

    /// Operator prefixes that may grow into a two-character operator, with
    /// the kind emitted when they do not.
    pub static ref OPERATOR_PREFIX_LOOKUP: HashMap<u8, TokenKind> = {
        let mut map = HashMap::new();
        map.insert(b'+', TokenKind::Plus);
        map.insert(b'-', TokenKind::Dash);
        map.insert(b'/', TokenKind::Slash);
        map.insert(b'*', TokenKind::Star);
        map.insert(b'=', TokenKind::Assignment);
        map
    };

    /// `(prefix, next)` pairs completing a two-character operator.
    pub static ref OPERATOR_FOLLOWUP_LOOKUP: HashMap<(u8, u8), TokenKind> = {
        let mut map = HashMap::new();
        map.insert((b'+', b'+'), TokenKind::PlusPlus);
        map.insert((b'+', b'='), TokenKind::PlusEquals);
        map.insert((b'-', b'-'), TokenKind::MinusMinus);
        map.insert((b'-', b'='), TokenKind::MinusEquals);
        map.insert((b'-', b'>'), TokenKind::Arrow);
        map.insert((b'/', b'='), TokenKind::SlashEquals);
        map.insert((b'*', b'='), TokenKind::StarEquals);
        map.insert((b'=', b'='), TokenKind::Equals);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    /// A character no rule accepts. Never skipped by the parser.
    Invalid,
    EOF,
    Identifier,
    Literal,

    // Trivia
    Whitespace,
    LineComment,
    BlockComment,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Comma,
    Dot,
    Semicolon,
    Colon,
    Question,
    Not,
    Ampersand,
    Tilde,
    Arrow,

    Assignment, // =
    Equals,     // ==

    PlusPlus,
    MinusMinus,
    PlusEquals,
    MinusEquals,
    SlashEquals,
    StarEquals,

    Plus,
    Dash,
    Slash,
    Star,

    // Reserved
    If,
    Then,
    Else,
    While,
    For,
    Defer,
    Return,
    Struct,
    Enum,
}

impl TokenKind {
    /// Whitespace and comments: kept in the token stream, ignored by the parser.
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::LineComment | TokenKind::BlockComment
        )
    }

    pub fn is_keyword(&self) -> bool {
        RESERVED_LOOKUP.values().any(|kind| kind == self)
    }

    /// Human readable name used in diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::Invalid => "invalid token",
            TokenKind::EOF => "end of file",
            TokenKind::Identifier => "identifier",
            TokenKind::Literal => "literal",
            TokenKind::Whitespace => "whitespace",
            TokenKind::LineComment => "comment",
            TokenKind::BlockComment => "comment",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Question => "?",
            TokenKind::Not => "!",
            TokenKind::Ampersand => "&",
            TokenKind::Tilde => "~",
            TokenKind::Arrow => "->",
            TokenKind::Assignment => "=",
            TokenKind::Equals => "==",
            TokenKind::PlusPlus => "++",
            TokenKind::MinusMinus => "--",
            TokenKind::PlusEquals => "+=",
            TokenKind::MinusEquals => "-=",
            TokenKind::SlashEquals => "/=",
            TokenKind::StarEquals => "*=",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Slash => "/",
            TokenKind::Star => "*",
            TokenKind::If => "if",
            TokenKind::Then => "then",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::For => "for",
            TokenKind::Defer => "defer",
            TokenKind::Return => "return",
            TokenKind::Struct => "struct",
            TokenKind::Enum => "enum",
        }
    }

    /// Whether `describe()` fully identifies the token. Names like
    /// "identifier" need the token text appended to be useful.
    pub fn is_self_describing(&self) -> bool {
        !matches!(
            self,
            TokenKind::Identifier
                | TokenKind::Literal
                | TokenKind::Whitespace
                | TokenKind::LineComment
                | TokenKind::BlockComment
                | TokenKind::Invalid
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum LiteralKind {
    None,
    Integer,
    Float,
    String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text covered by `span`.
    pub value: String,
    pub span: Span,
    pub literal: LiteralKind,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.kind == TokenKind::EOF {
            write!(f, "{}", self.kind)
        } else if self.kind.is_self_describing() {
            write!(f, "`{}`", self.kind)
        } else {
            write!(f, "{} `{}`", self.kind, self.value)
        }
    }
}

impl Token {
    pub fn line(&self) -> u32 {
        self.span.start.line
    }

    pub fn column(&self) -> u32 {
        self.span.start.column
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn debug(&self) -> String {
        if self.is_one_of_many(&[
            TokenKind::Literal,
            TokenKind::Identifier,
            TokenKind::Invalid,
        ]) {
            format!("{:?} ({:?}) {}:{}", self.kind, self.value, self.line(), self.column())
        } else {
            format!("{:?} () {}:{}", self.kind, self.line(), self.column())
        }
    }
}
