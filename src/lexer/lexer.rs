use std::rc::Rc;

use tracing::warn;

use crate::{Position, Span, MK_TOKEN};

use super::tokens::{
    LiteralKind, Token, TokenKind, OPERATOR_FOLLOWUP_LOOKUP, OPERATOR_PREFIX_LOOKUP,
    RESERVED_LOOKUP, SINGLE_CHAR_LOOKUP,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    Start,
    Identifier,
    Number,
    String,
    Whitespace,
    /// Seen one of `+ - / * =`; `single` is emitted if no second character
    /// completes a longer operator.
    Operator { prefix: u8, single: TokenKind },
    BlockComment,
    MaybeCommentEnd,
    LineComment,
}

/// Character-level tokenizer.
///
/// Every byte of the source ends up in exactly one token, whitespace and
/// comments included. A token ends on the first character that does not
/// belong to it; that character is re-examined from the start state unless it
/// completed a two-character operator.
pub struct Lexer<'a> {
    source: &'a str,
    bytes: &'a [u8],
    tokens: Vec<Token>,
    state: LexState,
    pos: usize,
    file: Rc<String>,
    token_start: Position,
    literal: LiteralKind,
    line: u32,
    line_start: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, file: Option<String>) -> Lexer<'a> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            bytes: source.as_bytes(),
            tokens: vec![],
            state: LexState::Start,
            pos: 0,
            token_start: Position::new(0, 1, 1, Rc::clone(&file_name)),
            file: file_name,
            literal: LiteralKind::None,
            line: 1,
            line_start: 0,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(
            self.pos as u32,
            self.line,
            (self.pos - self.line_start) as u32 + 1,
            Rc::clone(&self.file),
        )
    }

    pub fn at(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn advance(&mut self) {
        if self.bytes[self.pos] == b'\n' {
            self.line += 1;
            self.line_start = self.pos + 1;
        }
        self.pos += 1;
    }

    fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    fn begin(&mut self) {
        self.token_start = self.position();
        self.literal = LiteralKind::None;
    }

    fn current_text(&self) -> &'a str {
        &self.source[self.token_start.offset as usize..self.pos]
    }

    /// Emits `[token_start, pos)` as a token of `kind` and returns to the
    /// start state.
    fn finish(&mut self, kind: TokenKind) {
        if (self.token_start.offset as usize) < self.pos {
            let span = Span {
                start: self.token_start.clone(),
                end: self.position(),
            };
            let value = String::from(self.current_text());
            self.tokens.push(MK_TOKEN!(kind, value, span, self.literal));
        }

        self.state = LexState::Start;
    }

    fn finish_truncated(&mut self, kind: TokenKind, what: &str) {
        warn!(
            file = %self.file,
            line = self.token_start.line,
            column = self.token_start.column,
            "unterminated {} at end of input",
            what
        );
        self.finish(kind);
    }

    fn start(&mut self, c: u8) {
        self.begin();

        if c.is_ascii_alphabetic() || c == b'_' {
            self.advance();
            self.state = LexState::Identifier;
        } else if c.is_ascii_digit() {
            self.literal = LiteralKind::Integer;
            self.advance();
            self.state = LexState::Number;
        } else if c == b'"' {
            self.literal = LiteralKind::String;
            self.advance();
            self.state = LexState::String;
        } else if is_space(c) {
            self.advance();
            self.state = LexState::Whitespace;
        } else if let Some(kind) = SINGLE_CHAR_LOOKUP.get(&c).copied() {
            self.advance();
            self.finish(kind);
        } else if let Some(single) = OPERATOR_PREFIX_LOOKUP.get(&c).copied() {
            self.advance();
            self.state = LexState::Operator { prefix: c, single };
        } else {
            // Consume the whole character so the token text stays valid UTF-8.
            let width = self.source[self.pos..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
            self.advance_n(width);
            self.finish(TokenKind::Invalid);
        }
    }

    /// Runs the state machine on the current character. Returns `false` once
    /// the input is exhausted and no token is pending.
    fn step(&mut self) -> bool {
        let c = self.at();

        match self.state {
            LexState::Start => match c {
                Some(c) => self.start(c),
                None => return false,
            },
            LexState::Identifier => match c {
                Some(c) if c.is_ascii_alphanumeric() || c == b'_' => self.advance(),
                _ => {
                    let kind = RESERVED_LOOKUP
                        .get(self.current_text())
                        .copied()
                        .unwrap_or(TokenKind::Identifier);
                    self.finish(kind);
                }
            },
            LexState::Number => match c {
                Some(c) if c.is_ascii_digit() => self.advance(),
                Some(b'.') => {
                    self.literal = LiteralKind::Float;
                    self.advance();
                }
                _ => self.finish(TokenKind::Literal),
            },
            LexState::String => match c {
                Some(b'"') => {
                    self.advance();
                    self.finish(TokenKind::Literal);
                }
                Some(_) => self.advance(),
                None => self.finish_truncated(TokenKind::Literal, "string literal"),
            },
            LexState::Whitespace => match c {
                Some(c) if is_space(c) => self.advance(),
                _ => self.finish(TokenKind::Whitespace),
            },
            LexState::Operator { prefix, single } => match (prefix, c) {
                (b'/', Some(b'*')) => {
                    self.advance();
                    self.state = LexState::BlockComment;
                }
                (b'/', Some(b'/')) => {
                    self.advance();
                    self.state = LexState::LineComment;
                }
                (_, Some(next)) => match OPERATOR_FOLLOWUP_LOOKUP.get(&(prefix, next)).copied() {
                    Some(kind) => {
                        self.advance();
                        self.finish(kind);
                    }
                    None => self.finish(single),
                },
                (_, None) => self.finish(single),
            },
            LexState::BlockComment => match c {
                Some(b'*') => {
                    self.advance();
                    self.state = LexState::MaybeCommentEnd;
                }
                Some(_) => self.advance(),
                None => self.finish_truncated(TokenKind::BlockComment, "block comment"),
            },
            // Nesting is not tracked: the first `*/` closes the comment.
            LexState::MaybeCommentEnd => match c {
                Some(b'/') => {
                    self.advance();
                    self.finish(TokenKind::BlockComment);
                }
                Some(b'*') => self.advance(),
                Some(_) => {
                    self.advance();
                    self.state = LexState::BlockComment;
                }
                None => self.finish_truncated(TokenKind::BlockComment, "block comment"),
            },
            LexState::LineComment => match c {
                Some(b'\n') => {
                    self.advance();
                    self.finish(TokenKind::LineComment);
                }
                Some(_) => self.advance(),
                None => self.finish(TokenKind::LineComment),
            },
        }

        true
    }
}

fn is_space(c: u8) -> bool {
    c.is_ascii_whitespace() || c == 0x0b
}

/// Splits `source` into tokens, trivia included.
///
/// Never fails: characters no rule accepts become `TokenKind::Invalid`
/// tokens, and an unterminated string or block comment is emitted as a
/// truncated token. Both surface as errors once the parser reaches them.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize(source: &str, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);

    while lex.step() {}

    debug_assert!(lex.at_eof());
    lex.tokens
}
