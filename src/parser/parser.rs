//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct, its token primitives and
//! the `parse` entry point. Grammar rules live in the sibling modules as
//! free functions taking `&mut Parser`.
//!
//! Every rule that can fail after consuming input opens a `Backtrack`
//! guard on entry. The guard puts the cursor back when it is dropped
//! without `commit()`, so a failed alternative leaves no trace and the
//! caller can try another production at the same offset.

use std::{
    ops::{Deref, DerefMut},
    rc::Rc,
};

use tracing::{debug, trace};

use crate::{
    ast::{
        ast::{AstIndex, AstNode},
        nodes::Program,
        store::Store,
    },
    errors::{
        diagnostics::DiagnosticSink,
        errors::{Error, ErrorImpl},
    },
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
    Position, Span, MK_TOKEN,
};

use super::decl::parse_decl;

/// Deepest recursion the grammar rules may reach before the parse is
/// abandoned with `NestingTooDeep`.
pub const MAX_NESTING_DEPTH: usize = 64;

/// The main parser structure that maintains parsing state.
///
/// This struct holds the significant tokens (trivia is filtered out on
/// construction), the cursor into them and the Store every parsed node is
/// pushed into.
pub struct Parser {
    /// Significant tokens to parse
    tokens: Vec<Token>,
    /// Index of the next unconsumed token
    pos: usize,
    /// The name of the source file being parsed
    file: Rc<String>,
    /// Returned for every read past the last token
    eof: Token,
    /// Node pools for this compilation unit
    store: Store,
    /// Current recursion depth of nested rules
    depth: usize,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Tokens as produced by the lexer, trivia included
    /// * `file` - Reference-counted string containing the source file name
    ///
    /// # Returns
    ///
    /// A new Parser instance positioned at the first significant token.
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        let end = match tokens.last() {
            Some(token) => token.span.end.clone(),
            None => Position::new(0, 1, 1, Rc::clone(&file)),
        };
        let eof = MK_TOKEN!(
            TokenKind::EOF,
            String::new(),
            Span {
                start: end.clone(),
                end,
            }
        );

        Parser {
            tokens: tokens
                .into_iter()
                .filter(|token| !token.kind.is_trivia())
                .collect(),
            pos: 0,
            file,
            eof,
            store: Store::new(),
            depth: 0,
        }
    }

    /// Returns the `n`-th upcoming token without moving the cursor.
    /// `peek_token(0)` is the current token.
    pub fn peek_token(&self, n: usize) -> &Token {
        self.tokens.get(self.pos + n).unwrap_or(&self.eof)
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.peek_token(0)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Consumes and returns the current token. Past the end this keeps
    /// returning the end-of-file sentinel.
    ///
    /// # Returns
    ///
    /// An `InvalidToken` error, without consuming anything, if the current
    /// token is invalid.
    pub fn eat_token(&mut self) -> Result<Token, Error> {
        let token = self.current_token().clone();
        match token.kind {
            TokenKind::Invalid => Err(invalid_token(&token)),
            TokenKind::EOF => Ok(token),
            _ => {
                self.pos += 1;
                Ok(token)
            }
        }
    }

    /// Consumes the current token only if it is of `kind`.
    ///
    /// # Returns
    ///
    /// Whether a token was consumed.
    pub fn eat_possible_token(&mut self, kind: TokenKind) -> bool {
        if kind != TokenKind::EOF && self.current_token_kind() == kind {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    /// * `error` - Optional custom error to return if expectation fails
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise returns an Error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            match error {
                Some(error) => Err(error),
                None => Err(self.unexpected(&describe_expected(expected_kind))),
            }
        } else {
            self.eat_token()
        }
    }

    /// Expects a token of the specified kind with default error message.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise returns a default Error.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Builds the error for the current token not being what the rule
    /// wanted. An invalid token is always reported as such.
    pub fn unexpected(&self, expected: &str) -> Error {
        let token = self.current_token();
        if token.kind == TokenKind::Invalid {
            return invalid_token(token);
        }

        Error::new(
            ErrorImpl::UnexpectedToken {
                found: token.to_string(),
                expected: expected.to_string(),
            },
            token.span.start.clone(),
        )
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Index of the next unconsumed significant token.
    pub fn cursor(&self) -> usize {
        self.pos
    }

    /// Opens a backtracking scope at the current cursor.
    pub fn backtrack(&mut self) -> Backtrack<'_> {
        Backtrack {
            saved: self.pos,
            committed: false,
            parser: self,
        }
    }

    /// Runs `rule` one nesting level deeper.
    ///
    /// # Returns
    ///
    /// A `NestingTooDeep` error at the current token, without running
    /// `rule`, once `MAX_NESTING_DEPTH` levels are open.
    pub fn nested<T>(
        &mut self,
        rule: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    pub fn push<T: AstNode>(&mut self, node: T) -> AstIndex<T> {
        self.store.push(node)
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Hands the finished Store to the caller.
    pub fn into_store(self) -> Store {
        self.store
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    pub fn file(&self) -> &Rc<String> {
        &self.file
    }
}

/// Restores the parser's cursor on drop unless `commit` was called.
pub struct Backtrack<'p> {
    parser: &'p mut Parser,
    saved: usize,
    committed: bool,
}

impl Backtrack<'_> {
    /// Keeps everything consumed since the guard was opened.
    pub fn commit(mut self) {
        self.committed = true;
    }
}

impl Deref for Backtrack<'_> {
    type Target = Parser;

    fn deref(&self) -> &Parser {
        self.parser
    }
}

impl DerefMut for Backtrack<'_> {
    fn deref_mut(&mut self) -> &mut Parser {
        self.parser
    }
}

impl Drop for Backtrack<'_> {
    fn drop(&mut self) {
        if !self.committed && self.parser.pos != self.saved {
            trace!(from = self.parser.pos, to = self.saved, "backtracking");
            self.parser.pos = self.saved;
        }
    }
}

fn invalid_token(token: &Token) -> Error {
    Error::new(
        ErrorImpl::InvalidToken {
            token: token.value.clone(),
        },
        token.span.start.clone(),
    )
}

fn describe_expected(kind: TokenKind) -> String {
    match kind {
        TokenKind::Identifier | TokenKind::Literal | TokenKind::EOF => kind.to_string(),
        _ => format!("`{}`", kind),
    }
}

/// Parses a stream of tokens into a Program.
///
/// This is the main entry point for parsing. Top-level declarations are
/// parsed until end of file. The first failure is reported to `sink` and
/// stops the parse.
///
/// # Arguments
///
/// * `tokens` - Tokens from `tokenize`, trivia included
/// * `file` - Reference-counted string containing the source file name
/// * `sink` - Receives the diagnostic if parsing fails
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (owning the Store)
/// - Result containing either the Program or the Error that stopped the parse
#[tracing::instrument(skip_all, fields(file = %file, tokens = tokens.len()))]
pub fn parse(
    tokens: Vec<Token>,
    file: Rc<String>,
    sink: &dyn DiagnosticSink,
) -> (Parser, Result<Program, Error>) {
    let mut parser = Parser::new(tokens, file);
    let mut program = Program::default();

    while parser.has_tokens() {
        match parse_decl(&mut parser) {
            Ok(decl) => program.decls.push(decl),
            Err(error) => {
                sink.report(&error);
                return (parser, Err(error));
            }
        }
    }

    debug!(decls = program.decls.len(), "parsed program");
    (parser, Ok(program))
}

/// Tokenizes `source` and parses it.
pub fn parse_source(
    source: &str,
    file: &str,
    sink: &dyn DiagnosticSink,
) -> (Parser, Result<Program, Error>) {
    let tokens = tokenize(source, Some(file.to_string()));
    parse(tokens, Rc::new(file.to_string()), sink)
}
