//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct. The parser uses a Pratt
//! parser approach with NUD/LED handlers for expression parsing and
//! specialized functions for statement parsing; the handler dispatch lives
//! in `lookups` as exhaustive matches over the token kinds.
//!
//! Errors never abort a parse. Each malformed statement records one
//! diagnostic and the parser resynchronizes on the next token, so a single
//! pass surfaces as many independent errors as possible.

use crate::{
    ast::ast::Program,
    errors::errors::ParseError,
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    MK_TOKEN,
};

use super::{
    lookups::{binding_power, BindingPower},
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// Owns the lexer and a two-token lookahead window (`current`, `peek`), and
/// accumulates diagnostics across one whole `parse_program` call.
pub struct Parser {
    /// The token source
    lexer: Lexer,
    /// The token currently being parsed
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Diagnostics recorded so far, in source order
    errors: Vec<ParseError>,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Self {
        let mut parser = Parser {
            lexer,
            current: MK_TOKEN!(TokenKind::EOF, String::new()),
            peek: MK_TOKEN!(TokenKind::EOF, String::new()),
            errors: vec![],
        };

        // Prime both lookahead slots.
        parser.advance();
        parser.advance();

        parser
    }

    /// Shifts `peek` into `current` and pulls a fresh token from the lexer.
    pub fn advance(&mut self) {
        self.current = std::mem::replace(&mut self.peek, self.lexer.next_token());
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Returns the kind of the peek token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Binding power of the peek token; Lowest when it cannot continue an
    /// expression.
    pub fn peek_binding_power(&self) -> BindingPower {
        binding_power(self.peek.kind)
    }

    /// Expects the peek token to be of the specified kind and advances onto
    /// it on success.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<(), ParseError> {
        if self.peek_token_is(expected_kind) {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken {
                expected: expected_kind,
                found: self.peek.kind,
            })
        }
    }

    /// Diagnostics accumulated during `parse_program`. An empty slice means
    /// a clean parse; callers must check this even when a Program came back.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Parses statements until end-of-input, collecting the successful ones
    /// in source order. A failed statement records its diagnostic instead;
    /// the loop always advances, so malformed input cannot stall the parse.
    pub fn parse_program(&mut self) -> Program {
        let mut statements = vec![];

        while !self.current_token_is(TokenKind::EOF) {
            match parse_stmt(self) {
                Ok(statement) => statements.push(statement),
                Err(error) => self.errors.push(error),
            }

            self.advance();
        }

        Program { statements }
    }
}
