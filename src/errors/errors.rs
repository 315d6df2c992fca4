use thiserror::Error;

use crate::lexer::tokens::TokenKind;

/// Parse diagnostics.
///
/// All variants are non-fatal: the parser records them and keeps going, so a
/// single pass over malformed input surfaces every independent error. The
/// `Display` text of each variant is the message handed back to callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },
    #[error("no prefix parse function for {kind} found")]
    NoPrefixHandler { kind: TokenKind },
    #[error("could not parse {literal:?} as integer")]
    IntegerOutOfRange { literal: String },
}

impl ParseError {
    pub fn error_name(&self) -> &str {
        match self {
            ParseError::UnexpectedToken { .. } => "UnexpectedToken",
            ParseError::NoPrefixHandler { .. } => "NoPrefixHandler",
            ParseError::IntegerOutOfRange { .. } => "IntegerOutOfRange",
        }
    }
}
