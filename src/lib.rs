#![allow(clippy::module_inception)]

//! Front end for a small C-like expression language.
//!
//! Two stages: a lexer that turns raw source text into a stream of typed
//! tokens on demand, and a Pratt parser that turns that stream into an AST
//! of statements and expressions. The parser accumulates diagnostics instead
//! of aborting, so one malformed construct does not hide errors in later
//! statements.

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;
