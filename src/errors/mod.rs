//! Error types for the front end.
//!
//! Only the parser produces errors; the lexer has no failure mode
//! (unrecognised input becomes an Illegal token instead). Parse errors are
//! diagnostics: recorded, accumulated, and surfaced after the whole parse.

pub mod errors;
