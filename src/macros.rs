//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for simple tokens
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string());
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr) => {
        Token {
            kind: $kind,
            literal: $literal,
        }
    };
}

/// Creates a default lexer handler for simple single-literal patterns.
///
/// Generates a handler that advances the cursor past the literal and emits
/// a token of the given kind.
///
/// # Example
///
/// ```ignore
/// TokenPattern {
///     regex: Regex::new("\\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $literal:literal) => {
        |lexer: &mut Lexer, _matched: &str| {
            lexer.advance_n($literal.len());
            MK_TOKEN!($kind, String::from($literal))
        }
    };
}
