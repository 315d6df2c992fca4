use lazy_static::lazy_static;
use regex::Regex;

use crate::{MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type TokenHandler = fn(&mut Lexer, &str) -> Token;

pub struct TokenPattern {
    regex: Regex,
    handler: TokenHandler,
}

lazy_static! {
    // Order matters: two-character operators must be tried before their
    // one-character prefixes.
    static ref TOKEN_PATTERNS: Vec<TokenPattern> = vec![
        TokenPattern { regex: Regex::new("[a-zA-Z_]+").unwrap(), handler: symbol_handler },
        TokenPattern { regex: Regex::new("[0-9]+").unwrap(), handler: number_handler },
        TokenPattern { regex: Regex::new("[ \t\r\n]+").unwrap(), handler: skip_handler },
        TokenPattern { regex: Regex::new("==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==") },
        TokenPattern { regex: Regex::new("!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=") },
        TokenPattern { regex: Regex::new("=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
        TokenPattern { regex: Regex::new("!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Not, "!") },
        TokenPattern { regex: Regex::new("\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        TokenPattern { regex: Regex::new("-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        TokenPattern { regex: Regex::new("\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
        TokenPattern { regex: Regex::new("/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        TokenPattern { regex: Regex::new("<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
        TokenPattern { regex: Regex::new(">").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
        TokenPattern { regex: Regex::new(",").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        TokenPattern { regex: Regex::new(";").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        TokenPattern { regex: Regex::new("\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        TokenPattern { regex: Regex::new("\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        TokenPattern { regex: Regex::new("\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
        TokenPattern { regex: Regex::new("\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
    ];
}

pub struct Lexer {
    source: String,
    pos: usize,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        Lexer { source, pos: 0 }
    }

    /// Produces the next token. Callable repeatedly: once the input is
    /// exhausted, every further call returns an EOF token.
    pub fn next_token(&mut self) -> Token {
        if self.at_eof() {
            return MK_TOKEN!(TokenKind::EOF, String::new());
        }

        let mut found: Option<(TokenHandler, String)> = None;

        for pattern in TOKEN_PATTERNS.iter() {
            if let Some(matched) = pattern.regex.find(self.remainder()) {
                if matched.start() == 0 {
                    found = Some((pattern.handler, matched.as_str().to_string()));
                    break;
                }
            }
        }

        if let Some((handler, matched)) = found {
            return handler(self, &matched);
        }

        // Unrecognised input never aborts scanning; it surfaces as an
        // Illegal token carrying the offending character.
        let offending = self.remainder().chars().next().unwrap();
        self.advance_n(offending.len_utf8());
        MK_TOKEN!(TokenKind::Illegal, offending.to_string())
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Token {
    lexer.advance_n(matched.len());

    if let Some(kind) = RESERVED_LOOKUP.get(matched) {
        MK_TOKEN!(*kind, String::from(matched))
    } else {
        MK_TOKEN!(TokenKind::Identifier, String::from(matched))
    }
}

fn number_handler(lexer: &mut Lexer, matched: &str) -> Token {
    lexer.advance_n(matched.len());
    MK_TOKEN!(TokenKind::Number, String::from(matched))
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Token {
    lexer.advance_n(matched.len());
    lexer.next_token()
}
