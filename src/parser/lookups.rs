use crate::{ast::ast::ExprWrapper, errors::errors::ParseError, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

/// Binding powers for the precedence climb, weakest first. The derived
/// `PartialOrd` gives the comparison the climb loop relies on.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

pub type NudHandler = fn(&mut Parser) -> Result<ExprWrapper, ParseError>;
pub type LedHandler = fn(&mut Parser, ExprWrapper, BindingPower) -> Result<ExprWrapper, ParseError>;

/// Infix binding power of a token kind. Kinds that cannot continue an
/// expression sit at Lowest, which never wins against the climb threshold.
pub fn binding_power(kind: TokenKind) -> BindingPower {
    match kind {
        TokenKind::Equals | TokenKind::NotEquals => BindingPower::Equals,
        TokenKind::Less | TokenKind::Greater => BindingPower::LessGreater,
        TokenKind::Plus | TokenKind::Dash => BindingPower::Sum,
        TokenKind::Star | TokenKind::Slash => BindingPower::Product,
        TokenKind::OpenParen => BindingPower::Call,
        _ => BindingPower::Lowest,
    }
}

/// NUD (null denotation) dispatch: which parse function starts an expression
/// for a given token kind.
pub fn nud_handler(kind: TokenKind) -> Option<NudHandler> {
    match kind {
        TokenKind::Identifier => Some(parse_symbol_expr),
        TokenKind::Number => Some(parse_number_expr),
        TokenKind::True | TokenKind::False => Some(parse_boolean_expr),
        TokenKind::Not | TokenKind::Dash => Some(parse_prefix_expr),
        TokenKind::OpenParen => Some(parse_grouping_expr),
        TokenKind::If => Some(parse_if_expr),
        _ => None,
    }
}

/// LED (left denotation) dispatch: which parse function continues an
/// expression when a given token kind follows a left operand.
pub fn led_handler(kind: TokenKind) -> Option<LedHandler> {
    match kind {
        TokenKind::Plus
        | TokenKind::Dash
        | TokenKind::Star
        | TokenKind::Slash
        | TokenKind::Equals
        | TokenKind::NotEquals
        | TokenKind::Less
        | TokenKind::Greater => Some(parse_binary_expr),
        TokenKind::OpenParen => Some(parse_call_expr),
        _ => None,
    }
}
