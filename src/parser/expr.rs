use crate::{
    ast::{
        ast::ExprWrapper,
        expressions::{
            BinaryExpr, BooleanExpr, CallExpr, IfExpr, NumberExpr, PrefixExpr, SymbolExpr,
        },
    },
    errors::errors::ParseError,
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{led_handler, nud_handler, BindingPower},
    parser::Parser,
    stmt::parse_block_stmt,
};

/// The precedence climb. Parses the NUD of the current token, then keeps
/// folding infix operators into the left-hand side for as long as the peek
/// token binds tighter than the caller's threshold.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<ExprWrapper, ParseError> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = match nud_handler(token_kind) {
        Some(handler) => handler,
        None => return Err(ParseError::NoPrefixHandler { kind: token_kind }),
    };

    let mut left = nud(parser)?;

    while !parser.peek_token_is(TokenKind::Semicolon) && parser.peek_binding_power() > bp {
        let led = match led_handler(parser.peek_token_kind()) {
            Some(handler) => handler,
            None => return Ok(left),
        };
        let operator_bp = parser.peek_binding_power();

        parser.advance();
        left = led(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_symbol_expr(parser: &mut Parser) -> Result<ExprWrapper, ParseError> {
    let token = parser.current_token().clone();

    Ok(ExprWrapper::new(SymbolExpr {
        value: token.literal.clone(),
        token,
    }))
}

pub fn parse_number_expr(parser: &mut Parser) -> Result<ExprWrapper, ParseError> {
    let token = parser.current_token().clone();

    // The lexer only emits digit-only literals here, so the sole failure
    // mode of the conversion is an out-of-range value.
    let value = match token.literal.parse::<i64>() {
        Ok(value) => value,
        Err(_) => {
            return Err(ParseError::IntegerOutOfRange {
                literal: token.literal.clone(),
            })
        }
    };

    Ok(ExprWrapper::new(NumberExpr { token, value }))
}

pub fn parse_boolean_expr(parser: &mut Parser) -> Result<ExprWrapper, ParseError> {
    let token = parser.current_token().clone();
    let value = token.kind == TokenKind::True;

    Ok(ExprWrapper::new(BooleanExpr { token, value }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<ExprWrapper, ParseError> {
    let operator_token = parser.current_token().clone();

    parser.advance();
    let right = parse_expr(parser, BindingPower::Prefix)?;

    Ok(ExprWrapper::new(PrefixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        right,
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<ExprWrapper, ParseError> {
    parser.advance();
    let expression = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(expression)
}

/// `if (<condition>) { <consequence> }` with an optional
/// `else { <alternative> }`. Every delimiter is mandatory.
pub fn parse_if_expr(parser: &mut Parser) -> Result<ExprWrapper, ParseError> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    parser.advance();
    let condition = parse_expr(parser, BindingPower::Lowest)?;

    parser.expect_peek(TokenKind::CloseParen)?;
    parser.expect_peek(TokenKind::OpenCurly)?;
    let consequence = parse_block_stmt(parser)?;

    let alternative = if parser.peek_token_is(TokenKind::Else) {
        parser.advance();
        parser.expect_peek(TokenKind::OpenCurly)?;
        Some(parse_block_stmt(parser)?)
    } else {
        None
    };

    Ok(ExprWrapper::new(IfExpr {
        token,
        condition,
        consequence,
        alternative,
    }))
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    bp: BindingPower,
) -> Result<ExprWrapper, ParseError> {
    let operator_token = parser.current_token().clone();

    // Recursing at the operator's own binding power keeps same-precedence
    // chains left-associative.
    parser.advance();
    let right = parse_expr(parser, bp)?;

    Ok(ExprWrapper::new(BinaryExpr {
        left,
        operator: operator_token.literal.clone(),
        token: operator_token,
        right,
    }))
}

pub fn parse_call_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    _bp: BindingPower,
) -> Result<ExprWrapper, ParseError> {
    let token = parser.current_token().clone();
    let arguments = parse_call_arguments(parser)?;

    Ok(ExprWrapper::new(CallExpr {
        token,
        function: left,
        arguments,
    }))
}

fn parse_call_arguments(parser: &mut Parser) -> Result<Vec<ExprWrapper>, ParseError> {
    let mut arguments = vec![];

    if parser.peek_token_is(TokenKind::CloseParen) {
        parser.advance();
        return Ok(arguments);
    }

    parser.advance();
    arguments.push(parse_expr(parser, BindingPower::Lowest)?);

    while parser.peek_token_is(TokenKind::Comma) {
        parser.advance();
        parser.advance();
        arguments.push(parse_expr(parser, BindingPower::Lowest)?);
    }

    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(arguments)
}
