use crate::{
    ast::{
        ast::StmtWrapper,
        expressions::SymbolExpr,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::ParseError,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

/// Statement dispatch over the current token kind. Anything that is not a
/// `let` or `return` is an expression statement.
pub fn parse_stmt(parser: &mut Parser) -> Result<StmtWrapper, ParseError> {
    match parser.current_token_kind() {
        TokenKind::Let => parse_let_stmt(parser),
        TokenKind::Return => parse_return_stmt(parser),
        _ => parse_expression_stmt(parser),
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<StmtWrapper, ParseError> {
    let start_token = parser.current_token().clone();

    parser.expect_peek(TokenKind::Identifier)?;
    let name_token = parser.current_token().clone();
    let name = SymbolExpr {
        value: name_token.literal.clone(),
        token: name_token,
    };

    parser.expect_peek(TokenKind::Assignment)?;

    parser.advance();
    let value = parse_expr(parser, BindingPower::Lowest)?;

    parser.expect_peek(TokenKind::Semicolon)?;

    Ok(StmtWrapper::new(LetStmt {
        token: start_token,
        name,
        value,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<StmtWrapper, ParseError> {
    let start_token = parser.current_token().clone();

    parser.advance();
    let return_value = parse_expr(parser, BindingPower::Lowest)?;

    parser.expect_peek(TokenKind::Semicolon)?;

    Ok(StmtWrapper::new(ReturnStmt {
        token: start_token,
        return_value,
    }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<StmtWrapper, ParseError> {
    let start_token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Lowest)?;

    // A trailing semicolon after a bare expression is optional.
    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Ok(StmtWrapper::new(ExpressionStmt {
        token: start_token,
        expression,
    }))
}

/// Parses a brace-delimited statement sequence. The current token must be
/// the opening `{`; on return the current token is the closing `}` (or EOF
/// for an unterminated block).
pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStmt, ParseError> {
    let start_token = parser.current_token().clone();
    let mut statements = vec![];

    parser.advance();

    while !parser.current_token_is(TokenKind::CloseCurly)
        && !parser.current_token_is(TokenKind::EOF)
    {
        statements.push(parse_stmt(parser)?);
        parser.advance();
    }

    Ok(BlockStmt {
        token: start_token,
        statements,
    })
}
