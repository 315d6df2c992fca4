//! Unit tests for the parser module.
//!
//! This module contains tests for parsing various language constructs
//! including:
//! - Let and return statements
//! - Prefix and infix expressions
//! - Operator precedence (via the rendered, fully parenthesized form)
//! - Conditionals and function calls
//! - Diagnostics and recovery

use crate::ast::ast::{Expr, ExprType, ExprWrapper, Program, Stmt, StmtType};
use crate::ast::expressions::{
    BinaryExpr, BooleanExpr, CallExpr, IfExpr, NumberExpr, PrefixExpr, SymbolExpr,
};
use crate::ast::statements::{ExpressionStmt, LetStmt, ReturnStmt};
use crate::lexer::lexer::Lexer;
use crate::lexer::tokens::{Token, TokenKind};

use super::parser::Parser;

fn parse_source(source: &str) -> Program {
    let lexer = Lexer::new(source.to_string());
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    check_parse_errors(&parser);
    program
}

fn check_parse_errors(parser: &Parser) {
    if parser.errors().is_empty() {
        return;
    }

    for error in parser.errors() {
        eprintln!("parser error: \"{}\"", error);
    }

    panic!("parse failed with {} error(s)", parser.errors().len());
}

#[test]
fn test_parse_let_statements() {
    let program = parse_source("let x = 5;\nlet y = 10;\nlet foobar = 838383;");

    assert_eq!(program.statements.len(), 3);

    let expected = [("x", 5), ("y", 10), ("foobar", 838383)];

    for (index, (name, value)) in expected.into_iter().enumerate() {
        let statement = &program.statements[index];
        assert_eq!(statement.token_literal(), "let");

        let let_stmt = statement
            .as_any()
            .downcast_ref::<LetStmt>()
            .expect("expected a LetStmt");
        assert_eq!(let_stmt.name.value, name);
        assert_eq!(let_stmt.name.token_literal(), name);

        let number = let_stmt
            .value
            .as_any()
            .downcast_ref::<NumberExpr>()
            .expect("expected a NumberExpr value");
        assert_eq!(number.value, value);
    }
}

#[test]
fn test_parse_let_statement_missing_assignment() {
    let lexer = Lexer::new("let x 5;".to_string());
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    assert_eq!(parser.errors().len(), 1);
    assert_eq!(
        parser.errors()[0].to_string(),
        "expected next token to be Assignment, got Number instead"
    );

    // The parser resynchronizes: the `5` is picked up as an expression
    // statement of its own.
    assert_eq!(program.statements.len(), 1);
}

#[test]
fn test_parse_return_statements() {
    let program = parse_source("return 5;\nreturn true;\nreturn foobar;");

    assert_eq!(program.statements.len(), 3);

    for statement in &program.statements {
        assert_eq!(statement.token_literal(), "return");
        assert!(statement.as_any().downcast_ref::<ReturnStmt>().is_some());
    }

    let first = program.statements[0]
        .as_any()
        .downcast_ref::<ReturnStmt>()
        .unwrap();
    assert_eq!(
        first
            .return_value
            .as_any()
            .downcast_ref::<NumberExpr>()
            .unwrap()
            .value,
        5
    );

    let second = program.statements[1]
        .as_any()
        .downcast_ref::<ReturnStmt>()
        .unwrap();
    assert!(second
        .return_value
        .as_any()
        .downcast_ref::<BooleanExpr>()
        .unwrap()
        .value);

    let third = program.statements[2]
        .as_any()
        .downcast_ref::<ReturnStmt>()
        .unwrap();
    assert_eq!(
        third
            .return_value
            .as_any()
            .downcast_ref::<SymbolExpr>()
            .unwrap()
            .value,
        "foobar"
    );
}

#[test]
fn test_parse_identifier_expression() {
    let program = parse_source("foobar;");

    assert_eq!(program.statements.len(), 1);
    assert_eq!(
        program.statements[0].get_stmt_type(),
        StmtType::ExpressionStmt
    );

    let statement = program.statements[0]
        .as_any()
        .downcast_ref::<ExpressionStmt>()
        .expect("expected an ExpressionStmt");
    assert_eq!(statement.expression.get_expr_type(), ExprType::Symbol);

    let symbol = statement
        .expression
        .as_any()
        .downcast_ref::<SymbolExpr>()
        .expect("expected a SymbolExpr");
    assert_eq!(symbol.value, "foobar");
    assert_eq!(symbol.token_literal(), "foobar");
}

#[test]
fn test_parse_number_expression() {
    let program = parse_source("5;");

    assert_eq!(program.statements.len(), 1);

    let statement = program.statements[0]
        .as_any()
        .downcast_ref::<ExpressionStmt>()
        .unwrap();

    let number = statement
        .expression
        .as_any()
        .downcast_ref::<NumberExpr>()
        .expect("expected a NumberExpr");
    assert_eq!(number.value, 5);
    assert_eq!(number.token_literal(), "5");
}

#[test]
fn test_parse_boolean_expressions() {
    let program = parse_source("true; false;");

    assert_eq!(program.statements.len(), 2);

    let expected = [true, false];

    for (index, value) in expected.into_iter().enumerate() {
        let statement = program.statements[index]
            .as_any()
            .downcast_ref::<ExpressionStmt>()
            .unwrap();

        let boolean = statement
            .expression
            .as_any()
            .downcast_ref::<BooleanExpr>()
            .expect("expected a BooleanExpr");
        assert_eq!(boolean.value, value);
    }
}

#[test]
fn test_parse_prefix_expressions() {
    let cases = [
        ("!5;", "!", "5"),
        ("-15;", "-", "15"),
        ("!foobar", "!", "foobar"),
        ("-foobar", "-", "foobar"),
        ("!true;", "!", "true"),
        ("!false;", "!", "false"),
    ];

    for (source, operator, right) in cases {
        let program = parse_source(source);
        assert_eq!(program.statements.len(), 1);

        let statement = program.statements[0]
            .as_any()
            .downcast_ref::<ExpressionStmt>()
            .unwrap();

        let prefix = statement
            .expression
            .as_any()
            .downcast_ref::<PrefixExpr>()
            .expect("expected a PrefixExpr");
        assert_eq!(prefix.operator, operator);
        assert_eq!(prefix.right.to_string(), right);
    }
}

#[test]
fn test_parse_infix_expressions() {
    let cases = [
        ("5 + 5;", "5", "+", "5"),
        ("5 - 5;", "5", "-", "5"),
        ("5 * 5;", "5", "*", "5"),
        ("5 / 5;", "5", "/", "5"),
        ("5 < 5;", "5", "<", "5"),
        ("5 > 5;", "5", ">", "5"),
        ("5 == 5;", "5", "==", "5"),
        ("5 != 5;", "5", "!=", "5"),
        ("foobar + barfoo;", "foobar", "+", "barfoo"),
        ("true == true", "true", "==", "true"),
        ("true != false", "true", "!=", "false"),
        ("false == false", "false", "==", "false"),
    ];

    for (source, left, operator, right) in cases {
        let program = parse_source(source);
        assert_eq!(program.statements.len(), 1);

        let statement = program.statements[0]
            .as_any()
            .downcast_ref::<ExpressionStmt>()
            .unwrap();

        let binary = statement
            .expression
            .as_any()
            .downcast_ref::<BinaryExpr>()
            .expect("expected a BinaryExpr");
        assert_eq!(binary.left.to_string(), left);
        assert_eq!(binary.operator, operator);
        assert_eq!(binary.right.to_string(), right);
    }
}

#[test]
fn test_operator_precedence() {
    let cases = [
        ("-a * b", "((-a) * b)"),
        ("!-a", "(!(-a))"),
        ("a + b + c", "((a + b) + c)"),
        ("a + b - c", "((a + b) - c)"),
        ("a * b * c", "((a * b) * c)"),
        ("a * b / c", "((a * b) / c)"),
        ("a + b / c", "(a + (b / c))"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
        ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
        ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
        ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
        (
            "3 + 4 * 5 == 3 * 1 + 4 * 5",
            "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))",
        ),
        ("true", "true"),
        ("false", "false"),
        ("3 > 5 == false", "((3 > 5) == false)"),
        ("3 < 5 == true", "((3 < 5) == true)"),
        ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
        ("(5 + 5) * 2", "((5 + 5) * 2)"),
        ("2 / (5 + 5)", "(2 / (5 + 5))"),
        ("(5 + 5) * 2 * (5 + 5)", "(((5 + 5) * 2) * (5 + 5))"),
        ("-(5 + 5)", "(-(5 + 5))"),
        ("!(true == true)", "(!(true == true))"),
        ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
        (
            "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
            "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))",
        ),
        ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))"),
    ];

    for (source, expected) in cases {
        let program = parse_source(source);
        assert_eq!(program.to_string(), expected, "source: {}", source);
    }
}

#[test]
fn test_parse_if_expression() {
    let program = parse_source("if (x < y) { x }");

    assert_eq!(program.statements.len(), 1);

    let statement = program.statements[0]
        .as_any()
        .downcast_ref::<ExpressionStmt>()
        .unwrap();

    let if_expr = statement
        .expression
        .as_any()
        .downcast_ref::<IfExpr>()
        .expect("expected an IfExpr");
    assert_eq!(if_expr.condition.to_string(), "(x < y)");
    assert_eq!(if_expr.consequence.iter().count(), 1);

    let consequence = if_expr.consequence.statements[0]
        .as_any()
        .downcast_ref::<ExpressionStmt>()
        .unwrap();
    assert_eq!(consequence.expression.to_string(), "x");

    assert!(if_expr.alternative.is_none());
}

#[test]
fn test_parse_if_else_expression() {
    let program = parse_source("if (x < y) { x } else { y }");

    let statement = program.statements[0]
        .as_any()
        .downcast_ref::<ExpressionStmt>()
        .unwrap();

    let if_expr = statement
        .expression
        .as_any()
        .downcast_ref::<IfExpr>()
        .unwrap();

    let alternative = if_expr
        .alternative
        .as_ref()
        .expect("expected an alternative block");
    assert_eq!(alternative.statements.len(), 1);
    assert_eq!(alternative.statements[0].to_string(), "y");
}

#[test]
fn test_parse_if_expression_missing_paren() {
    let lexer = Lexer::new("if x < y { x }".to_string());
    let mut parser = Parser::new(lexer);
    parser.parse_program();

    assert!(!parser.errors().is_empty());
    assert_eq!(
        parser.errors()[0].to_string(),
        "expected next token to be OpenParen, got Identifier instead"
    );
}

#[test]
fn test_parse_call_expression() {
    let program = parse_source("add(1, 2 * 3, 4 + 5);");

    assert_eq!(program.statements.len(), 1);

    let statement = program.statements[0]
        .as_any()
        .downcast_ref::<ExpressionStmt>()
        .unwrap();

    let call = statement
        .expression
        .as_any()
        .downcast_ref::<CallExpr>()
        .expect("expected a CallExpr");
    assert_eq!(call.function.to_string(), "add");
    assert_eq!(call.arguments.len(), 3);
    assert_eq!(call.arguments[0].to_string(), "1");
    assert_eq!(call.arguments[1].to_string(), "(2 * 3)");
    assert_eq!(call.arguments[2].to_string(), "(4 + 5)");
}

#[test]
fn test_parse_call_expression_no_arguments() {
    let program = parse_source("add();");

    let statement = program.statements[0]
        .as_any()
        .downcast_ref::<ExpressionStmt>()
        .unwrap();

    let call = statement
        .expression
        .as_any()
        .downcast_ref::<CallExpr>()
        .unwrap();
    assert!(call.arguments.is_empty());
}

#[test]
fn test_no_prefix_parse_function() {
    let lexer = Lexer::new("+5;".to_string());
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    assert_eq!(parser.errors().len(), 1);
    assert_eq!(
        parser.errors()[0].to_string(),
        "no prefix parse function for Plus found"
    );

    // The `5` after the stray operator still parses.
    assert_eq!(program.statements.len(), 1);
}

#[test]
fn test_parse_number_out_of_range() {
    let lexer = Lexer::new("9999999999999999999999".to_string());
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    assert_eq!(parser.errors().len(), 1);
    assert_eq!(
        parser.errors()[0].to_string(),
        "could not parse \"9999999999999999999999\" as integer"
    );
    assert!(program.statements.is_empty());
}

#[test]
fn test_diagnostics_accumulate_across_statements() {
    let lexer = Lexer::new("let x 5; let y 10;".to_string());
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    // One diagnostic per malformed statement; both recovered literals are
    // still collected.
    assert_eq!(parser.errors().len(), 2);
    for error in parser.errors() {
        assert_eq!(error.error_name(), "UnexpectedToken");
    }
    assert_eq!(program.statements.len(), 2);
}

#[test]
fn test_program_display() {
    let program = parse_source("let x = 5;");
    assert_eq!(program.to_string(), "let x = 5;");
}

#[test]
fn test_display_of_hand_built_statement() {
    let statement = LetStmt {
        token: Token {
            kind: TokenKind::Let,
            literal: "let".to_string(),
        },
        name: SymbolExpr {
            token: Token {
                kind: TokenKind::Identifier,
                literal: "myVar".to_string(),
            },
            value: "myVar".to_string(),
        },
        value: ExprWrapper::new(SymbolExpr {
            token: Token {
                kind: TokenKind::Identifier,
                literal: "anotherVar".to_string(),
            },
            value: "anotherVar".to_string(),
        }),
    };

    assert_eq!(statement.to_string(), "let myVar = anotherVar;");
}

#[test]
fn test_program_token_literal() {
    let program = parse_source("let x = 5;");
    assert_eq!(program.token_literal(), "let");

    let empty = parse_source("");
    assert_eq!(empty.token_literal(), "");
}
