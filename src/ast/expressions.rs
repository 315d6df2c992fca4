use std::any::Any;
use std::fmt::Display;

use crate::lexer::tokens::Token;

use super::{
    ast::{Expr, ExprType, ExprWrapper},
    statements::BlockStmt,
};

// LITERALS

/// Symbol Expression
/// Represents an identifier in the AST. This includes function names.
#[derive(Debug, Clone)]
pub struct SymbolExpr {
    pub token: Token,
    pub value: String,
}

impl Expr for SymbolExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Symbol
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }
}

impl Display for SymbolExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Number Expression
/// Represents an integer literal in the AST.
#[derive(Debug, Clone)]
pub struct NumberExpr {
    pub token: Token,
    pub value: i64,
}

impl Expr for NumberExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Number
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }
}

impl Display for NumberExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Boolean Expression
/// Represents a `true` or `false` literal in the AST.
#[derive(Debug, Clone)]
pub struct BooleanExpr {
    pub token: Token,
    pub value: bool,
}

impl Expr for BooleanExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Boolean
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }
}

impl Display for BooleanExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

// COMPLEX

/// Prefix Expression
/// Represents a prefix operation (`!x`, `-x`) on an expression in the AST.
#[derive(Debug, Clone)]
pub struct PrefixExpr {
    pub token: Token,
    pub operator: String,
    pub right: ExprWrapper,
}

impl Expr for PrefixExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Prefix
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }
}

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}{})", self.operator, self.right)
    }
}

/// Binary Expression
/// Represents an infix operation between two expressions in the AST.
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub token: Token,
    pub left: ExprWrapper,
    pub operator: String,
    pub right: ExprWrapper,
}

impl Expr for BinaryExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Binary
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }
}

impl Display for BinaryExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

/// If Expression
/// Represents a conditional in the AST. `if` is an expression in this
/// language; the alternative block is optional.
#[derive(Debug, Clone)]
pub struct IfExpr {
    pub token: Token,
    pub condition: ExprWrapper,
    pub consequence: BlockStmt,
    pub alternative: Option<BlockStmt>,
}

impl Expr for IfExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::If
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }
}

impl Display for IfExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "if {} {}", self.condition, self.consequence)?;

        if let Some(alternative) = &self.alternative {
            write!(f, " else {}", alternative)?;
        }

        Ok(())
    }
}

/// Call Expression
/// Represents a function call in the AST.
#[derive(Debug, Clone)]
pub struct CallExpr {
    pub token: Token,
    pub function: ExprWrapper,
    pub arguments: Vec<ExprWrapper>,
}

impl Expr for CallExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Call
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }
}

impl Display for CallExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arguments = self
            .arguments
            .iter()
            .map(|argument| argument.to_string())
            .collect::<Vec<String>>();

        write!(f, "{}({})", self.function, arguments.join(", "))
    }
}
