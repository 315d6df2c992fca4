use std::any::Any;
use std::fmt::Display;
use std::slice::Iter;

use crate::lexer::tokens::Token;

use super::{
    ast::{ExprWrapper, Stmt, StmtType, StmtWrapper},
    expressions::SymbolExpr,
};

/// Let Statement
/// Binds the value of an expression to a name: `let <name> = <value>;`.
#[derive(Debug, Clone)]
pub struct LetStmt {
    pub token: Token,
    pub name: SymbolExpr,
    pub value: ExprWrapper,
}

impl Stmt for LetStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::LetStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }
}

impl Display for LetStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} = {};", self.token.literal, self.name, self.value)
    }
}

/// Return Statement
/// Hands an expression's value back to the caller: `return <value>;`.
#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub token: Token,
    pub return_value: ExprWrapper,
}

impl Stmt for ReturnStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ReturnStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {};", self.token.literal, self.return_value)
    }
}

/// Expression Statement
/// A bare expression in statement position, e.g. `x + 10;`.
#[derive(Debug, Clone)]
pub struct ExpressionStmt {
    pub token: Token,
    pub expression: ExprWrapper,
}

impl Stmt for ExpressionStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ExpressionStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}

/// Block Statement
/// A brace-delimited sequence of statements, used by `if`/`else` bodies.
#[derive(Debug, Clone)]
pub struct BlockStmt {
    pub token: Token,
    pub statements: Vec<StmtWrapper>,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, StmtWrapper> {
        self.statements.iter()
    }
}

impl Stmt for BlockStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::BlockStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn token_literal(&self) -> String {
        self.token.literal.clone()
    }
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            write!(f, "{}", statement)?;
        }

        Ok(())
    }
}
