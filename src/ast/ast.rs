use std::{
    any::Any,
    fmt::{Debug, Display},
    ops::Deref,
};

/// Statement Types
#[derive(PartialEq, Clone, Debug)]
pub enum StmtType {
    LetStmt,
    ReturnStmt,
    ExpressionStmt,
    BlockStmt,
}

/// Statement Trait
///
/// Defines the behavior of all statement types in the AST. Every statement
/// renders itself through `Display`; the rendered text is the crate's only
/// wire format.
pub trait Stmt: Debug + Display {
    /// Returns the type of the statement.
    fn get_stmt_type(&self) -> StmtType;
    /// Type conversion purposes - used with `.downcast_ref::<T>()`
    fn as_any(&self) -> &dyn Any;
    /// Clones the statement into a StmtWrapper.
    /// Clone cannot be derived for trait objects, so this method is necessary.
    fn clone_wrapper(&self) -> StmtWrapper;
    /// Returns the literal of the token that selected this statement's
    /// grammar rule.
    fn token_literal(&self) -> String;
}

/// Statement Wrapper
///
/// A wrapper that allows for any statement kind to be stored with helper methods
#[derive(Debug)]
pub struct StmtWrapper(Box<dyn Stmt>);

impl StmtWrapper {
    pub fn new<T: Stmt + 'static>(stmt: T) -> Self {
        StmtWrapper(Box::new(stmt))
    }
}

impl Deref for StmtWrapper {
    type Target = Box<dyn Stmt>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Stmt for StmtWrapper {
    fn get_stmt_type(&self) -> StmtType {
        self.0.get_stmt_type()
    }
    fn as_any(&self) -> &dyn Any {
        self.0.as_any()
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        self.0.clone_wrapper()
    }
    fn token_literal(&self) -> String {
        self.0.token_literal()
    }
}

impl Clone for StmtWrapper {
    fn clone(&self) -> Self {
        self.clone_wrapper()
    }
}

impl Display for StmtWrapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Expression Types
///
/// Defines the various kinds of expressions in the AST.
#[derive(PartialEq, Clone, Debug)]
pub enum ExprType {
    Symbol,
    Number,
    Boolean,
    Prefix,
    Binary,
    If,
    Call,
}

pub trait Expr: Debug + Display {
    /// Returns the expression type of the expression.
    fn get_expr_type(&self) -> ExprType;
    /// Type conversion purposes - used with `.downcast_ref::<T>()`
    fn as_any(&self) -> &dyn Any;
    /// Clones the expression into an ExprWrapper.
    /// Clone cannot be derived for trait objects, so this method is necessary.
    fn clone_wrapper(&self) -> ExprWrapper;
    /// Returns the literal of the token that selected this expression's
    /// grammar rule.
    fn token_literal(&self) -> String;
}

/// Expression Wrapper
///
/// A wrapper that allows for any expression kind to be stored with helper methods
#[derive(Debug)]
pub struct ExprWrapper(Box<dyn Expr>);

impl ExprWrapper {
    pub fn new<T: Expr + 'static>(expression: T) -> Self {
        ExprWrapper(Box::new(expression))
    }
}

impl Deref for ExprWrapper {
    type Target = Box<dyn Expr>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Expr for ExprWrapper {
    fn get_expr_type(&self) -> ExprType {
        self.0.get_expr_type()
    }
    fn as_any(&self) -> &dyn Any {
        self.0.as_any()
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        self.0.clone_wrapper()
    }
    fn token_literal(&self) -> String {
        self.0.token_literal()
    }
}

impl Clone for ExprWrapper {
    fn clone(&self) -> Self {
        self.clone_wrapper()
    }
}

impl Display for ExprWrapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Program
///
/// The root of the AST: the ordered sequence of top-level statements, in
/// source order.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub statements: Vec<StmtWrapper>,
}

impl Program {
    pub fn token_literal(&self) -> String {
        match self.statements.first() {
            Some(statement) => statement.token_literal(),
            None => String::new(),
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            write!(f, "{}", statement)?;
        }

        Ok(())
    }
}
