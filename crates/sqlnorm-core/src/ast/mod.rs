//! Abstract Syntax Tree (AST) types for SQL statements.
//!
//! Nodes are plain data. Rendering lives in [`crate::render`].

mod expression;
mod statement;

pub use expression::{
    BinaryOp, ColumnRef, Expr, FunctionArgs, FunctionCall, InList, Literal, Numeric,
    NumericLiteral, Sign, UnaryOp,
};
pub use statement::{
    DeleteStatement, InsertStatement, JoinClause, JoinCondition, JoinKind, OrderBy,
    OrderDirection, SelectItem, SelectStatement, Statement, TableRef, UpdateAssignment,
    UpdateStatement,
};
