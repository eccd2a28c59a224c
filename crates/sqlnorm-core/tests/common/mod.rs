#![allow(dead_code)]

use sqlnorm_core::ast::{
    DeleteStatement, InsertStatement, SelectStatement, Statement, UpdateStatement,
};
use sqlnorm_core::{Parser, SyntaxError};

pub fn parse(sql: &str) -> Statement {
    Parser::new(sql)
        .parse_statement()
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e}"))
}

pub fn parse_err(sql: &str) -> SyntaxError {
    Parser::new(sql)
        .parse_statement()
        .expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn parse_select(sql: &str) -> SelectStatement {
    match parse(sql) {
        Statement::Select(s) => s,
        other => panic!("Expected SELECT, got {other:?}"),
    }
}

pub fn parse_insert(sql: &str) -> InsertStatement {
    match parse(sql) {
        Statement::Insert(i) => i,
        other => panic!("Expected INSERT, got {other:?}"),
    }
}

pub fn parse_update(sql: &str) -> UpdateStatement {
    match parse(sql) {
        Statement::Update(u) => u,
        other => panic!("Expected UPDATE, got {other:?}"),
    }
}

pub fn parse_delete(sql: &str) -> DeleteStatement {
    match parse(sql) {
        Statement::Delete(d) => d,
        other => panic!("Expected DELETE, got {other:?}"),
    }
}

/// Asserts that `given` normalizes to `expected`, and that the
/// normalized text parses back to the same AST.
pub fn assert_sql(expected: &str, given: &str) {
    let ast = parse(given);
    let rendered = ast.to_sql();
    assert_eq!(expected, rendered, "Wrong canonical form for: {given}");
    round_trip(given);
}

/// Asserts that `sql` is already in canonical form.
pub fn assert_understands(sql: &str) {
    assert_sql(sql, sql);
}

/// Verifies that rendering is a fixed point: parse(sql).to_sql() parses
/// to a structurally equal AST and renders to the same string again.
pub fn round_trip(sql: &str) {
    let ast1 = parse(sql);
    let rendered1 = ast1.to_sql();
    let ast2 = parse(&rendered1);
    let rendered2 = ast2.to_sql();
    assert_eq!(
        ast1, ast2,
        "Round-trip changed the AST.\n  Input:    {sql}\n  Rendered: {rendered1}"
    );
    assert_eq!(
        rendered1, rendered2,
        "Round-trip failed.\n  Input:    {sql}\n  First:    {rendered1}\n  Second:   {rendered2}"
    );
}
