//! Tests for INSERT statements.

mod common;
use common::*;

use sqlnorm_core::ast::Expr;

#[test]
fn insert_values() {
    assert_sql(
        "INSERT INTO `users` VALUES ('a')",
        "INSERT INTO users VALUES ('a')",
    );
    assert_understands("INSERT INTO `users` VALUES (1, 2)");
}

#[test]
fn insert_with_columns() {
    assert_sql(
        "INSERT INTO `users` (`first`) VALUES (1)",
        "INSERT INTO users (first) VALUES (1)",
    );
    assert_understands("INSERT INTO `users` (`first`, `last`) VALUES ('a', 'b')");

    let i = parse_insert("INSERT INTO users (first, last) VALUES ('a', 'b')");
    assert_eq!(i.table, "users");
    assert_eq!(i.columns, vec!["first", "last"]);
    assert_eq!(i.rows, vec![vec![Expr::string("a"), Expr::string("b")]]);
}

#[test]
fn insert_multiple_rows() {
    assert_understands("INSERT INTO `users` (`id`) VALUES (1), (2), (NULL)");
    assert_eq!(
        parse_insert("INSERT INTO users VALUES (1), (2)").rows.len(),
        2
    );
}

#[test]
fn insert_expressions() {
    assert_understands("INSERT INTO `users` (`created_at`, `n`) VALUES (NOW(), (1 + 2))");
}

#[test]
fn insert_rejects_table_list() {
    let _ = parse_err("INSERT INTO `users`, `foo` VALUES (1)");
}

#[test]
fn insert_rejects_non_identifier_columns() {
    let err = parse_err("INSERT INTO `users` (1) VALUES (1)");
    assert_eq!(err.lexeme, "1");
    assert_eq!(err.expected.as_deref(), Some("identifier"));
}

#[test]
fn insert_requires_values() {
    let _ = parse_err("INSERT INTO users (a)");
    let _ = parse_err("INSERT INTO users VALUES");
    let _ = parse_err("INSERT INTO users VALUES ()");
}
