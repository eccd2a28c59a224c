//! Tests for parser error cases.

mod common;
use common::*;

use sqlnorm_core::{Span, TokenKind};

#[test]
fn error_invalid_keyword_fusion() {
    let err = parse_err("SELECT1");
    assert_eq!(err.lexeme, "SELECT1");
    assert_eq!(err.span, Span::new(0, 7));
}

#[test]
fn error_empty_input() {
    let err = parse_err("");
    assert_eq!(err.found, Some(TokenKind::Eof));
    assert!(err.lexeme.is_empty());
}

#[test]
fn error_incomplete_select() {
    let err = parse_err("SELECT");
    assert!(err.message.starts_with("Unexpected end of input"));
}

#[test]
fn error_missing_from_table() {
    let _ = parse_err("SELECT * FROM");
}

#[test]
fn error_unexpected_keyword() {
    let _ = parse_err("TRUNCATE users");
}

#[test]
fn error_unclosed_paren() {
    let _ = parse_err("SELECT (1 + 2");
}

#[test]
fn error_join_without_on_or_using() {
    let err = parse_err("SELECT * FROM a INNER JOIN b WHERE a.id = 1");
    assert_eq!(err.lexeme, "WHERE");
    assert_eq!(err.expected.as_deref(), Some("ON or USING"));
}

#[test]
fn error_trailing_tokens() {
    let err = parse_err("SELECT 1 FROM users users2 users3");
    assert_eq!(err.lexeme, "users3");
    let _ = parse_err("SELECT 1;;");
}

#[test]
fn error_chained_comparison() {
    let err = parse_err("SELECT * FROM t WHERE a = b = c");
    assert!(err.message.contains("chained"));
    let _ = parse_err("SELECT 1 < 2 > 3");
    let _ = parse_err("SELECT a IS NULL = 1");
}

#[test]
fn error_not_as_operand() {
    let _ = parse_err("SELECT 1 = NOT 0");
    let _ = parse_err("SELECT 1 + NOT 0");
    let _ = parse_err("SELECT a NOT = 1");
}

#[test]
fn error_star_outside_count() {
    let _ = parse_err("SELECT SUM(*)");
    let _ = parse_err("SELECT 1 + *");
    let _ = parse_err("SELECT COUNT(*, 1)");
}

#[test]
fn error_unterminated_string() {
    let err = parse_err("SELECT 'abc");
    assert_eq!(err.message, "Unterminated string literal");
    assert_eq!(err.lexeme, "'abc");
}

#[test]
fn error_unterminated_quoted_identifier() {
    let err = parse_err("SELECT `abc");
    assert_eq!(err.message, "Unterminated quoted identifier");
}

#[test]
fn error_unexpected_character() {
    let err = parse_err("SELECT 1 # 2");
    assert_eq!(err.span, Span::new(9, 10));
    assert_eq!(err.lexeme, "#");
}

#[test]
fn error_limit_requires_integer() {
    let _ = parse_err("SELECT * FROM t LIMIT 'a'");
    let _ = parse_err("SELECT * FROM t LIMIT 1.5");
    let _ = parse_err("SELECT * FROM t LIMIT -1");
}

#[test]
fn error_display_includes_position() {
    let err = parse_err("SELECT * FROM");
    assert_eq!(
        err.to_string(),
        "Unexpected end of input: expected identifier at position 13..13"
    );
}

#[test]
fn error_date_requires_string() {
    let _ = parse_err("SELECT DATE 1");
}

#[test]
fn error_nesting_too_deep() {
    let sql = format!("SELECT {}1{}", "(".repeat(1000), ")".repeat(1000));
    let err = parse_err(&sql);
    assert_eq!(err.message, "Expression nested too deeply");

    let sql = format!("SELECT {}a", "- ".repeat(1000));
    assert_eq!(parse_err(&sql).message, "Expression nested too deeply");

    let sql = format!(
        "SELECT 1 FROM t WHERE {}1{}",
        "EXISTS (SELECT 1 FROM t WHERE ".repeat(300),
        ")".repeat(300)
    );
    assert_eq!(parse_err(&sql).message, "Expression nested too deeply");
}

#[test]
fn moderate_nesting_is_accepted() {
    let sql = format!("SELECT {}1{}", "(".repeat(100), ")".repeat(100));
    round_trip(&sql);
}
