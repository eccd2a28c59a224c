//! Tests for literal parsing: numbers, approximate numbers, strings,
//! escapes, DATE and NULL.

mod common;
use common::*;

use sqlnorm_core::ast::{Expr, Literal, Numeric, SelectItem, Sign};

fn first_expr(sql: &str) -> Expr {
    match parse_select(sql).items.into_iter().next() {
        Some(SelectItem::Expr { expr, .. }) => expr,
        other => panic!("Expected expression item, got {other:?}"),
    }
}

#[test]
fn unsigned_integer() {
    assert_understands("SELECT 1");
    assert_understands("SELECT 10");
    assert_eq!(first_expr("SELECT 42"), Expr::integer(42));
}

#[test]
fn signed_integer() {
    assert_understands("SELECT +1");
    assert_understands("SELECT -1");
    assert_eq!(
        first_expr("SELECT -7"),
        Expr::number(Some(Sign::Minus), Numeric::Integer(String::from("7")))
    );
}

#[test]
fn integers_keep_all_digits() {
    assert_understands("SELECT 123456789012345678901234567890");
}

#[test]
fn unsigned_float() {
    assert_sql("SELECT 1", "SELECT 1.");
    assert_sql("SELECT 0.1", "SELECT .1");

    assert_understands("SELECT 0.1");
    assert_understands("SELECT 1.0");
    assert_understands("SELECT 1.1");
    assert_understands("SELECT 10.1");
}

#[test]
fn signed_float() {
    assert_sql("SELECT +1", "SELECT +1.");
    assert_sql("SELECT +0.1", "SELECT +.1");

    assert_understands("SELECT +0.1");
    assert_understands("SELECT +1.0");
    assert_understands("SELECT +1.1");
    assert_understands("SELECT +10.1");

    assert_sql("SELECT -1", "SELECT -1.");
    assert_sql("SELECT -0.1", "SELECT -.1");

    assert_understands("SELECT -0.1");
    assert_understands("SELECT -1.0");
    assert_understands("SELECT -1.1");
    assert_understands("SELECT -10.1");
}

#[test]
fn decimal_parts() {
    assert_eq!(
        first_expr("SELECT .5"),
        Expr::number(
            None,
            Numeric::Decimal {
                whole: String::from("0"),
                fraction: String::from("5"),
            }
        )
    );
}

#[test]
fn approximate_numeric_literal() {
    assert_understands("SELECT 1E1");
    assert_sql("SELECT 1E1", "SELECT 1e1");

    for sign in ["", "+", "-"] {
        for mantissa in ["1", "1.5"] {
            for exponent in ["1", "+1", "-1", "30", "+30", "-30"] {
                assert_understands(&format!("SELECT {sign}{mantissa}E{exponent}"));
            }
        }
    }
}

#[test]
fn approximate_numeric_is_kept_as_written() {
    assert_eq!(
        first_expr("SELECT -1.5e-30"),
        Expr::number(
            Some(Sign::Minus),
            Numeric::Approximate {
                mantissa: String::from("1.5"),
                exponent: String::from("-30"),
            }
        )
    );
}

#[test]
fn identifiers_starting_with_e() {
    assert_sql("SELECT * FROM `egg`", "SELECT * FROM egg");
    assert_sql("SELECT 1 AS `egg`", "SELECT 1egg");
}

#[test]
fn string() {
    assert_sql("SELECT 'abc'", "SELECT \"abc\"");
    assert_understands("SELECT 'abc'");
}

#[test]
fn empty_string() {
    assert_sql("SELECT ''", "SELECT \"\"");
    assert_understands("SELECT ''");
}

#[test]
fn escaped_quotes() {
    assert_sql(
        r#"SELECT 'Quote "this""', 'boom"\\ bam'"#,
        r#"SELECT "Quote ""this""\"", "boom\"\\ bam""#,
    );
    assert_sql(
        r#"SELECT 'Quote "this""', 'boom" bam'"#,
        r#"SELECT "Quote ""this""\"", "boom\" bam""#,
    );
    assert_sql("SELECT 'Quote ''this'''", "SELECT 'Quote ''this'''");
    assert_sql(r"SELECT 'Quote ''this'''''", r"SELECT 'Quote \'this\''''");
    assert_sql(r#"SELECT 'Quote "this"'"#, r#"SELECT "Quote \"this\"""#);
    assert_sql(r#"SELECT '"'"#, r#"SELECT "\"""#);
    assert_understands("SELECT 'Quote ''this!'''");
    assert_understands("SELECT ''''");
}

#[test]
fn string_value_is_unescaped() {
    assert_eq!(
        first_expr(r"SELECT 'it\'s'"),
        Expr::Literal(Literal::String(String::from("it's")))
    );
    assert_eq!(
        first_expr(r"SELECT 'a\nb'"),
        Expr::Literal(Literal::String(String::from(r"a\nb")))
    );
}

#[test]
fn backslash_single_quote_in_double_quoted_string() {
    assert_sql("SELECT 'x'''", r#"SELECT "x\'""#);
    assert_sql("SELECT 'a'' b'", r#"SELECT "a\' b""#);
    round_trip(r#"SELECT "x\'""#);
    round_trip(r#"SELECT "a\' b""#);
    round_trip(r#"SELECT "\\'""#);
}

#[test]
fn date() {
    assert_sql("SELECT DATE '2008-07-11'", "SELECT DATE \"2008-07-11\"");
    assert_understands("SELECT DATE '2008-07-11'");
    assert_eq!(
        first_expr("SELECT date '2008-07-11'"),
        Expr::Literal(Literal::Date(String::from("2008-07-11")))
    );
}

#[test]
fn null() {
    assert_understands("SELECT NULL");
    assert_sql("SELECT NULL", "SELECT null");
    assert_eq!(first_expr("SELECT NULL"), Expr::null());
}

#[test]
fn quoted_identifier() {
    assert_sql("SELECT `a`", "SELECT `a`");
    assert_sql("SELECT `a``b`", "SELECT `a``b`");
    assert_eq!(first_expr("SELECT `a``b`"), Expr::column("a`b"));
}
