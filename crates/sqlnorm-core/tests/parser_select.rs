//! Tests for SELECT statements: select list, aliases, FROM, GROUP BY,
//! HAVING, ORDER BY and LIMIT.

mod common;
use common::*;

use sqlnorm_core::ast::{Expr, OrderDirection, SelectItem, TableRef};

#[test]
fn select_list() {
    assert_understands("SELECT 1, 2");
    assert_understands("SELECT (1 + 1) AS `x`, (2 + 2) AS `y`");
    assert_understands("SELECT `id`, `name`");
    assert_understands("SELECT (`age` * 2) AS `double_age`, `first_name` AS `name`");
    assert_understands(
        "SELECT `first`, 1, NOT 0, 'a', 1 > 2, NULL, (1 AND 0), (1 <> 2 OR 'a' > 'b')",
    );
}

#[test]
fn select_wildcard_item() {
    let s = parse_select("SELECT * FROM users");
    assert_eq!(s.items, vec![SelectItem::Wildcard]);
    assert_eq!(s.from, Some(TableRef::table("users")));
}

#[test]
fn from_clause() {
    assert_understands("SELECT 1 FROM `users`");
    assert_understands("SELECT `id` FROM `users`");
    assert_understands("SELECT `users`.`id` FROM `users`");
    assert_understands("SELECT * FROM `users`");
}

#[test]
fn aliases() {
    assert_understands("SELECT 1 AS `x`");
    assert_sql("SELECT 1 AS `x`", "SELECT 1 x");

    assert_understands("SELECT (1 + 1) AS `y`");
    assert_sql("SELECT (1 + 1) AS `y`", "SELECT (1 + 1) y");

    assert_understands("SELECT * FROM `users` AS `u`");
    assert_sql("SELECT * FROM `users` AS `u`", "SELECT * FROM users u");
}

#[test]
fn alias_is_stored_unquoted() {
    let s = parse_select("SELECT id AS `the id` FROM users");
    assert_eq!(
        s.items,
        vec![SelectItem::with_alias(Expr::column("id"), "the id")]
    );
    round_trip("SELECT id AS `the id` FROM users");
}

#[test]
fn case_insensitivity() {
    assert_sql(
        "SELECT * FROM `users` WHERE `id` = 1",
        "select * from users where id = 1",
    );
    assert_eq!(
        parse("select * from users where id = 1"),
        parse("SELECT * FROM users WHERE id = 1")
    );
}

#[test]
fn current_user() {
    assert_understands("SELECT CURRENT_USER");
    assert_understands("SELECT `CURRENT_USER`");
    assert_understands("SELECT `current_user`");

    let s = parse_select("SELECT CURRENT_USER, `current_user`");
    assert_eq!(
        s.items,
        vec![
            SelectItem::new(Expr::CurrentUser),
            SelectItem::new(Expr::column("current_user")),
        ]
    );
}

#[test]
fn order_by_defaults_to_asc() {
    assert_sql(
        "SELECT * FROM `users` ORDER BY `name` ASC",
        "SELECT * FROM users ORDER BY name",
    );
    assert_sql(
        "SELECT * FROM `users` ORDER BY `users`.`name` ASC",
        "SELECT * FROM users ORDER BY users.name",
    );
    assert_understands("SELECT * FROM `users` ORDER BY `name` ASC");
    assert_understands("SELECT * FROM `users` ORDER BY `users`.`name` ASC");
    assert_understands("SELECT * FROM `users` ORDER BY `name` DESC");
    assert_understands("SELECT * FROM `users` ORDER BY `users`.`name` DESC");

    let s = parse_select("SELECT * FROM users ORDER BY name");
    assert_eq!(s.order_by[0].direction, OrderDirection::Asc);
}

#[test]
fn order_by_constant() {
    assert_sql(
        "SELECT * FROM `users` ORDER BY 1 ASC",
        "SELECT * FROM users ORDER BY 1",
    );
    assert_understands("SELECT * FROM `users` ORDER BY 1 ASC");
    assert_understands("SELECT * FROM `users` ORDER BY 1 DESC");
    assert_understands("SELECT * FROM `users` ORDER BY (1 + 1) ASC");
    assert_understands("SELECT * FROM `users` ORDER BY 'a' ASC");
}

#[test]
fn limit() {
    assert_sql(
        "SELECT * FROM `users` LIMIT 10",
        "SELECT * FROM users LIMIT 10",
    );
    assert_eq!(parse_select("SELECT * FROM users LIMIT 10").limit, Some(10));
}

#[test]
fn where_order_limit() {
    assert_understands(
        "SELECT * FROM `users` WHERE `first` = 'boom' ORDER BY `first` ASC, `last` DESC LIMIT 10",
    );
    assert_understands(
        "SELECT * FROM `users` WHERE `first` = 'boom' ORDER BY `first` DESC LIMIT 10",
    );
}

#[test]
fn having() {
    assert_understands("SELECT * FROM `users` HAVING `id` = 1");
}

#[test]
fn group_by() {
    assert_understands("SELECT * FROM `users` GROUP BY `name`");
    assert_understands("SELECT * FROM `users` GROUP BY `users`.`name`");
    assert_understands("SELECT * FROM `users` GROUP BY `name`, `id`");
    assert_understands("SELECT * FROM `users` GROUP BY `users`.`name`, `users`.`id`");
}

#[test]
fn full_clause_order() {
    assert_understands(
        "SELECT `name`, COUNT(*) AS `n` FROM `users` WHERE `age` > 18 GROUP BY `name` HAVING COUNT(*) > 1 ORDER BY `n` DESC LIMIT 5",
    );
}

#[test]
fn trailing_semicolon_is_dropped() {
    assert_sql("SELECT 1", "SELECT 1;");
}

#[test]
fn comments_are_skipped() {
    assert_sql(
        "SELECT `id` FROM `users`",
        "SELECT id -- the key\nFROM /* all */ users",
    );
}
