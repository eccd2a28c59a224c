//! # sqlnorm-core
//!
//! A SQL parser that turns SELECT, INSERT, UPDATE and DELETE statements
//! into an AST and renders that AST back to a canonical SQL string.
//!
//! This crate provides:
//! - A hand-written lexer with dialect-dependent quoting
//! - A recursive descent parser with Pratt expression parsing
//! - A canonical renderer: two equivalent inputs normalize to the same text
//!
//! ## Normalization
//!
//! ```rust
//! use sqlnorm_core::parse;
//!
//! let statement = parse("select * from t1, t2 where not id = 1").unwrap();
//! assert_eq!(
//!     statement.to_sql(),
//!     "SELECT * FROM `t1` CROSS JOIN `t2` WHERE `id` <> 1"
//! );
//! ```
//!
//! ## Round trips
//!
//! Rendering is total and re-parsing the output yields the same AST:
//!
//! ```rust
//! use sqlnorm_core::parse;
//!
//! let first = parse("SELECT 1 + 2 * 3 - 4 / 5").unwrap();
//! let sql = first.to_sql();
//! assert_eq!(sql, "SELECT (1 + ((2 * 3) - (4 / 5)))");
//! assert_eq!(parse(&sql).unwrap(), first);
//! ```

pub mod ast;
pub mod dialect;
pub mod lexer;
pub mod parser;
pub mod render;

use tracing::{debug, trace};

pub use ast::{Expr, Statement};
pub use dialect::{AnsiDialect, Dialect, GenericDialect};
pub use lexer::{Lexer, Span, Token, TokenKind};
pub use parser::{Parser, SyntaxError};
pub use render::render;

/// Parses one SQL statement with the generic dialect.
///
/// # Errors
///
/// Returns a `SyntaxError` pointing at the first offending token.
pub fn parse(sql: &str) -> Result<Statement, SyntaxError> {
    parse_with_dialect(sql, &GenericDialect)
}

/// Parses one SQL statement with the given dialect.
///
/// # Errors
///
/// Returns a `SyntaxError` pointing at the first offending token.
pub fn parse_with_dialect(sql: &str, dialect: &dyn Dialect) -> Result<Statement, SyntaxError> {
    let result = Parser::with_dialect(sql, dialect).parse_statement();
    match &result {
        Ok(statement) => debug!(kind = statement.kind(), "accepted statement"),
        Err(err) => debug!(
            error = %err.message,
            start = err.span.start,
            end = err.span.end,
            "rejected statement"
        ),
    }
    result
}

/// Tokenizes `sql` with the given dialect. The result always ends with
/// an EOF token; lexical errors appear as [`TokenKind::Error`] tokens.
#[must_use]
pub fn tokenize(sql: &str, dialect: &dyn Dialect) -> Vec<Token> {
    let tokens = Lexer::with_dialect(sql, dialect).tokenize();
    trace!(count = tokens.len(), "tokenized input");
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_render() {
        let statement = parse("select id from users").unwrap();
        assert_eq!(render(&statement), "SELECT `id` FROM `users`");
    }

    #[test]
    fn test_dialects_differ_on_double_quotes() {
        let generic = parse("SELECT \"a\"").unwrap();
        let ansi = parse_with_dialect("SELECT \"a\"", &AnsiDialect).unwrap();
        assert_eq!(generic.to_sql(), "SELECT 'a'");
        assert_eq!(ansi.to_sql(), "SELECT `a`");
    }

    #[test]
    fn test_tokenize_ends_with_eof() {
        let tokens = tokenize("SELECT 1", &GenericDialect);
        assert_eq!(tokens.len(), 3);
        assert!(tokens[2].is_eof());
    }
}
