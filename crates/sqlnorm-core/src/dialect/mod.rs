//! SQL dialect support.
//!
//! Dialects only differ in how the lexer treats delimited tokens. The
//! canonical rendering is the same for every dialect.

mod ansi;
mod generic;

pub use ansi::AnsiDialect;
pub use generic::GenericDialect;

/// Trait for dialect-specific lexing behavior.
pub trait Dialect {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns true if `c` opens a delimited identifier.
    fn is_identifier_quote(&self, c: char) -> bool {
        c == '`'
    }

    /// Returns true if `c` opens a string literal.
    fn is_string_quote(&self, c: char) -> bool {
        c == '\''
    }
}
