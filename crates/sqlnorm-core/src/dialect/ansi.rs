//! ANSI SQL dialect.

use super::Dialect;

/// Standard SQL quoting: double quotes (and back-ticks) delimit
/// identifiers, only single quotes delimit strings.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiDialect;

impl AnsiDialect {
    /// Creates a new ANSI dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for AnsiDialect {
    fn name(&self) -> &'static str {
        "ansi"
    }

    fn is_identifier_quote(&self, c: char) -> bool {
        c == '"' || c == '`'
    }
}
