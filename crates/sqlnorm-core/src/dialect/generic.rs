//! Generic SQL dialect.

use super::Dialect;

/// The default dialect: back-ticks delimit identifiers, and both single
/// and double quotes delimit strings.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericDialect;

impl GenericDialect {
    /// Creates a new generic dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for GenericDialect {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn is_string_quote(&self, c: char) -> bool {
        c == '\'' || c == '"'
    }
}
