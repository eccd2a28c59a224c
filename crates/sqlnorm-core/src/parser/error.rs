//! Parser error types.

use thiserror::Error;

use crate::lexer::{Span, Token, TokenKind};

/// The single error kind of the parser. It covers lexical failures
/// (unterminated literals, stray characters) as well as grammar
/// violations, and always points at the first offending token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at position {}..{}", span.start, span.end)]
pub struct SyntaxError {
    /// The error message.
    pub message: String,
    /// The location of the error.
    pub span: Span,
    /// Expected tokens (if applicable).
    pub expected: Option<String>,
    /// The actual token found.
    pub found: Option<TokenKind>,
    /// The offending source text, empty at end of input.
    pub lexeme: String,
}

impl SyntaxError {
    /// Creates a new syntax error.
    #[must_use]
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            expected: None,
            found: None,
            lexeme: String::new(),
        }
    }

    /// Creates an error for `token` when `expected` was required.
    ///
    /// Lexer error tokens keep their own message.
    #[must_use]
    pub fn unexpected(expected: impl Into<String>, token: &Token, source: &str) -> Self {
        let expected: String = expected.into();
        let lexeme = String::from(token.span.slice(source));
        let message = match &token.kind {
            TokenKind::Error(message) => message.clone(),
            TokenKind::Eof => format!("Unexpected end of input: expected {expected}"),
            _ => format!("Unexpected token {lexeme:?}: expected {expected}"),
        };
        Self {
            message,
            span: token.span,
            expected: Some(expected),
            found: Some(token.kind.clone()),
            lexeme,
        }
    }

    /// Attaches the offending source text.
    #[must_use]
    pub fn with_lexeme(mut self, source: &str) -> Self {
        self.lexeme = String::from(self.span.slice(source));
        self
    }
}
