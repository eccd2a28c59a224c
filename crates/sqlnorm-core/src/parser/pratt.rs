//! Pratt expression parser tables for operator precedence.
//!
//! From loosest to tightest: `OR`, `AND`, prefix `NOT`, comparison
//! predicates, `+ -`, `* /`, prefix sign. Arithmetic and logical
//! operators associate to the right; comparisons do not chain.

use crate::ast::{BinaryOp, Sign, UnaryOp};
use crate::lexer::{Keyword, TokenKind};

/// Binding power of comparison predicates (`=`, `LIKE`, `IN`, ...).
pub const COMPARISON_BP: u8 = 5;

/// Binding power of the right operand of a comparison predicate.
pub const COMPARISON_RHS_BP: u8 = 6;

/// Returns the prefix binding power for a token: the minimum binding
/// power its operand is parsed with.
///
/// Returns `None` if the token is not a prefix operator.
#[must_use]
pub const fn prefix_binding_power(kind: &TokenKind) -> Option<u8> {
    match kind {
        // Sign
        TokenKind::Plus | TokenKind::Minus => Some(13),
        // NOT sits between AND and the comparisons
        TokenKind::Keyword(Keyword::Not) => Some(4),
        _ => None,
    }
}

/// Returns the infix binding power for a token.
///
/// Returns `(left_bp, right_bp)` where:
/// - Higher binding power = binds tighter
/// - Left associative: left_bp < right_bp
/// - Right associative: left_bp == right_bp
///
/// Returns `None` if the token is not an infix operator. `NOT` is only
/// infix when followed by `IN`, `BETWEEN` or `LIKE`; the parser checks that.
#[must_use]
pub const fn infix_binding_power(kind: &TokenKind) -> Option<(u8, u8)> {
    match kind {
        // Logical OR (lowest precedence)
        TokenKind::Keyword(Keyword::Or) => Some((1, 1)),

        // Logical AND
        TokenKind::Keyword(Keyword::And) => Some((3, 3)),

        // Comparison predicates
        TokenKind::Eq
        | TokenKind::NotEq
        | TokenKind::Lt
        | TokenKind::LtEq
        | TokenKind::Gt
        | TokenKind::GtEq
        | TokenKind::Keyword(
            Keyword::Is | Keyword::In | Keyword::Between | Keyword::Like | Keyword::Not,
        ) => Some((COMPARISON_BP, COMPARISON_RHS_BP)),

        // Additive
        TokenKind::Plus | TokenKind::Minus => Some((9, 9)),

        // Multiplicative
        TokenKind::Star | TokenKind::Slash => Some((11, 11)),

        _ => None,
    }
}

/// Converts a token to a binary operator.
#[must_use]
pub const fn token_to_binary_op(kind: &TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Plus => Some(BinaryOp::Add),
        TokenKind::Minus => Some(BinaryOp::Sub),
        TokenKind::Star => Some(BinaryOp::Mul),
        TokenKind::Slash => Some(BinaryOp::Div),
        TokenKind::Eq => Some(BinaryOp::Eq),
        TokenKind::NotEq => Some(BinaryOp::NotEq),
        TokenKind::Lt => Some(BinaryOp::Lt),
        TokenKind::LtEq => Some(BinaryOp::LtEq),
        TokenKind::Gt => Some(BinaryOp::Gt),
        TokenKind::GtEq => Some(BinaryOp::GtEq),
        TokenKind::Keyword(Keyword::Like) => Some(BinaryOp::Like),
        TokenKind::Keyword(Keyword::And) => Some(BinaryOp::And),
        TokenKind::Keyword(Keyword::Or) => Some(BinaryOp::Or),
        _ => None,
    }
}

/// Converts a prefix token to a unary operator.
#[must_use]
pub const fn token_to_unary_op(kind: &TokenKind) -> Option<UnaryOp> {
    match kind {
        TokenKind::Plus => Some(UnaryOp::Plus),
        TokenKind::Minus => Some(UnaryOp::Neg),
        TokenKind::Keyword(Keyword::Not) => Some(UnaryOp::Not),
        _ => None,
    }
}

/// Converts a prefix token to the sign folded into a numeric literal.
#[must_use]
pub const fn token_to_sign(kind: &TokenKind) -> Option<Sign> {
    match kind {
        TokenKind::Plus => Some(Sign::Plus),
        TokenKind::Minus => Some(Sign::Minus),
        _ => None,
    }
}
