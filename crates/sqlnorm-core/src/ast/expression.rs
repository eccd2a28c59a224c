//! Expression AST types.

use super::SelectStatement;

/// An explicit sign written in front of a numeric literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Sign {
    /// `+`
    Plus,
    /// `-`
    Minus,
}

impl Sign {
    /// Returns the SQL representation of the sign.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
        }
    }
}

/// The unsigned part of a numeric literal. Digits are kept as written.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Numeric {
    /// Exact integer, e.g. `42`.
    Integer(String),
    /// Exact decimal, e.g. `0.5`.
    Decimal {
        /// Digits before the point.
        whole: String,
        /// Digits after the point, never empty.
        fraction: String,
    },
    /// Approximate numeric (scientific notation), e.g. `1.5E-30`.
    Approximate {
        /// Mantissa as an integer or decimal text.
        mantissa: String,
        /// Exponent digits, with the sign if one was written.
        exponent: String,
    },
}

/// A numeric literal, possibly signed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NumericLiteral {
    /// The sign, only when one was written.
    pub sign: Option<Sign>,
    /// The unsigned value.
    pub value: Numeric,
}

/// A literal value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Literal {
    /// Numeric literal.
    Number(NumericLiteral),
    /// String literal, escapes resolved.
    String(String),
    /// `DATE '...'` literal.
    Date(String),
    /// NULL literal.
    Null,
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,

    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Like,
    NotLike,

    // Logical
    And,
    Or,
}

impl BinaryOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Eq => "=",
            Self::NotEq => "<>",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
            Self::And => "AND",
            Self::Or => "OR",
        }
    }

    /// Returns true for operators whose expressions always render inside
    /// their own parentheses (arithmetic and logical operators).
    #[must_use]
    pub const fn is_grouped(&self) -> bool {
        matches!(
            self,
            Self::Add | Self::Sub | Self::Mul | Self::Div | Self::And | Self::Or
        )
    }

    /// Returns the operator that `NOT` folds into, if any.
    #[must_use]
    pub const fn negated(&self) -> Option<Self> {
        match self {
            Self::Eq => Some(Self::NotEq),
            Self::Like => Some(Self::NotLike),
            _ => None,
        }
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum UnaryOp {
    /// Unary plus on a non-literal operand.
    Plus,
    /// Negation on a non-literal operand.
    Neg,
    /// Logical NOT.
    Not,
}

impl UnaryOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Neg => "-",
            Self::Not => "NOT",
        }
    }
}

/// A possibly qualified column reference.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ColumnRef {
    /// Table name or alias (optional).
    pub table: Option<String>,
    /// Column name.
    pub name: String,
}

impl ColumnRef {
    /// Creates an unqualified column reference.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            table: None,
            name: name.into(),
        }
    }

    /// Creates a qualified column reference.
    #[must_use]
    pub fn qualified(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
            name: name.into(),
        }
    }
}

/// Arguments of a function call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FunctionArgs {
    /// `(*)`, only accepted for `COUNT`.
    Wildcard,
    /// A possibly empty argument list.
    List(Vec<Expr>),
}

/// A function call expression.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FunctionCall {
    /// The function name, upper-cased.
    pub name: String,
    /// The arguments.
    pub args: FunctionArgs,
}

/// The right-hand side of `IN`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum InList {
    /// `IN (1, 2, 3)`
    Values(Vec<Expr>),
    /// `IN (SELECT ...)`
    Subquery(Box<SelectStatement>),
}

/// An SQL expression.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Expr {
    /// A literal value.
    Literal(Literal),

    /// A column reference.
    Column(ColumnRef),

    /// The `CURRENT_USER` variable. A quoted `current_user` is a column.
    CurrentUser,

    /// A binary expression.
    Binary {
        /// Left operand.
        left: Box<Expr>,
        /// Operator.
        op: BinaryOp,
        /// Right operand.
        right: Box<Expr>,
    },

    /// A unary expression.
    Unary {
        /// Operator.
        op: UnaryOp,
        /// Operand.
        operand: Box<Expr>,
    },

    /// A function call.
    Function(FunctionCall),

    /// A scalar subquery.
    Subquery(Box<SelectStatement>),

    /// `[NOT] EXISTS (subquery)`.
    Exists {
        /// The subquery.
        subquery: Box<SelectStatement>,
        /// Whether this is NOT EXISTS.
        negated: bool,
    },

    /// IS NULL expression.
    IsNull {
        /// The expression to check.
        expr: Box<Expr>,
        /// Whether this is IS NOT NULL.
        negated: bool,
    },

    /// IN expression.
    In {
        /// The expression to check.
        expr: Box<Expr>,
        /// The list of values or subquery.
        list: InList,
        /// Whether this is NOT IN.
        negated: bool,
    },

    /// BETWEEN expression.
    Between {
        /// The expression to check.
        expr: Box<Expr>,
        /// Lower bound.
        low: Box<Expr>,
        /// Upper bound.
        high: Box<Expr>,
        /// Whether this is NOT BETWEEN.
        negated: bool,
    },

    /// Explicitly parenthesized expression.
    Nested(Box<Expr>),
}

impl Expr {
    /// Creates a new column reference.
    #[must_use]
    pub fn column(name: impl Into<String>) -> Self {
        Self::Column(ColumnRef::new(name))
    }

    /// Creates a new qualified column reference.
    #[must_use]
    pub fn qualified_column(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Column(ColumnRef::qualified(table, name))
    }

    /// Creates a new unsigned integer literal.
    #[must_use]
    pub fn integer(value: u64) -> Self {
        Self::number(None, Numeric::Integer(value.to_string()))
    }

    /// Creates a new numeric literal.
    #[must_use]
    pub const fn number(sign: Option<Sign>, value: Numeric) -> Self {
        Self::Literal(Literal::Number(NumericLiteral { sign, value }))
    }

    /// Creates a new string literal.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::Literal(Literal::String(value.into()))
    }

    /// Creates a NULL literal.
    #[must_use]
    pub const fn null() -> Self {
        Self::Literal(Literal::Null)
    }

    /// Creates a binary expression.
    #[must_use]
    pub fn binary(self, op: BinaryOp, right: Self) -> Self {
        Self::Binary {
            left: Box::new(self),
            op,
            right: Box::new(right),
        }
    }

    /// Creates an equality expression.
    #[must_use]
    pub fn eq(self, right: Self) -> Self {
        self.binary(BinaryOp::Eq, right)
    }

    /// Creates an AND expression.
    #[must_use]
    pub fn and(self, right: Self) -> Self {
        self.binary(BinaryOp::And, right)
    }

    /// Creates an OR expression.
    #[must_use]
    pub fn or(self, right: Self) -> Self {
        self.binary(BinaryOp::Or, right)
    }

    /// Creates an IS NULL expression.
    #[must_use]
    pub fn is_null(self) -> Self {
        Self::IsNull {
            expr: Box::new(self),
            negated: false,
        }
    }

    /// Creates a BETWEEN expression.
    #[must_use]
    pub fn between(self, low: Self, high: Self) -> Self {
        Self::Between {
            expr: Box::new(self),
            low: Box::new(low),
            high: Box::new(high),
            negated: false,
        }
    }

    /// Creates an IN expression over a value list.
    #[must_use]
    pub fn in_list(self, list: Vec<Self>) -> Self {
        Self::In {
            expr: Box::new(self),
            list: InList::Values(list),
            negated: false,
        }
    }

    /// Applies a leading `NOT`.
    ///
    /// Equality, `LIKE`, `IN`, `BETWEEN` and `EXISTS` absorb the negation
    /// into their own negated form; everything else is wrapped in a
    /// unary NOT.
    #[must_use]
    pub fn negate(self) -> Self {
        match self {
            Self::Binary { left, op, right } => match op.negated() {
                Some(op) => Self::Binary { left, op, right },
                None => Self::Binary { left, op, right }.wrap_not(),
            },
            Self::In {
                expr,
                list,
                negated: false,
            } => Self::In {
                expr,
                list,
                negated: true,
            },
            Self::Between {
                expr,
                low,
                high,
                negated: false,
            } => Self::Between {
                expr,
                low,
                high,
                negated: true,
            },
            Self::Exists {
                subquery,
                negated: false,
            } => Self::Exists {
                subquery,
                negated: true,
            },
            other => other.wrap_not(),
        }
    }

    fn wrap_not(self) -> Self {
        Self::Unary {
            op: UnaryOp::Not,
            operand: Box::new(self),
        }
    }

    /// Returns true if the rendered form of this expression is already
    /// enclosed in parentheses.
    #[must_use]
    pub const fn is_self_grouping(&self) -> bool {
        match self {
            Self::Binary { op, .. } => op.is_grouped(),
            Self::Subquery(_) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_op_grouping() {
        assert!(BinaryOp::Add.is_grouped());
        assert!(BinaryOp::Or.is_grouped());
        assert!(!BinaryOp::Eq.is_grouped());
        assert!(!BinaryOp::NotLike.is_grouped());
    }

    #[test]
    fn test_negate_folds_equality_and_like() {
        let expr = Expr::column("id").eq(Expr::integer(1)).negate();
        assert!(matches!(
            expr,
            Expr::Binary {
                op: BinaryOp::NotEq,
                ..
            }
        ));

        let like = Expr::column("name")
            .binary(BinaryOp::Like, Expr::string("A%"))
            .negate();
        assert!(matches!(
            like,
            Expr::Binary {
                op: BinaryOp::NotLike,
                ..
            }
        ));
    }

    #[test]
    fn test_negate_folds_predicates() {
        let in_list = Expr::column("id").in_list(vec![Expr::integer(1)]).negate();
        assert!(matches!(in_list, Expr::In { negated: true, .. }));

        let between = Expr::column("id")
            .between(Expr::integer(1), Expr::integer(3))
            .negate();
        assert!(matches!(between, Expr::Between { negated: true, .. }));
    }

    #[test]
    fn test_negate_wraps_everything_else() {
        let not_eq = Expr::column("id")
            .binary(BinaryOp::NotEq, Expr::integer(1))
            .negate();
        assert!(matches!(
            not_eq,
            Expr::Unary {
                op: UnaryOp::Not,
                ..
            }
        ));

        let twice = Expr::column("id")
            .in_list(vec![Expr::integer(1)])
            .negate()
            .negate();
        assert!(matches!(
            twice,
            Expr::Unary { op: UnaryOp::Not, operand }
                if matches!(operand.as_ref(), Expr::In { negated: true, .. })
        ));

        let literal = Expr::integer(0).negate();
        assert!(matches!(
            literal,
            Expr::Unary {
                op: UnaryOp::Not,
                ..
            }
        ));
    }

    #[test]
    fn test_self_grouping() {
        assert!(Expr::integer(1)
            .binary(BinaryOp::Add, Expr::integer(2))
            .is_self_grouping());
        assert!(!Expr::column("a").eq(Expr::integer(2)).is_self_grouping());
        assert!(!Expr::integer(1).is_self_grouping());
    }
}
