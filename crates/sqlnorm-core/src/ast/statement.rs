//! SQL statement AST types.

use super::expression::{ColumnRef, Expr};

/// Order direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum OrderDirection {
    /// Ascending order (default).
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl OrderDirection {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// An ORDER BY clause entry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OrderBy {
    /// The expression to order by.
    pub expr: Expr,
    /// The direction, ASC when none was written.
    pub direction: OrderDirection,
}

/// Join kind. The OUTER spellings are kept apart from the short ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum JoinKind {
    /// CROSS JOIN, also produced by a comma in FROM.
    Cross,
    /// INNER JOIN (or a bare JOIN).
    Inner,
    /// LEFT JOIN.
    Left,
    /// LEFT OUTER JOIN.
    LeftOuter,
    /// RIGHT JOIN.
    Right,
    /// RIGHT OUTER JOIN.
    RightOuter,
    /// FULL JOIN.
    Full,
    /// FULL OUTER JOIN.
    FullOuter,
}

impl JoinKind {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cross => "CROSS JOIN",
            Self::Inner => "INNER JOIN",
            Self::Left => "LEFT JOIN",
            Self::LeftOuter => "LEFT OUTER JOIN",
            Self::Right => "RIGHT JOIN",
            Self::RightOuter => "RIGHT OUTER JOIN",
            Self::Full => "FULL JOIN",
            Self::FullOuter => "FULL OUTER JOIN",
        }
    }

    /// Returns true if this join kind requires an ON or USING condition.
    #[must_use]
    pub const fn requires_condition(&self) -> bool {
        !matches!(self, Self::Cross)
    }
}

/// The condition of a non-CROSS join.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum JoinCondition {
    /// ON expr
    On(Expr),
    /// USING (col, ...)
    Using(Vec<String>),
}

/// A JOIN clause.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct JoinClause {
    /// The kind of join.
    pub kind: JoinKind,
    /// The table joined on the right.
    pub table: TableRef,
    /// The join condition, absent exactly for CROSS joins.
    pub condition: Option<JoinCondition>,
}

/// A table reference in a FROM clause.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TableRef {
    /// A table name.
    Table {
        /// Table name.
        name: String,
        /// Alias.
        alias: Option<String>,
    },
    /// A joined table. Chains nest to the left.
    Join {
        /// Left side of the join.
        left: Box<TableRef>,
        /// The join clause.
        join: Box<JoinClause>,
    },
}

impl TableRef {
    /// Creates a simple table reference.
    #[must_use]
    pub fn table(name: impl Into<String>) -> Self {
        Self::Table {
            name: name.into(),
            alias: None,
        }
    }

    /// Adds an alias to this table reference. On a join chain the alias
    /// goes to the right-most table.
    #[must_use]
    pub fn alias(self, alias: impl Into<String>) -> Self {
        match self {
            Self::Table { name, .. } => Self::Table {
                name,
                alias: Some(alias.into()),
            },
            Self::Join { left, mut join } => {
                join.table = join.table.alias(alias);
                Self::Join { left, join }
            }
        }
    }

    /// Joins `table` onto this reference.
    #[must_use]
    pub fn join(self, kind: JoinKind, table: Self, condition: Option<JoinCondition>) -> Self {
        Self::Join {
            left: Box::new(self),
            join: Box::new(JoinClause {
                kind,
                table,
                condition,
            }),
        }
    }
}

/// An item in a SELECT list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SelectItem {
    /// `*`
    Wildcard,
    /// An expression with an optional alias.
    Expr {
        /// The expression.
        expr: Expr,
        /// Column alias.
        alias: Option<String>,
    },
}

impl SelectItem {
    /// Creates an unaliased select item.
    #[must_use]
    pub const fn new(expr: Expr) -> Self {
        Self::Expr { expr, alias: None }
    }

    /// Creates a select item with an alias.
    #[must_use]
    pub fn with_alias(expr: Expr, alias: impl Into<String>) -> Self {
        Self::Expr {
            expr,
            alias: Some(alias.into()),
        }
    }
}

/// A SELECT statement.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SelectStatement {
    /// The projection list, never empty once parsed.
    pub items: Vec<SelectItem>,
    /// The FROM clause.
    pub from: Option<TableRef>,
    /// The WHERE clause.
    pub where_clause: Option<Expr>,
    /// GROUP BY expressions.
    pub group_by: Vec<Expr>,
    /// HAVING clause.
    pub having: Option<Expr>,
    /// ORDER BY clauses.
    pub order_by: Vec<OrderBy>,
    /// LIMIT clause.
    pub limit: Option<u64>,
}

/// An INSERT statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InsertStatement {
    /// Table name.
    pub table: String,
    /// Column names (optional).
    pub columns: Vec<String>,
    /// One or more rows of values.
    pub rows: Vec<Vec<Expr>>,
}

/// An assignment in UPDATE SET.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UpdateAssignment {
    /// Target column, possibly qualified.
    pub column: ColumnRef,
    /// Value expression.
    pub value: Expr,
}

/// An UPDATE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UpdateStatement {
    /// Target table or join chain.
    pub table: TableRef,
    /// SET assignments.
    pub assignments: Vec<UpdateAssignment>,
    /// WHERE clause.
    pub where_clause: Option<Expr>,
    /// ORDER BY clauses.
    pub order_by: Vec<OrderBy>,
    /// LIMIT clause.
    pub limit: Option<u64>,
}

/// A DELETE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DeleteStatement {
    /// Table name.
    pub table: String,
    /// WHERE clause.
    pub where_clause: Option<Expr>,
    /// ORDER BY clauses.
    pub order_by: Vec<OrderBy>,
    /// LIMIT clause.
    pub limit: Option<u64>,
}

/// A SQL statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Statement {
    /// SELECT statement.
    Select(SelectStatement),
    /// INSERT statement.
    Insert(InsertStatement),
    /// UPDATE statement.
    Update(UpdateStatement),
    /// DELETE statement.
    Delete(DeleteStatement),
}

impl Statement {
    /// Returns the leading keyword of the statement.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Select(_) => "SELECT",
            Self::Insert(_) => "INSERT",
            Self::Update(_) => "UPDATE",
            Self::Delete(_) => "DELETE",
        }
    }
}
