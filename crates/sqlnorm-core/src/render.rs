//! Canonical SQL rendering.
//!
//! Every AST node implements [`fmt::Display`] and writes its canonical
//! form: upper-case keywords, back-quoted identifiers, single-quoted
//! strings, arithmetic and logical operations in their own parentheses,
//! and an explicit direction on every ORDER BY item.

use core::fmt;

use crate::ast::{
    BinaryOp, ColumnRef, DeleteStatement, Expr, FunctionArgs, FunctionCall, InList,
    InsertStatement, JoinClause, JoinCondition, Literal, Numeric, NumericLiteral, OrderBy,
    SelectItem, SelectStatement, Statement, TableRef, UnaryOp, UpdateAssignment, UpdateStatement,
};

/// Renders a statement to its canonical SQL text.
#[must_use]
pub fn render(statement: &Statement) -> String {
    statement.to_string()
}

impl Statement {
    /// Returns the canonical SQL text of this statement.
    #[must_use]
    pub fn to_sql(&self) -> String {
        self.to_string()
    }
}

/// Writes an identifier in back-quotes, doubling embedded back-quotes.
fn write_identifier(f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
    write!(f, "`{}`", name.replace('`', "``"))
}

/// Writes a single-quoted string literal, doubling embedded quotes.
fn write_string(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    write!(f, "'{}'", value.replace('\'', "''"))
}

/// Writes items separated by `", "`.
fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

fn write_identifier_list(f: &mut fmt::Formatter<'_>, names: &[String]) -> fmt::Result {
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_identifier(f, name)?;
    }
    Ok(())
}

/// Writes the WHERE, ORDER BY and LIMIT tail shared by all statements.
fn write_tail(
    f: &mut fmt::Formatter<'_>,
    where_clause: Option<&Expr>,
    order_by: &[OrderBy],
    limit: Option<u64>,
) -> fmt::Result {
    if let Some(expr) = where_clause {
        write!(f, " WHERE {expr}")?;
    }
    if !order_by.is_empty() {
        f.write_str(" ORDER BY ")?;
        write_list(f, order_by)?;
    }
    if let Some(n) = limit {
        write!(f, " LIMIT {n}")?;
    }
    Ok(())
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select(select) => write!(f, "{select}"),
            Self::Insert(insert) => write!(f, "{insert}"),
            Self::Update(update) => write!(f, "{update}"),
            Self::Delete(delete) => write!(f, "{delete}"),
        }
    }
}

impl fmt::Display for SelectStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SELECT ")?;
        write_list(f, &self.items)?;
        if let Some(from) = &self.from {
            write!(f, " FROM {from}")?;
        }
        if let Some(expr) = &self.where_clause {
            write!(f, " WHERE {expr}")?;
        }
        if !self.group_by.is_empty() {
            f.write_str(" GROUP BY ")?;
            write_list(f, &self.group_by)?;
        }
        if let Some(expr) = &self.having {
            write!(f, " HAVING {expr}")?;
        }
        write_tail(f, None, &self.order_by, self.limit)
    }
}

impl fmt::Display for InsertStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("INSERT INTO ")?;
        write_identifier(f, &self.table)?;
        if !self.columns.is_empty() {
            f.write_str(" (")?;
            write_identifier_list(f, &self.columns)?;
            f.write_str(")")?;
        }
        f.write_str(" VALUES ")?;
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str("(")?;
            write_list(f, row)?;
            f.write_str(")")?;
        }
        Ok(())
    }
}

impl fmt::Display for UpdateStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UPDATE {} SET ", self.table)?;
        write_list(f, &self.assignments)?;
        write_tail(f, self.where_clause.as_ref(), &self.order_by, self.limit)
    }
}

impl fmt::Display for UpdateAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.column, self.value)
    }
}

impl fmt::Display for DeleteStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DELETE FROM ")?;
        write_identifier(f, &self.table)?;
        write_tail(f, self.where_clause.as_ref(), &self.order_by, self.limit)
    }
}

impl fmt::Display for SelectItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wildcard => f.write_str("*"),
            Self::Expr { expr, alias } => {
                write!(f, "{expr}")?;
                if let Some(alias) = alias {
                    f.write_str(" AS ")?;
                    write_identifier(f, alias)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table { name, alias } => {
                write_identifier(f, name)?;
                if let Some(alias) = alias {
                    f.write_str(" AS ")?;
                    write_identifier(f, alias)?;
                }
                Ok(())
            }
            Self::Join { left, join } => write!(f, "{left} {join}"),
        }
    }
}

impl fmt::Display for JoinClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.as_str(), self.table)?;
        match &self.condition {
            Some(JoinCondition::On(expr)) => write!(f, " ON {expr}"),
            Some(JoinCondition::Using(columns)) => {
                f.write_str(" USING (")?;
                write_identifier_list(f, columns)?;
                f.write_str(")")
            }
            None => Ok(()),
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.expr, self.direction.as_str())
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(table) = &self.table {
            write_identifier(f, table)?;
            f.write_str(".")?;
        }
        write_identifier(f, &self.name)
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(digits) => f.write_str(digits),
            Self::Decimal { whole, fraction } => write!(f, "{whole}.{fraction}"),
            Self::Approximate { mantissa, exponent } => write!(f, "{mantissa}E{exponent}"),
        }
    }
}

impl fmt::Display for NumericLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(sign) = self.sign {
            f.write_str(sign.as_str())?;
        }
        write!(f, "{}", self.value)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write_string(f, s),
            Self::Date(s) => {
                f.write_str("DATE ")?;
                write_string(f, s)
            }
            Self::Null => f.write_str("NULL"),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for FunctionCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        match &self.args {
            FunctionArgs::Wildcard => f.write_str("*")?,
            FunctionArgs::List(args) => write_list(f, args)?,
        }
        f.write_str(")")
    }
}

impl fmt::Display for InList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Values(values) => write_list(f, values),
            Self::Subquery(select) => write!(f, "{select}"),
        }
    }
}

/// Returns true if the rendering of `expr` starts with a sign character.
const fn starts_with_sign(expr: &Expr) -> bool {
    match expr {
        Expr::Unary { op, .. } => matches!(op, UnaryOp::Plus | UnaryOp::Neg),
        Expr::Literal(Literal::Number(n)) => n.sign.is_some(),
        _ => false,
    }
}

const fn not_prefix(negated: bool) -> &'static str {
    if negated {
        "NOT "
    } else {
        ""
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(literal) => write!(f, "{literal}"),
            Self::Column(column) => write!(f, "{column}"),
            Self::CurrentUser => f.write_str("CURRENT_USER"),
            Self::Binary { left, op, right } => {
                if op.is_grouped() {
                    write!(f, "({left} {op} {right})")
                } else {
                    write!(f, "{left} {op} {right}")
                }
            }
            Self::Unary { op, operand } => match op {
                UnaryOp::Not => write!(f, "NOT {operand}"),
                // `- -1` must not collapse into a `--` comment
                UnaryOp::Plus | UnaryOp::Neg if starts_with_sign(operand) => {
                    write!(f, "{} {operand}", op.as_str())
                }
                UnaryOp::Plus | UnaryOp::Neg => write!(f, "{}{operand}", op.as_str()),
            },
            Self::Function(call) => write!(f, "{call}"),
            Self::Subquery(select) => write!(f, "({select})"),
            Self::Exists { subquery, negated } => {
                write!(f, "{}EXISTS ({subquery})", not_prefix(*negated))
            }
            Self::IsNull { expr, negated } => {
                write!(f, "{expr} IS {}NULL", not_prefix(*negated))
            }
            Self::In {
                expr,
                list,
                negated,
            } => write!(f, "{expr} {}IN ({list})", not_prefix(*negated)),
            Self::Between {
                expr,
                low,
                high,
                negated,
            } => write!(
                f,
                "{expr} {}BETWEEN {low} AND {high}",
                not_prefix(*negated)
            ),
            Self::Nested(inner) => write!(f, "({inner})"),
        }
    }
}
