//! SQL Parser implementation.

use tracing::trace;

use super::error::SyntaxError;
use super::pratt::{
    infix_binding_power, prefix_binding_power, token_to_binary_op, token_to_sign,
    token_to_unary_op, COMPARISON_BP, COMPARISON_RHS_BP,
};
use crate::ast::{
    BinaryOp, ColumnRef, DeleteStatement, Expr, FunctionArgs, FunctionCall, InList,
    InsertStatement, JoinCondition, JoinKind, Literal, Numeric, OrderBy, OrderDirection,
    SelectItem, SelectStatement, Statement, TableRef, UnaryOp, UpdateAssignment, UpdateStatement,
};
use crate::dialect::{Dialect, GenericDialect};
use crate::lexer::{Keyword, Lexer, Span, Token, TokenKind};

/// Maximum nesting of expressions and subqueries.
pub const MAX_DEPTH: usize = 128;

/// SQL Parser.
///
/// The input is tokenized up front; the parser then walks the token
/// list with one token of lookahead.
pub struct Parser<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given input using the generic dialect.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_dialect(input, &GenericDialect)
    }

    /// Creates a new parser for the given input and dialect.
    #[must_use]
    pub fn with_dialect(input: &'a str, dialect: &dyn Dialect) -> Self {
        let tokens = Lexer::with_dialect(input, dialect).tokenize();
        trace!(tokens = tokens.len(), dialect = dialect.name(), "tokenized input");
        Self {
            source: input,
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Parses exactly one SQL statement. A single trailing `;` is
    /// allowed; anything else after the statement is an error.
    ///
    /// # Errors
    ///
    /// Returns a `SyntaxError` if the input is not a valid SQL statement.
    pub fn parse_statement(&mut self) -> Result<Statement, SyntaxError> {
        let statement = match self.current().as_keyword() {
            Some(Keyword::Select) => Statement::Select(self.parse_select_statement()?),
            Some(Keyword::Insert) => Statement::Insert(self.parse_insert_statement()?),
            Some(Keyword::Update) => Statement::Update(self.parse_update_statement()?),
            Some(Keyword::Delete) => Statement::Delete(self.parse_delete_statement()?),
            _ => return Err(self.unexpected("SELECT, INSERT, UPDATE, or DELETE")),
        };

        if self.check(&TokenKind::Semicolon) {
            self.advance();
        }
        if !self.current().is_eof() {
            return Err(self.unexpected("end of statement"));
        }
        Ok(statement)
    }

    /// Parses a SELECT statement, top-level or nested.
    fn parse_select_statement(&mut self) -> Result<SelectStatement, SyntaxError> {
        self.descend()?;
        let result = self.parse_select_body();
        self.depth -= 1;
        result
    }

    fn parse_select_body(&mut self) -> Result<SelectStatement, SyntaxError> {
        self.expect_keyword(Keyword::Select)?;

        let items = self.parse_select_items()?;

        // FROM clause (optional for expressions like SELECT 1+1)
        let from = if self.check_keyword(Keyword::From) {
            self.advance();
            Some(self.parse_table_ref()?)
        } else {
            None
        };

        let where_clause = self.parse_where_clause()?;

        let group_by = if self.check_keyword(Keyword::Group) {
            self.advance();
            self.expect_keyword(Keyword::By)?;
            self.parse_expression_list()?
        } else {
            vec![]
        };

        let having = if self.check_keyword(Keyword::Having) {
            self.advance();
            Some(self.parse_expression(0)?)
        } else {
            None
        };

        let order_by = self.parse_order_by()?;
        let limit = self.parse_limit()?;

        Ok(SelectStatement {
            items,
            from,
            where_clause,
            group_by,
            having,
            order_by,
            limit,
        })
    }

    /// Parses the SELECT list.
    fn parse_select_items(&mut self) -> Result<Vec<SelectItem>, SyntaxError> {
        let mut items = vec![];

        loop {
            if self.check(&TokenKind::Star) {
                self.advance();
                items.push(SelectItem::Wildcard);
            } else {
                let expr = self.parse_expression(0)?;
                let alias = self.parse_optional_alias()?;
                items.push(SelectItem::Expr { expr, alias });
            }

            if !self.check(&TokenKind::Comma) {
                break;
            }
            self.advance();
        }

        Ok(items)
    }

    /// Parses a table reference with any joins that follow it. A comma
    /// between tables is a CROSS JOIN.
    fn parse_table_ref(&mut self) -> Result<TableRef, SyntaxError> {
        let mut table_ref = self.parse_simple_table_ref()?;

        loop {
            if self.check(&TokenKind::Comma) {
                self.advance();
                let right = self.parse_simple_table_ref()?;
                table_ref = table_ref.join(JoinKind::Cross, right, None);
                continue;
            }

            let Some(kind) = self.parse_join_kind()? else {
                break;
            };
            let right = self.parse_simple_table_ref()?;
            let condition = if kind.requires_condition() {
                Some(self.parse_join_condition()?)
            } else {
                None
            };
            table_ref = table_ref.join(kind, right, condition);
        }

        Ok(table_ref)
    }

    /// Parses a table name with an optional alias.
    fn parse_simple_table_ref(&mut self) -> Result<TableRef, SyntaxError> {
        let name = self.expect_identifier()?;
        let alias = self.parse_optional_alias()?;
        Ok(TableRef::Table { name, alias })
    }

    /// Parses a join keyword sequence, if one starts here.
    fn parse_join_kind(&mut self) -> Result<Option<JoinKind>, SyntaxError> {
        let kind = match self.current().as_keyword() {
            Some(Keyword::Join) => {
                self.advance();
                return Ok(Some(JoinKind::Inner));
            }
            Some(Keyword::Inner) => {
                self.advance();
                JoinKind::Inner
            }
            Some(Keyword::Cross) => {
                self.advance();
                JoinKind::Cross
            }
            Some(Keyword::Left) => self.parse_outer_join(JoinKind::Left, JoinKind::LeftOuter),
            Some(Keyword::Right) => self.parse_outer_join(JoinKind::Right, JoinKind::RightOuter),
            Some(Keyword::Full) => self.parse_outer_join(JoinKind::Full, JoinKind::FullOuter),
            _ => return Ok(None),
        };
        self.expect_keyword(Keyword::Join)?;
        Ok(Some(kind))
    }

    /// Consumes LEFT/RIGHT/FULL and an optional OUTER.
    fn parse_outer_join(&mut self, short: JoinKind, outer: JoinKind) -> JoinKind {
        self.advance();
        if self.check_keyword(Keyword::Outer) {
            self.advance();
            outer
        } else {
            short
        }
    }

    /// Parses `ON expr` or `USING (col, ...)`.
    fn parse_join_condition(&mut self) -> Result<JoinCondition, SyntaxError> {
        if self.check_keyword(Keyword::On) {
            self.advance();
            Ok(JoinCondition::On(self.parse_expression(0)?))
        } else if self.check_keyword(Keyword::Using) {
            self.advance();
            self.expect(&TokenKind::LeftParen)?;
            let columns = self.parse_identifier_list()?;
            self.expect(&TokenKind::RightParen)?;
            Ok(JoinCondition::Using(columns))
        } else {
            Err(self.unexpected("ON or USING"))
        }
    }

    /// Parses an optional alias, with or without AS.
    fn parse_optional_alias(&mut self) -> Result<Option<String>, SyntaxError> {
        if self.check_keyword(Keyword::As) {
            self.advance();
            Ok(Some(self.expect_identifier()?))
        } else if self.current().kind.is_identifier() {
            Ok(Some(self.expect_identifier()?))
        } else {
            Ok(None)
        }
    }

    /// Parses an INSERT statement.
    fn parse_insert_statement(&mut self) -> Result<InsertStatement, SyntaxError> {
        self.expect_keyword(Keyword::Insert)?;
        self.expect_keyword(Keyword::Into)?;

        let table = self.expect_identifier()?;

        // Column list (optional), identifiers only
        let columns = if self.check(&TokenKind::LeftParen) {
            self.advance();
            let cols = self.parse_identifier_list()?;
            self.expect(&TokenKind::RightParen)?;
            cols
        } else {
            vec![]
        };

        self.expect_keyword(Keyword::Values)?;
        let mut rows = vec![];
        loop {
            self.expect(&TokenKind::LeftParen)?;
            rows.push(self.parse_expression_list()?);
            self.expect(&TokenKind::RightParen)?;
            if !self.check(&TokenKind::Comma) {
                break;
            }
            self.advance();
        }

        Ok(InsertStatement {
            table,
            columns,
            rows,
        })
    }

    /// Parses an UPDATE statement.
    fn parse_update_statement(&mut self) -> Result<UpdateStatement, SyntaxError> {
        self.expect_keyword(Keyword::Update)?;

        let table = self.parse_table_ref()?;

        self.expect_keyword(Keyword::Set)?;

        let mut assignments = vec![];
        loop {
            let column = self.parse_column_ref()?;
            self.expect(&TokenKind::Eq)?;
            let value = self.parse_expression(0)?;
            assignments.push(UpdateAssignment { column, value });

            if !self.check(&TokenKind::Comma) {
                break;
            }
            self.advance();
        }

        let where_clause = self.parse_where_clause()?;
        let order_by = self.parse_order_by()?;
        let limit = self.parse_limit()?;

        Ok(UpdateStatement {
            table,
            assignments,
            where_clause,
            order_by,
            limit,
        })
    }

    /// Parses a DELETE statement.
    fn parse_delete_statement(&mut self) -> Result<DeleteStatement, SyntaxError> {
        self.expect_keyword(Keyword::Delete)?;
        self.expect_keyword(Keyword::From)?;

        let table = self.expect_identifier()?;
        let where_clause = self.parse_where_clause()?;
        let order_by = self.parse_order_by()?;
        let limit = self.parse_limit()?;

        Ok(DeleteStatement {
            table,
            where_clause,
            order_by,
            limit,
        })
    }

    /// Parses an optional WHERE clause.
    fn parse_where_clause(&mut self) -> Result<Option<Expr>, SyntaxError> {
        if self.check_keyword(Keyword::Where) {
            self.advance();
            Ok(Some(self.parse_expression(0)?))
        } else {
            Ok(None)
        }
    }

    /// Parses an optional ORDER BY list. Items without a direction are ASC.
    fn parse_order_by(&mut self) -> Result<Vec<OrderBy>, SyntaxError> {
        if !self.check_keyword(Keyword::Order) {
            return Ok(vec![]);
        }
        self.advance();
        self.expect_keyword(Keyword::By)?;

        let mut items = vec![];
        loop {
            let expr = self.parse_expression(0)?;
            let direction = if self.check_keyword(Keyword::Desc) {
                self.advance();
                OrderDirection::Desc
            } else {
                if self.check_keyword(Keyword::Asc) {
                    self.advance();
                }
                OrderDirection::Asc
            };

            items.push(OrderBy { expr, direction });

            if !self.check(&TokenKind::Comma) {
                break;
            }
            self.advance();
        }
        Ok(items)
    }

    /// Parses an optional `LIMIT n` with an unsigned integer literal.
    fn parse_limit(&mut self) -> Result<Option<u64>, SyntaxError> {
        if !self.check_keyword(Keyword::Limit) {
            return Ok(None);
        }
        self.advance();

        let TokenKind::Integer(digits) = &self.current().kind else {
            return Err(self.unexpected("unsigned integer"));
        };
        let limit = digits.parse::<u64>().map_err(|_| {
            SyntaxError::new("LIMIT value out of range", self.current().span)
                .with_lexeme(self.source)
        })?;
        self.advance();
        Ok(Some(limit))
    }

    /// Parses an expression using Pratt parsing.
    fn parse_expression(&mut self, min_bp: u8) -> Result<Expr, SyntaxError> {
        self.descend()?;
        let result = self.parse_pratt(min_bp);
        self.depth -= 1;
        result
    }

    fn parse_pratt(&mut self, min_bp: u8) -> Result<Expr, SyntaxError> {
        let mut lhs = self.parse_prefix(min_bp)?;
        // Span of the predicate operator that produced `lhs`, if any.
        let mut predicate_span: Option<Span> = None;

        loop {
            let Some((l_bp, r_bp)) = infix_binding_power(&self.current().kind) else {
                break;
            };
            if l_bp < min_bp {
                break;
            }

            let op_span = self.current().span;
            if l_bp == COMPARISON_BP {
                if self.check_keyword(Keyword::Not)
                    && !matches!(
                        self.peek().kind,
                        TokenKind::Keyword(Keyword::In | Keyword::Between | Keyword::Like)
                    )
                {
                    break;
                }
                if let Some(previous) = predicate_span {
                    return Err(SyntaxError::new(
                        "Comparison predicates cannot be chained",
                        previous.merge(op_span),
                    )
                    .with_lexeme(self.source));
                }
                lhs = self.parse_predicate(lhs)?;
                predicate_span = Some(op_span);
                continue;
            }

            let Some(op) = token_to_binary_op(&self.current().kind) else {
                break;
            };
            self.advance();
            let rhs = self.parse_expression(r_bp)?;
            lhs = lhs.binary(op, rhs);
            predicate_span = None;
        }

        Ok(lhs)
    }

    /// Parses the predicate following `lhs`: a comparison, `[NOT] LIKE`,
    /// `IS [NOT] NULL`, `[NOT] IN` or `[NOT] BETWEEN`.
    fn parse_predicate(&mut self, lhs: Expr) -> Result<Expr, SyntaxError> {
        let negated = if self.check_keyword(Keyword::Not) {
            self.advance();
            true
        } else {
            false
        };
        let expr = Box::new(lhs);

        match &self.current().kind {
            TokenKind::Keyword(Keyword::Is) if !negated => {
                self.advance();
                let negated = if self.check_keyword(Keyword::Not) {
                    self.advance();
                    true
                } else {
                    false
                };
                self.expect_keyword(Keyword::Null)?;
                Ok(Expr::IsNull { expr, negated })
            }
            TokenKind::Keyword(Keyword::In) => {
                self.advance();
                self.expect(&TokenKind::LeftParen)?;
                let list = if self.check_keyword(Keyword::Select) {
                    InList::Subquery(Box::new(self.parse_select_statement()?))
                } else {
                    InList::Values(self.parse_expression_list()?)
                };
                self.expect(&TokenKind::RightParen)?;
                Ok(Expr::In {
                    expr,
                    list,
                    negated,
                })
            }
            TokenKind::Keyword(Keyword::Between) => {
                self.advance();
                let low = self.parse_expression(COMPARISON_RHS_BP)?;
                self.expect_keyword(Keyword::And)?;
                let high = self.parse_expression(COMPARISON_RHS_BP)?;
                Ok(Expr::Between {
                    expr,
                    low: Box::new(low),
                    high: Box::new(high),
                    negated,
                })
            }
            TokenKind::Keyword(Keyword::Like) => {
                self.advance();
                let op = if negated {
                    BinaryOp::NotLike
                } else {
                    BinaryOp::Like
                };
                let right = self.parse_expression(COMPARISON_RHS_BP)?;
                Ok(Expr::Binary {
                    left: expr,
                    op,
                    right: Box::new(right),
                })
            }
            kind if !negated => {
                let Some(op) = token_to_binary_op(kind) else {
                    return Err(self.unexpected("comparison operator"));
                };
                self.advance();
                let right = self.parse_expression(COMPARISON_RHS_BP)?;
                Ok(Expr::Binary {
                    left: expr,
                    op,
                    right: Box::new(right),
                })
            }
            _ => Err(self.unexpected("IN, BETWEEN, or LIKE")),
        }
    }

    /// Parses a prefix expression.
    ///
    /// A sign directly in front of a numeric literal becomes part of the
    /// literal. `NOT` is only accepted where a boolean factor may start.
    fn parse_prefix(&mut self, min_bp: u8) -> Result<Expr, SyntaxError> {
        let Some(op) = token_to_unary_op(&self.current().kind) else {
            return self.parse_primary();
        };
        let bp = prefix_binding_power(&self.current().kind).unwrap_or(u8::MAX);
        if bp < min_bp {
            return Err(self.unexpected("expression"));
        }
        let op_token = self.advance();

        if let Some(sign) = token_to_sign(&op_token.kind) {
            if self.current().kind.is_number() {
                let value = self.parse_numeric()?;
                return Ok(Expr::number(Some(sign), value));
            }
        }

        let operand = self.parse_expression(bp)?;
        Ok(match op {
            UnaryOp::Not => operand.negate(),
            op => Expr::Unary {
                op,
                operand: Box::new(operand),
            },
        })
    }

    /// Parses a primary expression.
    fn parse_primary(&mut self) -> Result<Expr, SyntaxError> {
        match &self.current().kind {
            TokenKind::Integer(_) | TokenKind::Decimal { .. } | TokenKind::Approximate { .. } => {
                Ok(Expr::number(None, self.parse_numeric()?))
            }
            TokenKind::String(s) => {
                let value = s.clone();
                self.advance();
                Ok(Expr::Literal(Literal::String(value)))
            }
            TokenKind::Keyword(Keyword::Null) => {
                self.advance();
                Ok(Expr::null())
            }
            TokenKind::Keyword(Keyword::Date) => {
                self.advance();
                let TokenKind::String(s) = &self.current().kind else {
                    return Err(self.unexpected("date string"));
                };
                let value = s.clone();
                self.advance();
                Ok(Expr::Literal(Literal::Date(value)))
            }
            TokenKind::Keyword(Keyword::CurrentUser) => {
                self.advance();
                Ok(Expr::CurrentUser)
            }

            // EXISTS (subquery)
            TokenKind::Keyword(Keyword::Exists) => {
                self.advance();
                self.expect(&TokenKind::LeftParen)?;
                let subquery = self.parse_select_statement()?;
                self.expect(&TokenKind::RightParen)?;
                Ok(Expr::Exists {
                    subquery: Box::new(subquery),
                    negated: false,
                })
            }

            // Parenthesized expression or subquery
            TokenKind::LeftParen => {
                self.advance();
                if self.check_keyword(Keyword::Select) {
                    let subquery = self.parse_select_statement()?;
                    self.expect(&TokenKind::RightParen)?;
                    return Ok(Expr::Subquery(Box::new(subquery)));
                }
                let expr = self.parse_expression(0)?;
                self.expect(&TokenKind::RightParen)?;
                if expr.is_self_grouping() {
                    Ok(expr)
                } else {
                    Ok(Expr::Nested(Box::new(expr)))
                }
            }

            // Function call or column reference
            TokenKind::Identifier(name) => {
                let name = name.clone();
                self.advance();
                if self.check(&TokenKind::LeftParen) {
                    return self.parse_function_call(&name);
                }
                self.parse_column_tail(name).map(Expr::Column)
            }
            TokenKind::QuotedIdentifier(name) => {
                let name = name.clone();
                self.advance();
                self.parse_column_tail(name).map(Expr::Column)
            }

            _ => Err(self.unexpected("expression")),
        }
    }

    /// Parses `name` or `table.name` for an assignment target.
    fn parse_column_ref(&mut self) -> Result<ColumnRef, SyntaxError> {
        let first = self.expect_identifier()?;
        self.parse_column_tail(first)
    }

    /// Completes a column reference whose first identifier was consumed.
    fn parse_column_tail(&mut self, first: String) -> Result<ColumnRef, SyntaxError> {
        if self.check(&TokenKind::Dot) {
            self.advance();
            let name = self.expect_identifier()?;
            Ok(ColumnRef {
                table: Some(first),
                name,
            })
        } else {
            Ok(ColumnRef {
                table: None,
                name: first,
            })
        }
    }

    /// Consumes an unsigned numeric literal token.
    fn parse_numeric(&mut self) -> Result<Numeric, SyntaxError> {
        let value = match &self.current().kind {
            TokenKind::Integer(digits) => Numeric::Integer(digits.clone()),
            TokenKind::Decimal { whole, fraction } => Numeric::Decimal {
                whole: whole.clone(),
                fraction: fraction.clone(),
            },
            TokenKind::Approximate { mantissa, exponent } => Numeric::Approximate {
                mantissa: mantissa.clone(),
                exponent: exponent.clone(),
            },
            _ => return Err(self.unexpected("number")),
        };
        self.advance();
        Ok(value)
    }

    /// Parses a function call. `*` is only accepted as the sole argument
    /// of COUNT.
    fn parse_function_call(&mut self, name: &str) -> Result<Expr, SyntaxError> {
        let name = name.to_ascii_uppercase();
        self.expect(&TokenKind::LeftParen)?;

        let args = if self.check(&TokenKind::RightParen) {
            FunctionArgs::List(vec![])
        } else if self.check(&TokenKind::Star) && name == "COUNT" {
            self.advance();
            FunctionArgs::Wildcard
        } else {
            FunctionArgs::List(self.parse_expression_list()?)
        };

        self.expect(&TokenKind::RightParen)?;

        Ok(Expr::Function(FunctionCall { name, args }))
    }

    /// Parses a comma-separated list of expressions.
    fn parse_expression_list(&mut self) -> Result<Vec<Expr>, SyntaxError> {
        let mut exprs = vec![];
        loop {
            exprs.push(self.parse_expression(0)?);
            if !self.check(&TokenKind::Comma) {
                break;
            }
            self.advance();
        }
        Ok(exprs)
    }

    /// Parses a comma-separated list of identifiers.
    fn parse_identifier_list(&mut self) -> Result<Vec<String>, SyntaxError> {
        let mut idents = vec![];
        loop {
            idents.push(self.expect_identifier()?);
            if !self.check(&TokenKind::Comma) {
                break;
            }
            self.advance();
        }
        Ok(idents)
    }

    // --- Helper methods ---

    /// Returns the current token.
    fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the token after the current one (EOF at the end).
    fn peek(&self) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + 1).min(last)]
    }

    /// Advances to the next token and returns the one consumed. Never
    /// moves past EOF.
    fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if !token.is_eof() {
            self.pos += 1;
        }
        token
    }

    /// Checks if the current token matches the given kind.
    fn check(&self, kind: &TokenKind) -> bool {
        core::mem::discriminant(&self.current().kind) == core::mem::discriminant(kind)
    }

    /// Checks if the current token is the given keyword.
    fn check_keyword(&self, keyword: Keyword) -> bool {
        self.current().as_keyword() == Some(keyword)
    }

    /// Enters one nesting level, failing past [`MAX_DEPTH`]. Callers
    /// leave the level by decrementing `depth` themselves.
    fn descend(&mut self) -> Result<(), SyntaxError> {
        if self.depth >= MAX_DEPTH {
            return Err(
                SyntaxError::new("Expression nested too deeply", self.current().span)
                    .with_lexeme(self.source),
            );
        }
        self.depth += 1;
        Ok(())
    }

    /// Builds an error for the current token.
    fn unexpected(&self, expected: &str) -> SyntaxError {
        SyntaxError::unexpected(expected, self.current(), self.source)
    }

    /// Expects the current token to be the given kind.
    fn expect(&mut self, kind: &TokenKind) -> Result<(), SyntaxError> {
        if self.check(kind) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(&describe(kind)))
        }
    }

    /// Expects the current token to be the given keyword.
    fn expect_keyword(&mut self, keyword: Keyword) -> Result<(), SyntaxError> {
        if self.check_keyword(keyword) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(keyword.as_str()))
        }
    }

    /// Expects and returns a bare or quoted identifier.
    fn expect_identifier(&mut self) -> Result<String, SyntaxError> {
        match &self.current().kind {
            TokenKind::Identifier(name) | TokenKind::QuotedIdentifier(name) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            _ => Err(self.unexpected("identifier")),
        }
    }
}

/// Human readable name of a punctuation token for error messages.
fn describe(kind: &TokenKind) -> String {
    match kind {
        TokenKind::LeftParen => String::from("'('"),
        TokenKind::RightParen => String::from("')'"),
        TokenKind::Eq => String::from("'='"),
        TokenKind::Comma => String::from("','"),
        other => format!("{other:?}"),
    }
}
