//! sqlnorm CLI
//!
//! Command-line tool that prints SQL statements in canonical form.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::{Parser, ValueEnum};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use sqlnorm_core::{parse_with_dialect, AnsiDialect, Dialect, GenericDialect, Statement, SyntaxError};

/// Normalize SQL statements to their canonical form.
#[derive(Parser)]
#[command(name = "sqlnorm")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SQL statements to normalize. Read from stdin when none are given.
    sql: Vec<String>,

    /// Read statements from a file, one per non-empty line.
    #[arg(short, long, conflicts_with = "sql")]
    file: Option<PathBuf>,

    /// Lexing dialect.
    #[arg(short, long, value_enum, env = "SQLNORM_DIALECT", default_value_t = DialectName::Generic)]
    dialect: DialectName,

    /// Print the AST as JSON instead of the canonical SQL.
    #[arg(long)]
    ast: bool,

    /// Only validate the statements.
    #[arg(long, conflicts_with = "ast")]
    check: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DialectName {
    /// Back-ticks quote identifiers; both quote characters delimit strings.
    Generic,
    /// Double quotes and back-ticks quote identifiers.
    Ansi,
}

impl DialectName {
    fn dialect(self) -> &'static dyn Dialect {
        match self {
            Self::Generic => &GenericDialect,
            Self::Ansi => &AnsiDialect,
        }
    }
}

/// What to print for each accepted statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Sql,
    Json,
    Nothing,
}

impl Cli {
    const fn output(&self) -> Output {
        if self.check {
            Output::Nothing
        } else if self.ast {
            Output::Json
        } else {
            Output::Sql
        }
    }

    /// Collects the statements from the arguments, the file, or stdin.
    fn statements(&self) -> anyhow::Result<Vec<String>> {
        if let Some(path) = &self.file {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            return Ok(split_statements(&text));
        }
        if !self.sql.is_empty() {
            return Ok(self.sql.clone());
        }
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        Ok(split_statements(&text))
    }
}

/// Splits input text into statements, one per non-empty line.
fn split_statements(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Formats an accepted statement for printing.
fn format_statement(statement: &Statement, output: Output) -> anyhow::Result<Option<String>> {
    match output {
        Output::Sql => Ok(Some(statement.to_sql())),
        Output::Json => Ok(Some(serde_json::to_string_pretty(statement)?)),
        Output::Nothing => Ok(None),
    }
}

/// Formats a syntax error with the statement and a caret line under the
/// offending span.
fn format_error(sql: &str, err: &SyntaxError) -> String {
    let column = sql
        .get(..err.span.start)
        .map_or(0, |prefix| prefix.chars().count());
    let width = err.lexeme.chars().count().max(1);
    format!(
        "{sql}\n{}{} {}",
        " ".repeat(column),
        "^".repeat(width),
        err.message
    )
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let dialect = cli.dialect.dialect();
    let output = cli.output();
    let statements = cli.statements()?;
    debug!(count = statements.len(), dialect = dialect.name(), "read statements");

    for sql in &statements {
        let statement = parse_with_dialect(sql, dialect)
            .map_err(|err| anyhow!("{}", format_error(sql, &err)))?;
        if let Some(text) = format_statement(&statement, output)? {
            println!("{text}");
        }
    }

    if output == Output::Nothing {
        info!("{} statement(s) OK", statements.len());
    }
    Ok(())
}
