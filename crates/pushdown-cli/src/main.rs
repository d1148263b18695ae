//! pushdown CLI
//!
//! Parses SQL statements or FTS5 full-text queries and prints the tree.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use pushdown_core::{ParserConfig, Span, StackLimit};
use pushdown_fts::{parse_query_with, FtsContext};
use pushdown_sql::{parse_sql_with, Diagnostic, SqlError};

/// Table-driven SQL and full-text query parser.
#[derive(Parser)]
#[command(name = "pushdown")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Parser configuration file (JSON).
    #[arg(short, long, env = "PUSHDOWN_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Use a fixed parse stack of this many entries.
    #[arg(long, global = true, conflicts_with = "growable")]
    stack_depth: Option<usize>,

    /// Grow the parse stack on demand.
    #[arg(long, global = true)]
    growable: bool,

    /// Print the result as JSON.
    #[arg(long, global = true)]
    json: bool,

    /// Log every parser step.
    #[arg(long, global = true)]
    trace: bool,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one or more SQL statements.
    Sql {
        /// SQL text, or `-` to read standard input.
        text: String,
    },

    /// Parse a full-text query.
    Fts {
        /// Query text, or `-` to read standard input.
        text: String,

        /// Columns the query may filter on (any column if not specified).
        #[arg(long, value_delimiter = ',')]
        columns: Vec<String>,
    },
}

impl Cli {
    /// The parser configuration: the config file if given, then the stack
    /// and trace flags on top.
    fn parser_config(&self) -> anyhow::Result<ParserConfig> {
        let mut config = match &self.config {
            Some(path) => ParserConfig::from_path(path)
                .with_context(|| format!("failed to load {}", path.display()))?,
            None => ParserConfig::default(),
        };
        if let Some(depth) = self.stack_depth {
            anyhow::ensure!(depth > 0, "--stack-depth must be at least 1");
            config.stack = StackLimit::Fixed(depth);
        }
        if self.growable {
            let initial = match config.stack {
                StackLimit::Fixed(depth) => depth,
                StackLimit::Growable { initial } => initial,
            };
            config.stack = StackLimit::Growable { initial };
        }
        if self.trace && config.trace_prefix.is_none() {
            config.trace_prefix = Some(String::new());
        }
        Ok(config)
    }
}

fn read_text(text: String) -> anyhow::Result<String> {
    if text == "-" {
        std::io::read_to_string(std::io::stdin()).context("failed to read standard input")
    } else {
        Ok(text)
    }
}

fn report(json: bool, diagnostics: &[Diagnostic]) -> anyhow::Result<ExitCode> {
    if json {
        let errors = serde_json::json!({ "errors": diagnostics });
        println!("{}", serde_json::to_string_pretty(&errors)?);
    } else {
        for diagnostic in diagnostics {
            eprintln!("error: {diagnostic}");
        }
    }
    Ok(ExitCode::FAILURE)
}

fn run_sql(cli: &Cli, config: &ParserConfig, sql: &str) -> anyhow::Result<ExitCode> {
    let parsed = match parse_sql_with(sql, config) {
        Ok(parsed) => parsed,
        Err(SqlError::Syntax { diagnostics }) => return report(cli.json, &diagnostics),
        Err(err) => {
            let diagnostic = Diagnostic::new(err.to_string(), Span::default());
            return report(cli.json, &[diagnostic]);
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
    } else if let Some(tree) = &parsed.tree {
        println!("{tree}");
    }
    info!(
        statements = parsed.statements,
        explain = ?parsed.explain,
        tokens = parsed.stats.tokens,
        peak_depth = parsed.stats.peak_depth,
        "Parsed SQL."
    );
    Ok(ExitCode::SUCCESS)
}

fn run_fts(
    cli: &Cli,
    config: &ParserConfig,
    query: &str,
    columns: &[String],
) -> anyhow::Result<ExitCode> {
    let ctx = if columns.is_empty() {
        FtsContext::new()
    } else {
        FtsContext::with_columns(columns.iter().cloned())
    };
    let parsed = match parse_query_with(query, ctx, config) {
        Ok(parsed) => parsed,
        Err(err) => {
            if cli.json {
                let error = serde_json::json!({ "error": err.to_string() });
                println!("{}", serde_json::to_string_pretty(&error)?);
            } else {
                eprintln!("error: {err}");
            }
            return Ok(ExitCode::FAILURE);
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
    } else {
        println!("{}", parsed.expr);
    }
    info!(
        nearsets = parsed.expr.nearsets().len(),
        tokens = parsed.stats.tokens,
        peak_depth = parsed.stats.peak_depth,
        "Parsed query."
    );
    Ok(ExitCode::SUCCESS)
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.trace {
        Level::TRACE
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = cli.parser_config()?;
    match &cli.command {
        Commands::Sql { text } => {
            let sql = read_text(text.clone())?;
            run_sql(&cli, &config, &sql)
        }
        Commands::Fts { text, columns } => {
            let query = read_text(text.clone())?;
            run_fts(&cli, &config, &query, columns)
        }
    }
}
