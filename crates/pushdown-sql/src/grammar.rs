//! Semantic actions and error hooks for the SQL grammar.

use pushdown_core::{Grammar, ParseTables, Rhs, RuleId, Span, SymbolCode};
use serde::Serialize;

use crate::error::Diagnostic;
use crate::syntax::{SqlValue, SyntaxNode};
use crate::tables::SQL_TABLES;

/// `explain ::= EXPLAIN`
pub const RULE_EXPLAIN: RuleId = 6;
/// `explain ::= EXPLAIN QUERY PLAN`
pub const RULE_EXPLAIN_QUERY_PLAN: RuleId = 7;
/// `cmdx ::= cmd`, reduced once per complete statement.
pub const RULE_STATEMENT: RuleId = 8;
/// `table_options ::= WITHOUT nm`
pub const RULE_WITHOUT_OPTION: RuleId = 35;
/// `expr ::= VARIABLE`
pub const RULE_VARIABLE: RuleId = 193;
/// `trnm ::= nm DOT nm`
pub const RULE_TRIGGER_QUALIFIED_NAME: RuleId = 281;
/// `tridxby ::= INDEXED BY nm`
pub const RULE_TRIGGER_INDEXED_BY: RuleId = 283;
/// `tridxby ::= NOT INDEXED`
pub const RULE_TRIGGER_NOT_INDEXED: RuleId = 284;

/// Which form of `EXPLAIN` prefixed a statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplainMode {
    #[default]
    Off,
    Explain,
    QueryPlan,
}

/// State threaded through one SQL parse.
#[derive(Debug, Default)]
pub struct SqlContext {
    /// Syntax errors and rule-level errors, in the order found.
    pub diagnostics: Vec<Diagnostic>,
    /// Set by the most recent `EXPLAIN` prefix; never cleared.
    pub explain: ExplainMode,
    /// Statements completed so far.
    pub statements: usize,
}

impl SqlContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn error(&mut self, message: impl Into<String>, span: Span) {
        let diagnostic = Diagnostic::new(message, span);
        tracing::debug!(%diagnostic, "sql diagnostic");
        self.diagnostics.push(diagnostic);
    }
}

/// The SQL statement grammar. Builds a [`SyntaxNode`] per reduction.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlGrammar;

impl Grammar for SqlGrammar {
    type Value = SqlValue;
    type Context = SqlContext;

    fn tables(&self) -> &'static ParseTables {
        &SQL_TABLES
    }

    fn reduce(
        &self,
        rule: RuleId,
        rhs: &mut Rhs<'_, SqlValue>,
        ctx: &mut SqlContext,
    ) -> Option<SqlValue> {
        let info = SQL_TABLES.rule(rule)?;
        let children: Vec<SqlValue> = rhs
            .take_all()
            .into_iter()
            .filter_map(|(_, value)| value)
            .collect();
        let node = SyntaxNode::new(SQL_TABLES.symbol_name(info.lhs), info.lhs, rule, children);
        check_rule(&node, ctx);
        Some(SqlValue::Node(node))
    }

    fn syntax_error(&self, _symbol: SymbolCode, value: Option<&SqlValue>, ctx: &mut SqlContext) {
        let token = value.and_then(SqlValue::first_token);
        let span = value.and_then(SqlValue::span).unwrap_or_default();
        match token {
            Some(token) if !token.text.is_empty() => {
                ctx.error(format!("near \"{}\": syntax error", token.text), span);
            }
            _ => ctx.error("incomplete input", span),
        }
    }

    fn stack_overflow(&self, ctx: &mut SqlContext) {
        ctx.error("parser stack overflow", Span::default());
    }
}

/// Side effects and semantic checks attached to individual rules.
fn check_rule(node: &SyntaxNode, ctx: &mut SqlContext) {
    let span = node.span.unwrap_or_default();
    match node.rule {
        RULE_EXPLAIN => ctx.explain = ExplainMode::Explain,
        RULE_EXPLAIN_QUERY_PLAN => ctx.explain = ExplainMode::QueryPlan,
        RULE_STATEMENT => ctx.statements += 1,
        RULE_WITHOUT_OPTION => {
            let option = node.children.get(1).and_then(SqlValue::first_token);
            if let Some(option) = option {
                if !option.text.eq_ignore_ascii_case("rowid") {
                    ctx.error(format!("unknown table option: {}", option.text), span);
                }
            }
        }
        RULE_VARIABLE => {
            // `#N` names a register, which only nested parses may use.
            let text = node.tokens().first().map_or("", |token| token.text.as_str());
            let mut chars = text.chars();
            if chars.next() == Some('#') && chars.next().is_some_and(|c| c.is_ascii_digit()) {
                ctx.error(format!("near \"{text}\": syntax error"), span);
            }
        }
        RULE_TRIGGER_QUALIFIED_NAME => ctx.error(
            "qualified table names are not allowed on INSERT, UPDATE, and DELETE \
             statements within triggers",
            span,
        ),
        RULE_TRIGGER_INDEXED_BY => ctx.error(
            "the INDEXED BY clause is not allowed on UPDATE or DELETE statements \
             within triggers",
            span,
        ),
        RULE_TRIGGER_NOT_INDEXED => ctx.error(
            "the NOT INDEXED clause is not allowed on UPDATE or DELETE statements \
             within triggers",
            span,
        ),
        _ => {}
    }
}
