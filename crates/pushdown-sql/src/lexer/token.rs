//! Tokens produced by the SQL scanner.

use pushdown_core::{Span, SymbolCode};
use serde::Serialize;

use crate::tables::{token, SQL_TABLES};

/// One lexeme with its terminal code.
///
/// `text` is the source text as written, quotes included. Tokens synthesized
/// by the statement runner have empty text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SqlToken {
    pub code: SymbolCode,
    pub text: String,
    pub span: Span,
}

impl SqlToken {
    /// Creates a new token.
    #[must_use]
    pub fn new(code: SymbolCode, text: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            text: text.into(),
            span,
        }
    }

    /// A token with no source text at `offset`.
    #[must_use]
    pub fn synthetic(code: SymbolCode, offset: usize) -> Self {
        Self::new(code, String::new(), Span::empty_at(offset))
    }

    /// Grammar name of the terminal, such as `SELECT` or `ID`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        SQL_TABLES.symbol_name(self.code)
    }

    #[must_use]
    pub const fn is_eof(&self) -> bool {
        self.code == token::EOF
    }
}

/// Maps a bareword to its keyword terminal (case-insensitive).
///
/// Several spellings share a terminal: the join operators all scan as
/// `JOIN_KW`, the pattern operators as `LIKE_KW`, and the current
/// date/time functions as `CTIME_KW`.
#[must_use]
pub fn keyword_code(word: &str) -> Option<SymbolCode> {
    let code = match word.to_ascii_uppercase().as_str() {
        "ABORT" => token::ABORT,
        "ACTION" => token::ACTION,
        "ADD" => token::ADD,
        "AFTER" => token::AFTER,
        "ALL" => token::ALL,
        "ALTER" => token::ALTER,
        "ANALYZE" => token::ANALYZE,
        "AND" => token::AND,
        "AS" => token::AS,
        "ASC" => token::ASC,
        "ATTACH" => token::ATTACH,
        "AUTOINCREMENT" => token::AUTOINCR,
        "BEFORE" => token::BEFORE,
        "BEGIN" => token::BEGIN,
        "BETWEEN" => token::BETWEEN,
        "BY" => token::BY,
        "CASCADE" => token::CASCADE,
        "CASE" => token::CASE,
        "CAST" => token::CAST,
        "CHECK" => token::CHECK,
        "COLLATE" => token::COLLATE,
        "COLUMN" => token::COLUMNKW,
        "COMMIT" => token::COMMIT,
        "CONFLICT" => token::CONFLICT,
        "CONSTRAINT" => token::CONSTRAINT,
        "CREATE" => token::CREATE,
        "CROSS" | "FULL" | "INNER" | "LEFT" | "NATURAL" | "OUTER" | "RIGHT" => token::JOIN_KW,
        "CURRENT_DATE" | "CURRENT_TIME" | "CURRENT_TIMESTAMP" => token::CTIME_KW,
        "DATABASE" => token::DATABASE,
        "DEFAULT" => token::DEFAULT,
        "DEFERRABLE" => token::DEFERRABLE,
        "DEFERRED" => token::DEFERRED,
        "DELETE" => token::DELETE,
        "DESC" => token::DESC,
        "DETACH" => token::DETACH,
        "DISTINCT" => token::DISTINCT,
        "DROP" => token::DROP,
        "EACH" => token::EACH,
        "ELSE" => token::ELSE,
        "END" => token::END,
        "ESCAPE" => token::ESCAPE,
        "EXCEPT" => token::EXCEPT,
        "EXCLUSIVE" => token::EXCLUSIVE,
        "EXISTS" => token::EXISTS,
        "EXPLAIN" => token::EXPLAIN,
        "FAIL" => token::FAIL,
        "FOR" => token::FOR,
        "FOREIGN" => token::FOREIGN,
        "FROM" => token::FROM,
        "GLOB" | "LIKE" | "REGEXP" => token::LIKE_KW,
        "GROUP" => token::GROUP,
        "HAVING" => token::HAVING,
        "IF" => token::IF,
        "IGNORE" => token::IGNORE,
        "IMMEDIATE" => token::IMMEDIATE,
        "IN" => token::IN,
        "INDEX" => token::INDEX,
        "INDEXED" => token::INDEXED,
        "INITIALLY" => token::INITIALLY,
        "INSERT" => token::INSERT,
        "INSTEAD" => token::INSTEAD,
        "INTERSECT" => token::INTERSECT,
        "INTO" => token::INTO,
        "IS" => token::IS,
        "ISNULL" => token::ISNULL,
        "JOIN" => token::JOIN,
        "KEY" => token::KEY,
        "LIMIT" => token::LIMIT,
        "MATCH" => token::MATCH,
        "NO" => token::NO,
        "NOT" => token::NOT,
        "NOTNULL" => token::NOTNULL,
        "NULL" => token::NULL,
        "OF" => token::OF,
        "OFFSET" => token::OFFSET,
        "ON" => token::ON,
        "OR" => token::OR,
        "ORDER" => token::ORDER,
        "PLAN" => token::PLAN,
        "PRAGMA" => token::PRAGMA,
        "PRIMARY" => token::PRIMARY,
        "QUERY" => token::QUERY,
        "RAISE" => token::RAISE,
        "RECURSIVE" => token::RECURSIVE,
        "REFERENCES" => token::REFERENCES,
        "REINDEX" => token::REINDEX,
        "RELEASE" => token::RELEASE,
        "RENAME" => token::RENAME,
        "REPLACE" => token::REPLACE,
        "RESTRICT" => token::RESTRICT,
        "ROLLBACK" => token::ROLLBACK,
        "ROW" => token::ROW,
        "SAVEPOINT" => token::SAVEPOINT,
        "SELECT" => token::SELECT,
        "SET" => token::SET,
        "TABLE" => token::TABLE,
        "TEMP" | "TEMPORARY" => token::TEMP,
        "THEN" => token::THEN,
        "TO" => token::TO,
        "TRANSACTION" => token::TRANSACTION,
        "TRIGGER" => token::TRIGGER,
        "UNION" => token::UNION,
        "UNIQUE" => token::UNIQUE,
        "UPDATE" => token::UPDATE,
        "USING" => token::USING,
        "VACUUM" => token::VACUUM,
        "VALUES" => token::VALUES,
        "VIEW" => token::VIEW,
        "VIRTUAL" => token::VIRTUAL,
        "WHEN" => token::WHEN,
        "WHERE" => token::WHERE,
        "WITH" => token::WITH,
        "WITHOUT" => token::WITHOUT,
        _ => return None,
    };
    Some(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_code() {
        assert_eq!(keyword_code("SELECT"), Some(token::SELECT));
        assert_eq!(keyword_code("select"), Some(token::SELECT));
        assert_eq!(keyword_code("SeLeCt"), Some(token::SELECT));
        assert_eq!(keyword_code("users"), None);
        assert_eq!(keyword_code("any"), None);
    }

    #[test]
    fn test_keyword_aliases() {
        assert_eq!(keyword_code("temporary"), Some(token::TEMP));
        assert_eq!(keyword_code("column"), Some(token::COLUMNKW));
        assert_eq!(keyword_code("autoincrement"), Some(token::AUTOINCR));
        assert_eq!(keyword_code("glob"), Some(token::LIKE_KW));
        assert_eq!(keyword_code("natural"), Some(token::JOIN_KW));
        assert_eq!(keyword_code("current_timestamp"), Some(token::CTIME_KW));
    }

    #[test]
    fn test_keyword_names_match_grammar() {
        for word in ["FROM", "WHERE", "VACUUM", "WITHOUT", "INDEXED"] {
            let code = keyword_code(word).unwrap();
            assert_eq!(SQL_TABLES.symbol_name(code), word);
        }
    }

    #[test]
    fn test_token_name() {
        let token = SqlToken::new(token::ID, "users", Span::new(0, 5));
        assert_eq!(token.name(), "ID");
        assert!(!token.is_eof());
        assert!(SqlToken::synthetic(token::EOF, 5).is_eof());
    }
}
