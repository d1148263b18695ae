//! Parse tables for the SQL statement grammar.
//!
//! Terminals `0..FIRST_NONTERMINAL - 1` are scanner tokens; `ANY` is the wildcard and
//! most keywords fall back to `ID`.
//! Generated from the grammar by the table generator; do not edit.

use pushdown_core::{ActionBounds, ParseTables, RuleInfo, SymbolCode};

/// Terminal symbol codes.
pub mod token {
    use pushdown_core::SymbolCode;

    pub const EOF: SymbolCode = 0;
    pub const SEMI: SymbolCode = 1;
    pub const EXPLAIN: SymbolCode = 2;
    pub const QUERY: SymbolCode = 3;
    pub const PLAN: SymbolCode = 4;
    pub const BEGIN: SymbolCode = 5;
    pub const TRANSACTION: SymbolCode = 6;
    pub const DEFERRED: SymbolCode = 7;
    pub const IMMEDIATE: SymbolCode = 8;
    pub const EXCLUSIVE: SymbolCode = 9;
    pub const COMMIT: SymbolCode = 10;
    pub const END: SymbolCode = 11;
    pub const ROLLBACK: SymbolCode = 12;
    pub const SAVEPOINT: SymbolCode = 13;
    pub const RELEASE: SymbolCode = 14;
    pub const TO: SymbolCode = 15;
    pub const TABLE: SymbolCode = 16;
    pub const CREATE: SymbolCode = 17;
    pub const IF: SymbolCode = 18;
    pub const NOT: SymbolCode = 19;
    pub const EXISTS: SymbolCode = 20;
    pub const TEMP: SymbolCode = 21;
    pub const LP: SymbolCode = 22;
    pub const RP: SymbolCode = 23;
    pub const AS: SymbolCode = 24;
    pub const WITHOUT: SymbolCode = 25;
    pub const COMMA: SymbolCode = 26;
    pub const ID: SymbolCode = 27;
    pub const INDEXED: SymbolCode = 28;
    pub const ABORT: SymbolCode = 29;
    pub const ACTION: SymbolCode = 30;
    pub const AFTER: SymbolCode = 31;
    pub const ANALYZE: SymbolCode = 32;
    pub const ASC: SymbolCode = 33;
    pub const ATTACH: SymbolCode = 34;
    pub const BEFORE: SymbolCode = 35;
    pub const BY: SymbolCode = 36;
    pub const CASCADE: SymbolCode = 37;
    pub const CAST: SymbolCode = 38;
    pub const COLUMNKW: SymbolCode = 39;
    pub const CONFLICT: SymbolCode = 40;
    pub const DATABASE: SymbolCode = 41;
    pub const DESC: SymbolCode = 42;
    pub const DETACH: SymbolCode = 43;
    pub const EACH: SymbolCode = 44;
    pub const FAIL: SymbolCode = 45;
    pub const FOR: SymbolCode = 46;
    pub const IGNORE: SymbolCode = 47;
    pub const INITIALLY: SymbolCode = 48;
    pub const INSTEAD: SymbolCode = 49;
    pub const LIKE_KW: SymbolCode = 50;
    pub const MATCH: SymbolCode = 51;
    pub const NO: SymbolCode = 52;
    pub const KEY: SymbolCode = 53;
    pub const OF: SymbolCode = 54;
    pub const OFFSET: SymbolCode = 55;
    pub const PRAGMA: SymbolCode = 56;
    pub const RAISE: SymbolCode = 57;
    pub const RECURSIVE: SymbolCode = 58;
    pub const REPLACE: SymbolCode = 59;
    pub const RESTRICT: SymbolCode = 60;
    pub const ROW: SymbolCode = 61;
    pub const TRIGGER: SymbolCode = 62;
    pub const VACUUM: SymbolCode = 63;
    pub const VIEW: SymbolCode = 64;
    pub const VIRTUAL: SymbolCode = 65;
    pub const WITH: SymbolCode = 66;
    pub const REINDEX: SymbolCode = 67;
    pub const RENAME: SymbolCode = 68;
    pub const CTIME_KW: SymbolCode = 69;
    pub const ANY: SymbolCode = 70;
    pub const OR: SymbolCode = 71;
    pub const AND: SymbolCode = 72;
    pub const IS: SymbolCode = 73;
    pub const BETWEEN: SymbolCode = 74;
    pub const IN: SymbolCode = 75;
    pub const ISNULL: SymbolCode = 76;
    pub const NOTNULL: SymbolCode = 77;
    pub const NE: SymbolCode = 78;
    pub const EQ: SymbolCode = 79;
    pub const GT: SymbolCode = 80;
    pub const LE: SymbolCode = 81;
    pub const LT: SymbolCode = 82;
    pub const GE: SymbolCode = 83;
    pub const ESCAPE: SymbolCode = 84;
    pub const BITAND: SymbolCode = 85;
    pub const BITOR: SymbolCode = 86;
    pub const LSHIFT: SymbolCode = 87;
    pub const RSHIFT: SymbolCode = 88;
    pub const PLUS: SymbolCode = 89;
    pub const MINUS: SymbolCode = 90;
    pub const STAR: SymbolCode = 91;
    pub const SLASH: SymbolCode = 92;
    pub const REM: SymbolCode = 93;
    pub const CONCAT: SymbolCode = 94;
    pub const COLLATE: SymbolCode = 95;
    pub const BITNOT: SymbolCode = 96;
    pub const STRING: SymbolCode = 97;
    pub const JOIN_KW: SymbolCode = 98;
    pub const CONSTRAINT: SymbolCode = 99;
    pub const DEFAULT: SymbolCode = 100;
    pub const NULL: SymbolCode = 101;
    pub const PRIMARY: SymbolCode = 102;
    pub const UNIQUE: SymbolCode = 103;
    pub const CHECK: SymbolCode = 104;
    pub const REFERENCES: SymbolCode = 105;
    pub const AUTOINCR: SymbolCode = 106;
    pub const ON: SymbolCode = 107;
    pub const INSERT: SymbolCode = 108;
    pub const DELETE: SymbolCode = 109;
    pub const UPDATE: SymbolCode = 110;
    pub const SET: SymbolCode = 111;
    pub const DEFERRABLE: SymbolCode = 112;
    pub const FOREIGN: SymbolCode = 113;
    pub const DROP: SymbolCode = 114;
    pub const UNION: SymbolCode = 115;
    pub const ALL: SymbolCode = 116;
    pub const EXCEPT: SymbolCode = 117;
    pub const INTERSECT: SymbolCode = 118;
    pub const SELECT: SymbolCode = 119;
    pub const VALUES: SymbolCode = 120;
    pub const DISTINCT: SymbolCode = 121;
    pub const DOT: SymbolCode = 122;
    pub const FROM: SymbolCode = 123;
    pub const JOIN: SymbolCode = 124;
    pub const USING: SymbolCode = 125;
    pub const ORDER: SymbolCode = 126;
    pub const GROUP: SymbolCode = 127;
    pub const HAVING: SymbolCode = 128;
    pub const LIMIT: SymbolCode = 129;
    pub const WHERE: SymbolCode = 130;
    pub const INTO: SymbolCode = 131;
    pub const INTEGER: SymbolCode = 132;
    pub const FLOAT: SymbolCode = 133;
    pub const BLOB: SymbolCode = 134;
    pub const VARIABLE: SymbolCode = 135;
    pub const CASE: SymbolCode = 136;
    pub const WHEN: SymbolCode = 137;
    pub const THEN: SymbolCode = 138;
    pub const ELSE: SymbolCode = 139;
    pub const INDEX: SymbolCode = 140;
    pub const ALTER: SymbolCode = 141;
    pub const ADD: SymbolCode = 142;
}

/// Code of the first nonterminal.
pub const FIRST_NONTERMINAL: SymbolCode = 144;

#[rustfmt::skip]
static SYMBOL_NAMES: [&str; 252] = [
    "$",
    "SEMI",
    "EXPLAIN",
    "QUERY",
    "PLAN",
    "BEGIN",
    "TRANSACTION",
    "DEFERRED",
    "IMMEDIATE",
    "EXCLUSIVE",
    "COMMIT",
    "END",
    "ROLLBACK",
    "SAVEPOINT",
    "RELEASE",
    "TO",
    "TABLE",
    "CREATE",
    "IF",
    "NOT",
    "EXISTS",
    "TEMP",
    "LP",
    "RP",
    "AS",
    "WITHOUT",
    "COMMA",
    "ID",
    "INDEXED",
    "ABORT",
    "ACTION",
    "AFTER",
    "ANALYZE",
    "ASC",
    "ATTACH",
    "BEFORE",
    "BY",
    "CASCADE",
    "CAST",
    "COLUMNKW",
    "CONFLICT",
    "DATABASE",
    "DESC",
    "DETACH",
    "EACH",
    "FAIL",
    "FOR",
    "IGNORE",
    "INITIALLY",
    "INSTEAD",
    "LIKE_KW",
    "MATCH",
    "NO",
    "KEY",
    "OF",
    "OFFSET",
    "PRAGMA",
    "RAISE",
    "RECURSIVE",
    "REPLACE",
    "RESTRICT",
    "ROW",
    "TRIGGER",
    "VACUUM",
    "VIEW",
    "VIRTUAL",
    "WITH",
    "REINDEX",
    "RENAME",
    "CTIME_KW",
    "ANY",
    "OR",
    "AND",
    "IS",
    "BETWEEN",
    "IN",
    "ISNULL",
    "NOTNULL",
    "NE",
    "EQ",
    "GT",
    "LE",
    "LT",
    "GE",
    "ESCAPE",
    "BITAND",
    "BITOR",
    "LSHIFT",
    "RSHIFT",
    "PLUS",
    "MINUS",
    "STAR",
    "SLASH",
    "REM",
    "CONCAT",
    "COLLATE",
    "BITNOT",
    "STRING",
    "JOIN_KW",
    "CONSTRAINT",
    "DEFAULT",
    "NULL",
    "PRIMARY",
    "UNIQUE",
    "CHECK",
    "REFERENCES",
    "AUTOINCR",
    "ON",
    "INSERT",
    "DELETE",
    "UPDATE",
    "SET",
    "DEFERRABLE",
    "FOREIGN",
    "DROP",
    "UNION",
    "ALL",
    "EXCEPT",
    "INTERSECT",
    "SELECT",
    "VALUES",
    "DISTINCT",
    "DOT",
    "FROM",
    "JOIN",
    "USING",
    "ORDER",
    "GROUP",
    "HAVING",
    "LIMIT",
    "WHERE",
    "INTO",
    "INTEGER",
    "FLOAT",
    "BLOB",
    "VARIABLE",
    "CASE",
    "WHEN",
    "THEN",
    "ELSE",
    "INDEX",
    "ALTER",
    "ADD",
    "error",
    "input",
    "cmdlist",
    "ecmd",
    "explain",
    "cmdx",
    "cmd",
    "transtype",
    "trans_opt",
    "nm",
    "savepoint_opt",
    "create_table",
    "create_table_args",
    "createkw",
    "temp",
    "ifnotexists",
    "dbnm",
    "columnlist",
    "conslist_opt",
    "table_options",
    "select",
    "column",
    "columnid",
    "type",
    "carglist",
    "typetoken",
    "typename",
    "signed",
    "plus_num",
    "minus_num",
    "ccons",
    "term",
    "expr",
    "onconf",
    "sortorder",
    "autoinc",
    "eidlist_opt",
    "refargs",
    "defer_subclause",
    "refarg",
    "refact",
    "init_deferred_pred_opt",
    "conslist",
    "tconscomma",
    "tcons",
    "sortlist",
    "eidlist",
    "defer_subclause_opt",
    "orconf",
    "resolvetype",
    "raisetype",
    "ifexists",
    "fullname",
    "selectnowith",
    "oneselect",
    "with",
    "multiselect_op",
    "distinct",
    "selcollist",
    "from",
    "where_opt",
    "groupby_opt",
    "having_opt",
    "orderby_opt",
    "limit_opt",
    "values",
    "nexprlist",
    "exprlist",
    "sclp",
    "as",
    "seltablist",
    "stl_prefix",
    "joinop",
    "indexed_opt",
    "on_opt",
    "using_opt",
    "idlist",
    "setlist",
    "insert_cmd",
    "idlist_opt",
    "likeop",
    "between_op",
    "in_op",
    "case_operand",
    "case_exprlist",
    "case_else",
    "uniqueflag",
    "collate",
    "nmnum",
    "trigger_decl",
    "trigger_cmd_list",
    "trigger_time",
    "trigger_event",
    "foreach_clause",
    "when_clause",
    "trigger_cmd",
    "trnm",
    "tridxby",
    "database_kw_opt",
    "key_opt",
    "add_column_fullname",
    "kwcolumn_opt",
    "create_vtab",
    "vtabarglist",
    "vtabarg",
    "vtabargtoken",
    "lp",
    "anylist",
    "wqlist",
];

#[rustfmt::skip]
static RULE_NAMES: [&str; 328] = [
    "input ::= cmdlist",
    "cmdlist ::= cmdlist ecmd",
    "cmdlist ::= ecmd",
    "ecmd ::= SEMI",
    "ecmd ::= explain cmdx SEMI",
    "explain ::=",
    "explain ::= EXPLAIN",
    "explain ::= EXPLAIN QUERY PLAN",
    "cmdx ::= cmd",
    "cmd ::= BEGIN transtype trans_opt",
    "trans_opt ::=",
    "trans_opt ::= TRANSACTION",
    "trans_opt ::= TRANSACTION nm",
    "transtype ::=",
    "transtype ::= DEFERRED",
    "transtype ::= IMMEDIATE",
    "transtype ::= EXCLUSIVE",
    "cmd ::= COMMIT trans_opt",
    "cmd ::= END trans_opt",
    "cmd ::= ROLLBACK trans_opt",
    "savepoint_opt ::= SAVEPOINT",
    "savepoint_opt ::=",
    "cmd ::= SAVEPOINT nm",
    "cmd ::= RELEASE savepoint_opt nm",
    "cmd ::= ROLLBACK trans_opt TO savepoint_opt nm",
    "cmd ::= create_table create_table_args",
    "create_table ::= createkw temp TABLE ifnotexists nm dbnm",
    "createkw ::= CREATE",
    "ifnotexists ::=",
    "ifnotexists ::= IF NOT EXISTS",
    "temp ::= TEMP",
    "temp ::=",
    "create_table_args ::= LP columnlist conslist_opt RP table_options",
    "create_table_args ::= AS select",
    "table_options ::=",
    "table_options ::= WITHOUT nm",
    "columnlist ::= columnlist COMMA column",
    "columnlist ::= column",
    "column ::= columnid type carglist",
    "columnid ::= nm",
    "nm ::= ID|INDEXED",
    "nm ::= STRING",
    "nm ::= JOIN_KW",
    "type ::=",
    "type ::= typetoken",
    "typetoken ::= typename",
    "typetoken ::= typename LP signed RP",
    "typetoken ::= typename LP signed COMMA signed RP",
    "typename ::= ID|STRING",
    "typename ::= typename ID|STRING",
    "signed ::= plus_num",
    "signed ::= minus_num",
    "carglist ::= carglist ccons",
    "carglist ::=",
    "ccons ::= CONSTRAINT nm",
    "ccons ::= DEFAULT term",
    "ccons ::= DEFAULT LP expr RP",
    "ccons ::= DEFAULT PLUS term",
    "ccons ::= DEFAULT MINUS term",
    "ccons ::= DEFAULT ID|INDEXED",
    "ccons ::= NULL onconf",
    "ccons ::= NOT NULL onconf",
    "ccons ::= PRIMARY KEY sortorder onconf autoinc",
    "ccons ::= UNIQUE onconf",
    "ccons ::= CHECK LP expr RP",
    "ccons ::= REFERENCES nm eidlist_opt refargs",
    "ccons ::= defer_subclause",
    "ccons ::= COLLATE ID|STRING",
    "autoinc ::=",
    "autoinc ::= AUTOINCR",
    "refargs ::=",
    "refargs ::= refargs refarg",
    "refarg ::= MATCH nm",
    "refarg ::= ON INSERT refact",
    "refarg ::= ON DELETE refact",
    "refarg ::= ON UPDATE refact",
    "refact ::= SET NULL",
    "refact ::= SET DEFAULT",
    "refact ::= CASCADE",
    "refact ::= RESTRICT",
    "refact ::= NO ACTION",
    "defer_subclause ::= NOT DEFERRABLE init_deferred_pred_opt",
    "defer_subclause ::= DEFERRABLE init_deferred_pred_opt",
    "init_deferred_pred_opt ::=",
    "init_deferred_pred_opt ::= INITIALLY DEFERRED",
    "init_deferred_pred_opt ::= INITIALLY IMMEDIATE",
    "conslist_opt ::=",
    "conslist_opt ::= COMMA conslist",
    "conslist ::= conslist tconscomma tcons",
    "conslist ::= tcons",
    "tconscomma ::= COMMA",
    "tconscomma ::=",
    "tcons ::= CONSTRAINT nm",
    "tcons ::= PRIMARY KEY LP sortlist autoinc RP onconf",
    "tcons ::= UNIQUE LP sortlist RP onconf",
    "tcons ::= CHECK LP expr RP onconf",
    "tcons ::= FOREIGN KEY LP eidlist RP REFERENCES nm eidlist_opt refargs defer_subclause_opt",
    "defer_subclause_opt ::=",
    "defer_subclause_opt ::= defer_subclause",
    "onconf ::=",
    "onconf ::= ON CONFLICT resolvetype",
    "orconf ::=",
    "orconf ::= OR resolvetype",
    "resolvetype ::= raisetype",
    "resolvetype ::= IGNORE",
    "resolvetype ::= REPLACE",
    "cmd ::= DROP TABLE ifexists fullname",
    "ifexists ::= IF EXISTS",
    "ifexists ::=",
    "cmd ::= createkw temp VIEW ifnotexists nm dbnm eidlist_opt AS select",
    "cmd ::= DROP VIEW ifexists fullname",
    "cmd ::= select",
    "select ::= with selectnowith",
    "selectnowith ::= oneselect",
    "selectnowith ::= selectnowith multiselect_op oneselect",
    "multiselect_op ::= UNION",
    "multiselect_op ::= UNION ALL",
    "multiselect_op ::= EXCEPT|INTERSECT",
    "oneselect ::= SELECT distinct selcollist from where_opt groupby_opt having_opt orderby_opt limit_opt",
    "oneselect ::= values",
    "values ::= VALUES LP nexprlist RP",
    "values ::= values COMMA LP exprlist RP",
    "distinct ::= DISTINCT",
    "distinct ::= ALL",
    "distinct ::=",
    "sclp ::= selcollist COMMA",
    "sclp ::=",
    "selcollist ::= sclp expr as",
    "selcollist ::= sclp STAR",
    "selcollist ::= sclp nm DOT STAR",
    "as ::= AS nm",
    "as ::= ID|STRING",
    "as ::=",
    "from ::=",
    "from ::= FROM seltablist",
    "stl_prefix ::= seltablist joinop",
    "stl_prefix ::=",
    "seltablist ::= stl_prefix nm dbnm as indexed_opt on_opt using_opt",
    "seltablist ::= stl_prefix nm dbnm LP exprlist RP as on_opt using_opt",
    "seltablist ::= stl_prefix LP select RP as on_opt using_opt",
    "seltablist ::= stl_prefix LP seltablist RP as on_opt using_opt",
    "dbnm ::=",
    "dbnm ::= DOT nm",
    "fullname ::= nm dbnm",
    "joinop ::= COMMA|JOIN",
    "joinop ::= JOIN_KW JOIN",
    "joinop ::= JOIN_KW nm JOIN",
    "joinop ::= JOIN_KW nm nm JOIN",
    "on_opt ::= ON expr",
    "on_opt ::=",
    "indexed_opt ::=",
    "indexed_opt ::= INDEXED BY nm",
    "indexed_opt ::= NOT INDEXED",
    "using_opt ::= USING LP idlist RP",
    "using_opt ::=",
    "orderby_opt ::=",
    "orderby_opt ::= ORDER BY sortlist",
    "sortlist ::= sortlist COMMA expr sortorder",
    "sortlist ::= expr sortorder",
    "sortorder ::= ASC",
    "sortorder ::= DESC",
    "sortorder ::=",
    "groupby_opt ::=",
    "groupby_opt ::= GROUP BY nexprlist",
    "having_opt ::=",
    "having_opt ::= HAVING expr",
    "limit_opt ::=",
    "limit_opt ::= LIMIT expr",
    "limit_opt ::= LIMIT expr OFFSET expr",
    "limit_opt ::= LIMIT expr COMMA expr",
    "cmd ::= with DELETE FROM fullname indexed_opt where_opt",
    "where_opt ::=",
    "where_opt ::= WHERE expr",
    "cmd ::= with UPDATE orconf fullname indexed_opt SET setlist where_opt",
    "setlist ::= setlist COMMA nm EQ expr",
    "setlist ::= nm EQ expr",
    "cmd ::= with insert_cmd INTO fullname idlist_opt select",
    "cmd ::= with insert_cmd INTO fullname idlist_opt DEFAULT VALUES",
    "insert_cmd ::= INSERT orconf",
    "insert_cmd ::= REPLACE",
    "idlist_opt ::=",
    "idlist_opt ::= LP idlist RP",
    "idlist ::= idlist COMMA nm",
    "idlist ::= nm",
    "expr ::= term",
    "expr ::= LP expr RP",
    "term ::= NULL",
    "expr ::= ID|INDEXED",
    "expr ::= JOIN_KW",
    "expr ::= nm DOT nm",
    "expr ::= nm DOT nm DOT nm",
    "term ::= INTEGER|FLOAT|BLOB",
    "term ::= STRING",
    "expr ::= VARIABLE",
    "expr ::= expr COLLATE ID|STRING",
    "expr ::= CAST LP expr AS typetoken RP",
    "expr ::= ID|INDEXED LP distinct exprlist RP",
    "expr ::= ID|INDEXED LP STAR RP",
    "term ::= CTIME_KW",
    "expr ::= expr AND expr",
    "expr ::= expr OR expr",
    "expr ::= expr LT|GT|GE|LE expr",
    "expr ::= expr EQ|NE expr",
    "expr ::= expr BITAND|BITOR|LSHIFT|RSHIFT expr",
    "expr ::= expr PLUS|MINUS expr",
    "expr ::= expr STAR|SLASH|REM expr",
    "expr ::= expr CONCAT expr",
    "likeop ::= LIKE_KW|MATCH",
    "likeop ::= NOT LIKE_KW|MATCH",
    "expr ::= expr likeop expr",
    "expr ::= expr likeop expr ESCAPE expr",
    "expr ::= expr ISNULL|NOTNULL",
    "expr ::= expr NOT NULL",
    "expr ::= expr IS expr",
    "expr ::= expr IS NOT expr",
    "expr ::= NOT expr",
    "expr ::= BITNOT expr",
    "expr ::= MINUS expr",
    "expr ::= PLUS expr",
    "between_op ::= BETWEEN",
    "between_op ::= NOT BETWEEN",
    "expr ::= expr between_op expr AND expr",
    "in_op ::= IN",
    "in_op ::= NOT IN",
    "expr ::= expr in_op LP exprlist RP",
    "expr ::= LP select RP",
    "expr ::= expr in_op LP select RP",
    "expr ::= expr in_op nm dbnm",
    "expr ::= EXISTS LP select RP",
    "expr ::= CASE case_operand case_exprlist case_else END",
    "case_exprlist ::= case_exprlist WHEN expr THEN expr",
    "case_exprlist ::= WHEN expr THEN expr",
    "case_else ::= ELSE expr",
    "case_else ::=",
    "case_operand ::= expr",
    "case_operand ::=",
    "exprlist ::= nexprlist",
    "exprlist ::=",
    "nexprlist ::= nexprlist COMMA expr",
    "nexprlist ::= expr",
    "cmd ::= createkw uniqueflag INDEX ifnotexists nm dbnm ON nm LP sortlist RP where_opt",
    "uniqueflag ::= UNIQUE",
    "uniqueflag ::=",
    "eidlist_opt ::=",
    "eidlist_opt ::= LP eidlist RP",
    "eidlist ::= eidlist COMMA nm collate sortorder",
    "eidlist ::= nm collate sortorder",
    "collate ::=",
    "collate ::= COLLATE ID|STRING",
    "cmd ::= DROP INDEX ifexists fullname",
    "cmd ::= VACUUM",
    "cmd ::= VACUUM nm",
    "cmd ::= PRAGMA nm dbnm",
    "cmd ::= PRAGMA nm dbnm EQ nmnum",
    "cmd ::= PRAGMA nm dbnm LP nmnum RP",
    "cmd ::= PRAGMA nm dbnm EQ minus_num",
    "cmd ::= PRAGMA nm dbnm LP minus_num RP",
    "nmnum ::= plus_num",
    "nmnum ::= nm",
    "nmnum ::= ON",
    "nmnum ::= DELETE",
    "nmnum ::= DEFAULT",
    "plus_num ::= PLUS INTEGER|FLOAT",
    "plus_num ::= INTEGER|FLOAT",
    "minus_num ::= MINUS INTEGER|FLOAT",
    "cmd ::= createkw trigger_decl BEGIN trigger_cmd_list END",
    "trigger_decl ::= temp TRIGGER ifnotexists nm dbnm trigger_time trigger_event ON fullname foreach_clause when_clause",
    "trigger_time ::= BEFORE",
    "trigger_time ::= AFTER",
    "trigger_time ::= INSTEAD OF",
    "trigger_time ::=",
    "trigger_event ::= DELETE|INSERT",
    "trigger_event ::= UPDATE",
    "trigger_event ::= UPDATE OF idlist",
    "foreach_clause ::=",
    "foreach_clause ::= FOR EACH ROW",
    "when_clause ::=",
    "when_clause ::= WHEN expr",
    "trigger_cmd_list ::= trigger_cmd_list trigger_cmd SEMI",
    "trigger_cmd_list ::= trigger_cmd SEMI",
    "trnm ::= nm",
    "trnm ::= nm DOT nm",
    "tridxby ::=",
    "tridxby ::= INDEXED BY nm",
    "tridxby ::= NOT INDEXED",
    "trigger_cmd ::= UPDATE orconf trnm tridxby SET setlist where_opt",
    "trigger_cmd ::= insert_cmd INTO trnm idlist_opt select",
    "trigger_cmd ::= DELETE FROM trnm tridxby where_opt",
    "trigger_cmd ::= select",
    "expr ::= RAISE LP IGNORE RP",
    "expr ::= RAISE LP raisetype COMMA nm RP",
    "raisetype ::= ROLLBACK",
    "raisetype ::= ABORT",
    "raisetype ::= FAIL",
    "cmd ::= DROP TRIGGER ifexists fullname",
    "cmd ::= ATTACH database_kw_opt expr AS expr key_opt",
    "cmd ::= DETACH database_kw_opt expr",
    "key_opt ::=",
    "key_opt ::= KEY expr",
    "database_kw_opt ::= DATABASE",
    "database_kw_opt ::=",
    "cmd ::= REINDEX",
    "cmd ::= REINDEX nm dbnm",
    "cmd ::= ANALYZE",
    "cmd ::= ANALYZE nm dbnm",
    "cmd ::= ALTER TABLE fullname RENAME TO nm",
    "cmd ::= ALTER TABLE add_column_fullname ADD kwcolumn_opt column",
    "add_column_fullname ::= fullname",
    "kwcolumn_opt ::=",
    "kwcolumn_opt ::= COLUMNKW",
    "cmd ::= create_vtab",
    "cmd ::= create_vtab LP vtabarglist RP",
    "create_vtab ::= createkw VIRTUAL TABLE ifnotexists nm dbnm USING nm",
    "vtabarglist ::= vtabarg",
    "vtabarglist ::= vtabarglist COMMA vtabarg",
    "vtabarg ::=",
    "vtabarg ::= vtabarg vtabargtoken",
    "vtabargtoken ::= ANY",
    "vtabargtoken ::= lp anylist RP",
    "lp ::= LP",
    "anylist ::=",
    "anylist ::= anylist LP anylist RP",
    "anylist ::= anylist ANY",
    "with ::=",
    "with ::= WITH wqlist",
    "with ::= WITH RECURSIVE wqlist",
    "wqlist ::= nm eidlist_opt AS LP select RP",
    "wqlist ::= wqlist COMMA nm eidlist_opt AS LP select RP",
];

#[rustfmt::skip]
static RULES: [RuleInfo; 328] = [
    RuleInfo::new(144, 1), RuleInfo::new(145, 2), RuleInfo::new(145, 1), RuleInfo::new(146, 1),
    RuleInfo::new(146, 3), RuleInfo::new(147, 0), RuleInfo::new(147, 1), RuleInfo::new(147, 3),
    RuleInfo::new(148, 1), RuleInfo::new(149, 3), RuleInfo::new(151, 0), RuleInfo::new(151, 1),
    RuleInfo::new(151, 2), RuleInfo::new(150, 0), RuleInfo::new(150, 1), RuleInfo::new(150, 1),
    RuleInfo::new(150, 1), RuleInfo::new(149, 2), RuleInfo::new(149, 2), RuleInfo::new(149, 2),
    RuleInfo::new(153, 1), RuleInfo::new(153, 0), RuleInfo::new(149, 2), RuleInfo::new(149, 3),
    RuleInfo::new(149, 5), RuleInfo::new(149, 2), RuleInfo::new(154, 6), RuleInfo::new(156, 1),
    RuleInfo::new(158, 0), RuleInfo::new(158, 3), RuleInfo::new(157, 1), RuleInfo::new(157, 0),
    RuleInfo::new(155, 5), RuleInfo::new(155, 2), RuleInfo::new(162, 0), RuleInfo::new(162, 2),
    RuleInfo::new(160, 3), RuleInfo::new(160, 1), RuleInfo::new(164, 3), RuleInfo::new(165, 1),
    RuleInfo::new(152, 1), RuleInfo::new(152, 1), RuleInfo::new(152, 1), RuleInfo::new(166, 0),
    RuleInfo::new(166, 1), RuleInfo::new(168, 1), RuleInfo::new(168, 4), RuleInfo::new(168, 6),
    RuleInfo::new(169, 1), RuleInfo::new(169, 2), RuleInfo::new(170, 1), RuleInfo::new(170, 1),
    RuleInfo::new(167, 2), RuleInfo::new(167, 0), RuleInfo::new(173, 2), RuleInfo::new(173, 2),
    RuleInfo::new(173, 4), RuleInfo::new(173, 3), RuleInfo::new(173, 3), RuleInfo::new(173, 2),
    RuleInfo::new(173, 2), RuleInfo::new(173, 3), RuleInfo::new(173, 5), RuleInfo::new(173, 2),
    RuleInfo::new(173, 4), RuleInfo::new(173, 4), RuleInfo::new(173, 1), RuleInfo::new(173, 2),
    RuleInfo::new(178, 0), RuleInfo::new(178, 1), RuleInfo::new(180, 0), RuleInfo::new(180, 2),
    RuleInfo::new(182, 2), RuleInfo::new(182, 3), RuleInfo::new(182, 3), RuleInfo::new(182, 3),
    RuleInfo::new(183, 2), RuleInfo::new(183, 2), RuleInfo::new(183, 1), RuleInfo::new(183, 1),
    RuleInfo::new(183, 2), RuleInfo::new(181, 3), RuleInfo::new(181, 2), RuleInfo::new(184, 0),
    RuleInfo::new(184, 2), RuleInfo::new(184, 2), RuleInfo::new(161, 0), RuleInfo::new(161, 2),
    RuleInfo::new(185, 3), RuleInfo::new(185, 1), RuleInfo::new(186, 1), RuleInfo::new(186, 0),
    RuleInfo::new(187, 2), RuleInfo::new(187, 7), RuleInfo::new(187, 5), RuleInfo::new(187, 5),
    RuleInfo::new(187, 10), RuleInfo::new(190, 0), RuleInfo::new(190, 1), RuleInfo::new(176, 0),
    RuleInfo::new(176, 3), RuleInfo::new(191, 0), RuleInfo::new(191, 2), RuleInfo::new(192, 1),
    RuleInfo::new(192, 1), RuleInfo::new(192, 1), RuleInfo::new(149, 4), RuleInfo::new(194, 2),
    RuleInfo::new(194, 0), RuleInfo::new(149, 9), RuleInfo::new(149, 4), RuleInfo::new(149, 1),
    RuleInfo::new(163, 2), RuleInfo::new(196, 1), RuleInfo::new(196, 3), RuleInfo::new(199, 1),
    RuleInfo::new(199, 2), RuleInfo::new(199, 1), RuleInfo::new(197, 9), RuleInfo::new(197, 1),
    RuleInfo::new(208, 4), RuleInfo::new(208, 5), RuleInfo::new(200, 1), RuleInfo::new(200, 1),
    RuleInfo::new(200, 0), RuleInfo::new(211, 2), RuleInfo::new(211, 0), RuleInfo::new(201, 3),
    RuleInfo::new(201, 2), RuleInfo::new(201, 4), RuleInfo::new(212, 2), RuleInfo::new(212, 1),
    RuleInfo::new(212, 0), RuleInfo::new(202, 0), RuleInfo::new(202, 2), RuleInfo::new(214, 2),
    RuleInfo::new(214, 0), RuleInfo::new(213, 7), RuleInfo::new(213, 9), RuleInfo::new(213, 7),
    RuleInfo::new(213, 7), RuleInfo::new(159, 0), RuleInfo::new(159, 2), RuleInfo::new(195, 2),
    RuleInfo::new(215, 1), RuleInfo::new(215, 2), RuleInfo::new(215, 3), RuleInfo::new(215, 4),
    RuleInfo::new(217, 2), RuleInfo::new(217, 0), RuleInfo::new(216, 0), RuleInfo::new(216, 3),
    RuleInfo::new(216, 2), RuleInfo::new(218, 4), RuleInfo::new(218, 0), RuleInfo::new(206, 0),
    RuleInfo::new(206, 3), RuleInfo::new(188, 4), RuleInfo::new(188, 2), RuleInfo::new(177, 1),
    RuleInfo::new(177, 1), RuleInfo::new(177, 0), RuleInfo::new(204, 0), RuleInfo::new(204, 3),
    RuleInfo::new(205, 0), RuleInfo::new(205, 2), RuleInfo::new(207, 0), RuleInfo::new(207, 2),
    RuleInfo::new(207, 4), RuleInfo::new(207, 4), RuleInfo::new(149, 6), RuleInfo::new(203, 0),
    RuleInfo::new(203, 2), RuleInfo::new(149, 8), RuleInfo::new(220, 5), RuleInfo::new(220, 3),
    RuleInfo::new(149, 6), RuleInfo::new(149, 7), RuleInfo::new(221, 2), RuleInfo::new(221, 1),
    RuleInfo::new(222, 0), RuleInfo::new(222, 3), RuleInfo::new(219, 3), RuleInfo::new(219, 1),
    RuleInfo::new(175, 1), RuleInfo::new(175, 3), RuleInfo::new(174, 1), RuleInfo::new(175, 1),
    RuleInfo::new(175, 1), RuleInfo::new(175, 3), RuleInfo::new(175, 5), RuleInfo::new(174, 1),
    RuleInfo::new(174, 1), RuleInfo::new(175, 1), RuleInfo::new(175, 3), RuleInfo::new(175, 6),
    RuleInfo::new(175, 5), RuleInfo::new(175, 4), RuleInfo::new(174, 1), RuleInfo::new(175, 3),
    RuleInfo::new(175, 3), RuleInfo::new(175, 3), RuleInfo::new(175, 3), RuleInfo::new(175, 3),
    RuleInfo::new(175, 3), RuleInfo::new(175, 3), RuleInfo::new(175, 3), RuleInfo::new(223, 1),
    RuleInfo::new(223, 2), RuleInfo::new(175, 3), RuleInfo::new(175, 5), RuleInfo::new(175, 2),
    RuleInfo::new(175, 3), RuleInfo::new(175, 3), RuleInfo::new(175, 4), RuleInfo::new(175, 2),
    RuleInfo::new(175, 2), RuleInfo::new(175, 2), RuleInfo::new(175, 2), RuleInfo::new(224, 1),
    RuleInfo::new(224, 2), RuleInfo::new(175, 5), RuleInfo::new(225, 1), RuleInfo::new(225, 2),
    RuleInfo::new(175, 5), RuleInfo::new(175, 3), RuleInfo::new(175, 5), RuleInfo::new(175, 4),
    RuleInfo::new(175, 4), RuleInfo::new(175, 5), RuleInfo::new(227, 5), RuleInfo::new(227, 4),
    RuleInfo::new(228, 2), RuleInfo::new(228, 0), RuleInfo::new(226, 1), RuleInfo::new(226, 0),
    RuleInfo::new(210, 1), RuleInfo::new(210, 0), RuleInfo::new(209, 3), RuleInfo::new(209, 1),
    RuleInfo::new(149, 12), RuleInfo::new(229, 1), RuleInfo::new(229, 0), RuleInfo::new(179, 0),
    RuleInfo::new(179, 3), RuleInfo::new(189, 5), RuleInfo::new(189, 3), RuleInfo::new(230, 0),
    RuleInfo::new(230, 2), RuleInfo::new(149, 4), RuleInfo::new(149, 1), RuleInfo::new(149, 2),
    RuleInfo::new(149, 3), RuleInfo::new(149, 5), RuleInfo::new(149, 6), RuleInfo::new(149, 5),
    RuleInfo::new(149, 6), RuleInfo::new(231, 1), RuleInfo::new(231, 1), RuleInfo::new(231, 1),
    RuleInfo::new(231, 1), RuleInfo::new(231, 1), RuleInfo::new(171, 2), RuleInfo::new(171, 1),
    RuleInfo::new(172, 2), RuleInfo::new(149, 5), RuleInfo::new(232, 11), RuleInfo::new(234, 1),
    RuleInfo::new(234, 1), RuleInfo::new(234, 2), RuleInfo::new(234, 0), RuleInfo::new(235, 1),
    RuleInfo::new(235, 1), RuleInfo::new(235, 3), RuleInfo::new(236, 0), RuleInfo::new(236, 3),
    RuleInfo::new(237, 0), RuleInfo::new(237, 2), RuleInfo::new(233, 3), RuleInfo::new(233, 2),
    RuleInfo::new(239, 1), RuleInfo::new(239, 3), RuleInfo::new(240, 0), RuleInfo::new(240, 3),
    RuleInfo::new(240, 2), RuleInfo::new(238, 7), RuleInfo::new(238, 5), RuleInfo::new(238, 5),
    RuleInfo::new(238, 1), RuleInfo::new(175, 4), RuleInfo::new(175, 6), RuleInfo::new(193, 1),
    RuleInfo::new(193, 1), RuleInfo::new(193, 1), RuleInfo::new(149, 4), RuleInfo::new(149, 6),
    RuleInfo::new(149, 3), RuleInfo::new(242, 0), RuleInfo::new(242, 2), RuleInfo::new(241, 1),
    RuleInfo::new(241, 0), RuleInfo::new(149, 1), RuleInfo::new(149, 3), RuleInfo::new(149, 1),
    RuleInfo::new(149, 3), RuleInfo::new(149, 6), RuleInfo::new(149, 6), RuleInfo::new(243, 1),
    RuleInfo::new(244, 0), RuleInfo::new(244, 1), RuleInfo::new(149, 1), RuleInfo::new(149, 4),
    RuleInfo::new(245, 8), RuleInfo::new(246, 1), RuleInfo::new(246, 3), RuleInfo::new(247, 0),
    RuleInfo::new(247, 2), RuleInfo::new(248, 1), RuleInfo::new(248, 3), RuleInfo::new(249, 1),
    RuleInfo::new(250, 0), RuleInfo::new(250, 4), RuleInfo::new(250, 2), RuleInfo::new(198, 0),
    RuleInfo::new(198, 2), RuleInfo::new(198, 3), RuleInfo::new(251, 6), RuleInfo::new(251, 8),
];

#[rustfmt::skip]
static ACTION: [u16; 1501] = [
    311, 1306, 145, 651, 2, 192, 652, 338, 780, 92, 92, 92, 92, 85, 90, 90,
    90, 90, 89, 89, 88, 88, 88, 87, 335, 88, 88, 88, 87, 335, 327, 856,
    856, 92, 92, 92, 92, 697, 90, 90, 90, 90, 89, 89, 88, 88, 88, 87,
    335, 76, 807, 74, 93, 94, 84, 868, 871, 860, 860, 91, 91, 92, 92, 92,
    92, 335, 90, 90, 90, 90, 89, 89, 88, 88, 88, 87, 335, 311, 780, 90,
    90, 90, 90, 89, 89, 88, 88, 88, 87, 335, 356, 808, 776, 701, 689, 689,
    86, 83, 166, 257, 809, 715, 430, 86, 83, 166, 324, 697, 856, 856, 201, 158,
    276, 387, 271, 386, 188, 689, 689, 828, 86, 83, 166, 269, 833, 49, 123, 87,
    335, 93, 94, 84, 868, 871, 860, 860, 91, 91, 92, 92, 92, 92, 239, 90,
    90, 90, 90, 89, 89, 88, 88, 88, 87, 335, 311, 763, 333, 332, 216, 408,
    394, 69, 231, 393, 690, 691, 396, 910, 251, 354, 250, 288, 315, 430, 908, 430,
    909, 89, 89, 88, 88, 88, 87, 335, 391, 856, 856, 690, 691, 183, 95, 123,
    384, 381, 380, 833, 31, 833, 49, 912, 912, 751, 752, 379, 123, 311, 93, 94,
    84, 868, 871, 860, 860, 91, 91, 92, 92, 92, 92, 114, 90, 90, 90, 90,
    89, 89, 88, 88, 88, 87, 335, 430, 408, 399, 435, 657, 856, 856, 346, 57,
    232, 828, 109, 704, 366, 689, 689, 363, 825, 760, 97, 749, 752, 833, 49, 708,
    708, 93, 94, 84, 868, 871, 860, 860, 91, 91, 92, 92, 92, 92, 423, 90,
    90, 90, 90, 89, 89, 88, 88, 88, 87, 335, 311, 114, 22, 361, 688, 58,
    408, 390, 251, 349, 240, 213, 762, 689, 689, 847, 685, 115, 361, 231, 393, 689,
    689, 396, 183, 689, 689, 384, 381, 380, 361, 856, 856, 690, 691, 160, 159, 223,
    379, 738, 25, 806, 707, 841, 143, 689, 689, 835, 392, 339, 766, 766, 93, 94,
    84, 868, 871, 860, 860, 91, 91, 92, 92, 92, 92, 914, 90, 90, 90, 90,
    89, 89, 88, 88, 88, 87, 335, 311, 840, 840, 840, 266, 257, 690, 691, 778,
    706, 86, 83, 166, 219, 690, 691, 737, 1, 690, 691, 689, 689, 689, 689, 430,
    86, 83, 166, 249, 688, 937, 856, 856, 427, 699, 700, 828, 298, 690, 691, 221,
    686, 115, 123, 944, 795, 833, 48, 342, 305, 970, 847, 93, 94, 84, 868, 871,
    860, 860, 91, 91, 92, 92, 92, 92, 114, 90, 90, 90, 90, 89, 89, 88,
    88, 88, 87, 335, 311, 940, 841, 679, 713, 429, 835, 430, 251, 354, 250, 355,
    288, 690, 691, 690, 691, 285, 941, 340, 971, 287, 210, 23, 174, 793, 832, 430,
    353, 833, 10, 856, 856, 24, 942, 151, 753, 840, 840, 840, 794, 968, 1290, 321,
    398, 1290, 356, 352, 754, 833, 49, 935, 93, 94, 84, 868, 871, 860, 860, 91,
    91, 92, 92, 92, 92, 430, 90, 90, 90, 90, 89, 89, 88, 88, 88, 87,
    335, 311, 376, 114, 907, 705, 430, 907, 328, 890, 114, 833, 10, 966, 430, 857,
    857, 320, 189, 163, 832, 165, 430, 906, 344, 323, 906, 904, 833, 10, 965, 306,
    856, 856, 187, 419, 833, 10, 220, 869, 872, 832, 222, 403, 833, 49, 1219, 793,
    68, 937, 406, 245, 66, 93, 94, 84, 868, 871, 860, 860, 91, 91, 92, 92,
    92, 92, 861, 90, 90, 90, 90, 89, 89, 88, 88, 88, 87, 335, 311, 404,
    213, 762, 834, 345, 114, 940, 902, 368, 727, 5, 316, 192, 396, 772, 780, 269,
    230, 242, 771, 244, 397, 164, 941, 385, 123, 347, 55, 355, 329, 856, 856, 728,
    333, 332, 688, 968, 1291, 724, 942, 1291, 413, 214, 833, 9, 362, 286, 955, 115,
    718, 311, 93, 94, 84, 868, 871, 860, 860, 91, 91, 92, 92, 92, 92, 430,
    90, 90, 90, 90, 89, 89, 88, 88, 88, 87, 335, 912, 912, 1300, 1300, 758,
    856, 856, 325, 966, 780, 833, 35, 747, 720, 334, 699, 700, 977, 652, 338, 243,
    745, 920, 920, 369, 187, 93, 94, 84, 868, 871, 860, 860, 91, 91, 92, 92,
    92, 92, 114, 90, 90, 90, 90, 89, 89, 88, 88, 88, 87, 335, 311, 430,
    954, 430, 112, 310, 430, 693, 317, 698, 400, 430, 793, 359, 430, 1017, 430, 192,
    430, 401, 780, 430, 360, 833, 36, 833, 12, 430, 833, 27, 316, 856, 856, 833,
    37, 20, 833, 38, 833, 39, 833, 28, 72, 833, 29, 663, 664, 665, 264, 833,
    40, 234, 93, 94, 84, 868, 871, 860, 860, 91, 91, 92, 92, 92, 92, 430,
    90, 90, 90, 90, 89, 89, 88, 88, 88, 87, 335, 311, 430, 698, 430, 917,
    147, 430, 165, 916, 275, 833, 41, 430, 780, 430, 21, 430, 259, 430, 262, 274,
    430, 367, 833, 42, 833, 11, 430, 833, 43, 235, 856, 856, 793, 833, 99, 833,
    44, 833, 45, 833, 32, 75, 833, 46, 305, 967, 257, 257, 833, 47, 311, 93,
    94, 84, 868, 871, 860, 860, 91, 91, 92, 92, 92, 92, 430, 90, 90, 90,
    90, 89, 89, 88, 88, 88, 87, 335, 430, 186, 185, 184, 238, 856, 856, 650,
    2, 1064, 833, 33, 739, 217, 218, 257, 971, 257, 426, 317, 257, 774, 833, 117,
    257, 311, 93, 94, 84, 868, 871, 860, 860, 91, 91, 92, 92, 92, 92, 430,
    90, 90, 90, 90, 89, 89, 88, 88, 88, 87, 335, 430, 318, 124, 212, 163,
    856, 856, 943, 900, 898, 833, 118, 759, 726, 725, 257, 755, 289, 289, 733, 734,
    961, 833, 119, 682, 311, 93, 82, 84, 868, 871, 860, 860, 91, 91, 92, 92,
    92, 92, 430, 90, 90, 90, 90, 89, 89, 88, 88, 88, 87, 335, 430, 716,
    246, 322, 331, 856, 856, 256, 114, 357, 833, 53, 808, 913, 913, 932, 156, 416,
    420, 424, 930, 809, 833, 34, 364, 311, 253, 94, 84, 868, 871, 860, 860, 91,
    91, 92, 92, 92, 92, 430, 90, 90, 90, 90, 89, 89, 88, 88, 88, 87,
    335, 430, 114, 114, 114, 960, 856, 856, 307, 258, 830, 833, 100, 191, 252, 377,
    267, 68, 197, 68, 261, 716, 769, 833, 50, 71, 911, 911, 263, 84, 868, 871,
    860, 860, 91, 91, 92, 92, 92, 92, 430, 90, 90, 90, 90, 89, 89, 88,
    88, 88, 87, 335, 80, 425, 802, 3, 1214, 191, 430, 265, 336, 336, 833, 101,
    741, 80, 425, 897, 3, 723, 722, 428, 721, 336, 336, 430, 893, 270, 430, 197,
    833, 102, 430, 800, 428, 430, 695, 430, 843, 111, 414, 430, 784, 409, 430, 831,
    430, 833, 98, 123, 833, 116, 847, 414, 833, 49, 779, 833, 113, 833, 106, 226,
    123, 833, 105, 847, 833, 103, 833, 104, 791, 411, 77, 78, 290, 412, 430, 291,
    114, 79, 432, 431, 389, 430, 835, 77, 78, 897, 839, 408, 410, 430, 79, 432,
    431, 372, 703, 835, 833, 52, 430, 80, 425, 430, 3, 833, 54, 772, 843, 336,
    336, 684, 771, 833, 51, 840, 840, 840, 842, 19, 428, 672, 833, 26, 671, 833,
    30, 673, 840, 840, 840, 842, 19, 207, 661, 278, 304, 148, 280, 414, 282, 248,
    358, 822, 382, 6, 348, 161, 273, 80, 425, 847, 3, 934, 895, 720, 894, 336,
    336, 296, 157, 415, 241, 284, 674, 958, 194, 953, 428, 951, 948, 77, 78, 777,
    319, 56, 59, 135, 79, 432, 431, 121, 66, 835, 146, 128, 350, 414, 819, 130,
    351, 131, 132, 133, 375, 173, 107, 138, 149, 847, 365, 178, 62, 70, 425, 936,
    3, 827, 889, 371, 255, 336, 336, 792, 840, 840, 840, 842, 19, 77, 78, 915,
    428, 208, 179, 144, 79, 432, 431, 373, 260, 835, 180, 326, 675, 181, 308, 744,
    388, 743, 731, 414, 718, 742, 730, 712, 402, 309, 711, 272, 788, 65, 710, 847,
    709, 277, 193, 789, 787, 279, 876, 73, 840, 840, 840, 842, 19, 786, 281, 418,
    283, 422, 227, 77, 78, 330, 228, 229, 96, 767, 79, 432, 431, 407, 67, 835,
    215, 292, 293, 405, 294, 303, 302, 301, 204, 299, 295, 202, 676, 681, 7, 433,
    669, 203, 205, 206, 125, 110, 313, 434, 667, 666, 658, 168, 224, 237, 840, 840,
    840, 842, 19, 120, 656, 337, 236, 155, 167, 341, 233, 314, 108, 905, 903, 826,
    127, 126, 756, 170, 129, 172, 247, 928, 134, 136, 171, 60, 61, 123, 169, 137,
    933, 175, 176, 927, 8, 13, 177, 254, 918, 139, 191, 924, 140, 370, 678, 150,
    374, 182, 274, 268, 141, 122, 63, 14, 378, 15, 383, 64, 225, 846, 845, 874,
    16, 4, 729, 765, 770, 162, 395, 209, 211, 142, 801, 878, 796, 312, 71, 68,
    875, 873, 939, 190, 417, 938, 17, 195, 196, 152, 18, 975, 199, 976, 153, 198,
    154, 421, 877, 844, 696, 81, 200, 297, 343, 1019, 1018, 300, 653,
];

#[rustfmt::skip]
static LOOKAHEAD: [SymbolCode; 1501] = [
    19, 144, 145, 146, 147, 24, 1, 2, 27, 80, 81, 82, 83, 84, 85, 86,
    87, 88, 89, 90, 91, 92, 93, 94, 95, 91, 92, 93, 94, 95, 19, 50,
    51, 80, 81, 82, 83, 27, 85, 86, 87, 88, 89, 90, 91, 92, 93, 94,
    95, 137, 177, 139, 71, 72, 73, 74, 75, 76, 77, 78, 79, 80, 81, 82,
    83, 95, 85, 86, 87, 88, 89, 90, 91, 92, 93, 94, 95, 19, 97, 85,
    86, 87, 88, 89, 90, 91, 92, 93, 94, 95, 152, 33, 212, 173, 27, 28,
    223, 224, 225, 152, 42, 181, 152, 223, 224, 225, 95, 97, 50, 51, 99, 100,
    101, 102, 103, 104, 105, 27, 28, 59, 223, 224, 225, 112, 174, 175, 66, 94,
    95, 71, 72, 73, 74, 75, 76, 77, 78, 79, 80, 81, 82, 83, 195, 85,
    86, 87, 88, 89, 90, 91, 92, 93, 94, 95, 19, 197, 89, 90, 220, 209,
    210, 26, 119, 120, 97, 98, 208, 100, 108, 109, 110, 152, 157, 152, 107, 152,
    109, 89, 90, 91, 92, 93, 94, 95, 163, 50, 51, 97, 98, 99, 55, 66,
    102, 103, 104, 174, 175, 174, 175, 132, 133, 192, 193, 113, 66, 19, 71, 72,
    73, 74, 75, 76, 77, 78, 79, 80, 81, 82, 83, 198, 85, 86, 87, 88,
    89, 90, 91, 92, 93, 94, 95, 152, 209, 210, 148, 149, 50, 51, 100, 53,
    154, 59, 156, 174, 229, 27, 28, 232, 163, 163, 22, 192, 193, 174, 175, 27,
    28, 71, 72, 73, 74, 75, 76, 77, 78, 79, 80, 81, 82, 83, 251, 85,
    86, 87, 88, 89, 90, 91, 92, 93, 94, 95, 19, 198, 198, 152, 152, 24,
    209, 210, 108, 109, 110, 196, 197, 27, 28, 69, 164, 165, 152, 119, 120, 27,
    28, 208, 99, 27, 28, 102, 103, 104, 152, 50, 51, 97, 98, 89, 90, 185,
    113, 187, 22, 177, 174, 97, 58, 27, 28, 101, 115, 245, 117, 118, 71, 72,
    73, 74, 75, 76, 77, 78, 79, 80, 81, 82, 83, 11, 85, 86, 87, 88,
    89, 90, 91, 92, 93, 94, 95, 19, 132, 133, 134, 23, 152, 97, 98, 91,
    174, 223, 224, 225, 239, 97, 98, 187, 22, 97, 98, 27, 28, 27, 28, 152,
    223, 224, 225, 239, 152, 163, 50, 51, 170, 171, 172, 59, 160, 97, 98, 239,
    164, 165, 66, 242, 124, 174, 175, 195, 22, 23, 69, 71, 72, 73, 74, 75,
    76, 77, 78, 79, 80, 81, 82, 83, 198, 85, 86, 87, 88, 89, 90, 91,
    92, 93, 94, 95, 19, 12, 97, 21, 23, 152, 101, 152, 108, 109, 110, 221,
    152, 97, 98, 97, 98, 152, 29, 243, 70, 226, 23, 233, 26, 26, 152, 152,
    238, 174, 175, 50, 51, 22, 45, 24, 47, 132, 133, 134, 124, 22, 23, 188,
    163, 26, 152, 65, 59, 174, 175, 163, 71, 72, 73, 74, 75, 76, 77, 78,
    79, 80, 81, 82, 83, 152, 85, 86, 87, 88, 89, 90, 91, 92, 93, 94,
    95, 19, 19, 198, 152, 23, 152, 152, 209, 103, 198, 174, 175, 70, 152, 50,
    51, 219, 213, 214, 152, 98, 152, 171, 172, 188, 171, 172, 174, 175, 248, 249,
    50, 51, 51, 251, 174, 175, 220, 74, 75, 152, 188, 152, 174, 175, 140, 124,
    26, 163, 188, 16, 130, 71, 72, 73, 74, 75, 76, 77, 78, 79, 80, 81,
    82, 83, 101, 85, 86, 87, 88, 89, 90, 91, 92, 93, 94, 95, 19, 209,
    196, 197, 23, 231, 198, 12, 231, 219, 37, 22, 107, 24, 208, 116, 27, 112,
    201, 62, 121, 64, 152, 152, 29, 52, 66, 221, 211, 221, 219, 50, 51, 60,
    89, 90, 152, 22, 23, 183, 45, 26, 47, 22, 174, 175, 238, 152, 164, 165,
    106, 19, 71, 72, 73, 74, 75, 76, 77, 78, 79, 80, 81, 82, 83, 152,
    85, 86, 87, 88, 89, 90, 91, 92, 93, 94, 95, 132, 133, 119, 120, 163,
    50, 51, 111, 70, 97, 174, 175, 181, 182, 170, 171, 172, 0, 1, 2, 140,
    190, 108, 109, 110, 51, 71, 72, 73, 74, 75, 76, 77, 78, 79, 80, 81,
    82, 83, 198, 85, 86, 87, 88, 89, 90, 91, 92, 93, 94, 95, 19, 152,
    152, 152, 22, 166, 152, 168, 169, 27, 19, 152, 26, 19, 152, 122, 152, 24,
    152, 28, 27, 152, 28, 174, 175, 174, 175, 152, 174, 175, 107, 50, 51, 174,
    175, 22, 174, 175, 174, 175, 174, 175, 138, 174, 175, 7, 8, 9, 16, 174,
    175, 152, 71, 72, 73, 74, 75, 76, 77, 78, 79, 80, 81, 82, 83, 152,
    85, 86, 87, 88, 89, 90, 91, 92, 93, 94, 95, 19, 152, 97, 152, 31,
    24, 152, 98, 35, 101, 174, 175, 152, 97, 152, 79, 152, 62, 152, 64, 112,
    152, 49, 174, 175, 174, 175, 152, 174, 175, 152, 50, 51, 124, 174, 175, 174,
    175, 174, 175, 174, 175, 138, 174, 175, 22, 23, 152, 152, 174, 175, 19, 71,
    72, 73, 74, 75, 76, 77, 78, 79, 80, 81, 82, 83, 152, 85, 86, 87,
    88, 89, 90, 91, 92, 93, 94, 95, 152, 108, 109, 110, 152, 50, 51, 146,
    147, 23, 174, 175, 26, 195, 195, 152, 70, 152, 168, 169, 152, 26, 174, 175,
    152, 19, 71, 72, 73, 74, 75, 76, 77, 78, 79, 80, 81, 82, 83, 152,
    85, 86, 87, 88, 89, 90, 91, 92, 93, 94, 95, 152, 246, 247, 213, 214,
    50, 51, 195, 152, 195, 174, 175, 195, 100, 101, 152, 195, 152, 152, 7, 8,
    152, 174, 175, 163, 19, 71, 72, 73, 74, 75, 76, 77, 78, 79, 80, 81,
    82, 83, 152, 85, 86, 87, 88, 89, 90, 91, 92, 93, 94, 95, 152, 27,
    152, 189, 189, 50, 51, 195, 198, 152, 174, 175, 33, 132, 133, 152, 123, 163,
    163, 163, 152, 42, 174, 175, 152, 19, 152, 72, 73, 74, 75, 76, 77, 78,
    79, 80, 81, 82, 83, 152, 85, 86, 87, 88, 89, 90, 91, 92, 93, 94,
    95, 152, 198, 198, 198, 23, 50, 51, 26, 152, 23, 174, 175, 26, 23, 23,
    23, 26, 26, 26, 152, 97, 23, 174, 175, 26, 132, 133, 152, 73, 74, 75,
    76, 77, 78, 79, 80, 81, 82, 83, 152, 85, 86, 87, 88, 89, 90, 91,
    92, 93, 94, 95, 19, 20, 23, 22, 23, 26, 152, 152, 27, 28, 174, 175,
    152, 19, 20, 27, 22, 183, 183, 38, 152, 27, 28, 152, 23, 152, 152, 26,
    174, 175, 152, 152, 38, 152, 23, 152, 27, 26, 57, 152, 215, 163, 152, 152,
    152, 174, 175, 66, 174, 175, 69, 57, 174, 175, 152, 174, 175, 174, 175, 212,
    66, 174, 175, 69, 174, 175, 174, 175, 152, 152, 89, 90, 152, 193, 152, 152,
    198, 96, 97, 98, 91, 152, 101, 89, 90, 97, 152, 209, 210, 152, 96, 97,
    98, 235, 152, 101, 174, 175, 152, 19, 20, 152, 22, 174, 175, 116, 97, 27,
    28, 152, 121, 174, 175, 132, 133, 134, 135, 136, 38, 152, 174, 175, 152, 174,
    175, 152, 132, 133, 134, 135, 136, 234, 152, 212, 150, 199, 212, 57, 212, 240,
    240, 203, 178, 200, 216, 186, 177, 19, 20, 69, 22, 203, 177, 182, 177, 27,
    28, 202, 200, 228, 216, 216, 155, 39, 122, 159, 38, 159, 41, 89, 90, 91,
    159, 241, 241, 22, 96, 97, 98, 71, 130, 101, 222, 191, 18, 57, 203, 194,
    159, 194, 194, 194, 18, 158, 244, 191, 222, 69, 159, 158, 137, 19, 20, 203,
    22, 191, 203, 46, 236, 27, 28, 159, 132, 133, 134, 135, 136, 89, 90, 237,
    38, 159, 158, 22, 96, 97, 98, 179, 159, 101, 158, 48, 159, 158, 179, 176,
    107, 176, 184, 57, 106, 176, 184, 176, 125, 179, 178, 176, 218, 107, 176, 69,
    176, 217, 159, 218, 218, 217, 159, 137, 132, 133, 134, 135, 136, 218, 217, 179,
    217, 179, 227, 89, 90, 95, 230, 230, 129, 207, 96, 97, 98, 126, 128, 101,
    5, 206, 205, 127, 204, 10, 11, 12, 13, 14, 203, 25, 17, 162, 26, 161,
    13, 153, 153, 6, 247, 180, 250, 151, 151, 151, 151, 32, 180, 34, 132, 133,
    134, 135, 136, 167, 4, 3, 43, 22, 15, 68, 142, 250, 16, 23, 23, 120,
    111, 131, 20, 56, 123, 125, 16, 1, 123, 131, 63, 79, 79, 66, 67, 111,
    28, 36, 122, 1, 5, 22, 107, 140, 54, 54, 26, 61, 107, 44, 20, 24,
    19, 105, 112, 23, 22, 40, 22, 22, 53, 22, 53, 22, 53, 23, 23, 23,
    22, 22, 30, 116, 23, 122, 26, 23, 23, 22, 28, 11, 124, 114, 26, 26,
    23, 23, 23, 36, 24, 23, 36, 26, 22, 22, 36, 23, 122, 23, 22, 26,
    22, 24, 23, 23, 23, 22, 122, 23, 141, 122, 122, 15, 1,
];

#[rustfmt::skip]
static SHIFT_OFFSET: [i16; 436] = [
    5, 1057, 1355, 1070, 1204, 1204, 1204, 90, 60, -19, 58, 58, 186, 1204, 1204, 1204,
    1204, 1204, 1204, 1204, 67, 67, 182, 336, 218, 550, 135, 263, 340, 417, 494, 571,
    622, 699, 776, 827, 827, 827, 827, 827, 827, 827, 827, 827, 827, 827, 827, 827,
    827, 827, 878, 827, 929, 980, 980, 1156, 1204, 1204, 1204, 1204, 1204, 1204, 1204, 1204,
    1204, 1204, 1204, 1204, 1204, 1204, 1204, 1204, 1204, 1204, 1204, 1204, 1204, 1204, 1204, 1204,
    1204, 1204, 1204, 1204, 1258, 1204, 1204, 1204, 1204, 1204, 1204, 1204, 1204, 1204, 1204, 1204,
    1204, 1204, -71, -47, -47, -47, -47, -47, -6, 88, -66, 218, 218, 418, 495, 535,
    535, 33, 43, 10, -30, -89, -89, -89, 11, 425, 425, 268, 455, 605, 218, 218,
    218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 218,
    218, 684, 138, 10, 43, 125, 125, 125, 125, 125, 125, -89, -89, -89, 228, 341,
    341, 207, 276, 300, 280, 352, 354, 218, 218, 218, 218, 218, 218, 218, 218, 218,
    218, 218, 218, 218, 218, 218, 218, 218, 563, 563, 563, 218, 218, 435, 218, 218,
    218, 579, 218, 218, 585, 218, 218, 218, 218, 218, 218, 218, 218, 218, 218, 581,
    768, 711, 711, 711, 704, 215, 1065, 756, 434, 709, 709, 712, 434, 712, 534, 858,
    641, 953, 709, -88, 953, 953, 867, 489, 447, 1200, 1118, 1118, 1203, 1203, 1118, 1229,
    1184, 1126, 1242, 1242, 1242, 1242, 1118, 1250, 1126, 1229, 1184, 1184, 1126, 1118, 1250, 1139,
    1237, 1118, 1118, 1250, 1277, 1118, 1250, 1118, 1250, 1277, 1205, 1205, 1205, 1259, 1277, 1205,
    1210, 1205, 1259, 1205, 1205, 1195, 1218, 1195, 1218, 1195, 1218, 1195, 1218, 1118, 1118, 1198,
    1277, 1254, 1254, 1277, 1223, 1231, 1230, 1236, 1126, 1346, 1348, 1363, 1363, 1373, 1373, 1373,
    1373, -89, -89, -89, -89, -89, -89, 477, 547, 386, 818, 750, 765, 700, 1006, 731,
    1011, 1015, 1016, 1017, 948, 836, 935, 703, 1023, 1055, 1064, 1077, 855, 918, 1087, 1085,
    611, 1392, 1394, 1377, 1260, 1385, 1333, 1388, 1382, 1383, 1287, 1278, 1297, 1289, 1390, 1288,
    1398, 1414, 1293, 1286, 1340, 1341, 1312, 1396, 1389, 1304, 1426, 1423, 1407, 1323, 1291, 1378,
    1408, 1379, 1374, 1393, 1329, 1415, 1418, 1421, 1330, 1336, 1422, 1395, 1424, 1425, 1420, 1427,
    1397, 1428, 1429, 1399, 1405, 1430, 1431, 1432, 1343, 1434, 1437, 1435, 1436, 1339, 1440, 1441,
    1438, 1439, 1443, 1344, 1444, 1442, 1445, 1446, 1444, 1449, 1450, 1451, 1453, 1454, 1458, 1456,
    1460, 1459, 1452, 1461, 1462, 1464, 1465, 1461, 1467, 1466, 1468, 1469, 1471, 1362, 1372, 1375,
    1376, 1472, 1484, 1499,
];

#[rustfmt::skip]
static REDUCE_OFFSET: [i16; 311] = [
    -143, 954, 86, 21, -50, 23, 79, 134, 226, -120, -127, 146, 161, 291, 349, 366,
    311, 382, 374, 231, 364, 367, 396, 398, 236, 317, -103, -103, -103, -103, -103, -103,
    -103, -103, -103, -103, -103, -103, -103, -103, -103, -103, -103, -103, -103, -103, -103, -103,
    -103, -103, -103, -103, -103, -103, -103, 460, 503, 567, 569, 572, 577, 580, 582, 584,
    587, 593, 631, 644, 646, 649, 655, 657, 659, 661, 664, 670, 708, 720, 759, 771,
    810, 822, 861, 873, 912, 930, 947, 950, 957, 959, 963, 966, 968, 998, 1005, 1013,
    1022, 1025, -103, -103, -103, -103, -103, -103, -103, -103, -103, 474, 212, 15, 498, 222,
    511, -103, 97, 557, -103, -103, -103, -103, -80, 9, 59, 19, 294, 294, -53, -62,
    690, 691, 735, 737, 740, 744, 133, 310, 148, 330, 160, 380, 786, 788, 401, 296,
    789, 733, 85, 722, -42, 324, 508, 784, 828, 829, 830, 678, 713, 407, 69, 150,
    194, 188, 289, 301, 403, 461, 485, 568, 617, 673, 724, 779, 792, 824, 831, 837,
    842, 846, 848, 881, 892, 900, 931, 936, 446, 910, 911, 944, 949, 901, 955, 967,
    978, 923, 992, 993, 956, 996, 999, 1010, 289, 1018, 1033, 1043, 1046, 1049, 1056, 934,
    973, 997, 1000, 1002, 901, 1012, 1019, 1060, 1014, 1004, 1020, 975, 1024, 976, 1040, 1035,
    1047, 1045, 1021, 1007, 1051, 1053, 1031, 1034, 1083, 1026, 1082, 1084, 1008, 1009, 1089, 1036,
    1068, 1059, 1069, 1071, 1072, 1073, 1105, 1111, 1076, 1050, 1080, 1090, 1079, 1115, 1117, 1058,
    1048, 1128, 1138, 1140, 1124, 1145, 1148, 1149, 1151, 1131, 1135, 1137, 1141, 1130, 1142, 1143,
    1144, 1147, 1134, 1150, 1152, 1106, 1112, 1113, 1116, 1114, 1125, 1123, 1127, 1171, 1175, 1119,
    1164, 1120, 1121, 1166, 1146, 1155, 1157, 1160, 1167, 1211, 1214, 1224, 1225, 1232, 1233, 1234,
    1235, 1132, 1153, 1133, 1201, 1208, 1228,
];

#[rustfmt::skip]
static DEFAULT_ACTION: [u16; 436] = [
    982, 1300, 1300, 1300, 1214, 1214, 1214, 1305, 1300, 1109, 1138, 1138, 1274, 1305, 1305, 1305,
    1305, 1305, 1305, 1212, 1305, 1305, 1305, 1300, 1305, 1113, 1144, 1305, 1305, 1305, 1305, 1305,
    1305, 1305, 1305, 1273, 1275, 1152, 1151, 1254, 1125, 1149, 1142, 1146, 1215, 1208, 1209, 1207,
    1211, 1216, 1305, 1145, 1177, 1192, 1176, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305,
    1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305,
    1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305,
    1305, 1305, 1186, 1191, 1198, 1190, 1187, 1179, 1178, 1180, 1181, 1305, 1305, 1008, 1074, 1305,
    1305, 1182, 1305, 1020, 1183, 1195, 1194, 1193, 1015, 1305, 1305, 1305, 1305, 1305, 1305, 1305,
    1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305,
    1305, 982, 1300, 1305, 1305, 1300, 1300, 1300, 1300, 1300, 1300, 1292, 1113, 1103, 1305, 1305,
    1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1280, 1278, 1305, 1227, 1305, 1305, 1305, 1305,
    1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305,
    1305, 1109, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 988, 1305,
    1247, 1109, 1109, 1109, 1111, 1089, 1101, 990, 1148, 1127, 1127, 1259, 1148, 1259, 1045, 1068,
    1042, 1138, 1127, 1210, 1138, 1138, 1110, 1101, 1305, 1285, 1118, 1118, 1277, 1277, 1118, 1157,
    1078, 1148, 1085, 1085, 1085, 1085, 1118, 1005, 1148, 1157, 1078, 1078, 1148, 1118, 1005, 1253,
    1251, 1118, 1118, 1005, 1220, 1118, 1005, 1118, 1005, 1220, 1076, 1076, 1076, 1060, 1220, 1076,
    1045, 1076, 1060, 1076, 1076, 1131, 1126, 1131, 1126, 1131, 1126, 1131, 1126, 1118, 1118, 1305,
    1220, 1224, 1224, 1220, 1143, 1132, 1141, 1139, 1148, 1011, 1063, 998, 998, 987, 987, 987,
    987, 1297, 1297, 1292, 1047, 1047, 1030, 1305, 1305, 1305, 1305, 1305, 1305, 1022, 1305, 1229,
    1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305,
    1164, 1305, 983, 1287, 1305, 1305, 1284, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305,
    1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1257, 1305, 1305, 1305, 1305, 1305, 1305,
    1250, 1249, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305,
    1305, 1305, 1305, 1305, 1305, 1305, 1305, 1305, 1092, 1305, 1305, 1305, 1096, 1305, 1305, 1305,
    1305, 1305, 1305, 1305, 1140, 1305, 1133, 1305, 1213, 1305, 1305, 1305, 1305, 1305, 1305, 1305,
    1305, 1305, 1305, 1302, 1305, 1305, 1305, 1301, 1305, 1305, 1305, 1305, 1305, 1166, 1305, 1165,
    1169, 1305, 996, 1305,
];

#[rustfmt::skip]
static FALLBACK: [SymbolCode; 70] = [
    0, 0, 27, 27, 27, 27, 0, 27, 27, 27, 0, 27, 27, 27, 27, 0,
    0, 0, 27, 0, 0, 27, 0, 0, 0, 27, 0, 0, 0, 27, 27, 27,
    27, 27, 27, 27, 27, 27, 27, 27, 27, 27, 27, 27, 27, 27, 27, 27,
    27, 27, 27, 27, 27, 27, 27, 27, 27, 27, 27, 27, 27, 27, 27, 27,
    27, 27, 27, 27, 27, 27,
];

/// Tables for the SQL statement grammar.
pub static SQL_TABLES: ParseTables = ParseTables {
    name: "sql",
    symbol_names: &SYMBOL_NAMES,
    rule_names: &RULE_NAMES,
    rules: &RULES,
    action: &ACTION,
    lookahead: &LOOKAHEAD,
    shift_offset: &SHIFT_OFFSET,
    reduce_offset: &REDUCE_OFFSET,
    default_action: &DEFAULT_ACTION,
    fallback: &FALLBACK,
    shift_use_default: -89,
    reduce_use_default: -144,
    bounds: ActionBounds {
        max_shift: 435,
        min_shift_reduce: 649,
        max_shift_reduce: 976,
        min_reduce: 977,
        max_reduce: 1304,
        error: 1305,
        accept: 1306,
        no_action: 1307,
    },
    terminal_count: 143,
    no_code: 253,
    wildcard: Some(token::ANY),
    error_symbol: None,
};
