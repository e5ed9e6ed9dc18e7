//! Statement Builder
//!
//! Renders the fixed update statement for one target and wraps it into the
//! client's argument list.
//!
//! The artifact travels as base64 inside a single-quoted SQL literal, so
//! quotes, backslashes and newlines in the document never need escaping.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::domain::entities::DatabaseCredentials;
use crate::template::{self, Bindings};

/// Schema selector followed by the row update.
pub const STATEMENT_TEMPLATE: &str = "SET search_path TO {{ .schema }};
UPDATE askep_list
    SET form_data = convert_from(decode('{{ .content }}', 'base64'), 'UTF8')
WHERE alid = {{ .alid }};";

/// Client arguments for one target: connection flags, then `-c <sql>` last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedStatement {
    args: Vec<String>,
}

impl RenderedStatement {
    /// Every argument, statement included
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Connection flags only; safe to log.
    pub fn loggable(&self) -> &[String] {
        &self.args[..self.args.len() - 2]
    }

    /// The SQL text passed with `-c`
    pub fn sql(&self) -> &str {
        &self.args[self.args.len() - 1]
    }
}

/// Build the client arguments updating row `alid` with `content`.
pub fn build_statement(
    alid: i64,
    database: &DatabaseCredentials,
    content: &[u8],
) -> RenderedStatement {
    let bindings: Bindings<'_> = Bindings::from([
        ("schema", database.schema.clone()),
        ("content", STANDARD.encode(content)),
        ("alid", alid.to_string()),
    ]);

    let sql = template::render(STATEMENT_TEMPLATE, &bindings)
        .expect("statement template placeholders are all bound");

    RenderedStatement {
        args: vec![
            "-h".to_string(),
            database.host.clone(),
            "-p".to_string(),
            database.port.to_string(),
            "-U".to_string(),
            database.user.clone(),
            "-d".to_string(),
            database.database.clone(),
            "-c".to_string(),
            sql,
        ],
    }
}
