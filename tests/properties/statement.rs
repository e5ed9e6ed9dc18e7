//! Property tests for statement rendering and remote quoting.

use base64::{engine::general_purpose::STANDARD, Engine};
use proptest::prelude::*;

use rowpush::domain::services::build_statement;
use rowpush::infrastructure::transport::shell_quote;
use rowpush::DatabaseCredentials;

fn database(schema: &str) -> DatabaseCredentials {
    DatabaseCredentials {
        host: "db".to_string(),
        port: 5432,
        user: "app".to_string(),
        password: "pw".to_string(),
        database: "forms".to_string(),
        schema: schema.to_string(),
        client: "psql".to_string(),
    }
}

fn embedded_base64(sql: &str) -> &str {
    let start = sql.find("decode('").unwrap() + "decode('".len();
    let end = start + sql[start..].find('\'').unwrap();
    &sql[start..end]
}

/// Undo POSIX single quoting the way `sh` reads one word.
fn sh_unquote(word: &str) -> Option<String> {
    let mut out = String::new();
    let mut chars = word.chars();
    while let Some(c) = chars.next() {
        match c {
            '\'' => loop {
                match chars.next()? {
                    '\'' => break,
                    inner => out.push(inner),
                }
            },
            '\\' => out.push(chars.next()?),
            _ => return None,
        }
    }
    Some(out)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Any artifact bytes survive the base64 literal unchanged.
    #[test]
    fn property_content_survives_base64_literal(
        content in proptest::collection::vec(any::<u8>(), 0..512),
        alid in any::<i64>(),
    ) {
        let statement = build_statement(alid, &database("public"), &content);
        let sql = statement.sql();

        prop_assert_eq!(STANDARD.decode(embedded_base64(sql)).unwrap(), content);
        let expected_suffix = format!("WHERE alid = {};", alid);
        prop_assert!(sql.ends_with(&expected_suffix));
    }

    /// PROPERTY: Logged arguments never include the statement.
    #[test]
    fn property_loggable_args_exclude_sql(content in ".{0,64}") {
        let statement = build_statement(1, &database("public"), content.as_bytes());
        prop_assert_eq!(statement.loggable().len(), 8);
        prop_assert!(!statement.loggable().iter().any(|arg| arg == "-c"));
    }

    /// PROPERTY: Shell quoting reads back as the same word.
    #[test]
    fn property_shell_quote_round_trips(word in ".{0,64}") {
        let quoted = shell_quote(&word);
        prop_assert_eq!(sh_unquote(&quoted), Some(word));
    }
}
