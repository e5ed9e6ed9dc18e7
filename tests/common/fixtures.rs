//! Test fixtures - reusable configuration documents.

/// Two targets, default profile, nothing forced over ssh.
pub const TWO_TARGETS_CONFIG: &str = r#"profile:
  default:
    database:
      host: localhost
      user: app
      password: secret
      database: forms
target:
  survey:
    alid: 11
  intake:
    alid: 12
"#;

/// Uses `true` as the client so a local run succeeds without a database.
pub const TRUE_CLIENT_CONFIG: &str = r#"profile:
  default:
    database:
      user: app
      password: secret
      client: "true"
target:
  survey:
    alid: 11
"#;

/// Uses `false` as the client so every local run fails.
pub const FALSE_CLIENT_CONFIG: &str = r#"profile:
  default:
    database:
      user: app
      password: secret
      client: "false"
target:
  survey:
    alid: 11
"#;

/// Unreachable ssh endpoint with a missing client binary.
pub const REMOTE_ONLY_CONFIG: &str = r#"profile:
  default:
    ssh:
      host: 127.0.0.1
      port: 1
      user: deploy
      password: pw
    database:
      user: app
      password: secret
      client: rowpush-test-no-such-client
target:
  survey:
    alid: 11
"#;

pub const SURVEY_HTML: &str = "<form id=\"survey\"></form>";
pub const SURVEY_JS: &str = "console.log('survey');";
pub const SURVEY_CSS: &str = "form { margin: 0; }";
