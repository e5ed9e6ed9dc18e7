use std::process::Command;

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_rowpush")
}

#[test]
fn test_help_lists_commands() {
    let output = Command::new(bin()).arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("sync"), "{}", stdout);
    assert!(stdout.contains("init"), "{}", stdout);
}

#[test]
fn test_sync_help_documents_flags() {
    let output = Command::new(bin()).args(["sync", "--help"]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--dry", "--config", "--profile", "ROWPUSH_PROFILE"] {
        assert!(stdout.contains(flag), "missing {flag} in:\n{stdout}");
    }
}

#[test]
fn test_version_matches_package() {
    let output = Command::new(bin()).arg("--version").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        format!("rowpush {}", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn test_missing_subcommand_is_a_usage_error() {
    let output = Command::new(bin()).output().unwrap();

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
}
