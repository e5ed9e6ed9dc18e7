//! Scenario: a local client exists, but some targets insist on the SSH path.

#![cfg(unix)]

use std::sync::atomic::Ordering;
use std::sync::Arc;

use rowpush::config;
use rowpush::infrastructure::probe_client;
use rowpush::presentation::run_sync_with;
use rowpush::{SyncEvent, TransportKind};

use super::remote_fleet::{FakeConnector, FakeHost, RecordingSink};
use crate::common::TestEnv;

const MIXED_CONFIG: &str = r#"profile:
  default:
    ssh:
      user: deploy
      password: ssh-pw
    database:
      user: app
      password: secret
      client: "true"
target:
  "*": &tunnel
    options:
      force-ssh: true
  plain:
    alid: 1
  tunnelled:
    <<: *tunnel
    alid: 2
"#;

#[test]
fn forced_targets_go_remote_while_others_run_locally() {
    let env = TestEnv::builder()
        .with_config(MIXED_CONFIG)
        .with_target_html("plain", "<p>plain</p>")
        .with_target_html("tunnelled", "<p>tunnelled</p>")
        .build();
    let loaded = config::load(None, env.project_root.path()).unwrap();
    let names = vec!["plain".to_string(), "tunnelled".to_string()];
    let resolved = config::resolve(&loaded.config, &loaded.root, "default", &names).unwrap();

    let host = Arc::new(FakeHost::default());
    let sink = RecordingSink::default();
    let handle = host.clone();
    run_sync_with(&resolved, false, &sink, probe_client, move |_| FakeConnector(handle)).unwrap();

    assert_eq!(host.connects.load(Ordering::SeqCst), 1);
    let commands = host.commands.lock().unwrap();
    assert_eq!(commands.len(), 1);
    assert!(commands[0].contains("alid = 2;"));

    let events = sink.events.lock().unwrap();
    assert!(events.contains(&SyncEvent::Succeeded {
        target: "plain".to_string(),
        transport: TransportKind::Local,
    }));
    assert!(events.contains(&SyncEvent::Succeeded {
        target: "tunnelled".to_string(),
        transport: TransportKind::Remote,
    }));
}
