//! Scenario: no local client, a dozen forms pushed through one SSH session.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use rowpush::config;
use rowpush::domain::ports::{RemoteConnector, RemoteShell};
use rowpush::presentation::run_sync_with;
use rowpush::{RowpushError, RowpushResult, SyncEvent, SyncEventSink, TransportKind};

use crate::common::TestEnv;

#[derive(Default)]
pub struct FakeHost {
    pub connects: AtomicUsize,
    pub disconnects: AtomicUsize,
    pub commands: Mutex<Vec<String>>,
    pub fail_matching: Option<&'static str>,
}

pub struct FakeShell(Arc<FakeHost>);

impl RemoteShell for FakeShell {
    fn run(&self, command_line: &str) -> RowpushResult<i32> {
        self.0.commands.lock().unwrap().push(command_line.to_string());
        match self.0.fail_matching {
            Some(needle) if command_line.contains(needle) => Ok(1),
            _ => Ok(0),
        }
    }

    fn disconnect(&self) -> RowpushResult<()> {
        self.0.disconnects.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub struct FakeConnector(pub Arc<FakeHost>);

impl RemoteConnector for FakeConnector {
    type Shell = FakeShell;

    fn connect(&self) -> RowpushResult<FakeShell> {
        self.0.connects.fetch_add(1, Ordering::SeqCst);
        Ok(FakeShell(self.0.clone()))
    }

    fn describe(&self) -> String {
        "fake-host".to_string()
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub events: Mutex<Vec<SyncEvent>>,
}

impl SyncEventSink for RecordingSink {
    fn on_event(&self, event: SyncEvent) {
        self.events.lock().unwrap().push(event);
    }
}

const FLEET_CONFIG_HEAD: &str = r#"profile:
  default:
    ssh:
      user: deploy
      password: ssh-pw
    database:
      host: db.internal
      user: app
      password: "it's secret"
      database: forms
target:
"#;

fn fleet(count: usize) -> (TestEnv, Vec<String>) {
    let mut yaml = FLEET_CONFIG_HEAD.to_string();
    let mut builder = TestEnv::builder();
    let mut names = Vec::new();
    for i in 0..count {
        let name = format!("form{i:02}");
        yaml.push_str(&format!("  {name}:\n    alid: {}\n", 100 + i));
        builder = builder.with_target_html(&name, &format!("<p>{name}</p>"));
        names.push(name);
    }
    (builder.with_config(&yaml).build(), names)
}

#[test]
fn twelve_targets_share_one_session() {
    let (env, names) = fleet(12);
    let loaded = config::load(None, env.project_root.path()).unwrap();
    let resolved = config::resolve(&loaded.config, &loaded.root, "default", &names).unwrap();

    let host = Arc::new(FakeHost::default());
    let sink = RecordingSink::default();
    let handle = host.clone();
    run_sync_with(&resolved, false, &sink, |_| None, move |creds| {
        assert_eq!(creds.addr(), "db.internal:22");
        FakeConnector(handle)
    })
    .unwrap();

    assert_eq!(host.connects.load(Ordering::SeqCst), 1);
    assert_eq!(host.disconnects.load(Ordering::SeqCst), 1);

    let commands = host.commands.lock().unwrap();
    assert_eq!(commands.len(), 12);
    for command in commands.iter() {
        assert!(
            command.starts_with("PGPASSWORD='it'\\''s secret' 'psql' '-h' 'db.internal'"),
            "{command}"
        );
    }

    let events = sink.events.lock().unwrap();
    for name in &names {
        assert!(events.contains(&SyncEvent::Succeeded {
            target: name.clone(),
            transport: TransportKind::Remote,
        }));
    }
}

#[test]
fn one_failing_remote_target_fails_the_run_and_still_disconnects() {
    let (env, names) = fleet(4);
    let loaded = config::load(None, env.project_root.path()).unwrap();
    let resolved = config::resolve(&loaded.config, &loaded.root, "default", &names).unwrap();

    let host = Arc::new(FakeHost {
        fail_matching: Some("alid = 102;"),
        ..FakeHost::default()
    });
    let sink = RecordingSink::default();
    let handle = host.clone();
    let err = run_sync_with(&resolved, false, &sink, |_| None, move |_| FakeConnector(handle))
        .unwrap_err();

    assert!(
        matches!(err, RowpushError::CommandFailed { ref target, .. } if target == "form02"),
        "{err}"
    );
    assert_eq!(host.connects.load(Ordering::SeqCst), 1);
    assert_eq!(host.disconnects.load(Ordering::SeqCst), 1);
}
