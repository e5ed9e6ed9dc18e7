//! Use Case Factory
//!
//! Wires the dispatch use case to its executors for one sync run.
//! This is the dependency injection point for the application.

use std::path::PathBuf;

use crate::application::{dry_run, DispatchUseCase};
use crate::config::ResolvedConfig;
use crate::domain::entities::SshCredentials;
use crate::domain::ports::{RemoteConnector, StatementExecutor, SyncEvent, SyncEventSink};
use crate::domain::services::TransportSelector;
use crate::error::RowpushResult;
use crate::infrastructure::{
    probe_client, LocalExecutor, RemoteExecutor, SessionManager, Ssh2Connector,
};

/// Run `sync` for a resolved configuration with the real client lookup and SSH.
pub fn run_sync(
    resolved: &ResolvedConfig,
    dry: bool,
    events: &dyn SyncEventSink,
) -> RowpushResult<()> {
    run_sync_with(resolved, dry, events, probe_client, Ssh2Connector::new)
}

/// Run `sync` with injected client lookup and remote connector.
///
/// The session is created only when at least one target selects the remote
/// transport, and it is closed once every target has finished.
pub fn run_sync_with<C, P, F>(
    resolved: &ResolvedConfig,
    dry: bool,
    events: &dyn SyncEventSink,
    probe: P,
    connector: F,
) -> RowpushResult<()>
where
    C: RemoteConnector,
    P: Fn(&str) -> Option<PathBuf>,
    F: FnOnce(SshCredentials) -> C,
{
    events.on_event(SyncEvent::ProfileSelected {
        profile: resolved.profile.name.clone(),
    });

    if dry {
        return dry_run(&resolved.root, &resolved.targets, events);
    }

    let database = &resolved.profile.database;
    let client_path = probe(&database.client);
    events.on_event(SyncEvent::ClientProbed {
        client: database.client.clone(),
        path: client_path.clone(),
    });

    let local = client_path.map(|path| LocalExecutor::new(path, database.password.clone()));
    let selector = TransportSelector::new(local.is_some());

    let session = if selector.needs_remote(&resolved.targets) {
        let creds = resolved.profile.ssh_credentials()?;
        events.on_event(SyncEvent::InsecureHostKey { addr: creds.addr() });
        Some(SessionManager::new(connector(creds)))
    } else {
        None
    };
    let remote = session
        .as_ref()
        .map(|s| RemoteExecutor::new(s, database.client.clone(), database.password.clone()));

    let mut use_case = DispatchUseCase::new(&resolved.root, database, events);
    if let Some(local) = &local {
        use_case = use_case.with_local(local as &dyn StatementExecutor);
    }
    if let Some(remote) = &remote {
        use_case = use_case.with_remote(remote as &dyn StatementExecutor);
    }
    let result = use_case.run(&resolved.targets);

    if let Some(session) = &session {
        if let Err(err) = session.close() {
            if result.is_ok() {
                return Err(err);
            }
            tracing::warn!(error = %err, "failed to close remote session");
        }
    }

    result
}
