//! Dispatch Use Case
//!
//! Orchestrates one sync run:
//! 1. Spawn one unit of work per target (all spawned before any is joined)
//! 2. Each unit assembles its artifact, builds the statement, picks a transport
//! 3. Each unit executes and reports its result over a channel
//! 4. The first real failure becomes the result of the run
//!
//! A failure does not interrupt units already talking to the database, but
//! units that have not reached their transport step yet stand down.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::thread;

use crate::domain::entities::{DatabaseCredentials, Target};
use crate::domain::ports::{StatementExecutor, SyncEvent, SyncEventSink};
use crate::domain::services::{build_statement, ArtifactAssembler, TransportSelector};
use crate::domain::value_objects::TransportKind;
use crate::error::{RowpushError, RowpushResult};

/// Dispatch use case - concurrent delivery of resolved targets
pub struct DispatchUseCase<'a> {
    root: &'a Path,
    database: &'a DatabaseCredentials,
    events: &'a dyn SyncEventSink,
    local: Option<&'a dyn StatementExecutor>,
    remote: Option<&'a dyn StatementExecutor>,
}

impl<'a> DispatchUseCase<'a> {
    pub fn new(
        root: &'a Path,
        database: &'a DatabaseCredentials,
        events: &'a dyn SyncEventSink,
    ) -> Self {
        Self {
            root,
            database,
            events,
            local: None,
            remote: None,
        }
    }

    /// Executor for the local client. Without one every target goes remote.
    pub fn with_local(mut self, executor: &'a dyn StatementExecutor) -> Self {
        self.local = Some(executor);
        self
    }

    pub fn with_remote(mut self, executor: &'a dyn StatementExecutor) -> Self {
        self.remote = Some(executor);
        self
    }

    pub fn selector(&self) -> TransportSelector {
        TransportSelector::new(self.local.is_some())
    }

    /// Deliver every target; returns the first failure observed.
    pub fn run(&self, targets: &[Target]) -> RowpushResult<()> {
        let selector = self.selector();
        let failed = AtomicBool::new(false);
        let (tx, rx) = mpsc::channel();

        thread::scope(|scope| {
            for target in targets {
                let tx = tx.clone();
                let failed = &failed;
                scope.spawn(move || {
                    let result = self.sync_target(target, selector, failed);
                    if result.is_err() {
                        failed.store(true, Ordering::SeqCst);
                    }
                    let _ = tx.send(result);
                });
            }
        });
        drop(tx);

        first_failure(rx)
    }

    fn sync_target(
        &self,
        target: &Target,
        selector: TransportSelector,
        failed: &AtomicBool,
    ) -> RowpushResult<()> {
        let content = ArtifactAssembler::new(self.root, self.events).assemble(target)?;
        let statement = build_statement(target.alid, self.database, &content);

        let executor = self.executor(selector.select(target), target)?;
        let transport = executor.kind();
        tracing::debug!(
            target_name = %target.name,
            %transport,
            bytes = content.len(),
            "dispatching target"
        );

        if failed.load(Ordering::SeqCst) {
            return Err(RowpushError::Cancelled {
                target: target.name.clone(),
            });
        }

        self.events.on_event(SyncEvent::Executing {
            target: target.name.clone(),
            transport,
            args: statement.loggable().to_vec(),
        });
        executor.execute(&target.name, &statement)?;
        self.events.on_event(SyncEvent::Succeeded {
            target: target.name.clone(),
            transport,
        });

        Ok(())
    }

    fn executor(
        &self,
        transport: TransportKind,
        target: &Target,
    ) -> RowpushResult<&'a dyn StatementExecutor> {
        let executor = match transport {
            TransportKind::Local => self.local,
            TransportKind::Remote => self.remote,
        };
        executor.ok_or_else(|| RowpushError::TransportUnavailable {
            target: target.name.clone(),
            transport: transport.to_string(),
        })
    }
}

/// Assemble each target in order and emit its content, without delivering.
pub fn dry_run(root: &Path, targets: &[Target], events: &dyn SyncEventSink) -> RowpushResult<()> {
    let assembler = ArtifactAssembler::new(root, events);
    for target in targets {
        let content = assembler.assemble(target)?;
        events.on_event(SyncEvent::Rendered {
            target: target.name.clone(),
            content,
        });
    }
    Ok(())
}

/// First failure in arrival order, preferring real failures over cancellations.
fn first_failure(results: mpsc::Receiver<RowpushResult<()>>) -> RowpushResult<()> {
    let mut cancelled = None;
    for result in results {
        match result {
            Ok(()) => {}
            Err(err) if err.is_cancellation() => {
                cancelled.get_or_insert(err);
            }
            Err(err) => return Err(err),
        }
    }
    cancelled.map_or(Ok(()), Err)
}
