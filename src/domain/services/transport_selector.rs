//! Transport selection policy.
//!
//! Local availability is probed once per run and fixed at construction; the
//! per-target override is checked on every call.

use crate::domain::entities::Target;
use crate::domain::value_objects::TransportKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportSelector {
    local_available: bool,
}

impl TransportSelector {
    pub fn new(local_available: bool) -> Self {
        Self { local_available }
    }

    /// Remote when the local client is missing or the target forces it.
    pub fn select(&self, target: &Target) -> TransportKind {
        if !self.local_available || target.force_remote {
            TransportKind::Remote
        } else {
            TransportKind::Local
        }
    }

    /// Whether any of `targets` will need the remote session
    pub fn needs_remote(&self, targets: &[Target]) -> bool {
        targets
            .iter()
            .any(|t| self.select(t) == TransportKind::Remote)
    }
}
