//! Remote Session
//!
//! The single SSH connection shared by every remote target of one run.
//!
//! - `manager` - Lazy, mutex-guarded lifecycle (`SessionManager`)
//! - `ssh` - `ssh2` implementation of the remote shell ports

mod manager;
mod ssh;

pub use manager::{SessionManager, SessionState};
pub use ssh::{Ssh2Connector, Ssh2Shell};
