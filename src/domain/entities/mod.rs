//! Domain Entities
//!
//! - `Target` - One sync unit: an HTML/script/stylesheet triple and its row
//! - `Profile` - The active connection profile for one invocation

mod profile;
mod target;

pub use profile::{DatabaseCredentials, Profile, SshCredentials, SshSettings};
pub use target::Target;
