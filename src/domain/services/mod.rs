//! Domain Services
//!
//! - `assembler` - Inline script and stylesheet around the HTML body
//! - `statement` - Render the update statement into client arguments
//! - `transport_selector` - Pick local or remote delivery per target

pub mod assembler;
pub mod statement;
pub mod transport_selector;

pub use assembler::ArtifactAssembler;
pub use statement::{build_statement, RenderedStatement, STATEMENT_TEMPLATE};
pub use transport_selector::TransportSelector;
