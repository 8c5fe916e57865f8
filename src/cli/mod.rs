//! CLI command implementations
//!
//! - `generate`: Test file generation
//! - `check`: Component API validation
//! - `schema`: JSON schema output
//! - `util`: Shared argument helpers

pub mod check;
pub mod generate;
pub mod schema;
pub mod util;

pub use check::cmd_check;
pub use generate::cmd_generate;
pub use schema::cmd_schema;
