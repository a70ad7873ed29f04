//! CLI command implementations

pub mod create;
pub mod list;

pub use create::{CreateArgs, CreateCommand, Plan};
pub use list::ListCommand;
