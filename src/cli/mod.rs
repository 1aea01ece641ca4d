//! CLI command handlers for KeyViewer.
//!
//! This module provides headless, scriptable access to the parsing and
//! storage core for automation, testing, and CI integration.

pub mod common;
pub mod custom_name;
pub mod label;
pub mod layout;
pub mod list;
pub mod parse;
pub mod show;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult};
pub use custom_name::CustomNameArgs;
pub use label::LabelArgs;
pub use layout::LayoutArgs;
pub use list::ListArgs;
pub use parse::ParseArgs;
pub use show::ShowArgs;
