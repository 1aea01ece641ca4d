//! Stored entry display command.

use clap::Args;
use std::path::PathBuf;

use crate::cli::common::{open_store, CliError, CliResult};

/// Print a stored keymap or layout as JSON
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Name of the stored entry
    #[arg(short, long, value_name = "NAME")]
    pub name: String,

    /// Show a layout instead of a keymap
    #[arg(long)]
    pub layout: bool,

    /// Data directory override for the store
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self) -> CliResult<()> {
        let store = open_store(self.data_dir.as_deref())?;

        let json = if self.layout {
            let layout = store
                .load_layout(&self.name)
                .map_err(|e| CliError::not_found(e.to_string()))?;
            serde_json::to_string_pretty(&layout)
        } else {
            let keymap = store
                .load_keymap(&self.name)
                .map_err(|e| CliError::not_found(e.to_string()))?;
            serde_json::to_string_pretty(&keymap)
        }
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;

        println!("{json}");
        Ok(())
    }
}
