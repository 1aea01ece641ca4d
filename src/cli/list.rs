//! Store listing command.

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::common::{open_store, CliError, CliResult};

/// List stored keymaps and layouts
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Data directory override for the store
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ListResult {
    keymaps: Vec<String>,
    layouts: Vec<String>,
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let store = open_store(self.data_dir.as_deref())?;

        let result = ListResult {
            keymaps: store
                .list_keymaps()
                .map_err(|e| CliError::io(format!("Failed to list keymaps: {e}")))?,
            layouts: store
                .list_layouts()
                .map_err(|e| CliError::io(format!("Failed to list layouts: {e}")))?,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&result)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Keymaps:");
            for name in &result.keymaps {
                println!("  {name}");
            }
            println!("Layouts:");
            for name in &result.layouts {
                println!("  {name}");
            }
        }

        Ok(())
    }
}
