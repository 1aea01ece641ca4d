//! Custom key name editing command.

use clap::Args;
use std::path::PathBuf;

use crate::cli::common::{open_store, CliError, CliResult};

/// Set or clear a custom key label on a stored keymap
#[derive(Debug, Clone, Args)]
pub struct CustomNameArgs {
    /// Name of the stored keymap
    #[arg(short, long, value_name = "NAME")]
    pub keymap: String,

    /// Layer index (0-based)
    #[arg(short, long, value_name = "INDEX")]
    pub layer: usize,

    /// Key index (0-based, matching the physical layout)
    #[arg(short = 'i', long, value_name = "INDEX")]
    pub key: usize,

    /// New label; omit or pass an empty string to clear the override
    #[arg(long, value_name = "LABEL")]
    pub label: Option<String>,

    /// Data directory override for the store
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output the updated keymap as JSON
    #[arg(long)]
    pub json: bool,
}

impl CustomNameArgs {
    /// Execute the custom-name command
    pub fn execute(&self) -> CliResult<()> {
        let store = open_store(self.data_dir.as_deref())?;
        let label = self.label.as_deref().unwrap_or("");

        let keymap = store
            .set_custom_name(&self.keymap, self.layer, self.key, label)
            .map_err(|e| {
                // A missing store file surfaces as io::ErrorKind::NotFound
                let missing = e
                    .root_cause()
                    .downcast_ref::<std::io::Error>()
                    .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound);
                if missing {
                    CliError::not_found(format!("{e:#}"))
                } else {
                    CliError::validation(format!("{e:#}"))
                }
            })?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&keymap)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if label.is_empty() {
            println!(
                "Cleared custom name on '{}' layer {} key {}",
                self.keymap, self.layer, self.key
            );
        } else {
            println!(
                "Set custom name '{label}' on '{}' layer {} key {}",
                self.keymap, self.layer, self.key
            );
        }

        Ok(())
    }
}
