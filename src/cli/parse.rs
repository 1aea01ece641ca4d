//! Keymap parsing command.

use clap::Args;
use std::path::PathBuf;

use crate::cli::common::{open_store, CliError, CliResult};
use crate::parser;

/// Parse a ZMK keymap file into layers of display labels
#[derive(Debug, Clone, Args)]
pub struct ParseArgs {
    /// Path to the ZMK keymap file
    #[arg(short, long, value_name = "FILE")]
    pub file: PathBuf,

    /// Keymap name (defaults to the file stem)
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Save the parsed keymap to the store
    #[arg(long)]
    pub save: bool,

    /// Data directory override for the store
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ParseArgs {
    /// Execute the parse command
    pub fn execute(&self) -> CliResult<()> {
        let mut keymap = parser::parse_keymap_file(&self.file)
            .map_err(|e| CliError::io(format!("Failed to parse keymap: {e}")))?;

        if let Some(name) = &self.name {
            keymap.name = name.clone();
        }

        if keymap.layers.is_empty() {
            return Err(CliError::validation(format!(
                "No layer macros found in {}",
                self.file.display()
            )));
        }

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&keymap)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Keymap: {}", keymap.name);
            for (i, layer) in keymap.layers.iter().enumerate() {
                println!("  Layer {i}: {} ({} keys)", layer.name, layer.keys.len());
                println!("    {}", layer.keys.join(" | "));
            }
        }

        if self.save {
            let store = open_store(self.data_dir.as_deref())?;
            let path = store
                .save_keymap(&keymap)
                .map_err(|e| CliError::io(format!("Failed to save keymap: {e}")))?;
            eprintln!("Saved to {}", path.display());
        }

        Ok(())
    }
}
