//! Layout parsing command.

use clap::Args;
use std::path::PathBuf;

use crate::cli::common::{open_store, CliError, CliResult};
use crate::parser;

/// Parse a KLE layout file into absolute key geometry
#[derive(Debug, Clone, Args)]
pub struct LayoutArgs {
    /// Path to the KLE JSON file (strict JSON or raw data form)
    #[arg(short, long, value_name = "FILE")]
    pub file: PathBuf,

    /// Layout name (defaults to the file stem)
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Save the parsed layout to the store
    #[arg(long)]
    pub save: bool,

    /// Data directory override for the store
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl LayoutArgs {
    /// Execute the layout command
    pub fn execute(&self) -> CliResult<()> {
        let mut layout = parser::parse_kle_layout_file(&self.file)
            .map_err(|e| CliError::io(format!("Failed to parse layout: {e}")))?;

        if let Some(name) = &self.name {
            layout.name = name.clone();
        }

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&layout)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Layout: {} ({} keys)", layout.name, layout.keys.len());
            for key in &layout.keys {
                println!(
                    "  #{:<3} x={:<5} y={:<5} w={} h={} r={}",
                    key.index, key.x, key.y, key.w, key.h, key.r
                );
            }
        }

        if self.save {
            let store = open_store(self.data_dir.as_deref())?;
            let path = store
                .save_layout(&layout)
                .map_err(|e| CliError::io(format!("Failed to save layout: {e}")))?;
            eprintln!("Saved to {}", path.display());
        }

        Ok(())
    }
}
