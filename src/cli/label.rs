//! Binding label resolution command.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{CliError, CliResult};
use crate::parser;

/// Resolve a single ZMK binding expression to its display label
#[derive(Debug, Clone, Args)]
pub struct LabelArgs {
    /// Binding expression (e.g., "&kp LC(LS(A))" or "&lt LOWER SPACE")
    #[arg(short, long, value_name = "EXPR")]
    pub expr: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct LabelResult {
    input: String,
    label: String,
}

impl LabelArgs {
    /// Execute the label command
    pub fn execute(&self) -> CliResult<()> {
        let result = LabelResult {
            input: self.expr.clone(),
            label: parser::convert_binding(&self.expr),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&result)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Input: {}", result.input);
            println!("Label: {}", result.label);
        }

        Ok(())
    }
}
