//! KeyViewer - keymap and layout parsing CLI
//!
//! This binary parses ZMK keymap files and KLE layout descriptions into a
//! normalized, renderable keyboard description and manages a small JSON
//! store of the results.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use keyviewer::cli::{
    CustomNameArgs, LabelArgs, LayoutArgs, ListArgs, ParseArgs, ShowArgs,
};

/// KeyViewer - keymap and layout parsing CLI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a ZMK keymap file into layers of display labels
    Parse(ParseArgs),
    /// Parse a KLE layout file into absolute key geometry
    Layout(LayoutArgs),
    /// Resolve a single binding expression to its display label
    Label(LabelArgs),
    /// List stored keymaps and layouts
    List(ListArgs),
    /// Print a stored keymap or layout as JSON
    Show(ShowArgs),
    /// Set or clear a custom key label on a stored keymap
    CustomName(CustomNameArgs),
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match &cli.command {
        Command::Parse(args) => args.execute(),
        Command::Layout(args) => args.execute(),
        Command::Label(args) => args.execute(),
        Command::List(args) => args.execute(),
        Command::Show(args) => args.execute(),
        Command::CustomName(args) => args.execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
