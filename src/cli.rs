//! CLI definitions: argument parsing, subcommands, and help text.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  plant-doctor                          Launch the interactive TUI
  plant-doctor analyze leaf.jpg         Analyze an image, print the report
  plant-doctor analyze leaf.jpg --json  Print the canonical JSON export
  plant-doctor analyze leaf.jpg --save  Also write the export file
  plant-doctor info \"maize stem borer\"  Ask about a disease by name
  plant-doctor config                   Show resolved backend settings
  plant-doctor completions bash         Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "A terminal client for the plant-disease diagnosis backend",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a leaf image and print the diagnosis report
    Analyze {
        /// Path to a PNG or JPEG image
        image: PathBuf,
        /// Print the canonical JSON export instead of the rendered report
        #[arg(long)]
        json: bool,
        /// Write the JSON export file and print its path
        #[arg(long)]
        save: bool,
    },
    /// Ask the assistant about a disease by name
    Info {
        /// Disease name (e.g. "maize stem borer")
        disease: String,
    },
    /// Show resolved backend URL and timeout
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}
