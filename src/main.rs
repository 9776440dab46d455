//! # Plant Doctor - terminal client for leaf-disease diagnosis
//!
//! Entry point: loads the environment, parses the CLI, and dispatches to
//! one-shot subcommands or the interactive TUI (the default).

mod cli;
mod core;
mod run;
mod tui;

use clap::{CommandFactory, Parser};
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = cli::Args::parse();
    run::init_logger(&args);

    // Completions need no backend configuration
    if let Some(cli::Commands::Completions { shell }) = args.command {
        let mut cmd = cli::Args::command();
        let name = cmd.get_name().to_string();
        cli::generate(shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    // Print user-friendly message on config errors; exit uses Display not Debug
    let config = core::config::load().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    match args.command {
        Some(cli::Commands::Analyze { image, json, save }) => {
            run::run_analyze(&image, json, save, &config).await
        }
        Some(cli::Commands::Info { disease }) => run::run_info(&disease, &config).await,
        Some(cli::Commands::Config) => {
            run::show_config(&config);
            Ok(())
        }
        // Completions returned above
        Some(cli::Commands::Completions { .. }) => Ok(()),
        None => run::launch_tui(config).await,
    }
}
