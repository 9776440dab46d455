//! Application run modes: logger init, one-shot subcommands, TUI launch.

use std::io;
use std::path::Path;
use std::sync::Arc;

use crate::cli::Args;
use crate::core;
use crate::core::api::ApiClient;
use crate::core::config::Config;
use crate::core::format::{BulletItem, Segment};
use crate::core::report::{self, DiseaseReport, NO_INFORMATION};

/// Initialize env_logger. In TUI mode, writes to file to avoid corrupting the display.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level));

    if args.command.is_none() {
        let log_path = core::paths::cache_dir().map(|d| d.join(format!("{}.log", core::app::NAME)));
        if let Some(path) = log_path
            && path.parent().is_some_and(|p| std::fs::create_dir_all(p).is_ok())
            && let Ok(file) = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
        {
            logger.target(env_logger::Target::Pipe(Box::new(file)));
        }
    }
    let _ = logger.try_init();
}

/// Flatten a bullet item to terminal text (markers already consumed).
fn item_text(item: &BulletItem) -> String {
    item.iter().map(Segment::text).collect()
}

fn print_report(report: &DiseaseReport) {
    println!("Detected disease: {}", report.predicted_class);
    println!(
        "Confidence: {}% ({})",
        report.confidence.percentage,
        report.confidence.bucket.label()
    );
    for panel in &report.panels {
        println!("\n{}", panel.title);
        if panel.items.is_empty() {
            println!("  {}", NO_INFORMATION);
        } else {
            for item in &panel.items {
                println!("  - {}", item_text(item));
            }
        }
    }
}

/// One-shot analysis: upload the image, print the report (or its JSON
/// export), optionally save the export file.
pub async fn run_analyze(
    image: &Path,
    json: bool,
    save: bool,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = ApiClient::new(config)?;
    log::info!("analyzing {}", image.display());
    let result = client.analyze_image(image).await?;

    if json {
        println!("{}", report::export_json(&result));
    } else {
        print_report(&DiseaseReport::from_result(&result, config.strip_quotes));
    }
    if save {
        let path = report::save_report(&result)?;
        eprintln!("Saved {}", path.display());
    }
    Ok(())
}

/// One-shot chatbot query: print the formatted answer, one line per
/// source line, emphasis markers stripped.
pub async fn run_info(disease: &str, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let disease = disease.trim();
    if disease.is_empty() {
        eprintln!("Error: empty disease name");
        std::process::exit(1);
    }
    let client = ApiClient::new(config)?;
    let answer = client.disease_info(disease).await?;
    for line in core::format::format_text(&answer) {
        println!("{}", item_text(&line));
    }
    Ok(())
}

/// Show resolved configuration (base URL, timeout, quote handling).
pub fn show_config(config: &Config) {
    println!("{} {}", core::app::NAME, core::app::VERSION);
    println!("Backend URL:      {}", config.base_url);
    println!("Request timeout:  {}s", config.timeout_secs);
    println!(
        "Checklist quotes: {}",
        if config.strip_quotes { "stripped" } else { "kept" }
    );
}

/// Launch the TUI in a blocking thread. Returns on panic or IO error.
pub async fn launch_tui(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let config = Arc::new(config);
    let config_clone = config.clone();
    let join_result: Result<io::Result<()>, tokio::task::JoinError> =
        tokio::task::spawn_blocking(move || crate::tui::run(config_clone)).await;

    match join_result {
        Ok(io_result) => io_result?,
        Err(join_err) => {
            if let Ok(panic) = join_err.try_into_panic() {
                let msg = if let Some(s) = panic.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic.downcast_ref::<String>() {
                    s.clone()
                } else {
                    format!("{:?}", panic)
                };
                eprintln!("TUI panic: {}", msg);
            }
            return Err(
                Box::new(io::Error::other("TUI thread panicked")) as Box<dyn std::error::Error>
            );
        }
    }
    Ok(())
}
