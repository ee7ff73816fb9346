//! Command implementations for the ticker symbol generator CLI
//!
//! This module contains the main command execution logic: logging setup,
//! layered configuration, running the pipeline and the final summary.

use crate::app::services::pipeline::{GenerationStats, ListingPipeline};
use crate::cli::args::{Args, Commands, GenerateArgs};
use crate::config::Config;
use crate::Result;
use colored::*;
use indicatif::HumanDuration;
use tracing::{debug, info};

/// Main command runner
///
/// 1. Set up logging
/// 2. Load and validate the layered configuration
/// 3. Run the generation pipeline
/// 4. Print a summary
pub async fn run(args: Args) -> Result<GenerationStats> {
    match args.get_command() {
        Commands::Generate(generate) => run_generate(generate).await,
    }
}

async fn run_generate(args: GenerateArgs) -> Result<GenerationStats> {
    setup_logging(&args)?;

    info!("Starting ticker symbol generation");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = load_configuration(&args)?;
    debug!("Loaded configuration: {:?}", config);

    let pipeline = ListingPipeline::new(config).with_progress(args.show_progress());
    let stats = pipeline.run().await?;

    if !args.quiet {
        print_summary(pipeline.config(), &stats);
    }

    Ok(stats)
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &GenerateArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ticker_symbols={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using the layered approach (defaults -> file -> args)
fn load_configuration(args: &GenerateArgs) -> Result<Config> {
    match &args.config_file {
        Some(path) => info!("Using config file: {}", path.display()),
        None => debug!("No config file given, checking the default location"),
    }

    let mut config = Config::load(args.config_file.as_deref())?;
    args.apply_to(&mut config);
    config.validate()?;

    Ok(config)
}

/// Print the colored end-of-run report
fn print_summary(config: &Config, stats: &GenerationStats) {
    let title = if stats.dry_run {
        "Dry Run Summary"
    } else {
        "Generation Summary"
    };
    println!("\n{}", title.bright_green().bold());

    for report in &stats.sources {
        println!(
            "  {} {} -> {}",
            "•".bright_blue(),
            report.file_name.bright_white(),
            report.output_path.display().to_string().bright_white().bold()
        );
        println!(
            "      {} constants, {} rows read, {} dropped",
            report.normalize.kept.to_string().bright_white().bold(),
            report.parse.total_rows,
            report.normalize.dropped()
        );

        if report.parse.coercion_failures() > 0 {
            println!(
                "      {} cells fell back to zero values",
                report.parse.coercion_failures().to_string().yellow().bold()
            );
        }
    }

    println!(
        "  Total: {} constants in {} package(s), {}",
        stats.total_listings().to_string().bright_white().bold(),
        stats.sources.len(),
        format_size(stats.total_bytes_written())
    );
    println!(
        "  Language: {}, processing time: {}",
        format!("{:?}", config.output.language).to_lowercase(),
        HumanDuration(stats.processing_time)
    );

    if stats.dry_run {
        println!("  {}", "No files were written".yellow());
    }
    println!();
}

/// Format a byte count in human-readable form
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.2} {}", size, UNITS[unit_index])
    }
}
