// Declare modules
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod pipeline;
pub mod processor;
pub mod scanner;
pub mod sorter;
pub mod writer;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::LevelFilter;

use self::cli::Cli;

/// Parses arguments, runs the pipeline, and reports the outcome.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let args = Cli::parse();

    // 2. Set Up Logging
    init_logging(args.quiet);

    // 3. Build Options (preset merged under CLI values)
    let options = config::build_options(args)?;

    // 4. Run the Pipeline
    let summary = pipeline::aggregate(options)?;

    // 5. Report
    for warning in &summary.warnings {
        log::warn!("{}", warning);
    }
    println!(
        "Aggregate success, {} files merged into {}",
        summary.files_processed,
        summary.output_file.display()
    );

    Ok(())
}

fn init_logging(quiet: bool) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    if quiet {
        builder.filter_level(LevelFilter::Off);
    }
    builder.format_timestamp(None).init();
}
