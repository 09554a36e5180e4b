//! CLI binary for IGC Metadata
//!
//! Prints the metadata of IGC files and optionally exports a catalog.

use anyhow::Result;
use clap::{Arg, Command};
use igc_meta::{
    expand_input_paths, export_catalog, format_summary, sort_by_date_desc, summarize_files,
    ExportOptions,
};
use std::path::Path;
use tracing::debug;

fn long_version() -> String {
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) if !sha.is_empty() => format!("{} ({})", env!("CARGO_PKG_VERSION"), sha),
        _ => env!("CARGO_PKG_VERSION").to_string(),
    }
}

fn build_command() -> Command {
    Command::new("IGC Meta")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version())
        .about("Extract pilot, date, site, glider and flight window from IGC flight logs.")
        .arg(
            Arg::new("files")
                .help("IGC files or directories to scan. Directories are searched recursively for .igc files (case-insensitive). Supports globbing.")
                .required(false)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug output and detailed parsing information")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("csv")
                .long("csv")
                .help("Export the catalog to flights.csv")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Export the catalog to flights.json (requires the `json` feature)")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .help("Directory for exported files (default: current directory)")
                .value_name("DIR"),
        )
}

fn setup_logging(debug: bool) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("igc_meta={}", level)));

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
}

fn main() -> Result<()> {
    let matches = build_command().get_matches();

    let debug = matches.get_flag("debug");
    setup_logging(debug);

    let file_patterns: Vec<String> = match matches.get_many::<String>("files") {
        Some(files) => files.cloned().collect(),
        None => {
            build_command().print_help()?;
            println!();
            return Ok(());
        }
    };

    let export_options = ExportOptions {
        csv: matches.get_flag("csv"),
        json: matches.get_flag("json"),
        output_dir: Some(
            matches
                .get_one::<String>("output-dir")
                .cloned()
                .unwrap_or_else(|| ".".to_string()),
        ),
    };

    debug!("Input patterns: {:?}", file_patterns);

    let input_files = match expand_input_paths(&file_patterns) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("Error expanding input paths: {e:#}");
            std::process::exit(1);
        }
    };

    if input_files.is_empty() {
        eprintln!("Error: No .igc files found in the specified input paths.");
        eprintln!("Input patterns were: {file_patterns:?}");
        std::process::exit(1);
    }

    debug!("Found {} IGC files to process", input_files.len());

    let mut summaries = summarize_files(&input_files);
    sort_by_date_desc(&mut summaries);

    for (index, summary) in summaries.iter().enumerate() {
        if index > 0 {
            println!();
        }
        println!("{}", format_summary(summary));
    }

    let report = export_catalog(&summaries, Path::new("flights"), &export_options)?;
    if let Some(path) = report.csv_path {
        println!("\nExported catalog to: {}", path.display());
    }
    if let Some(path) = report.json_path {
        println!("\nExported catalog to: {}", path.display());
    }

    Ok(())
}
