//! Export functionality for flight catalogs
//!
//! Writes flight summaries to CSV (feature `csv`) or JSON (feature `json`).

use crate::types::FlightSummary;
use crate::Result;
#[cfg(any(feature = "csv", feature = "json"))]
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Column order shared by every export format
pub const SUMMARY_COLUMNS: [&str; 8] = [
    "filename",
    "pilot",
    "date",
    "start_time",
    "datetime",
    "duration",
    "location",
    "glider_model",
];

/// Export options for controlling output formats
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    pub csv: bool,
    pub json: bool,
    pub output_dir: Option<String>,
}

/// Output paths that an export would write to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub csv_path: PathBuf,
    pub json_path: PathBuf,
}

/// Paths actually written by [`export_catalog`]
#[derive(Debug, Clone, Default)]
pub struct ExportReport {
    pub csv_path: Option<PathBuf>,
    pub json_path: Option<PathBuf>,
}

/// Compute output paths from a base name.
///
/// The directory is `output_dir` when set, otherwise the base's parent.
pub fn compute_export_paths(base: &Path, export_options: &ExportOptions) -> ExportPaths {
    let stem = base
        .file_stem()
        .and_then(|n| n.to_str())
        .unwrap_or("flights");

    let output_dir = match &export_options.output_dir {
        Some(dir) => PathBuf::from(dir),
        None => base.parent().map(Path::to_path_buf).unwrap_or_default(),
    };

    ExportPaths {
        csv_path: output_dir.join(format!("{}.csv", stem)),
        json_path: output_dir.join(format!("{}.json", stem)),
    }
}

fn summary_record(summary: &FlightSummary) -> [&str; 8] {
    [
        summary.filename.as_str(),
        summary.pilot.as_str(),
        summary.date.as_str(),
        summary.start_time.as_str(),
        summary.datetime.as_str(),
        summary.duration.as_str(),
        summary.location.as_str(),
        summary.glider_model.as_str(),
    ]
}

#[cfg(any(feature = "csv", feature = "json"))]
fn ensure_parent_dir(output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create output directory: {:?}", parent))?;
        }
    }
    Ok(())
}

/// Export flight summaries to a CSV file. Empty input writes nothing.
#[cfg(feature = "csv")]
pub fn export_to_csv(summaries: &[FlightSummary], output_path: &Path) -> Result<()> {
    use crate::error::IgcError;

    if summaries.is_empty() {
        return Ok(());
    }
    ensure_parent_dir(output_path)?;

    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("Failed to create CSV file: {:?}", output_path))?;

    writer
        .write_record(SUMMARY_COLUMNS)
        .map_err(|e| IgcError::Export(e.to_string()))?;
    for summary in summaries {
        writer
            .write_record(summary_record(summary))
            .map_err(|e| IgcError::Export(e.to_string()))?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to flush CSV file: {:?}", output_path))?;

    Ok(())
}

/// Export flight summaries to a pretty-printed JSON array. Empty input writes nothing.
#[cfg(feature = "json")]
pub fn export_to_json(summaries: &[FlightSummary], output_path: &Path) -> Result<()> {
    use std::io::{BufWriter, Write};

    if summaries.is_empty() {
        return Ok(());
    }
    ensure_parent_dir(output_path)?;

    let file = std::fs::File::create(output_path)
        .with_context(|| format!("Failed to create JSON file: {:?}", output_path))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, summaries)
        .with_context(|| format!("Failed to write JSON file: {:?}", output_path))?;
    writeln!(writer)?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush JSON file: {:?}", output_path))?;

    Ok(())
}

/// Export a catalog in every format enabled in `export_options`
pub fn export_catalog(
    summaries: &[FlightSummary],
    base: &Path,
    export_options: &ExportOptions,
) -> Result<ExportReport> {
    let paths = compute_export_paths(base, export_options);
    let mut report = ExportReport::default();

    if summaries.is_empty() {
        return Ok(report);
    }

    if export_options.csv {
        #[cfg(feature = "csv")]
        {
            export_to_csv(summaries, &paths.csv_path)?;
            report.csv_path = Some(paths.csv_path.clone());
        }
        #[cfg(not(feature = "csv"))]
        tracing::warn!("CSV export requested but the `csv` feature is disabled");
    }

    if export_options.json {
        #[cfg(feature = "json")]
        {
            export_to_json(summaries, &paths.json_path)?;
            report.json_path = Some(paths.json_path.clone());
        }
        #[cfg(not(feature = "json"))]
        tracing::warn!("JSON export requested but the `json` feature is disabled");
    }

    Ok(report)
}

/// Render one summary as the plain-text block printed by the CLI
pub fn format_summary(summary: &FlightSummary) -> String {
    let show = |value: &str| {
        if value.is_empty() {
            "-".to_string()
        } else {
            value.to_string()
        }
    };

    let record = summary_record(summary);
    let labels = [
        "File", "Pilot", "Date", "Start", "Date/time", "Duration", "Site", "Glider",
    ];
    labels
        .iter()
        .zip(record)
        .map(|(label, value)| format!("  {:<10} {}", format!("{}:", label), show(value)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_export_paths_defaults_to_parent() {
        let options = ExportOptions::default();
        let paths = compute_export_paths(Path::new("/data/flights/catalog.igc"), &options);
        assert_eq!(paths.csv_path, PathBuf::from("/data/flights/catalog.csv"));
        assert_eq!(paths.json_path, PathBuf::from("/data/flights/catalog.json"));
    }

    #[test]
    fn test_compute_export_paths_uses_output_dir() {
        let options = ExportOptions {
            output_dir: Some("/tmp/out".to_string()),
            ..ExportOptions::default()
        };
        let paths = compute_export_paths(Path::new("flights"), &options);
        assert_eq!(paths.csv_path, PathBuf::from("/tmp/out/flights.csv"));
    }

    #[test]
    fn test_format_summary_marks_missing_fields() {
        let summary = FlightSummary {
            filename: "a.igc".to_string(),
            pilot: "Jane".to_string(),
            ..FlightSummary::default()
        };
        let text = format_summary(&summary);
        assert!(text.contains("Pilot:     Jane"));
        assert!(text.contains("Glider:    -"));
    }
}
