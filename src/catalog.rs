//! Batch scanning of IGC files
//!
//! Turns files, directories and glob patterns into flight summaries. A single
//! unreadable file never aborts a scan; it shows up as a filename-only row.

use crate::error::IgcError;
use crate::parser::parse_igc_file_outcome;
use crate::types::FlightSummary;
use anyhow::{Context, Result};
use glob::glob;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Maximum recursion depth to prevent stack overflow
const MAX_RECURSION_DEPTH: usize = 100;

/// True for paths with an `.igc` extension, case-insensitive
pub fn is_igc_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("igc"))
        .unwrap_or(false)
}

/// Check that an explicitly named input exists and is an IGC file
pub fn validate_input(path: &Path) -> crate::error::Result<()> {
    if !path.exists() {
        return Err(IgcError::NotFound(path.to_path_buf()));
    }
    if !is_igc_file(path) {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("none");
        return Err(IgcError::UnsupportedExtension(ext.to_string()));
    }
    Ok(())
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string()
}

/// Parse one file into a catalog row; unreadable files keep only their name
pub fn summarize_igc_file(path: &Path) -> FlightSummary {
    let filename = file_name_of(path);
    match parse_igc_file_outcome(path).into_result() {
        Ok(info) => {
            let summary = FlightSummary::from_flight_info(filename, info);
            debug!("Extracted info for {}: {:?}", summary.filename, summary);
            summary
        }
        Err(e) => {
            warn!("Error extracting info for {}: {}", filename, e);
            FlightSummary::unreadable(filename)
        }
    }
}

/// Sort newest flights first; undated flights go last, ties by filename
pub fn sort_by_date_desc(summaries: &mut [FlightSummary]) {
    summaries.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| a.filename.cmp(&b.filename))
    });
}

/// Summarize every `.igc` file directly inside `dir`, newest first
pub fn scan_directory(dir: &Path) -> Result<Vec<FlightSummary>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {:?}", dir))?;

    let mut summaries = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to read entry in directory: {:?}", dir))?
            .path();
        if path.is_file() && is_igc_file(&path) {
            summaries.push(summarize_igc_file(&path));
        }
    }

    sort_by_date_desc(&mut summaries);
    Ok(summaries)
}

/// Summarize a list of files in the order given
pub fn summarize_files(paths: &[PathBuf]) -> Vec<FlightSummary> {
    paths.iter().map(|path| summarize_igc_file(path)).collect()
}

/// Expand input paths to a list of IGC files.
///
/// Files are validated and kept, directories are searched recursively, and
/// arguments containing `*` or `?` are glob-expanded first. Missing paths and
/// non-IGC files are warned about and skipped. Files are returned as canonical
/// paths, each at most once.
pub fn expand_input_paths(input_paths: &[String]) -> Result<Vec<PathBuf>> {
    let mut visited = HashSet::new();
    expand_input_paths_with_depth(input_paths, &mut visited, 0)
}

fn expand_input_paths_with_depth(
    input_paths: &[String],
    visited: &mut HashSet<PathBuf>,
    depth: usize,
) -> Result<Vec<PathBuf>> {
    if depth > MAX_RECURSION_DEPTH {
        return Err(anyhow::anyhow!(
            "Maximum recursion depth exceeded ({})",
            MAX_RECURSION_DEPTH
        ));
    }

    let mut igc_files = Vec::new();

    for input_path_str in input_paths {
        if input_path_str.contains('*') || input_path_str.contains('?') {
            let paths = glob(input_path_str)
                .with_context(|| format!("Invalid glob pattern '{}'", input_path_str))?
                .collect::<std::result::Result<Vec<_>, _>>()
                .with_context(|| format!("Error expanding glob pattern '{}'", input_path_str))?;
            debug!("Glob pattern '{}' matched {} paths", input_path_str, paths.len());

            for path in paths {
                if let Some(path_str) = path.to_str() {
                    let sub_result = expand_input_paths_with_depth(
                        &[path_str.to_string()],
                        visited,
                        depth + 1,
                    )?;
                    igc_files.extend(sub_result);
                }
            }
            continue;
        }

        let input_path = Path::new(input_path_str);
        if input_path.is_dir() {
            let mut dir_files = find_igc_files_in_dir_with_depth(input_path, visited, depth + 1)?;
            igc_files.append(&mut dir_files);
            continue;
        }

        match validate_input(input_path) {
            Ok(()) => push_unique_file(input_path, visited, &mut igc_files),
            Err(e) => warn!("Skipping {:?}: {}", input_path, e),
        }
    }

    Ok(igc_files)
}

/// Recursively find IGC files, protecting against symlink cycles and depth overflow
fn find_igc_files_in_dir_with_depth(
    dir_path: &Path,
    visited: &mut HashSet<PathBuf>,
    depth: usize,
) -> Result<Vec<PathBuf>> {
    if depth > MAX_RECURSION_DEPTH {
        return Err(anyhow::anyhow!(
            "Maximum recursion depth exceeded in directory traversal ({})",
            MAX_RECURSION_DEPTH
        ));
    }

    let mut igc_files = Vec::new();

    let canonical_dir = dir_path
        .canonicalize()
        .with_context(|| format!("Failed to canonicalize directory: {:?}", dir_path))?;
    if !visited.insert(canonical_dir) {
        return Ok(igc_files);
    }

    let entries = match fs::read_dir(dir_path) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Could not read directory {:?}: {}", dir_path, e);
            return Ok(igc_files);
        }
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .collect();
    paths.sort();

    for path in paths {
        if path.is_dir() {
            let mut sub_files = find_igc_files_in_dir_with_depth(&path, visited, depth + 1)?;
            igc_files.append(&mut sub_files);
        } else if path.is_file() && is_igc_file(&path) {
            push_unique_file(&path, visited, &mut igc_files);
        }
    }

    Ok(igc_files)
}

/// Record a file by its canonical path, once
fn push_unique_file(path: &Path, visited: &mut HashSet<PathBuf>, igc_files: &mut Vec<PathBuf>) {
    match path.canonicalize() {
        Ok(canonical) => {
            if visited.insert(canonical.clone()) {
                igc_files.push(canonical);
            } else {
                debug!("Skipping duplicate input {:?}", path);
            }
        }
        Err(e) => warn!("Skipping {:?}: {}", path, e),
    }
}
