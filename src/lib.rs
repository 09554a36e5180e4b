//! IGC Metadata Library
//!
//! A Rust library for extracting flight metadata from IGC flight recorder
//! logs. Header dialects from different logger manufacturers (XCTrack,
//! SkyTraxx, ...) are resolved to one set of fields, and the flight window is
//! derived from the first and last position fix.
//!
//! # Features
//!
//! - **`csv`** (default): Enable CSV export of flight catalogs
//! - **`cli`** (default): Build the command-line interface binary
//! - **`json`**: Enable JSON export of flight catalogs
//! - **`serde`**: Enable serialization/deserialization of types
//!
//! # Quick Start
//!
//! Parse a single file:
//! ```rust,no_run
//! use igc_meta::parse_igc_file;
//! use std::path::Path;
//!
//! let info = parse_igc_file(Path::new("2025-01-01-XCT-001.igc"));
//! println!("{} flew {} on {}", info.pilot, info.glider_model, info.date);
//! println!("Took off at {} for {}", info.start_time, info.duration);
//! ```
//!
//! Tell unreadable files apart from files without metadata:
//! ```rust,no_run
//! use igc_meta::{parse_igc_file_outcome, ParseOutcome};
//! use std::path::Path;
//!
//! match parse_igc_file_outcome(Path::new("flight.igc")) {
//!     ParseOutcome::Parsed(info) => println!("pilot: {}", info.pilot),
//!     ParseOutcome::Unreadable(err) => eprintln!("skipped: {}", err),
//! }
//! ```
//!
//! Catalog a directory and export it:
//! ```rust,no_run
//! use igc_meta::{export_catalog, scan_directory, ExportOptions};
//! use std::path::Path;
//!
//! let flights = scan_directory(Path::new("igc_storage")).unwrap();
//! let options = ExportOptions {
//!     csv: true,
//!     json: false,
//!     output_dir: Some("reports".to_string()),
//! };
//! let report = export_catalog(&flights, Path::new("flights"), &options).unwrap();
//! if let Some(path) = report.csv_path {
//!     println!("Exported to: {}", path.display());
//! }
//! ```
//!
//! # Public API
//!
//! ## Parsing Functions
//! - [`parse_igc_file`] - Parse a file, unreadable files yield an empty record
//! - [`parse_igc_file_outcome`] - Parse a file, reporting unreadable sources
//! - [`parse_igc_reader`] - Parse from any buffered reader
//! - [`parse_igc_bytes`] - Parse from memory
//! - [`FlightParser`] - Low-level line-by-line API
//!
//! ## Data Types
//! - [`FlightInfo`] - The six extracted fields
//! - [`ParseOutcome`] - Parsed record or unreadable source
//! - [`FlightSummary`] - Catalog row with filename and combined date/time
//! - [`ExportOptions`] - Configuration for export operations
//!
//! ## Catalog Functions
//! - [`scan_directory`] - Summarize all IGC files in a directory, newest first
//! - [`expand_input_paths`] - Expand files, directories and globs
//! - [`summarize_igc_file`] - One catalog row per file
//!
//! ## Export Functions
//! - [`export_catalog`] - Export in all enabled formats
//! - [`compute_export_paths`] - Helper for consistent path computation

pub mod catalog;
pub mod error;
pub mod export;
pub mod parser;
pub mod types;

#[allow(ambiguous_glob_reexports)]
pub use catalog::*;
#[allow(ambiguous_glob_reexports)]
pub use error::*;
#[allow(ambiguous_glob_reexports)]
pub use export::*;
#[allow(ambiguous_glob_reexports)]
pub use parser::*;
#[allow(ambiguous_glob_reexports)]
pub use types::*;

pub use anyhow::Result;
