use crate::error::IgcError;
use crate::parser::fix::FixTimeTracker;
use crate::parser::header::resolve_header_line;
use crate::parser::line::{classify_line, IgcLines, RecordKind};
use crate::parser::time::resolve_flight_window;
use crate::types::{FlightInfo, ParseOutcome};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, trace, warn};

/// Single-pass IGC metadata extractor.
///
/// Fed one trimmed line at a time, then finalized once with [`FlightParser::finish`].
#[derive(Debug, Default)]
pub struct FlightParser {
    info: FlightInfo,
    fixes: FixTimeTracker,
}

impl FlightParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route one trimmed line to header or fix handling
    pub fn feed_line(&mut self, line: &str) {
        match classify_line(line) {
            RecordKind::Header => {
                resolve_header_line(line, &mut self.info);
            }
            RecordKind::Fix => self.fixes.record(line),
            RecordKind::Other => trace!("Skipping record: {}", line),
        }
    }

    /// Resolve the fix-time window and return the finished record
    pub fn finish(self) -> FlightInfo {
        let mut info = self.info;
        match resolve_flight_window(self.fixes.first_seen(), self.fixes.last_seen()) {
            Some(window) => {
                info.start_time = window.start_time();
                info.duration = window.duration();
            }
            None => {
                if self.fixes.fix_count() > 0 {
                    debug!(
                        "Unusable fix timestamps {:?}..{:?}, leaving flight window empty",
                        self.fixes.first_seen(),
                        self.fixes.last_seen()
                    );
                }
                info.start_time.clear();
                info.duration.clear();
            }
        }
        info
    }
}

fn try_parse_reader<R: BufRead>(reader: R) -> io::Result<FlightInfo> {
    let mut parser = FlightParser::new();
    for line in IgcLines::new(reader) {
        parser.feed_line(&line?);
    }
    Ok(parser.finish())
}

/// Parse an IGC file, distinguishing unreadable sources from parsed ones
pub fn parse_igc_file_outcome(file_path: &Path) -> ParseOutcome {
    let file = match File::open(file_path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return ParseOutcome::Unreadable(IgcError::NotFound(file_path.to_path_buf()));
        }
        Err(e) => return ParseOutcome::Unreadable(IgcError::Io(e)),
    };

    match try_parse_reader(BufReader::new(file)) {
        Ok(info) => {
            debug!("Parsed {:?}: {:?}", file_path, info);
            ParseOutcome::Parsed(info)
        }
        Err(e) => ParseOutcome::Unreadable(IgcError::Io(e)),
    }
}

/// Parse an IGC file.
///
/// Never fails: a file that cannot be opened or read yields an all-empty
/// record, the same as a file with no recognizable content. Use
/// [`parse_igc_file_outcome`] when the difference matters.
pub fn parse_igc_file(file_path: &Path) -> FlightInfo {
    let outcome = parse_igc_file_outcome(file_path);
    if let Some(err) = outcome.error() {
        warn!("Could not read {:?}: {}", file_path, err);
    }
    outcome.into_flight_info()
}

/// Parse IGC data from any buffered reader.
///
/// A read error part-way through collapses the result to an all-empty record.
pub fn parse_igc_reader<R: BufRead>(reader: R) -> FlightInfo {
    match try_parse_reader(reader) {
        Ok(info) => info,
        Err(e) => {
            warn!("Failed to read IGC stream: {}", e);
            FlightInfo::default()
        }
    }
}

/// Parse IGC data from memory
pub fn parse_igc_bytes(data: &[u8]) -> FlightInfo {
    parse_igc_reader(data)
}
