use crate::error::IgcError;
use crate::types::FlightInfo;

/// Result of parsing one IGC source with the strict entry points.
///
/// `Parsed` may still carry an all-empty record when the file had no
/// recognizable content; `Unreadable` means the source could not be opened
/// or read at all.
#[derive(Debug)]
pub enum ParseOutcome {
    Parsed(FlightInfo),
    Unreadable(IgcError),
}

impl ParseOutcome {
    pub fn is_readable(&self) -> bool {
        matches!(self, ParseOutcome::Parsed(_))
    }

    pub fn flight_info(&self) -> Option<&FlightInfo> {
        match self {
            ParseOutcome::Parsed(info) => Some(info),
            ParseOutcome::Unreadable(_) => None,
        }
    }

    pub fn error(&self) -> Option<&IgcError> {
        match self {
            ParseOutcome::Parsed(_) => None,
            ParseOutcome::Unreadable(err) => Some(err),
        }
    }

    pub fn into_result(self) -> Result<FlightInfo, IgcError> {
        match self {
            ParseOutcome::Parsed(info) => Ok(info),
            ParseOutcome::Unreadable(err) => Err(err),
        }
    }

    /// Collapse to the legacy record: unreadable sources become all-empty
    pub fn into_flight_info(self) -> FlightInfo {
        match self {
            ParseOutcome::Parsed(info) => info,
            ParseOutcome::Unreadable(_) => FlightInfo::default(),
        }
    }
}
