use crate::types::FlightInfo;
use chrono::NaiveDateTime;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One row of a flight catalog: the parsed metadata of a file plus its name
/// and a combined local date/time for display and sorting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlightSummary {
    pub filename: String,
    pub pilot: String,
    pub date: String,
    pub start_time: String,
    /// `YYYY-MM-DD HH:MM` when both date and start time are known
    pub datetime: String,
    pub duration: String,
    pub location: String,
    pub glider_model: String,
}

impl FlightSummary {
    pub fn from_flight_info(filename: impl Into<String>, info: FlightInfo) -> Self {
        let datetime = combine_date_time(&info.date, &info.start_time);
        Self {
            filename: filename.into(),
            pilot: info.pilot,
            date: info.date,
            start_time: info.start_time,
            datetime,
            duration: info.duration,
            location: info.location,
            glider_model: info.glider_model,
        }
    }

    /// Row for a file that could not be read: only the filename is known
    pub fn unreadable(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            ..Self::default()
        }
    }
}

/// Join a normalized date and start time into `YYYY-MM-DD HH:MM`.
///
/// Falls back to the raw `"{date} {time}"` text if the pair does not parse,
/// and to an empty string if either half is missing.
pub fn combine_date_time(date: &str, time: &str) -> String {
    if date.is_empty() || time.is_empty() {
        return String::new();
    }

    let raw = format!("{} {}", date, time);
    match NaiveDateTime::parse_from_str(&raw, "%Y-%m-%d %H:%M:%S") {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw,
    }
}
