#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Semantic fields extracted from an IGC file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FlightField {
    Pilot,
    Date,
    Location,
    GliderModel,
    StartTime,
    Duration,
}

impl FlightField {
    /// Every field, in the order callers see them
    pub const ALL: [FlightField; 6] = [
        FlightField::Pilot,
        FlightField::Date,
        FlightField::Location,
        FlightField::GliderModel,
        FlightField::StartTime,
        FlightField::Duration,
    ];

    /// Field name as exposed to consumers of the flat record
    pub fn name(self) -> &'static str {
        match self {
            FlightField::Pilot => "pilot",
            FlightField::Date => "date",
            FlightField::Location => "location",
            FlightField::GliderModel => "glider_model",
            FlightField::StartTime => "start_time",
            FlightField::Duration => "duration",
        }
    }
}

/// Metadata parsed from a single IGC file.
///
/// Every field is always present; missing or malformed data is an empty string.
/// `date` is `YYYY-MM-DD`, `start_time` is `HH:MM:SS` and `duration` is an
/// elapsed time such as `1:15:15`. `start_time` and `duration` are derived
/// together and are either both set or both empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlightInfo {
    pub pilot: String,
    pub date: String,
    pub location: String,
    pub glider_model: String,
    pub start_time: String,
    pub duration: String,
}

impl FlightInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a field value by its semantic name
    pub fn get(&self, field: FlightField) -> &str {
        match field {
            FlightField::Pilot => &self.pilot,
            FlightField::Date => &self.date,
            FlightField::Location => &self.location,
            FlightField::GliderModel => &self.glider_model,
            FlightField::StartTime => &self.start_time,
            FlightField::Duration => &self.duration,
        }
    }

    pub(crate) fn set(&mut self, field: FlightField, value: String) {
        let slot = match field {
            FlightField::Pilot => &mut self.pilot,
            FlightField::Date => &mut self.date,
            FlightField::Location => &mut self.location,
            FlightField::GliderModel => &mut self.glider_model,
            FlightField::StartTime => &mut self.start_time,
            FlightField::Duration => &mut self.duration,
        };
        *slot = value;
    }

    /// Iterate over `(name, value)` pairs for all six fields
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        FlightField::ALL
            .into_iter()
            .map(move |field| (field.name(), self.get(field)))
    }

    /// True when nothing could be extracted
    pub fn is_empty(&self) -> bool {
        FlightField::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    /// True when a fix-time window was resolved
    pub fn has_flight_window(&self) -> bool {
        !self.start_time.is_empty() && !self.duration.is_empty()
    }
}
